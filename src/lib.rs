//! # u-sample
//!
//! Integer range and uniform sampling primitives.
//!
//! This crate provides the random-selection core shared by option-list
//! builders and test-fixture generators: half-open integer ranges, uniform
//! integer draws, and k-out-of-n sampling with and without replacement.
//! It knows nothing about widgets, pages, or any consumer domain.
//!
//! ## Modules
//!
//! - [`range`] — Half-open range validation and eager/lazy enumeration
//! - [`random`] — Seeded engines, uniform draws, partial Fisher-Yates
//! - [`sample`] — Sampling with and without replacement
//! - [`parse`] — Strict string/float coercion to integers and booleans
//! - [`options`] — Labeled option pairs from ranges
//!
//! ## Design Philosophy
//!
//! - **One range convention**: every interval is `[start, end_exclusive)`
//!   with `start <= end_exclusive`, applied uniformly
//! - **Deterministic when you want it**: every randomized operation has a
//!   `*_with` variant taking any [`rand::Rng`], so tests inject fixed seeds
//! - **Property-based testing**: invariants verified via proptest

pub mod error;
pub mod options;
pub mod parse;
pub mod random;
pub mod range;
pub mod sample;
