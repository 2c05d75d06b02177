//! Test utilities and helpers for the qresult crates.
//!
//! This crate provides:
//! - A fluent builder for hand-written `CellsBatch` fixtures
//! - Seeded random batch generation and re-splitting of a batch into
//!   a chained batch sequence
//!
//! # Usage
//!
//! This crate is intended for use within the qresult test suites.

pub mod batch_builder;
pub mod data_gen;

pub use batch_builder::BatchBuilder;
