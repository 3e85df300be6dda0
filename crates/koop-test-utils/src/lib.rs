//! Test utilities for Koop development.
//!
//! Provides small sample arrays and a catalogue of standard observable
//! functions (see [`fixtures`]) so that tests across the workspace
//! exercise the same inputs.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;

use ndarray::Array2;

/// Build an `(n_samples, n_features)` array whose entry `(i, j)` is
/// `i * n_features + j + 1`, as `f64`.
pub fn ramp(n_samples: usize, n_features: usize) -> Array2<f64> {
    Array2::from_shape_fn((n_samples, n_features), |(i, j)| {
        (i * n_features + j + 1) as f64
    })
}

/// The two-sample, two-feature array `[[1, 2], [3, 4]]`.
pub fn two_by_two() -> Array2<f64> {
    ndarray::array![[1.0, 2.0], [3.0, 4.0]]
}
