//! Benchmark profiles for Koop observable transforms.
//!
//! Provides seeded sample generators and the reference observable set
//! used by the Criterion benches, so that every bench run measures the
//! same workload.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use koop_core::ObservableError;
use koop_obs::{CombinationMode, CustomObservables, ObservableFunction};
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic `(n_samples, n_features)` samples uniform in `[-1, 1)`.
pub fn uniform_samples(seed: u64, n_samples: usize, n_features: usize) -> Array2<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Array2::from_shape_simple_fn((n_samples, n_features), || {
        2.0 * rng.random::<f64>() - 1.0
    })
}

/// Reference observable set: squares, pairwise products, and a
/// three-way sum, over `mode` combinations.
pub fn reference_observables(
    mode: CombinationMode,
) -> Result<CustomObservables<f64>, ObservableError> {
    let functions = vec![
        ObservableFunction::unary(|a| a * a),
        ObservableFunction::binary(|a, b| a * b),
        ObservableFunction::new(3, |cols| &cols[0] + &cols[1] + &cols[2]),
    ];
    CustomObservables::new(functions, None, mode)
}
