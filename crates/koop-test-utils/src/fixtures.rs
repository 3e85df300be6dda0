//! Standard observable functions for tests.
//!
//! - [`add2`]: `a + b` (arity 2).
//! - [`mul2`]: `a * b` (arity 2).
//! - [`square`]: `a * a` (arity 1).
//! - [`sum3`]: `a + b + c` (arity 3).
//! - [`first_of`]: returns its first argument (any arity), which makes
//!   column provenance visible in the output.

use koop_obs::ObservableFunction;

pub fn add2() -> ObservableFunction<f64> {
    ObservableFunction::binary(|a, b| a + b)
}

pub fn mul2() -> ObservableFunction<f64> {
    ObservableFunction::binary(|a, b| a * b)
}

pub fn square() -> ObservableFunction<f64> {
    ObservableFunction::unary(|a| a * a)
}

pub fn sum3() -> ObservableFunction<f64> {
    ObservableFunction::new(3, |cols| &cols[0] + &cols[1] + &cols[2])
}

/// Arity-`k` function returning its first argument.
pub fn first_of(arity: usize) -> ObservableFunction<f64> {
    ObservableFunction::new(arity, |cols| cols[0].to_owned())
}

/// A mixed set of arities 1, 2, and 3.
pub fn mixed_arities() -> Vec<ObservableFunction<f64>> {
    vec![square(), mul2(), sum3()]
}
