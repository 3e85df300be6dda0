//! Validation at the array boundary.
//!
//! Runs before any observable logic: empty arrays and non-finite samples
//! are rejected with [`ObservableError::InvalidInput`], width
//! disagreements with [`ObservableError::ShapeMismatch`]. Feature arrays
//! are only checked for emptiness, since user functions may produce
//! non-finite values.

use ndarray::ArrayView2;

use crate::error::ObservableError;
use crate::scalar::Scalar;

/// Check that `samples` has at least one row and one column and that
/// every value is finite.
pub fn check_samples<A: Scalar>(samples: ArrayView2<'_, A>) -> Result<(), ObservableError> {
    check_features(samples)?;
    if let Some(((row, col), value)) = samples.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(ObservableError::InvalidInput {
            reason: format!("non-finite value {value:?} at row {row}, column {col}"),
        });
    }
    Ok(())
}

/// Check that a feature array has at least one row and one column.
///
/// Values are not inspected: a transform may legitimately emit NaN or
/// infinities, and `inverse` must accept whatever `transform` produced.
pub fn check_features<A: Scalar>(features: ArrayView2<'_, A>) -> Result<(), ObservableError> {
    let (n_samples, n_features) = features.dim();
    if n_samples == 0 {
        return Err(ObservableError::InvalidInput {
            reason: format!("found array with 0 samples (shape ({n_samples}, {n_features}))"),
        });
    }
    if n_features == 0 {
        return Err(ObservableError::InvalidInput {
            reason: format!("found array with 0 features (shape ({n_samples}, {n_features}))"),
        });
    }
    Ok(())
}

/// Check that a supplied count matches the count fixed at fit time.
pub fn check_feature_count(
    context: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), ObservableError> {
    if expected != actual {
        return Err(ObservableError::ShapeMismatch {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// The names `x0`, `x1`, ..., `x{n-1}`.
pub fn default_feature_names(n_features: usize) -> Vec<String> {
    (0..n_features).map(|i| format!("x{i}")).collect()
}

/// Resolve caller-supplied input feature names, falling back to
/// [`default_feature_names`] when none are given.
pub fn resolve_feature_names(
    input_names: Option<&[&str]>,
    n_features: usize,
) -> Result<Vec<String>, ObservableError> {
    match input_names {
        None => Ok(default_feature_names(n_features)),
        Some(names) => {
            check_feature_count("input feature names", n_features, names.len())?;
            Ok(names.iter().map(|s| s.to_string()).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};
    use proptest::prelude::*;

    #[test]
    fn accepts_finite_matrix() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        assert!(check_samples(x.view()).is_ok());
    }

    #[test]
    fn rejects_empty_rows() {
        let x = Array2::<f64>::zeros((0, 3));
        let err = check_samples(x.view()).unwrap_err();
        assert!(matches!(err, ObservableError::InvalidInput { .. }));
        assert!(err.to_string().contains("0 samples"));
    }

    #[test]
    fn rejects_empty_columns() {
        let x = Array2::<f32>::zeros((4, 0));
        let err = check_samples(x.view()).unwrap_err();
        assert!(err.to_string().contains("0 features"));
    }

    #[test]
    fn rejects_nan_with_position() {
        let x = array![[1.0, 2.0], [3.0, f64::NAN]];
        let err = check_samples(x.view()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 1, column 1"), "{msg}");
    }

    #[test]
    fn features_may_be_non_finite() {
        let y = array![[1.0, f64::NAN], [f64::NEG_INFINITY, 4.0]];
        assert!(check_features(y.view()).is_ok());
        assert!(check_features(Array2::<f64>::zeros((2, 0)).view()).is_err());
    }

    #[test]
    fn integer_arrays_pass() {
        let x = array![[1i64, -2], [3, 4]];
        assert!(check_samples(x.view()).is_ok());
    }

    #[test]
    fn default_names_are_indexed() {
        assert_eq!(default_feature_names(3), vec!["x0", "x1", "x2"]);
        assert!(default_feature_names(0).is_empty());
    }

    #[test]
    fn resolve_rejects_wrong_count() {
        let err = resolve_feature_names(Some(&["a"]), 2).unwrap_err();
        assert_eq!(
            err,
            ObservableError::ShapeMismatch {
                context: "input feature names",
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn resolve_passes_names_through() {
        let names = resolve_feature_names(Some(&["p", "v"]), 2).unwrap();
        assert_eq!(names, vec!["p", "v"]);
    }

    proptest! {
        #[test]
        fn nan_is_located(
            rows in 1usize..6,
            cols in 1usize..6,
            r in 0usize..6,
            c in 0usize..6,
        ) {
            let (r, c) = (r % rows, c % cols);
            let mut x = Array2::<f64>::ones((rows, cols));
            prop_assert!(check_samples(x.view()).is_ok());
            x[[r, c]] = f64::NAN;
            let msg = check_samples(x.view()).unwrap_err().to_string();
            let expected = format!("row {r}, column {c}");
            prop_assert!(msg.contains(&expected), "{}", msg);
        }
    }
}
