//! Error type for observable construction, fitting, and evaluation.
//!
//! Every failure is a contract violation by the caller and is reported
//! synchronously at the point it is detected. No partial results are
//! returned alongside an error.

use std::error::Error;
use std::fmt;

/// Errors from observable construction, fitting, and evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObservableError {
    /// The observable was configured inconsistently, e.g. the number of
    /// feature namers differs from the number of functions.
    Configuration {
        /// Description of the configuration problem.
        reason: String,
    },
    /// `transform`, `inverse`, or `feature_names` was called on a slot
    /// that has not been fitted yet.
    NotFitted {
        /// Name of the component that was used before fitting.
        component: &'static str,
    },
    /// A feature or name count disagrees with the fitted input dimension.
    ShapeMismatch {
        /// Which argument had the wrong width.
        context: &'static str,
        /// The count fixed at fit time.
        expected: usize,
        /// The count actually supplied.
        actual: usize,
    },
    /// The sample array is empty or contains non-finite values.
    InvalidInput {
        /// Description of the rejected input.
        reason: String,
    },
    /// A user-supplied observable function returned a column whose
    /// length differs from the number of samples.
    FunctionOutput {
        /// Position of the function in the evaluation order (0 = identity).
        function: usize,
        /// Number of samples in the input.
        expected: usize,
        /// Length of the column the function returned.
        actual: usize,
    },
}

impl fmt::Display for ObservableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { reason } => write!(f, "invalid configuration: {reason}"),
            Self::NotFitted { component } => {
                write!(f, "{component} is not fitted yet; call fit first")
            }
            Self::ShapeMismatch {
                context,
                expected,
                actual,
            } => write!(f, "{context}: expected {expected}, got {actual}"),
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::FunctionOutput {
                function,
                expected,
                actual,
            } => write!(
                f,
                "observable function {function} returned {actual} values for {expected} samples"
            ),
        }
    }
}

impl Error for ObservableError {}
