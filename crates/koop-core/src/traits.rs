//! The two-state observable lifecycle.
//!
//! An [`Observable`] is an unfitted configuration. Fitting it against
//! sample data yields a separate [`FittedObservable`] value, and only
//! that value can transform, invert, or name features. There is no
//! "fitted yet?" check on the typed path: an unfitted observable simply
//! has no `transform` method.

use indexmap::IndexMap;
use ndarray::{Array2, ArrayView2};

use crate::error::ObservableError;
use crate::scalar::Scalar;

/// An unfitted observable configuration.
///
/// `fit` borrows the configuration, so one configuration can be fitted
/// against several datasets.
pub trait Observable<A: Scalar> {
    /// The fitted form produced by [`fit`](Self::fit).
    type Fitted: FittedObservable<A>;

    /// Fit to an `(n_samples, n_features)` sample array.
    ///
    /// Fixes the input dimension and derives the output dimension.
    fn fit(&self, samples: ArrayView2<'_, A>) -> Result<Self::Fitted, ObservableError>;
}

/// A fitted observable: immutable after construction and safe to share
/// across threads for concurrent `transform` and `feature_names` calls.
///
/// # Object safety
///
/// This trait is object-safe; a fitting pipeline can hold heterogeneous
/// observables as `Box<dyn FittedObservable<A>>`.
pub trait FittedObservable<A: Scalar>: Send + Sync {
    /// Number of raw input features seen at fit time.
    fn n_input_features(&self) -> usize;

    /// Width of the feature space produced by [`transform`](Self::transform).
    fn n_output_features(&self) -> usize;

    /// Map `(n_samples, n_input_features)` samples into a new
    /// `(n_samples, n_output_features)` feature array of the same
    /// element type. The input is not modified.
    fn transform(&self, samples: ArrayView2<'_, A>) -> Result<Array2<A>, ObservableError>;

    /// Map features back to the sample space.
    fn inverse(&self, features: ArrayView2<'_, A>) -> Result<Array2<A>, ObservableError>;

    /// Names of the output features, column `j` of `transform` matching
    /// name `j`. `None` uses `x0`, `x1`, ... for the inputs.
    fn feature_names(&self, input_names: Option<&[&str]>) -> Result<Vec<String>, ObservableError>;

    /// Map each output feature name to its column index.
    ///
    /// If two columns share a name the first column wins.
    fn feature_columns(
        &self,
        input_names: Option<&[&str]>,
    ) -> Result<IndexMap<String, usize>, ObservableError> {
        let names = self.feature_names(input_names)?;
        let mut columns = IndexMap::with_capacity(names.len());
        for (col, name) in names.into_iter().enumerate() {
            columns.entry(name).or_insert(col);
        }
        Ok(columns)
    }
}
