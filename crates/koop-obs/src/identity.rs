//! The identity observable.
//!
//! Returns its input unchanged. It defines the minimal contract every
//! other observable extends, and satisfies `inverse(transform(x)) == x`
//! exactly.

use koop_core::{
    check_feature_count, check_features, check_samples, resolve_feature_names, FittedObservable,
    Observable, ObservableError, Scalar,
};
use ndarray::{Array2, ArrayView2};

/// Unfitted identity observable.
///
/// # Examples
///
/// ```
/// use koop_core::{FittedObservable, Observable};
/// use koop_obs::Identity;
/// use ndarray::array;
///
/// let x = array![[1.0, 2.0], [3.0, 4.0]];
/// let fitted = Identity.fit(x.view()).unwrap();
/// let y = fitted.transform(x.view()).unwrap();
/// assert_eq!(fitted.inverse(y.view()).unwrap(), x);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

/// Identity observable fitted to `n_features` inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FittedIdentity {
    n_features: usize,
}

impl<A: Scalar> Observable<A> for Identity {
    type Fitted = FittedIdentity;

    fn fit(&self, samples: ArrayView2<'_, A>) -> Result<FittedIdentity, ObservableError> {
        check_samples(samples)?;
        Ok(FittedIdentity {
            n_features: samples.ncols(),
        })
    }
}

impl<A: Scalar> FittedObservable<A> for FittedIdentity {
    fn n_input_features(&self) -> usize {
        self.n_features
    }

    fn n_output_features(&self) -> usize {
        self.n_features
    }

    fn transform(&self, samples: ArrayView2<'_, A>) -> Result<Array2<A>, ObservableError> {
        check_samples(samples)?;
        check_feature_count("transform input features", self.n_features, samples.ncols())?;
        Ok(samples.to_owned())
    }

    fn inverse(&self, features: ArrayView2<'_, A>) -> Result<Array2<A>, ObservableError> {
        check_features(features)?;
        Ok(features.to_owned())
    }

    fn feature_names(&self, input_names: Option<&[&str]>) -> Result<Vec<String>, ObservableError> {
        resolve_feature_names(input_names, self.n_features)
    }
}
