//! Runtime holder for an observable inside a fitting pipeline.
//!
//! The typed API makes "transform before fit" unrepresentable. A
//! pipeline that owns an observable across its own lifecycle still needs
//! a place to keep the configuration and, later, the fitted value.
//! [`ObservableSlot`] is that place; using it before `fit` reports
//! [`ObservableError::NotFitted`].

use std::any::type_name;
use std::marker::PhantomData;

use koop_core::{FittedObservable, Observable, ObservableError, Scalar};
use ndarray::{Array2, ArrayView2};

/// An observable configuration plus its fitted state, if any.
///
/// # Examples
///
/// ```
/// use koop_core::ObservableError;
/// use koop_obs::{Identity, ObservableSlot};
/// use ndarray::array;
///
/// let x = array![[1.0, 2.0]];
/// let mut slot = ObservableSlot::<_, f64>::new(Identity);
/// assert!(matches!(slot.transform(x.view()), Err(ObservableError::NotFitted { .. })));
///
/// slot.fit(x.view()).unwrap();
/// assert_eq!(slot.transform(x.view()).unwrap(), x);
/// ```
#[derive(Debug)]
pub struct ObservableSlot<O, A>
where
    O: Observable<A>,
    A: Scalar,
{
    observable: O,
    fitted: Option<O::Fitted>,
    _element: PhantomData<fn() -> A>,
}

impl<O, A> ObservableSlot<O, A>
where
    O: Observable<A>,
    A: Scalar,
{
    /// Wrap an unfitted observable.
    pub fn new(observable: O) -> Self {
        Self {
            observable,
            fitted: None,
            _element: PhantomData,
        }
    }

    /// The wrapped configuration.
    pub fn observable(&self) -> &O {
        &self.observable
    }

    /// Fit the wrapped observable, replacing any previous fitted state.
    ///
    /// On error the previous fitted state, if any, is kept.
    pub fn fit(&mut self, samples: ArrayView2<'_, A>) -> Result<&O::Fitted, ObservableError> {
        let fitted = self.observable.fit(samples)?;
        Ok(self.fitted.insert(fitted))
    }

    /// Whether [`fit`](Self::fit) has succeeded at least once.
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// The fitted value.
    pub fn fitted(&self) -> Result<&O::Fitted, ObservableError> {
        self.fitted.as_ref().ok_or(ObservableError::NotFitted {
            component: type_name::<O>(),
        })
    }

    /// Consume the slot, returning the fitted value if there is one.
    pub fn into_fitted(self) -> Option<O::Fitted> {
        self.fitted
    }

    /// See [`FittedObservable::transform`].
    pub fn transform(&self, samples: ArrayView2<'_, A>) -> Result<Array2<A>, ObservableError> {
        self.fitted()?.transform(samples)
    }

    /// See [`FittedObservable::inverse`].
    pub fn inverse(&self, features: ArrayView2<'_, A>) -> Result<Array2<A>, ObservableError> {
        self.fitted()?.inverse(features)
    }

    /// See [`FittedObservable::feature_names`].
    pub fn feature_names(
        &self,
        input_names: Option<&[&str]>,
    ) -> Result<Vec<String>, ObservableError> {
        self.fitted()?.feature_names(input_names)
    }
}
