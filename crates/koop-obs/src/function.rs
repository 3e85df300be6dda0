//! Observable functions and feature namers.
//!
//! Functions are opaque callables over whole columns. Each one is
//! registered with an explicit arity: the number of input columns it
//! consumes per evaluation. The arity is never inferred.

use std::fmt;
use std::sync::Arc;

use koop_core::Scalar;
use ndarray::{Array1, ArrayView1, Zip};

type ColumnFn<A> = dyn Fn(&[ArrayView1<'_, A>]) -> Array1<A> + Send + Sync;
type NameFn = dyn Fn(&[&str]) -> String + Send + Sync;

/// A pure function of `arity` equal-length columns returning one column
/// of the same length.
///
/// Cloning is cheap: the callable is shared behind an `Arc`.
///
/// # Examples
///
/// ```
/// use koop_obs::ObservableFunction;
/// use ndarray::array;
///
/// let product = ObservableFunction::<f64>::binary(|a, b| a * b);
/// assert_eq!(product.arity(), 2);
///
/// let a = array![1.0, 2.0];
/// let b = array![3.0, 4.0];
/// assert_eq!(product.evaluate(&[a.view(), b.view()]), array![3.0, 8.0]);
/// ```
#[derive(Clone)]
pub struct ObservableFunction<A> {
    arity: usize,
    func: Arc<ColumnFn<A>>,
}

impl<A: Scalar> ObservableFunction<A> {
    /// Wrap a column function with its declared arity.
    ///
    /// The function receives exactly `arity` column views, in the order
    /// of the index tuple being evaluated.
    pub fn new<F>(arity: usize, func: F) -> Self
    where
        F: Fn(&[ArrayView1<'_, A>]) -> Array1<A> + Send + Sync + 'static,
    {
        Self {
            arity,
            func: Arc::new(func),
        }
    }

    /// The identity map: returns its single column unchanged.
    pub fn identity() -> Self {
        Self::new(1, |cols| cols[0].to_owned())
    }

    /// Apply a scalar function element-wise to one column.
    pub fn unary<F>(f: F) -> Self
    where
        F: Fn(A) -> A + Send + Sync + 'static,
    {
        Self::new(1, move |cols| cols[0].mapv(&f))
    }

    /// Apply a scalar function element-wise to two columns.
    pub fn binary<F>(f: F) -> Self
    where
        F: Fn(A, A) -> A + Send + Sync + 'static,
    {
        Self::new(2, move |cols| {
            Zip::from(&cols[0])
                .and(&cols[1])
                .map_collect(|&a, &b| f(a, b))
        })
    }

    /// Number of columns consumed per evaluation.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Evaluate on `arity` columns.
    pub fn evaluate(&self, columns: &[ArrayView1<'_, A>]) -> Array1<A> {
        debug_assert_eq!(columns.len(), self.arity);
        (self.func)(columns)
    }
}

impl<A> fmt::Debug for ObservableFunction<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableFunction")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Produces the output feature name for one evaluation of a function,
/// given the names of the input columns it was applied to.
///
/// # Examples
///
/// ```
/// use koop_obs::FeatureNamer;
///
/// let namer = FeatureNamer::call("prod", 2);
/// assert_eq!(namer.name(&["x0", "x1"]), "prod(x0,x1)");
///
/// let square = FeatureNamer::new(1, |names| format!("{}^2", names[0]));
/// assert_eq!(square.name(&["v"]), "v^2");
/// ```
#[derive(Clone)]
pub struct FeatureNamer {
    arity: usize,
    func: Arc<NameFn>,
}

impl FeatureNamer {
    /// Wrap a naming function with the arity of the function it names.
    pub fn new<F>(arity: usize, func: F) -> Self
    where
        F: Fn(&[&str]) -> String + Send + Sync + 'static,
    {
        Self {
            arity,
            func: Arc::new(func),
        }
    }

    /// Names the identity map: the input feature name itself.
    pub fn identity() -> Self {
        Self::new(1, |names| names[0].to_string())
    }

    /// Names in call syntax: `label(name1,name2,...)`.
    pub fn call(label: impl Into<String>, arity: usize) -> Self {
        let label = label.into();
        Self::new(arity, move |names| format!("{label}({})", names.join(",")))
    }

    /// The default namer for the `ordinal`-th supplied function
    /// (1-based): `f{ordinal}(name1,name2,...)`.
    pub fn indexed(ordinal: usize, arity: usize) -> Self {
        Self::call(format!("f{ordinal}"), arity)
    }

    /// Arity of the function this namer is paired with.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Name one output feature.
    pub fn name(&self, input_names: &[&str]) -> String {
        (self.func)(input_names)
    }
}

impl fmt::Debug for FeatureNamer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureNamer")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
