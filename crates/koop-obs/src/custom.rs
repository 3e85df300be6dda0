//! Custom observable sets.
//!
//! [`CustomObservables`] holds an ordered list of user functions with the
//! identity map prepended. Fitting enumerates, for every function, the
//! index tuples of its arity over the input features and records one
//! output column per `(function, tuple)` pair. The recorded column plan
//! is the single source of truth for the output width, the column
//! layout of `transform`, and the order of `feature_names`.
//!
//! Columns are laid out function-major: all identity columns first, then
//! each supplied function's columns in construction order, each group in
//! lexicographic tuple order.

use koop_core::{
    check_feature_count, check_features, check_samples, resolve_feature_names, FittedObservable,
    Observable, ObservableError, Scalar,
};
use ndarray::{s, Array2, ArrayView1, ArrayView2};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::combinations::{combinations, Combination, CombinationMode};
use crate::function::{FeatureNamer, ObservableFunction};

/// Unfitted set of custom observable functions.
///
/// The runtime function list is always `[identity, functions...]`, so the
/// raw state occupies the first `n_input_features` output columns.
///
/// # Examples
///
/// ```
/// use koop_core::{FittedObservable, Observable};
/// use koop_obs::{CombinationMode, CustomObservables, ObservableFunction};
/// use ndarray::array;
///
/// let add = ObservableFunction::<f64>::binary(|a, b| a + b);
/// let obs = CustomObservables::new(vec![add], None, CombinationMode::Distinct).unwrap();
///
/// let x = array![[1.0, 2.0], [3.0, 4.0]];
/// let fitted = obs.fit(x.view()).unwrap();
/// assert_eq!(fitted.n_output_features(), 3);
/// assert_eq!(fitted.transform(x.view()).unwrap(), array![[1.0, 2.0, 3.0], [3.0, 4.0, 7.0]]);
/// assert_eq!(fitted.feature_names(None).unwrap(), vec!["x0", "x1", "f1(x0,x1)"]);
/// ```
#[derive(Clone, Debug)]
pub struct CustomObservables<A> {
    /// Identity first, then the supplied functions.
    functions: Vec<ObservableFunction<A>>,
    /// Namers for the supplied functions only, if the caller gave any.
    names: Option<Vec<FeatureNamer>>,
    mode: CombinationMode,
}

impl<A: Scalar> CustomObservables<A> {
    /// Build a set from `functions` (identity excluded; it is prepended),
    /// optional per-function `names`, and a combination mode.
    ///
    /// `mode` also accepts an `interaction_only` flag via
    /// `From<bool>`.
    ///
    /// # Errors
    ///
    /// [`ObservableError::Configuration`] if `names` is given with a
    /// length different from `functions`, if a function declares arity
    /// zero, or if a namer's arity differs from its function's.
    pub fn new(
        functions: Vec<ObservableFunction<A>>,
        names: Option<Vec<FeatureNamer>>,
        mode: impl Into<CombinationMode>,
    ) -> Result<Self, ObservableError> {
        if let Some(names) = &names {
            if names.len() != functions.len() {
                return Err(ObservableError::Configuration {
                    reason: format!(
                        "{} observable functions but {} feature namers; lengths must match",
                        functions.len(),
                        names.len()
                    ),
                });
            }
            for (i, (function, namer)) in functions.iter().zip(names).enumerate() {
                if function.arity() != namer.arity() {
                    return Err(ObservableError::Configuration {
                        reason: format!(
                            "function {i} has arity {} but its namer has arity {}",
                            function.arity(),
                            namer.arity()
                        ),
                    });
                }
            }
        }
        if let Some(i) = functions.iter().position(|f| f.arity() == 0) {
            return Err(ObservableError::Configuration {
                reason: format!("function {i} declares arity 0; arity must be at least 1"),
            });
        }

        let mut all = Vec::with_capacity(functions.len() + 1);
        all.push(ObservableFunction::identity());
        all.extend(functions);

        Ok(Self {
            functions: all,
            names,
            mode: mode.into(),
        })
    }

    /// The runtime function list, identity first.
    pub fn functions(&self) -> &[ObservableFunction<A>] {
        &self.functions
    }

    /// How index tuples are enumerated.
    pub fn mode(&self) -> CombinationMode {
        self.mode
    }

    /// Namers parallel to [`functions`](Self::functions): the identity
    /// namer, then the caller's namers or `f1`, `f2`, ... defaults.
    fn resolved_namers(&self) -> Vec<FeatureNamer> {
        let mut namers = Vec::with_capacity(self.functions.len());
        namers.push(FeatureNamer::identity());
        match &self.names {
            Some(names) => namers.extend(names.iter().cloned()),
            None => namers.extend(
                self.functions[1..]
                    .iter()
                    .enumerate()
                    .map(|(i, f)| FeatureNamer::indexed(i + 1, f.arity())),
            ),
        }
        namers
    }
}

impl<A: Scalar> Observable<A> for CustomObservables<A> {
    type Fitted = FittedCustomObservables<A>;

    fn fit(
        &self,
        samples: ArrayView2<'_, A>,
    ) -> Result<FittedCustomObservables<A>, ObservableError> {
        check_samples(samples)?;
        let (n_samples, n_features) = samples.dim();

        let mut columns = Vec::new();
        for (function, f) in self.functions.iter().enumerate() {
            let before = columns.len();
            columns.extend(
                combinations(n_features, f.arity(), self.mode)
                    .map(|combination| FeatureColumn {
                        function,
                        combination,
                    }),
            );
            if columns.len() == before {
                warn!(
                    function,
                    arity = f.arity(),
                    n_input_features = n_features,
                    "observable function contributes no columns"
                );
            }
        }

        debug!(
            n_samples,
            n_input_features = n_features,
            n_output_features = columns.len(),
            "fitted custom observables"
        );

        Ok(FittedCustomObservables {
            functions: self.functions.clone(),
            namers: self.resolved_namers(),
            mode: self.mode,
            n_input_features: n_features,
            columns,
        })
    }
}

/// One output column: which function produced it and from which inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureColumn {
    /// Index into the runtime function list (0 = identity).
    pub function: usize,
    /// Input feature indices passed to the function, in argument order.
    pub combination: Combination,
}

/// A [`CustomObservables`] set fitted to a fixed input dimension.
///
/// Immutable after [`fit`](Observable::fit); concurrent `transform` and
/// `feature_names` calls on a shared reference are safe.
#[derive(Clone, Debug)]
pub struct FittedCustomObservables<A> {
    functions: Vec<ObservableFunction<A>>,
    namers: Vec<FeatureNamer>,
    mode: CombinationMode,
    n_input_features: usize,
    columns: Vec<FeatureColumn>,
}

impl<A: Scalar> FittedCustomObservables<A> {
    /// The column plan, one entry per output column in output order.
    pub fn columns(&self) -> &[FeatureColumn] {
        &self.columns
    }

    /// The combination mode the set was fitted with.
    pub fn mode(&self) -> CombinationMode {
        self.mode
    }

    /// The `n_input_features × n_output_features` 0/1 matrix recovering
    /// the state from the features.
    ///
    /// The identity block occupies the first `n_input_features` columns,
    /// so the matrix is `[I | 0]`.
    pub fn measurement_matrix(&self) -> Array2<A> {
        let d = self.n_input_features;
        let mut matrix = Array2::zeros((d, self.columns.len()));
        matrix.slice_mut(s![.., ..d]).assign(&Array2::<A>::eye(d));
        matrix
    }

    /// Recover the state from a feature array by taking the identity
    /// block. Unlike [`inverse`](FittedObservable::inverse) this is a true
    /// left inverse of `transform`.
    pub fn project_state(&self, features: ArrayView2<'_, A>) -> Result<Array2<A>, ObservableError> {
        check_features(features)?;
        check_feature_count("projected features", self.columns.len(), features.ncols())?;
        Ok(features.slice(s![.., ..self.n_input_features]).to_owned())
    }
}

impl<A: Scalar> FittedObservable<A> for FittedCustomObservables<A> {
    fn n_input_features(&self) -> usize {
        self.n_input_features
    }

    fn n_output_features(&self) -> usize {
        self.columns.len()
    }

    fn transform(&self, samples: ArrayView2<'_, A>) -> Result<Array2<A>, ObservableError> {
        check_samples(samples)?;
        check_feature_count(
            "transform input features",
            self.n_input_features,
            samples.ncols(),
        )?;

        let n_samples = samples.nrows();
        let mut output = Array2::zeros((n_samples, self.columns.len()));
        let mut args: SmallVec<[ArrayView1<'_, A>; 4]> = SmallVec::new();
        for (col, column) in self.columns.iter().enumerate() {
            args.clear();
            args.extend(column.combination.iter().map(|&j| samples.column(j)));
            let values = self.functions[column.function].evaluate(&args);
            if values.len() != n_samples {
                return Err(ObservableError::FunctionOutput {
                    function: column.function,
                    expected: n_samples,
                    actual: values.len(),
                });
            }
            output.column_mut(col).assign(&values);
        }
        Ok(output)
    }

    /// Returns `features` unchanged.
    ///
    /// Only the identity block is guaranteed invertible and general
    /// functions are not, so this is a pass-through rather than a
    /// mathematical inverse: with non-identity functions present,
    /// `inverse(transform(x))` has `n_output_features` columns, not `x`.
    /// Use [`project_state`](FittedCustomObservables::project_state) to
    /// recover `x`.
    fn inverse(&self, features: ArrayView2<'_, A>) -> Result<Array2<A>, ObservableError> {
        check_features(features)?;
        Ok(features.to_owned())
    }

    fn feature_names(&self, input_names: Option<&[&str]>) -> Result<Vec<String>, ObservableError> {
        let inputs = resolve_feature_names(input_names, self.n_input_features)?;
        Ok(self
            .columns
            .iter()
            .map(|column| {
                let selected: SmallVec<[&str; 4]> = column
                    .combination
                    .iter()
                    .map(|&j| inputs[j].as_str())
                    .collect();
                self.namers[column.function].name(&selected)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, s};

    fn add2() -> ObservableFunction<f64> {
        ObservableFunction::binary(|a, b| a + b)
    }

    #[test]
    fn identity_is_prepended() {
        let obs = CustomObservables::new(vec![add2()], None, true).unwrap();
        assert_eq!(obs.functions().len(), 2);
        assert_eq!(obs.functions()[0].arity(), 1);
        assert_eq!(obs.functions()[1].arity(), 2);
    }

    #[test]
    fn names_length_mismatch_fails_at_construction() {
        let err = CustomObservables::new(
            vec![add2(), add2()],
            Some(vec![FeatureNamer::call("add", 2)]),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, ObservableError::Configuration { .. }));
        assert!(err.to_string().contains("lengths must match"));
    }

    #[test]
    fn namer_arity_mismatch_fails() {
        let err = CustomObservables::new(
            vec![add2()],
            Some(vec![FeatureNamer::call("add", 1)]),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, ObservableError::Configuration { .. }));
    }

    #[test]
    fn zero_arity_fails() {
        let constant = ObservableFunction::<f64>::new(0, |_| ndarray::Array1::zeros(0));
        let err = CustomObservables::new(vec![constant], None, true).unwrap_err();
        assert!(err.to_string().contains("arity 0"));
    }

    #[test]
    fn interaction_only_scenario() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let fitted = CustomObservables::new(vec![add2()], None, true)
            .unwrap()
            .fit(x.view())
            .unwrap();
        assert_eq!(fitted.n_input_features(), 2);
        assert_eq!(fitted.n_output_features(), 3);
        assert_eq!(
            fitted.transform(x.view()).unwrap(),
            array![[1.0, 2.0, 3.0], [3.0, 4.0, 7.0]]
        );
        assert_eq!(
            fitted.feature_names(None).unwrap(),
            vec!["x0", "x1", "f1(x0,x1)"]
        );
    }

    #[test]
    fn with_replacement_scenario() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let fitted = CustomObservables::new(vec![add2()], None, false)
            .unwrap()
            .fit(x.view())
            .unwrap();
        assert_eq!(fitted.n_output_features(), 5);
        assert_eq!(
            fitted.transform(x.view()).unwrap(),
            array![[1.0, 2.0, 2.0, 3.0, 4.0], [3.0, 4.0, 6.0, 7.0, 8.0]]
        );
        assert_eq!(
            fitted.feature_names(None).unwrap(),
            vec!["x0", "x1", "f1(x0,x0)", "f1(x0,x1)", "f1(x1,x1)"]
        );
    }

    #[test]
    fn column_plan_is_function_major() {
        let square = ObservableFunction::<f64>::unary(|v| v * v);
        let fitted = CustomObservables::new(vec![add2(), square], None, true)
            .unwrap()
            .fit(array![[1.0, 2.0, 3.0]].view())
            .unwrap();
        let plan: Vec<(usize, Vec<usize>)> = fitted
            .columns()
            .iter()
            .map(|c| (c.function, c.combination.to_vec()))
            .collect();
        assert_eq!(
            plan,
            vec![
                (0, vec![0]),
                (0, vec![1]),
                (0, vec![2]),
                (1, vec![0, 1]),
                (1, vec![0, 2]),
                (1, vec![1, 2]),
                (2, vec![0]),
                (2, vec![1]),
                (2, vec![2]),
            ]
        );
        assert_eq!(
            fitted.feature_names(None).unwrap()[6..],
            ["f2(x0)", "f2(x1)", "f2(x2)"]
        );
    }

    #[test]
    fn arity_above_feature_count_contributes_nothing() {
        let sum3 = ObservableFunction::<f64>::new(3, |c| &c[0] + &c[1] + &c[2]);
        let fitted = CustomObservables::new(vec![sum3], None, true)
            .unwrap()
            .fit(array![[1.0, 2.0]].view())
            .unwrap();
        assert_eq!(fitted.n_output_features(), 2);
        assert_eq!(fitted.feature_names(None).unwrap(), vec!["x0", "x1"]);
    }

    #[test]
    fn supplied_names_are_used() {
        let obs = CustomObservables::new(
            vec![ObservableFunction::binary(|a: f64, b| a * b)],
            Some(vec![FeatureNamer::new(2, |n| format!("{}*{}", n[0], n[1]))]),
            true,
        )
        .unwrap();
        let fitted = obs.fit(array![[1.0, 2.0]].view()).unwrap();
        assert_eq!(
            fitted.feature_names(Some(&["p", "v"])).unwrap(),
            vec!["p", "v", "p*v"]
        );
    }

    #[test]
    fn transform_rejects_wrong_width() {
        let fitted = CustomObservables::new(vec![add2()], None, true)
            .unwrap()
            .fit(array![[1.0, 2.0]].view())
            .unwrap();
        let err = fitted.transform(array![[1.0, 2.0, 3.0]].view()).unwrap_err();
        assert_eq!(
            err,
            ObservableError::ShapeMismatch {
                context: "transform input features",
                expected: 2,
                actual: 3,
            }
        );
    }

    #[test]
    fn feature_names_reject_wrong_count() {
        let fitted = CustomObservables::new(vec![add2()], None, true)
            .unwrap()
            .fit(array![[1.0, 2.0]].view())
            .unwrap();
        let err = fitted.feature_names(Some(&["a", "b", "c"])).unwrap_err();
        assert!(matches!(
            err,
            ObservableError::ShapeMismatch {
                expected: 2,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn bad_function_output_is_reported() {
        let truncating = ObservableFunction::<f64>::new(1, |c| c[0].slice(s![..1]).to_owned());
        let fitted = CustomObservables::new(vec![truncating], None, true)
            .unwrap()
            .fit(array![[1.0], [2.0]].view())
            .unwrap();
        let err = fitted.transform(array![[1.0], [2.0]].view()).unwrap_err();
        assert_eq!(
            err,
            ObservableError::FunctionOutput {
                function: 1,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn inverse_is_pass_through() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let fitted = CustomObservables::new(vec![add2()], None, true)
            .unwrap()
            .fit(x.view())
            .unwrap();
        let y = fitted.transform(x.view()).unwrap();
        assert_eq!(fitted.inverse(y.view()).unwrap(), y);
    }

    #[test]
    fn identity_only_set_round_trips() {
        let x = array![[1.0, -2.0, 0.5], [3.0, 4.0, 9.0]];
        let fitted = CustomObservables::<f64>::new(vec![], None, true)
            .unwrap()
            .fit(x.view())
            .unwrap();
        let y = fitted.transform(x.view()).unwrap();
        assert_eq!(fitted.inverse(y.view()).unwrap(), x);
    }

    #[test]
    fn project_state_recovers_input() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let fitted = CustomObservables::new(vec![add2()], None, false)
            .unwrap()
            .fit(x.view())
            .unwrap();
        let y = fitted.transform(x.view()).unwrap();
        assert_eq!(fitted.project_state(y.view()).unwrap(), x);
        assert_eq!(fitted.measurement_matrix().dot(&y.t()).t(), x);
        assert!(fitted.project_state(x.view()).is_err());
    }

    #[test]
    fn measurement_matrix_selects_identity_block() {
        let fitted = CustomObservables::new(vec![add2()], None, true)
            .unwrap()
            .fit(array![[1.0, 2.0]].view())
            .unwrap();
        assert_eq!(
            fitted.measurement_matrix(),
            array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
        );
    }

    #[test]
    fn dtype_is_preserved() {
        let x = array![[1.0f32, 2.0], [3.0, 4.0]];
        let fitted = CustomObservables::new(
            vec![ObservableFunction::<f32>::binary(|a, b| a * b)],
            None,
            true,
        )
        .unwrap()
        .fit(x.view())
        .unwrap();
        let y: Array2<f32> = fitted.transform(x.view()).unwrap();
        assert_eq!(y, array![[1.0f32, 2.0, 2.0], [3.0, 4.0, 12.0]]);
    }

    #[test]
    fn input_is_not_mutated() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let before = x.clone();
        let fitted = CustomObservables::new(vec![add2()], None, true)
            .unwrap()
            .fit(x.view())
            .unwrap();
        let _ = fitted.transform(x.view()).unwrap();
        assert_eq!(x, before);
    }

    #[test]
    fn config_can_be_refitted() {
        let obs = CustomObservables::new(vec![add2()], None, true).unwrap();
        let narrow = obs.fit(array![[1.0, 2.0]].view()).unwrap();
        let wide = obs.fit(array![[1.0, 2.0, 3.0]].view()).unwrap();
        assert_eq!(narrow.n_output_features(), 3);
        assert_eq!(wide.n_output_features(), 6);
    }
}
