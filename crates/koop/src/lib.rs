//! Koop: observable feature transforms for Koopman-operator modeling.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Koop sub-crates. For most users, adding `koop` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use koop::prelude::*;
//! use ndarray::array;
//!
//! // Lift 2-D states with the pairwise sum a + b.
//! let add = ObservableFunction::<f64>::binary(|a, b| a + b);
//! let observables = CustomObservables::new(vec![add], None, CombinationMode::Distinct).unwrap();
//!
//! let x = array![[1.0, 2.0], [3.0, 4.0]];
//! let fitted = observables.fit(x.view()).unwrap();
//!
//! let features = fitted.transform(x.view()).unwrap();
//! assert_eq!(features, array![[1.0, 2.0, 3.0], [3.0, 4.0, 7.0]]);
//! assert_eq!(fitted.feature_names(None).unwrap(), vec!["x0", "x1", "f1(x0,x1)"]);
//!
//! // The raw state is always the leading identity block.
//! assert_eq!(fitted.project_state(features.view()).unwrap(), x);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `koop-core` | Element trait, errors, validation, observable traits |
//! | [`obs`] | `koop-obs` | Identity and custom observables, combination enumeration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`koop-core`).
///
/// Contains the [`types::Scalar`] element trait, [`types::ObservableError`],
/// and the [`types::Observable`] / [`types::FittedObservable`] traits.
pub use koop_core as types;

/// Observable implementations (`koop-obs`).
///
/// [`obs::Identity`] and [`obs::CustomObservables`], plus the
/// [`obs::ObservableSlot`] runtime holder.
pub use koop_obs as obs;

/// Common imports for typical Koop usage.
///
/// ```rust
/// use koop::prelude::*;
/// ```
pub mod prelude {
    // Core traits and errors
    pub use koop_core::{FittedObservable, Observable, ObservableError, Scalar};

    // Observables
    pub use koop_obs::{
        CombinationMode, CustomObservables, FeatureNamer, FittedCustomObservables,
        FittedIdentity, Identity, ObservableFunction, ObservableSlot,
    };
}
