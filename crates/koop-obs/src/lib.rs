//! Observable feature transforms for Koopman-operator modeling.
//!
//! An observable lifts raw state measurements into a feature space in
//! which a linear operator can approximately advance the dynamics. This
//! crate provides two observables:
//!
//! - [`Identity`]: returns its input unchanged.
//! - [`CustomObservables`]: evaluates caller-supplied functions over
//!   every admissible tuple of input features, with the identity map
//!   always first.
//!
//! Both follow the two-state lifecycle of [`koop_core::Observable`]:
//! an unfitted configuration is fitted to samples, and only the fitted
//! value can transform, invert, and name features.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod combinations;
pub mod custom;
pub mod function;
pub mod identity;
pub mod slot;

pub use combinations::{
    combination_count, combinations, Combination, CombinationMode, Combinations,
};
pub use custom::{CustomObservables, FeatureColumn, FittedCustomObservables};
pub use function::{FeatureNamer, ObservableFunction};
pub use identity::{FittedIdentity, Identity};
pub use slot::ObservableSlot;
