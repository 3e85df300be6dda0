//! Core types and traits for Koop observable transforms.
//!
//! This is the leaf crate with no internal dependencies. It defines
//! the fundamental abstractions shared by every observable: the
//! [`Scalar`] element trait, the [`ObservableError`] type, input
//! validation, and the two-state [`Observable`] / [`FittedObservable`]
//! traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
pub mod scalar;
pub mod traits;
pub mod validate;

pub use error::ObservableError;
pub use scalar::Scalar;
pub use traits::{FittedObservable, Observable};
pub use validate::{
    check_feature_count, check_features, check_samples, default_feature_names, resolve_feature_names,
};
