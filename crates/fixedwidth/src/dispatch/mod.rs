//! Dynamic front end: operations looked up by name.
//!
//! Everything in this module is an adapter over the typed functions in
//! [`crate::codec`] and the methods of [`crate::model::Buffer`].

pub mod registry;
pub mod value;

pub use registry::{call, default_registry, Args, Operation, Registry};
pub use value::{Value, ValueKind};
