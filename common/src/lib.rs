//! Shared domain model and presentation config for footprintr.
//!
//! Everything in here is plain data: the other crates depend on this one
//! and never the other way around.

pub mod config;
pub mod macros;
pub mod model;

#[doc(hidden)]
pub use tracing;
