//! Domain layer shared by the db and api crates.
//!
//! Deliberately free of web and database dependencies: the error taxonomy,
//! the id/timestamp aliases, and the name normalizer that drives catalog
//! matching.

pub mod error;
pub mod normalize;
pub mod types;

pub use error::CoreError;
