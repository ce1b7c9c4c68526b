//! CLI command implementations.

pub mod combine;
pub mod convert;
mod summary;
