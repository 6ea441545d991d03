//! Common utilities module
//!
//! Shared error type used across the engine.

pub mod error;

pub use error::{ScalerError, Result};
