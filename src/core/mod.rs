//! Core types shared by the collector and its callers

pub mod error;
pub mod field;

pub use error::{CollectError, Result};
pub use field::{CollectedField, response_key};
