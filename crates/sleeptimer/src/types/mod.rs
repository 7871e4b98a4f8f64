/*! Shared types for the sleep timer. */

#![allow(missing_docs)]

mod error;
mod ids;

pub use error::{Error, Result};
pub use ids::ProcessId;
