//! Core types and foundational components
//!
//! This module contains error handling and the constant tables used
//! throughout the crate.

pub mod constants;
pub mod error;

// Re-export commonly used items for convenience
pub use error::{Result, UrlFormatError};
