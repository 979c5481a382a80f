//! Reporting
//!
//! Structured logging for the command-line front end.

pub mod logging;
