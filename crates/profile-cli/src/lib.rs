//! Command-line driver for profile edit validation.

pub mod edits;
pub mod logging;
pub mod session;
