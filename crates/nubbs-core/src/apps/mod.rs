//! Apps shipped with the shell.
//!
//! - [`welcome`] -- prints a greeting

pub mod welcome;

pub use welcome::Welcome;
