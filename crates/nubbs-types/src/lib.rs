//! # nubbs-types
//!
//! Core type definitions for the NuBBS shell.
//!
//! - **[`error`]** -- [`NubbsError`] error type
//! - **[`config`]** -- Shell configuration schema ([`ShellConfig`])

pub mod config;
pub mod error;

pub use config::ShellConfig;
pub use error::{NubbsError, Result};
