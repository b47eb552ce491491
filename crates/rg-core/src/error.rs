//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `#[from]` or keep it wrapped as one variant.

use thiserror::Error;

/// Errors from the foundational types — all fatal configuration/parse
/// problems that must abort startup.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rg-core` consumers.
pub type CoreResult<T> = Result<T, CoreError>;
