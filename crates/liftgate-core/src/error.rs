//! Workspace base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `LiftError` or wrap it as one variant, whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `liftgate-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `liftgate-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
