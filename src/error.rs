//! Typed errors for the ranking core.
//!
//! The transport layer needs to tell a `400` apart from a `500` without
//! re-deriving that split at every call site, so these are a closed enum
//! rather than a flattened `anyhow::Error`.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors the core returns synchronously; never retried, never partial.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("delta {delta} is outside the allowed range [-1000, 1000]")]
    OutOfRange { delta: Decimal },

    #[error("bad argument: {reason}")]
    BadArgument { reason: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
