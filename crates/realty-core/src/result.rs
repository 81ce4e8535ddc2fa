//! Convenience result type alias for Realty.

use crate::error::AppError;

/// A specialized `Result` type for Realty operations.
pub type AppResult<T> = Result<T, AppError>;
