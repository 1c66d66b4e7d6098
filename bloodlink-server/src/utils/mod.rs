//! Utility module
//!
//! - [`AppError`] / [`AppResponse`] - error type and response envelope
//! - [`AppResult`] - handler result alias
//! - logging and validation helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, AppResponse};
pub use result::AppResult;
