//! API route modules
//!
//! - [`health`] - health checks
//! - [`auth`] - register / login / me
//! - [`members`] - profile operations and gating

pub mod auth;
pub mod health;
pub mod members;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
