//! Shared types for the bloodlink service
//!
//! Domain models, auth DTOs and small utilities used by the server crate
//! and by integration tests.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use models::{BloodType, Gender, Member, MemberProfileCreate, MemberRole, RecipientWithUser};
pub use models::{User, UserInfo};
