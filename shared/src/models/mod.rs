//! Domain models

pub mod member;
pub mod user;

pub use member::{
    BloodType, Gender, Member, MemberLocationUpdate, MemberProfileCreate, MemberRole,
    RecipientWithUser,
};
pub use user::{User, UserInfo};
