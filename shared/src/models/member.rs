//! Member Model
//!
//! A member links an authenticated user to donor/recipient attributes.
//! Exactly 0 or 1 member exists per user; the role is fixed at creation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default service area shown in the profile form
pub const DEFAULT_SERVICE_AREA: &str = "Multan, Punjab, Pakistan";

/// Donor / recipient classification, set once at profile creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Donor,
    Recipient,
}

/// The 8 standard blood type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
pub enum BloodType {
    #[serde(rename = "A+")]
    #[sqlx(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    #[sqlx(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    #[sqlx(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    #[sqlx(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    #[sqlx(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    #[sqlx(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    #[sqlx(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    #[sqlx(rename = "O-")]
    ONegative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Member entity
///
/// `profile_completed` is set to true when creation succeeds and is never
/// reset; `latitude`/`longitude` are filled in later by the location update.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub user_id: i64,
    pub role: MemberRole,
    pub blood_type: BloodType,
    pub age: i64,
    pub gender: Gender,
    pub location: String,
    pub location_permission_granted: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: String,
    pub bio: String,
    pub profile_completed: bool,
    pub created_at: i64,
}

/// Create member profile payload
///
/// Field constraints mirror the profile form: the enum fields reject unknown
/// values at deserialization, the rest is checked by `validate()`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfileCreate {
    #[validate(range(min = 18, max = 65, message = "Age must be between 18 and 65"))]
    pub age: i64,
    pub blood_type: BloodType,
    pub gender: Gender,
    pub role: MemberRole,
    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: String,
    pub location_permission_granted: bool,
    #[validate(length(
        min = 10,
        max = 15,
        message = "Phone number must be 10 to 15 characters"
    ))]
    pub phone: String,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Location update payload (latitude/longitude only)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberLocationUpdate {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Recipient joined with the owning user's public info (for listing views)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecipientWithUser {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub member: Member,
    /// Display name, falling back to email, then "Unknown"
    pub user_name: String,
    pub user_email: Option<String>,
    pub user_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blood_type_uses_standard_codes_on_the_wire() {
        let json = serde_json::to_string(&BloodType::OPositive).unwrap();
        assert_eq!(json, "\"O+\"");
        let parsed: BloodType = serde_json::from_str("\"AB-\"").unwrap();
        assert_eq!(parsed, BloodType::AbNegative);
        assert!(serde_json::from_str::<BloodType>("\"C+\"").is_err());
    }

    #[test]
    fn member_serializes_with_camel_case_names() {
        let member = Member {
            id: 1,
            user_id: 2,
            role: MemberRole::Donor,
            blood_type: BloodType::APositive,
            age: 25,
            gender: Gender::Male,
            location: DEFAULT_SERVICE_AREA.to_string(),
            location_permission_granted: true,
            latitude: None,
            longitude: None,
            phone: "03001234567".to_string(),
            bio: String::new(),
            profile_completed: true,
            created_at: 0,
        };
        let value = serde_json::to_value(&member).unwrap();
        assert_eq!(value["bloodType"], "A+");
        assert_eq!(value["locationPermissionGranted"], true);
        assert_eq!(value["profileCompleted"], true);
    }

    #[test]
    fn create_payload_rejects_out_of_range_fields() {
        let payload = MemberProfileCreate {
            age: 17,
            blood_type: BloodType::OPositive,
            gender: Gender::Male,
            role: MemberRole::Donor,
            location: DEFAULT_SERVICE_AREA.to_string(),
            location_permission_granted: true,
            phone: "03001234567".to_string(),
            bio: None,
        };
        assert!(payload.validate().is_err());

        let payload = MemberProfileCreate {
            age: 25,
            phone: "123".to_string(),
            ..payload
        };
        assert!(payload.validate().is_err());

        let payload = MemberProfileCreate {
            phone: "03001234567".to_string(),
            ..payload
        };
        assert!(payload.validate().is_ok());
    }
}
