//! User Model
//!
//! Account record backing authentication. `name` and `image` are optional;
//! recipient listings fall back to the email when the name is absent.

use serde::{Deserialize, Serialize};

/// User account row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub created_at: i64,
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    /// Display name with the listing fallback chain: name, then email
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Public user info (no credential material)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
    pub created_at: i64,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            image: user.image,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = User::hash_password("hunter2-but-longer").unwrap();
        let user = User {
            id: 1,
            name: None,
            email: "a@example.com".to_string(),
            image: None,
            hash_pass: hash,
            created_at: 0,
        };
        assert!(user.verify_password("hunter2-but-longer").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }

    #[test]
    fn hash_is_never_serialized() {
        let user = User {
            id: 1,
            name: Some("Aisha".to_string()),
            email: "a@example.com".to_string(),
            image: None,
            hash_pass: "secret".to_string(),
            created_at: 0,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("hashPass").is_none());
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user = User {
            id: 1,
            name: Some("Aisha".to_string()),
            email: "a@example.com".to_string(),
            image: None,
            hash_pass: String::new(),
            created_at: 0,
        };
        assert_eq!(user.display_name(), "Aisha");
        user.name = None;
        assert_eq!(user.display_name(), "a@example.com");
    }
}
