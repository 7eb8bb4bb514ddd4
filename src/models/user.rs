// src/models/user.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable_string;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub last_name: String,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_vendor: bool,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    pub fn role_label(&self) -> &'static str {
        if self.is_superuser {
            "Super Admin"
        } else if self.is_staff {
            "Staff"
        } else {
            "Customer"
        }
    }

    /// Merges the fields present in `patch`.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(first_name) = &patch.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &patch.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(is_vendor) = patch.is_vendor {
            self.is_vendor = is_vendor;
        }
        if let Some(picture) = &patch.profile_picture {
            self.profile_picture = Some(picture.clone());
        }
    }
}

/// Partial profile update.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_vendor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of `/auth/login/`. Only the tokens are trusted; roles come from the profile.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Body of `/auth/register/`; the backend echoes the created account, sometimes without an id.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RegisteredUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub last_name: String,
}

impl From<RegisteredUser> for User {
    fn from(registered: RegisteredUser) -> Self {
        User {
            id: registered.id.unwrap_or_default(),
            email: registered.email,
            first_name: registered.first_name,
            last_name: registered.last_name,
            is_superuser: false,
            is_staff: false,
            is_vendor: false,
            profile_picture: None,
            date_joined: None,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RefreshedToken {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_tolerates_missing_flags_and_null_names() {
        let user: User = serde_json::from_str(
            r#"{"id": 7, "email": "baker@cupcakery.test", "first_name": null, "last_name": "Jones"}"#,
        )
        .unwrap();
        assert!(!user.is_superuser);
        assert_eq!(user.first_name, "");
        assert_eq!(user.full_name(), "Jones");
        assert_eq!(user.role_label(), "Customer");
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut user = User::from(RegisteredUser {
            id: Some(1),
            email: "a@b.test".into(),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
        });
        user.apply(&UserPatch {
            first_name: Some("Anne".into()),
            ..Default::default()
        });
        assert_eq!(user.first_name, "Anne");
        assert_eq!(user.last_name, "Lee");
        assert_eq!(user.email, "a@b.test");
    }
}
