// src/models/contact.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// What `/contact/` stores and echoes back.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
