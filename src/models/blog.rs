// src/models/blog.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable_string;

/// Post author: a display name on older payloads, a nested user on the REST API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Author {
    Name(String),
    Profile {
        #[serde(default)]
        username: Option<String>,
        #[serde(default, deserialize_with = "nullable_string")]
        first_name: String,
        #[serde(default, deserialize_with = "nullable_string")]
        last_name: String,
        #[serde(default)]
        email: Option<String>,
    },
}

impl Author {
    pub fn display_name(&self) -> String {
        match self {
            Author::Name(name) => name.clone(),
            Author::Profile {
                username,
                first_name,
                last_name,
                email,
            } => {
                let full = format!("{} {}", first_name, last_name).trim().to_string();
                if !full.is_empty() {
                    full
                } else {
                    username
                        .clone()
                        .or_else(|| email.clone())
                        .unwrap_or_else(|| "Anonymous".to_string())
                }
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: i64,
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub excerpt: String,
    /// Absent from list responses.
    #[serde(default, deserialize_with = "nullable_string")]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
}

impl BlogPost {
    pub fn display_image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .or(self.featured_image.as_deref())
            .or(self.image.as_deref())
            .filter(|url| !url.is_empty())
    }

    pub fn author_name(&self) -> String {
        self.author
            .as_ref()
            .map(Author::display_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Anonymous".to_string())
    }

    pub fn lookup_key(&self) -> String {
        self.slug
            .clone()
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| self.id.to_string())
    }

    /// True when `key` is this post's slug or numeric id.
    pub fn is_addressed_by(&self, key: &str) -> bool {
        self.slug.as_deref() == Some(key) || self.id.to_string() == key
    }

    /// "June 15, 2023"
    pub fn published_label(&self) -> String {
        self.published_at
            .or(self.created_at)
            .map(|at| at.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| "Unpublished".to_string())
    }

    /// Minutes at roughly 200 words a minute when the backend does not say.
    pub fn reading_minutes(&self) -> u32 {
        self.read_time.unwrap_or_else(|| {
            let words = self.content.split_whitespace().count() as u32;
            (words / 200).max(1)
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlogCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Create/update body for `/blog/posts/`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostPayload {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_accepts_string_or_profile() {
        let named: BlogPost = serde_json::from_str(
            r#"{"id": 1, "title": "Frosting", "author": "LaKeisha Johnson"}"#,
        )
        .unwrap();
        assert_eq!(named.author_name(), "LaKeisha Johnson");

        let profile: BlogPost = serde_json::from_str(
            r#"{"id": 2, "title": "Cakes", "author": {"username": "marcus", "first_name": "", "last_name": ""}}"#,
        )
        .unwrap();
        assert_eq!(profile.author_name(), "marcus");

        let anonymous: BlogPost =
            serde_json::from_str(r#"{"id": 3, "title": "Untitled", "author": null}"#).unwrap();
        assert_eq!(anonymous.author_name(), "Anonymous");
    }

    #[test]
    fn published_label_is_long_form() {
        let post: BlogPost = serde_json::from_str(
            r#"{"id": 1, "title": "t", "published_at": "2023-06-15T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(post.published_label(), "June 15, 2023");
        assert!(post.is_addressed_by("1"));
        assert_eq!(post.reading_minutes(), 1);
    }
}
