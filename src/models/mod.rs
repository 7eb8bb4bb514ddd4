pub mod blog;
pub mod contact;
pub mod price;
pub mod product;
pub mod user;

use serde::{Deserialize, Deserializer};

pub use blog::{Author, BlogCategory, BlogPost, BlogPostPayload};
pub use contact::{ContactMessage, ContactSubmission};
pub use price::{Price, PriceParseError};
pub use product::{Category, CategoryRef, Product, ProductPayload, ProductQuery};
pub use user::{
    Credentials, LoginResponse, PasswordChange, RefreshedToken, RegisteredUser, Registration,
    User, UserPatch,
};

/// A collection endpoint body: the paginated envelope or a bare array.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Page {
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        results: Vec<T>,
    },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Page { results, .. } => results,
            ListResponse::Plain(items) => items,
        }
    }
}

/// `null` and missing both read as an empty string.
pub(crate) fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn default_true() -> bool {
    true
}
