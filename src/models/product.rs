// src/models/product.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::price::Price;
use super::{default_true, nullable_string};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Gradient classes for the category banner; only the bundled catalog sets this.
    #[serde(default, skip_serializing)]
    pub color: Option<String>,
}

impl Category {
    pub fn matches(&self, identifier: &str) -> bool {
        let identifier = identifier.trim();
        self.name.eq_ignore_ascii_case(identifier)
            || self
                .slug
                .as_deref()
                .map(|slug| slug.eq_ignore_ascii_case(identifier))
                .unwrap_or(false)
    }
}

/// A product's category: a bare id on write payloads, a nested object on reads.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(i64),
    Nested(Category),
}

impl CategoryRef {
    pub fn id(&self) -> i64 {
        match self {
            CategoryRef::Id(id) => *id,
            CategoryRef::Nested(category) => category.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryRef::Id(_) => None,
            CategoryRef::Nested(category) => Some(category.name.as_str()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub slug: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Absolute URL first, then the raw upload path.
    pub fn display_image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .or(self.image.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Detail routes are keyed by slug; products without one fall back to the id.
    pub fn lookup_key(&self) -> String {
        self.slug
            .clone()
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| self.id.to_string())
    }

    pub fn category_id(&self) -> Option<i64> {
        self.category.as_ref().map(CategoryRef::id)
    }
}

/// Create/update body for `/products/`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: Option<String>,
    pub category: Option<i64>,
    pub is_featured: Option<bool>,
    pub is_available: Option<bool>,
}

/// Query parameters for `GET /products/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub limit: Option<u32>,
    pub is_featured: Option<bool>,
    pub is_available: Option<bool>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl ProductQuery {
    pub fn for_category(category: impl ToString) -> Self {
        Self {
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    pub fn featured(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            is_featured: Some(true),
            ..Default::default()
        }
    }

    /// Featured/available listings go out without credentials.
    pub fn is_public(&self) -> bool {
        self.is_featured == Some(true) || self.is_available == Some(true)
    }

    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(featured) = self.is_featured {
            pairs.push(("is_featured", featured.to_string()));
        }
        if self.is_public() {
            pairs.push(("is_available", "true".to_string()));
        } else if let Some(available) = self.is_available {
            pairs.push(("is_available", available.to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(ordering) = &self.ordering {
            pairs.push(("ordering", ordering.clone()));
        }
        pairs
    }
}
