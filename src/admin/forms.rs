// src/admin/forms.rs
//! Raw form fields as typed, and their checked conversions into request bodies.
use chrono::{DateTime, Utc};

use crate::error::FormError;
use crate::models::{
    BlogPost, BlogPostPayload, ContactMessage, Price, Product, ProductPayload, Registration,
};

pub const ADMIN_PASSWORD_MIN: usize = 6;
pub const REGISTER_PASSWORD_MIN: usize = 8;

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn check_email(email: &str) -> Result<String, FormError> {
    let email = required(email, "Email")?;
    if !email.contains('@') {
        return Err(FormError::InvalidEmail);
    }
    Ok(email)
}

fn check_password(password: &str, confirm: &str, min: usize) -> Result<(), FormError> {
    if password.chars().count() < min {
        return Err(FormError::PasswordTooShort(min));
    }
    if password != confirm {
        return Err(FormError::PasswordMismatch);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub is_featured: bool,
    pub is_available: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            image: String::new(),
            category: String::new(),
            is_featured: false,
            is_available: true,
        }
    }
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_decimal_string(),
            image: product.display_image().unwrap_or_default().to_string(),
            category: product
                .category_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            is_featured: product.is_featured,
            is_available: product.is_available,
        }
    }

    pub fn to_payload(&self) -> Result<ProductPayload, FormError> {
        let name = required(&self.name, "Name")?;
        let price = self
            .price
            .parse::<Price>()
            .map_err(|_| FormError::InvalidPrice)?;
        let category = match optional(&self.category) {
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| FormError::InvalidCategory)?),
            None => None,
        };
        Ok(ProductPayload {
            name,
            description: self.description.trim().to_string(),
            price,
            image: optional(&self.image),
            category,
            is_featured: Some(self.is_featured),
            is_available: Some(self.is_available),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogForm {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub author: String,
}

impl BlogForm {
    pub fn from_post(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            image: post.display_image().unwrap_or_default().to_string(),
            author: post
                .author
                .as_ref()
                .map(|author| author.display_name())
                .unwrap_or_default(),
        }
    }

    fn payload(&self, published_at: Option<DateTime<Utc>>) -> Result<BlogPostPayload, FormError> {
        Ok(BlogPostPayload {
            title: required(&self.title, "Title")?,
            excerpt: self.excerpt.trim().to_string(),
            content: required(&self.content, "Content")?,
            image: optional(&self.image),
            author: optional(&self.author),
            published_at,
        })
    }

    /// New posts are published immediately.
    pub fn to_create_payload(&self, now: DateTime<Utc>) -> Result<BlogPostPayload, FormError> {
        self.payload(Some(now))
    }

    pub fn to_update_payload(&self) -> Result<BlogPostPayload, FormError> {
        self.payload(None)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminUserForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AdminUserForm {
    pub fn to_registration(&self) -> Result<Registration, FormError> {
        let email = check_email(&self.email)?;
        check_password(&self.password, &self.confirm_password, ADMIN_PASSWORD_MIN)?;
        Ok(Registration {
            email,
            password: self.password.clone(),
            password2: self.confirm_password.clone(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn to_registration(&self) -> Result<Registration, FormError> {
        let email = check_email(&self.email)?;
        check_password(&self.password, &self.confirm_password, REGISTER_PASSWORD_MIN)?;
        Ok(Registration {
            email,
            password: self.password.clone(),
            password2: self.confirm_password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(String, String), FormError> {
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok((email, self.password.clone()))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn to_message(&self) -> Result<ContactMessage, FormError> {
        Ok(ContactMessage {
            name: required(&self.name, "Name")?,
            email: check_email(&self.email)?,
            subject: required(&self.subject, "Subject")?,
            message: required(&self.message, "Message")?,
        })
    }
}
