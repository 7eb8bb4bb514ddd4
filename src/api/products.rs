use super::{Access, ApiClient, FormPayload, Method};
use crate::error::ApiError;
use crate::models::{Category, ListResponse, Product, ProductPayload, ProductQuery};

#[derive(Clone, Debug)]
pub struct ProductsApi {
    client: ApiClient,
}

impl ProductsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /products/`. Featured/available listings skip the bearer header.
    pub async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
        let access = if query.is_public() {
            Access::Public
        } else {
            Access::Authenticated
        };
        let response: ListResponse<Product> =
            self.client.get("/products/", &query.to_pairs(), access).await?;
        Ok(response.into_items())
    }

    pub async fn get(&self, slug: &str) -> Result<Product, ApiError> {
        self.client
            .get(&format!("/products/{}/", slug), &[], Access::Authenticated)
            .await
    }

    pub async fn create(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        self.client
            .send_form(Method::Post, "/products/", product_form(payload))
            .await
    }

    pub async fn update(&self, slug: &str, payload: &ProductPayload) -> Result<Product, ApiError> {
        self.client
            .send_form(Method::Patch, &format!("/products/{}/", slug), product_form(payload))
            .await
    }

    pub async fn delete(&self, slug: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/products/{}/", slug)).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let response: ListResponse<Category> = self
            .client
            .get("/products/categories/", &[], Access::Authenticated)
            .await?;
        Ok(response.into_items())
    }
}

/// Mutations always go out as multipart; `category_id` is the backend's write field.
pub fn product_form(payload: &ProductPayload) -> FormPayload {
    FormPayload::new()
        .text("name", &payload.name)
        .text("description", &payload.description)
        .text("price", payload.price.to_decimal_string())
        .text_opt("image", payload.image.as_ref().filter(|image| !image.is_empty()))
        .text_opt("category_id", payload.category)
        .text_opt("is_featured", payload.is_featured)
        .text_opt("is_available", payload.is_available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;

    #[test]
    fn form_skips_null_fields() {
        let form = product_form(&ProductPayload {
            name: "Lemon Burst".into(),
            description: String::new(),
            price: Price::from_cents(385),
            image: Some(String::new()),
            category: None,
            is_featured: Some(true),
            is_available: None,
        });
        assert_eq!(form.get_text("price"), Some("3.85"));
        assert_eq!(form.get_text("is_featured"), Some("true"));
        assert_eq!(form.get_text("image"), None);
        assert_eq!(form.get_text("category_id"), None);
        assert_eq!(form.get_text("description"), Some(""));
    }
}
