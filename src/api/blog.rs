use super::{Access, ApiClient, FormPayload, Method};
use crate::error::ApiError;
use crate::models::{BlogCategory, BlogPost, BlogPostPayload, ListResponse};

#[derive(Clone, Debug)]
pub struct BlogApi {
    client: ApiClient,
}

impl BlogApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Newest first.
    pub async fn list(&self) -> Result<Vec<BlogPost>, ApiError> {
        self.list_with(&[("ordering", "-published_at".to_string())])
            .await
    }

    pub async fn list_with(&self, query: &[(&str, String)]) -> Result<Vec<BlogPost>, ApiError> {
        let response: ListResponse<BlogPost> = self
            .client
            .get("/blog/posts/", query, Access::Authenticated)
            .await?;
        Ok(response.into_items())
    }

    pub async fn get(&self, slug: &str) -> Result<BlogPost, ApiError> {
        self.client
            .get(&format!("/blog/posts/{}/", slug), &[], Access::Authenticated)
            .await
    }

    pub async fn categories(&self) -> Result<Vec<BlogCategory>, ApiError> {
        let response: ListResponse<BlogCategory> = self
            .client
            .get("/blog/categories/", &[], Access::Authenticated)
            .await?;
        Ok(response.into_items())
    }

    pub async fn create(&self, payload: &BlogPostPayload) -> Result<BlogPost, ApiError> {
        self.client
            .send_form(Method::Post, "/blog/posts/", post_form(payload))
            .await
    }

    pub async fn update(&self, slug: &str, payload: &BlogPostPayload) -> Result<BlogPost, ApiError> {
        self.client
            .send_form(Method::Patch, &format!("/blog/posts/{}/", slug), post_form(payload))
            .await
    }

    pub async fn delete(&self, slug: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/blog/posts/{}/", slug)).await
    }
}

pub fn post_form(payload: &BlogPostPayload) -> FormPayload {
    FormPayload::new()
        .text("title", &payload.title)
        .text("excerpt", &payload.excerpt)
        .text("content", &payload.content)
        .text_opt("image", payload.image.as_ref())
        .text_opt("author", payload.author.as_ref())
        .text_opt("published_at", payload.published_at.map(|at| at.to_rfc3339()))
}
