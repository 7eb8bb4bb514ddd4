use super::{ApiClient, Method};
use crate::error::ApiError;
use crate::models::{ContactMessage, ContactSubmission};

#[derive(Clone, Debug)]
pub struct ContactApi {
    client: ApiClient,
}

impl ContactApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn send_message(&self, message: &ContactMessage) -> Result<ContactSubmission, ApiError> {
        self.client.send_json(Method::Post, "/contact/", message).await
    }
}
