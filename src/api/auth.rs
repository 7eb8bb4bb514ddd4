use serde_json::json;

use super::{Access, ApiClient, FormPayload, Method};
use crate::error::ApiError;
use crate::models::{
    Credentials, ListResponse, LoginResponse, PasswordChange, RefreshedToken, RegisteredUser,
    Registration, User, UserPatch,
};

#[derive(Clone, Debug)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client
            .send_json(Method::Post, "/auth/login/", &credentials)
            .await
    }

    pub async fn register(&self, registration: &Registration) -> Result<RegisteredUser, ApiError> {
        self.client
            .send_json(Method::Post, "/auth/register/", registration)
            .await
    }

    pub async fn profile(&self) -> Result<User, ApiError> {
        self.client
            .get("/auth/profile/", &[], Access::Authenticated)
            .await
    }

    pub async fn update_profile(&self, patch: &UserPatch) -> Result<User, ApiError> {
        let form = FormPayload::new()
            .text_opt("email", patch.email.as_ref())
            .text_opt("first_name", patch.first_name.as_ref())
            .text_opt("last_name", patch.last_name.as_ref())
            .text_opt("is_vendor", patch.is_vendor)
            .text_opt("profile_picture", patch.profile_picture.as_ref());
        self.client
            .send_form(Method::Patch, "/auth/profile/", form)
            .await
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .client
            .send_json(Method::Post, "/auth/change-password/", change)
            .await?;
        Ok(())
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshedToken, ApiError> {
        self.client
            .send_json(
                Method::Post,
                "/auth/token/refresh/",
                &json!({ "refresh": refresh_token }),
            )
            .await
    }

    /// Active accounts; admin only.
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        let response: ListResponse<User> = self
            .client
            .get("/auth/users/", &[], Access::Authenticated)
            .await?;
        Ok(response.into_items())
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/auth/users/{}/", id)).await
    }
}
