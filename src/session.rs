//! Signed-in user state and the token lifecycle around it.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::logging::{error, log, warn};

use crate::api::AuthApi;
use crate::error::ApiError;
use crate::models::{PasswordChange, Registration, User, UserPatch};
use crate::storage::TokenStore;

pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

#[derive(Clone, Debug)]
pub struct Session {
    auth: AuthApi,
    user: Rc<RefCell<Option<User>>>,
}

impl Session {
    /// Also hooks the client so a 401 anywhere signs the user out here.
    pub fn new(auth: AuthApi) -> Self {
        let user = Rc::new(RefCell::new(None));
        let cell: Weak<RefCell<Option<User>>> = Rc::downgrade(&user);
        auth.client().add_unauthorized_hook(move || {
            if let Some(cell) = cell.upgrade() {
                *cell.borrow_mut() = None;
            }
        });
        Self { auth, user }
    }

    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.borrow().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .borrow()
            .as_ref()
            .map(|user| user.is_superuser)
            .unwrap_or(false)
    }

    pub fn tokens(&self) -> &TokenStore {
        self.auth.client().tokens()
    }

    fn set_user(&self, user: Option<User>) {
        *self.user.borrow_mut() = user;
    }

    /// Loads the profile for a stored token. A failed lookup clears the tokens silently.
    pub async fn restore(&self) -> Option<User> {
        if !self.tokens().has_token() {
            return None;
        }
        match self.auth.profile().await {
            Ok(user) => {
                log!("[SESSION] Restored session for {}", user.email);
                self.set_user(Some(user.clone()));
                Some(user)
            }
            Err(err) => {
                warn!("[SESSION] Failed to fetch user profile: {}", err);
                self.tokens().clear_all();
                self.set_user(None);
                None
            }
        }
    }

    /// Exchanges credentials for tokens, then loads the full profile.
    /// The login body is never trusted for role data.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let response = self.auth.login(email, password).await.map_err(|err| {
            error!("[SESSION] Login error: {}", err);
            err
        })?;

        let access = response
            .access
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::MissingToken("No access token received".to_string()))?;
        self.tokens()
            .save_tokens(&access, response.refresh.as_deref());

        let user = self.auth.profile().await.map_err(|err| {
            error!("[SESSION] Profile fetch after login failed: {}", err);
            err
        })?;

        if user.is_superuser {
            self.tokens().mark_admin(&user.email);
        } else {
            self.tokens().clear_admin();
        }
        log!("[SESSION] Signed in as {}", user.email);
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Creates the account and signs straight into it.
    pub async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        self.auth
            .register(registration)
            .await
            .map_err(|err| {
                error!("[SESSION] Registration error: {}", err);
                match err {
                    ApiError::Validation { .. }
                    | ApiError::Unauthorized(_)
                    | ApiError::Network(_) => err,
                    other => ApiError::Http {
                        status: other.status().unwrap_or(500),
                        message: REGISTRATION_FAILED.to_string(),
                    },
                }
            })?;

        self.login(&registration.email, &registration.password)
            .await
            .map_err(|err| match err {
                ApiError::MissingToken(_) => ApiError::MissingToken(
                    "Login after registration failed: No access token received".to_string(),
                ),
                other => other,
            })
    }

    pub fn logout(&self) {
        self.tokens().clear_all();
        self.set_user(None);
        log!("[SESSION] Signed out");
    }

    /// Local merge only; nothing is sent.
    pub fn update_user(&self, patch: &UserPatch) {
        if let Some(user) = self.user.borrow_mut().as_mut() {
            user.apply(patch);
        }
    }

    pub async fn save_profile(&self, patch: &UserPatch) -> Result<User, ApiError> {
        let user = self.auth.update_profile(patch).await?;
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        self.auth.change_password(change).await
    }

    /// Swaps the refresh token for a new access token. Nothing calls this automatically.
    pub async fn refresh_access_token(&self) -> Result<(), ApiError> {
        let refresh = self
            .tokens()
            .refresh_token()
            .ok_or_else(|| ApiError::MissingToken("No refresh token stored".to_string()))?;
        let refreshed = self.auth.refresh(&refresh).await?;
        let next_refresh = refreshed.refresh.unwrap_or(refresh);
        self.tokens()
            .save_tokens(&refreshed.access, Some(next_refresh.as_str()));
        Ok(())
    }
}
