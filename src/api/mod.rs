//! HTTP client for the bakery REST API.
//! Every authenticated request carries `Authorization: Bearer <access_token>`
//! from the token storage; a 401 from any call clears the stored tokens.
pub mod auth;
pub mod blog;
pub mod contact;
pub mod products;
pub mod transport;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use leptos::logging::{log, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::storage::{default_storage, TokenStore};

pub use auth::AuthApi;
pub use blog::BlogApi;
pub use contact::ContactApi;
pub use products::ProductsApi;
pub use transport::{default_transport, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File {
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

/// Ordered multipart fields; only non-null values are ever pushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    pub fields: Vec<(String, FormValue)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl ToString) -> Self {
        self.fields
            .push((name.to_string(), FormValue::Text(value.to_string())));
        self
    }

    pub fn text_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        self.fields.push((
            name.to_string(),
            FormValue::File {
                file_name: file_name.to_string(),
                content_type: content_type.to_string(),
                bytes,
            },
        ));
        self
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(key, value)| match value {
            FormValue::Text(text) if key == name => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(FormPayload),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Whether a request carries the stored bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
}

type UnauthorizedHook = Rc<dyn Fn()>;

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Rc<dyn Transport>,
    tokens: TokenStore,
    on_unauthorized: Rc<RefCell<Vec<UnauthorizedHook>>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: Rc<dyn Transport>, tokens: TokenStore) -> Self {
        Self {
            config,
            transport,
            tokens,
            on_unauthorized: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Browser `localStorage` + fetch on wasm, memory + reqwest on the server.
    pub fn from_env() -> Self {
        Self::new(
            ApiConfig::from_env(),
            default_transport(),
            TokenStore::new(default_storage()),
        )
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Registers a callback that runs after tokens are cleared because of a 401.
    pub fn add_unauthorized_hook(&self, hook: impl Fn() + 'static) {
        self.on_unauthorized.borrow_mut().push(Rc::new(hook));
    }

    pub fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = self.config.endpoint(path);
        if !query.is_empty() {
            let encoded = query
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }

    fn build(&self, method: Method, url: String, body: RequestBody, access: Access) -> HttpRequest {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if access == Access::Authenticated {
            if let Some(token) = self.tokens.access_token() {
                headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
            }
        }
        HttpRequest {
            method,
            url,
            headers,
            body,
        }
    }

    /// Sends a request and returns the raw body of a 2xx response.
    pub async fn execute(
        &self,
        method: Method,
        url: String,
        body: RequestBody,
        access: Access,
    ) -> Result<String, ApiError> {
        let request = self.build(method, url, body, access);
        log!("[API] {} {}", request.method, request.url);
        let response = self.transport.send(request).await.map_err(|err| {
            warn!("[API] Transport failure: {}", err);
            err
        })?;

        if response.is_success() {
            return Ok(response.body);
        }

        let err = ApiError::from_response(response.status, &response.body);
        if err.is_unauthorized() {
            warn!("[API] 401 received; clearing stored tokens");
            self.tokens.clear_tokens();
            let hooks = self.on_unauthorized.borrow().clone();
            for hook in hooks {
                hook();
            }
        } else {
            warn!("[API] Request failed with status {}: {}", response.status, err);
        }
        Err(err)
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: RequestBody,
        access: Access,
    ) -> Result<T, ApiError> {
        let text = self.execute(method, url, body, access).await?;
        // 204s and empty bodies decode as JSON null
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(text).map_err(ApiError::from)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        access: Access,
    ) -> Result<T, ApiError> {
        let url = self.url(path, query);
        self.request(Method::Get, url, RequestBody::Empty, access).await
    }

    pub async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        let url = self.url(path, &[]);
        self.request(method, url, RequestBody::Json(body), Access::Authenticated)
            .await
    }

    pub async fn send_form<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: FormPayload,
    ) -> Result<T, ApiError> {
        let url = self.url(path, &[]);
        self.request(method, url, RequestBody::Multipart(form), Access::Authenticated)
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path, &[]);
        self.execute(Method::Delete, url, RequestBody::Empty, Access::Authenticated)
            .await
            .map(|_| ())
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("tokens", &self.tokens)
            .finish()
    }
}

/// All resource groups over one shared client.
#[derive(Clone, Debug)]
pub struct Api {
    pub client: ApiClient,
    pub products: ProductsApi,
    pub blog: BlogApi,
    pub contact: ContactApi,
    pub auth: AuthApi,
}

impl Api {
    pub fn new(client: ApiClient) -> Self {
        Self {
            products: ProductsApi::new(client.clone()),
            blog: BlogApi::new(client.clone()),
            contact: ContactApi::new(client.clone()),
            auth: AuthApi::new(client.clone()),
            client,
        }
    }
}
