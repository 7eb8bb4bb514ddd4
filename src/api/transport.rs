use std::rc::Rc;

use async_trait::async_trait;

use super::{HttpRequest, HttpResponse};
use crate::error::ApiError;

/// Moves one request over the wire. Non-2xx statuses are returned as responses,
/// only connection-level failures are errors.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTransport;

#[cfg(not(target_arch = "wasm32"))]
pub use native::NativeTransport;

#[cfg(target_arch = "wasm32")]
pub fn default_transport() -> Rc<dyn Transport> {
    Rc::new(BrowserTransport)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_transport() -> Rc<dyn Transport> {
    Rc::new(NativeTransport::new())
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use async_trait::async_trait;
    use gloo_net::http::Request;
    use wasm_bindgen::JsValue;
    use web_sys::{Blob, FormData};

    use super::Transport;
    use crate::api::{FormPayload, FormValue, HttpRequest, HttpResponse, Method, RequestBody};
    use crate::error::ApiError;

    /// `fetch` through gloo-net.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserTransport;

    fn js_error(err: JsValue) -> ApiError {
        ApiError::Network(format!("{:?}", err))
    }

    fn to_form_data(payload: &FormPayload) -> Result<FormData, ApiError> {
        let form = FormData::new().map_err(js_error)?;
        for (name, value) in &payload.fields {
            match value {
                FormValue::Text(text) => form.append_with_str(name, text).map_err(js_error)?,
                FormValue::File {
                    file_name, bytes, ..
                } => {
                    let chunk = js_sys::Uint8Array::from(bytes.as_slice());
                    let parts = js_sys::Array::of1(&JsValue::from(chunk));
                    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(js_error)?;
                    form.append_with_blob_and_filename(name, &blob, file_name)
                        .map_err(js_error)?
                }
            }
        }
        Ok(form)
    }

    #[async_trait(?Send)]
    impl Transport for BrowserTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let network = |err: gloo_net::Error| ApiError::Network(err.to_string());
            let response = match &request.body {
                RequestBody::Empty => builder.send().await.map_err(network)?,
                RequestBody::Json(value) => builder
                    .json(value)
                    .map_err(network)?
                    .send()
                    .await
                    .map_err(network)?,
                RequestBody::Multipart(payload) => {
                    // the browser sets the multipart boundary itself
                    let form = to_form_data(payload)?;
                    builder
                        .body(form)
                        .map_err(network)?
                        .send()
                        .await
                        .map_err(network)?
                }
            };

            let status = response.status();
            let body = response.text().await.map_err(network)?;
            Ok(HttpResponse { status, body })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use async_trait::async_trait;
    use reqwest::multipart::{Form, Part};

    use super::Transport;
    use crate::api::{FormPayload, FormValue, HttpRequest, HttpResponse, Method, RequestBody};
    use crate::error::ApiError;

    /// reqwest-backed transport used during SSR and in native tooling.
    #[derive(Debug, Clone, Default)]
    pub struct NativeTransport {
        client: reqwest::Client,
    }

    impl NativeTransport {
        pub fn new() -> Self {
            Self {
                client: reqwest::Client::new(),
            }
        }
    }

    fn network(err: reqwest::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    fn to_form(payload: FormPayload) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in payload.fields {
            form = match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File {
                    file_name,
                    content_type,
                    bytes,
                } => {
                    let part = Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(&content_type)
                        .map_err(network)?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }

    #[async_trait(?Send)]
    impl Transport for NativeTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Patch => reqwest::Method::PATCH,
                Method::Delete => reqwest::Method::DELETE,
            };
            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder = match request.body {
                RequestBody::Empty => builder,
                RequestBody::Json(value) => builder.json(&value),
                RequestBody::Multipart(payload) => builder.multipart(to_form(payload)?),
            };

            let response = builder.send().await.map_err(network)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(network)?;
            Ok(HttpResponse { status, body })
        }
    }
}
