use std::collections::BTreeMap;

use serde_json::Value;

/// Failure of a call against the bakery REST API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// 401 from the backend. The stored tokens are already cleared when this is returned.
    #[error("{0}")]
    Unauthorized(String),

    #[error("{message}")]
    Validation {
        status: u16,
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },

    #[error("Not found")]
    NotFound,

    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("{0}")]
    MissingToken(String),
}

impl ApiError {
    /// Classifies a non-2xx response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let (message, fields) = extract_message(status, body);
        match status {
            401 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound,
            400..=499 => ApiError::Validation {
                status,
                message,
                fields,
            },
            _ => ApiError::Http { status, message },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::NotFound => Some(404),
            ApiError::Validation { status, .. } | ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for a toast description.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Could not reach the server. Please check your connection.".to_string()
            }
            ApiError::NotFound => "The requested resource could not be found.".to_string(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Pulls a readable message out of an error body.
/// Order: `detail`, `message`, flattened field errors, bare string, status fallback.
pub fn extract_message(status: u16, body: &str) -> (String, BTreeMap<String, Vec<String>>) {
    let fallback = format!("Request failed with status {}", status);
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return (fallback, BTreeMap::new());
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => {
            let fields = field_errors(&map);
            for key in ["detail", "message"] {
                if let Some(Value::String(text)) = map.get(key) {
                    return (text.clone(), fields);
                }
            }
            let message = flatten_fields(&fields);
            if message.is_empty() {
                (fallback, fields)
            } else {
                (message, fields)
            }
        }
        Ok(Value::String(text)) => (text, BTreeMap::new()),
        Ok(Value::Array(items)) => {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            if joined.is_empty() {
                (fallback, BTreeMap::new())
            } else {
                (joined, BTreeMap::new())
            }
        }
        Ok(_) => (fallback, BTreeMap::new()),
        // HTML error pages from proxies are not worth surfacing
        Err(_) if trimmed.starts_with('<') => (fallback, BTreeMap::new()),
        Err(_) => (trimmed.to_string(), BTreeMap::new()),
    }
}

/// `field: first second` lines joined with newlines.
pub fn flatten_fields(fields: &BTreeMap<String, Vec<String>>) -> String {
    fields
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn field_errors(map: &serde_json::Map<String, Value>) -> BTreeMap<String, Vec<String>> {
    map.iter()
        .filter(|(key, _)| key.as_str() != "detail" && key.as_str() != "message")
        .filter_map(|(key, value)| {
            let messages = match value {
                Value::String(text) => vec![text.clone()],
                Value::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        Value::String(text) => text.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
                Value::Null => return None,
                other => vec![other.to_string()],
            };
            Some((key.clone(), messages))
        })
        .collect()
}

/// Invalid input caught before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid price")]
    InvalidPrice,

    #[error("Category must be a number")]
    InvalidCategory,

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("Passwords do not match")]
    PasswordMismatch,
}
