use axum::http::{HeaderMap, HeaderName, HeaderValue};

pub const DEFAULT_ALLOWED_ORIGIN: &str = "*";
pub const DEFAULT_ALLOWED_METHODS: &str = "POST, OPTIONS";
pub const DEFAULT_ALLOWED_HEADERS: &str = "Content-Type";

/// Static response headers every adapter puts on every response, errors and preflight included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origin: String,
    pub allowed_methods: String,
    pub allowed_headers: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            allowed_methods: DEFAULT_ALLOWED_METHODS.to_string(),
            allowed_headers: DEFAULT_ALLOWED_HEADERS.to_string(),
        }
    }
}

impl CorsConfig {
    pub fn new(allowed_origin: impl Into<String>) -> Self {
        Self {
            allowed_origin: allowed_origin.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("CORS_ALLOWED_ORIGIN").filter(|origin| !origin.is_empty()) {
            Some(origin) => Self::new(origin),
            None => Self::default(),
        }
    }

    /// Header list in canonical casing, `Content-Type` included.
    pub fn response_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Access-Control-Allow-Origin", self.allowed_origin.clone()),
            ("Access-Control-Allow-Methods", self.allowed_methods.clone()),
            ("Access-Control-Allow-Headers", self.allowed_headers.clone()),
            ("Content-Type", "application/json".to_string()),
        ]
    }

    pub fn apply(&self, headers: &mut HeaderMap) {
        for (name, value) in self.response_headers() {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = name, value = %value, "Skipping invalid response header"),
            }
        }
    }
}
