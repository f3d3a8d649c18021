// src/config.rs
use std::env;

// The two endpoints the client is known to talk to.
pub const LOCAL_BASE_URL: &str = "http://localhost:8000";
pub const PRODUCTION_BASE_URL: &str = "https://babaru-cloud.onrender.com";

pub const DEFAULT_USER_ID: &str = "user_default_01";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn local() -> Self {
        Self::with_base_url(LOCAL_BASE_URL)
    }

    pub fn production() -> Self {
        Self::with_base_url(PRODUCTION_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// BABARU_API_URL overrides; the local endpoint is the default.
    pub fn from_env() -> Self {
        match env::var("BABARU_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::local(),
        }
    }

    pub fn chat_url(&self) -> String {
        format!("{}/v1/chat", self.base_url)
    }

    pub fn status_url(&self) -> String {
        format!("{}/", self.base_url)
    }
}
