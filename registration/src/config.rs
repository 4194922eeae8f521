//! API location for the register form.
//!
//! The base URL comes from an outside collaborator (build-time env in the
//! browser, a CLI flag natively). An empty base means same-origin requests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable naming the API base URL.
pub const BASE_URL_ENV: &str = "REGISTER_API_BASE_URL";

pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL {0:?}: expected http:// or https://")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin (and optional path prefix) without a trailing slash; empty for same-origin.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Build config from an optional raw base URL.
    ///
    /// Whitespace and trailing slashes are trimmed. `None` or blank input
    /// selects same-origin requests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when a non-empty value is not
    /// an `http://` or `https://` URL.
    pub fn from_base_url(raw: Option<&str>) -> Result<Self, ConfigError> {
        let trimmed = raw.unwrap_or_default().trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
        if !has_host {
            return Err(ConfigError::InvalidBaseUrl(trimmed.to_owned()));
        }
        Ok(Self { api_base_url: trimmed.to_owned() })
    }

    /// Full URL of the register endpoint.
    pub fn register_endpoint(&self) -> String {
        format!("{}{REGISTER_PATH}", self.api_base_url)
    }

    /// Client-side route shown after a successful registration.
    pub fn login_route(&self) -> &'static str {
        LOGIN_ROUTE
    }
}
