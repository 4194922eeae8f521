//! Register endpoint wire contract and the transport seam.
//!
//! The request is `multipart/form-data` with text parts `name`, `email`,
//! `password` and a binary `profile` part. Responses carry an optional JSON
//! `{ "message": string }` body on both success and failure.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::draft::DraftField;

/// Borrowed view of a draft that passed the profile-image precondition.
#[derive(Debug)]
pub struct RegistrationForm<'a, F> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub profile: &'a F,
}

impl<F> Clone for RegistrationForm<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for RegistrationForm<'_, F> {}

impl<'a, F> RegistrationForm<'a, F> {
    /// Text parts in submission order, keyed by multipart part name.
    pub fn text_parts(&self) -> [(&'static str, &'a str); 3] {
        [
            (DraftField::Name.as_str(), self.name),
            (DraftField::Email.as_str(), self.email),
            (DraftField::Password.as_str(), self.password),
        ]
    }

    /// Multipart part name for the binary image.
    pub fn profile_part(&self) -> &'static str {
        DraftField::Profile.as_str()
    }
}

/// JSON body returned by the register endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ResponseBody {
    /// Parse a response body leniently: anything that is not a JSON object
    /// with an optional string `message` yields `None`.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        serde_json::from_slice(bytes).ok()
    }
}

/// Settled HTTP exchange, whatever its status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterReply {
    pub status: u16,
    pub body: Option<ResponseBody>,
}

impl RegisterReply {
    pub fn new(status: u16, body: Option<ResponseBody>) -> Self {
        Self { status, body }
    }

    /// Server-supplied message, ignoring empty strings.
    pub fn message(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| b.message.as_deref())
            .filter(|m| !m.is_empty())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure before any HTTP response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The multipart body or request could not be assembled.
    #[error("failed to build register request: {0}")]
    Build(String),
    /// Network failure, CORS rejection, or an aborted request.
    #[error("register request failed: {0}")]
    Network(String),
}

/// Outbound register call.
///
/// Implementations return `Ok` for every response that arrives, including
/// non-2xx statuses; `Err` is reserved for requests that never settled.
#[async_trait(?Send)]
pub trait RegisterTransport {
    type File;

    /// POST `form` to `url` as `multipart/form-data`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP response was obtained.
    async fn register(&self, url: &str, form: RegistrationForm<'_, Self::File>) -> Result<RegisterReply, TransportError>;
}
