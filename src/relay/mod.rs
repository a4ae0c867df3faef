//! Submission to the third-party form relay.
//!
//! The relay accepts a multipart POST and answers with JSON. The controller
//! talks to it through the [`HttpClient`] trait; [`ReqwestClient`] is the
//! production implementation.

mod client;

pub use client::ReqwestClient;

use http::StatusCode;
use serde::Deserialize;

use crate::error::{FeedbackError, Result};
use crate::types::FormData;

/// Ordered multipart form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; repeated names are kept, as in multipart bodies
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Build the relay payload for a form snapshot.
    ///
    /// The consent checkbox is not sent. `_replyto` and `_subject` are relay
    /// control fields.
    pub fn from_form(data: &FormData, subject: &str) -> Self {
        let mut payload = Self::new();
        payload.append("fullName", &data.full_name);
        payload.append("email", &data.email);
        payload.append("phone", &data.phone);
        payload.append("organization", &data.organization);
        payload.append("message", &data.message);
        payload.append("_replyto", &data.email);
        payload.append("_subject", subject);
        payload
    }

    /// First value of the field `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|(n, _)| n.as_str()).collect()
    }
}

/// What the relay answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RelayResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Turn a non-2xx answer into an error carrying the relay's explanation
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let detail = relay_error_detail(&self.body).unwrap_or_else(|| {
            self.status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        });
        Err(FeedbackError::RelayStatus {
            status: self.status,
            detail,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Vec<RelayErrorItem>,
}

#[derive(Debug, Deserialize)]
struct RelayErrorItem {
    message: String,
}

/// Extract the error text from a relay JSON error body.
///
/// The relay answers either `{"error": "..."}` or
/// `{"errors": [{"message": "..."}, ...]}`.
pub fn relay_error_detail(body: &str) -> Option<String> {
    let parsed: RelayErrorBody = serde_json::from_str(body).ok()?;
    if !parsed.errors.is_empty() {
        return Some(
            parsed
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; "),
        );
    }
    parsed.error.filter(|e| !e.is_empty())
}

/// Outbound HTTP used for the submission
pub trait HttpClient: Send + Sync {
    /// POST `payload` as a multipart body to `url`, asking for a JSON answer.
    ///
    /// Returns the relay's answer for any HTTP status; `Err` means the
    /// request itself failed.
    fn post_form(
        &self,
        url: &str,
        payload: &FormPayload,
    ) -> impl std::future::Future<Output = Result<RelayResponse>> + Send;
}
