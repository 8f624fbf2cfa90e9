//! Shared types for the genview prompt front-end.
//!
//! This crate has no I/O and compiles for both native and `wasm32` targets:
//! - `GenerateRequest` / `GenerateReply`: the JSON exchanged with the endpoint
//! - `GenerateError`: why a generation request failed
//! - `ClientConfig`: where requests go and how long they may take

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Endpoint the view posts prompts to unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate/";

/// The only failure text ever shown to the user.
pub const FAILURE_MESSAGE: &str = "Failed to generate response.";

// ---------------------------------------------------------------------------
// GenerateError
// ---------------------------------------------------------------------------

/// Why a generation request failed.
///
/// The view collapses every variant to [`FAILURE_MESSAGE`]; the variants only
/// exist so the diagnostic log can name the cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("Request to {endpoint} failed: {message}")]
    Network { endpoint: String, message: String },

    #[error("Request to {endpoint} timed out after {timeout_ms}ms")]
    Timeout { endpoint: String, timeout_ms: u64 },

    #[error("Endpoint returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response body: {message}")]
    Decode { message: String },

    #[error("Response body has no string `response` field")]
    MissingResponse,
}

impl GenerateError {
    /// Text shown in the response region for this failure.
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Body of the outbound POST: `{ "prompt": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Body of a successful reply. Only `response` is read; other fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateReply {
    #[serde(default)]
    pub response: Option<serde_json::Value>,
}

impl GenerateReply {
    /// Extract the generated text, rejecting a missing or non-string field.
    pub fn into_text(self) -> Result<String, GenerateError> {
        match self.response {
            Some(serde_json::Value::String(text)) => Ok(text),
            _ => Err(GenerateError::MissingResponse),
        }
    }
}

// ---------------------------------------------------------------------------
// ClientConfig
// ---------------------------------------------------------------------------

/// Where prompts are sent. No timeout unless one is set explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
