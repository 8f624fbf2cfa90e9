use async_trait::async_trait;

use genview_types::{ClientConfig, GenerateError, GenerateReply, GenerateRequest};

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Turns a prompt into generated text.
///
/// Futures are `Send` on native targets. In the browser the fetch futures
/// are not, so the bound is dropped on `wasm32`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Generator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

// ---------------------------------------------------------------------------
// HttpGenerator
// ---------------------------------------------------------------------------

/// Posts `{ "prompt": ... }` to the configured endpoint and reads `response`
/// from the JSON reply.
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpGenerator {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn transport_error(&self, err: reqwest::Error) -> GenerateError {
        if err.is_timeout() {
            GenerateError::Timeout {
                endpoint: self.config.endpoint.clone(),
                timeout_ms: self
                    .config
                    .timeout
                    .map(|t| t.as_millis() as u64)
                    .unwrap_or(0),
            }
        } else {
            GenerateError::Network {
                endpoint: self.config.endpoint.clone(),
                message: err.to_string(),
            }
        }
    }
}

impl Default for HttpGenerator {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Generator for HttpGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        tracing::debug!(
            endpoint = %self.config.endpoint,
            prompt_len = prompt.len(),
            "posting prompt"
        );

        let request = self
            .client
            .post(&self.config.endpoint)
            .json(&GenerateRequest::new(prompt));

        // Browser fetch has no per-request timeout here.
        #[cfg(not(target_arch = "wasm32"))]
        let request = match self.config.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        let resp = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| self.transport_error(e))?;

        decode_reply(status, &body)
    }
}

// ---------------------------------------------------------------------------
// Reply decoding
// ---------------------------------------------------------------------------

/// Classify a settled HTTP exchange: non-2xx is a status error, otherwise the
/// body must be JSON carrying a string `response`.
pub fn decode_reply(status: u16, body: &str) -> Result<String, GenerateError> {
    if !(200..300).contains(&status) {
        return Err(GenerateError::Status {
            status,
            message: body.trim().to_string(),
        });
    }

    let reply: GenerateReply =
        serde_json::from_str(body).map_err(|e| GenerateError::Decode {
            message: e.to_string(),
        })?;

    reply.into_text()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reply_success() {
        assert_eq!(decode_reply(200, r#"{"response":"hi"}"#).unwrap(), "hi");
        assert_eq!(decode_reply(201, r#"{"response":"created"}"#).unwrap(), "created");
    }

    #[test]
    fn decode_reply_non_success_status() {
        let err = decode_reply(500, "  internal error\n").unwrap_err();
        assert_eq!(
            err,
            GenerateError::Status {
                status: 500,
                message: "internal error".into(),
            }
        );

        // A well-formed body does not rescue a failing status.
        let err = decode_reply(404, r#"{"response":"hi"}"#).unwrap_err();
        assert!(matches!(err, GenerateError::Status { status: 404, .. }));
    }

    #[test]
    fn decode_reply_malformed_body() {
        let err = decode_reply(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, GenerateError::Decode { .. }));

        let err = decode_reply(200, "").unwrap_err();
        assert!(matches!(err, GenerateError::Decode { .. }));

        let err = decode_reply(200, r#""hi""#).unwrap_err();
        assert!(matches!(err, GenerateError::Decode { .. }));
    }

    #[test]
    fn decode_reply_missing_field() {
        let err = decode_reply(200, r#"{"generation":"hi"}"#).unwrap_err();
        assert_eq!(err, GenerateError::MissingResponse);
    }

    #[test]
    fn default_generator_targets_fixed_endpoint() {
        let generator = HttpGenerator::default();
        assert_eq!(generator.endpoint(), "http://localhost:8000/generate/");
    }
}
