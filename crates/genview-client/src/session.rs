use std::fmt;

use genview_types::GenerateError;

use crate::Generator;

/// Identifies one submission within a session. Later submissions get larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A started submission: the prompt as it was when the trigger fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: RequestId,
    pub prompt: String,
}

/// What happened to a result offered to [`PromptSession::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    /// A newer submission was started; the result was dropped.
    Stale,
}

/// State behind the prompt view: the prompt being edited, the last response
/// shown, and the id of the newest submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSession {
    prompt: String,
    response: String,
    latest: Option<RequestId>,
    issued: u64,
}

impl PromptSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn latest(&self) -> Option<RequestId> {
        self.latest
    }

    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    /// Start a submission for the current prompt. Returns `None` and leaves
    /// the session untouched when the prompt is empty.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.prompt.is_empty() {
            return None;
        }

        self.issued += 1;
        let id = RequestId(self.issued);
        self.latest = Some(id);

        tracing::info!(request = %id, prompt_len = self.prompt.len(), "prompt submitted");

        Some(Submission {
            id,
            prompt: self.prompt.clone(),
        })
    }

    pub fn is_latest(&self, id: RequestId) -> bool {
        self.latest == Some(id)
    }

    /// Offer the outcome of submission `id`. Only the newest submission may
    /// write the response; anything older is discarded.
    pub fn settle(&mut self, id: RequestId, outcome: Result<String, GenerateError>) -> Settlement {
        if !self.is_latest(id) {
            match &outcome {
                Ok(_) => tracing::debug!(request = %id, "discarding stale response"),
                Err(e) => tracing::debug!(request = %id, error = %e, "discarding stale failure"),
            }
            return Settlement::Stale;
        }

        self.response = match outcome {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(request = %id, error = %e, "generation request failed");
                e.user_message().to_string()
            }
        };
        Settlement::Applied
    }

    /// Begin, send and settle in one step. Returns `None` when nothing was sent.
    pub async fn submit<G>(&mut self, generator: &G) -> Option<Settlement>
    where
        G: Generator + ?Sized,
    {
        let submission = self.begin_submit()?;
        let outcome = generator.generate(&submission.prompt).await;
        Some(self.settle(submission.id, outcome))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
