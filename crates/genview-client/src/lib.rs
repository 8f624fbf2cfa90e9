//! Prompt submission client for the genview front-end.
//!
//! Provides the `Generator` trait, the reqwest-backed `HttpGenerator`, and
//! `PromptSession`, the framework-free state the prompt view renders from.

mod generator;
mod session;

pub use generator::*;
pub use session::*;

pub use genview_types::{
    ClientConfig, GenerateError, GenerateReply, GenerateRequest, DEFAULT_ENDPOINT, FAILURE_MESSAGE,
};
