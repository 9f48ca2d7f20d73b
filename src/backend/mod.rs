//! Chat backend trait and implementations.

pub mod http;
pub mod ollama;

use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::Serialize;

use crate::error::ColloquyError;
use crate::types::{ChatDelta, Message};

/// A request sent to a chat backend.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub options: SamplingOptions,
}

/// Sampling options forwarded to the backend verbatim.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SamplingOptions {
    /// Token window the backend should use.
    pub num_ctx: u32,
    /// Sampling randomness.
    pub temperature: f32,
}

/// Core trait implemented by chat backends.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Backend name (e.g., "ollama").
    fn backend_name(&self) -> &str;

    /// Stream an assistant reply for the given request.
    ///
    /// The returned stream yields fragments as the backend produces them and
    /// ends after the terminal fragment. Errors end the stream.
    async fn stream_chat(
        &self,
        request: &ChatRequest,
    ) -> Result<BoxStream<'static, Result<ChatDelta, ColloquyError>>, ColloquyError>;
}
