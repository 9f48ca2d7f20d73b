//! Conversational agents: transcript ownership and streaming replies.

pub mod reply;

pub use reply::ReplyStream;

use std::fmt;
use std::sync::Arc;

use bon::Builder;

use crate::backend::{ChatBackend, ChatRequest, SamplingOptions};
use crate::error::ColloquyError;
use crate::types::{Message, Role};

/// Construction parameters for an [`Agent`].
#[derive(Debug, Clone, Builder)]
pub struct AgentParams {
    /// Display name.
    #[builder(into)]
    pub name: String,
    /// Backend model identifier.
    #[builder(into)]
    pub model: String,
    /// Sampling temperature.
    #[builder(default = 0.8)]
    pub temperature: f32,
    /// Token window passed to the backend as `num_ctx`.
    #[builder(default = 2048)]
    pub ctx_size: u32,
    /// Instruction message seeding the agent, stored as transcript entry 0.
    #[builder(into)]
    pub system_prompt: String,
}

/// One participant in a conversation.
///
/// An agent owns an identity (name, model, sampling parameters) and an
/// append-only transcript whose first entry is always the system message.
/// Replies stream through the [`ChatBackend`] the agent was built with; the
/// finished reply is recorded on the transcript once the stream is
/// exhausted.
///
/// An agent is driven by one conversation loop at a time: [`Agent::chat`]
/// borrows the agent mutably for the lifetime of the returned
/// [`ReplyStream`].
pub struct Agent {
    name: String,
    model: String,
    temperature: f32,
    ctx_size: u32,
    transcript: Vec<Message>,
    backend: Arc<dyn ChatBackend>,
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("ctx_size", &self.ctx_size)
            .field("transcript", &self.transcript)
            .field("backend", &self.backend.backend_name())
            .finish()
    }
}

impl Agent {
    /// Create an agent. The transcript starts as a single system message.
    pub fn new(params: AgentParams, backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            name: params.name,
            model: params.model,
            temperature: params.temperature,
            ctx_size: params.ctx_size,
            transcript: vec![Message::system(params.system_prompt)],
            backend,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn ctx_size(&self) -> u32 {
        self.ctx_size
    }

    /// Owned snapshot of the transcript.
    ///
    /// Mutating the returned vector never affects the agent's own history.
    pub fn transcript(&self) -> Vec<Message> {
        self.transcript.clone()
    }

    /// The system prompt (transcript entry 0).
    pub fn system_prompt(&self) -> &str {
        &self.transcript[0].content
    }

    /// Overwrite the system prompt in place. Role and position never change.
    pub fn set_system_prompt(&mut self, value: impl Into<String>) {
        self.transcript[0].content = value.into();
    }

    /// Append a message. Role alternation is the caller's responsibility.
    pub fn push_message(&mut self, role: Role, content: impl Into<String>) {
        self.transcript.push(Message::new(role, content));
    }

    /// Stream the agent's next reply.
    ///
    /// With `Some(input)` the input is recorded as a user message before the
    /// backend is invoked; with `None` the transcript is submitted as-is —
    /// the agent opening the conversation, or speaking again without new
    /// input.
    ///
    /// The returned [`ReplyStream`] must be driven to exhaustion for the
    /// assistant turn to be recorded; see its docs for the failure and
    /// partial-consumption behavior.
    pub async fn chat(&mut self, user_input: Option<&str>) -> Result<ReplyStream<'_>, ColloquyError> {
        if let Some(input) = user_input {
            self.push_message(Role::User, input);
        }

        let request = ChatRequest {
            model: self.model.clone(),
            messages: self.transcript.clone(),
            options: SamplingOptions {
                num_ctx: self.ctx_size,
                temperature: self.temperature,
            },
        };

        let inner = self.backend.stream_chat(&request).await?;

        Ok(ReplyStream::new(self, inner))
    }
}
