//! Convenience re-exports for common use.

pub use crate::agent::{Agent, AgentParams, ReplyStream};
pub use crate::backend::ollama::OllamaBackend;
pub use crate::backend::{ChatBackend, ChatRequest, SamplingOptions};
pub use crate::config::BackendConfig;
pub use crate::error::{ColloquyError, Result};
pub use crate::types::{ChatDelta, Message, Role};
