//! Colloquy — conversational LLM agents with streaming replies.
//!
//! Each [`agent::Agent`] owns one side of a conversation: a role-tagged
//! transcript seeded with a system prompt, and a streaming [`agent::Agent::chat`]
//! operation that records the finished reply once the fragment stream is
//! exhausted. Inference goes through the [`backend::ChatBackend`] seam;
//! [`backend::ollama::OllamaBackend`] speaks Ollama's native streaming chat
//! API.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use colloquy::prelude::*;
//!
//! # async fn example() -> colloquy::error::Result<()> {
//! let backend = Arc::new(OllamaBackend::from_env());
//! let mut agent = Agent::new(
//!     AgentParams::builder()
//!         .name("Ada")
//!         .model("llama3.2")
//!         .system_prompt("You are helpful.")
//!         .build(),
//!     backend,
//! );
//!
//! let mut reply = agent.chat(Some("Hello!")).await?;
//! while let Some(fragment) = reply.next_fragment().await {
//!     print!("{}", fragment?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod backend;
pub mod config;
pub mod error;
pub mod prelude;
pub mod types;
