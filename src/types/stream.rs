//! Streaming types.

use serde::{Deserialize, Serialize};

/// A fragment emitted during a streamed reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatDelta {
    /// The incremental text chunk.
    pub content: String,
    /// Set on the terminal chunk of a reply.
    #[serde(default)]
    pub done: bool,
}

impl ChatDelta {
    /// A content-bearing fragment.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            done: false,
        }
    }

    /// The terminal fragment.
    pub fn done() -> Self {
        Self {
            content: String::new(),
            done: true,
        }
    }
}
