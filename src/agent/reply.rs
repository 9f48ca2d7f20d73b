//! Streamed reply consumption and finalization.

use futures::stream::BoxStream;
use futures::StreamExt;

use crate::error::ColloquyError;
use crate::types::{ChatDelta, Role};

use super::Agent;

/// A lazy, finite, non-restartable sequence of reply fragments.
///
/// Fragments are yielded as the backend produces them. Once the sequence is
/// exhausted, the concatenated, whitespace-trimmed reply is appended to the
/// agent's transcript as a single assistant message — finalization is a
/// terminal step of exhaustion, so a stream dropped early records nothing.
///
/// A backend error ends the sequence with that error; no assistant message
/// is recorded, and fragments already yielded stay yielded.
pub struct ReplyStream<'a> {
    agent: &'a mut Agent,
    inner: BoxStream<'static, Result<ChatDelta, ColloquyError>>,
    collected: String,
    finished: bool,
}

impl<'a> ReplyStream<'a> {
    pub(super) fn new(
        agent: &'a mut Agent,
        inner: BoxStream<'static, Result<ChatDelta, ColloquyError>>,
    ) -> Self {
        Self {
            agent,
            inner,
            collected: String::new(),
            finished: false,
        }
    }

    /// The next text fragment, or `None` once the reply is complete.
    pub async fn next_fragment(&mut self) -> Option<Result<String, ColloquyError>> {
        if self.finished {
            return None;
        }

        match self.inner.next().await {
            Some(Ok(delta)) => {
                self.collected.push_str(&delta.content);
                if delta.done {
                    self.finish();
                    if delta.content.is_empty() {
                        return None;
                    }
                }
                Some(Ok(delta.content))
            }
            Some(Err(e)) => {
                self.finished = true;
                Some(Err(e))
            }
            None => {
                self.finish();
                None
            }
        }
    }

    /// Drain the remaining fragments and return the full trimmed reply.
    pub async fn collect(mut self) -> Result<String, ColloquyError> {
        while let Some(fragment) = self.next_fragment().await {
            fragment?;
        }
        Ok(self.collected.trim().to_string())
    }

    /// Terminal step: record the assistant turn on the transcript.
    fn finish(&mut self) {
        self.finished = true;
        self.agent
            .push_message(Role::Assistant, self.collected.trim());
    }
}
