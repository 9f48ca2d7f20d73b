//! Shared test helpers and mock backend.

use std::sync::Mutex;

use async_trait::async_trait;
use futures::stream::BoxStream;

use colloquy::backend::{ChatBackend, ChatRequest};
use colloquy::error::ColloquyError;
use colloquy::types::ChatDelta;

/// One scripted streaming event.
pub enum ScriptEvent {
    Fragment(String),
    Error(String),
}

/// A mock backend that replays scripted fragment sequences and captures
/// the requests it receives.
#[derive(Default)]
pub struct MockBackend {
    scripts: Mutex<Vec<Vec<ScriptEvent>>>,
    requests: Mutex<Vec<ChatRequest>>,
    refusal: Mutex<Option<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply streamed as the given fragments, then a terminal chunk.
    pub fn queue_reply(&self, fragments: &[&str]) {
        self.scripts.lock().unwrap().push(
            fragments
                .iter()
                .map(|f| ScriptEvent::Fragment(f.to_string()))
                .collect(),
        );
    }

    /// Queue a reply that fails mid-stream after the given fragments.
    pub fn queue_error_after(&self, fragments: &[&str], message: &str) {
        let mut script: Vec<ScriptEvent> = fragments
            .iter()
            .map(|f| ScriptEvent::Fragment(f.to_string()))
            .collect();
        script.push(ScriptEvent::Error(message.to_string()));
        self.scripts.lock().unwrap().push(script);
    }

    /// Make the next `stream_chat` call itself fail.
    pub fn refuse_next(&self, message: &str) {
        *self.refusal.lock().unwrap() = Some(message.to_string());
    }

    /// The most recent captured request.
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    fn backend_name(&self) -> &str {
        "mock"
    }

    async fn stream_chat(
        &self,
        request: &ChatRequest,
    ) -> Result<BoxStream<'static, Result<ChatDelta, ColloquyError>>, ColloquyError> {
        if let Some(message) = self.refusal.lock().unwrap().take() {
            return Err(ColloquyError::Stream(message));
        }

        self.requests.lock().unwrap().push(request.clone());

        let script = {
            let mut scripts = self.scripts.lock().unwrap();
            if scripts.is_empty() {
                vec![ScriptEvent::Fragment("Mock streamed reply".to_string())]
            } else {
                scripts.remove(0)
            }
        };

        let stream = async_stream::stream! {
            for event in script {
                match event {
                    ScriptEvent::Fragment(text) => yield Ok(ChatDelta::text(text)),
                    ScriptEvent::Error(message) => {
                        yield Err(ColloquyError::Stream(message));
                        return;
                    }
                }
            }
            yield Ok(ChatDelta::done());
        };

        Ok(Box::pin(stream))
    }
}
