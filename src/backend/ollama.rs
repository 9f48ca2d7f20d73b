//! Ollama chat backend (native `/api/chat`, NDJSON streaming).

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use serde::Deserialize;
use tracing::debug;

use crate::config::BackendConfig;
use crate::error::ColloquyError;
use crate::types::ChatDelta;

use super::http::{shared_client, status_to_error};
use super::{ChatBackend, ChatRequest};

pub struct OllamaBackend {
    base_url: String,
}

impl OllamaBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build a backend from the environment (`OLLAMA_BASE_URL` / `OLLAMA_HOST`).
    pub fn from_env() -> Self {
        Self::from_config(&BackendConfig::from_env())
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    fn build_request_body(&self, request: &ChatRequest) -> serde_json::Value {
        serde_json::json!({
            "model": request.model,
            "messages": request.messages,
            "options": request.options,
            "stream": true,
        })
    }
}

#[async_trait]
impl ChatBackend for OllamaBackend {
    fn backend_name(&self) -> &str {
        "ollama"
    }

    async fn stream_chat(
        &self,
        request: &ChatRequest,
    ) -> Result<BoxStream<'static, Result<ChatDelta, ColloquyError>>, ColloquyError> {
        let body = self.build_request_body(request);
        let url = format!("{}/api/chat", self.base_url);

        debug!(model = %request.model, "Ollama stream_chat");

        let resp = shared_client().post(&url).json(&body).send().await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let byte_stream = resp.bytes_stream();

        let stream = async_stream::stream! {
            let mut buffer = String::new();
            futures::pin_mut!(byte_stream);

            while let Some(chunk_result) = byte_stream.next().await {
                let chunk = match chunk_result {
                    Ok(c) => c,
                    Err(e) => {
                        yield Err(ColloquyError::Network(e));
                        break;
                    }
                };

                buffer.push_str(&String::from_utf8_lossy(&chunk));

                while let Some(line_end) = buffer.find('\n') {
                    let line = buffer[..line_end].trim().to_string();
                    buffer = buffer[line_end + 1..].to_string();

                    if line.is_empty() {
                        continue;
                    }

                    match serde_json::from_str::<OllamaChatChunk>(&line) {
                        Ok(chunk) => {
                            if let Some(err) = chunk.error {
                                yield Err(ColloquyError::Stream(err));
                                return;
                            }
                            let done = chunk.done;
                            yield Ok(ChatDelta {
                                content: chunk.message.map(|m| m.content).unwrap_or_default(),
                                done,
                            });
                            if done {
                                return;
                            }
                        }
                        Err(e) => {
                            yield Err(ColloquyError::Serialization(e));
                            return;
                        }
                    }
                }
            }
        };

        Ok(Box::pin(stream))
    }
}

// Ollama API response types (internal)

#[derive(Deserialize)]
struct OllamaChatChunk {
    #[serde(default)]
    message: Option<OllamaChatMessage>,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct OllamaChatMessage {
    #[serde(default)]
    content: String,
}
