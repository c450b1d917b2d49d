// ABOUTME: Chat client for the physics tutor backend over the OpenAI-compatible API
// ABOUTME: Validates prompts, windows history, normalizes reply content, and maps failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

//! # Chat Client
//!
//! [`ChatClient::ask`] is the single entry point for tutor questions. Each
//! call checks the prompt, consults the connectivity probe, shapes the context
//! window, and performs one non-streaming completion request.
//!
//! ## Example
//!
//! ```rust,no_run
//! use photon_assistant::conversation::ConversationHistory;
//! use photon_assistant::llm::ChatClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ChatClient::from_env()?;
//!     let history = ConversationHistory::new();
//!     let reply = client.ask("Why is the sky blue?", history.turns()).await?;
//!     println!("{}", reply.message);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::prompts::PHOTON_SYSTEM_PROMPT;
use super::{AssistantReply, ChatMessage, MessageRole, TokenUsage};
use crate::config::AssistantConfig;
use crate::connectivity::{AlwaysOnline, ConnectivityProbe};
use crate::constants::{
    env_vars, HISTORY_WINDOW, OFFLINE_FALLBACK_MESSAGE, OFFLINE_MODEL_ID, SAMPLING_TEMPERATURE,
};
use crate::conversation::{ConversationTurn, TurnRole};
use crate::errors::{AppError, AppResult};

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// Completion request structure (OpenAI-compatible)
#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    stream: bool,
}

/// Message structure sent to the backend
#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for WireMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// Completion response structure (OpenAI-compatible)
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Option<WireUsage>,
    #[serde(default)]
    model: Option<String>,
}

/// Choice in completion response
#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

/// Message in completion response
#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<MessageContent>,
}

/// Usage statistics in completion response
#[derive(Debug, Deserialize)]
struct WireUsage {
    /// Tokens used in the prompt
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    /// Tokens generated in completion
    #[serde(rename = "completion_tokens")]
    completion: u32,
    /// Total tokens used
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Backend API error response
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Content Normalization
// ============================================================================

/// Assistant content as backends actually ship it.
///
/// Serde tries untagged variants in declaration order, so the plain string
/// form is matched first, then part arrays, then text-bearing objects.
/// Anything else falls through to `Other` and normalizes to empty.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
    TextObject { text: String },
    Other(Value),
}

impl MessageContent {
    /// Collapse the polymorphic content into trimmed plain text
    fn normalize(self) -> String {
        match self {
            Self::Text(text) | Self::TextObject { text } => text.trim().to_owned(),
            Self::Parts(parts) => {
                let texts: Vec<&str> = parts.iter().filter_map(ContentPart::text).collect();
                texts.join("\n").trim().to_owned()
            }
            Self::Other(_) => String::new(),
        }
    }
}

/// One element of a multi-part content array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    Text(String),
    TextField { text: String },
    ContentField { content: String },
    Other(Value),
}

impl ContentPart {
    /// Text carried by this part, `None` for unrecognized shapes
    fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::TextField { text } => Some(text),
            Self::ContentField { content } => Some(content),
            Self::Other(_) => None,
        }
    }
}

// ============================================================================
// Client Implementation
// ============================================================================

/// Chat client for the Photon physics tutor backend.
///
/// Cheap to clone; the underlying HTTP client is shared.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    config: AssistantConfig,
    probe: Arc<dyn ConnectivityProbe>,
}

impl ChatClient {
    /// Create a client with the given configuration.
    ///
    /// The connectivity probe defaults to [`AlwaysOnline`]; override it with
    /// [`Self::with_probe`].
    ///
    /// # Errors
    ///
    /// Returns a `Misconfigured` error if the HTTP client cannot be built.
    pub fn new(config: AssistantConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::misconfigured("failed to build HTTP client").with_source(e))?;

        Ok(Self {
            client,
            config,
            probe: Arc::new(AlwaysOnline),
        })
    }

    /// Create a client configured from `PHOTON_LLM_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `Misconfigured` error if the HTTP client cannot be built.
    pub fn from_env() -> AppResult<Self> {
        let config = AssistantConfig::from_env();
        info!(
            model = %config.model,
            base_url = %config.base_url,
            "Building chat client from environment"
        );
        Self::new(config)
    }

    /// Replace the connectivity probe
    #[must_use]
    pub fn with_probe(mut self, probe: Arc<dyn ConnectivityProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// Shape the message sequence for one request: the system prompt, the
    /// most recent history turns oldest first, then the new prompt.
    ///
    /// At most [`HISTORY_WINDOW`] history turns are included; older turns are
    /// dropped from the request but never from the caller's history.
    #[must_use]
    pub fn build_context(prompt: &str, history: &[ConversationTurn]) -> Vec<ChatMessage> {
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        let recent = &history[start..];

        let mut messages = Vec::with_capacity(recent.len() + 2);
        messages.push(ChatMessage::system(PHOTON_SYSTEM_PROMPT));

        for turn in recent {
            let role = match turn.role {
                TurnRole::User => MessageRole::User,
                TurnRole::Assistant => MessageRole::Assistant,
            };
            messages.push(ChatMessage::new(role, turn.content.clone()));
        }

        messages.push(ChatMessage::user(prompt));
        messages
    }

    /// Canned reply used when the probe reports offline
    fn offline_reply() -> AssistantReply {
        AssistantReply {
            message: OFFLINE_FALLBACK_MESSAGE.to_owned(),
            usage: None,
            model: OFFLINE_MODEL_ID.to_owned(),
        }
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Parse an error response from the backend.
    ///
    /// Every non-2xx status maps to `TransportFailure`; the status class only
    /// shapes the message.
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            match status.as_u16() {
                401 | 403 => AppError::transport_failure(format!(
                    "chat backend rejected the credential: {}",
                    error_response.error.message
                )),
                429 => AppError::transport_failure(format!(
                    "chat backend rate limit exceeded: {}",
                    error_response.error.message
                )),
                500..=599 => AppError::transport_failure(format!(
                    "chat backend unavailable: {}",
                    error_response.error.message
                )),
                _ => AppError::transport_failure(format!(
                    "chat backend error: {error_type} - {}",
                    error_response.error.message
                )),
            }
        } else {
            AppError::transport_failure(format!(
                "chat backend error ({status}): {}",
                body.chars().take(200).collect::<String>()
            ))
        }
    }

    /// Ask the tutor a question against the given conversation history.
    ///
    /// Steps run in a fixed order: prompt validation, connectivity probe,
    /// credential check, then a single non-streaming completion request. When
    /// the probe reports offline the canned fallback is returned as a success
    /// and no request is sent.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when the prompt trims to empty
    /// - `Misconfigured` when no API credential is available
    /// - `TransportFailure` when the request fails or the backend answers
    ///   with a non-success status or an unparseable body
    /// - `EmptyResponse` when the backend answers without usable content
    #[instrument(
        skip(self, prompt, history),
        fields(model = %self.config.model, history_len = history.len())
    )]
    pub async fn ask(
        &self,
        prompt: &str,
        history: &[ConversationTurn],
    ) -> AppResult<AssistantReply> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AppError::invalid_input("prompt must not be empty"));
        }

        if !self.probe.is_online() {
            warn!("Connectivity probe reports offline, returning canned fallback");
            return Ok(Self::offline_reply());
        }

        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::misconfigured(format!(
                    "no API credential configured, set {}",
                    env_vars::API_KEY
                ))
            })?;

        let messages = Self::build_context(prompt, history);

        debug!(
            message_count = messages.len(),
            "Sending chat completion request"
        );

        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: messages.iter().map(WireMessage::from).collect(),
            temperature: SAMPLING_TEMPERATURE,
            stream: false,
        };

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to send request to chat backend: {}", e);
                AppError::transport_failure("failed to reach chat backend").with_source(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("Failed to read chat backend response: {}", e);
            AppError::transport_failure(format!("failed to read response: {e}"))
        })?;

        if !status.is_success() {
            warn!(%status, "Chat backend returned an error status");
            return Err(Self::parse_error_response(status, &body));
        }

        let completion: CompletionResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse chat backend response: {}", e);
            AppError::transport_failure(format!("failed to parse response: {e}"))
        })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::empty_response("backend returned no choices"))?;

        let message = choice
            .message
            .content
            .map(MessageContent::normalize)
            .unwrap_or_default();

        if message.is_empty() {
            warn!("Chat backend returned no usable content");
            return Err(AppError::empty_response("assistant returned an empty reply"));
        }

        debug!(
            "Received completion: {} chars, finish_reason: {:?}",
            message.len(),
            choice.finish_reason
        );

        let reply = AssistantReply {
            message,
            usage: completion.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            model: completion
                .model
                .unwrap_or_else(|| self.config.model.clone()),
        };

        info!(chars = reply.message.len(), "Chat completion finished");

        Ok(reply)
    }
}
