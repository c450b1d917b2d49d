// ABOUTME: Chat message types and the tutor chat client for the Photon assistant
// ABOUTME: Defines roles, messages, token usage, and the reply envelope returned to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

//! # Tutor Chat
//!
//! Message types shared between the assistant and its OpenAI-compatible
//! backend, plus [`ChatClient`], the single entry point for asking the tutor
//! a question.
//!
//! ## Example
//!
//! ```rust,no_run
//! use photon_assistant::config::AssistantConfig;
//! use photon_assistant::conversation::ConversationHistory;
//! use photon_assistant::llm::ChatClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AssistantConfig::from_env();
//!     let client = ChatClient::new(config)?;
//!
//!     let mut history = ConversationHistory::new();
//!     let reply = client.ask("What is momentum?", history.turns()).await?;
//!
//!     history.push_user("What is momentum?");
//!     history.push_assistant(&reply.message, reply.usage.clone());
//!     println!("{}", reply.message);
//!     Ok(())
//! }
//! ```

mod client;
pub mod prompts;

pub use client::ChatClient;
pub use prompts::{OUT_OF_SCOPE_REFUSAL, PHOTON_SYSTEM_PROMPT};

use serde::{Deserialize, Serialize};

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

impl MessageRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

// ============================================================================
// Reply Types
// ============================================================================

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Reply returned by [`ChatClient::ask`].
///
/// `message` is normalized plain text in the tutor's Markdown subset, ready
/// for [`crate::render::render_message`]. `usage` is `None` when the backend
/// omits it and on offline fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    /// Normalized assistant message text
    pub message: String,
    /// Token usage if the backend reported it
    pub usage: Option<TokenUsage>,
    /// Model that produced the reply
    pub model: String,
}
