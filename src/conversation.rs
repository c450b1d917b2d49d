// ABOUTME: Conversation turn types and the session-lived history container
// ABOUTME: Owns the user/assistant transcript that feeds the chat client's context window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

//! # Conversation History
//!
//! A [`ConversationHistory`] accumulates the full transcript of a tutoring
//! session. The chat client reads it through a slice and never mutates it;
//! windowing to the most recent turns happens at request-building time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::llm::TokenUsage;

/// Speaker of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// Question or statement from the learner
    User,
    /// Reply produced by the assistant
    Assistant,
}

impl TurnRole {
    /// Wire-format string for this role
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One utterance in a tutoring session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Who spoke
    pub role: TurnRole,
    /// Verbatim text of the turn
    pub content: String,
    /// When the turn was recorded
    pub created_at: DateTime<Utc>,
    /// Token usage the backend reported for this turn; assistant turns only,
    /// carried as-is and never interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

impl ConversationTurn {
    /// Create a user turn stamped with the current time
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
            created_at: Utc::now(),
            usage: None,
        }
    }

    /// Create an assistant turn stamped with the current time
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            created_at: Utc::now(),
            usage: None,
        }
    }

    /// Attach the token usage reported for this assistant turn
    #[must_use]
    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = Some(usage);
        self
    }
}

/// Ordered transcript of a tutoring session, oldest turn first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    /// Create an empty history
    #[must_use]
    pub const fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Append a user turn
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ConversationTurn::user(content));
    }

    /// Append an assistant turn, keeping any backend-reported token usage
    pub fn push_assistant(&mut self, content: impl Into<String>, usage: Option<TokenUsage>) {
        let mut turn = ConversationTurn::assistant(content);
        turn.usage = usage;
        self.turns.push(turn);
    }

    /// Append an already-built turn
    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// All turns in chronological order
    #[must_use]
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Number of recorded turns
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// `true` when no turns have been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Drop all recorded turns
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
