// ABOUTME: Application constants and fixed policy values for the assistant
// ABOUTME: Centralizes the history window, sampling temperature, endpoints, and env var names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

//! # Application Constants
//!
//! Named policy values used across the assistant. The conversation window and
//! sampling temperature are deliberate product decisions, not tunables, so
//! they live here rather than in [`crate::config::AssistantConfig`].

/// Service name used for logging and diagnostics
pub const SERVICE_NAME: &str = "photon-assistant";

// ============================================================================
// Conversation Policy
// ============================================================================

/// Number of most recent conversation turns sent with each request
pub const HISTORY_WINDOW: usize = 10;

/// Sampling temperature for tutor replies; low for factual consistency
pub const SAMPLING_TEMPERATURE: f32 = 0.3;

// ============================================================================
// Backend Defaults
// ============================================================================

/// Default model served by the chat backend
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default base URL for the OpenAI-compatible chat backend
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Connection timeout for the chat backend
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// End-to-end request timeout; completions can take a while under load
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// Offline Fallback
// ============================================================================

/// Model identifier reported on offline fallback replies
pub const OFFLINE_MODEL_ID: &str = "offline-fallback";

/// Canned reply returned when the connectivity probe reports offline.
///
/// Written in the renderer's Markdown subset; the first line is the marker
/// display layers key off to style the offline state.
pub const OFFLINE_FALLBACK_MESSAGE: &str = "\
# Offline Mode

I can't reach the Photon tutor service right now, so your question was not sent.

- Check your internet connection and resubmit your question
- Review earlier answers in this session
- Browse the **simulations** tab, which works without a connection

Reconnect and ask again when you're ready.";

// ============================================================================
// Environment Variables
// ============================================================================

/// Environment variable names read by [`crate::config::AssistantConfig::from_env`]
pub mod env_vars {
    /// API credential for the chat backend
    pub const API_KEY: &str = "PHOTON_LLM_API_KEY";

    /// Base URL override for the chat backend
    pub const BASE_URL: &str = "PHOTON_LLM_BASE_URL";

    /// Model override for the chat backend
    pub const MODEL: &str = "PHOTON_LLM_MODEL";
}
