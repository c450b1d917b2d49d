// ABOUTME: Main library entry point for the Photon assistant core
// ABOUTME: Provides the physics tutor chat client and the Markdown-subset message renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

#![deny(unsafe_code)]

//! # Photon Assistant
//!
//! The conversational core of the Photon physics learning app: an async chat
//! client for an OpenAI-compatible completion backend, plus a pure renderer
//! that turns the tutor's Markdown-subset replies into a typed document tree
//! for display layers.
//!
//! ## Features
//!
//! - **Single-call chat client**: one validated, history-windowed completion
//!   request per question, with a canned offline fallback
//! - **Closed error taxonomy**: invalid input, missing configuration, empty
//!   replies, and transport failures surface unmodified to the caller
//! - **Pure message renderer**: headings, lists, bold, and inline code parsed
//!   into a [`render::RenderedDocument`] with no error path
//! - **Env-only configuration**: credentials and endpoint come from
//!   `PHOTON_LLM_*` environment variables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use photon_assistant::conversation::ConversationHistory;
//! use photon_assistant::llm::ChatClient;
//! use photon_assistant::render::render_message;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ChatClient::from_env()?;
//!     let mut history = ConversationHistory::new();
//!
//!     let reply = client.ask("What is momentum?", history.turns()).await?;
//!     history.push_user("What is momentum?");
//!     history.push_assistant(&reply.message, reply.usage.clone());
//!
//!     let document = render_message(&reply.message);
//!     println!("{} blocks", document.blocks.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **llm**: chat client, message shaping, and the tutor system prompt
//! - **render**: Markdown-subset parser producing the block tree
//! - **conversation**: session transcript owned by the caller
//! - **connectivity**: reachability probe gating outbound requests
//! - **config / constants / errors / logging**: ambient plumbing

/// Runtime configuration for the chat backend connection
pub mod config;

/// Connectivity probe abstraction gating outbound requests
pub mod connectivity;

/// Application constants and fixed policy values
pub mod constants;

/// Conversation turns and the session history container
pub mod conversation;

/// Unified error handling with standard error codes
pub mod errors;

/// Chat client and message types for the tutor backend
pub mod llm;

/// Logging configuration and structured tracing setup
pub mod logging;

/// Message rendering from the Markdown subset to a typed document tree
pub mod render;
