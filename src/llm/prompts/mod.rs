// ABOUTME: System prompt for the physics tutor loaded at compile time
// ABOUTME: Defines the tutor's scope, refusal rule, and the Markdown subset replies must use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy
//! maintenance. The system prompt pins the tutor to physics topics and to the
//! Markdown subset [`crate::render`] understands.

/// Photon physics tutor system prompt
///
/// Contains instructions for the assistant including:
/// - Role and the physics topics in scope
/// - The exact refusal sentence for off-topic questions
/// - Formatting rules limited to the renderer's Markdown subset
pub const PHOTON_SYSTEM_PROMPT: &str = include_str!("photon_system.md");

/// Verbatim refusal the tutor must give for questions outside physics
pub const OUT_OF_SCOPE_REFUSAL: &str =
    "I'm specialized in physics and can't assist with that topic.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_pins_refusal_sentence() {
        assert!(PHOTON_SYSTEM_PROMPT.contains(OUT_OF_SCOPE_REFUSAL));
    }

    #[test]
    fn system_prompt_names_markdown_subset() {
        assert!(PHOTON_SYSTEM_PROMPT.contains("Markdown subset"));
        assert!(PHOTON_SYSTEM_PROMPT.contains("physics"));
    }
}
