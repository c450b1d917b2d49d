// ABOUTME: Typed document tree produced by the message renderer
// ABOUTME: Defines block and inline node kinds for the tutor's Markdown subset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

//! # Rendered Document Model
//!
//! The renderer output: an ordered sequence of [`BlockNode`]s, each carrying
//! an ordered sequence of [`InlineNode`] spans. Display layers map node kinds
//! to their own visual presentation; the tree itself carries no styling.

use serde::{Deserialize, Serialize};

/// Heading depth supported by the tutor's Markdown subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    /// `# ` heading
    H1,
    /// `## ` heading
    H2,
    /// `### ` heading
    H3,
}

impl HeadingLevel {
    /// Numeric depth, 1 through 3
    #[must_use]
    pub const fn depth(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }
}

/// One styled span within a line.
///
/// Spans never nest; bold inside code stays literal and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum InlineNode {
    /// Unstyled text
    Text(String),
    /// `**bold**` span with delimiters stripped
    Bold(String),
    /// `` `code` `` span with delimiters stripped
    Code(String),
}

impl InlineNode {
    /// Text carried by this span, without delimiters
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Bold(text) | Self::Code(text) => text,
        }
    }
}

/// One block-level element of a rendered message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BlockNode {
    /// Section heading
    Heading {
        /// Heading depth
        level: HeadingLevel,
        /// Inline spans of the heading text
        spans: Vec<InlineNode>,
    },
    /// Run of consecutive list items of one kind
    List {
        /// `true` for `1.`-style lists, `false` for `-`/`*` bullets
        ordered: bool,
        /// Inline spans of each item, in source order
        items: Vec<Vec<InlineNode>>,
    },
    /// Single line of prose
    Paragraph {
        /// Inline spans of the line
        spans: Vec<InlineNode>,
    },
}

/// Complete rendered form of one assistant message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Blocks in source order
    pub blocks: Vec<BlockNode>,
}

impl RenderedDocument {
    /// `true` when the source message rendered to nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
