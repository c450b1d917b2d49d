// ABOUTME: Message rendering from the tutor's Markdown subset to a typed document tree
// ABOUTME: Re-exports the document model and the pure line-oriented parser
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

//! # Message Renderer
//!
//! Converts one assistant message into a [`RenderedDocument`] for display
//! layers. The supported subset is deliberately small: `#`/`##`/`###`
//! headings, `-`/`*` bullets, `1.`-style ordered items, `**bold**`,
//! `` `code` ``, and plain paragraphs.
//!
//! Rendering is pure and infallible: same input, same tree, no I/O, no error
//! path. Anything outside the subset falls back to plain paragraphs.
//!
//! ## Example
//!
//! ```rust
//! use photon_assistant::render::{render_message, BlockNode};
//!
//! let doc = render_message("# Momentum\nDefined as `p = mv`.");
//! assert_eq!(doc.blocks.len(), 2);
//! assert!(matches!(doc.blocks[0], BlockNode::Heading { .. }));
//! ```

/// Block and inline node types of the rendered tree
pub mod document;
/// Line classification and inline span parsing
pub mod parser;

pub use document::{BlockNode, HeadingLevel, InlineNode, RenderedDocument};
pub use parser::{parse_inline, render_message};
