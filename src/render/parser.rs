// ABOUTME: Line-oriented renderer turning assistant replies into a typed block tree
// ABOUTME: Classifies headings, lists, and paragraphs, then splits lines into inline spans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

use std::sync::OnceLock;

use regex::Regex;

use super::document::{BlockNode, HeadingLevel, InlineNode, RenderedDocument};

/// List under construction during the line scan.
///
/// Consecutive items of one kind accumulate here; any non-item line (or an
/// item of the other kind) flushes the buffer into a finished [`BlockNode`].
struct OpenList {
    ordered: bool,
    items: Vec<Vec<InlineNode>>,
}

/// Get compiled bold-span regex (cached)
///
/// Returns None if regex compilation fails (should never happen with a
/// hardcoded pattern); callers fall back to plain text.
fn bold_regex() -> Option<&'static Regex> {
    static BOLD_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    BOLD_REGEX
        .get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").ok())
        .as_ref()
}

/// Get compiled code-span regex (cached)
fn code_regex() -> Option<&'static Regex> {
    static CODE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    CODE_REGEX
        .get_or_init(|| Regex::new(r"`([^`]+)`").ok())
        .as_ref()
}

/// Ordered-list remainder if the line starts with digits, a dot, and a space.
///
/// Digits anywhere else in the line never trigger ordered-item detection,
/// and `1.` without a trailing space is prose.
fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

/// Split one line into styled spans.
///
/// Scans left to right; at each step the earliest `**bold**` or `` `code` ``
/// match wins. Both patterns require at least one non-delimiter character
/// inside, so a bare `**` stays literal. Spans never nest, and zero-length
/// gaps between matches are dropped rather than emitted as empty text nodes.
#[must_use]
pub fn parse_inline(line: &str) -> Vec<InlineNode> {
    let (Some(bold), Some(code)) = (bold_regex(), code_regex()) else {
        // Regex compilation failed; degrade to unstyled text
        if line.is_empty() {
            return Vec::new();
        }
        return vec![InlineNode::Text(line.to_owned())];
    };

    let mut spans = Vec::new();
    let mut rest = line;

    loop {
        let bold_match = bold.find(rest);
        let code_match = code.find(rest);

        let (found, is_bold) = match (bold_match, code_match) {
            (Some(b), Some(c)) => {
                if b.start() <= c.start() {
                    (b, true)
                } else {
                    (c, false)
                }
            }
            (Some(b), None) => (b, true),
            (None, Some(c)) => (c, false),
            (None, None) => break,
        };

        let gap = &rest[..found.start()];
        if !gap.is_empty() {
            spans.push(InlineNode::Text(gap.to_owned()));
        }

        let inner = if is_bold {
            let text = &rest[found.start() + 2..found.end() - 2];
            InlineNode::Bold(text.to_owned())
        } else {
            let text = &rest[found.start() + 1..found.end() - 1];
            InlineNode::Code(text.to_owned())
        };
        spans.push(inner);

        rest = &rest[found.end()..];
    }

    if !rest.is_empty() {
        spans.push(InlineNode::Text(rest.to_owned()));
    }

    spans
}

/// Emit the open list, if any, as a finished block
fn flush_list(open: &mut Option<OpenList>, blocks: &mut Vec<BlockNode>) {
    if let Some(list) = open.take() {
        blocks.push(BlockNode::List {
            ordered: list.ordered,
            items: list.items,
        });
    }
}

/// Append a list item, flushing first when the list kind switches
fn push_item(
    open: &mut Option<OpenList>,
    blocks: &mut Vec<BlockNode>,
    ordered: bool,
    item: Vec<InlineNode>,
) {
    if open.as_ref().is_some_and(|list| list.ordered != ordered) {
        flush_list(open, blocks);
    }
    open.get_or_insert_with(|| OpenList {
        ordered,
        items: Vec::new(),
    })
    .items
    .push(item);
}

/// Render one assistant message into a block tree.
///
/// Single pass over the message's lines, each trimmed before classification.
/// Blank lines and headings terminate an in-progress list; every other
/// non-list line becomes its own paragraph. Consecutive prose lines are
/// deliberately not merged into one paragraph. Never fails; input outside
/// the subset degrades to plain paragraphs.
#[must_use]
pub fn render_message(text: &str) -> RenderedDocument {
    let mut blocks = Vec::new();
    let mut open: Option<OpenList> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();

        if line.is_empty() {
            flush_list(&mut open, &mut blocks);
        } else if let Some(rest) = line.strip_prefix("### ") {
            flush_list(&mut open, &mut blocks);
            blocks.push(BlockNode::Heading {
                level: HeadingLevel::H3,
                spans: parse_inline(rest),
            });
        } else if let Some(rest) = line.strip_prefix("## ") {
            flush_list(&mut open, &mut blocks);
            blocks.push(BlockNode::Heading {
                level: HeadingLevel::H2,
                spans: parse_inline(rest),
            });
        } else if let Some(rest) = line.strip_prefix("# ") {
            flush_list(&mut open, &mut blocks);
            blocks.push(BlockNode::Heading {
                level: HeadingLevel::H1,
                spans: parse_inline(rest),
            });
        } else if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            push_item(&mut open, &mut blocks, false, parse_inline(rest));
        } else if let Some(rest) = ordered_item(line) {
            push_item(&mut open, &mut blocks, true, parse_inline(rest));
        } else {
            flush_list(&mut open, &mut blocks);
            blocks.push(BlockNode::Paragraph {
                spans: parse_inline(line),
            });
        }
    }

    flush_list(&mut open, &mut blocks);

    RenderedDocument { blocks }
}
