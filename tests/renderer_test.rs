// ABOUTME: Unit tests for the Markdown-subset message renderer
// ABOUTME: Tests block classification, list boundaries, and inline span parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap and panic in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use photon_assistant::render::{
    parse_inline, render_message, BlockNode, HeadingLevel, InlineNode,
};

/// Shorthand for a plain text span
fn text(s: &str) -> InlineNode {
    InlineNode::Text(s.to_owned())
}

/// Shorthand for a single-span paragraph
fn paragraph(s: &str) -> BlockNode {
    BlockNode::Paragraph {
        spans: vec![text(s)],
    }
}

const STRUCTURE_SAMPLE: &str = "# Title\n## Sub\nplain line\n- item1\n- item2\n1. first\n2. second";

// ============================================================================
// Block structure
// ============================================================================

#[test]
fn test_structure_round_trip() {
    let doc = render_message(STRUCTURE_SAMPLE);

    assert_eq!(
        doc.blocks,
        vec![
            BlockNode::Heading {
                level: HeadingLevel::H1,
                spans: vec![text("Title")],
            },
            BlockNode::Heading {
                level: HeadingLevel::H2,
                spans: vec![text("Sub")],
            },
            paragraph("plain line"),
            BlockNode::List {
                ordered: false,
                items: vec![vec![text("item1")], vec![text("item2")]],
            },
            BlockNode::List {
                ordered: true,
                items: vec![vec![text("first")], vec![text("second")]],
            },
        ]
    );
}

#[test]
fn test_empty_input_yields_empty_document() {
    let doc = render_message("");
    assert!(doc.is_empty());
    assert!(doc.blocks.is_empty());
}

#[test]
fn test_heading_levels() {
    let doc = render_message("# One\n## Two\n### Three");
    let levels: Vec<HeadingLevel> = doc
        .blocks
        .iter()
        .map(|block| match block {
            BlockNode::Heading { level, .. } => *level,
            other => panic!("expected heading, got {other:?}"),
        })
        .collect();
    assert_eq!(levels, vec![HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3]);
}

#[test]
fn test_heading_without_space_is_prose() {
    let doc = render_message("#Title");
    assert_eq!(doc.blocks, vec![paragraph("#Title")]);
}

#[test]
fn test_deeper_heading_marker_is_prose() {
    let doc = render_message("#### Too deep");
    assert_eq!(doc.blocks, vec![paragraph("#### Too deep")]);
}

#[test]
fn test_consecutive_prose_lines_stay_separate_paragraphs() {
    let doc = render_message("first line\nsecond line");
    assert_eq!(doc.blocks, vec![paragraph("first line"), paragraph("second line")]);
}

#[test]
fn test_lines_are_trimmed_before_classification() {
    let doc = render_message("   # Indented\n   - spaced item");
    assert_eq!(
        doc.blocks,
        vec![
            BlockNode::Heading {
                level: HeadingLevel::H1,
                spans: vec![text("Indented")],
            },
            BlockNode::List {
                ordered: false,
                items: vec![vec![text("spaced item")]],
            },
        ]
    );
}

// ============================================================================
// List boundaries
// ============================================================================

#[test]
fn test_blank_line_terminates_list() {
    let doc = render_message("- a\n\n- b");
    assert_eq!(
        doc.blocks,
        vec![
            BlockNode::List {
                ordered: false,
                items: vec![vec![text("a")]],
            },
            BlockNode::List {
                ordered: false,
                items: vec![vec![text("b")]],
            },
        ]
    );
}

#[test]
fn test_whitespace_only_line_counts_as_blank() {
    let doc = render_message("- a\n   \n- b");
    assert_eq!(doc.blocks.len(), 2);
}

#[test]
fn test_list_kind_switch_forces_flush() {
    let doc = render_message("- a\n1. b");
    assert_eq!(
        doc.blocks,
        vec![
            BlockNode::List {
                ordered: false,
                items: vec![vec![text("a")]],
            },
            BlockNode::List {
                ordered: true,
                items: vec![vec![text("b")]],
            },
        ]
    );
}

#[test]
fn test_heading_terminates_list() {
    let doc = render_message("- a\n# Done\n- b");
    assert_eq!(
        doc.blocks,
        vec![
            BlockNode::List {
                ordered: false,
                items: vec![vec![text("a")]],
            },
            BlockNode::Heading {
                level: HeadingLevel::H1,
                spans: vec![text("Done")],
            },
            BlockNode::List {
                ordered: false,
                items: vec![vec![text("b")]],
            },
        ]
    );
}

#[test]
fn test_prose_line_terminates_list() {
    let doc = render_message("- a\nplain\n- b");
    assert_eq!(doc.blocks.len(), 3);
    assert!(matches!(doc.blocks[1], BlockNode::Paragraph { .. }));
}

#[test]
fn test_star_and_dash_bullets_share_one_list() {
    let doc = render_message("- a\n* b");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::List {
            ordered: false,
            items: vec![vec![text("a")], vec![text("b")]],
        }]
    );
}

#[test]
fn test_trailing_open_list_is_flushed() {
    let doc = render_message("1. only item");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::List {
            ordered: true,
            items: vec![vec![text("only item")]],
        }]
    );
}

#[test]
fn test_multi_digit_ordered_markers() {
    let doc = render_message("10. ten\n11. eleven");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::List {
            ordered: true,
            items: vec![vec![text("ten")], vec![text("eleven")]],
        }]
    );
}

#[test]
fn test_ordered_marker_needs_trailing_space() {
    let doc = render_message("1.missing space");
    assert_eq!(doc.blocks, vec![paragraph("1.missing space")]);
}

#[test]
fn test_digits_mid_line_do_not_start_a_list() {
    let doc = render_message("Newton published in 1687. A landmark year.");
    assert_eq!(
        doc.blocks,
        vec![paragraph("Newton published in 1687. A landmark year.")]
    );
}

// ============================================================================
// Inline parsing
// ============================================================================

#[test]
fn test_inline_bold_and_code() {
    let spans = parse_inline("Use **bold** and `code` here");
    assert_eq!(
        spans,
        vec![
            text("Use "),
            InlineNode::Bold("bold".to_owned()),
            text(" and "),
            InlineNode::Code("code".to_owned()),
            text(" here"),
        ]
    );
}

#[test]
fn test_inline_leading_and_trailing_spans() {
    let spans = parse_inline("**start** middle `end`");
    assert_eq!(
        spans,
        vec![
            InlineNode::Bold("start".to_owned()),
            text(" middle "),
            InlineNode::Code("end".to_owned()),
        ]
    );
}

#[test]
fn test_inline_adjacent_spans_drop_empty_gaps() {
    let spans = parse_inline("**a**`b`");
    assert_eq!(
        spans,
        vec![
            InlineNode::Bold("a".to_owned()),
            InlineNode::Code("b".to_owned()),
        ]
    );
}

#[test]
fn test_lone_delimiters_stay_literal() {
    assert_eq!(parse_inline("**"), vec![text("**")]);
    assert_eq!(parse_inline("****"), vec![text("****")]);
    assert_eq!(parse_inline("a ` b"), vec![text("a ` b")]);
}

#[test]
fn test_unmatched_bold_opener_stays_literal() {
    assert_eq!(
        parse_inline("**never closed"),
        vec![text("**never closed")]
    );
}

#[test]
fn test_spans_do_not_nest() {
    // The code span wins first; the asterisks inside stay literal
    let spans = parse_inline("`has **stars** inside`");
    assert_eq!(spans, vec![InlineNode::Code("has **stars** inside".to_owned())]);
}

#[test]
fn test_bold_containing_backticks_stays_one_bold_span() {
    let spans = parse_inline("**uses `p = mv` inline**");
    // Bold starts first, but the pattern forbids nesting; the backtick match
    // inside begins later, so the bold span wins the scan
    assert_eq!(
        spans,
        vec![InlineNode::Bold("uses `p = mv` inline".to_owned())]
    );
}

#[test]
fn test_inline_parse_empty_line() {
    assert!(parse_inline("").is_empty());
}

#[test]
fn test_inline_spans_in_list_items_and_headings() {
    let doc = render_message("## The `F = ma` rule\n- apply **net** force");
    assert_eq!(
        doc.blocks,
        vec![
            BlockNode::Heading {
                level: HeadingLevel::H2,
                spans: vec![
                    text("The "),
                    InlineNode::Code("F = ma".to_owned()),
                    text(" rule"),
                ],
            },
            BlockNode::List {
                ordered: false,
                items: vec![vec![
                    text("apply "),
                    InlineNode::Bold("net".to_owned()),
                    text(" force"),
                ]],
            },
        ]
    );
}

// ============================================================================
// Determinism and degradation
// ============================================================================

#[test]
fn test_rendering_is_deterministic() {
    let first = render_message(STRUCTURE_SAMPLE);
    let second = render_message(STRUCTURE_SAMPLE);
    assert_eq!(first, second);
}

#[test]
fn test_unsupported_markdown_degrades_to_paragraphs() {
    let doc = render_message("> blockquote\n[link](https://example.com)\n| a | b |");
    assert_eq!(doc.blocks.len(), 3);
    assert!(doc
        .blocks
        .iter()
        .all(|block| matches!(block, BlockNode::Paragraph { .. })));
}
