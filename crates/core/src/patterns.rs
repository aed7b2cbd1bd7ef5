//! Cached regex patterns for the markdown rewrite passes.
//!
//! Uses LazyLock to compile each pattern once on first use; the pass
//! functions in `render` apply them in a fixed order.

use regex::Regex;
use std::sync::LazyLock;

// === Block patterns ===

/// Matches ```lang ... ``` fenced blocks; the language tag is ASCII-only
pub static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```([A-Za-z0-9_]*)\n(.*?)```").unwrap()
});

/// Matches header row, separator row and body rows of a pipe table
pub static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\|.+\|)\n(\|[-| :]+\|)\n((?:\|.+\|\n?)*)").unwrap()
});

// === Inline patterns ===

/// Matches `code` spans
pub static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`([^`]+)`").unwrap()
});

/// Matches ***bold italic*** spans
pub static BOLD_ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap()
});

/// Matches **bold** spans
pub static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(.+?)\*\*").unwrap()
});

/// Matches *italic* spans
pub static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*(.+?)\*").unwrap()
});

/// Matches ![alt](url) images
pub static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap()
});

/// Matches [text](url) links
pub static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap()
});

// === Line patterns ===

/// Matches #### headings
pub static H4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#### (.+)$").unwrap()
});

/// Matches ### headings
pub static H3_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^### (.+)$").unwrap()
});

/// Matches ## headings
pub static H2_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^## (.+)$").unwrap()
});

/// Matches # headings
pub static H1_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^# (.+)$").unwrap()
});

/// Matches a horizontal-rule line
pub static HR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^---$").unwrap()
});

/// Matches checked task items
pub static CHECKED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^- \[x\] (.+)$").unwrap()
});

/// Matches unchecked task items
pub static UNCHECKED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^- \[ \] (.+)$").unwrap()
});

/// Matches plain dash list items
pub static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^- (.+)$").unwrap()
});

/// Matches a contiguous run of already-rewritten <li> lines
pub static LIST_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?:<li>.*</li>\n?)+)").unwrap()
});

/// Matches > quote lines
pub static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^> (.+)$").unwrap()
});

// === Cleanup patterns ===

/// Matches a <p> opened directly before a block-level opening tag
pub static P_BEFORE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<p>(<(?:h[1-6]|ul|ol|pre|blockquote|table|hr|img))").unwrap()
});

/// Matches a </p> left directly after a block-level closing tag
pub static P_AFTER_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(</(?:h[1-6]|ul|ol|pre|blockquote|table)>)</p>").unwrap()
});
