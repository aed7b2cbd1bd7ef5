//! Markdown to HTML rendering as an ordered sequence of rewrite passes.

use regex::Captures;

use crate::patterns;

/// Renders markdown into a restricted HTML subset.
///
/// The output vocabulary is `pre`/`code`, `h1`..`h4`, `strong`/`em`, `img`,
/// `a`, `hr`, `table`, `ul`/`li`, `blockquote` and `p`. Pass order is part
/// of the contract: fenced blocks are consumed before inline code, images
/// before links, list items before paragraph wrapping. Input that matches
/// no pass degrades to plain paragraphs rather than erroring.
pub fn render(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let html = fence_blocks(markdown);
    let html = inline_code(&html);
    let html = headings(&html);
    let html = emphasis(&html);
    let html = images(&html);
    let html = links(&html);
    let html = horizontal_rules(&html);
    let html = tables(&html);
    let html = checkbox_items(&html);
    let html = list_items(&html);
    let html = blockquotes(&html);
    let html = paragraphs(&html);
    cleanup(&html)
}

/// Replaces ```` ```lang ```` fences with `<pre><code>` blocks, escaping
/// angle brackets in the body. The language tag is accepted and dropped.
fn fence_blocks(input: &str) -> String {
    patterns::FENCE_RE
        .replace_all(input, |caps: &Captures| {
            let code = caps[2].replace('<', "&lt;").replace('>', "&gt;");
            format!("<pre><code>{}</code></pre>", code.trim())
        })
        .into_owned()
}

/// Backtick spans become `<code>`; the content is left unescaped.
fn inline_code(input: &str) -> String {
    patterns::INLINE_CODE_RE
        .replace_all(input, "<code>${1}</code>")
        .into_owned()
}

/// Heading lines from `####` down to `#`, one level at a time.
fn headings(input: &str) -> String {
    let html = patterns::H4_RE.replace_all(input, "<h4>${1}</h4>");
    let html = patterns::H3_RE.replace_all(&html, "<h3>${1}</h3>");
    let html = patterns::H2_RE.replace_all(&html, "<h2>${1}</h2>");
    patterns::H1_RE
        .replace_all(&html, "<h1>${1}</h1>")
        .into_owned()
}

/// `***`, `**` and `*` spans, longest marker first. Matching is non-greedy
/// and happily pairs unrelated asterisks.
fn emphasis(input: &str) -> String {
    let html = patterns::BOLD_ITALIC_RE.replace_all(input, "<strong><em>${1}</em></strong>");
    let html = patterns::BOLD_RE.replace_all(&html, "<strong>${1}</strong>");
    patterns::ITALIC_RE
        .replace_all(&html, "<em>${1}</em>")
        .into_owned()
}

fn images(input: &str) -> String {
    patterns::IMAGE_RE
        .replace_all(input, r#"<img src="${2}" alt="${1}" />"#)
        .into_owned()
}

/// Links open in a new tab without leaking opener or referrer.
fn links(input: &str) -> String {
    patterns::LINK_RE
        .replace_all(
            input,
            r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#,
        )
        .into_owned()
}

fn horizontal_rules(input: &str) -> String {
    patterns::HR_RE.replace_all(input, "<hr />").into_owned()
}

/// Pipe tables: header row, separator row, body rows. Cells are trimmed and
/// empty cells (the artifacts of the outer pipes) are dropped. A table with
/// no well-formed separator row never matches and falls through to the
/// paragraph pass.
fn tables(input: &str) -> String {
    patterns::TABLE_RE
        .replace_all(input, |caps: &Captures| {
            let headers: String = caps[1]
                .split('|')
                .filter(|cell| !cell.trim().is_empty())
                .map(|cell| format!("<th>{}</th>", cell.trim()))
                .collect();
            let rows: String = caps[3]
                .trim()
                .split('\n')
                .map(|row| {
                    let cells: String = row
                        .split('|')
                        .filter(|cell| !cell.trim().is_empty())
                        .map(|cell| format!("<td>{}</td>", cell.trim()))
                        .collect();
                    format!("<tr>{cells}</tr>")
                })
                .collect();
            format!("<table><thead><tr>{headers}</tr></thead><tbody>{rows}</tbody></table>")
        })
        .into_owned()
}

/// Task list items with their state rendered as a glyph inside the `<li>`.
fn checkbox_items(input: &str) -> String {
    let html = patterns::CHECKED_ITEM_RE.replace_all(input, "<li>☑ ${1}</li>");
    patterns::UNCHECKED_ITEM_RE
        .replace_all(&html, "<li>☐ ${1}</li>")
        .into_owned()
}

/// Remaining dash items become `<li>`, then every contiguous run of `<li>`
/// lines is wrapped in a single `<ul>`. Nesting is not supported.
fn list_items(input: &str) -> String {
    let html = patterns::LIST_ITEM_RE.replace_all(input, "<li>${1}</li>");
    patterns::LIST_RUN_RE
        .replace_all(&html, "<ul>${1}</ul>")
        .into_owned()
}

fn blockquotes(input: &str) -> String {
    patterns::BLOCKQUOTE_RE
        .replace_all(input, "<blockquote><p>${1}</p></blockquote>")
        .into_owned()
}

/// Wraps every remaining non-blank line in `<p>`, skipping lines that
/// already start with an emitted tag (`<` followed by an ASCII lowercase
/// letter).
fn paragraphs(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (idx, line) in input.split('\n').enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        if line.trim().is_empty() || starts_with_html_tag(line) {
            out.push_str(line);
        } else {
            out.push_str("<p>");
            out.push_str(line);
            out.push_str("</p>");
        }
    }
    out
}

fn starts_with_html_tag(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('<') && chars.next().is_some_and(|c| c.is_ascii_lowercase())
}

/// Drops `<p>` wrappers that collided with block-level tags.
fn cleanup(input: &str) -> String {
    let html = patterns::P_BEFORE_BLOCK_RE.replace_all(input, "${1}");
    patterns::P_AFTER_BLOCK_RE
        .replace_all(&html, "${1}")
        .into_owned()
}
