use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::node::{NodeKind, RenderNode, SpanStyle, TextSpan};

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.\s+(.+)$").expect("numbered pattern is valid"));

/// Classify a content line and return its kind along with the payload text
/// left once the list marker is removed.
pub fn classify_line(line: &str) -> (NodeKind, &str) {
    let trimmed = line.trim();

    if let Some(payload) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return (NodeKind::Bullet, payload);
    }

    if let Some(caps) = NUMBERED.captures(trimmed) {
        if let (Some(ordinal), Some(payload)) = (caps.get(1), caps.get(2)) {
            let kind = NodeKind::Numbered {
                ordinal: ordinal.as_str().to_string(),
            };
            return (kind, payload.as_str());
        }
    }

    (NodeKind::Paragraph, trimmed)
}

/// Render one content line into a classified node with inline spans.
pub fn render_line(line: &str) -> RenderNode {
    let (kind, payload) = classify_line(line);
    RenderNode {
        kind,
        spans: tokenize_inline(payload),
    }
}

/// A delimited span located within the text being scanned
struct Delimited {
    style: SpanStyle,
    /// Offset of the opening delimiter.
    start: usize,
    inner: Range<usize>,
    /// Offset just past the closing delimiter.
    end: usize,
}

/// Split inline text into styled spans.
///
/// Each step takes the earliest-starting bold, italic or code span in the
/// remaining text; on equal offsets bold wins over italic and italic over
/// code. Span contents are not scanned again, and unterminated delimiters
/// stay in the plain text.
pub fn tokenize_inline(payload: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut rest = payload;

    while !rest.is_empty() {
        let Some(found) = earliest_span(rest) else {
            spans.push(TextSpan::plain(rest));
            break;
        };
        if found.start > 0 {
            spans.push(TextSpan::plain(&rest[..found.start]));
        }
        spans.push(TextSpan::new(found.style, &rest[found.inner]));
        rest = &rest[found.end..];
    }

    spans
}

fn earliest_span(text: &str) -> Option<Delimited> {
    [find_bold(text), find_italic(text), find_code(text)]
        .into_iter()
        .flatten()
        .min_by_key(|span| span.start)
}

/// Offset where a non-empty inner run starting at `inner_start` may first close.
fn first_close_from(text: &str, inner_start: usize) -> Option<usize> {
    let first = text[inner_start..].chars().next()?;
    Some(inner_start + first.len_utf8())
}

fn find_bold(text: &str) -> Option<Delimited> {
    let start = text.find("**")?;
    let inner_start = start + 2;
    let from = first_close_from(text, inner_start)?;
    let close = from + text[from..].find("**")?;
    Some(Delimited {
        style: SpanStyle::Bold,
        start,
        inner: inner_start..close,
        end: close + 2,
    })
}

/// A `*` with no `*` directly before or after it.
fn is_lone_star(bytes: &[u8], at: usize) -> bool {
    bytes[at] == b'*'
        && (at == 0 || bytes[at - 1] != b'*')
        && bytes.get(at + 1) != Some(&b'*')
}

fn find_italic(text: &str) -> Option<Delimited> {
    let bytes = text.as_bytes();
    for start in (0..bytes.len()).filter(|&at| is_lone_star(bytes, at)) {
        let inner_start = start + 1;
        let Some(from) = first_close_from(text, inner_start) else {
            break;
        };
        if let Some(close) = (from..bytes.len()).find(|&at| is_lone_star(bytes, at)) {
            return Some(Delimited {
                style: SpanStyle::Italic,
                start,
                inner: inner_start..close,
                end: close + 1,
            });
        }
    }
    None
}

fn find_code(text: &str) -> Option<Delimited> {
    let start = text.find('`')?;
    let inner_start = start + 1;
    let from = first_close_from(text, inner_start)?;
    let close = from + text[from..].find('`')?;
    Some(Delimited {
        style: SpanStyle::Code,
        start,
        inner: inner_start..close,
        end: close + 1,
    })
}
