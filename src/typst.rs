use crate::config::Config;
use crate::node::{NodeKind, RenderNode, SpanStyle, TextSpan};
use crate::presentation::{RenderedSection, Report};
use crate::section::SectionType;

/// Convert a rendered report to Typst markup
pub fn sections_to_typst(report: &Report, config: &Config) -> String {
    let mut out = String::new();

    out.push_str("#set par(linebreaks: \"optimized\")\n");
    out.push_str(&format!(
        "#set page(paper: \"{}\")\n",
        escape_str(&config.page.paper)
    ));
    if config.page.numbers {
        out.push_str("#set page(numbering: \"1\")\n");
    }
    out.push('\n');

    for section in &report.sections {
        emit_section(section, &mut out);
    }

    out
}

fn emit_section(rendered: &RenderedSection, out: &mut String) {
    let mut groups = group_nodes(&rendered.nodes).into_iter();

    // Keep the heading on the same page as its first block
    out.push_str("#block(breakable: false)[\n");
    emit_heading(rendered, out);
    if let Some(first) = groups.next() {
        emit_group(first, out);
    }
    out.push_str("]\n\n");

    for group in groups {
        emit_group(group, out);
    }
}

fn emit_heading(rendered: &RenderedSection, out: &mut String) {
    let section = &rendered.section;
    for _ in 0..section.level {
        out.push('=');
    }
    out.push(' ');
    if section.section_type != SectionType::Default {
        out.push_str(&format!(
            "#text(fill: rgb(\"{}\"), weight: \"bold\", size: 0.7em)[{}] ",
            rendered.appearance.accent,
            section.section_type.slug().to_uppercase()
        ));
    }
    escape_text(&section.title, out);
    out.push_str("\n\n");
}

/// Consecutive list items of the same kind render as one list
fn group_nodes(nodes: &[RenderNode]) -> Vec<&[RenderNode]> {
    nodes
        .chunk_by(|a, b| match (&a.kind, &b.kind) {
            (NodeKind::Bullet, NodeKind::Bullet) => true,
            (NodeKind::Numbered { .. }, NodeKind::Numbered { .. }) => true,
            _ => false,
        })
        .collect()
}

fn emit_group(group: &[RenderNode], out: &mut String) {
    for node in group {
        match &node.kind {
            NodeKind::Bullet => out.push_str("- "),
            NodeKind::Numbered { ordinal } => {
                out.push_str(ordinal);
                out.push_str(". ");
            }
            NodeKind::Paragraph => {}
        }
        spans_to_typst(&node.spans, out);
        out.push('\n');
        if node.kind == NodeKind::Paragraph {
            out.push('\n');
        }
    }
    if !matches!(group.first().map(|n| &n.kind), Some(NodeKind::Paragraph) | None) {
        out.push('\n');
    }
}

fn spans_to_typst(spans: &[TextSpan], out: &mut String) {
    let mut after_call = false;
    for (index, span) in spans.iter().enumerate() {
        match span.style {
            SpanStyle::Plain => {
                let mut text = span.text.as_str();
                if index == 0 {
                    text = escape_line_marker(text, out);
                }
                // `#strong[..].x` or `(..)` would continue the call
                if after_call && text.starts_with(['.', '(']) {
                    out.push('\\');
                }
                escape_text(text, out);
            }
            SpanStyle::Bold => {
                out.push_str("#strong[");
                escape_text(&span.text, out);
                out.push(']');
            }
            SpanStyle::Italic => {
                out.push_str("#emph[");
                escape_text(&span.text, out);
                out.push(']');
            }
            SpanStyle::Code => {
                out.push('`');
                out.push_str(&span.text.replace('`', "\\`"));
                out.push('`');
            }
        }
        after_call = matches!(span.style, SpanStyle::Bold | SpanStyle::Italic);
    }
}

/// Escape a leading `-`, `+` or `12.` so a line never opens a nested list.
/// Returns the text still to be written.
fn escape_line_marker<'a>(text: &'a str, out: &mut String) -> &'a str {
    if text.starts_with(['-', '+']) {
        out.push('\\');
        return text;
    }
    let digits = text.len() - text.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 && text[digits..].starts_with('.') {
        out.push_str(&text[..digits]);
        out.push('\\');
        return &text[digits..];
    }
    text
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '=' | '/'
            | '~' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}

fn escape_str(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
