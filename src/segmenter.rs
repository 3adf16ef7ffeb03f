use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::section::Section;

/// Deepest heading level; longer `#` runs are capped to it.
pub const MAX_LEVEL: u8 = 4;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s+(.+)$").expect("heading pattern is valid"));

/// Parse a heading line into its level and trimmed title.
///
/// Lines whose text after the `#` run is only whitespace are not headings.
pub fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let caps = HEADING.captures(line)?;
    let title = caps.get(2)?.as_str().trim();
    if title.is_empty() {
        return None;
    }
    let run = caps.get(1)?.as_str().len();
    let level = u8::try_from(run).unwrap_or(MAX_LEVEL).min(MAX_LEVEL);
    Some((level, title))
}

/// Split report text into sections in document order.
pub fn segment(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;
    let mut next_id = 0;

    for line in text.lines() {
        if let Some((level, title)) = parse_heading(line) {
            trace!(level, title, "heading");
            if let Some(done) = current.take() {
                sections.push(done);
            }
            current = Some(Section::new(next_id, level, title.to_string()));
            next_id += 1;
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        let section = current.get_or_insert_with(|| {
            let overview = Section::overview(next_id);
            next_id += 1;
            overview
        });
        section.content.push(line.to_string());
    }

    if let Some(done) = current {
        sections.push(done);
    }

    debug!(sections = sections.len(), "segmented report");
    sections
}
