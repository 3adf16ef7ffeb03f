//! View model for the collapsible report viewer.
//!
//! Pairs each segmented section with its rendered lines and the fixed
//! presentation constants a host needs: an icon, a color class and
//! whether it shows as a collapsible panel or an inline sub-block.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::config::PresentationConfig;
use crate::inline::render_line;
use crate::node::{NodeKind, RenderNode, SpanStyle};
use crate::section::{Section, SectionType};
use crate::segmenter::segment;

/// Icon, CSS color class and accent color for a section tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Appearance {
    pub icon: &'static str,
    pub color_class: &'static str,
    /// Hex RGB used by print backends.
    pub accent: &'static str,
}

impl Appearance {
    const fn new(icon: &'static str, color_class: &'static str, accent: &'static str) -> Self {
        Self {
            icon,
            color_class,
            accent,
        }
    }
}

impl SectionType {
    pub fn appearance(self) -> Appearance {
        match self {
            SectionType::Executive => Appearance::new("briefcase", "text-indigo-600", "#4f46e5"),
            SectionType::Summary => Appearance::new("file-text", "text-blue-600", "#2563eb"),
            SectionType::Health => Appearance::new("heart-pulse", "text-emerald-600", "#059669"),
            SectionType::Highlight => Appearance::new("star", "text-amber-500", "#f59e0b"),
            SectionType::Key => Appearance::new("key", "text-yellow-600", "#ca8a04"),
            SectionType::Risk => Appearance::new("alert-triangle", "text-red-600", "#dc2626"),
            SectionType::Recommendation => {
                Appearance::new("lightbulb", "text-violet-600", "#7c3aed")
            }
            SectionType::Action => Appearance::new("zap", "text-orange-600", "#ea580c"),
            SectionType::Budget => Appearance::new("dollar-sign", "text-green-600", "#16a34a"),
            SectionType::Timeline => Appearance::new("calendar", "text-sky-600", "#0284c7"),
            SectionType::Progress => Appearance::new("trending-up", "text-teal-600", "#0d9488"),
            SectionType::Team => Appearance::new("users", "text-cyan-600", "#0891b2"),
            SectionType::Status => Appearance::new("activity", "text-blue-500", "#3b82f6"),
            SectionType::Issue => Appearance::new("alert-circle", "text-rose-600", "#e11d48"),
            SectionType::Opportunity => Appearance::new("target", "text-lime-600", "#65a30d"),
            SectionType::Metric => Appearance::new("bar-chart", "text-purple-600", "#9333ea"),
            SectionType::Goal => Appearance::new("flag", "text-fuchsia-600", "#c026d3"),
            SectionType::Milestone => Appearance::new("milestone", "text-pink-600", "#db2777"),
            SectionType::Task => Appearance::new("check-square", "text-slate-700", "#334155"),
            SectionType::Priority => Appearance::new("arrow-up-circle", "text-red-500", "#ef4444"),
            SectionType::Insight => Appearance::new("eye", "text-indigo-500", "#6366f1"),
            SectionType::Overview => Appearance::new("layout", "text-gray-700", "#374151"),
            SectionType::Performance => Appearance::new("gauge", "text-emerald-500", "#10b981"),
            SectionType::Forecast => Appearance::new("cloud-sun", "text-sky-500", "#0ea5e9"),
            SectionType::Analysis => Appearance::new("search", "text-violet-500", "#8b5cf6"),
            SectionType::Conclusion => Appearance::new("check-circle", "text-green-700", "#15803d"),
            SectionType::Next => Appearance::new("arrow-right", "text-blue-700", "#1d4ed8"),
            SectionType::Default => Appearance::new("file", "text-gray-500", "#6b7280"),
        }
    }
}

/// Whether a section is shown as its own panel or nested in its parent's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Panel,
    InlineBlock,
}

impl Layout {
    pub fn for_level(level: u8, config: &PresentationConfig) -> Self {
        if level <= config.collapsible_max_level {
            Layout::Panel
        } else {
            Layout::InlineBlock
        }
    }
}

/// Expanded/collapsed state of sections, keyed by section id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    expanded: BTreeSet<usize>,
    known: BTreeSet<usize>,
}

impl ExpandState {
    /// Expand the first `auto_expand` sections in document order.
    pub fn initial(sections: &[Section], auto_expand: usize) -> Self {
        Self {
            expanded: sections.iter().take(auto_expand).map(|s| s.id).collect(),
            known: sections.iter().map(|s| s.id).collect(),
        }
    }

    pub fn is_expanded(&self, id: usize) -> bool {
        self.expanded.contains(&id)
    }

    /// Flip one section; returns the new state, or `None` for an unknown id.
    pub fn toggle(&mut self, id: usize) -> Option<bool> {
        if !self.known.contains(&id) {
            return None;
        }
        if self.expanded.remove(&id) {
            Some(false)
        } else {
            self.expanded.insert(id);
            Some(true)
        }
    }

    pub fn expand_all(&mut self) {
        self.expanded = self.known.clone();
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}

/// A section with its rendered lines and presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    #[serde(flatten)]
    pub section: Section,
    pub nodes: Vec<RenderNode>,
    pub appearance: Appearance,
    pub layout: Layout,
    /// Initial expand state.
    pub expanded: bool,
}

/// A fully rendered report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub sections: Vec<RenderedSection>,
}

/// Counts over a rendered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    pub sections: usize,
    pub bullets: usize,
    pub numbered: usize,
    pub paragraphs: usize,
    pub bold: usize,
    pub italic: usize,
    pub code: usize,
}

impl fmt::Display for ReportStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sections: {} bullets, {} numbered, {} paragraphs; {} bold, {} italic, {} code",
            self.sections,
            self.bullets,
            self.numbered,
            self.paragraphs,
            self.bold,
            self.italic,
            self.code
        )
    }
}

impl Report {
    /// Segment and render report text.
    pub fn build(text: &str, config: &PresentationConfig) -> Self {
        let sections = segment(text);
        let state = ExpandState::initial(&sections, config.auto_expand);

        let sections = sections
            .into_iter()
            .map(|section| RenderedSection {
                nodes: section.content.iter().map(|line| render_line(line)).collect(),
                appearance: section.section_type.appearance(),
                layout: Layout::for_level(section.level, config),
                expanded: state.is_expanded(section.id),
                section,
            })
            .collect();

        Self { sections }
    }

    /// The expand state as initially rendered.
    pub fn expand_state(&self) -> ExpandState {
        ExpandState {
            expanded: self
                .sections
                .iter()
                .filter(|s| s.expanded)
                .map(|s| s.section.id)
                .collect(),
            known: self.sections.iter().map(|s| s.section.id).collect(),
        }
    }

    pub fn stats(&self) -> ReportStats {
        let mut stats = ReportStats {
            sections: self.sections.len(),
            ..ReportStats::default()
        };
        for node in self.sections.iter().flat_map(|s| &s.nodes) {
            match node.kind {
                NodeKind::Bullet => stats.bullets += 1,
                NodeKind::Numbered { .. } => stats.numbered += 1,
                NodeKind::Paragraph => stats.paragraphs += 1,
            }
            for span in &node.spans {
                match span.style {
                    SpanStyle::Plain => {}
                    SpanStyle::Bold => stats.bold += 1,
                    SpanStyle::Italic => stats.italic += 1,
                    SpanStyle::Code => stats.code += 1,
                }
            }
        }
        stats
    }

    /// Plain-text tree view: one line per section, with the lines of
    /// expanded sections listed beneath it.
    pub fn outline(&self, state: &ExpandState) -> String {
        let mut out = String::new();

        for rendered in &self.sections {
            let section = &rendered.section;
            let indent = "  ".repeat(usize::from(section.level.saturating_sub(1)));
            let expanded = state.is_expanded(section.id);
            let marker = if expanded { "[-]" } else { "[+]" };

            out.push_str(&format!(
                "{indent}{marker} {} <{}:{}>\n",
                section.title, section.section_type, rendered.appearance.icon
            ));

            if !expanded {
                continue;
            }
            for node in &rendered.nodes {
                let text = node.plain_text();
                match &node.kind {
                    NodeKind::Bullet => out.push_str(&format!("{indent}    • {text}\n")),
                    NodeKind::Numbered { ordinal } => {
                        out.push_str(&format!("{indent}    {ordinal}. {text}\n"))
                    }
                    NodeKind::Paragraph => out.push_str(&format!("{indent}    {text}\n")),
                }
            }
        }

        out
    }

    /// Outline in its initial expand state, followed by a stats footer.
    pub fn outline_with_stats(&self) -> String {
        let mut out = self.outline(&self.expand_state());
        out.push('\n');
        out.push_str(&self.stats().to_string());
        out.push('\n');
        out
    }
}
