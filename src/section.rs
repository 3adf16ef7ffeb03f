use std::fmt;

use serde::Serialize;

/// Semantic tag inferred from a section title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Executive,
    Summary,
    Health,
    Highlight,
    Key,
    Risk,
    Recommendation,
    Action,
    Budget,
    Timeline,
    Progress,
    Team,
    Status,
    Issue,
    Opportunity,
    Metric,
    Goal,
    Milestone,
    Task,
    Priority,
    Insight,
    Overview,
    Performance,
    Forecast,
    Analysis,
    Conclusion,
    Next,
    Default,
}

/// Keywords checked against the lowercased title, in order. The first
/// keyword found as a substring wins, so a title mentioning both "risk"
/// and "action" is always tagged `Risk`.
const KEYWORDS: &[(&str, SectionType)] = &[
    ("executive", SectionType::Executive),
    ("summary", SectionType::Summary),
    ("health", SectionType::Health),
    ("highlight", SectionType::Highlight),
    ("key", SectionType::Key),
    ("risk", SectionType::Risk),
    ("recommendation", SectionType::Recommendation),
    ("action", SectionType::Action),
    ("budget", SectionType::Budget),
    ("timeline", SectionType::Timeline),
    ("progress", SectionType::Progress),
    ("team", SectionType::Team),
    ("status", SectionType::Status),
    ("issue", SectionType::Issue),
    ("opportunity", SectionType::Opportunity),
    ("metric", SectionType::Metric),
    ("goal", SectionType::Goal),
    ("milestone", SectionType::Milestone),
    ("task", SectionType::Task),
    ("priority", SectionType::Priority),
    ("insight", SectionType::Insight),
    ("overview", SectionType::Overview),
    ("performance", SectionType::Performance),
    ("forecast", SectionType::Forecast),
    ("analysis", SectionType::Analysis),
    ("conclusion", SectionType::Conclusion),
    ("next", SectionType::Next),
];

impl SectionType {
    /// Infer the tag for a heading title.
    pub fn infer(title: &str) -> Self {
        let lower = title.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|&(_, tag)| tag)
            .unwrap_or(SectionType::Default)
    }

    /// Stable lowercase name, as used in serialized output.
    pub fn slug(self) -> &'static str {
        match self {
            SectionType::Default => "default",
            tag => KEYWORDS
                .iter()
                .find(|&&(_, t)| t == tag)
                .map(|&(keyword, _)| keyword)
                .unwrap_or("default"),
        }
    }

    /// Parse a lowercase tag name; `None` for anything outside the set.
    pub fn from_slug(slug: &str) -> Option<Self> {
        if slug == "default" {
            return Some(SectionType::Default);
        }
        KEYWORDS
            .iter()
            .find(|&&(keyword, _)| keyword == slug)
            .map(|&(_, tag)| tag)
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A titled, leveled block of a report holding its raw content lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Position in document order, starting at 0.
    pub id: usize,
    pub title: String,
    /// Heading depth, 1 through 4.
    pub level: u8,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    /// Untokenized, non-blank lines in source order.
    pub content: Vec<String>,
}

impl Section {
    /// Title of the implicit section holding content before the first heading.
    pub const OVERVIEW_TITLE: &'static str = "Overview";

    pub(crate) fn new(id: usize, level: u8, title: String) -> Self {
        let section_type = SectionType::infer(&title);
        Self {
            id,
            title,
            level,
            section_type,
            content: Vec::new(),
        }
    }

    pub(crate) fn overview(id: usize) -> Self {
        Self {
            id,
            title: Self::OVERVIEW_TITLE.to_string(),
            level: 1,
            section_type: SectionType::Overview,
            content: Vec::new(),
        }
    }

    /// The heading line that reproduces this section's title and level.
    pub fn heading_line(&self) -> String {
        format!("{} {}", "#".repeat(usize::from(self.level)), self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_first_keyword_in_table_order() {
        assert_eq!(SectionType::infer("Executive Summary"), SectionType::Executive);
        assert_eq!(SectionType::infer("Risks"), SectionType::Risk);
        assert_eq!(SectionType::infer("Action items and risks"), SectionType::Risk);
        assert_eq!(SectionType::infer("NEXT STEPS"), SectionType::Next);
    }

    #[test]
    fn unmatched_title_is_default() {
        assert_eq!(SectionType::infer("Appendix"), SectionType::Default);
        assert_eq!(SectionType::infer(""), SectionType::Default);
    }

    #[test]
    fn keyword_matches_inside_words() {
        // "teamwork" contains "team", "Keynote" contains "key"
        assert_eq!(SectionType::infer("Teamwork"), SectionType::Team);
        assert_eq!(SectionType::infer("Keynote"), SectionType::Key);
    }

    #[test]
    fn slug_round_trips_for_every_tag() {
        for &(keyword, tag) in KEYWORDS {
            assert_eq!(tag.slug(), keyword);
            assert_eq!(SectionType::from_slug(keyword), Some(tag));
        }
        assert_eq!(SectionType::Default.slug(), "default");
        assert_eq!(SectionType::from_slug("default"), Some(SectionType::Default));
        assert_eq!(SectionType::from_slug("bogus"), None);
    }

    #[test]
    fn serializes_type_field_lowercase() {
        let section = Section::new(2, 2, "Budget".to_string());
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "budget");
        assert_eq!(json["id"], 2);
        assert_eq!(json["level"], 2);
    }

    #[test]
    fn heading_line() {
        let section = Section::new(0, 3, "Team".to_string());
        assert_eq!(section.heading_line(), "### Team");
    }
}
