//! Property-based tests for segmentation and inline tokenizing.

use proptest::prelude::*;
use reportdoc::{SpanStyle, TextSpan, parse_heading, segment, tokenize_inline};

/// Report-like lines: headings, list items, emphasis, blanks and noise.
fn report_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "#{1,6} [A-Za-z][A-Za-z ]{0,12}",
        "#{1,3} {1,3}",
        "- [a-z*` ]{1,16}",
        "[0-9]{1,2}\\. [a-z ]{1,10}",
        "[a-zA-Z*`# ]{0,20}",
        Just(String::new()),
        Just("   ".to_string()),
    ]
}

fn report_text() -> impl Strategy<Value = String> {
    prop::collection::vec(report_line(), 0..24).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn content_is_every_body_line_in_order(text in report_text()) {
        let sections = segment(&text);
        let content: Vec<&str> = sections
            .iter()
            .flat_map(|s| s.content.iter().map(String::as_str))
            .collect();
        let expected: Vec<&str> = text
            .lines()
            .filter(|line| !line.trim().is_empty() && parse_heading(line).is_none())
            .collect();
        prop_assert_eq!(content, expected);
    }

    #[test]
    fn ids_increase_from_zero(text in report_text()) {
        let sections = segment(&text);
        for (index, section) in sections.iter().enumerate() {
            prop_assert_eq!(section.id, index);
            prop_assert!((1..=4).contains(&section.level));
        }
    }

    #[test]
    fn resegmenting_a_section_reproduces_it(text in report_text()) {
        for section in segment(&text) {
            let mut lines = vec![section.heading_line()];
            lines.extend(section.content.iter().cloned());

            let again = segment(&lines.join("\n"));
            prop_assert_eq!(again.len(), 1);
            prop_assert_eq!(&again[0].title, &section.title);
            prop_assert_eq!(again[0].level, section.level);
            prop_assert_eq!(&again[0].content, &section.content);
        }
    }

    #[test]
    fn text_without_markers_is_one_plain_span(text in "[^*`]{1,40}") {
        prop_assert_eq!(tokenize_inline(&text), vec![TextSpan::plain(text.clone())]);
    }

    #[test]
    fn tokenizing_never_loses_text(text in "[a-c*` ]{0,30}") {
        let spans = tokenize_inline(&text);
        let plain_chars: usize = spans.iter().map(|s| s.text.len()).sum();
        let delimiters: usize = spans
            .iter()
            .map(|s| match s.style {
                SpanStyle::Plain => 0,
                SpanStyle::Bold => 4,
                SpanStyle::Italic | SpanStyle::Code => 2,
            })
            .sum();
        prop_assert_eq!(plain_chars + delimiters, text.len());
        prop_assert!(spans.iter().all(|s| !s.text.is_empty()));
    }
}
