use reportdoc::{
    Config, NodeKind, Section, SectionType, TextSpan, render_line, render_report, segment,
};

const STATUS_REPORT: &str = "\
# Executive Summary
Project is on track.
## Risks
- Budget overrun possible
- Timeline slip on **QA**
1. Escalate to sponsor
";

#[test]
fn executive_summary_with_risks() {
    let sections = segment(STATUS_REPORT);

    assert_eq!(
        sections,
        vec![
            Section {
                id: 0,
                title: "Executive Summary".to_string(),
                level: 1,
                section_type: SectionType::Executive,
                content: vec!["Project is on track.".to_string()],
            },
            Section {
                id: 1,
                title: "Risks".to_string(),
                level: 2,
                section_type: SectionType::Risk,
                content: vec![
                    "- Budget overrun possible".to_string(),
                    "- Timeline slip on **QA**".to_string(),
                    "1. Escalate to sponsor".to_string(),
                ],
            },
        ]
    );

    let nodes: Vec<_> = sections[1].content.iter().map(|l| render_line(l)).collect();
    assert_eq!(nodes[0].kind, NodeKind::Bullet);
    assert_eq!(nodes[1].kind, NodeKind::Bullet);
    assert_eq!(
        nodes[1].spans,
        vec![TextSpan::plain("Timeline slip on "), TextSpan::bold("QA")]
    );
    assert_eq!(nodes[2].ordinal(), Some("1"));
    assert_eq!(nodes[2].spans, vec![TextSpan::plain("Escalate to sponsor")]);
}

#[test]
fn note_without_heading() {
    assert_eq!(
        segment("Just a note."),
        vec![Section {
            id: 0,
            title: "Overview".to_string(),
            level: 1,
            section_type: SectionType::Overview,
            content: vec!["Just a note.".to_string()],
        }]
    );
}

#[test]
fn crlf_report_with_blank_lines() {
    let text = "Preface\r\n\r\n# Key Metrics\r\n\r\n- **Velocity**: 42\r\n\r\n#### Detail\r\n`p95` latency\r\n";
    let report = render_report(text, &Config::default());

    let titles: Vec<&str> = report
        .sections
        .iter()
        .map(|s| s.section.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Overview", "Key Metrics", "Detail"]);

    let key = &report.sections[1];
    assert_eq!(key.section.section_type, SectionType::Key);
    assert_eq!(
        key.nodes[0].spans,
        vec![TextSpan::bold("Velocity"), TextSpan::plain(": 42")]
    );

    let detail = &report.sections[2];
    assert_eq!(detail.section.level, 4);
    assert_eq!(
        detail.nodes[0].spans,
        vec![TextSpan::code("p95"), TextSpan::plain(" latency")]
    );
}

#[test]
fn full_report_json() {
    let report = render_report(STATUS_REPORT, &Config::default());
    let json = serde_json::to_value(&report).unwrap();

    let risks = &json["sections"][1];
    assert_eq!(risks["id"], 1);
    assert_eq!(risks["type"], "risk");
    assert_eq!(risks["expanded"], true);
    assert_eq!(risks["appearance"]["icon"], "alert-triangle");
    assert_eq!(risks["nodes"][1]["kind"], "bullet");
    assert!(risks["nodes"][1].get("ordinal").is_none());
    assert_eq!(risks["nodes"][1]["spans"][1]["style"], "bold");
    assert_eq!(risks["nodes"][1]["spans"][1]["text"], "QA");
}
