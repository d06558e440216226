//! Document → HTML output

use crate::common::{assemble, fixture};
use autorpt_babel::formats::html::{HtmlFormat, HtmlTheme};
use autorpt_babel::publish::{publish, PublishArtifact, PublishSpec};
use autorpt_babel::Format;

#[test]
fn test_fixture_report_html() {
    let mut doc = assemble(&["intro.md", "sales.xlsx"]);
    doc.title = Some("Quarterly Report".to_string());
    let html = HtmlFormat::default().serialize(&doc).unwrap();

    assert!(html.contains("<title>Quarterly Report</title>"));
    assert!(html.contains("<h1 class=\"report-heading\" data-level=\"1\">Overview</h1>"));
    assert!(html.contains("<li class=\"report-list-item\">South recovered</li>"));
    assert!(!html.contains("not a bullet"));
    assert!(html.contains("<em>Figures are unaudited.</em>"));
    assert!(html.contains("<th>Revenue</th>"));
    assert!(html.contains("<td style=\"text-align: right\">15,000.50</td>"));
    assert!(html.contains("<td>North</td>"));
}

#[test]
fn test_publish_with_theme_option() {
    let doc = assemble(&["notes.markdown"]);
    let result = publish(PublishSpec::new(&doc, "html").with_option("theme", "serif")).unwrap();
    match result.artifact {
        PublishArtifact::InMemory(html) => {
            assert!(html.contains("Georgia"));
            assert!(html.contains("Second paragraph."));
        }
        PublishArtifact::File(path) => panic!("unexpected file output {}", path.display()),
    }
}

#[test]
fn test_theme_serializers_differ() {
    let doc = assemble(&["notes.markdown"]);
    let modern = HtmlFormat::new(HtmlTheme::Modern).serialize(&doc).unwrap();
    let serif = HtmlFormat::new(HtmlTheme::Serif).serialize(&doc).unwrap();
    assert_ne!(modern, serif);
    assert!(fixture("notes.markdown").exists());
}
