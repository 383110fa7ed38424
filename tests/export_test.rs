//! Export tests.
//!
//! Tests for the HTML and JSON renderings of the composed page.

use tempfile::TempDir;
use transparency::export::{
    Exporter, HtmlConfig, HtmlExporter, IdentityResolver, JsonExporter, PrefixResolver,
    generate_css, synthesize_html, to_json,
};
use transparency::page::assets;
use transparency::{Configuration, LayoutContext, PageSection, compose};

fn render_html(layout: LayoutContext, asset_base: Option<&str>) -> String {
    let doc = compose(Configuration::embedded(), layout).unwrap();
    HtmlExporter::new()
        .with_config(HtmlConfig {
            asset_base: asset_base.map(str::to_string),
            ..HtmlConfig::default()
        })
        .render(&doc)
}

// ============================================================================
// HTML Tests
// ============================================================================

#[test]
fn test_html_has_section_anchors_in_order() {
    let html = render_html(LayoutContext::wide(), None);

    let mut last = 0;
    for section in PageSection::ALL {
        let anchor = format!("id=\"{}\"", section.anchor());
        let pos = html.find(&anchor).unwrap();
        assert!(pos > last, "{} out of order", section.anchor());
        last = pos;
    }
}

#[test]
fn test_html_links_and_escaping() {
    let html = render_html(LayoutContext::compact(), None);

    assert!(html.contains("<html lang=\"fr\">"));
    assert!(html.contains("href=\"https://github.com/bayesimpact/bob-emploi\""));
    assert!(html.contains("> disponible sur Github </a>"));
    // Apostrophes in French copy are escaped
    assert!(html.contains("l&#39;emploi"));
    assert!(!html.contains("l'emploi"));
}

#[test]
fn test_html_layout_only_changes_padding() {
    let compact = render_html(LayoutContext::compact(), None);
    let wide = render_html(LayoutContext::wide(), None);

    let normalize = |html: &str, side: &str| {
        html.replace(&format!("padding-right: {side};"), "padding-right: _;")
            .replace(&format!("padding-left: {side};"), "padding-left: _;")
    };

    assert!(compact.contains("  padding-right: 50px;\n  padding-bottom: 0;\n  padding-left: 50px;\n"));
    assert!(wide.contains("  padding-right: 140px;\n  padding-bottom: 0;\n  padding-left: 140px;\n"));
    assert_ne!(compact, wide);
    assert_eq!(normalize(&compact, "50px"), normalize(&wide, "140px"));
}

#[test]
fn test_asset_urls_are_resolved() {
    let html = render_html(LayoutContext::wide(), Some("https://cdn.example.org/bob/"));

    assert!(html.contains("src=\"https://cdn.example.org/bob/images/user-stats.png\""));
    assert!(html.contains("src=\"https://cdn.example.org/bob/images/download-picto.svg\""));
    assert!(!html.contains("src=\"images/"));
}

#[test]
fn test_synthesis_reports_all_assets() {
    let doc = compose(Configuration::embedded(), LayoutContext::compact()).unwrap();
    let css = generate_css(&doc);

    let plain = synthesize_html(&doc, &css.class_map, &IdentityResolver);
    let prefixed = synthesize_html(&doc, &css.class_map, &PrefixResolver::new("/static"));

    for asset in [
        assets::USER_STATS,
        assets::NPS,
        assets::USER_FEEDBACK,
        assets::DEMOGRAPHY,
        assets::FUNDING_INITIAL,
        assets::FUNDING_GROWTH,
        assets::BUDGET,
        assets::DOWNLOAD,
    ] {
        assert!(plain.assets.contains(asset));
    }
    // Resolution changes URLs, never the reported identifiers
    assert_eq!(plain.assets, prefixed.assets);
}

#[test]
fn test_every_used_class_has_a_rule() {
    let doc = compose(Configuration::embedded(), LayoutContext::wide()).unwrap();
    let css = generate_css(&doc);

    for class in css.class_map.values() {
        assert!(css.stylesheet.contains(&format!(".{class} {{\n")));
    }
}

#[test]
fn test_html_export_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transparence.html");
    let doc = compose(Configuration::embedded(), LayoutContext::wide()).unwrap();

    let mut file = std::fs::File::create(&path).unwrap();
    HtmlExporter::new().export(&doc, &mut file).unwrap();
    drop(file);

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, HtmlExporter::new().render(&doc));
}

// ============================================================================
// JSON Tests
// ============================================================================

#[test]
fn test_json_tree_shape() {
    let doc = compose(Configuration::embedded(), LayoutContext::compact()).unwrap();
    let value = to_json(&doc);

    assert_eq!(value["role"], "root");
    assert_eq!(value["style"]["background-color"], "#ffffff");

    let container = &value["children"][0];
    assert_eq!(container["role"], "container");
    assert_eq!(container["style"]["max-width"], "1000px");

    let sections = container["children"].as_array().unwrap();
    assert_eq!(sections.len(), 5);
    for (section, expected) in sections.iter().zip(PageSection::ALL) {
        assert_eq!(section["role"], "section");
        assert_eq!(section["id"], expected.anchor());
    }
}

#[test]
fn test_json_exporter_output() {
    let doc = compose(Configuration::embedded(), LayoutContext::wide()).unwrap();

    let mut compact = Vec::new();
    JsonExporter::new().export(&doc, &mut compact).unwrap();
    let mut pretty = Vec::new();
    JsonExporter::new().pretty(true).export(&doc, &mut pretty).unwrap();

    assert!(compact.len() < pretty.len());
    let a: serde_json::Value = serde_json::from_slice(&compact).unwrap();
    let b: serde_json::Value = serde_json::from_slice(&pretty).unwrap();
    assert_eq!(a, b);
}
