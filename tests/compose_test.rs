//! Page composition tests.
//!
//! Tests for the composed document: section order, determinism, the
//! layout-dependent padding, configuration interpolation and missing keys.

use proptest::prelude::*;
use transparency::style::{Length, Style};
use transparency::{
    ConfigKey, Configuration, Document, LayoutContext, NodeId, PageSection, REQUIRED_KEYS, Role,
    compose,
};

fn embedded() -> Configuration {
    Configuration::embedded().clone()
}

/// The text block whose content contains `needle`.
fn text_block_containing(doc: &Document, needle: &str) -> Option<NodeId> {
    doc.nodes_with_role(Role::TextBlock)
        .find(|&id| doc.text_content(id).contains(needle))
}

fn link_targets(doc: &Document) -> Vec<String> {
    doc.nodes_with_role(Role::Link)
        .filter_map(|id| doc.semantics.href(id))
        .map(str::to_string)
        .collect()
}

/// Compare two documents node by node. Everything but link targets must
/// match; the differing `(before, after)` targets are returned.
fn href_changes(before: &Document, after: &Document) -> Vec<(Option<String>, Option<String>)> {
    assert_eq!(before.node_count(), after.node_count());

    let mut changes = Vec::new();
    for (b, a) in before.iter_dfs().zip(after.iter_dfs()) {
        assert_eq!(b, a);
        let (bn, an) = (before.node(b).unwrap(), after.node(a).unwrap());
        assert_eq!(bn.role, an.role);
        assert_eq!(before.text(bn.text), after.text(an.text));
        assert_eq!(before.style(b), after.style(a));
        assert_eq!(before.semantics.src(b), after.semantics.src(a));
        assert_eq!(before.semantics.alt(b), after.semantics.alt(a));
        assert_eq!(before.semantics.id(b), after.semantics.id(a));

        let (bh, ah) = (before.semantics.href(b), after.semantics.href(a));
        if bh != ah {
            changes.push((bh.map(str::to_string), ah.map(str::to_string)));
        }
    }
    changes
}

// ============================================================================
// Structure Tests
// ============================================================================

#[test]
fn test_five_sections_in_order() {
    for layout in [LayoutContext::compact(), LayoutContext::wide()] {
        let doc = compose(&embedded(), layout).unwrap();
        let container = doc.children(NodeId::ROOT).next().unwrap();

        let sections: Vec<_> = doc.children(container).collect();
        assert_eq!(sections.len(), 5);

        for (id, section) in sections.iter().zip(PageSection::ALL) {
            assert_eq!(doc.node(*id).unwrap().role, Role::Section);
            assert_eq!(doc.semantics.id(*id), Some(section.anchor()));
        }
    }
}

#[test]
fn test_section_titles() {
    let doc = compose(&embedded(), LayoutContext::wide()).unwrap();

    let titles: Vec<String> = doc
        .nodes_with_role(Role::Heading(2))
        .map(|id| doc.text_content(id))
        .collect();
    assert_eq!(
        titles,
        vec![
            "Impact et métriques",
            "Démographie des utilisateurs",
            "Financement de Bob Emploi",
        ]
    );
}

#[test]
fn test_every_image_has_src_and_alt() {
    let doc = compose(&embedded(), LayoutContext::compact()).unwrap();

    let images: Vec<_> = doc.nodes_with_role(Role::Image).collect();
    assert_eq!(images.len(), 8);
    for id in images {
        assert!(doc.semantics.src(id).is_some_and(|s| s.starts_with("images/")));
        assert!(doc.semantics.alt(id).is_some());
    }
}

#[test]
fn test_compose_is_deterministic() {
    let config = embedded();
    for layout in [LayoutContext::compact(), LayoutContext::wide()] {
        let first = compose(&config, layout).unwrap();
        let second = compose(&config, layout).unwrap();
        assert_eq!(first, second);
    }
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_only_text_block_padding_depends_on_layout() {
    let config = embedded();
    let compact = compose(&config, LayoutContext::compact()).unwrap();
    let wide = compose(&config, LayoutContext::wide()).unwrap();

    assert_eq!(compact.node_count(), wide.node_count());

    let mut text_blocks = 0;
    for (c, w) in compact.iter_dfs().zip(wide.iter_dfs()) {
        assert_eq!(c, w);
        let (cn, wn) = (compact.node(c).unwrap(), wide.node(w).unwrap());
        assert_eq!(cn.role, wn.role);
        assert_eq!(compact.text(cn.text), wide.text(wn.text));
        assert_eq!(compact.semantics.href(c), wide.semantics.href(w));
        assert_eq!(compact.semantics.src(c), wide.semantics.src(w));

        let (cs, ws) = (compact.style(c), wide.style(w));
        if cn.role == Role::TextBlock {
            text_blocks += 1;
            assert_eq!(cs.horizontal_padding(), (Length::Px(50.0), Length::Px(50.0)));
            assert_eq!(ws.horizontal_padding(), (Length::Px(140.0), Length::Px(140.0)));
            let aligned = Style {
                padding_left: ws.padding_left,
                padding_right: ws.padding_right,
                ..cs.clone()
            };
            assert_eq!(&aligned, ws);
        } else {
            assert_eq!(cs, ws);
        }
    }
    assert!(text_blocks > 0);
}

// ============================================================================
// Interpolation Tests
// ============================================================================

#[test]
fn test_work_in_progress_block() {
    let config = embedded().with(ConfigKey::GithubSourceLink, "https://github.com/x");
    let doc = compose(&config, LayoutContext::compact()).unwrap();

    let block = text_block_containing(&doc, "Travaux en cours").unwrap();
    let content = doc.text_content(block);
    assert!(content.contains("Bob Emploi est en développement actif"));
    assert!(content.contains(" disponible sur Github "));

    let hrefs: Vec<_> = doc
        .iter_subtree(block)
        .filter_map(|id| doc.semantics.href(id))
        .collect();
    assert_eq!(hrefs[0], "https://github.com/x");
    assert_eq!(hrefs.len(), 3);
}

#[test]
fn test_empty_source_link_is_kept_as_target() {
    let config = embedded().with(ConfigKey::GithubSourceLink, "");
    let doc = compose(&config, LayoutContext::compact()).unwrap();

    let block = text_block_containing(&doc, "Travaux en cours").unwrap();
    let link = doc
        .iter_subtree(block)
        .find(|&id| doc.node(id).is_some_and(|n| n.role == Role::Link))
        .unwrap();
    assert_eq!(doc.text_content(link), " disponible sur Github ");
    assert_eq!(doc.semantics.href(link), Some(""));

    let html = transparency::export::HtmlExporter::new().render(&doc);
    assert!(html.contains("href=\"\"> disponible sur Github </a>"));
}

#[test]
fn test_support_links_use_configuration() {
    let config = embedded()
        .with(ConfigKey::DonationUrl, "https://give.example.org")
        .with(ConfigKey::HelpRequestUrl, "https://help.example.org");
    let doc = compose(&config, LayoutContext::wide()).unwrap();

    let targets = link_targets(&doc);
    assert!(targets.contains(&"https://give.example.org".to_string()));
    assert!(targets.contains(&"https://help.example.org".to_string()));
}

proptest! {
    #[test]
    fn prop_source_link_only_changes_its_href(
        url in prop_oneof![
            Just(String::new()),
            "https://[a-z]{1,12}\\.org/[a-z]{0,10}",
        ]
    ) {
        let base = compose(&embedded(), LayoutContext::wide()).unwrap();
        let config = embedded().with(ConfigKey::GithubSourceLink, url.clone());
        let doc = compose(&config, LayoutContext::wide()).unwrap();

        let changed = href_changes(&base, &doc);
        prop_assert_eq!(changed.len(), 1);
        prop_assert_eq!(
            changed[0].0.as_deref(),
            Some("https://github.com/bayesimpact/bob-emploi")
        );
        prop_assert_eq!(changed[0].1.as_deref(), Some(url.as_str()));
    }

    #[test]
    fn prop_product_name_is_interpolated(name in "[A-Za-z][A-Za-z ]{0,19}") {
        let config = embedded().with(ConfigKey::ProductName, name.clone());
        let doc = compose(&config, LayoutContext::compact()).unwrap();

        let block = text_block_containing(&doc, "Travaux en cours").unwrap();
        let expected = format!("{name} est en développement actif");
        prop_assert!(doc.text_content(block).contains(&expected));
    }

    #[test]
    fn prop_missing_required_key_fails(
        mask in prop::collection::vec(any::<bool>(), REQUIRED_KEYS.len())
            .prop_filter("at least one key removed", |m| m.iter().any(|&b| b))
    ) {
        let mut config = embedded();
        for (key, &remove) in REQUIRED_KEYS.iter().zip(&mask) {
            if remove {
                config = config.without(*key);
            }
        }

        let first_missing = REQUIRED_KEYS
            .iter()
            .zip(&mask)
            .find(|(_, remove)| **remove)
            .map(|(key, _)| *key);

        for layout in [LayoutContext::compact(), LayoutContext::wide()] {
            let err = compose(&config, layout).unwrap_err();
            prop_assert_eq!(err.missing_key(), first_missing);
        }
    }
}

#[test]
fn test_each_required_key_is_reported() {
    for key in REQUIRED_KEYS {
        let config = embedded().without(*key);
        let err = compose(&config, LayoutContext::wide()).unwrap_err();
        assert_eq!(err.missing_key(), Some(*key));
        assert!(err.to_string().contains(key.name()));
    }
}

#[test]
fn test_only_required_keys_are_needed() {
    let config = Configuration::from_pairs(
        REQUIRED_KEYS
            .iter()
            .map(|&key| (key, Configuration::embedded().get(key).unwrap())),
    );
    let minimal = compose(&config, LayoutContext::wide()).unwrap();
    let full = compose(&embedded(), LayoutContext::wide()).unwrap();
    assert_eq!(minimal, full);
}
