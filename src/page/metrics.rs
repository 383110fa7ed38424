//! General metrics: usage graph, work in progress and the focus milestones.

use crate::config::{ConfigKey, Configuration};
use crate::error::Result;
use crate::layout::LayoutContext;
use crate::model::{NodeId, Role};
use crate::style::Color;
use crate::theme;

use super::builder::PageBuilder;
use super::{CHANGELOG_URL, HISTORY_URL, assets, styles};

/// A product focus area shown as a card.
struct Milestone {
    title: &'static str,
    /// Status line and its color; blank for areas not yet started.
    status: Option<(&'static str, Color)>,
    excerpt: &'static str,
}

const MILESTONES: [Milestone; 3] = [
    Milestone {
        title: "Expérience utilisateur",
        status: Some(("Terminé le 19 juillet 2017", theme::GREENISH_TEAL)),
        excerpt: "\"La proposition de valeur de Bob est claire, et l'expérience est cohérente \
                  même avec un éventail de recommandations plus restreint\"",
    },
    Milestone {
        title: "Diversité des recommandations",
        status: Some(("En cours", theme::BUTTERSCOTCH)),
        excerpt: "\"Bob est capable de recommander suffisamment de types de conseil pour être \
                  pertinent dans un large éventail de cas.\"",
    },
    Milestone {
        title: "Algorithmes de scoring",
        status: None,
        excerpt: "\"Chaque conseil est contextualisé de façon très personnalisée en fonction du \
                  profil de la personne.\"",
    },
];

pub(super) fn build(
    page: &mut PageBuilder,
    parent: NodeId,
    config: &Configuration,
    layout: LayoutContext,
) -> Result<NodeId> {
    let product_name = config.get(ConfigKey::ProductName)?;
    let source_link = config.get(ConfigKey::GithubSourceLink)?;

    let section = page.block(parent, Role::Section, styles::text_section());

    let heading = page.block(section, Role::TextBlock, styles::text_block(layout));
    page.section_title(heading, "Métriques générales (au 1er août 2017)");
    page.graph(section, assets::USER_STATS, "user statistics");

    let progress = page.block(section, Role::TextBlock, styles::text_block(layout));
    page.section_title(progress, "Travaux en cours");
    page.text(
        progress,
        &format!(
            "{product_name} est en développement actif. Le code est open source et"
        ),
    );
    page.link(progress, "disponible sur Github", source_link);
    page.text(progress, ". Vous pouvez également consulter l' ");
    page.link(progress, "historique général du projet", HISTORY_URL);
    page.text(progress, "ainsi que ");
    page.link(progress, "le changelog complet", CHANGELOG_URL);
    page.text(progress, ".");

    let zone = page.block(section, Role::Container, styles::milestones_zone());
    for milestone in &MILESTONES {
        build_milestone(page, zone, milestone);
    }

    page.graph(section, assets::NPS, "évaluation par les utilisateurs");

    Ok(section)
}

fn build_milestone(page: &mut PageBuilder, parent: NodeId, milestone: &Milestone) {
    let card = page.block(parent, Role::Container, styles::milestone());
    page.styled_text(card, Role::Container, styles::milestone_surtitle(), "FOCUS");
    page.styled_text(card, Role::Inline, styles::strong(), milestone.title);

    let (status, color) = match milestone.status {
        Some((status, color)) => (status, Some(color)),
        None => ("\u{a0}", None),
    };
    page.styled_text(
        card,
        Role::Container,
        styles::milestone_subtitle(color),
        status,
    );
    page.styled_text(
        card,
        Role::Container,
        styles::milestone_excerpt(),
        milestone.excerpt,
    );
}
