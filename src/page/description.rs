//! Page header: purpose of the page and the product's objective.

use crate::config::Configuration;
use crate::error::Result;
use crate::layout::LayoutContext;
use crate::model::{NodeId, Role};
use crate::style::{Length, Style};

use super::builder::PageBuilder;
use super::styles;

pub(super) fn build(
    page: &mut PageBuilder,
    parent: NodeId,
    _config: &Configuration,
    layout: LayoutContext,
) -> Result<NodeId> {
    let section = page.block(
        parent,
        Role::Section,
        Style {
            padding_bottom: Length::ZERO,
            ..styles::text_section()
        },
    );

    page.styled_text(
        section,
        Role::Container,
        styles::over_title(),
        "Cette page répertorie publiquement les informations liées au fonctionnement \
         et aux développements de Bob.",
    );
    page.title(section, "Impact et métriques");

    let body = page.block(section, Role::TextBlock, styles::text_block(layout));
    page.text(
        body,
        "En France, environ une reprise d'emploi sur 10 se fait via une offre d'emploi en \
         ligne. Plus que du simple matching, l'enjeu est surtout humain : accompagner chacun \
         dans ses choix stratégiques.",
    );
    page.styled_text(
        body,
        Role::Container,
        styles::objective(),
        "Notre objectif à travers Bob\u{a0}:",
    );
    page.text(
        body,
        "Permettre à chaque individu de prendre le contrôle sur sa stratégie de recherche \
         d'emploi, en lui fournissant des pistes de réflexion personnalisées et fondées sur \
         les données.",
    );

    Ok(section)
}
