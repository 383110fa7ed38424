//! User feedback and the main work axes.

use crate::config::Configuration;
use crate::error::Result;
use crate::layout::LayoutContext;
use crate::model::{NodeId, Role};
use crate::style::Style;

use super::builder::PageBuilder;
use super::{assets, styles};

pub(super) fn build(
    page: &mut PageBuilder,
    parent: NodeId,
    _config: &Configuration,
    layout: LayoutContext,
) -> Result<NodeId> {
    let section = page.block(parent, Role::Section, styles::text_section());

    let intro = page.block(section, Role::TextBlock, styles::text_block(layout));
    page.section_title(intro, "Retours utilisateurs");
    page.text(
        intro,
        "Nous travaillons à l'amélioration continue de l'impact de Bob au contact des \
         utilisateurs.",
    );

    page.graph(section, assets::USER_FEEDBACK, "retour utilisateurs");

    let axes = page.block(section, Role::TextBlock, styles::text_block(layout));
    page.section_title(axes, "Axes de travail principaux");
    let list = page.block(axes, Role::UnorderedList, Style::default());
    page.bullet(
        list,
        styles::subtitle(),
        "Produit :",
        " rendre Bob plus pertinent pour plus de types de situations différents. La tâche \
         est rendue plus complexe par la faible segmentation de notre base utilisateurs de \
         Bob dû à notre volonté de développer un outil généraliste.",
    );
    page.bullet(
        list,
        styles::subtitle(),
        "Distribution",
        " : notre stratégie de distribution reste embryonnaire (presse et \
         bouche-à-oreille). Nous nous concentrons aujourd'hui principalement sur \
         l'amélioration de Bob avant de se concentrer plus sur sa distribution, mais cette \
         dernière conditionnera in fine notre impact global. Nos budgets ne nous permettant \
         pas de faire de grandes campagnes marketing, l'un de notre focus sera d'accroître \
         nos liens partenariaux avec les associations et organismes travaillant dans le \
         champ de l'emploi.",
    );
    page.bullet(
        list,
        styles::subtitle(),
        "Écosystème",
        " : catalyser l'innovation au sein du service public de l'emploi représente une \
         très forte source d'impact au-delà de Bob lui-même. Nous encourageons notamment la \
         reproduction de certaines fonctionnalités de Bob par d'autres acteurs.",
    );

    Ok(section)
}
