//! Who uses the product, and where reach should improve.

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
    page.title(section, "Démographie des utilisateurs");

    page.styled_text(
        section,
        Role::TextBlock,
        styles::text_block(layout),
        "La raison d'être de notre démarche associative est d'apporter de l'aide aux publics \
         qui en ont le plus besoin, et pas seulement les publics plus faciles ou plus \
         rentables. Nous suivons donc divers indicateurs liés à la diversité de la \
         démographie des utilisateurs de Bob.",
    );

    page.graph(section, assets::DEMOGRAPHY, "statistiques demographiques");

    let axes = page.block(section, Role::TextBlock, styles::text_block(layout));
    page.section_title(axes, "Axes de progression");
    let list = page.block(axes, Role::UnorderedList, Style::default());
    page.bullet(
        list,
        styles::strong(),
        "Se concentrer sur les publics en milieu rural",
        " : Bob reste concentré dans les villes, mais nous pensons que l'autonomisation via \
         le numérique est d'autant plus pertinente dans les zones moins desservies en \
         services publics.",
    );
    page.bullet(
        list,
        styles::strong(),
        "Rendre Bob plus accessible au regard de la fracture numérique",
        " : nous ne sommes pas encore capables de mesurer plus finement l'utilisation de Bob \
         par rapport aux différentes dimensions de la fracture numérique (aisance avec \
         l'informatique, connectivité à internet, etc.). Nous envisageons notamment de nous \
         rapprocher d'acteurs associatifs tels que les missions locales ou associations.",
    );

    Ok(section)
}
