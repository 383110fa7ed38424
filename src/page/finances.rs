//! Funding sources, budget use and the annual report download.

use crate::config::{ConfigKey, Configuration};
use crate::error::Result;
use crate::layout::LayoutContext;
use crate::model::{NodeId, Role};
use crate::style::Style;

use super::builder::PageBuilder;
use super::{ANNUAL_REPORT_URL, assets, styles};

pub(super) fn build(
    page: &mut PageBuilder,
    parent: NodeId,
    config: &Configuration,
    layout: LayoutContext,
) -> Result<NodeId> {
    let product_name = config.get(ConfigKey::ProductName)?;
    let donation_url = config.get(ConfigKey::DonationUrl)?;
    let help_url = config.get(ConfigKey::HelpRequestUrl)?;

    let section = page.block(parent, Role::Section, styles::text_section());
    page.title(section, "Financement de Bob Emploi");

    let body = page.block(section, Role::TextBlock, styles::text_block(layout));
    page.styled_text(
        body,
        Role::Container,
        Style::default(),
        "Bayes Impact est une association de loi 1901 à but non lucratif. En raison de notre \
         volonté d'inscrire notre initiative dans une démarche citoyenne de service public, \
         Bob Emploi ne dispose d'aucun business model et fonctionne de manière indépendante. \
         Nous finançons ainsi notre équipe uniquement par des dons et subventions, \
         répertoriés ici.",
    );
    page.styled_text(
        body,
        Role::Container,
        styles::paragraph_gap(),
        "Afin d'assurer l'indépendance du projet, aucune contribution philanthropique, \
         qu'elle soit en financement ou en nature, ne peut être acceptée si elle fait l'objet \
         d'une contrepartie.",
    );

    page.section_title(body, "Sources de Financement");
    page.styled_text(body, Role::Container, styles::subtitle(), "Amorçage");
    page.text(
        body,
        "Entre 2015 et 2016, des individus, fondations, ainsi que deux acteurs publics ont \
         contribué ensemble 740 000 € de donations et subventions afin de financer l'amorçage \
         du projet et les deux premières années d'expérimentation.",
    );
    page.image(
        body,
        assets::FUNDING_INITIAL,
        "financements initiaux",
        styles::finance_image(),
    );

    page.styled_text(
        body,
        Role::Container,
        styles::subtitle(),
        "Croissance de l'impact et pérennisation",
    );
    page.text(
        body,
        "En 2017, la fondation La France s'engage (label d'innovation sociale) et la \
         fondation Google.org ainsi que la direction RSE du groupe Lafayette ont contribué \
         ensemble 1 665 000 € en donations répartis sur plusieurs années afin de pérenniser \
         les travaux d'amélioration continue de Bob et démultiplier notre impact dans la \
         durée.",
    );
    page.image(
        body,
        assets::FUNDING_GROWTH,
        "financements ultérieurs",
        styles::finance_image(),
    );
    page.section_title(body, "Utilisation du budget");

    page.graph(section, assets::BUDGET, "budget");

    let support = page.block(section, Role::TextBlock, styles::text_block(layout));
    page.text(support, &format!("Vous pouvez soutenir {product_name} en"));
    page.link(support, "faisant un don", donation_url);
    page.text(support, ". Pour toute question, ");
    page.link(support, "contactez-nous", help_url);
    page.text(support, ".");

    let button = page.block(section, Role::Container, styles::download_button());
    let download = page.styled_link(button, styles::download_link(), ANNUAL_REPORT_URL);
    page.text(download, "Télécharger le rapport moral annuel de 2016\u{a0}\u{a0}");
    page.image(download, assets::DOWNLOAD, "download", Style::default());

    Ok(section)
}
