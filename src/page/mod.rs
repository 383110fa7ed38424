//! Composition of the transparency page.
//!
//! The page is a pure function of the deployment configuration and the
//! viewing conditions. Five independent section builders each append one
//! subtree to a centered, width-capped container:
//!
//! ```
//! use transparency::{Configuration, LayoutContext, PageSection, compose};
//!
//! let doc = compose(Configuration::embedded(), LayoutContext::wide()).unwrap();
//! for section in PageSection::ALL {
//!     assert!(doc.find_by_id(section.anchor()).is_some());
//! }
//! ```

mod builder;
mod demography;
mod description;
mod feedback;
mod finances;
mod metrics;
mod styles;

use tracing::{debug, trace};

use crate::config::{ConfigKey, Configuration};
use crate::error::Result;
use crate::layout::LayoutContext;
use crate::model::{Document, NodeId, Role};

use builder::PageBuilder;

/// Keys the page reads. All must be present before anything is built.
pub const REQUIRED_KEYS: &[ConfigKey] = &[
    ConfigKey::ProductName,
    ConfigKey::GithubSourceLink,
    ConfigKey::DonationUrl,
    ConfigKey::HelpRequestUrl,
];

/// Horizontal padding of text blocks on compact surfaces, in px.
pub const COMPACT_TEXT_PADDING: f32 = 50.0;
/// Horizontal padding of text blocks on wide surfaces, in px.
pub const WIDE_TEXT_PADDING: f32 = 140.0;

const HISTORY_URL: &str = "https://github.com/bayesimpact/bob-emploi/blob/master/HISTORY.md";
const CHANGELOG_URL: &str = "https://github.com/bayesimpact/bob-emploi/blob/master/CHANGELOG.md";
const ANNUAL_REPORT_URL: &str = "https://www.bob-emploi.fr/assets/rapport-moral-2016.pdf";

/// Static asset identifiers, resolved by the host's asset pipeline.
pub mod assets {
    pub const USER_STATS: &str = "images/user-stats.png";
    pub const NPS: &str = "images/nps.png";
    pub const USER_FEEDBACK: &str = "images/user-feedback.png";
    pub const DEMOGRAPHY: &str = "images/demography.png";
    pub const FUNDING_INITIAL: &str = "images/funding-initial.png";
    pub const FUNDING_GROWTH: &str = "images/funding-growth.png";
    pub const BUDGET: &str = "images/budget.png";
    pub const DOWNLOAD: &str = "images/download-picto.svg";
}

/// The top-level sections of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSection {
    Description,
    GeneralMetrics,
    UserFeedback,
    Demography,
    Finances,
}

impl PageSection {
    pub const ALL: [PageSection; 5] = [
        PageSection::Description,
        PageSection::GeneralMetrics,
        PageSection::UserFeedback,
        PageSection::Demography,
        PageSection::Finances,
    ];

    /// Anchor id of the section node.
    pub fn anchor(&self) -> &'static str {
        match self {
            PageSection::Description => "description",
            PageSection::GeneralMetrics => "general-metrics",
            PageSection::UserFeedback => "user-feedback",
            PageSection::Demography => "demography",
            PageSection::Finances => "finances",
        }
    }

    fn build(
        &self,
        page: &mut PageBuilder,
        parent: NodeId,
        config: &Configuration,
        layout: LayoutContext,
    ) -> Result<NodeId> {
        match self {
            PageSection::Description => description::build(page, parent, config, layout),
            PageSection::GeneralMetrics => metrics::build(page, parent, config, layout),
            PageSection::UserFeedback => feedback::build(page, parent, config, layout),
            PageSection::Demography => demography::build(page, parent, config, layout),
            PageSection::Finances => finances::build(page, parent, config, layout),
        }
    }
}

/// Compose the transparency page.
///
/// Fails with [`Error::MissingKey`](crate::Error::MissingKey) if any of
/// [`REQUIRED_KEYS`] is absent; no partial document is produced.
pub fn compose(config: &Configuration, layout: LayoutContext) -> Result<Document> {
    config.require(REQUIRED_KEYS)?;
    debug!(
        compact = layout.is_compact_surface,
        "composing transparency page"
    );

    let mut page = PageBuilder::new();
    page.set_root_style(styles::page());
    let container = page.block(NodeId::ROOT, Role::Container, styles::page_container());

    for section in PageSection::ALL {
        let node = section.build(&mut page, container, config, layout)?;
        page.anchor(node, section.anchor());
        trace!(section = section.anchor(), "built section");
    }

    let doc = page.finish();
    debug!(
        nodes = doc.node_count(),
        styles = doc.style_count(),
        "composed transparency page"
    );
    Ok(doc)
}

/// The container holding the page sections.
pub fn sections_container(doc: &Document) -> Option<NodeId> {
    doc.children(NodeId::ROOT).next()
}
