//! Resolution of static asset identifiers to URLs.

use std::borrow::Cow;

/// Maps an asset identifier (e.g. `images/budget.png`) to the URL a
/// renderer should emit.
pub trait AssetResolver {
    fn resolve<'a>(&self, asset: &'a str) -> Cow<'a, str>;
}

/// Emits identifiers unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl AssetResolver for IdentityResolver {
    fn resolve<'a>(&self, asset: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(asset)
    }
}

/// Prepends a base URL (a CDN bucket, a `/static` mount).
#[derive(Debug, Clone)]
pub struct PrefixResolver {
    base: String,
}

impl PrefixResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }
}

impl AssetResolver for PrefixResolver {
    fn resolve<'a>(&self, asset: &'a str) -> Cow<'a, str> {
        if self.base.is_empty() {
            return Cow::Borrowed(asset);
        }
        Cow::Owned(format!("{}/{}", self.base, asset.trim_start_matches('/')))
    }
}
