//! Deployment constants read by the page.
//!
//! The embedded distribution set is loaded once per process and never
//! mutated. Alternate deployments (a demo host, a staging bucket) can be
//! described as a flat TOML or JSON table and overlaid on top of it:
//!
//! ```
//! use transparency::config::{ConfigKey, Configuration};
//!
//! let demo = Configuration::from_toml_str(r#"productName = "Bob Démo""#).unwrap();
//! let config = Configuration::embedded().clone().overlay(demo);
//! assert_eq!(config.get(ConfigKey::ProductName).unwrap(), "Bob Démo");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Macro for defining the closed key set with its camelCase names.
macro_rules! config_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every known key, in name order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// The camelCase name used in configuration files.
            #[inline]
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)*
                }
            }

            /// Parse a camelCase name back into a key.
            #[inline]
            pub fn from_name(s: &str) -> Option<Self> {
                match s {
                    $($key => Some($name::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

config_keys! {
    /// A deployment constant consumed by the frontend.
    pub enum ConfigKey {
        /// Analytics project token.
        AmplitudeToken => "amplitudeToken",
        DonationUrl => "donationUrl",
        FacebookSsoAppId => "facebookSSOAppId",
        GithubSourceLink => "githubSourceLink",
        GoogleSsoClientId => "googleSSOClientId",
        /// Google Analytics property.
        GoogleUaId => "googleUAID",
        HelpRequestUrl => "helpRequestUrl",
        /// Template URL; `ROME_ID` is replaced by the job group code.
        JobGroupImageUrl => "jobGroupImageUrl",
        ProductName => "productName",
        SentryDsn => "sentryDSN",
        ZendeskDomain => "zendeskDomain",
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const DIST: &[(ConfigKey, &str)] = &[
    (ConfigKey::AmplitudeToken, "277314ee2eade2cb083c0d612107dcc6"),
    (
        ConfigKey::DonationUrl,
        "https://www.helloasso.com/associations/bayes-impact-france/formulaires/3",
    ),
    (ConfigKey::FacebookSsoAppId, "1576288225722008"),
    (
        ConfigKey::GithubSourceLink,
        "https://github.com/bayesimpact/bob-emploi",
    ),
    (
        ConfigKey::GoogleSsoClientId,
        "524962411351-hl5h7ap6mbvsj4of7pl6i51heqsuqtgo.apps.googleusercontent.com",
    ),
    (ConfigKey::GoogleUaId, "UA-97637389-1"),
    (
        ConfigKey::HelpRequestUrl,
        "https://aide.bob-emploi.fr/hc/fr/requests/new",
    ),
    (
        ConfigKey::JobGroupImageUrl,
        "https://storage.gra1.cloud.ovh.net/v1/AUTH_7b9ade05d5f84f719adc2cbc76c07eec/Cover%20Images/ROME_ID.jpg",
    ),
    (ConfigKey::ProductName, "Bob Emploi"),
    (
        ConfigKey::SentryDsn,
        "https://213e063a07514ab78a6e8f0bf88cb63b@sentry.io/191228",
    ),
    (ConfigKey::ZendeskDomain, "aide.bob-emploi.fr"),
];

static EMBEDDED: LazyLock<Configuration> = LazyLock::new(|| {
    debug!(keys = DIST.len(), "loading embedded configuration");
    Configuration::from_pairs(DIST.iter().map(|&(k, v)| (k, v)))
});

/// Immutable mapping from [`ConfigKey`] to an opaque string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    values: BTreeMap<ConfigKey, String>,
}

impl Configuration {
    /// The distribution constants compiled into the binary.
    pub fn embedded() -> &'static Configuration {
        &EMBEDDED
    }

    /// Build a configuration from explicit pairs. Later pairs win.
    pub fn from_pairs<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (ConfigKey, V)>,
        V: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    /// Parse a flat TOML table of camelCase keys to string values.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(s)?;
        let mut values = BTreeMap::new();
        for (name, value) in table {
            let key = ConfigKey::from_name(&name).ok_or_else(|| Error::UnknownKey(name.clone()))?;
            let toml::Value::String(value) = value else {
                return Err(Error::InvalidConfig(format!("{name} must be a string")));
            };
            values.insert(key, value);
        }
        debug!(keys = values.len(), "parsed TOML configuration");
        Ok(Self { values })
    }

    /// Parse a flat JSON object of camelCase keys to string values.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let Value::Object(object) = serde_json::from_str::<Value>(s)? else {
            return Err(Error::InvalidConfig(
                "configuration must be a JSON object".to_string(),
            ));
        };
        let mut values = BTreeMap::new();
        for (name, value) in object {
            let key = ConfigKey::from_name(&name).ok_or_else(|| Error::UnknownKey(name.clone()))?;
            let Value::String(value) = value else {
                return Err(Error::InvalidConfig(format!("{name} must be a string")));
            };
            values.insert(key, value);
        }
        debug!(keys = values.len(), "parsed JSON configuration");
        Ok(Self { values })
    }

    /// Look up a key.
    pub fn get(&self, key: ConfigKey) -> Result<&str> {
        self.values
            .get(&key)
            .map(String::as_str)
            .ok_or(Error::MissingKey(key))
    }

    /// Look up a key by its camelCase name.
    pub fn get_by_name(&self, name: &str) -> Result<&str> {
        let key = ConfigKey::from_name(name).ok_or_else(|| Error::UnknownKey(name.to_string()))?;
        self.get(key)
    }

    /// Check that every key in `keys` is present.
    pub fn require(&self, keys: &[ConfigKey]) -> Result<()> {
        match keys.iter().find(|k| !self.values.contains_key(*k)) {
            Some(&missing) => Err(Error::MissingKey(missing)),
            None => Ok(()),
        }
    }

    pub fn contains(&self, key: ConfigKey) -> bool {
        self.values.contains_key(&key)
    }

    /// A copy of this configuration with `key` set to `value`.
    pub fn with(mut self, key: ConfigKey, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// A copy of this configuration without `key`.
    pub fn without(mut self, key: ConfigKey) -> Self {
        self.values.remove(&key);
        self
    }

    /// Layer `other` on top of this configuration; its values win.
    pub fn overlay(mut self, other: Configuration) -> Self {
        self.values.extend(other.values);
        self
    }

    /// Iterate over present (key, value) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (ConfigKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
