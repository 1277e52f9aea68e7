//! Client configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::{AnalyticsProvider, find_provider};
use crate::formatting::Locale;
use crate::outbound::graphql::GraphqlHttpIdentity;

const DEFAULT_ENDPOINT: &str = "http://localhost:4000/api";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_LOCALE: &str = "en";

/// Connection settings for the GraphQL endpoint.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CLIENT")]
pub struct ClientSettings {
    /// GraphQL endpoint URL.
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
    /// Override for the HTTP user agent.
    pub user_agent: Option<String>,
    /// Bearer token of the signed-in user.
    pub access_token: Option<String>,
    /// BCP-47 tag used for localised output.
    pub locale: Option<String>,
}

impl ClientSettings {
    /// Return the configured endpoint, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured value is not an absolute URL.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    }

    /// Return the request timeout, falling back to the default.
    ///
    /// A zero value is raised to one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
                .max(1),
        )
    }

    /// Return the configured locale, falling back to English.
    pub fn locale(&self) -> Locale {
        Locale::from_tag(self.locale.as_deref().unwrap_or(DEFAULT_LOCALE))
    }

    /// Outbound identity for the HTTP transport.
    pub fn identity(&self) -> GraphqlHttpIdentity {
        let defaults = GraphqlHttpIdentity::default();
        GraphqlHttpIdentity {
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            access_token: self.access_token.clone(),
        }
    }
}

/// Local selection of the analytics provider to forward settings to.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ANALYTICS")]
pub struct AnalyticsSettings {
    /// Forward analytics settings at all.
    #[ortho_config(default = true)]
    pub enabled: bool,
    /// Provider identifier, for example `matomo`.
    pub provider: Option<String>,
}

impl AnalyticsSettings {
    /// The provider to forward settings to, if enabled on both sides.
    pub fn select<'a>(&self, providers: &'a [AnalyticsProvider]) -> Option<&'a AnalyticsProvider> {
        if !self.enabled {
            return None;
        }
        find_provider(providers, self.provider.as_deref()?)
    }
}
