//! Analytics provider configuration.

use serde::Deserialize;

use super::NoVariables;
use crate::domain::AnalyticsProvider;

/// The `config` member selected by [`Analytics`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalyticsInstanceConfig {
    /// Providers configured on the instance.
    #[serde(default)]
    pub analytics: Vec<AnalyticsProvider>,
}

/// Data of [`Analytics`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalyticsData {
    /// Instance configuration subset.
    pub config: AnalyticsInstanceConfig,
}

operation! {
    query
    /// Analytics providers and their untyped settings.
    Analytics = "Analytics" {
        document: concat!(
            "query Analytics {\n",
            "  config {\n",
            "    analytics {\n",
            "      id\n",
            "      enabled\n",
            "      configuration {\n",
            "        key\n",
            "        value\n",
            "        type\n",
            "      }\n",
            "    }\n",
            "  }\n",
            "}\n"
        ),
        variables: NoVariables,
        data: AnalyticsData,
    }
}
