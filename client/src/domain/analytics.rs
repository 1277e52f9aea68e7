//! Analytics provider configuration advertised by the instance.
//!
//! The client only assembles a provider's key/value pairs into an option
//! map and hands it on; options are neither validated nor interpreted.

use serde::Deserialize;
use serde_json::{Map, Number, Value};

/// Declared type of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigValueType {
    /// `true` or anything else.
    Boolean,
    /// Signed 64-bit integer.
    Integer,
    /// Finite floating-point number.
    Float,
    /// Plain string, also used for any type the client does not know.
    #[default]
    #[serde(other)]
    String,
}

/// One configuration entry as sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyValueConfig {
    /// Option name.
    pub key: String,
    /// Raw value, always transmitted as a string.
    pub value: String,
    /// Declared type of `value`.
    #[serde(rename = "type", default)]
    pub value_type: ConfigValueType,
}

impl KeyValueConfig {
    /// The value converted according to its declared type.
    ///
    /// Booleans follow `value == "true"`, so any other text is `false`.
    /// Integers and floats that do not parse are forwarded as strings.
    #[must_use]
    pub fn typed_value(&self) -> Value {
        let raw = self.value.trim();
        let converted = match self.value_type {
            ConfigValueType::Boolean => Some(Value::Bool(raw == "true")),
            ConfigValueType::Integer => raw.parse::<i64>().ok().map(Value::from),
            ConfigValueType::Float => raw
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number),
            ConfigValueType::String => None,
        };
        converted.unwrap_or_else(|| Value::String(self.value.clone()))
    }
}

/// One analytics provider and its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalyticsProvider {
    /// Provider identifier, for example `matomo`.
    pub id: String,
    /// Whether the instance turned the provider on.
    #[serde(default)]
    pub enabled: bool,
    /// Raw key/value entries.
    #[serde(default)]
    pub configuration: Vec<KeyValueConfig>,
}

impl AnalyticsProvider {
    /// Configuration as an option map; later duplicate keys win.
    #[must_use]
    pub fn options(&self) -> Map<String, Value> {
        self.configuration
            .iter()
            .map(|entry| (entry.key.clone(), entry.typed_value()))
            .collect()
    }
}

/// The enabled provider named `id`, if any.
#[must_use]
pub fn find_provider<'a>(
    providers: &'a [AnalyticsProvider],
    id: &str,
) -> Option<&'a AnalyticsProvider> {
    providers
        .iter()
        .find(|provider| provider.id == id && provider.enabled)
}
