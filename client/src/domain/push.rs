//! Web push registration data.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Web push settings advertised by the instance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPushConfig {
    /// Whether the instance sends push notifications.
    #[serde(default)]
    pub enabled: bool,
    /// VAPID public key, URL-safe base64.
    #[serde(default)]
    pub public_key: Option<String>,
}

impl WebPushConfig {
    /// Application server key for subscribing, when push is available.
    ///
    /// # Errors
    ///
    /// Returns [`PushKeyError`] when the advertised key is not valid
    /// URL-safe base64.
    pub fn application_server_key(&self) -> Result<Option<Vec<u8>>, PushKeyError> {
        match (self.enabled, self.public_key.as_deref()) {
            (true, Some(key)) if !key.is_empty() => application_server_key(key).map(Some),
            _ => Ok(None),
        }
    }
}

/// Subscription details registered with the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushSubscription {
    /// Push service endpoint URL.
    pub endpoint: String,
    /// Authentication secret.
    pub auth: String,
    /// Client public key.
    pub p256dh: String,
}

/// The advertised VAPID key could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid web push public key: {message}")]
pub struct PushKeyError {
    message: String,
}

/// Decode a URL-safe base64 VAPID key into raw bytes.
///
/// Trailing `=` padding is accepted and ignored.
///
/// # Errors
///
/// Returns [`PushKeyError`] when the key is not URL-safe base64.
///
/// # Examples
/// ```
/// use client::domain::application_server_key;
///
/// assert_eq!(application_server_key("AQID").expect("valid key"), vec![1, 2, 3]);
/// assert_eq!(application_server_key("-_8=").expect("valid key"), vec![251, 255]);
/// ```
pub fn application_server_key(public_key: &str) -> Result<Vec<u8>, PushKeyError> {
    URL_SAFE_NO_PAD
        .decode(public_key.trim().trim_end_matches('='))
        .map_err(|error| PushKeyError {
            message: error.to_string(),
        })
}
