//! Web push registration.

use serde::{Deserialize, Serialize};

use super::NoVariables;
use crate::domain::{PushSubscription, WebPushConfig};

/// Data of [`RegisterPush`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPushData {
    /// Server acknowledgement.
    #[serde(default)]
    pub register_push: Option<String>,
}

operation! {
    mutation
    /// Register a browser push subscription for the current user.
    RegisterPush = "RegisterPush" {
        document: concat!(
            "mutation RegisterPush($endpoint: String!, $auth: String!, $p256dh: String!) {\n",
            "  registerPush(endpoint: $endpoint, auth: $auth, p256dh: $p256dh)\n",
            "}\n"
        ),
        variables: PushSubscription,
        data: RegisterPushData,
    }
}

/// Variables of [`UnregisterPush`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnregisterPushVariables {
    /// Endpoint of the subscription to drop.
    pub endpoint: String,
}

/// Data of [`UnregisterPush`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnregisterPushData {
    /// Server acknowledgement.
    #[serde(default)]
    pub unregister_push: Option<String>,
}

operation! {
    mutation
    /// Drop a push subscription.
    UnregisterPush = "UnRegisterPush" {
        document: concat!(
            "mutation UnRegisterPush($endpoint: String!) {\n",
            "  unregisterPush(endpoint: $endpoint)\n",
            "}\n"
        ),
        variables: UnregisterPushVariables,
        data: UnregisterPushData,
    }
}

/// The `config` member selected by [`WebPush`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPushInstanceConfig {
    /// Push settings.
    pub web_push: WebPushConfig,
}

/// Data of [`WebPush`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebPushData {
    /// Instance configuration subset.
    pub config: WebPushInstanceConfig,
}

operation! {
    query
    /// Whether the instance offers web push, and its VAPID key.
    WebPush = "WebPush" {
        document: concat!(
            "query WebPush {\n",
            "  config {\n",
            "    webPush {\n",
            "      enabled\n",
            "      publicKey\n",
            "    }\n",
            "  }\n",
            "}\n"
        ),
        variables: NoVariables,
        data: WebPushData,
    }
}
