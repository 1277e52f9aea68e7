//! Moderation reports.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::event::ReportedEvent;

/// Lifecycle state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// Awaiting moderation.
    Open,
    /// Dismissed without action.
    Closed,
    /// Acted upon.
    Resolved,
}

/// A moderation report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Report {
    /// Opaque identifier.
    pub id: String,
    /// Reported actor.
    pub reported: Actor,
    /// Reporting actor.
    pub reporter: Actor,
    /// Reported event, if the report is about one.
    #[serde(default)]
    pub event: Option<ReportedEvent>,
    /// Moderation status.
    pub status: ReportStatus,
    /// Reporter's explanation.
    #[serde(default)]
    pub content: Option<String>,
}
