//! Instance statistics snapshots.

use serde::Deserialize;

/// Instance-wide counters shown on the about page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Registered local users.
    pub number_of_users: u64,
    /// Events known to the instance.
    pub number_of_events: u64,
    /// Events created on this instance.
    pub number_of_local_events: u64,
    /// Comments known to the instance.
    pub number_of_comments: u64,
    /// Comments written on this instance.
    pub number_of_local_comments: u64,
    /// Groups known to the instance.
    pub number_of_groups: u64,
    /// Groups hosted on this instance.
    pub number_of_local_groups: u64,
    /// Instances this instance follows.
    pub number_of_instance_followings: u64,
    /// Instances following this one.
    pub number_of_instance_followers: u64,
}

impl Statistics {
    /// Events created on other instances and known locally.
    #[must_use]
    pub const fn number_of_remote_events(&self) -> u64 {
        self.number_of_events.saturating_sub(self.number_of_local_events)
    }

    /// Groups hosted on other instances and known locally.
    #[must_use]
    pub const fn number_of_remote_groups(&self) -> u64 {
        self.number_of_groups.saturating_sub(self.number_of_local_groups)
    }
}

/// Event count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryStatistic {
    /// Category key (for example `meeting`).
    pub key: String,
    /// Number of events in the category.
    pub number: u64,
}
