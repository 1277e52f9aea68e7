//! Instance statistics.

use serde::Deserialize;

use super::NoVariables;
use crate::domain::{CategoryStatistic, Statistics};

/// Data of [`StatisticsQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StatisticsData {
    /// Instance counters.
    pub statistics: Statistics,
}

operation! {
    query
    /// Instance-wide counters.
    StatisticsQuery = "Statistics" {
        document: concat!(
            "query Statistics {\n",
            "  statistics {\n",
            "    numberOfUsers\n",
            "    numberOfEvents\n",
            "    numberOfLocalEvents\n",
            "    numberOfComments\n",
            "    numberOfLocalComments\n",
            "    numberOfGroups\n",
            "    numberOfLocalGroups\n",
            "    numberOfInstanceFollowings\n",
            "    numberOfInstanceFollowers\n",
            "  }\n",
            "}\n"
        ),
        variables: NoVariables,
        data: StatisticsData,
    }
}

/// Data of [`CategoryStatistics`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStatisticsData {
    /// One entry per category with events.
    pub category_statistics: Vec<CategoryStatistic>,
}

operation! {
    query
    /// Event counts per category.
    CategoryStatistics = "CategoryStatistics" {
        document: "query CategoryStatistics {\n  categoryStatistics {\n    key\n    number\n  }\n}\n",
        variables: NoVariables,
        data: CategoryStatisticsData,
    }
}
