//! Event and group search operations.

use chrono::{DateTime, Utc};
use pagination::{PageRequest, SearchResult};
use serde::{Deserialize, Serialize};

use crate::domain::{EventStatus, EventSummary, EventType, Group};

macro_rules! event_result_selection {
    () => {
        concat!(
            "      total\n",
            "      elements {\n",
            "        id\n",
            "        uuid\n",
            "        title\n",
            "        beginsOn\n",
            "        endsOn\n",
            "        status\n",
            "        url\n",
            "        picture { id url }\n",
            "        tags { ...TagFragment }\n",
            "        physicalAddress { ...AddressFragment }\n",
            "        organizerActor { ...ActorFragment }\n",
            "        attributedTo { ...ActorFragment }\n",
            "        participantStats { participant }\n",
            "        options { isOnline }\n",
            "        __typename\n",
            "      }\n"
        )
    };
}

macro_rules! group_result_selection {
    () => {
        concat!(
            "      total\n",
            "      elements {\n",
            "        __typename\n",
            "        id\n",
            "        avatar { id url }\n",
            "        banner { id url }\n",
            "        type\n",
            "        preferredUsername\n",
            "        name\n",
            "        domain\n",
            "        summary\n",
            "        url\n",
            "        followersCount\n",
            "        membersCount\n",
            "        physicalAddress { ...AddressFragment }\n",
            "      }\n"
        )
    };
}

/// Whether searches cover only this instance or the federated index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchTarget {
    /// Content known to this instance.
    Internal,
    /// The global search index.
    Global,
}

/// Variables of [`SearchEvents`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEventsVariables {
    /// Free-text term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Geohash of the search centre.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Radius around `location`, in kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Comma-separated tag slugs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// In-person or online events only.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    /// Category identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Earliest start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begins_on: Option<DateTime<Utc>>,
    /// Latest end time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<DateTime<Utc>>,
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_page: Option<u32>,
    /// Events per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Include events spanning several days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longevents: Option<bool>,
}

impl SearchEventsVariables {
    /// Search by free-text term.
    pub fn term(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            ..Self::default()
        }
    }

    /// Select the result page.
    #[must_use]
    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.event_page = Some(page.page());
        self.limit = Some(page.limit());
        self
    }
}

/// Data of [`SearchEvents`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEventsData {
    /// Matching events.
    pub search_events: SearchResult<EventSummary>,
}

operation! {
    query
    /// Paginated event search.
    SearchEvents = "SearchEvents" {
        document: concat!(
            "query SearchEvents(\n",
            "  $location: String\n",
            "  $radius: Float\n",
            "  $tags: String\n",
            "  $term: String\n",
            "  $type: EventType\n",
            "  $category: String\n",
            "  $beginsOn: DateTime\n",
            "  $endsOn: DateTime\n",
            "  $eventPage: Int\n",
            "  $limit: Int\n",
            "  $longevents: Boolean\n",
            ") {\n",
            "  searchEvents(\n",
            "    location: $location\n",
            "    radius: $radius\n",
            "    tags: $tags\n",
            "    term: $term\n",
            "    type: $type\n",
            "    category: $category\n",
            "    beginsOn: $beginsOn\n",
            "    endsOn: $endsOn\n",
            "    page: $eventPage\n",
            "    limit: $limit\n",
            "    longevents: $longevents\n",
            "  ) {\n",
            event_result_selection!(),
            "  }\n",
            "}\n",
            tag_fragment!(),
            address_fragment!(),
            actor_fragment!()
        ),
        variables: SearchEventsVariables,
        data: SearchEventsData,
    }
}

/// Variables of [`SearchGroups`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchGroupsVariables {
    /// Free-text term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Geohash of the search centre.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Radius around `location`, in kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_page: Option<u32>,
    /// Groups per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SearchGroupsVariables {
    /// Search by free-text term.
    pub fn term(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            ..Self::default()
        }
    }

    /// Select the result page.
    #[must_use]
    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.group_page = Some(page.page());
        self.limit = Some(page.limit());
        self
    }
}

/// Data of [`SearchGroups`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchGroupsData {
    /// Matching groups.
    pub search_groups: SearchResult<Group>,
}

operation! {
    query
    /// Paginated group search.
    SearchGroups = "SearchGroups" {
        document: concat!(
            "query SearchGroups(\n",
            "  $term: String\n",
            "  $location: String\n",
            "  $radius: Float\n",
            "  $groupPage: Int\n",
            "  $limit: Int\n",
            ") {\n",
            "  searchGroups(\n",
            "    term: $term\n",
            "    location: $location\n",
            "    radius: $radius\n",
            "    page: $groupPage\n",
            "    limit: $limit\n",
            "  ) {\n",
            group_result_selection!(),
            "  }\n",
            "}\n",
            address_fragment!()
        ),
        variables: SearchGroupsVariables,
        data: SearchGroupsData,
    }
}

/// Variables of [`SearchEventsAndGroups`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEventsAndGroupsVariables {
    /// Free-text term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Geohash of the search centre.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Radius around `location`, in kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Comma-separated tag slugs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// In-person or online events only.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    /// Accepted category identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_one_of: Option<Vec<String>>,
    /// Accepted event statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_one_of: Option<Vec<EventStatus>>,
    /// Accepted content languages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_one_of: Option<Vec<String>>,
    /// Local or global index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_target: Option<SearchTarget>,
    /// Earliest start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begins_on: Option<DateTime<Utc>>,
    /// Latest end time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<DateTime<Utc>>,
    /// Include events spanning several days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longevents: Option<bool>,
    /// Map bounding box as `west,south:east,north`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<String>,
    /// Map zoom level matching `bbox`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,
    /// Event page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_page: Option<u32>,
    /// Group page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_page: Option<u32>,
    /// Results per page, for both lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Languages ranked first in results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost_languages: Option<Vec<String>>,
}

/// Data of [`SearchEventsAndGroups`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEventsAndGroupsData {
    /// Matching events.
    pub search_events: SearchResult<EventSummary>,
    /// Matching groups.
    pub search_groups: SearchResult<Group>,
}

operation! {
    query
    /// Combined event and group search behind the search page.
    SearchEventsAndGroups = "SearchEventsAndGroups" {
        document: concat!(
            "query SearchEventsAndGroups(\n",
            "  $location: String\n",
            "  $radius: Float\n",
            "  $tags: String\n",
            "  $term: String\n",
            "  $type: EventType\n",
            "  $categoryOneOf: [String]\n",
            "  $statusOneOf: [EventStatus]\n",
            "  $languageOneOf: [String]\n",
            "  $searchTarget: SearchTarget\n",
            "  $beginsOn: DateTime\n",
            "  $endsOn: DateTime\n",
            "  $longevents: Boolean\n",
            "  $bbox: String\n",
            "  $zoom: Int\n",
            "  $eventPage: Int\n",
            "  $groupPage: Int\n",
            "  $limit: Int\n",
            "  $boostLanguages: [String]\n",
            ") {\n",
            "  searchEvents(\n",
            "    location: $location\n",
            "    radius: $radius\n",
            "    tags: $tags\n",
            "    term: $term\n",
            "    type: $type\n",
            "    categoryOneOf: $categoryOneOf\n",
            "    statusOneOf: $statusOneOf\n",
            "    languageOneOf: $languageOneOf\n",
            "    searchTarget: $searchTarget\n",
            "    beginsOn: $beginsOn\n",
            "    endsOn: $endsOn\n",
            "    longevents: $longevents\n",
            "    bbox: $bbox\n",
            "    zoom: $zoom\n",
            "    page: $eventPage\n",
            "    limit: $limit\n",
            "    boostLanguages: $boostLanguages\n",
            "  ) {\n",
            event_result_selection!(),
            "  }\n",
            "  searchGroups(\n",
            "    term: $term\n",
            "    location: $location\n",
            "    radius: $radius\n",
            "    languageOneOf: $languageOneOf\n",
            "    searchTarget: $searchTarget\n",
            "    bbox: $bbox\n",
            "    zoom: $zoom\n",
            "    page: $groupPage\n",
            "    limit: $limit\n",
            "    boostLanguages: $boostLanguages\n",
            "  ) {\n",
            group_result_selection!(),
            "  }\n",
            "}\n",
            tag_fragment!(),
            address_fragment!(),
            actor_fragment!()
        ),
        variables: SearchEventsAndGroupsVariables,
        data: SearchEventsAndGroupsData,
    }
}
