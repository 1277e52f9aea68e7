//! Ready-made accessors for the operations callers use most.
//!
//! Each `use_*` function binds one catalog operation to a transport and
//! returns an idle handle; nothing is sent until the handle is invoked.

use std::sync::Arc;

use tracing::warn;

use super::execute::execute_operation;
use super::lazy_query::LazyQuery;
use super::mutation::Mutation;
use super::state::LoadOutcome;
use crate::catalog::address::{ReverseGeocode, SearchAddress};
use crate::catalog::group::GroupMembers;
use crate::catalog::media::{
    UPLOAD_FILE_VARIABLE, UploadMedia, UploadMediaData, UploadMediaVariables,
};
use crate::catalog::push::RegisterPush;
use crate::catalog::search::{SearchEvents, SearchGroups};
use crate::catalog::statistics::StatisticsQuery;
use crate::catalog::tags::{FilterTags, FilterTagsVariables};
use crate::domain::ports::GraphqlTransport;
use crate::domain::{MediaUpload, Tag};

/// Reverse geocoding of a coordinate.
#[must_use]
pub fn use_reverse_geocode(transport: Arc<dyn GraphqlTransport>) -> LazyQuery<ReverseGeocode> {
    LazyQuery::new(transport)
}

/// Forward geocoding of a free-text address.
#[must_use]
pub fn use_search_address(transport: Arc<dyn GraphqlTransport>) -> LazyQuery<SearchAddress> {
    LazyQuery::new(transport)
}

/// Instance statistics.
#[must_use]
pub fn use_statistics(transport: Arc<dyn GraphqlTransport>) -> LazyQuery<StatisticsQuery> {
    LazyQuery::new(transport)
}

/// Paginated event search.
#[must_use]
pub fn use_search_events(transport: Arc<dyn GraphqlTransport>) -> LazyQuery<SearchEvents> {
    LazyQuery::new(transport)
}

/// Paginated group search.
#[must_use]
pub fn use_search_groups(transport: Arc<dyn GraphqlTransport>) -> LazyQuery<SearchGroups> {
    LazyQuery::new(transport)
}

/// One page of a group's members.
#[must_use]
pub fn use_group_members(transport: Arc<dyn GraphqlTransport>) -> LazyQuery<GroupMembers> {
    LazyQuery::new(transport)
}

/// Push subscription registration.
#[must_use]
pub fn use_register_push(transport: Arc<dyn GraphqlTransport>) -> Mutation<RegisterPush> {
    Mutation::new(transport)
}

/// Media upload.
#[must_use]
pub fn use_upload_media(transport: Arc<dyn GraphqlTransport>) -> Mutation<UploadMedia> {
    Mutation::new(transport)
}

impl Mutation<UploadMedia> {
    /// Upload `media`, binding its content to the `file` variable.
    pub async fn upload(&self, media: MediaUpload) -> LoadOutcome<UploadMediaData> {
        let variables = UploadMediaVariables {
            file: UPLOAD_FILE_VARIABLE.to_owned(),
            name: media.name.clone(),
            alt: media.alt.clone(),
        };
        self.mutate_with_file(variables, media.into_file(UPLOAD_FILE_VARIABLE))
            .await
    }
}

/// Tags matching `filter`, for autocompletion.
///
/// Failures are logged and yield an empty list.
pub async fn fetch_tags(transport: &dyn GraphqlTransport, filter: &str) -> Vec<Tag> {
    let variables = FilterTagsVariables {
        filter: filter.to_owned(),
    };
    match execute_operation::<FilterTags>(transport, &variables).await {
        Ok(data) => data.tags,
        Err(error) => {
            warn!(%error, filter, "tag lookup failed");
            Vec::new()
        }
    }
}
