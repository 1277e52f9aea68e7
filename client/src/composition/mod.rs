//! Composable accessors binding catalog operations to lazily executed
//! handles.
//!
//! A handle sends nothing until the caller invokes it. Each invocation is
//! numbered; only the most recent invocation may change the observable
//! state, so a slow response to an older request can never overwrite a
//! newer one.

pub mod accessors;
mod execute;
mod lazy_query;
mod mutation;
mod sequenced;
mod state;

pub use accessors::{
    fetch_tags, use_group_members, use_register_push, use_reverse_geocode, use_search_address,
    use_search_events, use_search_groups, use_statistics, use_upload_media,
};
pub use execute::{execute_operation, execute_upload};
pub use lazy_query::LazyQuery;
pub use mutation::Mutation;
pub use state::{LoadOutcome, OperationState};
