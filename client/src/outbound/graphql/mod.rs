//! GraphQL-over-HTTP adapter.

mod http_transport;

pub use http_transport::{GraphqlHttpIdentity, HttpGraphqlTransport};
