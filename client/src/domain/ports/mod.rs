//! Domain ports.
//!
//! The client has one driven port: the transport that carries GraphQL
//! operations to the remote endpoint.

mod macros;

pub(crate) use macros::define_port_error;

mod graphql_transport;

#[cfg(test)]
pub use graphql_transport::MockGraphqlTransport;
pub use graphql_transport::{
    FixtureGraphqlTransport, GraphqlRequest, GraphqlResponse, GraphqlTransport, TransportError,
    UploadFile,
};

#[cfg(test)]
mod tests;
