//! Typed GraphQL query composition for a federated events platform.
//!
//! The [`catalog`] holds the operations this client sends, [`composition`]
//! binds them to lazily executed handles, and [`domain`] types every
//! response. [`formatting`] carries small display helpers.

pub mod catalog;
pub mod composition;
pub mod config;
pub mod domain;
pub mod formatting;
pub mod outbound;
pub mod telemetry;
