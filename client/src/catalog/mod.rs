//! Query catalog: the GraphQL documents this client sends.
//!
//! Each operation is a zero-sized type implementing [`Operation`], which
//! ties a document to the variables it declares and the data shape it
//! selects. Documents are assembled at compile time, fragments included,
//! so they are plain `&'static str` values.
//!
//! The selection set of a document and its `Data` type describe the same
//! fields. Adding a non-optional field to a data type without requesting it
//! makes every response fail to decode, so keep the two in step.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[macro_use]
mod macros;
#[macro_use]
mod fragments;

pub mod address;
pub mod analytics;
pub mod group;
pub mod media;
pub mod push;
pub mod reports;
pub mod search;
pub mod statistics;
pub mod tags;
pub mod todos;

/// Whether an operation reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// A read-only query.
    Query,
    /// A mutation with side effects.
    Mutation,
}

/// A named GraphQL operation with typed variables and result data.
pub trait Operation: Send + Sync + 'static {
    /// Operation name as declared in [`Self::DOCUMENT`].
    const NAME: &'static str;
    /// Complete document, fragments included.
    const DOCUMENT: &'static str;
    /// Query or mutation.
    const KIND: OperationKind;
    /// Input variables.
    type Variables: Serialize + Send + Sync;
    /// The `data` member of a successful response.
    type Data: DeserializeOwned + Send;
}

/// Operations executed through a lazy query handle.
pub trait QueryOperation: Operation {}

/// Operations executed through a mutation handle.
pub trait MutationOperation: Operation {}

/// Variables of operations that declare none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoVariables {}
