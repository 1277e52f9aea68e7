//! Paginated collection envelope shared by every list-shaped response.
//!
//! The remote API reports collections as `{ total, elements }`, where
//! `total` is the server-side count and `elements` is the page that was
//! returned. [`Paginated`] keeps that shape and refuses payloads where the
//! page is larger than the reported total. [`PageRequest`] carries the
//! `page`/`limit` pair sent with paginated queries.
//!
//! # Example
//!
//! ```
//! use pagination::{PageRequest, Paginated};
//!
//! let page: Paginated<String> =
//!     serde_json::from_str(r#"{"total": 3, "elements": ["a", "b"]}"#)
//!         .expect("valid envelope");
//! assert_eq!(page.total(), 3);
//! assert!(PageRequest::default().has_next(page.total()));
//! ```

mod envelope;
mod error;
mod request;

pub use envelope::{Paginated, SearchResult};
pub use error::PaginationError;
pub use request::{DEFAULT_LIMIT, MAX_LIMIT, PageRequest};
