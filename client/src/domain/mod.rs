//! Domain primitives and response shapes.
//!
//! Purpose: define the typed snapshots decoded from remote GraphQL
//! payloads. Every type is an immutable view of server state; the client
//! never mutates or persists them. Enumerations are closed so consumers
//! match exhaustively.
//!
//! Public surface:
//! - Actor family: `Actor`, `Person`, `Group`, `Application`, `Member`,
//!   `MemberRole`, `ActorType`.
//! - Content: `EventSummary`, `Media`, `Address`, `Tag`, `TodoList`,
//!   `Report`, `Statistics`, `WebPushConfig`, `AnalyticsProvider`.
//! - Errors: `GraphqlError`, `ErrorCode`, `OperationError`.

pub mod actor;
pub mod address;
pub mod analytics;
pub mod error;
pub mod event;
pub mod media;
pub mod ports;
pub mod push;
pub mod report;
pub mod statistics;
pub mod tag;
pub mod todos;

pub use pagination::{PageRequest, Paginated, SearchResult};

pub use self::actor::{Actor, ActorType, Application, Group, Member, MemberRole, Person};
pub use self::address::{Address, Credit, GeoPoint, PictureInfo};
pub use self::analytics::{AnalyticsProvider, ConfigValueType, KeyValueConfig, find_provider};
pub use self::error::{ErrorCode, FieldViolation, GraphqlError, OperationError, PathSegment};
pub use self::event::{
    EventOptions, EventStatus, EventSummary, EventType, ParticipantStats, ReportedEvent,
};
pub use self::media::{Media, MediaMetadata, MediaUpload};
pub use self::push::{PushKeyError, PushSubscription, WebPushConfig, application_server_key};
pub use self::report::{Report, ReportStatus};
pub use self::statistics::{CategoryStatistic, Statistics};
pub use self::tag::Tag;
pub use self::todos::{Todo, TodoList};
