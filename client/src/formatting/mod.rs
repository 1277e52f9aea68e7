//! Pure text helpers used when presenting API data.
//!
//! Every function here is total on its input and allocation is the only
//! side effect.

mod html;
mod list_format;
mod locale;
mod resource;
mod validators;

pub use html::{flatten_html_paragraphs, html_to_text, nl2br};
pub use list_format::{list_short_conjunction, list_short_disjunction};
pub use locale::Locale;
pub use resource::{resource_path, resource_path_segments};
pub use validators::{FieldError, validate_email_field, validate_required_field};
