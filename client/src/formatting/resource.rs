//! Resource path normalisation.

/// A resource path relative to its root.
///
/// A single leading `/` is removed; a missing path is empty. Paths with at
/// most one leading `/` are unchanged by a second application.
///
/// # Examples
/// ```
/// use client::formatting::resource_path;
///
/// assert_eq!(resource_path(Some("/foo/bar")), "foo/bar");
/// assert_eq!(resource_path(None), "");
/// ```
#[must_use]
pub fn resource_path(path: Option<&str>) -> String {
    path.map_or_else(String::new, |path| path.strip_prefix('/').unwrap_or(path).to_owned())
}

/// Segments of [`resource_path`], split on `/`.
///
/// A missing or empty path yields one empty segment, matching `split`.
#[must_use]
pub fn resource_path_segments(path: Option<&str>) -> Vec<String> {
    resource_path(path).split('/').map(str::to_owned).collect()
}
