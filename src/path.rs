//! Path segment joining.

use crate::consts::PATH_SEPARATOR;

/// Joins path segments with `/`, skipping absent segments and segments
/// that are empty after trimming. Produces `""` when nothing survives.
///
/// # Example
///
/// ```
/// let path = date_kit::join_path([Some("a"), Some("b"), Some(" "), None]);
/// assert_eq!(path, "a/b");
/// ```
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let parts: Vec<String> = segments
        .into_iter()
        .flatten()
        .filter_map(|segment| {
            let trimmed = segment.as_ref().trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        })
        .collect();
    parts.join(&PATH_SEPARATOR.to_string())
}
