//! Directive extraction from doc-comment text.

use easyscan_core::DIRECTIVE_PREFIX;

/// Extract the tags of the first `easyjson:` directive line in `comments`.
///
/// Returns `None` when no line starts with the prefix. Tags are the raw
/// comma-separated pieces after the prefix and are not trimmed, so
/// `easyjson:` alone yields a single empty tag.
pub fn extract_tags(comments: &str) -> Option<Vec<String>> {
    extract_tags_with_prefix(comments, DIRECTIVE_PREFIX)
}

/// Same as [`extract_tags`] with a caller-supplied prefix.
pub fn extract_tags_with_prefix(comments: &str, prefix: &str) -> Option<Vec<String>> {
    comments
        .split('\n')
        .find_map(|line| line.strip_prefix(prefix))
        .map(|rest| rest.split(',').map(str::to_string).collect())
}
