//! Small filesystem and path helpers.

use std::path::{Component, Path};

/// Returns true if the path exists and is a regular file.
pub async fn file_exists(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Returns true for `.md` / `.markdown` files.
pub fn is_markdown_file(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref(),
        Some("md") | Some("markdown")
    )
}

/// Extracts the publish slug from a post's source path.
///
/// Posts live one file deep inside a directory named after their slug
/// (`content/posts/my-slug/index.md`), so the slug is the second-to-last
/// path segment. Returns `None` for paths too shallow to have one.
pub fn slug_from_path(path: &Path) -> Option<String> {
    let mut segments = path.components().rev().filter_map(|c| match c {
        Component::Normal(segment) => segment.to_str(),
        _ => None,
    });
    segments.next()?; // file name
    segments.next().map(str::to_owned)
}
