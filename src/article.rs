//! Article payload construction and the text transforms applied to a
//! post before it is sent to the platform.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DevToError, Result};
use crate::utils;

/// Maximum number of tags the platform accepts per article.
pub const MAX_TAGS: usize = 4;

/// Request body for article create and update calls: the API expects the
/// article under a single top-level `article` key.
#[derive(Debug, Clone, Serialize)]
pub struct ArticlePayload {
    pub article: Article,
}

/// Article shape accepted by `POST /articles` and `PUT /articles/{id}`.
///
/// Optional fields are omitted from the JSON entirely when unset; the
/// API treats an explicit `null` and an absent key differently for some
/// of them.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub title: String,
    pub body_markdown: String,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    pub canonical_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl Article {
    /// Creates an article with the required fields.
    pub fn new(
        title: impl Into<String>,
        body_markdown: impl Into<String>,
        published: bool,
        canonical_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body_markdown: body_markdown.into(),
            published,
            series: None,
            main_image: None,
            canonical_url: canonical_url.into(),
            description: None,
            tags: Vec::new(),
        }
    }

    /// Sets the series name.
    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    /// Sets the cover image URL.
    pub fn with_main_image(mut self, url: impl Into<String>) -> Self {
        self.main_image = Some(url.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the (already normalized) tag list.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Success response returned by the articles API.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishedArticle {
    pub id: u64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Rewrites site-relative post links into absolute links against the
/// canonical origin: every `](/posts/` becomes `](<site_url>/posts/`.
pub fn rewrite_relative_links(body: &str, site_url: &str) -> String {
    body.replace("](/posts/", &format!("]({site_url}/posts/"))
}

/// The promotional footer appended to every republished body.
pub fn promo_footer(site_url: &str) -> String {
    let host = site_url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    format!("\n\n---\n\n*Originally published at [{host}]({site_url}).*")
}

/// Normalizes tags to the platform's constraints: at most [`MAX_TAGS`]
/// entries, lowercased, with non-alphanumeric characters removed.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .take(MAX_TAGS)
        .map(|tag| {
            tag.to_lowercase()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect()
        })
        .collect()
}

/// Canonical URL for a post: the site origin plus the post's slug.
///
/// The slug is the post's directory name (`content/posts/my-slug/index.md`
/// publishes at `<site_url>/my-slug`).
pub fn canonical_url(source_path: &Path, site_url: &str) -> Result<String> {
    let slug = utils::slug_from_path(source_path).ok_or_else(|| {
        DevToError::invalid_document(format!(
            "cannot derive slug from path {}",
            source_path.display()
        ))
    })?;
    Ok(format!("{site_url}/{slug}"))
}
