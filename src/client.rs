//! Main dev.to client implementation.

use tracing::{debug, info};

use crate::article::{self, Article, ArticlePayload, PublishedArticle};
use crate::config::Config;
use crate::error::{DevToError, Result};
use crate::http::{ApiResponse, DevToHttpClient};
use crate::markdown::{Document, MarkdownParser};
use crate::stats::StatsClient;
use crate::utils;
use std::path::Path;
use std::sync::Arc;

/// Publish options for overriding document metadata.
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Custom title (overrides the front-matter title)
    pub title: Option<String>,
    /// Series to group the article under on the platform
    pub series: Option<String>,
    /// Custom description (overrides the front-matter description)
    pub description: Option<String>,
    /// Custom tags (override the front-matter tags; still normalized)
    pub tags: Option<Vec<String>>,
}

impl PublishOptions {
    /// Creates empty options: everything comes from the document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the series name.
    pub fn series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the tags.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// Outcome of a publish or update call.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    /// The article as reported back by the API.
    pub article: PublishedArticle,
    /// Whether the article went live or stayed a draft.
    pub published: bool,
}

impl PublishOutcome {
    /// The one-line human-readable report for this outcome. Drafts have
    /// no public URL yet, so the edit URL is reported instead.
    pub fn report_line(&self) -> String {
        if self.published {
            format!("Article published: {}", self.article.url)
        } else {
            format!("Article draft created: {}/edit", self.article.url)
        }
    }
}

/// Main dev.to publishing client.
#[derive(Debug)]
pub struct DevToClient {
    http_client: Arc<DevToHttpClient>,
    markdown_parser: MarkdownParser,
    stats_client: StatsClient,
    config: Config,
}

impl DevToClient {
    /// Creates a new client from configuration.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = Arc::new(DevToHttpClient::new(&config.api_url, &config.api_key)?);
        let stats_client = StatsClient::new(Arc::clone(&http_client));
        let markdown_parser = MarkdownParser::new();

        Ok(Self {
            http_client,
            markdown_parser,
            stats_client,
            config,
        })
    }

    /// Publishes a markdown post as a new article.
    ///
    /// The whole workflow:
    /// 1. Parse the front-matter and body
    /// 2. Rewrite site-relative links and append the promo footer
    /// 3. Build the article payload
    /// 4. POST it and decode the typed response
    ///
    /// Exactly one attempt is made. There is no retry and no
    /// deduplication key: calling this twice creates two remote
    /// articles.
    ///
    /// # Arguments
    /// * `markdown_path` - Path to the post's markdown file
    ///
    /// # Returns
    /// Returns the created article together with the publish flag in
    /// force for this invocation.
    pub async fn publish(&self, markdown_path: &str) -> Result<PublishOutcome> {
        let options = PublishOptions::default();
        self.publish_with_options(markdown_path, options).await
    }

    /// Publishes a markdown post with custom options.
    pub async fn publish_with_options(
        &self,
        markdown_path: &str,
        options: PublishOptions,
    ) -> Result<PublishOutcome> {
        let markdown_path = Path::new(markdown_path);
        self.validate_input(markdown_path).await?;

        info!("Publishing {}", markdown_path.display());

        let document = self.parse_markdown_file(markdown_path).await?;
        debug!(
            "Parsed front-matter with {} tags",
            document.front_matter.tags.len()
        );

        let payload = ArticlePayload {
            article: self.build_article(&document, &options)?,
        };

        let response = self.http_client.post_json("/articles", &payload).await?;
        let api_response: ApiResponse<PublishedArticle> = response.json().await?;
        let created = api_response.into_result()?;

        info!("Created article {} at {}", created.id, created.url);
        Ok(PublishOutcome {
            article: created,
            published: self.config.auto_publish,
        })
    }

    /// Updates an existing article in place from the current document.
    pub async fn update(&self, article_id: u64, markdown_path: &str) -> Result<PublishOutcome> {
        let options = PublishOptions::default();
        self.update_with_options(article_id, markdown_path, options)
            .await
    }

    /// Updates an existing article with custom options.
    pub async fn update_with_options(
        &self,
        article_id: u64,
        markdown_path: &str,
        options: PublishOptions,
    ) -> Result<PublishOutcome> {
        let markdown_path = Path::new(markdown_path);
        self.validate_input(markdown_path).await?;

        info!(
            "Updating article {} from {}",
            article_id,
            markdown_path.display()
        );

        let document = self.parse_markdown_file(markdown_path).await?;
        let payload = ArticlePayload {
            article: self.build_article(&document, &options)?,
        };

        let response = self
            .http_client
            .put_json(&format!("/articles/{article_id}"), &payload)
            .await?;
        let api_response: ApiResponse<PublishedArticle> = response.json().await?;
        let updated = api_response.into_result()?;

        info!("Updated article {} at {}", updated.id, updated.url);
        Ok(PublishOutcome {
            article: updated,
            published: self.config.auto_publish,
        })
    }

    /// Read-only statistics over the authenticated user's articles.
    pub fn stats(&self) -> &StatsClient {
        &self.stats_client
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    // Private helper methods

    async fn validate_input(&self, markdown_path: &Path) -> Result<()> {
        if !utils::file_exists(markdown_path).await {
            return Err(DevToError::FileNotFound {
                path: markdown_path.display().to_string(),
            });
        }

        if !utils::is_markdown_file(markdown_path) {
            return Err(DevToError::config_error(
                "File is not a markdown file (.md or .markdown)",
            ));
        }

        Ok(())
    }

    async fn parse_markdown_file(&self, path: &Path) -> Result<Document> {
        self.markdown_parser.parse_file(path).await
    }

    fn build_article(&self, document: &Document, options: &PublishOptions) -> Result<Article> {
        let front = &document.front_matter;
        let site_url = &self.config.site_url;

        let title = options
            .title
            .clone()
            .unwrap_or_else(|| front.title.trim().to_string());

        let mut body = article::rewrite_relative_links(document.body.trim(), site_url);
        body.push_str(&article::promo_footer(site_url));

        let tags = article::normalize_tags(options.tags.as_deref().unwrap_or(&front.tags));
        let canonical_url = article::canonical_url(&document.source_path, site_url)?;

        // The publish flag comes from configuration only, never from the
        // document.
        let mut built =
            Article::new(title, body, self.config.auto_publish, canonical_url).with_tags(tags);

        if let Some(image) = &front.image {
            built = built.with_main_image(format!("{site_url}{image}"));
        }

        if let Some(description) = options
            .description
            .clone()
            .or_else(|| front.description.clone())
        {
            built = built.with_description(description);
        }

        if let Some(series) = &options.series {
            built = built.with_series(series.clone());
        }

        Ok(built)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> DevToClient {
        DevToClient::new(Config::default().api_key("test-key")).unwrap()
    }

    #[test]
    fn test_publish_options_builder() {
        let options = PublishOptions::new()
            .title("Custom Title")
            .series("Cloud Notes")
            .description("Custom description")
            .tags(vec!["Rust".to_string()]);

        assert_eq!(options.title, Some("Custom Title".to_string()));
        assert_eq!(options.series, Some("Cloud Notes".to_string()));
        assert_eq!(options.description, Some("Custom description".to_string()));
        assert_eq!(options.tags, Some(vec!["Rust".to_string()]));
    }

    #[test]
    fn test_publish_options_default() {
        let options = PublishOptions::default();
        assert_eq!(options.title, None);
        assert_eq!(options.series, None);
        assert_eq!(options.description, None);
        assert_eq!(options.tags, None);
    }

    #[tokio::test]
    async fn test_validate_input_missing_file() {
        let client = test_client();
        let result = client
            .validate_input(Path::new("/no/such/post/index.md"))
            .await;
        assert!(matches!(
            result.unwrap_err(),
            DevToError::FileNotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_validate_input_rejects_non_markdown() {
        use tempfile::Builder;

        let client = test_client();
        let temp_file = Builder::new().suffix(".txt").tempfile().unwrap();
        let result = client.validate_input(temp_file.path()).await;
        assert!(matches!(result.unwrap_err(), DevToError::Config { .. }));
    }

    #[tokio::test]
    async fn test_validate_input_accepts_markdown() {
        use tempfile::Builder;

        let client = test_client();
        let temp_file = Builder::new().suffix(".md").tempfile().unwrap();
        assert!(client.validate_input(temp_file.path()).await.is_ok());
    }

    #[test]
    fn test_build_article_from_document() {
        let client = test_client();
        let raw = r#"---
title: "  My Slug Post  "
description: A short description.
image: /img/posts/my-slug/cover.png
tags:
  - JavaScript
  - Web Dev
  - Node.js
---

Read [the intro](/posts/intro) first.
"#;
        let document = MarkdownParser::new()
            .parse(raw, Path::new("content/posts/my-slug/index.md"))
            .unwrap();

        let built = client
            .build_article(&document, &PublishOptions::default())
            .unwrap();

        assert_eq!(built.title, "My Slug Post");
        assert!(!built.published);
        assert_eq!(built.canonical_url, "https://www.maxivanov.io/my-slug");
        assert_eq!(
            built.main_image.as_deref(),
            Some("https://www.maxivanov.io/img/posts/my-slug/cover.png")
        );
        assert_eq!(built.description.as_deref(), Some("A short description."));
        assert_eq!(built.tags, vec!["javascript", "webdev", "nodejs"]);
        assert!(built
            .body_markdown
            .starts_with("Read [the intro](https://www.maxivanov.io/posts/intro) first."));
        assert!(built
            .body_markdown
            .ends_with("*Originally published at [www.maxivanov.io](https://www.maxivanov.io).*"));
        assert_eq!(built.series, None);
    }

    #[test]
    fn test_build_article_applies_overrides() {
        let client = test_client();
        let raw = "---\ntitle: Original\ntags: [rust]\n---\nBody.";
        let document = MarkdownParser::new()
            .parse(raw, Path::new("content/posts/original/index.md"))
            .unwrap();

        let options = PublishOptions::new()
            .title("Overridden")
            .series("My Series")
            .tags(vec!["Web Dev".to_string()]);

        let built = client.build_article(&document, &options).unwrap();
        assert_eq!(built.title, "Overridden");
        assert_eq!(built.series.as_deref(), Some("My Series"));
        assert_eq!(built.tags, vec!["webdev"]);
    }

    #[test]
    fn test_build_article_without_image_omits_main_image() {
        let client = test_client();
        let raw = "---\ntitle: Plain\ntags: [rust]\n---\nBody.";
        let document = MarkdownParser::new()
            .parse(raw, Path::new("content/posts/plain/index.md"))
            .unwrap();

        let built = client
            .build_article(&document, &PublishOptions::default())
            .unwrap();
        assert_eq!(built.main_image, None);
        assert_eq!(built.description, None);
    }

    #[test]
    fn test_report_line_for_draft() {
        let article: PublishedArticle = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "T",
            "url": "https://dev.to/x/abc"
        }))
        .unwrap();

        let outcome = PublishOutcome {
            article,
            published: false,
        };
        assert_eq!(
            outcome.report_line(),
            "Article draft created: https://dev.to/x/abc/edit"
        );
    }

    #[test]
    fn test_report_line_for_published() {
        let article: PublishedArticle = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "T",
            "url": "https://dev.to/x/abc"
        }))
        .unwrap();

        let outcome = PublishOutcome {
            article,
            published: true,
        };
        assert_eq!(
            outcome.report_line(),
            "Article published: https://dev.to/x/abc"
        );
    }

    #[tokio::test]
    async fn test_fixture_file_parsing() {
        let client = test_client();

        // Parse the fixture file to verify it has the expected front-matter.
        let document = client
            .parse_markdown_file(std::path::Path::new(
                "fixtures/posts/serverless-functions/index.md",
            ))
            .await
            .unwrap();

        assert_eq!(document.front_matter.title, "Going serverless on a budget");
        assert_eq!(
            document.front_matter.image.as_deref(),
            Some("/img/posts/serverless-functions/cover.png")
        );
        assert_eq!(
            document.front_matter.tags,
            vec!["JavaScript", "Serverless", "AWS", "Web Dev", "Cloud"]
        );

        // The full pipeline up to the payload works against the fixture.
        let built = client
            .build_article(&document, &PublishOptions::default())
            .unwrap();
        assert_eq!(
            built.canonical_url,
            "https://www.maxivanov.io/serverless-functions"
        );
        assert_eq!(built.tags, vec!["javascript", "serverless", "aws", "webdev"]);
    }
}
