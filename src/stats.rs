//! Article statistics for the authenticated user.
//!
//! Read-only queries over the `/articles/me/*` endpoints, used to check
//! how republished posts perform: page views, reactions, and comments.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::http::{ApiResponse, DevToHttpClient};

// ============== /articles/me/published (Published Articles) ==============

/// Per-article state and counters as returned by the `me` endpoints.
#[derive(Debug, Deserialize, Serialize)]
pub struct ArticleStats {
    pub id: u64,
    pub title: String,
    pub url: String,
    /// Publication timestamp (RFC 3339); absent for drafts.
    #[serde(default)]
    pub published_at: Option<String>,
    /// Views counter; only populated once the article crosses the
    /// platform's reporting threshold.
    #[serde(default)]
    pub page_views_count: u64,
    #[serde(default)]
    pub public_reactions_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    /// Normalized tags as stored by the platform.
    #[serde(default)]
    pub tag_list: Vec<String>,
}

// ============== Aggregation ==============

/// Aggregated totals across a set of articles.
#[derive(Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatsSummary {
    pub articles: usize,
    pub page_views: u64,
    pub reactions: u64,
    pub comments: u64,
}

impl StatsSummary {
    /// Sums the counters of `articles`.
    pub fn from_articles(articles: &[ArticleStats]) -> Self {
        articles.iter().fold(Self::default(), |mut summary, article| {
            summary.articles += 1;
            summary.page_views += article.page_views_count;
            summary.reactions += article.public_reactions_count;
            summary.comments += article.comments_count;
            summary
        })
    }
}

/// Client for the per-user article statistics endpoints.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http_client: Arc<DevToHttpClient>,
}

impl StatsClient {
    /// Creates a new StatsClient.
    pub fn new(http_client: Arc<DevToHttpClient>) -> Self {
        Self { http_client }
    }

    /// Fetches one page of the user's published articles.
    ///
    /// Endpoint: `GET /articles/me/published`
    pub async fn published_articles(&self, page: u32, per_page: u32) -> Result<Vec<ArticleStats>> {
        debug!(
            "Fetching published articles, page {} ({} per page)",
            page, per_page
        );
        let res = self
            .http_client
            .get(&format!(
                "/articles/me/published?page={page}&per_page={per_page}"
            ))
            .await?;

        let api_res: ApiResponse<Vec<ArticleStats>> = res.json().await?;
        api_res.into_result()
    }

    /// Fetches one page of the user's unpublished drafts.
    ///
    /// Endpoint: `GET /articles/me/unpublished`
    pub async fn unpublished_articles(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<ArticleStats>> {
        debug!(
            "Fetching unpublished drafts, page {} ({} per page)",
            page, per_page
        );
        let res = self
            .http_client
            .get(&format!(
                "/articles/me/unpublished?page={page}&per_page={per_page}"
            ))
            .await?;

        let api_res: ApiResponse<Vec<ArticleStats>> = res.json().await?;
        api_res.into_result()
    }

    /// Aggregates counters across the first page of published articles.
    pub async fn summary(&self) -> Result<StatsSummary> {
        let articles = self.published_articles(1, 100).await?;
        Ok(StatsSummary::from_articles(&articles))
    }
}
