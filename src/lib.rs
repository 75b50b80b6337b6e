//! # dev.to Republishing Client
//!
//! A small Rust SDK and CLI for republishing markdown blog posts to dev.to (Forem) as drafts.
//!
//! This crate takes a post written for a static-site blog (YAML front-matter plus markdown body),
//! adapts it to the dev.to article schema, and performs exactly one create (or update) call against
//! the articles API.
//!
//! ## Features
//!
//! - **Simple API**: One function to republish a post: `client.publish("./content/posts/my-post/index.md").await?`
//! - **Canonical attribution**: Every article carries a `canonical_url` derived from the post's
//!   source path, so the platform attributes the content to the original blog
//! - **Draft-first**: Articles are created unpublished by default; going live stays a deliberate,
//!   manual step on the platform
//! - **Typed results**: The API's error body can never be mistaken for a success — the publish
//!   call returns a success variant carrying the article URL or a failure carrying the message
//! - **Type Safe**: Front-matter and API payloads are typed end to end
//!
//! ## Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`DevToClient`] - Main client driving the publish pipeline
//! - [`config`] - Credential and origin configuration, read once at startup
//! - [`markdown`] - Front-matter extraction and document parsing
//! - [`article`] - Payload construction and the pre-publish text transforms
//! - [`http`] - API transport and the typed success-or-failure response
//! - [`stats`] - Read-only statistics over the user's articles
//! - [`error`] - Error types and severity classification
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use devto_pub_rs::{Config, DevToClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Reads DEV_TO_API_KEY from the environment
//!     let client = DevToClient::new(Config::from_env())?;
//!
//!     let outcome = client.publish("./content/posts/my-post/index.md").await?;
//!     println!("{}", outcome.report_line());
//!     Ok(())
//! }
//! ```
//!
//! ## Markdown Format
//!
//! Posts are expected in the blog's source layout, one directory per post named after its slug:
//!
//! ```markdown
//! ---
//! title: "Article Title"
//! description: "Shown as the article teaser"   # Optional
//! image: /img/posts/my-post/cover.png          # Optional: site-relative cover path
//! tags:
//!   - JavaScript
//!   - Web Dev
//! ---
//!
//! Your markdown content here. Site-relative links like [this](/posts/other-post)
//! are rewritten to absolute URLs before publishing.
//! ```
//!
//! ## Error Handling
//!
//! The library provides comprehensive error handling with specific error types:
//!
//! ```rust,no_run
//! use devto_pub_rs::{Config, DevToClient, DevToError, Result};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let client = DevToClient::new(Config::from_env())?;
//!
//! match client.publish("./content/posts/my-post/index.md").await {
//!     Ok(outcome) => println!("{}", outcome.report_line()),
//!     Err(DevToError::FileNotFound { path }) => {
//!         eprintln!("File not found: {}", path);
//!     }
//!     Err(DevToError::Api { status, message }) => {
//!         eprintln!("Rejected by dev.to ({}): {}", status, message);
//!     }
//!     Err(DevToError::Network { message }) => {
//!         eprintln!("Network error: {}", message);
//!     }
//!     Err(err) => eprintln!("Other error: {}", err),
//! }
//! # Ok(())
//! # }
//! ```

pub mod article;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod markdown;
pub mod stats;
pub mod utils;

// Re-export main types for convenience
pub use article::{Article, ArticlePayload, PublishedArticle};
pub use client::{DevToClient, PublishOptions, PublishOutcome};
pub use config::Config;
pub use error::{DevToError, ErrorSeverity, Result};
pub use stats::{ArticleStats, StatsClient, StatsSummary};
