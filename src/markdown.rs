//! Document parsing: front-matter extraction and body splitting.
//!
//! Posts are markdown files with a leading YAML front-matter block
//! delimited by `---` lines. The block is deserialized into a typed
//! [`FrontMatter`]; the rest of the file is the body, untouched.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DevToError, Result};

const FRONT_MATTER_DELIMITER: &str = "---";

/// Front-matter metadata recognized on a post.
///
/// `title` and `tags` are required; a post without them cannot be
/// represented on the platform. Unrecognized keys (dates, layout hints
/// for the site generator) are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub description: Option<String>,
    /// Site-relative image path, e.g. `/img/posts/my-post/cover.png`.
    pub image: Option<String>,
    /// Ordered tag list as authored; normalized later, at payload time.
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawFrontMatter {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl RawFrontMatter {
    fn validate(self) -> Result<FrontMatter> {
        let title = self.title.ok_or_else(|| DevToError::MissingField {
            field: "title".to_string(),
        })?;
        let tags = self.tags.ok_or_else(|| DevToError::MissingField {
            field: "tags".to_string(),
        })?;

        Ok(FrontMatter {
            title,
            description: self.description,
            image: self.image,
            tags,
        })
    }
}

/// A parsed post: front-matter plus untouched body text and the path it
/// was read from.
#[derive(Debug, Clone)]
pub struct Document {
    pub front_matter: FrontMatter,
    pub body: String,
    pub source_path: PathBuf,
}

/// Splits and deserializes front-matter from raw markdown files.
#[derive(Debug, Default, Clone)]
pub struct MarkdownParser;

impl MarkdownParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Reads and parses a post from disk.
    pub async fn parse_file(&self, path: &Path) -> Result<Document> {
        let raw = tokio::fs::read_to_string(path).await?;
        self.parse(&raw, path)
    }

    /// Parses raw markdown into front-matter and body.
    pub fn parse(&self, raw: &str, source_path: &Path) -> Result<Document> {
        let (front, body) = split_front_matter(raw).ok_or_else(|| {
            DevToError::invalid_document(format!(
                "no front-matter block in {}",
                source_path.display()
            ))
        })?;

        let raw_front_matter: RawFrontMatter = serde_yaml::from_str(front)?;
        let front_matter = raw_front_matter.validate()?;

        Ok(Document {
            front_matter,
            body: body.to_string(),
            source_path: source_path.to_path_buf(),
        })
    }
}

/// Splits `raw` into (front-matter YAML, body). The front-matter block
/// must start on the first line and be closed by a `---` line.
fn split_front_matter(raw: &str) -> Option<(&str, &str)> {
    let rest = raw.strip_prefix(FRONT_MATTER_DELIMITER)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let close = format!("\n{FRONT_MATTER_DELIMITER}");
    let close_at = rest.find(&close)?;
    let front = rest[..close_at].trim_end_matches('\r');

    let after = &rest[close_at + close.len()..];
    let body = after
        .strip_prefix("\r\n")
        .or_else(|| after.strip_prefix('\n'))
        .unwrap_or(after);

    Some((front, body))
}
