//! Maven Central search — query building, response model, and rendering
//! for the `mvnsrch` binary.
//!
//! The solr endpoint answers different cores depending on the query:
//! `g:`/`a:`/`c:`/`fc:` hit the artifact core, `g: AND a:` hits the `gav`
//! core. Everything here is pure; the binary does the HTTP call.

use anyhow::Result;
use chrono::{Local, TimeZone};
use serde::Deserialize;

const BASE_URL: &str = "https://search.maven.org/solrsearch/select?wt=json&q=";

/// A single search criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `group:artifact` coordinates, searched against the `gav` core.
    GroupArtifact(String),
    /// Simple class name.
    ClassName(String),
    /// Fully-qualified class name; slashes are normalized to dots.
    Fqcn(String),
    GroupId(String),
    ArtifactId(String),
}

impl Query {
    /// Render the full request URL for this criterion.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed `group:artifact` coordinates.
    pub fn url(&self, rows: u32) -> Result<String> {
        let url = match self {
            Self::GroupArtifact(ga) => {
                let (group, artifact) = ga
                    .split_once(':')
                    .filter(|(g, a)| !g.is_empty() && !a.is_empty())
                    .ok_or_else(|| anyhow::anyhow!("Invalid group:artifact coordinates"))?;
                format!("{BASE_URL}g:{group}+AND+a:{artifact}&core=gav&rows={rows}")
            }
            Self::ClassName(name) => format!("{BASE_URL}c:{name}&rows={rows}"),
            Self::Fqcn(name) => format!("{BASE_URL}fc:{}&rows={rows}", name.replace('/', ".")),
            Self::GroupId(group) => format!("{BASE_URL}g:{group}&rows={rows}"),
            Self::ArtifactId(artifact) => format!("{BASE_URL}a:{artifact}&rows={rows}"),
        };
        Ok(url)
    }
}

/// Top-level solr response envelope.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub response: Response,
}

#[derive(Debug, Deserialize)]
pub struct Response {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    pub start: u64,
    pub docs: Vec<Document>,
}

/// One artifact (or, on the `gav` core, one artifact version).
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(rename = "g")]
    pub group_id: String,
    #[serde(rename = "a")]
    pub artifact_id: String,
    /// Present on `gav`-core results only.
    #[serde(rename = "v", default)]
    pub version: Option<String>,
    #[serde(rename = "p", default)]
    pub packaging: Option<String>,
    /// Last-updated time, epoch milliseconds.
    pub timestamp: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Field to order results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Group,
    Artifact,
    Version,
    /// Last-updated time; newest first by default.
    Updated,
}

impl SortField {
    /// Map the one-letter `--sort` value; anything unrecognized means id.
    #[must_use]
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "g" => Self::Group,
            "a" => Self::Artifact,
            "v" => Self::Version,
            "d" => Self::Updated,
            _ => Self::Id,
        }
    }
}

/// Sort the documents in place. String fields sort ascending unless
/// `descending` is set; the updated field sorts newest-first and
/// `descending` flips it to oldest-first.
pub fn sort_docs(docs: &mut [Document], field: SortField, descending: bool) {
    docs.sort_by(|d1, d2| {
        let ord = match field {
            SortField::Id => d1.id.cmp(&d2.id),
            SortField::Group => d1.group_id.cmp(&d2.group_id),
            SortField::Artifact => d1.artifact_id.cmp(&d2.artifact_id),
            SortField::Version => d1.version.cmp(&d2.version),
            SortField::Updated => d2.timestamp.cmp(&d1.timestamp),
        };
        if descending { ord.reverse() } else { ord }
    });
}

/// Render the two-column result table, aligned on the longest coordinate.
#[must_use]
pub fn format_table(docs: &[Document]) -> String {
    let width = docs.iter().map(|d| d.id.len()).max().unwrap_or(80) + 2;

    let mut table = String::new();
    table.push_str(&format!("{:<width$}{}\n", "Coordinates", "Last Updated"));
    table.push_str(&format!("{:<width$}{}\n", "===========", "============"));
    for doc in docs {
        table.push_str(&format!(
            "{:<width$}{}\n",
            doc.id,
            format_timestamp(doc.timestamp)
        ));
    }
    table
}

/// Format an epoch-milliseconds timestamp in local time.
#[must_use]
pub fn format_timestamp(millis: i64) -> String {
    Local.timestamp_millis_opt(millis).single().map_or_else(
        || "unknown".to_string(),
        |dt| dt.format("%Y-%m-%d %I:%M %p (%Z)").to_string(),
    )
}
