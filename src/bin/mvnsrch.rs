//! mvnsrch — search Maven Central from the command line.

use anyhow::{Context, Result};
use clap::Parser;

use startserver::maven::{self, Query, SearchResult, SortField};

/// Search Maven Central
#[derive(Parser)]
#[command(name = "mvnsrch", version)]
struct Cli {
    /// Group:Artifact
    #[arg(long = "ga")]
    group_artifact: Option<String>,

    /// Simple class name
    #[arg(short = 'c', long = "classname")]
    class_name: Option<String>,

    /// Fully-qualified class name
    #[arg(short = 'f', long = "fqcn")]
    fqcn: Option<String>,

    /// Group ID
    #[arg(short = 'g', long = "group")]
    group: Option<String>,

    /// Artifact ID
    #[arg(short = 'a', long = "artifact")]
    artifact: Option<String>,

    /// Number of rows to return
    #[arg(short = 'r', long = "rows", default_value_t = 20)]
    rows: u32,

    /// Field to sort by: (a)rtifact, (g)roup, (i)d, (v)ersion, (d)ate updated
    #[arg(short = 's', long = "sort", default_value = "i")]
    sort: String,

    /// Sort results in descending order
    #[arg(short = 'd', long = "descending")]
    descending: bool,
}

impl Cli {
    /// Pick the search criterion; the most specific flag wins.
    fn query(&self) -> Option<Query> {
        if let Some(ga) = &self.group_artifact {
            Some(Query::GroupArtifact(ga.clone()))
        } else if let Some(name) = &self.class_name {
            Some(Query::ClassName(name.clone()))
        } else if let Some(name) = &self.fqcn {
            Some(Query::Fqcn(name.clone()))
        } else if let Some(group) = &self.group {
            Some(Query::GroupId(group.clone()))
        } else {
            self.artifact.as_ref().map(|a| Query::ArtifactId(a.clone()))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(query) = cli.query() else {
        anyhow::bail!("No search criteria provided");
    };

    let url = query.url(cli.rows)?;
    let body = ureq::get(&url)
        .call()
        .context("search request failed")?
        .into_string()
        .context("reading search response")?;
    let result: SearchResult =
        serde_json::from_str(&body).context("parsing search response")?;

    let mut docs = result.response.docs;
    maven::sort_docs(&mut docs, SortField::from_flag(&cli.sort), cli.descending);
    print!("{}", maven::format_table(&docs));

    Ok(())
}
