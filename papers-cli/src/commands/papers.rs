use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use papers_client::{PaperRecord, PubMedClient, export};

use super::{ClientOptions, create_pubmed_client};

#[derive(Args, Debug)]
pub struct FindPapers {
    /// PubMed search query (full PubMed query syntax is supported)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Print the query and fetched PubMed IDs, and enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Save results to this CSV file instead of printing them
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Maximum number of papers to look up
    #[arg(long, default_value = "10")]
    pub max_results: usize,

    /// Company keyword (repeatable); replaces the default list
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Number of detail requests kept in flight (1 = strictly sequential)
    #[arg(long, default_value = "1")]
    pub concurrency: usize,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

impl FindPapers {
    pub async fn execute_with_config(
        &self,
        api_key: Option<&str>,
        email: Option<&str>,
        tool: &str,
    ) -> Result<()> {
        let client = create_pubmed_client(&ClientOptions {
            api_key,
            email,
            tool,
            timeout_seconds: self.timeout,
            max_results: self.max_results,
            keywords: &self.keywords,
        })?;

        self.run(&client, &mut std::io::stdout()).await
    }

    /// Search, fetch and emit results to `out`
    async fn run<W: Write>(&self, client: &PubMedClient, out: &mut W) -> Result<()> {
        if self.debug {
            writeln!(out, "Query: {}", self.query)?;
        }

        let pmids = client
            .search_ids(&self.query)
            .await
            .context("PubMed search failed")?;

        if self.debug {
            writeln!(out, "Fetched IDs: {:?}", pmids)?;
        }

        let papers = client
            .fetch_papers_concurrent(&pmids, self.concurrency)
            .await
            .context("Fetching paper details failed")?;

        tracing::info!(
            found = pmids.len(),
            resolved = papers.len(),
            with_company = papers.iter().filter(|p| p.has_company_affiliation()).count(),
            "Papers collected"
        );

        match &self.file {
            Some(path) => {
                export::write_csv(&papers, path)
                    .with_context(|| format!("Failed to save results to {}", path.display()))?;
                writeln!(out, "Results saved to {}", path.display())?;
            }
            None => {
                writeln!(out, "{}", render_papers(&papers)?)?;
            }
        }

        Ok(())
    }
}

/// Pretty JSON array of records, keyed by the CSV column names
pub fn render_papers(papers: &[PaperRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(papers)?)
}
