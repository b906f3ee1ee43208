pub mod papers;

use std::time::Duration;

use anyhow::Result;
use papers_client::{ClientConfig, PubMedClient};

/// Connection and heuristic settings shared by the command
pub struct ClientOptions<'a> {
    pub api_key: Option<&'a str>,
    pub email: Option<&'a str>,
    pub tool: &'a str,
    pub timeout_seconds: u64,
    pub max_results: usize,
    pub keywords: &'a [String],
}

pub fn create_pubmed_client(options: &ClientOptions<'_>) -> Result<PubMedClient> {
    let mut config = ClientConfig::new()
        .with_tool(options.tool)
        .with_timeout(Duration::from_secs(options.timeout_seconds))
        .with_max_results(options.max_results);

    if let Some(key) = options.api_key {
        config = config.with_api_key(key);
    }

    if let Some(email) = options.email {
        config = config.with_email(email);
    }

    if !options.keywords.is_empty() {
        config = config.with_company_keywords(options.keywords.iter().cloned());
    }

    Ok(PubMedClient::with_config(config))
}
