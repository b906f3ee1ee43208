mod summary;

use crate::affiliation::AffiliationClassifier;
use crate::config::ClientConfig;
use crate::error::{PapersError, Result};
use crate::pubmed::models::PaperRecord;
use crate::pubmed::responses::ESearchResult;
use crate::rate_limit::RateLimiter;
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

/// Client for the PubMed ESearch and ESummary endpoints
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    pub(crate) base_url: String,
    rate_limiter: RateLimiter,
    classifier: AffiliationClassifier,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// Uses NCBI's default pacing (3 requests/second), a 10 result cap and
    /// the default company keywords.
    ///
    /// # Example
    ///
    /// ```
    /// use papers_client::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use papers_client::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@university.edu");
    ///
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client_and_config(client, config)
    }

    /// Create a new PubMed client around an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self::with_client_and_config(client, ClientConfig::new())
    }

    fn with_client_and_config(client: Client, config: ClientConfig) -> Self {
        Self {
            client,
            base_url: config.effective_base_url().to_string(),
            rate_limiter: config.create_rate_limiter(),
            classifier: config.create_classifier(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn classifier(&self) -> &AffiliationClassifier {
        &self.classifier
    }

    /// Search PubMed and return matching PMIDs
    ///
    /// At most `config.max_results` identifiers are returned, in the order
    /// PubMed ranked them.
    ///
    /// # Errors
    ///
    /// * `PapersError::InvalidQuery` - If the query is blank
    /// * `PapersError::RequestError` / `PapersError::ApiError` - If the HTTP request fails
    /// * `PapersError::JsonError` - If the body is not JSON
    /// * `PapersError::UnexpectedResponse` - If `esearchresult.idlist` is missing
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papers_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let pmids = client.search_ids("cancer immunotherapy").await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search_ids(&self, query: &str) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            return Err(PapersError::InvalidQuery(
                "search term must not be empty".to_string(),
            ));
        }

        let limit = self.config.max_results;
        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmode=json&retmax={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let json_text = response.text().await?;

        let pmids = Self::parse_esearch_response(&json_text, limit)?;
        info!(found = pmids.len(), "ESearch completed");
        Ok(pmids)
    }

    /// Search, then fetch details for every hit one at a time
    ///
    /// Identifiers whose details cannot be resolved are skipped.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papers_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     for paper in client.search_and_fetch("crispr").await? {
    ///         println!("{}: {:?}", paper.pubmed_id, paper.company_affiliations);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn search_and_fetch(&self, query: &str) -> Result<Vec<PaperRecord>> {
        let pmids = self.search_ids(query).await?;
        self.fetch_papers(&pmids).await
    }

    pub(crate) fn parse_esearch_response(json_text: &str, limit: usize) -> Result<Vec<String>> {
        let search_result: ESearchResult = serde_json::from_str(json_text)?;

        let data = search_result
            .esearchresult
            .ok_or_else(|| PapersError::UnexpectedResponse {
                message: "ESearch response has no `esearchresult` object".to_string(),
            })?;

        // NCBI sometimes returns 200 OK with an ERROR field
        if let Some(error_msg) = data.error {
            return Err(PapersError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {}", error_msg),
            });
        }

        let mut idlist = data.idlist.ok_or_else(|| PapersError::UnexpectedResponse {
            message: "ESearch response has no `esearchresult.idlist` array".to_string(),
        })?;

        if idlist.len() > limit {
            warn!(
                returned = idlist.len(),
                limit, "ESearch returned more identifiers than requested, truncating"
            );
            idlist.truncate(limit);
        }

        if let Some(count) = data.count.as_deref().and_then(|c| c.parse::<usize>().ok()) {
            debug!(total_count = count, returned = idlist.len(), "ESearch counts");
        }

        Ok(idlist)
    }

    /// Send a GET request, appending API parameters (api_key, email, tool).
    /// Non-success statuses become `PapersError::ApiError`; nothing is retried.
    pub(crate) async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        self.rate_limiter.acquire().await;
        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PapersError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
