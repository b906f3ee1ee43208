//! Client configuration
//!
//! [`ClientConfig`] carries everything the client needs besides the HTTP
//! transport itself: the E-utilities endpoint, NCBI courtesy parameters,
//! request pacing, the search result cap and the company keyword list.

use std::time::Duration;

use crate::affiliation::{AffiliationClassifier, DEFAULT_COMPANY_KEYWORDS};
use crate::rate_limit::RateLimiter;

/// Default NCBI E-utilities endpoint
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default number of identifiers requested from ESearch
pub const DEFAULT_MAX_RESULTS: usize = 10;

const DEFAULT_TOOL: &str = "papers-client";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// # Example
///
/// ```
/// use papers_client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_email("researcher@university.edu")
///     .with_max_results(5)
///     .with_company_keywords(["pharma", "gmbh"]);
///
/// assert_eq!(config.max_results, 5);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// NCBI API key; raises the permitted request rate
    pub api_key: Option<String>,
    /// Contact email sent with every request
    pub email: Option<String>,
    /// Tool name sent with every request
    pub tool: Option<String>,
    /// Override for the E-utilities endpoint (used by tests against a mock server)
    pub base_url: Option<String>,
    /// Override for the User-Agent header
    pub user_agent: Option<String>,
    /// Override for requests per second
    pub rate_limit: Option<f64>,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Maximum identifiers returned by a search
    pub max_results: usize,
    /// Substrings that mark an affiliation as commercial
    pub company_keywords: Vec<String>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            api_key: None,
            email: None,
            tool: None,
            base_url: None,
            user_agent: None,
            rate_limit: None,
            timeout: DEFAULT_TIMEOUT,
            max_results: DEFAULT_MAX_RESULTS,
            company_keywords: DEFAULT_COMPANY_KEYWORDS
                .iter()
                .map(|kw| kw.to_string())
                .collect(),
        }
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set requests per second, overriding the API-key based default
    pub fn with_rate_limit(mut self, rate: f64) -> Self {
        self.rate_limit = Some(rate);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the search result cap. Values below 1 are clamped to 1.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.max(1);
        self
    }

    /// Replace the company keyword list
    pub fn with_company_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.company_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_user_agent(&self) -> String {
        match &self.user_agent {
            Some(ua) => ua.clone(),
            None => format!("papers-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// Requests per second: explicit override, else 10 with an API key, else 3
    pub fn effective_rate_limit(&self) -> f64 {
        match (self.rate_limit, &self.api_key) {
            (Some(rate), _) => rate,
            (None, Some(_)) => 10.0,
            (None, None) => 3.0,
        }
    }

    /// Query parameters appended to every E-utilities request
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(key) = &self.api_key {
            params.push(("api_key".to_string(), key.clone()));
        }
        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }
        params.push(("tool".to_string(), self.effective_tool().to_string()));

        params
    }

    pub fn create_rate_limiter(&self) -> RateLimiter {
        RateLimiter::new(self.effective_rate_limit())
    }

    pub fn create_classifier(&self) -> AffiliationClassifier {
        AffiliationClassifier::new(&self.company_keywords)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
