//! # Papers Client
//!
//! An async client that searches PubMed, resolves per-paper details and flags
//! authors whose affiliations look commercial (pharma, biotech, ...).
//!
//! ## Features
//!
//! - **Two-stage retrieval**: ESearch for identifiers, then one ESummary request per identifier
//! - **Affiliation heuristic**: configurable keyword substring match on author affiliations
//! - **CSV export**: fixed six-column layout with standard quoting
//! - **Error Handling**: explicit absent-record results instead of silent failures
//!
//! ## Quick Start
//!
//! ```no_run
//! use papers_client::{export, ClientConfig, PubMedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new().with_email("researcher@university.edu");
//!     let client = PubMedClient::with_config(config);
//!
//!     let pmids = client.search_ids("cancer immunotherapy").await?;
//!     let papers = client.fetch_papers(&pmids).await?;
//!
//!     for paper in papers.iter().filter(|p| p.has_company_affiliation()) {
//!         println!("{}: {:?}", paper.pubmed_id, paper.company_affiliations);
//!     }
//!
//!     if !papers.is_empty() {
//!         export::write_csv(&papers, "papers.csv")?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod affiliation;
pub mod config;
pub mod error;
pub mod export;
pub mod pubmed;
pub mod rate_limit;

// Re-export main types for convenience
pub use affiliation::{AffiliationClassifier, DEFAULT_COMPANY_KEYWORDS};
pub use config::ClientConfig;
pub use error::{PapersError, Result};
pub use pubmed::{Author, PaperRecord, PubMedClient};
