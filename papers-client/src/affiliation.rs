//! Heuristic detection of commercial author affiliations
//!
//! An affiliation counts as a company when its lower-cased text contains any
//! keyword from a fixed list as a plain substring. This is deliberately
//! crude: "inc" also matches "Princeton", and a lab that never mentions its
//! legal form is missed.

use crate::pubmed::models::Author;

/// Keywords used when no custom list is configured
pub const DEFAULT_COMPANY_KEYWORDS: &[&str] = &["pharma", "biotech", "inc", "ltd", "company"];

/// Flags author affiliations that look commercial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliationClassifier {
    keywords: Vec<String>,
}

impl AffiliationClassifier {
    /// Build a classifier from a keyword list. Keywords are lower-cased and
    /// blank entries are dropped.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        let keywords = keywords
            .iter()
            .map(|kw| kw.as_ref().trim().to_lowercase())
            .filter(|kw| !kw.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether a single affiliation string matches any keyword
    pub fn is_company(&self, affiliation: &str) -> bool {
        let lowered = affiliation.to_lowercase();
        self.matches_lowered(&lowered)
    }

    fn matches_lowered(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw.as_str()))
    }

    /// Lower-cased affiliations of `authors` that match, in author order
    ///
    /// # Example
    ///
    /// ```
    /// use papers_client::{AffiliationClassifier, Author};
    ///
    /// let classifier = AffiliationClassifier::default();
    /// let authors = vec![
    ///     Author::new("Doe J", Some("Acme Biotech Labs")),
    ///     Author::new("Roe R", Some("State University")),
    /// ];
    ///
    /// assert_eq!(classifier.classify(&authors), vec!["acme biotech labs"]);
    /// ```
    pub fn classify(&self, authors: &[Author]) -> Vec<String> {
        authors
            .iter()
            .map(|author| author.affiliation.as_deref().unwrap_or("").to_lowercase())
            .filter(|lowered| self.matches_lowered(lowered))
            .collect()
    }
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_COMPANY_KEYWORDS)
    }
}
