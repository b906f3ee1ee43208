//! ESummary API operations: per-identifier paper details

use futures_util::{StreamExt, TryStreamExt, stream};
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::pubmed::models::PaperRecord;
use crate::pubmed::responses::{ESummaryDocSum, ESummaryResponse};

use super::PubMedClient;

impl PubMedClient {
    /// Fetch details for a single PMID using the ESummary API
    ///
    /// Returns `Ok(None)` when the response has no usable entry for `pmid`:
    /// the `result` object or the keyed entry is missing, the entry carries
    /// an `error` marker, or one of its fields has the wrong JSON type.
    /// Missing optional fields (title, date, authors, contact email) still
    /// produce a record with empty defaults.
    ///
    /// # Errors
    ///
    /// * `PapersError::RequestError` / `PapersError::ApiError` - If the HTTP request fails
    /// * `PapersError::JsonError` - If the body is not JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papers_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     if let Some(paper) = client.fetch_paper("31978945").await? {
    ///         println!("{} ({})", paper.title, paper.publication_date);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(pmid = %pmid))]
    pub async fn fetch_paper(&self, pmid: &str) -> Result<Option<PaperRecord>> {
        let url = format!(
            "{}/esummary.fcgi?db=pubmed&id={}&retmode=json",
            self.base_url,
            urlencoding::encode(pmid)
        );

        debug!("Making ESummary API request");
        let response = self.make_request(&url).await?;
        let json_text = response.text().await?;

        self.parse_esummary_document(&json_text, pmid)
    }

    /// Fetch details for each PMID in turn, keeping resolvable records in
    /// input order. The first transport or decoding error aborts the batch.
    #[instrument(skip(self, pmids), fields(pmids_count = pmids.len()))]
    pub async fn fetch_papers<S: AsRef<str>>(&self, pmids: &[S]) -> Result<Vec<PaperRecord>> {
        let mut papers = Vec::with_capacity(pmids.len());

        for pmid in pmids {
            if let Some(paper) = self.fetch_paper(pmid.as_ref()).await? {
                papers.push(paper);
            }
        }

        info!(
            requested = pmids.len(),
            resolved = papers.len(),
            "Detail fetch completed"
        );
        Ok(papers)
    }

    /// Like [`fetch_papers`](Self::fetch_papers) but keeps up to
    /// `concurrency` requests in flight. Records come back in input order and
    /// requests are still paced by the client's rate limiter.
    #[instrument(skip(self, pmids), fields(pmids_count = pmids.len()))]
    pub async fn fetch_papers_concurrent<S: AsRef<str>>(
        &self,
        pmids: &[S],
        concurrency: usize,
    ) -> Result<Vec<PaperRecord>> {
        if concurrency <= 1 {
            return self.fetch_papers(pmids).await;
        }

        let fetched: Vec<Option<PaperRecord>> = stream::iter(pmids)
            .map(|pmid| self.fetch_paper(pmid.as_ref()))
            .buffered(concurrency)
            .try_collect()
            .await?;

        let papers: Vec<PaperRecord> = fetched.into_iter().flatten().collect();
        info!(
            requested = pmids.len(),
            resolved = papers.len(),
            concurrency,
            "Concurrent detail fetch completed"
        );
        Ok(papers)
    }

    /// Map one ESummary JSON body to a record for `pmid`
    pub(crate) fn parse_esummary_document(
        &self,
        json_text: &str,
        pmid: &str,
    ) -> Result<Option<PaperRecord>> {
        let response: ESummaryResponse = serde_json::from_str(json_text)?;

        let Some(result) = response.result else {
            debug!("ESummary response has no result object, skipping");
            return Ok(None);
        };

        let Some(doc_value) = result.get(pmid) else {
            debug!("PMID not found in ESummary result, skipping");
            return Ok(None);
        };

        if let Some(error) = doc_value.get("error") {
            debug!(error = %error, "ESummary returned error for PMID, skipping");
            return Ok(None);
        }

        if !doc_value.is_object() {
            debug!("ESummary entry is not an object, skipping");
            return Ok(None);
        }

        let doc: ESummaryDocSum = match serde_json::from_value(doc_value.clone()) {
            Ok(doc) => doc,
            Err(e) => {
                debug!(error = %e, "Malformed ESummary document, skipping");
                return Ok(None);
            }
        };

        let authors = doc.authors.unwrap_or_default();
        let company_affiliations = self.classifier().classify(&authors);

        Ok(Some(PaperRecord {
            pubmed_id: pmid.to_string(),
            title: doc.title.unwrap_or_default(),
            publication_date: doc.pubdate.unwrap_or_default(),
            authors,
            company_affiliations,
            corresponding_author_email: doc
                .contactinfo
                .and_then(|info| info.email)
                .unwrap_or_default(),
        }))
    }
}
