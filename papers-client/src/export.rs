//! CSV export for paper records
//!
//! Columns, in order: `PubmedID`, `Title`, `Publication Date`, `Authors`,
//! `Company Affiliation(s)`, `Corresponding Author Email`. List-valued cells
//! are joined with `"; "`; the `csv` crate quotes embedded commas, quotes and
//! newlines.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::{PapersError, Result};
use crate::pubmed::models::PaperRecord;

/// Header row written before any record
pub const CSV_HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Authors",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

const LIST_SEPARATOR: &str = "; ";

/// Flatten a record into the six CSV cells
pub fn record_to_row(record: &PaperRecord) -> [String; 6] {
    let authors = record
        .authors
        .iter()
        .map(|author| author.display_label())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR);

    [
        record.pubmed_id.clone(),
        record.title.clone(),
        record.publication_date.clone(),
        authors,
        record.company_affiliations.join(LIST_SEPARATOR),
        record.corresponding_author_email.clone(),
    ]
}

/// Write `records` as CSV to any writer
///
/// # Errors
///
/// * `PapersError::EmptyResultSet` - If `records` is empty; nothing is written
/// * `PapersError::CsvError` - If serialization or the underlying write fails
pub fn write_csv_to<W: Write>(records: &[PaperRecord], writer: W) -> Result<()> {
    if records.is_empty() {
        return Err(PapersError::EmptyResultSet);
    }

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADERS)?;
    for record in records {
        wtr.write_record(record_to_row(record))?;
    }
    wtr.flush()?;

    debug!(rows = records.len(), "CSV rows written");
    Ok(())
}

/// Write `records` as CSV to the file at `path`, replacing it if present
///
/// The emptiness check runs before the file is opened, so an empty result
/// set never leaves an empty or headerless file behind.
///
/// # Example
///
/// ```no_run
/// use papers_client::{export, PubMedClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PubMedClient::new();
///     let papers = client.search_and_fetch("monoclonal antibody").await?;
///     export::write_csv(&papers, "papers.csv")?;
///     Ok(())
/// }
/// ```
#[instrument(skip(records, path), fields(records = records.len(), path = %path.as_ref().display()))]
pub fn write_csv<P: AsRef<Path>>(records: &[PaperRecord], path: P) -> Result<()> {
    if records.is_empty() {
        return Err(PapersError::EmptyResultSet);
    }

    let file = File::create(path.as_ref())?;
    write_csv_to(records, file)?;

    info!("Results written to CSV");
    Ok(())
}
