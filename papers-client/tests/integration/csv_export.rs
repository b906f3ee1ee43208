//! CSV export tests: file lifecycle and read-back through `csv::Reader`

use papers_client::export::{self, CSV_HEADERS};
use papers_client::{Author, PaperRecord, PapersError};
use rstest::rstest;
use tempfile::tempdir;

fn paper(id: &str, authors: Vec<Author>) -> PaperRecord {
    let company_affiliations = papers_client::AffiliationClassifier::default().classify(&authors);
    PaperRecord {
        pubmed_id: id.to_string(),
        title: format!("Title for {id}"),
        publication_date: "2024 Feb 29".to_string(),
        authors,
        company_affiliations,
        corresponding_author_email: String::new(),
    }
}

fn read_back(path: &std::path::Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_path(path).expect("file should exist");
    let headers = reader
        .headers()
        .expect("header row")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .expect("rows should parse");
    (headers, rows)
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(10)]
fn test_round_trip_header_and_row_count(#[case] n: usize) {
    let papers: Vec<PaperRecord> = (0..n)
        .map(|i| {
            paper(
                &format!("{}", 1000 + i),
                vec![
                    Author::new("Smith, J.", Some("Acme Pharma, Ltd.\nBasel, Switzerland")),
                    Author::new("O'Brien \"Bo\" K", Some("Trinity College Dublin")),
                ],
            )
        })
        .collect();

    let dir = tempdir().unwrap();
    let out = dir.path().join("papers.csv");
    export::write_csv(&papers, &out).unwrap();

    let (headers, rows) = read_back(&out);
    assert_eq!(headers, CSV_HEADERS);
    assert_eq!(rows.len(), n);
    for row in &rows {
        assert_eq!(row.len(), CSV_HEADERS.len());
        assert_eq!(
            &row[3],
            "Smith, J. (Acme Pharma, Ltd.\nBasel, Switzerland); O'Brien \"Bo\" K (Trinity College Dublin)"
        );
        assert_eq!(&row[4], "acme pharma, ltd.\nbasel, switzerland");
    }
}

#[test]
fn test_write_csv_empty_creates_no_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("empty.csv");

    let err = export::write_csv(&[], &out).unwrap_err();

    assert!(matches!(err, PapersError::EmptyResultSet));
    assert!(!out.exists());
}

#[test]
fn test_write_csv_empty_leaves_existing_file_untouched() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("previous.csv");
    std::fs::write(&out, "keep me").unwrap();

    assert!(export::write_csv(&[], &out).is_err());
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_write_csv_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("papers.csv");
    std::fs::write(&out, "stale,content\n1,2\n3,4\n").unwrap();

    export::write_csv(&[paper("42", vec![])], &out).unwrap();

    let (headers, rows) = read_back(&out);
    assert_eq!(headers, CSV_HEADERS);
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "42");
    assert_eq!(&rows[0][3], "");
}

#[test]
fn test_write_csv_missing_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("no-such-dir").join("papers.csv");

    let err = export::write_csv(&[paper("1", vec![])], &out).unwrap_err();

    assert!(matches!(err, PapersError::IoError { .. }));
}
