//! Field extraction and normalization.
//!
//! Turns a raw Crossref work record (journal style) or direct user input
//! (dataset style) into a validated field set. A field the active style marks
//! required either survives normalization or the whole record is rejected;
//! no partial field set is ever handed to assembly. Optional fields are
//! carried as `Option`, never defaulted to an empty string.

use compact_str::CompactString;

use crate::crossref::{RawAuthor, RawWork};
use crate::error::{CitationError, fields};
use crate::style::{JournalConfig, YearSource};
use crate::{Author, CitationFields, DatasetFields, JournalFields};

/// Work type accepted by the journal-article styles.
///
/// Compared exactly against the record's declared `type`.
pub const JOURNAL_ARTICLE_TYPE: &str = "journal-article";

/// Extract and validate journal-article citation fields from a raw record.
///
/// The `config` decides which of volume/pages are required and which date
/// source supplies the year; see [`JournalConfig`].
///
/// # Errors
///
/// [`CitationError::TypeMismatch`] when the record is not a journal article,
/// [`CitationError::MissingField`] when a required field is absent or empty.
pub fn normalize_journal(
    work: RawWork,
    config: &JournalConfig,
) -> Result<CitationFields, CitationError> {
    let work_type = work.work_type.as_deref().unwrap_or("");
    if work_type != JOURNAL_ARTICLE_TYPE {
        return Err(CitationError::TypeMismatch {
            actual: work_type.to_string(),
        });
    }

    let authors = normalize_authors(work.author)?;

    let title = work.title.join(" ");
    if title.is_empty() {
        return Err(CitationError::MissingField {
            field: fields::TITLE,
        });
    }

    let journal =
        work.container_title
            .into_iter()
            .next()
            .ok_or(CitationError::MissingField {
                field: fields::JOURNAL,
            })?;

    let volume = presence(work.volume, config.volume_required, fields::VOLUME)?;
    let pages = presence(work.page, config.pages_required, fields::PAGES)?;
    // issue is optional in every configuration
    let issue = work.issue.filter(|v| !v.is_empty());

    let date = match config.year_source {
        YearSource::PublishedPrint => work.published_print,
        YearSource::Created => work.created,
    };
    let year = date
        .as_ref()
        .and_then(|d| d.year())
        .ok_or(CitationError::MissingField { field: fields::YEAR })?;

    let mut issn = work.issn.into_iter().filter(|v| !v.is_empty());
    let issn_print = issn.next().ok_or(CitationError::MissingField {
        field: fields::ISSN,
    })?;
    let issn_electronic = issn.next();

    let source_url = work
        .url
        .filter(|v| !v.is_empty())
        .ok_or(CitationError::MissingField { field: fields::URL })?;

    Ok(CitationFields::Journal(JournalFields {
        authors,
        title,
        journal,
        volume,
        issue,
        pages,
        year,
        issn_print,
        issn_electronic,
        source_url,
    }))
}

/// The five directly-entered dataset fields, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetInput {
    pub authors: String,
    pub title: String,
    pub publisher: String,
    pub published: String,
    pub url: String,
}

/// Validate directly-entered dataset citation fields.
///
/// Each field must be non-empty after trimming; there is no extraction logic.
pub fn normalize_dataset(input: DatasetInput) -> Result<CitationFields, CitationError> {
    Ok(CitationFields::Dataset(DatasetFields {
        authors: non_empty(input.authors, fields::AUTHORS)?,
        title: non_empty(input.title, fields::TITLE)?,
        publisher: non_empty(input.publisher, fields::PUBLISHER)?,
        published: non_empty(input.published, fields::PUBLISHED)?,
        url: non_empty(input.url, fields::URL)?,
    }))
}

/// Render the author list, rejecting records where any entry lacks the parts
/// the style renders.
fn normalize_authors(raw: Vec<RawAuthor>) -> Result<Vec<Author>, CitationError> {
    if raw.is_empty() {
        return Err(CitationError::MissingField {
            field: fields::AUTHORS,
        });
    }
    raw.into_iter()
        .map(|author| {
            normalize_author(author).ok_or(CitationError::MissingField {
                field: fields::AUTHORS,
            })
        })
        .collect()
}

fn normalize_author(raw: RawAuthor) -> Option<Author> {
    let family = raw.family.filter(|f| !f.trim().is_empty())?;
    let initial = raw
        .given
        .as_deref()
        .and_then(|given| given.trim().chars().next())
        .map(|c| CompactString::from_iter([c]))?;
    Some(Author { family, initial })
}

/// Apply the required/optional policy to a maybe-present value.
fn presence(
    value: Option<String>,
    required: bool,
    field: &'static str,
) -> Result<Option<String>, CitationError> {
    match value.filter(|v| !v.is_empty()) {
        None if required => Err(CitationError::MissingField { field }),
        value => Ok(value),
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, CitationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CitationError::MissingField { field });
    }
    Ok(if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossref::RawDate;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn raw_author(family: &str, given: &str) -> RawAuthor {
        RawAuthor {
            family: Some(family.to_string()),
            given: Some(given.to_string()),
        }
    }

    fn full_record() -> RawWork {
        RawWork {
            work_type: Some(JOURNAL_ARTICLE_TYPE.to_string()),
            author: vec![
                raw_author("Watson", "James Dewey"),
                raw_author("Crick", "Francis"),
            ],
            title: vec![
                "Molecular Structure of Nucleic Acids:".to_string(),
                "A Structure for Deoxyribose Nucleic Acid".to_string(),
            ],
            container_title: vec!["Nature".to_string()],
            volume: Some("171".to_string()),
            issue: Some("4356".to_string()),
            page: Some("737-738".to_string()),
            published_print: Some(RawDate {
                date_parts: vec![vec![1953, 4, 25]],
            }),
            created: Some(RawDate {
                date_parts: vec![vec![2006, 2, 27]],
            }),
            issn: vec!["0028-0836".to_string(), "1476-4687".to_string()],
            url: Some("https://doi.org/10.1038/171737a0".to_string()),
        }
    }

    fn journal(fields: CitationFields) -> JournalFields {
        match fields {
            CitationFields::Journal(f) => f,
            CitationFields::Dataset(_) => panic!("expected journal fields"),
        }
    }

    #[test]
    fn test_normalize_full_record_strict() {
        let fields = journal(normalize_journal(full_record(), &JournalConfig::STRICT).unwrap());
        assert_eq!(fields.authors.len(), 2);
        assert_eq!(fields.authors[0].to_string(), "Watson, J.");
        assert_eq!(fields.authors[1].to_string(), "Crick, F.");
        assert_eq!(
            fields.title,
            "Molecular Structure of Nucleic Acids: A Structure for Deoxyribose Nucleic Acid"
        );
        assert_eq!(fields.journal, "Nature");
        assert_eq!(fields.volume.as_deref(), Some("171"));
        assert_eq!(fields.issue.as_deref(), Some("4356"));
        assert_eq!(fields.pages.as_deref(), Some("737-738"));
        assert_eq!(fields.year, 1953);
        assert_eq!(fields.issn_print, "0028-0836");
        assert_eq!(fields.issn_electronic.as_deref(), Some("1476-4687"));
        assert_eq!(fields.source_url, "https://doi.org/10.1038/171737a0");
    }

    #[rstest]
    #[case(Some("book-chapter".to_string()), "book-chapter")]
    #[case(Some(" journal-article".to_string()), " journal-article")]
    #[case(None, "")]
    fn test_type_mismatch(#[case] work_type: Option<String>, #[case] expected: &str) {
        let record = RawWork {
            work_type,
            ..full_record()
        };
        let err = normalize_journal(record, &JournalConfig::STRICT).unwrap_err();
        assert!(matches!(
            err,
            CitationError::TypeMismatch { actual } if actual == expected
        ));
    }

    #[rstest]
    #[case::no_authors(RawWork { author: vec![], ..full_record() }, fields::AUTHORS)]
    #[case::author_without_family(
        RawWork {
            author: vec![RawAuthor { family: None, given: Some("James".to_string()) }],
            ..full_record()
        },
        fields::AUTHORS
    )]
    #[case::author_without_given(
        RawWork {
            author: vec![RawAuthor { family: Some("Watson".to_string()), given: None }],
            ..full_record()
        },
        fields::AUTHORS
    )]
    #[case::no_title(RawWork { title: vec![], ..full_record() }, fields::TITLE)]
    #[case::no_journal(RawWork { container_title: vec![], ..full_record() }, fields::JOURNAL)]
    #[case::no_volume(RawWork { volume: None, ..full_record() }, fields::VOLUME)]
    #[case::no_pages(RawWork { page: None, ..full_record() }, fields::PAGES)]
    #[case::no_print_date(RawWork { published_print: None, ..full_record() }, fields::YEAR)]
    #[case::empty_date_parts(
        RawWork {
            published_print: Some(RawDate { date_parts: vec![] }),
            ..full_record()
        },
        fields::YEAR
    )]
    #[case::no_issn(RawWork { issn: vec![], ..full_record() }, fields::ISSN)]
    #[case::no_url(RawWork { url: None, ..full_record() }, fields::URL)]
    fn test_strict_missing_required_field(#[case] record: RawWork, #[case] field: &'static str) {
        let err = normalize_journal(record, &JournalConfig::STRICT).unwrap_err();
        assert!(matches!(
            err,
            CitationError::MissingField { field: f } if f == field
        ));
    }

    #[test]
    fn test_missing_issue_is_not_an_error() {
        let record = RawWork {
            issue: None,
            ..full_record()
        };
        let fields = journal(normalize_journal(record, &JournalConfig::STRICT).unwrap());
        assert_eq!(fields.issue, None);
    }

    #[test]
    fn test_single_issn_leaves_electronic_absent() {
        let record = RawWork {
            issn: vec!["0028-0836".to_string()],
            ..full_record()
        };
        let fields = journal(normalize_journal(record, &JournalConfig::STRICT).unwrap());
        assert_eq!(fields.issn_print, "0028-0836");
        assert_eq!(fields.issn_electronic, None);
    }

    #[test]
    fn test_lenient_tolerates_missing_volume_and_pages() {
        let record = RawWork {
            volume: None,
            page: None,
            ..full_record()
        };
        let fields = journal(normalize_journal(record, &JournalConfig::LENIENT).unwrap());
        assert_eq!(fields.volume, None);
        assert_eq!(fields.pages, None);
    }

    #[test]
    fn test_lenient_takes_year_from_created() {
        let fields = journal(normalize_journal(full_record(), &JournalConfig::LENIENT).unwrap());
        assert_eq!(fields.year, 2006);
    }

    #[test]
    fn test_lenient_without_created_date_fails() {
        let record = RawWork {
            created: None,
            ..full_record()
        };
        let err = normalize_journal(record, &JournalConfig::LENIENT).unwrap_err();
        assert!(matches!(
            err,
            CitationError::MissingField { field } if field == fields::YEAR
        ));
    }

    #[test]
    fn test_normalize_dataset() {
        let fields = normalize_dataset(DatasetInput {
            authors: "Smith, J.".to_string(),
            title: "Dataset Title".to_string(),
            publisher: "Acme Press".to_string(),
            published: "July 29, 2021".to_string(),
            url: "http://example.org/data".to_string(),
        })
        .unwrap();
        assert_eq!(
            fields,
            CitationFields::Dataset(DatasetFields {
                authors: "Smith, J.".to_string(),
                title: "Dataset Title".to_string(),
                publisher: "Acme Press".to_string(),
                published: "July 29, 2021".to_string(),
                url: "http://example.org/data".to_string(),
            })
        );
    }

    #[rstest]
    #[case::authors("", "Title", "Pub", "2021", "http://x", fields::AUTHORS)]
    #[case::title("A", "", "Pub", "2021", "http://x", fields::TITLE)]
    #[case::publisher("A", "Title", "  ", "2021", "http://x", fields::PUBLISHER)]
    #[case::published("A", "Title", "Pub", "", "http://x", fields::PUBLISHED)]
    #[case::url("A", "Title", "Pub", "2021", "", fields::URL)]
    fn test_dataset_blank_field_fails(
        #[case] authors: &str,
        #[case] title: &str,
        #[case] publisher: &str,
        #[case] published: &str,
        #[case] url: &str,
        #[case] field: &'static str,
    ) {
        let err = normalize_dataset(DatasetInput {
            authors: authors.to_string(),
            title: title.to_string(),
            publisher: publisher.to_string(),
            published: published.to_string(),
            url: url.to_string(),
        })
        .unwrap_err();
        assert!(matches!(
            err,
            CitationError::MissingField { field: f } if f == field
        ));
    }

    #[test]
    fn test_multibyte_initial() {
        let record = RawWork {
            author: vec![raw_author("Bērziņš", "Āris")],
            ..full_record()
        };
        let fields = journal(normalize_journal(record, &JournalConfig::STRICT).unwrap());
        assert_eq!(fields.authors[0].to_string(), "Bērziņš, Ā.");
    }
}
