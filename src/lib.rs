//! Format bibliographic citations in the RTU citation style and copy them to
//! the system clipboard.
//!
//! `rtucite` turns heterogeneous source metadata into the exact punctuation the
//! RTU citation standard mandates. Two styles are supported:
//!
//! - **Journal article** (style identifier `"7"`): metadata is fetched from the
//!   Crossref works registry by DOI, then validated and normalized.
//! - **Dataset** (style identifier `"14"`): the five citation fields are
//!   entered directly.
//!
//! The formatting core is pure data-in, string-out: the network transport, the
//! interactive prompt loop, and the clipboard write are separate collaborators
//! behind traits, so the core is fully testable offline.
//!
//! # Basic Usage
//!
//! Dataset citations need no network access:
//!
//! ```rust
//! use rtucite::{DatasetInput, assemble, normalize_dataset, style};
//!
//! let descriptor = style::lookup("14").unwrap();
//! let fields = normalize_dataset(DatasetInput {
//!     authors: "Smith, J.".to_string(),
//!     title: "Dataset Title".to_string(),
//!     publisher: "Acme Press".to_string(),
//!     published: "July 29, 2021".to_string(),
//!     url: "http://example.org/data".to_string(),
//! })
//! .unwrap();
//!
//! let citation = assemble(descriptor, &fields);
//! assert_eq!(
//!     citation,
//!     "Smith, J.. Dataset Title [datu kopa]. Acme Press, July 29, 2021. Pieejams: http://example.org/data"
//! );
//! ```
//!
//! Journal citations fetch a raw work record first:
//!
//! ```rust,no_run
//! use rtucite::crossref::{CrossrefClient, MetadataSource};
//! use rtucite::style::StyleKind;
//! use rtucite::{assemble, normalize_journal, style};
//!
//! # fn main() -> Result<(), rtucite::CitationError> {
//! let descriptor = style::lookup("7")?;
//! let StyleKind::Journal(config) = &descriptor.kind else {
//!     unreachable!()
//! };
//!
//! let client = CrossrefClient::new()?;
//! let work = client.fetch("10.1038/nature12373")?;
//! let fields = normalize_journal(work, config)?;
//! println!("{}", assemble(descriptor, &fields));
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return [`CitationError`]; no partially formatted citation is
//! ever produced. A field required by the active style either survives
//! normalization or the whole lookup fails with
//! [`CitationError::MissingField`].

use std::borrow::Cow;

use compact_str::CompactString;
use itertools::Itertools;

pub mod assemble;
pub mod clipboard;
pub mod crossref;
pub mod error;
pub mod normalize;
pub mod session;
pub mod style;

// Reexports
pub use assemble::assemble;
pub use clipboard::{ClipboardSink, SystemClipboard};
pub use error::CitationError;
pub use normalize::{DatasetInput, normalize_dataset, normalize_journal};
pub use session::Session;

use error::fields;

/// An author of a cited work, reduced to the parts the RTU style renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    /// Family (last) name.
    pub family: String,
    /// First initial of the given name, without the trailing period.
    pub initial: CompactString,
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}.", self.family, self.initial)
    }
}

/// Normalized fields for a journal-article citation.
///
/// Produced only by [`normalize_journal`]; every field the active style marks
/// required is guaranteed present, optional fields are `None` when absent and
/// never an empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalFields {
    /// Ordered author list, never empty.
    pub authors: Vec<Author>,
    /// Title segments joined with single spaces.
    pub title: String,
    /// Journal (container) name.
    pub journal: String,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub pages: Option<String>,
    /// Publication year from the configured date source.
    pub year: i32,
    /// Print ISSN, the first entry of the record's ISSN list.
    pub issn_print: String,
    /// Electronic ISSN, the second entry of the ISSN list when present.
    pub issn_electronic: Option<String>,
    /// Canonical URL of the work.
    pub source_url: String,
}

/// Validated fields for a dataset citation, all entered directly.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetFields {
    pub authors: String,
    pub title: String,
    pub publisher: String,
    pub published: String,
    pub url: String,
}

/// A normalized field set ready for assembly, tagged by style family.
#[derive(Debug, Clone, PartialEq)]
pub enum CitationFields {
    Journal(JournalFields),
    Dataset(DatasetFields),
}

impl CitationFields {
    /// Look up the rendered value for a slot by field name.
    ///
    /// Returns `None` for absent optional fields and for field names the
    /// variant does not carry.
    pub(crate) fn slot(&self, field: &str) -> Option<Cow<'_, str>> {
        match self {
            CitationFields::Journal(f) => f.slot(field),
            CitationFields::Dataset(f) => f.slot(field),
        }
    }
}

impl JournalFields {
    fn slot(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            fields::AUTHORS => Some(Cow::Owned(self.authors.iter().join(", "))),
            fields::TITLE => Some(Cow::Borrowed(self.title.as_str())),
            fields::JOURNAL => Some(Cow::Borrowed(self.journal.as_str())),
            fields::YEAR => Some(Cow::Owned(self.year.to_string())),
            fields::VOLUME => self.volume.as_deref().map(Cow::Borrowed),
            fields::ISSUE => self.issue.as_deref().map(Cow::Borrowed),
            fields::PAGES => self.pages.as_deref().map(Cow::Borrowed),
            fields::ISSN => Some(Cow::Borrowed(self.issn_print.as_str())),
            fields::E_ISSN => self.issn_electronic.as_deref().map(Cow::Borrowed),
            fields::URL => Some(Cow::Borrowed(self.source_url.as_str())),
            _ => None,
        }
    }
}

impl DatasetFields {
    fn slot(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            fields::AUTHORS => Some(Cow::Borrowed(self.authors.as_str())),
            fields::TITLE => Some(Cow::Borrowed(self.title.as_str())),
            fields::PUBLISHER => Some(Cow::Borrowed(self.publisher.as_str())),
            fields::PUBLISHED => Some(Cow::Borrowed(self.published.as_str())),
            fields::URL => Some(Cow::Borrowed(self.url.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn author(family: &str, initial: &str) -> Author {
        Author {
            family: family.to_string(),
            initial: CompactString::new(initial),
        }
    }

    #[test]
    fn test_author_display() {
        assert_eq!(author("Smith", "J").to_string(), "Smith, J.");
    }

    #[test]
    fn test_journal_authors_slot_joins_in_order() {
        let fields = JournalFields {
            authors: vec![author("Watson", "J"), author("Crick", "F")],
            title: "Molecular Structure of Nucleic Acids".to_string(),
            journal: "Nature".to_string(),
            volume: Some("171".to_string()),
            issue: None,
            pages: Some("737-738".to_string()),
            year: 1953,
            issn_print: "0028-0836".to_string(),
            issn_electronic: None,
            source_url: "https://doi.org/10.1038/171737a0".to_string(),
        };
        let cf = CitationFields::Journal(fields);
        assert_eq!(cf.slot(fields::AUTHORS).unwrap(), "Watson, J., Crick, F.");
        assert_eq!(cf.slot(fields::YEAR).unwrap(), "1953");
        assert_eq!(cf.slot(fields::ISSUE), None);
        assert_eq!(cf.slot(fields::E_ISSN), None);
    }

    #[test]
    fn test_dataset_slot_has_no_journal_fields() {
        let cf = CitationFields::Dataset(DatasetFields {
            authors: "Smith, J.".to_string(),
            title: "Dataset Title".to_string(),
            publisher: "Acme Press".to_string(),
            published: "July 29, 2021".to_string(),
            url: "http://example.org/data".to_string(),
        });
        assert_eq!(cf.slot(fields::PUBLISHER).unwrap(), "Acme Press");
        assert_eq!(cf.slot(fields::ISSN), None);
        assert_eq!(cf.slot(fields::VOLUME), None);
    }
}
