//! Raw work-record structures as returned by the Crossref works endpoint.
//!
//! These mirror the registry's JSON shape; nothing here is validated beyond
//! what serde needs to deserialize. Normalization into citation fields happens
//! in [`crate::normalize`]. A record is transient, held only for the duration
//! of one lookup.

use serde::Deserialize;

/// Envelope of a works lookup response; the record itself lives in `message`.
#[derive(Debug, Deserialize)]
pub(crate) struct CrossrefResponse {
    pub(crate) message: RawWork,
}

/// A raw Crossref work record.
///
/// Every field is optional or defaulted: registries populate records
/// unevenly and absence is a normalization concern, not a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWork {
    /// Declared work type, e.g. `journal-article`.
    #[serde(rename = "type")]
    pub work_type: Option<String>,
    #[serde(default)]
    pub author: Vec<RawAuthor>,
    /// Title segments; a single title may arrive split across entries.
    #[serde(default)]
    pub title: Vec<String>,
    #[serde(rename = "container-title", default)]
    pub container_title: Vec<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    /// Page range, e.g. `737-738`.
    pub page: Option<String>,
    #[serde(rename = "published-print")]
    pub published_print: Option<RawDate>,
    pub created: Option<RawDate>,
    /// ISSN list: print first, electronic second when present.
    #[serde(rename = "ISSN", default)]
    pub issn: Vec<String>,
    /// Canonical URL of the work.
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

/// Author entry of a raw work record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthor {
    pub family: Option<String>,
    pub given: Option<String>,
}

/// A date in Crossref's nested date-parts form: `[[year, month, day]]` with
/// month and day optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDate {
    #[serde(rename = "date-parts", default)]
    pub date_parts: Vec<Vec<i32>>,
}

impl RawDate {
    /// The year component, when the nested parts carry one.
    pub fn year(&self) -> Option<i32> {
        self.date_parts.first().and_then(|parts| parts.first()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_full_record() {
        let body = r#"{
            "status": "ok",
            "message": {
                "type": "journal-article",
                "title": ["Molecular Structure of Nucleic Acids:", "A Structure for Deoxyribose Nucleic Acid"],
                "author": [
                    {"family": "Watson", "given": "James Dewey"},
                    {"family": "Crick", "given": "Francis"}
                ],
                "container-title": ["Nature"],
                "volume": "171",
                "issue": "4356",
                "page": "737-738",
                "published-print": {"date-parts": [[1953, 4, 25]]},
                "created": {"date-parts": [[2006, 2, 27]]},
                "ISSN": ["0028-0836", "1476-4687"],
                "URL": "https://doi.org/10.1038/171737a0"
            }
        }"#;

        let response: CrossrefResponse = serde_json::from_str(body).unwrap();
        let work = response.message;
        assert_eq!(work.work_type.as_deref(), Some("journal-article"));
        assert_eq!(work.title.len(), 2);
        assert_eq!(work.author[0].family.as_deref(), Some("Watson"));
        assert_eq!(work.container_title, vec!["Nature"]);
        assert_eq!(work.published_print.unwrap().year(), Some(1953));
        assert_eq!(work.created.unwrap().year(), Some(2006));
        assert_eq!(work.issn, vec!["0028-0836", "1476-4687"]);
    }

    #[test]
    fn test_deserialize_sparse_record() {
        // Crossref omits keys rather than sending null lists.
        let body = r#"{"message": {"title": ["Untitled"]}}"#;
        let response: CrossrefResponse = serde_json::from_str(body).unwrap();
        let work = response.message;
        assert_eq!(work.work_type, None);
        assert!(work.author.is_empty());
        assert!(work.issn.is_empty());
        assert!(work.published_print.is_none());
    }

    #[test]
    fn test_date_without_parts_has_no_year() {
        let date = RawDate { date_parts: vec![] };
        assert_eq!(date.year(), None);
        let date = RawDate {
            date_parts: vec![vec![]],
        };
        assert_eq!(date.year(), None);
    }
}
