//! Error types for citation formatting operations.
//!
//! Every failure mode is a structured [`CitationError`] variant; a citation is
//! never partially assembled. The interactive session displays the failure and
//! re-prompts, so none of these are fatal to a session.

use thiserror::Error;

/// Field name constants for consistent error reporting and slot naming.
pub mod fields {
    pub const DOI: &str = "doi";
    pub const AUTHORS: &str = "authors";
    pub const TITLE: &str = "title";
    pub const JOURNAL: &str = "journal";
    pub const YEAR: &str = "year";
    pub const VOLUME: &str = "volume";
    pub const ISSUE: &str = "issue";
    pub const PAGES: &str = "pages";
    pub const ISSN: &str = "issn";
    pub const E_ISSN: &str = "e-issn";
    pub const URL: &str = "url";
    pub const PUBLISHER: &str = "publisher";
    pub const PUBLISHED: &str = "publication date";
}

/// Top-level error type for citation operations.
#[derive(Error, Debug)]
pub enum CitationError {
    /// The registry answered with a non-success status code.
    #[error("Metadata lookup failed with status {status}")]
    Fetch { status: u16 },

    /// The registry did not answer within the request timeout.
    #[error("Metadata lookup timed out")]
    Timeout,

    /// The registry response body could not be parsed as a work record.
    #[error("Malformed metadata record: {0}")]
    Parse(String),

    /// The record describes a work of a different type than the style expects.
    #[error("The DOI does not correspond to a journal article: {actual}")]
    TypeMismatch { actual: String },

    /// A field required by the active style is absent or empty.
    #[error("Missing value for {field}")]
    MissingField { field: &'static str },

    /// The style identifier is not present in the style registry.
    #[error("Unsupported citation style \"{identifier}\"")]
    UnsupportedStyle { identifier: String },

    /// Transport-level failure that is neither a status code nor a timeout.
    #[error("Metadata lookup failed: {0}")]
    Http(reqwest::Error),

    /// The clipboard command could not be run or exited with an error.
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for CitationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CitationError::Timeout
        } else if err.is_decode() {
            CitationError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            CitationError::Fetch {
                status: status.as_u16(),
            }
        } else {
            CitationError::Http(err)
        }
    }
}
