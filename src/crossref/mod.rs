//! Blocking client for the Crossref works endpoint.
//!
//! One lookup is one outbound `GET https://api.crossref.org/works/{doi}`; no
//! retry and no caching across calls. The client sits behind the
//! [`MetadataSource`] trait so sessions can be tested without a network.

mod structure;

pub(crate) use structure::CrossrefResponse;
pub use structure::{RawAuthor, RawDate, RawWork};

use std::time::Duration;

use crate::error::{CitationError, fields};

const API_BASE: &str = "https://api.crossref.org/works";

/// Identify ourselves per Crossref API etiquette.
const USER_AGENT: &str = concat!("rtucite/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A source of raw work records keyed by DOI.
pub trait MetadataSource {
    /// Fetch the raw metadata record for a DOI.
    ///
    /// The DOI must be non-empty; no further DOI-syntax validation is
    /// performed here, resolution is delegated to the registry.
    ///
    /// # Errors
    ///
    /// [`CitationError::MissingField`] for an empty DOI,
    /// [`CitationError::Fetch`] for a non-success registry response,
    /// [`CitationError::Timeout`] when the registry does not answer in time,
    /// [`CitationError::Parse`] for a malformed response body.
    fn fetch(&self, doi: &str) -> Result<RawWork, CitationError>;
}

/// Blocking Crossref works client.
pub struct CrossrefClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl CrossrefClient {
    /// Create a client against the public Crossref API.
    pub fn new() -> Result<Self, CitationError> {
        Self::with_base_url(API_BASE.to_string())
    }

    /// Create a client against a custom works endpoint.
    pub fn with_base_url(base_url: String) -> Result<Self, CitationError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, doi: &str) -> String {
        format!("{}/{}", self.base_url, doi)
    }
}

impl MetadataSource for CrossrefClient {
    fn fetch(&self, doi: &str) -> Result<RawWork, CitationError> {
        let doi = doi.trim();
        if doi.is_empty() {
            return Err(CitationError::MissingField { field: fields::DOI });
        }

        let response = self.client.get(self.endpoint(doi)).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CitationError::Fetch {
                status: status.as_u16(),
            });
        }

        let body: CrossrefResponse = response
            .json()
            .map_err(|err| CitationError::Parse(err.to_string()))?;
        Ok(body.message)
    }
}
