//! Interactive citation session.
//!
//! The "prompt, act, ask to continue" loop is an explicit state machine.
//! Every side-effecting collaborator (prompt input, console output, clipboard,
//! metadata lookup) is injected behind a trait, so a whole session runs under
//! test with scripted input and recording sinks.
//!
//! Console display and clipboard write happen only as a pair, after a
//! successful assembly; a failed request displays the error and re-prompts.
//! No failure ends the session; only the continuation prompt does.

use crate::assemble::assemble;
use crate::clipboard::ClipboardSink;
use crate::crossref::{MetadataSource, RawWork};
use crate::error::CitationError;
use crate::normalize::{DatasetInput, normalize_dataset, normalize_journal};
use crate::style::{StyleDescriptor, StyleKind, lookup};
use crate::CitationFields;

/// A source of user input lines.
pub trait PromptSource {
    /// Show `label` and read one line of input.
    fn read_line(&mut self, label: &str) -> Result<String, CitationError>;
}

/// A sink for user-visible output.
pub trait ConsoleSink {
    /// Show an assembled citation.
    fn show(&mut self, citation: &str);
    /// Show a failure.
    fn show_error(&mut self, err: &CitationError);
}

/// States of the citation session.
///
/// Transitions are driven by user continuation input and operation outcomes;
/// `Done` is terminal. Operation failures route back through [`Prompting`]
/// (after the continuation prompt), never out of the session.
///
/// [`Prompting`]: SessionState::Prompting
#[derive(Debug)]
pub enum SessionState {
    /// Waiting for a style identifier and its input (DOI or dataset fields).
    Prompting,
    /// One metadata lookup in flight for a journal citation.
    Fetching {
        style: &'static StyleDescriptor,
        doi: String,
    },
    /// Validating and extracting the style's field set.
    Normalizing {
        style: &'static StyleDescriptor,
        source: SourceRecord,
    },
    /// Rendering the field set through the style template.
    Assembling {
        style: &'static StyleDescriptor,
        fields: CitationFields,
    },
    /// Showing the citation and writing it to the clipboard, as a pair.
    Displaying { citation: String },
    Done,
}

/// Where a field set comes from: a fetched record or direct input.
#[derive(Debug)]
pub enum SourceRecord {
    Fetched(RawWork),
    Direct(DatasetInput),
}

/// An interactive session over injected collaborators.
pub struct Session<M, P, C, K> {
    source: M,
    prompt: P,
    console: C,
    clipboard: K,
}

impl<M, P, C, K> Session<M, P, C, K>
where
    M: MetadataSource,
    P: PromptSource,
    C: ConsoleSink,
    K: ClipboardSink,
{
    pub fn new(source: M, prompt: P, console: C, clipboard: K) -> Self {
        Self {
            source,
            prompt,
            console,
            clipboard,
        }
    }

    /// Run the session to completion.
    ///
    /// Returns `Ok(())` when the user declines to continue. Only prompt I/O
    /// failures propagate; citation failures are displayed and the session
    /// re-prompts.
    pub fn run(mut self) -> Result<(), CitationError> {
        let mut state = SessionState::Prompting;
        loop {
            state = match state {
                SessionState::Prompting => self.prompting()?,
                SessionState::Fetching { style, doi } => match self.source.fetch(&doi) {
                    Ok(work) => SessionState::Normalizing {
                        style,
                        source: SourceRecord::Fetched(work),
                    },
                    Err(err) => self.report(err)?,
                },
                SessionState::Normalizing { style, source } => {
                    match normalize_record(style, source) {
                        Ok(fields) => SessionState::Assembling { style, fields },
                        Err(err) => self.report(err)?,
                    }
                }
                SessionState::Assembling { style, fields } => SessionState::Displaying {
                    citation: assemble(style, &fields),
                },
                SessionState::Displaying { citation } => {
                    self.console.show(&citation);
                    match self.clipboard.copy(&citation) {
                        Ok(()) => self.ask_continue()?,
                        Err(err) => self.report(err)?,
                    }
                }
                SessionState::Done => return Ok(()),
            };
        }
    }

    /// Read the style identifier and its input, yielding the next state.
    fn prompting(&mut self) -> Result<SessionState, CitationError> {
        let identifier = self
            .prompt
            .read_line("Style (7 = journal article, 14 = dataset): ")?;
        let style = match lookup(identifier.trim()) {
            Ok(style) => style,
            Err(err) => return self.report(err),
        };

        match style.kind {
            StyleKind::Journal(_) => {
                let doi = self.prompt.read_line("Enter DOI: ")?;
                Ok(SessionState::Fetching { style, doi })
            }
            StyleKind::Dataset => {
                let input = DatasetInput {
                    authors: self.prompt.read_line("Authors: ")?,
                    title: self.prompt.read_line("Title: ")?,
                    publisher: self.prompt.read_line("Publisher: ")?,
                    published: self.prompt.read_line("Publication date: ")?,
                    url: self.prompt.read_line("URL: ")?,
                };
                Ok(SessionState::Normalizing {
                    style,
                    source: SourceRecord::Direct(input),
                })
            }
        }
    }

    /// Display a failure, then ask whether to continue.
    fn report(&mut self, err: CitationError) -> Result<SessionState, CitationError> {
        self.console.show_error(&err);
        self.ask_continue()
    }

    /// The continuation prompt: `n` or `N` ends the session, anything else
    /// starts over.
    fn ask_continue(&mut self) -> Result<SessionState, CitationError> {
        let answer = self.prompt.read_line("Continue? y/n  ")?;
        if answer.trim().eq_ignore_ascii_case("n") {
            Ok(SessionState::Done)
        } else {
            Ok(SessionState::Prompting)
        }
    }
}

fn normalize_record(
    style: &StyleDescriptor,
    source: SourceRecord,
) -> Result<CitationFields, CitationError> {
    match (&style.kind, source) {
        (StyleKind::Journal(config), SourceRecord::Fetched(work)) => {
            normalize_journal(work, config)
        }
        (StyleKind::Dataset, SourceRecord::Direct(input)) => normalize_dataset(input),
        // A journal style never carries direct input and a dataset style
        // never fetches; the prompting step pairs them.
        (StyleKind::Journal(_), SourceRecord::Direct(_))
        | (StyleKind::Dataset, SourceRecord::Fetched(_)) => Err(CitationError::Parse(
            "style and source record do not match".to_string(),
        )),
    }
}
