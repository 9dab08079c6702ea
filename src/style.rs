//! The RTU citation style registry.
//!
//! Styles are data, not code branches: each [`StyleDescriptor`] carries its
//! field-presence policy and an ordered slot table describing literal text and
//! slot placement. Adding a style means adding a table entry.
//!
//! Registered styles follow the RTU methodological guideline numbering:
//! `"7"` is a publication in a scientific journal, `"14"` is a dataset.

use crate::error::{CitationError, fields};

/// Which Crossref date field supplies the publication year.
///
/// Registries do not guarantee both are populated, so the choice is part of
/// the style configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearSource {
    /// The `published-print` date-parts.
    PublishedPrint,
    /// The `created` date-parts.
    Created,
}

/// Field-presence policy for the journal-article normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalConfig {
    pub volume_required: bool,
    pub pages_required: bool,
    pub year_source: YearSource,
}

impl JournalConfig {
    /// Volume and pages required, year from `published-print`.
    pub const STRICT: JournalConfig = JournalConfig {
        volume_required: true,
        pages_required: true,
        year_source: YearSource::PublishedPrint,
    };

    /// Volume and pages optional, year from `created`.
    ///
    /// Not registered under any style identifier yet; kept as data so a
    /// lenient journal entry is purely additive.
    pub const LENIENT: JournalConfig = JournalConfig {
        volume_required: false,
        pages_required: false,
        year_source: YearSource::Created,
    };
}

/// The family of a style: how its field set is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    /// Fields extracted from a fetched Crossref work record.
    Journal(JournalConfig),
    /// Fields entered directly by the user.
    Dataset,
}

/// One piece of a style template.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Segment {
    /// Literal text emitted unconditionally.
    Text(&'static str),
    /// A field slot. `prefix` and `suffix` are glued to the value without
    /// spaces; the whole slot vanishes when an optional field is absent.
    Slot {
        field: &'static str,
        prefix: &'static str,
        suffix: &'static str,
        required: bool,
    },
}

/// A registered citation style: identifier, presence policy, and template.
#[derive(Debug, Clone, Copy)]
pub struct StyleDescriptor {
    /// Style identifier in the RTU guideline numbering.
    pub id: &'static str,
    /// Human-readable style name, shown by the interactive prompt.
    pub name: &'static str,
    pub kind: StyleKind,
    pub(crate) segments: &'static [Segment],
}

impl StyleDescriptor {
    /// Field names of the required slots, in template order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Slot {
                field,
                required: true,
                ..
            } => Some(*field),
            _ => None,
        })
    }
}

/// Template for style "7":
/// `<authors> <title> . <journal> . <year>, vol. <volume>, [no. <issue>,]
/// pp. <pages>. ISSN <issn>. [e-ISSN <e-issn>.] Available from: <url>.`
const JOURNAL_SEGMENTS: &[Segment] = &[
    Segment::Slot {
        field: fields::AUTHORS,
        prefix: "",
        suffix: "",
        required: true,
    },
    Segment::Slot {
        field: fields::TITLE,
        prefix: "",
        suffix: "",
        required: true,
    },
    Segment::Text("."),
    Segment::Slot {
        field: fields::JOURNAL,
        prefix: "",
        suffix: "",
        required: true,
    },
    Segment::Text("."),
    Segment::Slot {
        field: fields::YEAR,
        prefix: "",
        suffix: ",",
        required: true,
    },
    Segment::Slot {
        field: fields::VOLUME,
        prefix: "vol. ",
        suffix: ",",
        required: true,
    },
    Segment::Slot {
        field: fields::ISSUE,
        prefix: "no. ",
        suffix: ",",
        required: false,
    },
    Segment::Slot {
        field: fields::PAGES,
        prefix: "pp. ",
        suffix: ".",
        required: true,
    },
    Segment::Slot {
        field: fields::ISSN,
        prefix: "ISSN ",
        suffix: ".",
        required: true,
    },
    Segment::Slot {
        field: fields::E_ISSN,
        prefix: "e-ISSN ",
        suffix: ".",
        required: false,
    },
    Segment::Slot {
        field: fields::URL,
        prefix: "Available from: ",
        suffix: ".",
        required: true,
    },
];

/// Template for style "14":
/// `<authors>. <title> [datu kopa]. <publisher>, <publication date>.
/// Pieejams: <url>`
const DATASET_SEGMENTS: &[Segment] = &[
    Segment::Slot {
        field: fields::AUTHORS,
        prefix: "",
        suffix: ".",
        required: true,
    },
    Segment::Slot {
        field: fields::TITLE,
        prefix: "",
        suffix: " [datu kopa].",
        required: true,
    },
    Segment::Slot {
        field: fields::PUBLISHER,
        prefix: "",
        suffix: ",",
        required: true,
    },
    Segment::Slot {
        field: fields::PUBLISHED,
        prefix: "",
        suffix: ".",
        required: true,
    },
    Segment::Slot {
        field: fields::URL,
        prefix: "Pieejams: ",
        suffix: "",
        required: true,
    },
];

/// All registered styles.
pub static STYLES: &[StyleDescriptor] = &[
    StyleDescriptor {
        id: "7",
        name: "Publication in a scientific journal",
        kind: StyleKind::Journal(JournalConfig::STRICT),
        segments: JOURNAL_SEGMENTS,
    },
    StyleDescriptor {
        id: "14",
        name: "Dataset",
        kind: StyleKind::Dataset,
        segments: DATASET_SEGMENTS,
    },
];

/// Look up a style descriptor by identifier.
///
/// Fails with [`CitationError::UnsupportedStyle`] before any fetch or
/// extraction is attempted, never mid-assembly.
pub fn lookup(identifier: &str) -> Result<&'static StyleDescriptor, CitationError> {
    STYLES
        .iter()
        .find(|style| style.id == identifier)
        .ok_or_else(|| CitationError::UnsupportedStyle {
            identifier: identifier.to_string(),
        })
}
