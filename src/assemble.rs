//! Citation assembly: field set + style template in, final string out.
//!
//! Pure and deterministic, no I/O. The assembler walks the style's slot table
//! and joins the rendered segments with single spaces. Field text passes
//! through verbatim, with no escaping, re-ordering, or truncation.

use std::borrow::Cow;

use itertools::Itertools;

use crate::CitationFields;
use crate::style::{Segment, StyleDescriptor};

/// Assemble the final citation string.
///
/// An absent optional field drops its entire slot, label text and separators
/// included, so no double separator remains. Callers must hand in a field set
/// produced by [`crate::normalize`] for the same style; required slots are
/// then guaranteed present.
pub fn assemble(style: &StyleDescriptor, fields: &CitationFields) -> String {
    let mut parts: Vec<Cow<'_, str>> = Vec::with_capacity(style.segments.len());
    for segment in style.segments {
        match segment {
            Segment::Text(text) => parts.push(Cow::Borrowed(*text)),
            Segment::Slot { field, prefix, suffix, .. } => {
                let Some(value) = fields.slot(field) else {
                    continue;
                };
                if prefix.is_empty() && suffix.is_empty() {
                    parts.push(value);
                } else {
                    parts.push(Cow::Owned(format!("{prefix}{value}{suffix}")));
                }
            }
        }
    }
    parts.iter().join(" ")
}
