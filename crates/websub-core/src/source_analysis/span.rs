// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source location tracking.
//!
//! The host front end attaches a `Span` to every service, method and listener
//! construction it hands to the checker. Diagnostics point back at these spans.

use serde::{Deserialize, Serialize};

/// A byte offset range into the host's source file.
///
/// # Examples
///
/// ```
/// use websub_core::source_analysis::Span;
///
/// let span = Span::new(4, 20);
/// assert_eq!(span.len(), 16);
/// assert_eq!(Span::new(20, 4), span);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawSpan")]
pub struct Span {
    start: u32,
    end: u32,
}

/// Wire form of a span; routed through [`Span::new`] so decoded spans are ordered.
#[derive(Deserialize)]
struct RawSpan {
    start: u32,
    end: u32,
}

impl From<RawSpan> for Span {
    fn from(raw: RawSpan) -> Self {
        Self::new(raw.start, raw.end)
    }
}

impl Span {
    /// Creates a span from start and end byte offsets.
    ///
    /// An inverted range is normalised so that `start <= end` always holds.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    #[must_use]
    pub const fn start(self) -> u32 {
        self.start
    }

    /// Exclusive end offset.
    #[must_use]
    pub const fn end(self) -> u32 {
        self.end
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Clamps the span to a source of `len` bytes.
    ///
    /// Host-supplied spans are not trusted to fit the source text the driver
    /// reads back for rendering.
    #[must_use]
    pub fn clamp_to(self, len: usize) -> Self {
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        Self::new(self.start.min(len), self.end.min(len))
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start as usize, span.len() as usize).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_is_normalised() {
        let span = Span::new(15, 5);
        assert_eq!(span.start(), 5);
        assert_eq!(span.end(), 15);
    }

    #[test]
    fn clamp_to_shorter_source() {
        let span = Span::new(8, 40).clamp_to(12);
        assert_eq!(span, Span::new(8, 12));

        let past_end = Span::new(30, 40).clamp_to(12);
        assert!(past_end.is_empty());
        assert_eq!(past_end.start(), 12);
    }

    #[test]
    fn converts_to_miette_span() {
        let source_span: miette::SourceSpan = Span::new(3, 9).into();
        assert_eq!(source_span.offset(), 3);
        assert_eq!(source_span.len(), 6);
    }

    #[test]
    fn deserializes_from_object() {
        let span: Span = serde_json::from_str(r#"{"start": 2, "end": 7}"#).unwrap();
        assert_eq!(span, Span::new(2, 7));

        let inverted: Span = serde_json::from_str(r#"{"start": 7, "end": 2}"#).unwrap();
        assert_eq!(inverted.len(), 5);
    }
}
