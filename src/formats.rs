//! Format trait and implementations for different appendix documents.
//!
//! This module defines the `Format` trait which abstracts over the conventions of a
//! particular source document (which lines are section headings, where the content
//! starts, how sections map to filter tags) so the parser itself stays generic.

pub mod latin;

use crate::tags::TagRule;

/// Synthetic section that absorbs numbered points appearing before any heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatchAll {
    /// Reserved section title.
    pub title: &'static str,
    /// Highest point number expected to precede the first heading.
    pub max_number: u64,
}

/// Document conventions consulted by the parser, validator and viewer.
pub trait Format {
    /// Closed set of trimmed lines that open a new section, in document order.
    fn section_headers(&self) -> &[&'static str];

    /// Whether an untrimmed line marks the start of the grammar content.
    fn is_content_start(&self, line: &str) -> bool;

    /// Section receiving points that precede every heading.
    fn catch_all(&self) -> CatchAll;

    /// Ordered classification table mapping section titles to tags.
    fn tag_rules(&self) -> &[TagRule];

    /// Coarse categories in display order.
    fn categories(&self) -> &[&'static str];

    /// Whether the trimmed line is one of the known section headings.
    fn is_section_header(&self, trimmed: &str) -> bool {
        self.section_headers().iter().any(|h| *h == trimmed)
    }
}
