//! Section and grammar point representation for parsed appendix documents.
//!
//! A section corresponds to one heading of the source document and owns the
//! numbered grammar points that follow it. Both types serialise to the JSON
//! artifact the viewer loads, so field names here are part of that contract.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Titled group of grammar points, identified by its title.
pub struct Section {
    /// Heading text exactly as it appeared (trimmed) in the source.
    pub title: String,
    /// Grammar points in document order.
    #[serde(default)]
    pub points: Vec<GrammarPoint>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One numbered entry with its explanatory text, examples and filter tags.
pub struct GrammarPoint {
    /// Digits as written in the source; not necessarily contiguous.
    pub number: String,
    /// Text following the number on the point's opening line.
    pub title: String,
    /// Free text lines joined with newlines, possibly empty.
    #[serde(default)]
    pub description: String,
    /// Indented usage examples, trimmed.
    #[serde(default)]
    pub examples: Vec<String>,
    /// Classification labels derived from the owning section's title.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Section {
    #[must_use]
    /// Opens an empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            points: Vec::new(),
        }
    }
}

impl GrammarPoint {
    #[must_use]
    /// Starts a point with no description, examples or tags yet.
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            description: String::new(),
            examples: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    /// Whether the point carries `tag` among its labels.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
