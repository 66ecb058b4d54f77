//! Optional strictness pass over parsed sections.
//!
//! The parser is best-effort, so callers wanting guarantees run [`validate`]
//! afterwards. Issues are reported, never raised: the conversion always
//! produces an artifact and the caller decides whether the report is fatal.

use crate::formats::Format;
use crate::section::Section;
use std::collections::HashSet;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Structural problem found in a parsed document.
pub enum Issue {
    /// A section holds no points.
    EmptySection {
        /// Section title.
        section: String,
    },
    /// A point has a blank title.
    EmptyPointTitle {
        /// Owning section.
        section: String,
        /// Point number.
        number: String,
    },
    /// The same point number occurs twice within one section.
    DuplicatePointNumber {
        /// Owning section.
        section: String,
        /// Repeated number.
        number: String,
    },
    /// Two sections share a title.
    DuplicateSection {
        /// Repeated title.
        section: String,
    },
    /// A known heading never appeared in the document.
    MissingSection {
        /// Expected title.
        section: String,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySection { section } => write!(f, "section '{section}' has no points"),
            Self::EmptyPointTitle { section, number } => {
                write!(f, "point {number} in '{section}' has an empty title")
            }
            Self::DuplicatePointNumber { section, number } => {
                write!(f, "point {number} appears more than once in '{section}'")
            }
            Self::DuplicateSection { section } => {
                write!(f, "section '{section}' appears more than once")
            }
            Self::MissingSection { section } => write!(f, "section '{section}' never appeared"),
        }
    }
}

#[must_use]
/// Checks `sections` against the structural expectations of `format`.
pub fn validate<F: Format + ?Sized>(sections: &[Section], format: &F) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut titles = HashSet::new();

    for section in sections {
        if !titles.insert(section.title.as_str()) {
            issues.push(Issue::DuplicateSection {
                section: section.title.clone(),
            });
        }

        if section.points.is_empty() {
            issues.push(Issue::EmptySection {
                section: section.title.clone(),
            });
        }

        let mut numbers = HashSet::new();
        for point in &section.points {
            if point.title.trim().is_empty() {
                issues.push(Issue::EmptyPointTitle {
                    section: section.title.clone(),
                    number: point.number.clone(),
                });
            }
            if !numbers.insert(point.number.as_str()) {
                issues.push(Issue::DuplicatePointNumber {
                    section: section.title.clone(),
                    number: point.number.clone(),
                });
            }
        }
    }

    issues.extend(
        format
            .section_headers()
            .iter()
            .filter(|header| !titles.contains(**header))
            .map(|header| Issue::MissingSection {
                section: (*header).to_string(),
            }),
    );

    for issue in &issues {
        tracing::warn!("{issue}");
    }
    issues
}

#[cfg(test)]
#[path = "tests/validate.rs"]
mod tests;
