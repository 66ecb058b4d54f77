//! Single-pass, line-oriented parser turning an appendix text into sections.
//!
//! Each line is classified in priority order: section heading, numbered point,
//! indented example, free text. Free text is buffered and only becomes the open
//! point's description when that point is flushed by the next point, the next
//! heading, or the end of input. Nothing here fails: lines that fit no pattern
//! are absorbed as text, or dropped when no point is open to receive them.

use crate::formats::Format;
use crate::section::{GrammarPoint, Section};
use crate::tags::derive_tags;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static NUMBERED_POINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\.\s+(.+)$").expect("point pattern is valid"));

/// Leading U+FEFF some exporters write; not whitespace to `str::trim`.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Clone, Debug, PartialEq, Eq)]
/// Irregularities noticed while parsing; reported, never fatal.
pub enum Diagnostic {
    /// The content anchor was missing so the whole input was parsed.
    ContentStartNotFound,
    /// A point numbered above the catch-all threshold appeared before any heading.
    LeadingPointPastCatchAll {
        /// Number as written.
        number: String,
        /// One-based line in the input.
        line: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContentStartNotFound => {
                write!(f, "content start not found, parsing from the first line")
            }
            Self::LeadingPointPastCatchAll { number, line } => write!(
                f,
                "point {number} on line {line} precedes every section heading"
            ),
        }
    }
}

#[derive(Debug, Default)]
/// Sections produced by a parse along with anything worth reporting.
pub struct ParseOutcome {
    /// Sections in document order.
    pub sections: Vec<Section>,
    /// Irregularities in the order they were met.
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Header(&'a str),
    Point { number: &'a str, title: &'a str },
    Example(&'a str),
    Text(&'a str),
    Blank,
}

fn is_indented(raw: &str) -> bool {
    if raw.starts_with('\t') {
        return true;
    }
    let mut chars = raw.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(a), Some(b)) if a.is_whitespace() && b.is_whitespace()
    )
}

fn classify<'a, F: Format + ?Sized>(format: &F, raw: &'a str, point_open: bool) -> LineKind<'a> {
    let trimmed = raw.trim();

    if format.is_section_header(trimmed) {
        return LineKind::Header(trimmed);
    }

    if let Some(caps) = NUMBERED_POINT.captures(trimmed) {
        if let (Some(number), Some(title)) = (caps.get(1), caps.get(2)) {
            return LineKind::Point {
                number: number.as_str(),
                title: title.as_str().trim(),
            };
        }
    }

    if trimmed.is_empty() {
        LineKind::Blank
    } else if point_open && is_indented(raw) {
        LineKind::Example(trimmed)
    } else {
        LineKind::Text(trimmed)
    }
}

/// Working state of one parse; consumed by [`Parser::finish`].
pub struct Parser<'f, F: Format + ?Sized> {
    format: &'f F,
    sections: Vec<Section>,
    current: Option<Section>,
    point: Option<GrammarPoint>,
    buffer: Vec<String>,
    diagnostics: Vec<Diagnostic>,
    line: usize,
}

impl<'f, F: Format + ?Sized> Parser<'f, F> {
    #[must_use]
    /// Starts an empty parse for documents following `format`.
    pub fn new(format: &'f F) -> Self {
        Self {
            format,
            sections: Vec::new(),
            current: None,
            point: None,
            buffer: Vec::new(),
            diagnostics: Vec::new(),
            line: 0,
        }
    }

    /// Sets the one-based number of the next line fed, for diagnostics.
    pub fn seek(&mut self, line: usize) {
        self.line = line.saturating_sub(1);
    }

    /// Classifies one untrimmed line and updates the working state.
    pub fn feed_line(&mut self, raw: &str) {
        self.line += 1;

        match classify(self.format, raw, self.point.is_some()) {
            LineKind::Header(title) => {
                self.flush_point();
                if let Some(section) = self.current.take() {
                    self.sections.push(section);
                }
                tracing::debug!(line = self.line, "opening section {title}");
                self.current = Some(Section::new(title));
            }
            LineKind::Point { number, title } => {
                self.flush_point();
                if self.current.is_none() {
                    self.open_catch_all(number);
                }
                self.point = Some(GrammarPoint::new(number, title));
            }
            LineKind::Example(text) => {
                if let Some(point) = self.point.as_mut() {
                    point.examples.push(text.to_string());
                }
            }
            LineKind::Text(text) => {
                if self.point.is_some() {
                    self.buffer.push(text.to_string());
                }
            }
            LineKind::Blank => {}
        }
    }

    fn open_catch_all(&mut self, number: &str) {
        let catch_all = self.format.catch_all();
        let within = number
            .parse::<u64>()
            .is_ok_and(|n| n <= catch_all.max_number);

        if !within {
            let diagnostic = Diagnostic::LeadingPointPastCatchAll {
                number: number.to_string(),
                line: self.line,
            };
            tracing::warn!("{diagnostic}");
            self.diagnostics.push(diagnostic);
        }

        tracing::debug!(line = self.line, "opening section {}", catch_all.title);
        self.current = Some(Section::new(catch_all.title));
    }

    /// Finalises the open point into the open section. No-op without an open point.
    fn flush_point(&mut self) {
        let Some(mut point) = self.point.take() else {
            self.buffer.clear();
            return;
        };

        point.description = self.buffer.join("\n").trim().to_string();
        self.buffer.clear();

        // A point is only opened once a section (or the catch-all) is current.
        if let Some(section) = self.current.as_mut() {
            point.tags = derive_tags(&section.title, self.format.tag_rules());
            section.points.push(point);
        }
    }

    #[must_use]
    /// Flushes any open point and section and returns the parsed document.
    pub fn finish(mut self) -> ParseOutcome {
        self.flush_point();
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
        ParseOutcome {
            sections: self.sections,
            diagnostics: self.diagnostics,
        }
    }
}

#[must_use]
/// Parses `text`, skipping any front matter before the format's content anchor.
pub fn parse_with_diagnostics<F: Format + ?Sized>(text: &str, format: &F) -> ParseOutcome {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();
    let mut parser = Parser::new(format);

    let start = if let Some(index) = lines.iter().position(|l| format.is_content_start(l)) {
        index
    } else {
        let diagnostic = Diagnostic::ContentStartNotFound;
        tracing::warn!("{diagnostic}");
        parser.diagnostics.push(diagnostic);
        0
    };

    parser.seek(start + 1);
    for raw in &lines[start..] {
        parser.feed_line(raw);
    }

    let outcome = parser.finish();
    tracing::info!(
        "parsed {} sections with {} points",
        outcome.sections.len(),
        outcome.sections.iter().map(|s| s.points.len()).sum::<usize>()
    );
    outcome
}

#[must_use]
/// Parses `text` into sections, discarding diagnostics.
pub fn parse_document<F: Format + ?Sized>(text: &str, format: &F) -> Vec<Section> {
    parse_with_diagnostics(text, format).sections
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;
