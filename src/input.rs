//! Reading source documents and the parsed artifact, and writing the artifact.
//!
//! The artifact is the pretty-printed JSON array of sections. Loading it
//! distinguishes a failed read from an empty document so a viewer can show a
//! different message for each.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::parser::{parse_with_diagnostics, ParseOutcome, BYTE_ORDER_MARK};
use crate::section::Section;
use std::fs;
use std::path::Path;

/// File name the artifact is written to unless configured otherwise.
pub const DEFAULT_ARTIFACT: &str = "grammar_appendix.json";

/// Reads a whole source document, replacing invalid UTF-8 and dropping a
/// leading byte-order mark.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text
        .strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(&text)
        .to_string())
}

/// Reads and parses a source document in one step.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn extract_sections<F: Format + ?Sized>(path: &Path, format: &F) -> Result<ParseOutcome> {
    let text = read_source(path)?;
    tracing::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(parse_with_diagnostics(&text, format))
}

/// Serialises sections as indented JSON to `path`.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn write_appendix(sections: &[Section], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(sections).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote {} sections to {}", sections.len(), path.display());
    Ok(())
}

/// Reads sections back from an artifact.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a section array.
pub fn read_appendix(path: &Path) -> Result<Vec<Section>> {
    let json = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug)]
/// Result of loading an artifact for display.
pub enum Load {
    /// Sections ready to browse.
    Ready(Vec<Section>),
    /// The artifact holds no sections.
    Empty,
    /// The artifact could not be read or decoded.
    Failed(String),
}

#[must_use]
/// Loads an artifact, folding failures into a displayable state.
pub fn load_appendix(path: &Path) -> Load {
    match read_appendix(path) {
        Ok(sections) if sections.is_empty() => Load::Empty,
        Ok(sections) => Load::Ready(sections),
        Err(e) => {
            tracing::error!("{e}");
            Load::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
