//! grammar-appendix: parse a Latin grammar appendix into tagged sections and browse them.
//!
//! The [`parser`] turns a flat text document into [`section::Section`]s of numbered
//! [`section::GrammarPoint`]s, tagged through the table a [`formats::Format`] supplies.
//! [`input`] writes and loads the JSON artifact, [`view`] holds the filtering queries a
//! viewer runs over it, and [`app_state`] with [`ui`] make up the terminal viewer.

pub mod app_state;
pub mod config;
pub mod error;
pub mod formats;
pub mod input;
pub mod parser;
pub mod section;
pub mod tags;
pub mod ui;
pub mod validate;
pub mod view;

pub use error::{Error, Result};
pub use parser::{parse_document, parse_with_diagnostics};
pub use section::{GrammarPoint, Section};
