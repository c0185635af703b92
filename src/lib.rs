//! Structured fields from loosely formatted trading-card listing titles.
//!
//! `raw title → normalize → extractors → ParsedTitle → localize → DisplayRecord`

pub mod batch;
pub mod error;
pub mod localize;
pub mod parser;
pub mod settings;
pub mod tables;
pub mod text;

pub use error::{Error, Result};
pub use localize::{localize, DisplayRecord};
pub use parser::{parse_title, ParsedTitle};
pub use text::normalize_whitespace;
