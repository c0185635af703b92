pub mod extract;
pub mod matchers;
pub mod pool;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::text::normalize_whitespace;
use pool::TokenPool;

/// Fields recovered from one card title. Absent values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTitle {
    pub grader: String,
    pub grade: String,
    pub grade_text: String,
    pub year: String,
    pub game: String,
    pub language: String,
    pub series: String,
    pub card_no: String,
    pub card_name: String,
    pub finish: String,
    pub raw: String,
}

impl ParsedTitle {
    pub fn with_raw(raw: &str) -> Self {
        ParsedTitle {
            raw: raw.to_string(),
            ..Default::default()
        }
    }

    /// True when nothing but `raw` was recovered ("no confident parse").
    pub fn is_empty(&self) -> bool {
        [
            &self.grader,
            &self.grade,
            &self.grade_text,
            &self.year,
            &self.game,
            &self.language,
            &self.series,
            &self.card_no,
            &self.card_name,
            &self.finish,
        ]
        .iter()
        .all(|f| f.is_empty())
    }
}

/// Normalize `title` and run every extractor over it in order.
///
/// Total over all inputs: an unparseable title yields a record whose only
/// non-empty field is `raw`.
pub fn parse_title(title: &str) -> ParsedTitle {
    let normalized = normalize_whitespace(title);
    let mut out = ParsedTitle::with_raw(&normalized);
    let mut pool = TokenPool::new(&normalized);

    for (name, step) in extract::PIPELINE {
        if pool.unclaimed_count() == 0 {
            break;
        }
        step(&mut pool, &mut out);
        trace!(step = name, left = pool.unclaimed_count(), "extractor done");
    }
    out
}
