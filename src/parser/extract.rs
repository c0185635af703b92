//! Ordered field extractors.
//!
//! Each step reads only unclaimed tokens, claims the ones it assigns and
//! writes its field(s). A step that finds nothing leaves the pool alone.
//! Closed-vocabulary and exact-shape steps run before the loose card-number
//! guess so it cannot steal a year, a language or a finish word.

use tracing::{debug, trace};

use super::matchers;
use super::pool::TokenPool;
use super::ParsedTitle;
use crate::tables;
use crate::text::collapse_periods;

/// One pipeline step, in run order.
pub type Extractor = fn(&mut TokenPool<'_>, &mut ParsedTitle);

pub const PIPELINE: &[(&str, Extractor)] = &[
    ("grading_prefix", grading_prefix),
    ("year", year),
    ("game", game),
    ("language", language),
    ("finish", finish),
    ("card_number", card_number),
];

/// `PSA 10 Gem Mint 1999 ...`: grader and grade at the front, optionally
/// followed by a qualifier that runs up to the first year.
pub fn grading_prefix(pool: &mut TokenPool<'_>, out: &mut ParsedTitle) {
    let (Some(grader), Some(grade)) = (pool.get(0), pool.get(1)) else {
        return;
    };
    if !matchers::is_grader(grader) || !matchers::is_grade(grade) {
        return;
    }
    pool.claim(0);
    pool.claim(1);
    out.grader = grader.to_string();
    out.grade = grade.to_string();
    debug!(grader, grade, "claimed grading prefix");

    let Some(year_idx) = pool.position_from(2, matchers::is_year) else {
        trace!("no year after grade; qualifier left in pool");
        return;
    };
    let mut taken = pool.claim_through(2, year_idx);
    let year = taken.pop().unwrap_or_default();
    out.grade_text = taken.join(" ");
    out.year = year.to_string();
    debug!(grade_text = %out.grade_text, year, "claimed grade qualifier and year");
}

pub fn year(pool: &mut TokenPool<'_>, out: &mut ParsedTitle) {
    if !out.year.is_empty() {
        return;
    }
    if let Some(tok) = pool.take_first_matching(matchers::is_year) {
        out.year = tok.to_string();
        debug!(year = tok, "claimed year");
    }
}

pub fn game(pool: &mut TokenPool<'_>, out: &mut ParsedTitle) {
    if let Some(tok) = pool.take_first_matching(matchers::is_game) {
        out.game = tok.to_string();
        debug!(game = tok, "claimed game");
    }
}

pub fn language(pool: &mut TokenPool<'_>, out: &mut ParsedTitle) {
    if let Some(tok) = pool.take_first_matching(matchers::is_language) {
        out.language = tok.to_string();
        debug!(language = tok, "claimed language");
    }
}

/// Every standalone finish word, mapped to its canonical label.
pub fn finish(pool: &mut TokenPool<'_>, out: &mut ParsedTitle) {
    let hits = pool.take_all_matching(matchers::is_finish);
    if hits.is_empty() {
        return;
    }
    out.finish = hits
        .iter()
        .map(|w| tables::finish_label(w))
        .collect::<Vec<_>>()
        .join(" ");
    debug!(words = ?hits, finish = %out.finish, "claimed finish words");
}

/// Split what is left around the card number: series before, name after.
pub fn card_number(pool: &mut TokenPool<'_>, out: &mut ParsedTitle) {
    let remaining: Vec<&str> = pool.unclaimed().map(|(_, tok)| tok).collect();
    let split = remaining
        .iter()
        .position(|t| matchers::is_marked_card_no(t))
        .or_else(|| remaining.iter().position(|t| matchers::is_bare_card_no(t)));

    match split {
        Some(i) => {
            out.series = remaining[..i].join(" ");
            out.card_no = matchers::strip_card_no_marker(remaining[i]).to_string();
            out.card_name = collapse_periods(&remaining[i + 1..].join(" "));
            debug!(series = %out.series, card_no = %out.card_no, card_name = %out.card_name, "split on card number");
            strip_finish_suffix(out);
        }
        None => {
            // No number to anchor on: the last two tokens are taken as the name.
            let cut = remaining.len().saturating_sub(2);
            out.series = remaining[..cut].join(" ");
            out.card_name = remaining[cut..].join(" ");
            debug!(series = %out.series, card_name = %out.card_name, "no card number; tail split");
        }
    }
    pool.drain_unclaimed();
}

/// `Pikachu Non-Holo` → name `Pikachu`; the label only fills an empty finish.
fn strip_finish_suffix(out: &mut ParsedTitle) {
    let Some(suffix) = matchers::finish_suffix(&out.card_name) else {
        return;
    };
    out.card_name = out.card_name[..suffix.start].trim().to_string();
    if out.finish.is_empty() {
        out.finish = suffix.label.to_string();
    }
    debug!(word = %suffix.word, finish = %out.finish, "stripped finish suffix from name");
}
