use std::sync::LazyLock;

use regex::Regex;

use crate::tables;

static GRADE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap());
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());
static MARKED_CARD_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9]+[A-Za-z0-9/-]*$").unwrap());
static BARE_CARD_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[A-Za-z0-9/-]*$").unwrap());
// Leftmost match wins, so "Non-Holo" is preferred over its "Holo" tail.
static FINISH_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)-?(Non-Holo|NonHolo|Holo|Reverse|Foil)\s*$").unwrap());

pub const CARD_NO_MARKER: char = '#';

pub fn is_grader(token: &str) -> bool {
    tables::is_grader(token)
}

/// Integer or decimal grade: `10`, `9.5`.
pub fn is_grade(token: &str) -> bool {
    GRADE_RE.is_match(token)
}

pub fn is_year(token: &str) -> bool {
    YEAR_RE.is_match(token)
}

pub fn is_game(token: &str) -> bool {
    tables::is_game_name(token)
}

pub fn is_language(token: &str) -> bool {
    tables::is_language(token)
}

pub fn is_finish(token: &str) -> bool {
    tables::is_finish_word(token)
}

/// `#` followed by digits and an optional alphanumeric, slash or dash tail: `#6`, `#025/165`.
pub fn is_marked_card_no(token: &str) -> bool {
    MARKED_CARD_NO_RE.is_match(token)
}

/// Digits followed by an optional alphanumeric, slash or dash tail: `4`, `101a`.
pub fn is_bare_card_no(token: &str) -> bool {
    BARE_CARD_NO_RE.is_match(token)
}

pub fn strip_card_no_marker(token: &str) -> &str {
    token.strip_prefix(CARD_NO_MARKER).unwrap_or(token)
}

/// A finish word at the very end of a card name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishSuffix {
    /// Byte offset where the suffix (including any leading hyphen) starts.
    pub start: usize,
    /// The finish word as written in the name.
    pub word: String,
    /// Canonical finish label for `word`.
    pub label: &'static str,
}

pub fn finish_suffix(name: &str) -> Option<FinishSuffix> {
    let caps = FINISH_SUFFIX_RE.captures(name)?;
    let whole = caps.get(0)?;
    let word = caps.get(1)?.as_str();
    let label = tables::finish_label_ignore_case(word)?;
    Some(FinishSuffix {
        start: whole.start(),
        word: word.to_string(),
        label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_accepts_integer_and_decimal_only() {
        for ok in ["10", "9", "9.5", "10.0"] {
            assert!(is_grade(ok), "{}", ok);
        }
        for bad in ["", "9.", ".5", "10/10", "A", "9.5.1", "Gem"] {
            assert!(!is_grade(bad), "{}", bad);
        }
    }

    #[test]
    fn year_is_exactly_four_ascii_digits() {
        assert!(is_year("1999"));
        assert!(!is_year("199"));
        assert!(!is_year("19999"));
        assert!(!is_year("１９９９"));
        assert!(!is_year("1999a"));
    }

    #[test]
    fn marked_card_numbers() {
        for ok in ["#6", "#025/165", "#4a", "#12-b"] {
            assert!(is_marked_card_no(ok), "{}", ok);
        }
        assert!(!is_marked_card_no("#"));
        assert!(!is_marked_card_no("6"));
        assert!(!is_marked_card_no("#A6"));
    }

    #[test]
    fn bare_card_numbers() {
        assert!(is_bare_card_no("4"));
        assert!(is_bare_card_no("025/165"));
        assert!(is_bare_card_no("101a"));
        assert!(!is_bare_card_no("#4"));
        assert!(!is_bare_card_no("SV-P"));
        assert!(!is_bare_card_no("4!"));
    }

    #[test]
    fn marker_stripping() {
        assert_eq!(strip_card_no_marker("#6"), "6");
        assert_eq!(strip_card_no_marker("6"), "6");
    }

    #[test]
    fn suffix_matches_whole_non_holo() {
        let s = finish_suffix("Pikachu Non-Holo").unwrap();
        assert_eq!(s.word, "Non-Holo");
        assert_eq!(s.label, "Non-Holo");
        assert_eq!(&"Pikachu Non-Holo"[..s.start], "Pikachu ");
    }

    #[test]
    fn suffix_takes_leading_hyphen_and_any_case() {
        let s = finish_suffix("Charizard-holo").unwrap();
        assert_eq!(s.start, "Charizard".len());
        assert_eq!(s.label, "Holographic");
    }

    #[test]
    fn no_suffix_when_word_is_not_last() {
        assert!(finish_suffix("Holo Charizard").is_none());
        assert!(finish_suffix("").is_none());
    }
}
