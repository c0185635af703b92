//! Static vocabulary used by the extractors and the label formatter.
//!
//! Everything here is immutable after first use. Sets are plain slices;
//! keyed lookups go through `LazyLock<HashMap>` built once per process.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const GRADERS: &[&str] = &["PSA", "BGS", "CGC", "SGC", "ACE", "AGS", "CSG"];

pub const LANGUAGES: &[&str] = &[
    "Japanese",
    "English",
    "Chinese",
    "Korean",
    "Thai",
    "Indonesian",
    "Spanish",
    "German",
    "French",
    "Italian",
    "Portuguese",
];

/// Lowercased spellings of the one game this marketplace lists.
pub const GAME_NAMES: &[&str] = &["pokemon", "pokémon"];

pub const FINISH_WORDS: &[&str] = &["Holo", "Reverse", "Non-Holo", "NonHolo", "Foil"];

const FINISH_LABELS: &[(&str, &str)] = &[
    ("Holo", "Holographic"),
    ("Non-Holo", "Non-Holo"),
    ("NonHolo", "Non-Holo"),
    ("Reverse", "Reverse Holo"),
    ("Foil", "Foil"),
];

const GAME_LABELS: &[(&str, &str)] = &[
    ("Pokemon", "Pokemon（宝可梦）"),
    ("Pokémon", "Pokémon（宝可梦）"),
];

const FINISH_ZH: &[(&str, &str)] = &[
    ("Holographic", "全息"),
    ("Reverse Holo", "反向闪"),
    ("Non-Holo", "非闪"),
    ("Foil", "闪"),
];

const GRADE_TEXT_ZH: &[(&str, &str)] = &[
    ("Gem Mint", "完美"),
    ("Mint", "近乎完美"),
    ("NM-MT", "很好（轻微瑕疵）"),
    ("Near Mint", "近全新"),
    ("Excellent-Mint", "明显使用痕迹"),
    ("Excellent", "明显旧卡"),
];

/// Promo set codes in match-priority order.
pub const PROMO_CODES: &[(&str, &str)] = &[
    ("DP-P", "钻石珍珠世代特典卡"),
    ("Pt-P", "白金世代特典卡"),
    ("L-P", "传说世代特典卡"),
    ("BW-P", "黑白世代特典卡"),
    ("XY-P", "XY 世代特典卡"),
    ("SM-P", "太阳月亮特典卡"),
    ("S-P", "剑盾特典卡"),
    ("SV-P", "朱紫特典卡"),
];

pub const PROMO_LITERAL: &str = "Promo";
pub const PROMO_ZH: &str = "特典卡";
pub const DEFAULT_LANGUAGE_LABEL: &str = "English（英文版）";
pub const PLACEHOLDER: &str = "-";

static FINISH_LABEL_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FINISH_LABELS.iter().copied().collect());
static GAME_LABEL_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| GAME_LABELS.iter().copied().collect());
static FINISH_ZH_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FINISH_ZH.iter().copied().collect());
static GRADE_TEXT_ZH_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| GRADE_TEXT_ZH.iter().copied().collect());
static PROMO_CODE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| PROMO_CODES.iter().copied().collect());

pub fn is_grader(token: &str) -> bool {
    GRADERS.contains(&token)
}

pub fn is_language(token: &str) -> bool {
    LANGUAGES.contains(&token)
}

pub fn is_game_name(token: &str) -> bool {
    let lower = token.to_lowercase();
    GAME_NAMES.contains(&lower.as_str())
}

pub fn is_finish_word(token: &str) -> bool {
    FINISH_WORDS.contains(&token)
}

/// Canonical label for an exact finish word; unknown words pass through.
pub fn finish_label(word: &str) -> &str {
    FINISH_LABEL_MAP.get(word).copied().unwrap_or(word)
}

/// Canonical label for a finish word in any letter case, if it is one.
pub fn finish_label_ignore_case(word: &str) -> Option<&'static str> {
    FINISH_LABELS
        .iter()
        .find(|(raw, _)| raw.eq_ignore_ascii_case(word))
        .map(|(_, label)| *label)
}

pub fn game_label(game: &str) -> Option<&'static str> {
    GAME_LABEL_MAP.get(game).copied()
}

pub fn finish_zh(finish: &str) -> Option<&'static str> {
    FINISH_ZH_MAP.get(finish).copied()
}

pub fn grade_text_zh(key: &str) -> Option<&'static str> {
    GRADE_TEXT_ZH_MAP.get(key).copied()
}

pub fn promo_zh(code: &str) -> Option<&'static str> {
    PROMO_CODE_MAP.get(code).copied()
}

/// Grade-text keys with their annotations, for listing.
pub fn grade_texts() -> &'static [(&'static str, &'static str)] {
    GRADE_TEXT_ZH
}

/// Finish words with their canonical labels, for listing.
pub fn finish_labels() -> &'static [(&'static str, &'static str)] {
    FINISH_LABELS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grader_vocabulary_is_case_sensitive() {
        assert!(is_grader("PSA"));
        assert!(is_grader("CSG"));
        assert!(!is_grader("psa"));
        assert!(!is_grader("Beckett"));
    }

    #[test]
    fn game_name_ignores_case_and_accent_form() {
        assert!(is_game_name("Pokemon"));
        assert!(is_game_name("POKEMON"));
        assert!(is_game_name("Pokémon"));
        assert!(!is_game_name("Pokemon:"));
    }

    #[test]
    fn every_finish_word_has_a_label() {
        for w in FINISH_WORDS {
            assert!(FINISH_LABEL_MAP.contains_key(w), "missing label for {}", w);
        }
        assert_eq!(finish_label("Holo"), "Holographic");
        assert_eq!(finish_label("NonHolo"), "Non-Holo");
        assert_eq!(finish_label("Shiny"), "Shiny");
    }

    #[test]
    fn finish_label_ignore_case_resolves_canonical() {
        assert_eq!(finish_label_ignore_case("non-holo"), Some("Non-Holo"));
        assert_eq!(finish_label_ignore_case("REVERSE"), Some("Reverse Holo"));
        assert_eq!(finish_label_ignore_case("Glossy"), None);
    }

    #[test]
    fn every_canonical_finish_is_annotated() {
        for (_, label) in FINISH_LABELS {
            assert!(finish_zh(label).is_some(), "no annotation for {}", label);
        }
    }

    #[test]
    fn promo_lookup() {
        assert_eq!(promo_zh("SV-P"), Some("朱紫特典卡"));
        assert_eq!(promo_zh("sv-p"), None);
    }
}
