//! Bilingual display labels for a parsed title.
//!
//! Every formatter is total: a value missing from the tables is shown as
//! is, and an empty value becomes the placeholder.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::parser::ParsedTitle;
use crate::tables::{self, DEFAULT_LANGUAGE_LABEL, PLACEHOLDER, PROMO_LITERAL, PROMO_ZH};
use crate::text::{annotate, normalize_whitespace};

static DASH_SPACING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*-\s*").unwrap());
static PROMO_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alts = tables::PROMO_CODES
        .iter()
        .map(|(code, _)| regex::escape(code))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b({})\b", alts)).unwrap()
});

/// Display order with the panel label for each field.
pub const FIELD_LABELS: &[(&str, &str)] = &[
    ("grader", "评级机构"),
    ("grade", "等级"),
    ("gradeText", "等级描述"),
    ("year", "年份"),
    ("game", "IP"),
    ("language", "语言/地区"),
    ("series", "系列/类型"),
    ("cardNo", "卡号"),
    ("cardName", "卡名"),
    ("finish", "工艺/版本"),
];

/// Display-ready strings for every field. Never empty: unknowns are `-`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
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
}

impl DisplayRecord {
    /// `(label, value)` pairs in display order.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        let values = [
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
        ];
        FIELD_LABELS
            .iter()
            .zip(values)
            .map(|((_, label), value)| (*label, value.as_str()))
            .collect()
    }
}

pub fn localize(parsed: &ParsedTitle) -> DisplayRecord {
    DisplayRecord {
        grader: or_placeholder(&parsed.grader),
        grade: or_placeholder(&parsed.grade),
        grade_text: or_placeholder(&format_grade_text(&parsed.grade_text)),
        year: or_placeholder(&parsed.year),
        game: game_label(&parsed.game),
        language: language_label(&parsed.language),
        series: series_label(&parsed.series),
        card_no: or_placeholder(&parsed.card_no),
        card_name: or_placeholder(&parsed.card_name),
        finish: finish_label(&parsed.finish),
    }
}

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

/// Canonical lookup key: en/em dashes become `-`, spacing around dashes is dropped.
pub fn grade_text_key(text: &str) -> String {
    let dashed = text.replace(['\u{2013}', '\u{2014}'], "-");
    let spaced = normalize_whitespace(&dashed);
    DASH_SPACING_RE.replace_all(&spaced, "-").into_owned()
}

/// `Gem Mint` → `Gem Mint（完美）`; unknown qualifiers come back normalized.
pub fn format_grade_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let key = grade_text_key(text);
    match tables::grade_text_zh(&key) {
        Some(zh) => annotate(&key, zh),
        None => key,
    }
}

pub fn game_label(game: &str) -> String {
    match tables::game_label(game) {
        Some(label) => label.to_string(),
        None => or_placeholder(game),
    }
}

pub fn language_label(language: &str) -> String {
    if language.is_empty() {
        DEFAULT_LANGUAGE_LABEL.to_string()
    } else {
        language.to_string()
    }
}

pub fn series_label(series: &str) -> String {
    if series.is_empty() {
        return PLACEHOLDER.to_string();
    }
    if series.eq_ignore_ascii_case(PROMO_LITERAL) {
        return annotate(series, PROMO_ZH);
    }
    let promo = PROMO_CODE_RE
        .captures(series)
        .and_then(|caps| caps.get(1))
        .and_then(|m| tables::promo_zh(m.as_str()));
    match promo {
        Some(zh) => annotate(series, zh),
        None => series.to_string(),
    }
}

pub fn finish_label(finish: &str) -> String {
    if finish.is_empty() {
        return PLACEHOLDER.to_string();
    }
    match tables::finish_zh(finish) {
        Some(zh) => annotate(finish, zh),
        None => finish.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_title;

    #[test]
    fn grade_text_known_keys_carry_both_languages() {
        for (key, zh) in tables::grade_texts() {
            let out = format_grade_text(key);
            assert!(out.contains(key), "{}", out);
            assert!(out.contains(zh), "{}", out);
        }
    }

    #[test]
    fn grade_text_dash_variants_normalize() {
        assert_eq!(format_grade_text("NM – MT"), "NM-MT（很好（轻微瑕疵））");
        assert_eq!(format_grade_text("Excellent — Mint"), "Excellent-Mint（明显使用痕迹）");
        assert_eq!(format_grade_text("  Gem   Mint "), "Gem Mint（完美）");
    }

    #[test]
    fn grade_text_unknown_passes_through_normalized() {
        assert_eq!(format_grade_text("Pristine"), "Pristine");
        assert_eq!(format_grade_text("Very  Good - Fine"), "Very Good-Fine");
        assert_eq!(format_grade_text(""), "");
    }

    #[test]
    fn game_labels() {
        assert_eq!(game_label("Pokemon"), "Pokemon（宝可梦）");
        assert_eq!(game_label("Pokémon"), "Pokémon（宝可梦）");
        assert_eq!(game_label("POKEMON"), "POKEMON");
        assert_eq!(game_label(""), "-");
    }

    #[test]
    fn language_defaults_to_english() {
        assert_eq!(language_label(""), "English（英文版）");
        assert_eq!(language_label("Japanese"), "Japanese");
    }

    #[test]
    fn series_promo_literal_and_codes() {
        assert_eq!(series_label("Promo"), "Promo（特典卡）");
        assert_eq!(series_label("promo"), "promo（特典卡）");
        assert_eq!(series_label("SV-P"), "SV-P（朱紫特典卡）");
        assert_eq!(series_label("Japanese XY-P Promo"), "Japanese XY-P Promo（XY 世代特典卡）");
        assert_eq!(series_label("Base Set"), "Base Set");
        assert_eq!(series_label("XSV-PX"), "XSV-PX");
        assert_eq!(series_label(""), "-");
    }

    #[test]
    fn finish_annotated_only_on_exact_label() {
        assert_eq!(finish_label("Holographic"), "Holographic（全息）");
        assert_eq!(finish_label("Reverse Holo"), "Reverse Holo（反向闪）");
        assert_eq!(finish_label("Reverse Holo Foil"), "Reverse Holo Foil");
        assert_eq!(finish_label(""), "-");
    }

    #[test]
    fn localize_full_record() {
        let d = localize(&parse_title(
            "PSA 10 Gem Mint 1999 Pokemon Japanese Base Set #6 Charizard Holo",
        ));
        assert_eq!(d.grader, "PSA");
        assert_eq!(d.grade_text, "Gem Mint（完美）");
        assert_eq!(d.game, "Pokemon（宝可梦）");
        assert_eq!(d.language, "Japanese");
        assert_eq!(d.series, "Base Set");
        assert_eq!(d.finish, "Holographic（全息）");
    }

    #[test]
    fn localize_empty_record_is_placeholders() {
        let d = localize(&parse_title(""));
        for (label, value) in d.rows() {
            if label == "语言/地区" {
                assert_eq!(value, "English（英文版）");
            } else {
                assert_eq!(value, "-", "{}", label);
            }
        }
    }

    #[test]
    fn rows_follow_display_order() {
        let d = localize(&parse_title("2002 Pokemon English Base Set 2 4 Charizard Holo"));
        let rows = d.rows();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], ("评级机构", "-"));
        assert_eq!(rows[3], ("年份", "2002"));
        assert_eq!(rows[7], ("卡号", "2"));
    }
}
