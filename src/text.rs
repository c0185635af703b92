/// Collapse every whitespace run (spaces, tabs, newlines) to one space and trim.
pub fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace each run of periods with a single space, then trim. Inner spacing is kept.
pub fn collapse_periods(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_dot = false;
    for ch in s.chars() {
        if ch == '.' {
            if !prev_dot {
                out.push(' ');
            }
            prev_dot = true;
        } else {
            out.push(ch);
            prev_dot = false;
        }
    }
    out.trim().to_string()
}

/// Append a bilingual annotation in full-width parentheses: `value（note）`.
pub fn annotate(value: &str, note: &str) -> String {
    format!("{}（{}）", value, note)
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
