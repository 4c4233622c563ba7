use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::Cell;

/// Thousand separators tolerated inside numeric text: commas and spaces.
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\s]+").unwrap());

/// Coerce a cell to a number. Never fails: anything unparseable is 0.
///
/// Numeric cells pass through unchanged. Text is cleaned first (thousand
/// separators stripped, then one trailing `M` millions marker of either
/// case or `%` dropped) and parsed as a float. A missing cell, an empty
/// cell, or a non-finite parse all coerce to 0.
pub fn coerce(cell: Option<&Cell>) -> f64 {
    match cell {
        Some(Cell::Number(n)) if n.is_finite() => *n,
        Some(Cell::Text(s)) => parse_text(s),
        _ => 0.0,
    }
}

fn parse_text(raw: &str) -> f64 {
    let cleaned = SEPARATORS.replace_all(raw.trim(), "");
    let bare = cleaned
        .strip_suffix('M')
        .or_else(|| cleaned.strip_suffix('m'))
        .or_else(|| cleaned.strip_suffix('%'))
        .unwrap_or(&cleaned);

    match bare.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Round to 2 decimal places, the precision used for reported totals.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
