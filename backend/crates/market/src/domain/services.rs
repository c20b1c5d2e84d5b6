//! Domain Services
//!
//! Pure functions turning marketplace price text into [`Price`] and back.

use crate::domain::value_objects::Price;

fn is_group_space(c: char) -> bool {
    matches!(c, ' ' | '\u{a0}' | '\u{202f}' | '\'')
}

fn is_price_char(c: char) -> bool {
    c.is_ascii_digit() || c == ',' || c == '.' || is_group_space(c)
}

/// Parse marketplace price text such as `"1 234,56 pуб."`, `"$1,234.56"`
/// or `"12,5€"`.
///
/// Takes the first run of digits and separators. Spaces are grouping. When
/// both `,` and `.` appear the last one is the decimal separator. A single
/// separator followed by exactly three digits is grouping, unless the integer
/// part is empty or `0`; otherwise it is decimal.
pub fn parse_price(text: &str) -> Option<Price> {
    let mut start = text.find(|c: char| c.is_ascii_digit())?;
    // Keep a separator right before the first digit, as in `"$.50"`
    if start > 0 && matches!(text.as_bytes()[start - 1], b',' | b'.') {
        start -= 1;
    }
    let run: String = text[start..]
        .chars()
        .take_while(|&c| is_price_char(c))
        .filter(|&c| !is_group_space(c))
        .collect();
    let run = run.trim_end_matches(|c: char| c == ',' || c == '.');

    let normalized = normalize_separators(run)?;
    let major: f64 = normalized.parse().ok()?;
    Price::from_major(major).ok()
}

fn normalize_separators(run: &str) -> Option<String> {
    let last_comma = run.rfind(',');
    let last_dot = run.rfind('.');

    let decimal_at = match (last_comma, last_dot) {
        (Some(c), Some(d)) => Some(c.max(d)),
        (Some(pos), None) | (None, Some(pos)) => {
            let sep = &run[pos..pos + 1];
            let single = run.matches(sep).count() == 1;
            let fraction_len = run.len() - pos - 1;
            let no_integer = matches!(&run[..pos], "" | "0");
            if single && (fraction_len != 3 || no_integer) {
                Some(pos)
            } else {
                None
            }
        }
        (None, None) => None,
    };

    let mut out = String::with_capacity(run.len() + 1);
    for (i, c) in run.char_indices() {
        match c {
            '0'..='9' => out.push(c),
            ',' | '.' if Some(i) == decimal_at => {
                if out.is_empty() {
                    out.push('0');
                }
                out.push('.');
            }
            ',' | '.' => {}
            _ => return None,
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

/// Render a price the way the price endpoint reports it, e.g. `"1234.56₽"`
pub fn format_price(price: Price, suffix: &str) -> String {
    format!("{}{}", price, suffix)
}
