// crates/popmap-core/src/text.rs
use crate::model::Population;
use deunicode::deunicode;

/// Fold a name for matching: transliterate to ASCII, lowercase, trim.
///
/// `"São Paulo"` and `"sao paulo "` fold to the same key.
pub fn fold_key(s: &str) -> String {
    deunicode(s).trim().to_ascii_lowercase()
}

/// Format a population with en-US thousands separators (`8000000` -> `"8,000,000"`).
pub fn group_thousands(n: Population) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Escape text for insertion into popup HTML.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
