//! String helpers. Optional trailing arguments take `Option<&str>` and fall
//! back to the defaults below.

use itertools::Itertools;

pub const DEFAULT_DELIMITER: &str = ",";
pub const DEFAULT_PAD: &str = " ";
pub const DEFAULT_DASH: &str = "-";

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Immediate if for strings.
pub fn iif_string<'a>(cond: bool, when_true: &'a str, when_false: &'a str) -> &'a str {
    if cond {
        when_true
    } else {
        when_false
    }
}

/// `join(&["A", "B", "C"], None)` → `"A,B,C"`; `join(.., Some("|"))` → `"A|B|C"`.
pub fn join<S: AsRef<str>>(items: &[S], delimiter: Option<&str>) -> String {
    items
        .iter()
        .map(|s| -> &str { s.as_ref() })
        .join(delimiter.unwrap_or(DEFAULT_DELIMITER))
}

/// Up to `len` characters of `s` starting at character `pos`.
pub fn substr(s: &str, pos: usize, len: usize) -> String {
    s.chars().skip(pos).take(len).collect()
}

fn pad_count(s: &str, pad_len: usize) -> usize {
    pad_len.saturating_sub(s.chars().count())
}

/// Appends the pad string once per missing character up to `pad_len`.
pub fn pad_right(s: &str, pad_len: usize, pad: Option<&str>) -> String {
    let pad = pad.unwrap_or(DEFAULT_PAD);
    format!("{s}{}", pad.repeat(pad_count(s, pad_len)))
}

/// Prepends the pad string once per missing character up to `pad_len`.
pub fn pad_left(s: &str, pad_len: usize, pad: Option<&str>) -> String {
    let pad = pad.unwrap_or(DEFAULT_PAD);
    format!("{}{s}", pad.repeat(pad_count(s, pad_len)))
}

/// A row of `count` dash strings, for plain-text underlines.
pub fn dashes(count: usize, dash: Option<&str>) -> String {
    dash.unwrap_or(DEFAULT_DASH).repeat(count)
}

/// True when `s` is non-empty and made only of `a..=z`.
pub fn is_lower(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase())
}

/// Byte offset of `search` in `target` at or after byte `start`. A `start`
/// inside a multi-byte character moves forward to the next character.
///
/// ```
/// use value_helpers::text::index_of;
/// let email = "ann@example.com";
/// let at = index_of("@", email, 0).unwrap();
/// assert_eq!(&email[at + 1..], "example.com");
/// ```
pub fn index_of(search: &str, target: &str, start: i64) -> Option<usize> {
    let mut start = usize::try_from(start).unwrap_or(0);
    if start > target.len() || target.is_empty() || search.is_empty() {
        return None;
    }
    while !target.is_char_boundary(start) {
        start += 1;
    }
    target
        .get(start..)
        .and_then(|tail| tail.find(search))
        .map(|found| found + start)
}

/// First index below `len` for which `pred` holds.
pub fn index_of_generic<F: FnMut(usize) -> bool>(len: usize, mut pred: F) -> Option<usize> {
    (0..len).find(|&i| pred(i))
}

/// `(letter, code point)` pairs for `A..=Z` followed by `a..=z`.
pub fn alphabet() -> Vec<(char, u32)> {
    ALPHABET.chars().map(|c| (c, c as u32)).collect()
}
