// File: crates/indicator-core/src/numeric.rs
// Summary: Lenient numeric coercion for cells, year keys and selection input.
// Notes:
// - Both parsers read the longest leading literal and ignore what follows, so
//   footnoted cells such as "12.5*" still chart as 12.5.

/// Parse the leading decimal literal of `s` (after whitespace).
/// Returns `None` for empty cells, absence markers and text.
pub fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let bytes = s.as_bytes();
    let mut i = 0usize;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        let inf = if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY };
        return Some(inf);
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() { i += 1; }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() { j += 1; }
        digits += j - frac_start;
        i = j;
    }
    if digits == 0 {
        return None;
    }

    // exponent only counts when it has digits of its own
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') { j += 1; }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() { j += 1; }
        if j > exp_start { i = j; }
    }

    let literal = s[..i].trim_end_matches('.');
    literal.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Parse the leading base-10 integer of `s` (after whitespace), with an
/// optional sign. Returns `None` when no digit follows, or on overflow.
pub fn leading_int(s: &str) -> Option<i64> {
    int_literal(s)?.parse::<i64>().ok()
}

/// Like `leading_int`, but a literal too large for `i64` clamps to
/// `i64::MAX` / `i64::MIN` instead of failing.
pub fn leading_int_saturating(s: &str) -> Option<i64> {
    let literal = int_literal(s)?;
    Some(literal.parse::<i64>().unwrap_or(if literal.starts_with('-') { i64::MIN } else { i64::MAX }))
}

fn int_literal(s: &str) -> Option<&str> {
    let s = s.trim();
    let bytes = s.as_bytes();
    let mut i = 0usize;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() { i += 1; }
    if i == digits_start {
        return None;
    }
    Some(&s[..i])
}
