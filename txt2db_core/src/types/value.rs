use std::cmp::Ordering;

/// Strips exactly one matching pair of surrounding quotes (`"..."` or `'...'`).
/// Anything else is returned unchanged.
pub fn normalize_value(token: &str) -> String {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' || first == b'\'') && first == last {
            return token[1..token.len() - 1].to_string();
        }
    }
    token.to_string()
}

/// Parses a cell or literal as a number. Empty strings and words such as
/// `inf` or `nan` are not numeric.
pub fn parse_number(token: &str) -> Option<f64> {
    let t = token.trim();
    if t.is_empty() {
        return None;
    }
    if t
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    t.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Compares two values numerically when both parse as numbers, otherwise
/// lexically.
pub fn compare_values(lhs: &str, rhs: &str) -> Ordering {
    match (parse_number(lhs), parse_number(rhs)) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => lhs.cmp(rhs),
    }
}

/// Equality with the same numeric-or-lexical dispatch as [`compare_values`].
/// `"20"` equals `"20.0"`, but `"CS"` only equals `"CS"`.
pub fn values_equal(lhs: &str, rhs: &str) -> bool {
    match (parse_number(lhs), parse_number(rhs)) {
        (Some(a), Some(b)) => a == b,
        _ => lhs == rhs,
    }
}
