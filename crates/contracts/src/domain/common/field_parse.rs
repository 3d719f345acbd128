//! Lenient parsing of numeric form input. Bad input becomes zero.

/// Decimal field (price, rating)
pub fn parse_number_or_zero(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Integer count: leading digit run, like `"12abc"` -> 12.
/// Negative or missing digits give 0; overflow saturates.
pub fn parse_count_or_zero(raw: &str) -> u32 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() || negative {
        return 0;
    }

    digits.parse::<u32>().unwrap_or(u32::MAX)
}
