//! Integer parsing for dictionary columns.
//!
//! Most columns hold plain decimal integers. Enum entry values are written
//! either in decimal or with a radix prefix (`0x1F`, `0o17`, `0b101`, or a
//! bare leading `0` for octal), so [`parse_auto`] detects the base from the
//! prefix.

/// Parse a decimal integer, allowing surrounding whitespace and a sign.
pub fn parse_decimal(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<i64>().ok()
}

/// Parse an integer, detecting the base from a `0x`, `0o` or `0b` prefix.
///
/// A leading `0` followed by more digits is octal, as with `strtol` in base
/// 0. Without a prefix the value is decimal.
pub fn parse_auto(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = split_radix(digits);
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    // Full-width hex values wrap to their two's complement bit pattern.
    let magnitude = u64::from_str_radix(digits, radix).ok()?;
    let value = magnitude as i64;
    Some(if negative { value.wrapping_neg() } else { value })
}

fn split_radix(digits: &str) -> (u32, &str) {
    match digits.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, &digits[2..]),
        [b'0', b'o' | b'O', ..] => (8, &digits[2..]),
        [b'0', b'b' | b'B', ..] => (2, &digits[2..]),
        [b'0', _, ..] => (8, &digits[1..]),
        _ => (10, digits),
    }
}
