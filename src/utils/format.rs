//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Default ellipsis appended by [`omit_string`]
pub const ELLIPSIS: &str = "...";

/// Maximum characters shown for a hex-encoded byte field (after the `0x`)
pub const HEX_DISPLAY_LEN: usize = 64;

/// Format time with milliseconds
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

/// Lowercase, two digits per byte, no prefix
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Shorten `text` to exactly `len` characters when it is at least `len` long,
/// replacing the tail with `ellipsis`.
///
/// Shorter text is returned unchanged. Lengths are counted in characters.
pub fn omit_string(text: &str, len: usize, ellipsis: &str) -> String {
    let char_count = text.chars().count();
    if char_count < len {
        return text.to_string();
    }
    let keep = len.saturating_sub(ellipsis.chars().count());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ellipsis);
    out
}

/// `0x`-prefixed hex of a byte field, truncated for table cells
pub fn display_bytes(bytes: &[u8]) -> String {
    format!(
        "0x{}",
        omit_string(&bytes_to_hex(bytes), HEX_DISPLAY_LEN, ELLIPSIS)
    )
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let len = s.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        assert_eq!(bytes_to_hex(&[0x00, 0x0a, 0xff, 0x10]), "000aff10");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn omit_string_cuts_long_hex_to_requested_length() {
        let hex = "ab".repeat(34);
        assert_eq!(hex.len(), 68);

        let shortened = omit_string(&hex, 10, ELLIPSIS);
        assert_eq!(shortened.len(), 10);
        assert!(shortened.ends_with("..."));
        assert_eq!(&shortened[..7], "abababa");
    }

    #[test]
    fn omit_string_boundary_is_inclusive() {
        // Exactly `len` characters is already long enough to be cut.
        assert_eq!(omit_string("abcdef", 6, ".."), "abcd..");
        assert_eq!(omit_string("abcde", 6, ".."), "abcde");
    }

    #[test]
    fn omit_string_with_ellipsis_longer_than_len() {
        assert_eq!(omit_string("abcdef", 2, "..."), "...");
    }

    #[test]
    fn display_bytes_prefixes_and_truncates() {
        assert_eq!(display_bytes(&[0xde, 0xad]), "0xdead");

        let long = display_bytes(&[0x11; 48]);
        assert!(long.starts_with("0x1111"));
        assert_eq!(long.len(), 2 + HEX_DISPLAY_LEN);
        assert!(long.ends_with("..."));
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(12_345_678), "12,345,678");
    }
}
