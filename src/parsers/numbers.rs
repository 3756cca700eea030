/// Parse a required count; anything that is not a plain unsigned integer counts as zero
pub fn parse_count(text: &str) -> u64 {
    parse_optional_count(text).unwrap_or(0)
}

/// Parse an optional count; anything that is not a plain unsigned integer is absent
pub fn parse_optional_count(text: &str) -> Option<u64> {
    // u64::from_str tolerates a leading '+', counts never carry a sign
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
