//! Log truncation
//!
//! Keeps whole response bodies out of debug/error logs and error strings.

/// Maximum number of characters kept from a body.
const TRUNCATE_CHARS: usize = 256;

/// Truncate a string to [`TRUNCATE_CHARS`] characters.
///
/// Cuts on a character boundary and appends the original byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_CHARS) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}
