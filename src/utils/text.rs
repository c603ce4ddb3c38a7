use std::borrow::Cow;

/// Decode one raw line of a mission file
///
/// Attempts UTF-8 decoding first, falling back to Windows-1251 if UTF-8 fails.
/// The game writes mission files in the system ANSI code page, which for most
/// of its player base is Cyrillic.
///
/// # Returns
///
/// Decoded line (always succeeds with some valid string)
pub fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.into(),
        Err(_) => encoding_rs::WINDOWS_1251.decode(bytes).0,
    }
}

/// Remove a trailing `\n` or `\r\n`
pub fn trim_line_ending(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}
