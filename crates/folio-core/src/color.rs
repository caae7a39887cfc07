use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 7-character #rrggbb color, got {0} characters")]
    BadLength(usize),
    #[error("invalid hex digit in color component {0:?}")]
    BadDigit(String),
}

/// Parse a `#rrggbb` color into linear-ish \[0, 1\] RGB components.
///
/// The palettes only ever use this form, so no shorthand or alpha variants
/// are accepted.
pub fn parse_hex_color(s: &str) -> Result<[f32; 3], ColorParseError> {
    let bytes = s.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' {
        return Err(ColorParseError::BadLength(bytes.len()));
    }
    let mut out = [0.0f32; 3];
    for (i, chunk) in s[1..].as_bytes().chunks(2).enumerate() {
        let part = std::str::from_utf8(chunk).unwrap_or("");
        let v = u8::from_str_radix(part, 16)
            .map_err(|_| ColorParseError::BadDigit(part.to_string()))?;
        out[i] = v as f32 / 255.0;
    }
    Ok(out)
}

/// Same as [`parse_hex_color`] but for trusted built-in palette entries.
/// Falls back to white rather than failing scene construction.
pub fn palette_color(s: &str) -> [f32; 3] {
    parse_hex_color(s).unwrap_or_else(|e| {
        log::warn!("bad palette color {s:?}: {e}");
        [1.0, 1.0, 1.0]
    })
}
