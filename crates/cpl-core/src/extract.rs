//! Literal extraction — locating and spanning a bracketed literal embedded in
//! surrounding text (typically a minified application bundle chunk).
//!
//! [`locate`] finds where the literal starts, [`scan`] finds where it ends,
//! and [`extract`] combines both into the literal substring. Neither step
//! interprets the data; decoding is the parser's job.

use thiserror::Error;

/// Extraction failures. Fatal for the whole source they occur in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("marker {marker:?} not found in text")]
    MarkerNotFound { marker: String },
    /// End of text reached before the bracket nesting resolved to zero.
    #[error("unterminated literal starting at byte {start}")]
    UnterminatedLiteral { start: usize },
    /// End of text reached while still inside a quoted string.
    #[error("unterminated string opened at byte {start}")]
    UnterminatedString { start: usize },
}

/// Byte offset immediately after the first occurrence of `marker`.
///
/// The caller passes a marker that sits right before the literal (e.g. the
/// assignment prefix `let s=`), so the returned offset is expected to point
/// at `[` or `{`.
pub fn locate(text: &str, marker: &str) -> Result<usize, ExtractError> {
    text.find(marker)
        .map(|idx| idx + marker.len())
        .ok_or_else(|| ExtractError::MarkerNotFound {
            marker: marker.to_string(),
        })
}

/// End offset (one past the closing bracket) of the balanced literal at
/// `start`, so that `&text[start..end]` is the full literal.
///
/// Single forward pass over bytes: bracket depth is counted only outside
/// string literals; strings open with `"`, `'`, or a backtick and close on
/// the next unescaped matching quote; a backslash makes the following byte
/// inert. Scanning halts the instant depth returns to zero after having
/// become positive. Brackets are ASCII, so byte offsets stay on char
/// boundaries.
pub fn scan(text: &str, start: usize) -> Result<usize, ExtractError> {
    let bytes = text.as_bytes();
    let mut depth: i64 = 0;
    let mut opened = false;
    let mut in_string = false;
    let mut quote = 0u8;
    let mut string_start = 0usize;
    let mut escape = false;

    let mut i = start;
    while i < bytes.len() {
        let b = bytes[i];
        if escape {
            escape = false;
            i += 1;
            continue;
        }
        match b {
            b'\\' => escape = true,
            _ if in_string => {
                if b == quote {
                    in_string = false;
                }
            }
            b'"' | b'\'' | b'`' => {
                in_string = true;
                quote = b;
                string_start = i;
            }
            b'[' | b'{' => {
                depth += 1;
                opened = true;
            }
            b']' | b'}' => {
                depth -= 1;
                if opened && depth == 0 {
                    return Ok(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }

    if in_string {
        Err(ExtractError::UnterminatedString {
            start: string_start,
        })
    } else {
        Err(ExtractError::UnterminatedLiteral { start })
    }
}

/// Locate `marker` and return the balanced literal that follows it.
pub fn extract<'a>(text: &'a str, marker: &str) -> Result<&'a str, ExtractError> {
    let start = locate(text, marker)?;
    let end = scan(text, start)?;
    Ok(&text[start..end])
}
