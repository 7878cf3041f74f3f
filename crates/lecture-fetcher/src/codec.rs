use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use serde_json::Value;

use crate::error::FetchError;

/// Base64 text width used by the contents API
const WRAP_COLUMNS: usize = 60;

/// Decode the base64 `content` of a content response into the record it
/// holds. Line breaks inside the base64 text are ignored.
///
/// Only JSON syntax is checked; the record is kept as-is so fields this
/// crate does not know about reach the artifact untouched.
pub fn decode_lecture(content: &str) -> Result<Value, FetchError> {
    let compact: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;
    let text = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&text)?)
}

/// Inverse of [`decode_lecture`], wrapped at 60 columns the way the
/// contents API serves it
pub fn encode_lecture<T: Serialize>(record: &T) -> Result<String, FetchError> {
    let json = serde_json::to_vec_pretty(record)?;
    let encoded = STANDARD.encode(json);

    let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / WRAP_COLUMNS + 1);
    for (i, c) in encoded.chars().enumerate() {
        if i > 0 && i % WRAP_COLUMNS == 0 {
            wrapped.push('\n');
        }
        wrapped.push(c);
    }
    if !encoded.is_empty() {
        wrapped.push('\n');
    }
    Ok(wrapped)
}
