use serde::de::DeserializeOwned;

use crate::errors::RequestError;

/// Decodes a response body as JSON.
/// - the body is text-decoded first: invalid UTF-8 sequences become U+FFFD
/// - a leading byte order mark is skipped
/// - any parse failure becomes `RequestError::Decode` carrying serde_json's message
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, RequestError> {
    let text = String::from_utf8_lossy(body);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    serde_json::from_str(text).map_err(|e| RequestError::Decode(e.to_string()))
}
