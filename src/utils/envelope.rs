use crate::utils::error::{Result, TallyError};

/// Strips any wrapper text around the JSON object in a raw response, e.g.
/// JSONP callback padding like `?({...})`. Returns the substring from the
/// first `{` to the last `}` inclusive.
///
/// Missing or inverted delimiters are an explicit decode error rather than
/// a panic or an out-of-range slice.
pub fn trim_envelope(raw: &str) -> Result<&str> {
    let start = raw.find('{').ok_or_else(|| TallyError::Envelope {
        reason: "no opening brace in response".to_string(),
    })?;
    let end = raw.rfind('}').ok_or_else(|| TallyError::Envelope {
        reason: "no closing brace in response".to_string(),
    })?;
    if end < start {
        return Err(TallyError::Envelope {
            reason: "closing brace precedes opening brace".to_string(),
        });
    }
    Ok(&raw[start..=end])
}
