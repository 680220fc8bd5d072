use base64::alphabet::URL_SAFE;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde_json::{Map, Value};

use super::error::DecodeError;
use crate::claims::Claims;

const HEADER_PART: usize = 1;
const PAYLOAD_PART: usize = 2;

// Issuers are inconsistent about trailing '=' so accept both forms.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Header and payload of a compact token.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    /// JOSE header, when it decodes to a JSON object.
    pub header: Option<Map<String, Value>>,
    pub claims: Claims,
}

/// Splits `header.payload.signature` and decodes the payload claims.
///
/// Only the payload decides success; a header that does not decode is
/// reported as `None`. The signature is never looked at.
pub fn decode(token: &str) -> Result<DecodedToken, DecodeError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(DecodeError::SegmentCount { found: parts.len() });
    }

    let claims = decode_object(parts[1], PAYLOAD_PART)?;
    let header = decode_object(parts[0], HEADER_PART).ok();

    Ok(DecodedToken {
        header,
        claims: Claims::new(claims),
    })
}

fn decode_object(segment: &str, part: usize) -> Result<Map<String, Value>, DecodeError> {
    let bytes = URL_SAFE_LENIENT
        .decode(segment.as_bytes())
        .map_err(|e| DecodeError::Base64 {
            part,
            reason: e.to_string(),
        })?;
    let text = String::from_utf8(bytes).map_err(|_| DecodeError::Utf8 { part })?;
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DecodeError::NotAnObject { part }),
        Err(e) => Err(DecodeError::Json {
            part,
            reason: e.to_string(),
        }),
    }
}
