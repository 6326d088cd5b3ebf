//! Raw email payloads and the gmail-shaped MIME part tree.
//!
//! The mail-fetch collaborator hands the engine either a single body with a
//! declared transfer encoding, or a part tree from which the text/html leaf
//! still has to be picked. Part bodies arrive base64url-encoded the way the
//! gmail API ships them.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE_NO_PAD};

use crate::errors::{AppError, AppResult};

/// Declared Content-Transfer-Encoding of a payload body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferEncoding {
    Identity,
    QuotedPrintable,
    Base64,
}

/// One email body as received, before any normalization.
#[derive(Debug, Clone)]
pub struct RawPayload {
    pub body: String,
    pub encoding: TransferEncoding,
}

impl RawPayload {
    pub fn new(body: impl Into<String>, encoding: TransferEncoding) -> Self {
        Self {
            body: body.into(),
            encoding,
        }
    }

    /// Payload with no declared encoding; the decoder still sniffs a
    /// quoted-printable header marker on its own.
    pub fn identity(body: impl Into<String>) -> Self {
        Self::new(body, TransferEncoding::Identity)
    }
}

/// Node of a multipart message tree, shaped like the gmail API payload:
/// a part carries a MIME type, optionally a base64url body, and child parts.
#[derive(Debug, Clone, Default)]
pub struct MessagePart {
    pub mime_type: String,
    pub body: Option<String>,
    pub parts: Vec<MessagePart>,
}

impl MessagePart {
    /// Select the body-bearing part: a simple message's direct body wins,
    /// then first-level text/html parts, then exactly one level of nested
    /// parts. Deeper nesting is not searched.
    pub fn select_html(&self) -> Option<&MessagePart> {
        if self.body.is_some() {
            return Some(self);
        }
        if let Some(part) = self
            .parts
            .iter()
            .find(|p| p.mime_type == "text/html" && p.body.is_some())
        {
            return Some(part);
        }
        for part in &self.parts {
            if let Some(nested) = part
                .parts
                .iter()
                .find(|p| p.mime_type == "text/html" && p.body.is_some())
            {
                return Some(nested);
            }
        }
        None
    }

    /// Decode this part's body to a string. Undecodable base64 falls back
    /// to the raw text rather than failing.
    pub fn decoded_body(&self) -> Option<String> {
        let data = self.body.as_deref()?;
        match decode_base64(data) {
            Some(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            None => Some(data.to_string()),
        }
    }

    /// Resolve the whole tree to a single identity-encoded payload for the
    /// decoder. Fails only when the message carries no text/html part.
    pub fn html_payload(&self) -> AppResult<RawPayload> {
        let part = self
            .select_html()
            .ok_or_else(|| AppError::Payload("no text/html part in message".into()))?;
        let body = part
            .decoded_body()
            .ok_or_else(|| AppError::Payload("text/html part has no body".into()))?;
        Ok(RawPayload::identity(body))
    }
}

/// Decode base64 content, URL-safe alphabet first (gmail), standard as
/// fallback. Whitespace and padding variations are tolerated.
pub fn decode_base64(data: &str) -> Option<Vec<u8>> {
    let cleaned: String = data.chars().filter(|c| !c.is_whitespace()).collect();
    let unpadded = cleaned.trim_end_matches('=');
    URL_SAFE_NO_PAD
        .decode(unpadded)
        .ok()
        .or_else(|| STANDARD.decode(cleaned.as_str()).ok())
        .or_else(|| STANDARD_NO_PAD.decode(unpadded).ok())
}
