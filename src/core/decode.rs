//! Decoder: raw payload → normalized HTML.
//!
//! Best-effort by design. Every anomaly (unknown encoding, missing doctype,
//! missing boundary) resolves to a tolerant fallback, never a failure; an
//! empty payload decodes to an empty string.

use std::sync::LazyLock;

use regex::Regex;

use super::payload::{RawPayload, TransferEncoding, decode_base64};

static SOFT_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=\r?\n").expect("soft break pattern"));

static DOCTYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!doctype").expect("doctype pattern"));

static TRAILING_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n--[A-Za-z0-9]+--?\s*$").expect("boundary pattern"));

/// Decode a raw payload into normalized HTML: transfer decoding, HTML root
/// location, trailing MIME boundary strip.
pub fn decode(raw: &RawPayload) -> String {
    let body = match raw.encoding {
        TransferEncoding::Base64 => match decode_base64(&raw.body) {
            Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            None => raw.body.clone(),
        },
        TransferEncoding::QuotedPrintable => decode_quoted_printable(&raw.body),
        TransferEncoding::Identity => {
            if declares_quoted_printable(&raw.body) {
                decode_quoted_printable(&raw.body)
            } else {
                raw.body.clone()
            }
        }
    };

    let html = locate_html_root(&body);
    strip_trailing_boundary(html).to_string()
}

/// Case-insensitive header marker for quoted-printable content.
pub fn declares_quoted_printable(payload: &str) -> bool {
    payload
        .to_lowercase()
        .contains("content-transfer-encoding: quoted-printable")
}

/// Decode quoted-printable content. Soft line breaks (a line-terminal `=`
/// followed by a line break) are removed FIRST; only then are the remaining
/// `=XX` pairs decoded. The reverse order would miscount `=\n` sequences.
/// Decoding is byte-wise so multi-byte UTF-8 sequences survive.
pub fn decode_quoted_printable(input: &str) -> String {
    let joined = SOFT_BREAK_RE.replace_all(input, "");
    let bytes = joined.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'=' {
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).copied().and_then(hex_val),
                bytes.get(i + 2).copied().and_then(hex_val),
            ) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - b'A' + 10),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}

/// Find where the HTML document starts. The first doctype marker wins;
/// without one, the body is whatever follows the first blank line; without
/// either, the whole payload is the body.
fn locate_html_root(payload: &str) -> &str {
    if let Some(m) = DOCTYPE_RE.find(payload) {
        return &payload[m.start()..];
    }
    if let Some(idx) = payload.find("\r\n\r\n") {
        return &payload[idx + 4..];
    }
    if let Some(idx) = payload.find("\n\n") {
        return &payload[idx + 2..];
    }
    payload
}

/// Strip one trailing MIME boundary line (`--token` or `--token--`) anchored
/// at the very end of the content. Interior boundaries are left alone; the
/// document model ignores them as unrecognized markup.
fn strip_trailing_boundary(html: &str) -> &str {
    match TRAILING_BOUNDARY_RE.find(html) {
        Some(m) => &html[..m.start()],
        None => html,
    }
}
