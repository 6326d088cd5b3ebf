use otfmail::core::decode::{decode, decode_quoted_printable, declares_quoted_printable};
use otfmail::core::payload::{MessagePart, RawPayload, TransferEncoding};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

mod common;
use common::load_fixture;

/// Minimal quoted-printable encoder for round-trip checks: escapes `=` and
/// non-ASCII bytes, emits a soft line break whenever the output line grows
/// past 60 characters.
fn encode_quoted_printable(input: &str) -> String {
    let mut out = String::new();
    let mut col = 0usize;
    for &b in input.as_bytes() {
        if b == b'\n' {
            out.push('\n');
            col = 0;
            continue;
        }
        let chunk = if b == b'=' || b >= 0x7F {
            format!("={:02X}", b)
        } else {
            (b as char).to_string()
        };
        if col + chunk.len() > 60 {
            out.push_str("=\r\n");
            col = 0;
        }
        col += chunk.len();
        out.push_str(&chunk);
    }
    out
}

#[test]
fn quoted_printable_round_trip() {
    let fragment = "<td class=\"metric\" align=\"center\">caf\u{e9} crush\u{a0}7.4 mph, splat = 41</td>\n<p>long tail that will certainly run past the soft wrap column and back again</p>\n";
    let encoded = encode_quoted_printable(fragment);
    assert!(encoded.contains("=\r\n"), "encoder must emit soft breaks");
    assert!(encoded.contains("=3D"), "encoder must escape equals signs");
    assert_eq!(decode_quoted_printable(&encoded), fragment);
}

#[test]
fn soft_breaks_are_removed_before_hex_pairs() {
    // "=3D" split by a soft break still decodes to a single '='.
    assert_eq!(decode_quoted_printable("foo=3D=\r\nbar"), "foo=bar");
    assert_eq!(decode_quoted_printable("foo=\nbar"), "foobar");
    assert_eq!(decode_quoted_printable("=3D=\n"), "=");
}

#[test]
fn invalid_hex_pairs_pass_through() {
    assert_eq!(decode_quoted_printable("charset=\"UTF-8\""), "charset=\"UTF-8\"");
    assert_eq!(decode_quoted_printable("a=zzb"), "a=zzb");
}

#[test]
fn quoted_printable_header_marker_is_case_insensitive() {
    assert!(declares_quoted_printable(
        "Content-Transfer-Encoding: QUOTED-PRINTABLE\r\n\r\nbody"
    ));
    assert!(!declares_quoted_printable("Content-Transfer-Encoding: 7bit"));
}

#[test]
fn document_starts_at_first_doctype() {
    let payload = "X-Junk: 1\r\npreamble <!DOCTYPE html><html>a</html> <!DOCTYPE html>";
    let html = decode(&RawPayload::identity(payload));
    assert!(html.starts_with("<!DOCTYPE html><html>a</html>"));
}

#[test]
fn doctype_marker_is_case_insensitive() {
    let payload = "headers\r\n<!doctype html><html></html>";
    let html = decode(&RawPayload::identity(payload));
    assert!(html.starts_with("<!doctype"));
}

#[test]
fn blank_line_fallback_when_doctype_missing() {
    let crlf = "A: b\r\nC: d\r\n\r\n<div>hi</div>";
    assert_eq!(decode(&RawPayload::identity(crlf)), "<div>hi</div>");

    let lf = "A: b\nC: d\n\n<div>hi</div>";
    assert_eq!(decode(&RawPayload::identity(lf)), "<div>hi</div>");
}

#[test]
fn whole_payload_when_no_marker_exists() {
    let payload = "<div>bare fragment with no headers</div>";
    assert_eq!(decode(&RawPayload::identity(payload)), payload);
}

#[test]
fn empty_payload_decodes_to_empty_string() {
    assert_eq!(decode(&RawPayload::identity("")), "");
}

#[test]
fn trailing_boundary_is_stripped_interior_kept() {
    let payload = "<!DOCTYPE html><html>--inner123-- stays</html>\n--abc123--\n";
    let html = decode(&RawPayload::identity(payload));
    assert_eq!(html, "<!DOCTYPE html><html>--inner123-- stays</html>");

    let open_ended = "<!DOCTYPE html><html></html>\n--abc123\n";
    assert_eq!(
        decode(&RawPayload::identity(open_ended)),
        "<!DOCTYPE html><html></html>"
    );
}

#[test]
fn base64_payload_decodes() {
    let html = "<!DOCTYPE html><html><p>hello</p></html>";
    let encoded = URL_SAFE_NO_PAD.encode(html);
    let decoded = decode(&RawPayload::new(encoded, TransferEncoding::Base64));
    assert_eq!(decoded, html);
}

#[test]
fn undecodable_base64_falls_back_to_raw_text() {
    let not_base64 = "<!DOCTYPE html><html>not base64 at all!</html>";
    let decoded = decode(&RawPayload::new(not_base64, TransferEncoding::Base64));
    assert!(decoded.contains("not base64 at all!"));
}

#[test]
fn message_part_prefers_first_level_html() {
    let tree = MessagePart {
        mime_type: "multipart/alternative".into(),
        body: None,
        parts: vec![
            MessagePart {
                mime_type: "text/plain".into(),
                body: Some(URL_SAFE_NO_PAD.encode("plain")),
                parts: vec![],
            },
            MessagePart {
                mime_type: "text/html".into(),
                body: Some(URL_SAFE_NO_PAD.encode("<html>first level</html>")),
                parts: vec![],
            },
        ],
    };
    let payload = tree.html_payload().expect("html part");
    assert_eq!(payload.body, "<html>first level</html>");
}

#[test]
fn message_part_searches_one_nested_level() {
    let tree = MessagePart {
        mime_type: "multipart/mixed".into(),
        body: None,
        parts: vec![MessagePart {
            mime_type: "multipart/alternative".into(),
            body: None,
            parts: vec![MessagePart {
                mime_type: "text/html".into(),
                body: Some(URL_SAFE_NO_PAD.encode("<html>nested</html>")),
                parts: vec![],
            }],
        }],
    };
    let payload = tree.html_payload().expect("nested html part");
    assert_eq!(payload.body, "<html>nested</html>");
}

#[test]
fn message_without_html_part_fails() {
    let tree = MessagePart {
        mime_type: "multipart/alternative".into(),
        body: None,
        parts: vec![MessagePart {
            mime_type: "text/plain".into(),
            body: Some(URL_SAFE_NO_PAD.encode("plain only")),
            parts: vec![],
        }],
    };
    assert!(tree.html_payload().is_err());
}

#[test]
fn full_fixture_decodes_to_original_html() {
    let eml = load_fixture("summary_full.eml");
    let expected = load_fixture("summary_full.html");
    let decoded = decode(&RawPayload::identity(eml));
    assert_eq!(decoded, expected);
}
