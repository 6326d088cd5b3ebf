//! Time utilities: MM:SS durations and templating-artifact scrubbing.

use std::sync::LazyLock;

use regex::Regex;

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):(\d{2})$").expect("duration pattern"));

/// Strip the zero-width non-joiner characters and entity remnants the email
/// templating sprinkles through time values.
pub fn scrub(raw: &str) -> String {
    raw.replace('\u{200C}', "").replace("&zwnj;", "")
}

/// Convert an `MM:SS` duration to total seconds. Anything not matching that
/// shape exactly yields None; a malformed duration must never read as 0.
pub fn duration_to_seconds(raw: &str) -> Option<i64> {
    let cleaned = scrub(raw);
    let caps = DURATION_RE.captures(cleaned.trim())?;
    let minutes: i64 = caps[1].parse().ok()?;
    let seconds: i64 = caps[2].parse().ok()?;
    Some(minutes * 60 + seconds)
}
