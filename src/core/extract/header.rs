//! Header section: studio location, class time, instructor.
//!
//! The header table renders date, time and instructor as visually identical
//! white paragraphs; they are told apart by shape (clock time, calendar
//! date, bare name), not by position.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::core::{dom, locate};
use crate::models::workout::{WorkoutRecord, fill};

/// Clock time, anchored to the whole cell. Some sender versions emit a
/// seconds component ("4:15:00 PM"), so it is accepted as optional.
static CLASS_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d{1,2}:\d{2}(?::\d{2})?\s*[AP]M)\s*$").expect("class time pattern")
});

/// Calendar date cells are recognized only to be skipped.
static CLASS_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("class date pattern"));

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("instructor name pattern"));

pub fn extract(doc: &Html, rec: &mut WorkoutRecord) {
    // Studio location has its own class when the template cooperates.
    for el in doc.select(&dom::STUDIO_NAME) {
        let text = dom::trimmed_text(el);
        if !text.is_empty() {
            fill(&mut rec.studio_location, text);
        }
    }

    // Fallback: any white header paragraph shaped like "City, ST".
    if rec.studio_location.is_none() {
        for el in doc.select(&dom::TEXT_WHITE) {
            let text = dom::trimmed_text(el);
            if !text.is_empty() && !text.contains(locate::HEADER_MARKER) && text.contains(',') {
                fill(&mut rec.studio_location, text);
            }
        }
    }

    // Time and instructor live in the summary header table.
    let Some(scope) = locate::section_table(doc, locate::HEADER_MARKER) else {
        return;
    };
    for el in scope.select(&dom::TEXT_WHITE) {
        // Skip the studio cell; it was handled above.
        if dom::has_class(el, "header-studio-name") {
            continue;
        }
        let text = crate::utils::time::scrub(&dom::text_of(el)).trim().to_string();

        if let Some(caps) = CLASS_TIME_RE.captures(&text) {
            fill(&mut rec.class_time, caps[1].trim().to_string());
        } else if CLASS_DATE_RE.is_match(&text) {
            // Date cell; the caller keys records by the email timestamp.
        } else if rec.class_instructor.is_none()
            && text.len() >= 2
            && !text.contains(':')
            && !text.starts_with(|c: char| c.is_ascii_digit())
            && !text.contains("STUDIO")
            && !text.contains(',')
            && NAME_RE.is_match(&text)
        {
            fill(&mut rec.class_instructor, text);
        }
    }
}
