//! Region locator: signature-then-scope.
//!
//! Each section is found by a literal text signature, and its scope is the
//! nearest enclosing table around that signature, never the whole document.
//! Both performance blocks reuse label text like "Total Time"; confining
//! lookups to the scope is what keeps treadmill and rower fields apart.

use scraper::{ElementRef, Html};

use super::dom;

pub const HEADER_MARKER: &str = "STUDIO WORKOUT SUMMARY";
pub const TREADMILL_MARKER: &str = "TREADMILL PERFORMANCE TOTALS";
pub const ROWER_MARKER: &str = "ROWER PERFORMANCE TOTALS";

/// Upper bound for the ancestor walk in [`classify`]. Keeps attribution
/// terminating on malformed or absurdly nested documents.
pub const SECTION_SCAN_DEPTH: usize = 20;

/// The two per-activity performance sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Treadmill,
    Rower,
}

/// Scope for a marker: the nearest table enclosing the element that renders
/// the marker text. None when the section is absent from this email.
pub fn section_table<'a>(doc: &'a Html, marker: &str) -> Option<ElementRef<'a>> {
    doc.select(&dom::PARAGRAPH)
        .find(|p| dom::text_of(*p).contains(marker))
        .and_then(|p| dom::closest(p, "table"))
}

/// Attribute an element outside the performance tables to one of the two
/// activities by walking up at most [`SECTION_SCAN_DEPTH`] ancestors and
/// testing each one's rendered content for the section markers. The first
/// marker found wins; neither within the bound means the caller leaves the
/// dependent field unset rather than guessing.
pub fn classify(el: ElementRef) -> Option<Activity> {
    let mut node = el.parent()?;
    for _ in 0..SECTION_SCAN_DEPTH {
        if let Some(ancestor) = ElementRef::wrap(node) {
            let content = ancestor.inner_html();
            if content.contains(TREADMILL_MARKER) {
                return Some(Activity::Treadmill);
            }
            if content.contains(ROWER_MARKER) {
                return Some(Activity::Rower);
            }
        }
        node = node.parent()?;
    }
    None
}
