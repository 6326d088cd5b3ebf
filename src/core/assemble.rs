//! Record assembler: one forward pass over the document.
//!
//! The extractor order below is the fallback chain. Marker-based distances
//! run before the table-based backup, and every single write anywhere in
//! the pass goes through the record's first-match-wins guard, so re-running
//! a stage or adding a later one can never change an already-extracted
//! value.

use scraper::Html;

use super::extract::{header, metrics, performance, zones};
use super::{decode, payload::RawPayload};
use crate::models::workout::WorkoutRecord;

/// Parse normalized HTML into a workout record. Pure and re-entrant: the
/// document tree lives only inside this call, and the same input always
/// yields the same record.
pub fn parse_workout_html(html: &str) -> WorkoutRecord {
    let doc = Html::parse_document(html);
    let mut rec = WorkoutRecord::default();

    header::extract(&doc, &mut rec);
    metrics::extract(&doc, &mut rec);
    zones::extract(&doc, &mut rec);
    performance::marker_distances(&doc, &mut rec);
    performance::scoped_totals(&doc, &mut rec);
    performance::table_distances(&doc, &mut rec);
    performance::stat_tables(&doc, &mut rec);

    rec.derive_active_minutes();
    rec
}

/// Full pipeline: decode a raw payload and extract the record. A field the
/// document does not carry stays unset; this never fails on content.
pub fn extract_workout(raw: &RawPayload) -> WorkoutRecord {
    parse_workout_html(&decode::decode(raw))
}
