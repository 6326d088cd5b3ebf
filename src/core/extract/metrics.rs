//! Aggregate metric cards and the embedded peak heart-rate marker.
//!
//! Each card renders value-above-label: the number sits in the table row
//! immediately preceding the row that holds its caption.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::core::dom;
use crate::models::workout::{WorkoutRecord, fill};
use crate::utils::num;

/// "Peak HR: 186", tolerant of a non-breaking space between marker and
/// value, decoded or as a leftover entity.
static PEAK_HR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Peak HR:[\s\u{A0}]*(?:&nbsp;)?[\s\u{A0}]*(\d+)").expect("peak HR pattern")
});

pub fn extract(doc: &Html, rec: &mut WorkoutRecord) {
    for label_el in doc.select(&dom::METRIC_LABEL) {
        let slot = match dom::trimmed_text(label_el).as_str() {
            "CALORIES BURNED" => &mut rec.calories_burned,
            "SPLAT POINTS" => &mut rec.splat_points,
            "AVG. HEART-RATE" => &mut rec.avg_heart_rate,
            "STEPS" => &mut rec.steps,
            _ => continue,
        };
        if let Some(value) = value_above(label_el) {
            fill(slot, value);
        }
    }

    // Peak HR is not a card; it hides in running text somewhere in the
    // document. First match wins.
    for el in doc.select(&dom::ANY) {
        if let Some(caps) = PEAK_HR_RE.captures(&dom::text_of(el)) {
            if let Some(value) = num::parse_int(&caps[1]) {
                fill(&mut rec.peak_heart_rate, value);
            }
        }
    }
}

/// Value-above-label lookup: the label's row is found, and the value is the
/// classed paragraph in the immediately preceding row.
fn value_above(label: ElementRef) -> Option<i64> {
    let row = dom::closest(label, "tr")?;
    let prev = dom::prev_element_sibling(row).filter(|e| e.value().name() == "tr")?;
    let value_el = prev.select(&dom::METRIC_VALUE).next()?;
    num::parse_int(&dom::trimmed_text(value_el))
}
