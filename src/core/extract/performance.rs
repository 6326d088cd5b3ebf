//! Treadmill and rower performance blocks.
//!
//! Three layers, applied in order of trust: the value/unit span pair inside
//! each section table (primary distance source), the scoped "Total Time" /
//! "Total Distance" cards attributed by ancestor walk, and the stat tables
//! (`table.inner-table`) matched by label-anchored regexes with a trailing
//! "Max" lookahead. The write guard in the record makes the later layers
//! pure fallback.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::core::locate::Activity;
use crate::core::{dom, locate};
use crate::models::workout::{WorkoutRecord, fill};
use crate::utils::{num, time};

// Value span followed by a unit-bearing sibling span.
static MILES_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)>\s*(\d+\.?\d*)\s*</span>\s*<span[^>]*>(?:&nbsp;|\u{A0})?\s*miles"#)
        .expect("miles pair pattern")
});

static METERS_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)>\s*(\d+\.?\d*)\s*</span>\s*<span[^>]*>(?:&nbsp;|\u{A0})?\s*m(?:&nbsp;|[\s<])"#)
        .expect("meters pair pattern")
});

/// A number with a standalone meters unit somewhere in a cell's text.
static METERS_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*m\s").expect("meters text pattern"));

// Treadmill stat table patterns.
static AVG_SPEED_MPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"AVG\.\s*SPEED[\s\S]*?(\d+\.?\d*)\s*mph").expect("avg speed mph pattern")
});
static MAX_SPEED_MPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)AVG\.\s*SPEED[\s\S]*?mph[\s\S]*?Max[:\s]*(\d+\.?\d*)")
        .expect("max speed mph pattern")
});
static AVG_INCLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"AVG\.\s*INCLINE[\s\S]*?(\d+\.?\d*)\s*%").expect("avg incline pattern")
});
static MAX_INCLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)AVG\.\s*INCLINE[\s\S]*?%[\s\S]*?Max[:\s]*(\d+\.?\d*)")
        .expect("max incline pattern")
});
static AVG_PACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"AVG\.\s*PACE[\s\S]*?(\d{1,2}:\d{2})").expect("avg pace pattern")
});
static FASTEST_PACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Fastest[:\s]*(\d{1,2}:\d{2})").expect("fastest pace pattern"));
static ELEVATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ELEVATION[\s\S]*?(\d+\.?\d*)\s*feet").expect("elevation pattern")
});

// Rower stat table patterns.
static AVG_WATT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"AVG\.\s*WATTAGE[\s\S]*?(\d+)\s*watt").expect("avg wattage pattern")
});
static MAX_WATT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)AVG\.\s*WATTAGE[\s\S]*?watt[\s\S]*?Max[:\s]*(\d+)").expect("max wattage pattern")
});
static AVG_SPEED_KMH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"AVG\.\s*SPEED[\s\S]*?(\d+\.?\d*)\s*km/h").expect("avg speed km/h pattern")
});
static MAX_SPEED_KMH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)AVG\.\s*SPEED[\s\S]*?km/h[\s\S]*?Max[:\s]*(\d+\.?\d*)")
        .expect("max speed km/h pattern")
});
static AVG_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"500M\s*SPLIT[\s\S]*?(\d{1,2}:\d{2})\s*min").expect("avg split pattern")
});
static MAX_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"500M\s*SPLIT[\s\S]*?Max[:\s]*(\d{1,2}:\d{2})").expect("max split pattern")
});
static STROKE_RATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"AVG\.\s*STROKE\s*RATE[\s\S]*?(\d+\.?\d*)").expect("stroke rate pattern")
});

/// Primary distance source: the big value/unit span pair inside each
/// section's own table.
pub fn marker_distances(doc: &Html, rec: &mut WorkoutRecord) {
    if let Some(scope) = locate::section_table(doc, locate::TREADMILL_MARKER) {
        for td in scope.select(&dom::TD) {
            if !dom::text_of(td).contains("miles") {
                continue;
            }
            if let Some(caps) = MILES_PAIR_RE.captures(&td.inner_html()) {
                if let Some(value) = num::parse_float(&caps[1]) {
                    fill(&mut rec.treadmill_distance, value);
                }
            }
        }
    }

    if let Some(scope) = locate::section_table(doc, locate::ROWER_MARKER) {
        for td in scope.select(&dom::TD) {
            let text = dom::text_of(td);
            if !text.contains(" m ") && !METERS_TEXT_RE.is_match(&text) {
                continue;
            }
            if let Some(caps) = METERS_PAIR_RE.captures(&td.inner_html()) {
                if let Some(value) = num::parse_float(&caps[1]) {
                    fill(&mut rec.rowing_distance, value);
                }
            }
        }
    }
}

/// "Total Time" cards: the value is the element directly before the label,
/// and the owning section is resolved by the bounded ancestor walk.
pub fn scoped_totals(doc: &Html, rec: &mut WorkoutRecord) {
    for label in doc.select(&dom::METRIC_LABEL) {
        if dom::trimmed_text(label) != "Total Time" {
            continue;
        }
        let Some(value_el) =
            dom::prev_element_sibling(label).filter(|e| dom::is_element(*e, "p", &["h1", "text-gray", "text-bold"]))
        else {
            continue;
        };
        let Some(seconds) = time::duration_to_seconds(&dom::trimmed_text(value_el)) else {
            continue;
        };
        match locate::classify(label) {
            Some(Activity::Treadmill) => fill(&mut rec.treadmill_time, seconds),
            Some(Activity::Rower) => fill(&mut rec.rowing_time, seconds),
            None => {}
        }
    }
}

/// "Total Distance" cards, the table-based backup for the span-pair
/// distances. Runs after [`marker_distances`]; the write guard keeps it
/// from ever overriding a primary match.
pub fn table_distances(doc: &Html, rec: &mut WorkoutRecord) {
    for label in doc.select(&dom::METRIC_LABEL) {
        if dom::trimmed_text(label) != "Total Distance" {
            continue;
        }
        let Some(value) = distance_span_value(label) else {
            continue;
        };
        match locate::classify(label) {
            Some(Activity::Treadmill) => fill(&mut rec.treadmill_distance, value),
            Some(Activity::Rower) => fill(&mut rec.rowing_distance, value),
            None => {}
        }
    }
}

fn distance_span_value(label: ElementRef) -> Option<f64> {
    let cell = dom::closest(label, "td")?;
    let span = cell.select(&dom::SPAN_VALUE).next()?;
    num::parse_float(&dom::trimmed_text(span))
}

/// Detailed stats live in `table.inner-table` blocks, identified by their
/// unit signature rather than position: mph + AVG. SPEED is the treadmill,
/// watt + AVG. WATTAGE is the rower.
pub fn stat_tables(doc: &Html, rec: &mut WorkoutRecord) {
    for table in doc.select(&dom::INNER_TABLE) {
        let text = dom::text_of(table);

        if text.contains("mph") && text.contains("AVG. SPEED") {
            if let Some(caps) = AVG_SPEED_MPH_RE.captures(&text) {
                if let Some(v) = num::parse_float(&caps[1]) {
                    fill(&mut rec.treadmill_avg_speed, v);
                }
            }
            if let Some(caps) = MAX_SPEED_MPH_RE.captures(&text) {
                if let Some(v) = num::parse_float(&caps[1]) {
                    fill(&mut rec.treadmill_max_speed, v);
                }
            }
            if let Some(caps) = AVG_INCLINE_RE.captures(&text) {
                if let Some(v) = num::parse_float(&caps[1]) {
                    fill(&mut rec.treadmill_avg_incline, v);
                }
            }
            if let Some(caps) = MAX_INCLINE_RE.captures(&text) {
                if let Some(v) = num::parse_float(&caps[1]) {
                    fill(&mut rec.treadmill_max_incline, v);
                }
            }

            let depaced = time::scrub(&text);
            if let Some(caps) = AVG_PACE_RE.captures(&depaced) {
                if let Some(v) = time::duration_to_seconds(&caps[1]) {
                    fill(&mut rec.treadmill_avg_pace, v);
                }
            }
            if let Some(caps) = FASTEST_PACE_RE.captures(&depaced) {
                if let Some(v) = time::duration_to_seconds(&caps[1]) {
                    fill(&mut rec.treadmill_fastest_pace, v);
                }
            }
            if let Some(caps) = ELEVATION_RE.captures(&text) {
                if let Some(v) = num::parse_float(&caps[1]) {
                    fill(&mut rec.treadmill_elevation, v);
                }
            }
        }

        if text.contains("watt") && text.contains("AVG. WATTAGE") {
            if let Some(caps) = AVG_WATT_RE.captures(&text) {
                if let Some(v) = num::parse_int(&caps[1]) {
                    fill(&mut rec.rowing_avg_wattage, v);
                }
            }
            if let Some(caps) = MAX_WATT_RE.captures(&text) {
                if let Some(v) = num::parse_int(&caps[1]) {
                    fill(&mut rec.rowing_max_wattage, v);
                }
            }
            if let Some(caps) = AVG_SPEED_KMH_RE.captures(&text) {
                if let Some(v) = num::parse_float(&caps[1]) {
                    fill(&mut rec.rowing_avg_speed, v);
                }
            }
            if let Some(caps) = MAX_SPEED_KMH_RE.captures(&text) {
                if let Some(v) = num::parse_float(&caps[1]) {
                    fill(&mut rec.rowing_max_speed, v);
                }
            }

            let desplit = time::scrub(&text);
            if let Some(caps) = AVG_SPLIT_RE.captures(&desplit) {
                if let Some(v) = time::duration_to_seconds(&caps[1]) {
                    fill(&mut rec.rowing_500m_split, v);
                }
            }
            if let Some(caps) = MAX_SPLIT_RE.captures(&desplit) {
                if let Some(v) = time::duration_to_seconds(&caps[1]) {
                    fill(&mut rec.rowing_max_500m_split, v);
                }
            }
            if let Some(caps) = STROKE_RATE_RE.captures(&text) {
                if let Some(v) = num::parse_float(&caps[1]) {
                    fill(&mut rec.rowing_avg_stroke_rate, v);
                }
            }
        }
    }
}
