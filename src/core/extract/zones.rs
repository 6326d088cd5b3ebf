//! Heart-rate zone minute bars.
//!
//! The five bars carry no per-zone labels the engine can read; their order
//! in the document IS the contract: gray, blue, green, orange, red. A
//! layout that reorders or prepends bars would silently mis-assign zones;
//! the assumed order is pinned by a test rather than guessed around.

use scraper::Html;

use crate::core::dom;
use crate::models::workout::{WorkoutRecord, fill};
use crate::utils::num;

pub fn extract(doc: &Html, rec: &mut WorkoutRecord) {
    let minutes: Vec<i64> = doc
        .select(&dom::ZONE_BAR)
        .filter_map(|el| num::parse_int(&dom::trimmed_text(el)))
        .collect();

    if minutes.len() >= 5 {
        fill(&mut rec.minutes_in_gray_zone, minutes[0]);
        fill(&mut rec.minutes_in_blue_zone, minutes[1]);
        fill(&mut rec.minutes_in_green_zone, minutes[2]);
        fill(&mut rec.minutes_in_orange_zone, minutes[3]);
        fill(&mut rec.minutes_in_red_zone, minutes[4]);
    }
}
