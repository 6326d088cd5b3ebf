//! The assembled workout record.
//!
//! Every field is independently optional: partial extraction is the expected
//! steady state, not an error. A field, once set during an extraction run,
//! is never overwritten: the record's own `Option` fields are the single
//! source of "already set" truth, and every write goes through [`fill`].

use serde::Serialize;

/// Write guard enforcing first-match-wins: a later extraction strategy can
/// never overwrite a value an earlier one produced.
pub fn fill<T>(slot: &mut Option<T>, value: T) {
    if slot.is_none() {
        *slot = Some(value);
    }
}

/// One extracted workout. Serialized field names match the downstream
/// persistence schema (camelCase).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    // Class metadata
    pub class_time: Option<String>,
    pub studio_location: Option<String>,
    pub class_instructor: Option<String>,

    // Aggregate metrics
    pub calories_burned: Option<i64>,
    pub splat_points: Option<i64>,
    pub avg_heart_rate: Option<i64>,
    pub peak_heart_rate: Option<i64>,
    pub steps: Option<i64>,

    // Treadmill
    pub treadmill_distance: Option<f64>, // miles
    pub treadmill_time: Option<i64>,     // seconds
    pub treadmill_avg_speed: Option<f64>, // mph
    pub treadmill_max_speed: Option<f64>, // mph
    pub treadmill_avg_incline: Option<f64>, // percent
    pub treadmill_max_incline: Option<f64>, // percent
    pub treadmill_avg_pace: Option<i64>, // seconds per mile
    pub treadmill_fastest_pace: Option<i64>, // seconds per mile
    pub treadmill_elevation: Option<f64>, // feet

    // Rower
    pub rowing_distance: Option<f64>, // meters
    pub rowing_time: Option<i64>,     // seconds
    pub rowing_avg_wattage: Option<i64>,
    pub rowing_max_wattage: Option<i64>,
    pub rowing_avg_speed: Option<f64>, // km/h
    pub rowing_max_speed: Option<f64>, // km/h
    pub rowing_500m_split: Option<i64>, // seconds
    pub rowing_max_500m_split: Option<i64>, // seconds
    pub rowing_avg_stroke_rate: Option<f64>,

    // Zone minutes
    pub minutes_in_gray_zone: Option<i64>,
    pub minutes_in_blue_zone: Option<i64>,
    pub minutes_in_green_zone: Option<i64>,
    pub minutes_in_orange_zone: Option<i64>,
    pub minutes_in_red_zone: Option<i64>,
    pub active_minutes: Option<i64>,
}

impl WorkoutRecord {
    /// Derive `active_minutes` as the sum of the five zone fields, only when
    /// all five are present. A partial sum is never produced.
    pub fn derive_active_minutes(&mut self) {
        if let (Some(gray), Some(blue), Some(green), Some(orange), Some(red)) = (
            self.minutes_in_gray_zone,
            self.minutes_in_blue_zone,
            self.minutes_in_green_zone,
            self.minutes_in_orange_zone,
            self.minutes_in_red_zone,
        ) {
            fill(&mut self.active_minutes, gray + blue + green + orange + red);
        }
    }

    /// True when no extractor matched anything at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
