//! Numeric parsing shared by the extractors. Any conversion failure means
//! the field stays unset; no defaults.

pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().replace(',', "").parse().ok()
}

pub fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
