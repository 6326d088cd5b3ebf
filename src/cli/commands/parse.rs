use std::fs;

use ansi_term::Colour;

use crate::cli::parser::Commands;
use crate::core::{assemble, payload::RawPayload};
use crate::errors::{AppError, AppResult};
use crate::models::workout::WorkoutRecord;
use crate::ui::messages;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Parse { files, json } = cmd {
        let mut parsed = 0usize;
        let mut empty = 0usize;
        let mut failed = 0usize;

        for path in files {
            match parse_file(path) {
                Ok((rec, date)) => {
                    if rec.is_empty() {
                        empty += 1;
                    } else {
                        parsed += 1;
                    }
                    if *json {
                        println!("{}", serde_json::to_string_pretty(&rec)?);
                    } else {
                        if rec.is_empty() {
                            messages::warning(format!("{}: no workout fields found", path));
                        }
                        print_record(path, date.as_deref(), &rec);
                    }
                }
                Err(e) => {
                    failed += 1;
                    messages::error(format!("{}: {}", path, e));
                }
            }
        }

        if files.len() > 1 {
            let summary = format!("{} parsed, {} empty, {} failed", parsed, empty, failed);
            if failed == 0 {
                messages::success(summary);
            } else {
                messages::info(summary);
            }
        }

        // A batch tolerates individual bad messages; only a run where
        // nothing could be read at all fails.
        if failed == files.len() {
            return Err(AppError::Payload("no input could be parsed".into()));
        }
    }
    Ok(())
}

fn parse_file(path: &str) -> AppResult<(WorkoutRecord, Option<String>)> {
    let raw = fs::read_to_string(path)?;
    let date = email_date(&raw);
    let rec = assemble::extract_workout(&RawPayload::identity(raw));
    Ok((rec, date))
}

/// RFC 2822 `Date:` header from the message head, reformatted for display.
/// Timestamping the stored record stays with the persistence layer; this is
/// informational output only.
fn email_date(raw: &str) -> Option<String> {
    for line in raw.lines() {
        if line.trim().is_empty() {
            break;
        }
        if let Some(value) = line
            .get(..5)
            .filter(|p| p.eq_ignore_ascii_case("date:"))
            .map(|_| &line[5..])
        {
            return chrono::DateTime::parse_from_rfc2822(value.trim())
                .ok()
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string());
        }
    }
    None
}

fn print_record(path: &str, date: Option<&str>, rec: &WorkoutRecord) {
    let title = match date {
        Some(d) => format!("{} ({})", path, d),
        None => path.to_string(),
    };
    println!("\n{}", Colour::Blue.bold().paint(title));

    let mut table = Table::new(vec!["Field".to_string(), "Value".to_string()]);
    for (name, value) in field_rows(rec) {
        table.add_row(vec![name.to_string(), value]);
    }
    print!("{}", table.render());
}

type FieldRows = Vec<(&'static str, String)>;

fn row_str(rows: &mut FieldRows, name: &'static str, v: &Option<String>) {
    if let Some(v) = v {
        rows.push((name, v.clone()));
    }
}

fn row_int(rows: &mut FieldRows, name: &'static str, v: &Option<i64>) {
    if let Some(v) = v {
        rows.push((name, v.to_string()));
    }
}

fn row_float(rows: &mut FieldRows, name: &'static str, v: &Option<f64>) {
    if let Some(v) = v {
        rows.push((name, v.to_string()));
    }
}

/// Set fields only, in record order; unset fields are simply absent.
fn field_rows(rec: &WorkoutRecord) -> FieldRows {
    let mut rows: FieldRows = Vec::new();

    row_str(&mut rows, "studio", &rec.studio_location);
    row_str(&mut rows, "class time", &rec.class_time);
    row_str(&mut rows, "instructor", &rec.class_instructor);

    row_int(&mut rows, "calories burned", &rec.calories_burned);
    row_int(&mut rows, "splat points", &rec.splat_points);
    row_int(&mut rows, "avg heart rate", &rec.avg_heart_rate);
    row_int(&mut rows, "peak heart rate", &rec.peak_heart_rate);
    row_int(&mut rows, "steps", &rec.steps);

    row_float(&mut rows, "treadmill distance (mi)", &rec.treadmill_distance);
    row_int(&mut rows, "treadmill time (s)", &rec.treadmill_time);
    row_float(&mut rows, "treadmill avg speed (mph)", &rec.treadmill_avg_speed);
    row_float(&mut rows, "treadmill max speed (mph)", &rec.treadmill_max_speed);
    row_float(&mut rows, "treadmill avg incline (%)", &rec.treadmill_avg_incline);
    row_float(&mut rows, "treadmill max incline (%)", &rec.treadmill_max_incline);
    row_int(&mut rows, "treadmill avg pace (s/mi)", &rec.treadmill_avg_pace);
    row_int(&mut rows, "treadmill fastest pace (s/mi)", &rec.treadmill_fastest_pace);
    row_float(&mut rows, "treadmill elevation (ft)", &rec.treadmill_elevation);

    row_float(&mut rows, "rowing distance (m)", &rec.rowing_distance);
    row_int(&mut rows, "rowing time (s)", &rec.rowing_time);
    row_int(&mut rows, "rowing avg wattage", &rec.rowing_avg_wattage);
    row_int(&mut rows, "rowing max wattage", &rec.rowing_max_wattage);
    row_float(&mut rows, "rowing avg speed (km/h)", &rec.rowing_avg_speed);
    row_float(&mut rows, "rowing max speed (km/h)", &rec.rowing_max_speed);
    row_int(&mut rows, "rowing 500m split (s)", &rec.rowing_500m_split);
    row_int(&mut rows, "rowing max 500m split (s)", &rec.rowing_max_500m_split);
    row_float(&mut rows, "rowing avg stroke rate", &rec.rowing_avg_stroke_rate);

    row_int(&mut rows, "gray zone (min)", &rec.minutes_in_gray_zone);
    row_int(&mut rows, "blue zone (min)", &rec.minutes_in_blue_zone);
    row_int(&mut rows, "green zone (min)", &rec.minutes_in_green_zone);
    row_int(&mut rows, "orange zone (min)", &rec.minutes_in_orange_zone);
    row_int(&mut rows, "red zone (min)", &rec.minutes_in_red_zone);
    row_int(&mut rows, "active minutes", &rec.active_minutes);

    rows
}
