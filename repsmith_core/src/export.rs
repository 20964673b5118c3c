//! Program table export.
//!
//! Serializes assembled rows to CSV or JSON with the fixed column layout
//! expected by downstream spreadsheet tooling. The engine itself knows
//! nothing about the sink.

use crate::{Result, SessionRow};
use std::io::Write;

/// A row in the exported table
#[derive(Debug, serde::Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Week")]
    week: u32,
    #[serde(rename = "Day")]
    day: u32,
    #[serde(rename = "Section")]
    section: &'static str,
    #[serde(rename = "Style")]
    style: &'a str,
    #[serde(rename = "Muscle Group")]
    muscle_group: &'a str,
    #[serde(rename = "Movement Pattern")]
    movement_pattern: &'a str,
    #[serde(rename = "Exercise")]
    exercise: &'a str,
    #[serde(rename = "Sets")]
    sets: Option<u32>,
    #[serde(rename = "Reps/Time")]
    reps_time: &'a str,
    #[serde(rename = "RPE Range")]
    rpe_range: &'a str,
}

impl<'a> From<&'a SessionRow> for ExportRow<'a> {
    fn from(row: &'a SessionRow) -> Self {
        ExportRow {
            week: row.week,
            day: row.day,
            section: row.section.label(),
            style: &row.style,
            muscle_group: &row.muscle_group,
            movement_pattern: &row.movement_pattern,
            exercise: &row.exercise,
            sets: row.sets,
            reps_time: &row.reps_time,
            rpe_range: &row.rpe_range,
        }
    }
}

/// Write the program as CSV with a header row.
pub fn write_csv<W: Write>(rows: &[SessionRow], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for row in rows {
        writer.serialize(ExportRow::from(row))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the program as pretty-printed JSON.
pub fn write_json<W: Write>(rows: &[SessionRow], writer: W) -> Result<()> {
    let export: Vec<ExportRow> = rows.iter().map(ExportRow::from).collect();
    serde_json::to_writer_pretty(writer, &export)?;
    Ok(())
}
