//! Program assembly engine.
//!
//! This module turns coach parameters into the full week-by-week row
//! table:
//! - Allocate weekly muscle and pattern targets across the training days
//! - Per session, pick exercises, progress the rep/RPE ranges, and split
//!   the day's set total across the chosen exercises
//! - Emit Warm-Up, WOD, and Accessory rows in order

use crate::{
    allocator::{distribute_targets, DaySchedule},
    progression::{adjust_reps, adjust_rpe},
    selector::select_exercises,
    sets::split_sets,
    ExerciseCatalog, IntensityLevel, ProgramParams, Range, Result, Section, SessionRow, Targets,
    VolumeLevel,
};
use rand::Rng;

/// Assemble the full program for the given parameters.
///
/// Rows come back week-major, day-minor, each day emitting its Warm-Up
/// row, WOD rows, and Accessory rows in that order. Degenerate inputs
/// (empty targets, no catalog match) degrade to blank fields; only
/// non-positive week/day counts are rejected.
pub fn generate_program(
    catalog: &ExerciseCatalog,
    params: &ProgramParams,
    rng: &mut impl Rng,
) -> Result<Vec<SessionRow>> {
    params.validate()?;

    let base_reps = VolumeLevel::parse(&params.volume_level)
        .map(VolumeLevel::range)
        .unwrap_or(Range::new(6, 15));
    let base_rpe = IntensityLevel::parse(&params.intensity_level)
        .map(IntensityLevel::range)
        .unwrap_or(Range::new(7, 8));

    let days = params.days_per_week as usize;
    let muscle_schedule = distribute_targets(&params.muscle_targets, days);
    let pattern_schedule = distribute_targets(&params.pattern_targets, days);

    tracing::info!(
        "Assembling {}-week program: {} days/week, {} muscle and {} pattern targets, {} progression",
        params.num_weeks,
        params.days_per_week,
        params.muscle_targets.len(),
        params.pattern_targets.len(),
        params.progression,
    );

    let mut rows = Vec::new();
    for week in 1..=params.num_weeks {
        for day_idx in 0..days {
            let day = day_idx as u32 + 1;
            let mg = schedule_name(&muscle_schedule, day_idx);
            let mp = schedule_name(&pattern_schedule, day_idx);

            let wod_exercises =
                select_exercises(catalog, mg, mp, params.num_wod_exercises, rng);

            // Accessory work rotates one day forward through the same
            // allocated schedules.
            let acc_idx = (day_idx + 1) % days;
            let acc_mg = schedule_name(&muscle_schedule, acc_idx);
            let acc_mp = schedule_name(&pattern_schedule, acc_idx);
            let acc_exercises =
                select_exercises(catalog, acc_mg, acc_mp, params.num_acc_exercises, rng);

            // One range per session, shared by every exercise in it.
            let reps_range =
                adjust_reps(base_reps, week, params.num_weeks, &params.progression, day);
            let rpe_range =
                adjust_rpe(base_rpe, week, params.num_weeks, &params.progression, day);
            let rpe_label = format_rpe(rpe_range);

            let wod_sets = split_sets(
                section_set_total(&params.muscle_targets, mg, params.days_per_week),
                wod_exercises.len(),
            );
            let acc_sets = split_sets(
                section_set_total(&params.muscle_targets, acc_mg, params.days_per_week),
                acc_exercises.len(),
            );

            rows.push(SessionRow {
                week,
                day,
                section: Section::WarmUp,
                style: params.warm_style.clone(),
                muscle_group: String::new(),
                movement_pattern: String::new(),
                exercise: String::new(),
                sets: None,
                reps_time: String::new(),
                rpe_range: rpe_label.clone(),
            });

            for (exercise, sets) in wod_exercises.iter().zip(&wod_sets) {
                rows.push(SessionRow {
                    week,
                    day,
                    section: Section::Wod,
                    style: params.wod_style.clone(),
                    muscle_group: mg.to_string(),
                    movement_pattern: mp.to_string(),
                    exercise: exercise.clone(),
                    sets: (*sets > 0).then_some(*sets),
                    reps_time: reps_time_label(params, reps_range, rng),
                    rpe_range: rpe_label.clone(),
                });
            }

            for (exercise, sets) in acc_exercises.iter().zip(&acc_sets) {
                rows.push(SessionRow {
                    week,
                    day,
                    section: Section::Accessory,
                    style: params.acc_style.clone(),
                    muscle_group: acc_mg.to_string(),
                    movement_pattern: acc_mp.to_string(),
                    exercise: exercise.clone(),
                    sets: (*sets > 0).then_some(*sets),
                    reps_time: reps_time_label(params, reps_range, rng),
                    rpe_range: rpe_label.clone(),
                });
            }
        }
    }

    tracing::debug!("Assembled {} rows", rows.len());
    Ok(rows)
}

fn schedule_name(schedule: &DaySchedule, day_idx: usize) -> &str {
    schedule[day_idx].as_deref().unwrap_or("")
}

/// Sets assigned to a section for one day: the weekly muscle target spread
/// evenly across the week, rounded up. Pattern targets never drive set
/// counts.
fn section_set_total(muscle_targets: &Targets, mg: &str, days_per_week: u32) -> u32 {
    if mg.is_empty() {
        return 0;
    }
    muscle_targets.get(mg).unwrap_or(0).div_ceil(days_per_week)
}

/// Reps/Time cell for one exercise row.
///
/// AMRAP sessions with a format label use the label verbatim (parentheses
/// stripped) for every row; otherwise each row draws its own rep count
/// from the session's range.
fn reps_time_label(params: &ProgramParams, reps: Range, rng: &mut impl Rng) -> String {
    if params.wod_style == "AMRAP" {
        if let Some(format) = params.amrap_format.as_deref().filter(|f| !f.is_empty()) {
            return format.replace(['(', ')'], "");
        }
    }

    // A collapsed or inverted range degrades to its low bound.
    let value = if reps.low >= reps.high {
        reps.low
    } else {
        rng.gen_range(reps.low..=reps.high)
    };
    format!("{} reps", value)
}

fn format_rpe(range: Range) -> String {
    if range.low == range.high {
        format!("{} RPE", range.low)
    } else {
        format!("{}-{} RPE", range.low, range.high)
    }
}
