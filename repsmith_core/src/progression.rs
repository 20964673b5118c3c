//! Week-to-week and day-to-day progression of rep and RPE ranges.
//!
//! This module implements the four progression models:
//! - Linear: reps climb weekly, RPE climbs half a point every two weeks
//! - Undulating: volume and intensity cycle across weeks
//! - Block: three phases moving from volume toward intensity
//! - Conjugate: schemes vary per day of the week instead of per week

use crate::types::{IntensityLevel, Range, VolumeLevel};

/// Progression model selected by the coach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progression {
    Linear,
    Undulating,
    Block,
    Conjugate,
}

impl Progression {
    /// Parse a progression label, case-insensitively. Unknown labels
    /// resolve to `None`, which callers treat as "no adjustment".
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "linear" => Some(Progression::Linear),
            "undulating" => Some(Progression::Undulating),
            "block" => Some(Progression::Block),
            "conjugate" => Some(Progression::Conjugate),
            _ => None,
        }
    }
}

// Weekly cycles for undulating progression. Reps and RPE cycle
// independently, on different orders.
const UNDULATING_VOLUME: [VolumeLevel; 3] =
    [VolumeLevel::High, VolumeLevel::Low, VolumeLevel::Medium];
const UNDULATING_INTENSITY: [IntensityLevel; 3] =
    [IntensityLevel::Low, IntensityLevel::High, IntensityLevel::Medium];

// Daily schemes for conjugate progression: max effort, dynamic effort,
// repetition. The lowest-volume day pairs with the highest intensity.
const CONJUGATE_VOLUME: [VolumeLevel; 3] =
    [VolumeLevel::Low, VolumeLevel::Medium, VolumeLevel::High];
const CONJUGATE_INTENSITY: [IntensityLevel; 3] =
    [IntensityLevel::High, IntensityLevel::Medium, IntensityLevel::Low];

/// Adjust the rep range for a given week and day.
///
/// `week` and `day_of_week` are 1-indexed. Unrecognized progression
/// labels leave the base range unchanged.
pub fn adjust_reps(
    base: Range,
    week: u32,
    total_weeks: u32,
    progression: &str,
    day_of_week: u32,
) -> Range {
    match Progression::parse(progression) {
        Some(Progression::Linear) => {
            // One rep per week on both bounds.
            let increment = week.saturating_sub(1) as i32;
            Range::new(base.low + increment, base.high + increment)
        }
        Some(Progression::Undulating) => {
            let index = (week.saturating_sub(1) % 3) as usize;
            UNDULATING_VOLUME[index].range()
        }
        Some(Progression::Block) => block_volume(week, total_weeks).range(),
        Some(Progression::Conjugate) => {
            let index = (day_of_week.saturating_sub(1) % 3) as usize;
            CONJUGATE_VOLUME[index].range()
        }
        None => base,
    }
}

/// Adjust the RPE range for a given week and day.
///
/// Mirrors `adjust_reps`; unrecognized labels leave the base unchanged.
pub fn adjust_rpe(
    base: Range,
    week: u32,
    total_weeks: u32,
    progression: &str,
    day_of_week: u32,
) -> Range {
    match Progression::parse(progression) {
        Some(Progression::Linear) => {
            // Half an RPE point every two weeks; bounds stay integers, so
            // the .5 is truncated (not rounded) on odd increments.
            let increment = f64::from(week.saturating_sub(1) / 2) * 0.5;
            Range::new(
                (f64::from(base.low) + increment) as i32,
                (f64::from(base.high) + increment) as i32,
            )
        }
        Some(Progression::Undulating) => {
            let index = (week.saturating_sub(1) % 3) as usize;
            UNDULATING_INTENSITY[index].range()
        }
        Some(Progression::Block) => block_intensity(week, total_weeks).range(),
        Some(Progression::Conjugate) => {
            let index = (day_of_week.saturating_sub(1) % 3) as usize;
            CONJUGATE_INTENSITY[index].range()
        }
        None => base,
    }
}

/// Volume phase for block progression: volume first, intensity last.
fn block_volume(week: u32, total_weeks: u32) -> VolumeLevel {
    let third = (total_weeks / 3).max(1);
    if week <= third {
        VolumeLevel::High
    } else if week <= 2 * third {
        VolumeLevel::Medium
    } else {
        VolumeLevel::Low
    }
}

fn block_intensity(week: u32, total_weeks: u32) -> IntensityLevel {
    let third = (total_weeks / 3).max(1);
    if week <= third {
        IntensityLevel::Low
    } else if week <= 2 * third {
        IntensityLevel::Medium
    } else {
        IntensityLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_REPS: Range = Range::new(6, 15);
    const BASE_RPE: Range = Range::new(7, 8);

    #[test]
    fn test_linear_reps_week_one_is_identity() {
        assert_eq!(adjust_reps(BASE_REPS, 1, 8, "Linear", 1), BASE_REPS);
    }

    #[test]
    fn test_linear_reps_add_one_per_week() {
        assert_eq!(adjust_reps(BASE_REPS, 3, 8, "Linear", 1), Range::new(8, 17));
        assert_eq!(
            adjust_reps(BASE_REPS, 8, 8, "Linear", 1),
            Range::new(13, 22)
        );
    }

    #[test]
    fn test_linear_rpe_truncates_half_points() {
        // Weeks 1-2: no increment. Weeks 3-4: +0.5, truncated away on an
        // integer base. Weeks 5-6: +1.
        assert_eq!(adjust_rpe(BASE_RPE, 1, 8, "Linear", 1), BASE_RPE);
        assert_eq!(adjust_rpe(BASE_RPE, 3, 8, "Linear", 1), BASE_RPE);
        assert_eq!(adjust_rpe(BASE_RPE, 4, 8, "Linear", 1), BASE_RPE);
        assert_eq!(adjust_rpe(BASE_RPE, 5, 8, "Linear", 1), Range::new(8, 9));
        assert_eq!(adjust_rpe(BASE_RPE, 7, 8, "Linear", 1), Range::new(8, 9));
        assert_eq!(adjust_rpe(BASE_RPE, 9, 12, "Linear", 1), Range::new(9, 10));
    }

    #[test]
    fn test_undulating_reps_cycle_repeats_every_three_weeks() {
        let week1 = adjust_reps(BASE_REPS, 1, 9, "Undulating", 1);
        let week4 = adjust_reps(BASE_REPS, 4, 9, "Undulating", 1);
        let week7 = adjust_reps(BASE_REPS, 7, 9, "Undulating", 1);

        assert_eq!(week1, VolumeLevel::High.range());
        assert_eq!(week4, week1);
        assert_eq!(week7, week1);

        assert_eq!(
            adjust_reps(BASE_REPS, 2, 9, "Undulating", 1),
            VolumeLevel::Low.range()
        );
        assert_eq!(
            adjust_reps(BASE_REPS, 3, 9, "Undulating", 1),
            VolumeLevel::Medium.range()
        );
    }

    #[test]
    fn test_undulating_rpe_cycles_independently() {
        assert_eq!(
            adjust_rpe(BASE_RPE, 1, 9, "Undulating", 1),
            IntensityLevel::Low.range()
        );
        assert_eq!(
            adjust_rpe(BASE_RPE, 2, 9, "Undulating", 1),
            IntensityLevel::High.range()
        );
        assert_eq!(
            adjust_rpe(BASE_RPE, 3, 9, "Undulating", 1),
            IntensityLevel::Medium.range()
        );
    }

    #[test]
    fn test_block_phases_over_six_weeks() {
        for week in 1..=2 {
            assert_eq!(
                adjust_reps(BASE_REPS, week, 6, "Block", 1),
                VolumeLevel::High.range()
            );
            assert_eq!(
                adjust_rpe(BASE_RPE, week, 6, "Block", 1),
                IntensityLevel::Low.range()
            );
        }
        for week in 3..=4 {
            assert_eq!(
                adjust_reps(BASE_REPS, week, 6, "Block", 1),
                VolumeLevel::Medium.range()
            );
        }
        for week in 5..=6 {
            assert_eq!(
                adjust_reps(BASE_REPS, week, 6, "Block", 1),
                VolumeLevel::Low.range()
            );
            assert_eq!(
                adjust_rpe(BASE_RPE, week, 6, "Block", 1),
                IntensityLevel::High.range()
            );
        }
    }

    #[test]
    fn test_block_short_program_clamps_phase_length() {
        // total_weeks < 3 still gets a one-week volume phase.
        assert_eq!(
            adjust_reps(BASE_REPS, 1, 2, "Block", 1),
            VolumeLevel::High.range()
        );
        assert_eq!(
            adjust_reps(BASE_REPS, 2, 2, "Block", 1),
            VolumeLevel::Medium.range()
        );
    }

    #[test]
    fn test_conjugate_cycles_by_day_not_week() {
        for week in [1, 5] {
            assert_eq!(
                adjust_reps(BASE_REPS, week, 8, "Conjugate", 1),
                VolumeLevel::Low.range()
            );
            assert_eq!(
                adjust_reps(BASE_REPS, week, 8, "Conjugate", 2),
                VolumeLevel::Medium.range()
            );
            assert_eq!(
                adjust_reps(BASE_REPS, week, 8, "Conjugate", 3),
                VolumeLevel::High.range()
            );
            // Day 4 wraps back around.
            assert_eq!(
                adjust_reps(BASE_REPS, week, 8, "Conjugate", 4),
                VolumeLevel::Low.range()
            );
        }
    }

    #[test]
    fn test_conjugate_pairs_low_volume_with_high_intensity() {
        assert_eq!(
            adjust_rpe(BASE_RPE, 1, 8, "Conjugate", 1),
            IntensityLevel::High.range()
        );
        assert_eq!(
            adjust_rpe(BASE_RPE, 1, 8, "Conjugate", 3),
            IntensityLevel::Low.range()
        );
    }

    #[test]
    fn test_unknown_progression_returns_base() {
        assert_eq!(adjust_reps(BASE_REPS, 5, 8, "Wave", 2), BASE_REPS);
        assert_eq!(adjust_rpe(BASE_RPE, 5, 8, "", 2), BASE_RPE);
    }

    #[test]
    fn test_progression_labels_parse_case_insensitively() {
        assert_eq!(Progression::parse("LINEAR"), Some(Progression::Linear));
        assert_eq!(Progression::parse("block"), Some(Progression::Block));
        assert_eq!(
            adjust_reps(BASE_REPS, 3, 8, "linear", 1),
            adjust_reps(BASE_REPS, 3, 8, "Linear", 1)
        );
    }
}
