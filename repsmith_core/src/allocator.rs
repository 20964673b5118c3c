//! Proportional allocation of weekly targets across training days.
//!
//! Each target gets a share of the week's days proportional to its weekly
//! set count, rounded with a largest-remainder pass, then the flat
//! allocation is interleaved so days for the same target are not
//! unnecessarily adjacent.

use crate::Targets;

/// A week of day assignments, one entry per training day.
///
/// `None` means no target is assigned to that day.
pub type DaySchedule = Vec<Option<String>>;

/// Distribute targets proportionally across `num_days` training days.
///
/// Returns a schedule of exactly `num_days` entries. With no targets the
/// schedule is all-`None`; with a single target it repeats on every day.
/// Callers filter zero-set targets out before invoking this.
pub fn distribute_targets(targets: &Targets, num_days: usize) -> DaySchedule {
    if targets.is_empty() || num_days == 0 {
        return vec![None; num_days];
    }

    // Counts are clamped to 1 in the total so no target loses its day share.
    let total: f64 = targets.iter().map(|(_, c)| f64::from(c.max(1))).sum();

    // Real-valued fair share of days per target.
    let weights: Vec<(&str, f64)> = targets
        .iter()
        .map(|(name, c)| (name, f64::from(c) / total * num_days as f64))
        .collect();

    let mut schedule: Vec<&str> = Vec::with_capacity(num_days);
    for &(name, weight) in &weights {
        for _ in 0..weight.floor() as usize {
            schedule.push(name);
        }
    }

    // Hand out the leftover days by largest fractional remainder, ties
    // broken by the descending (fraction, name) order, cycling if needed.
    let mut fractional: Vec<(f64, &str)> = weights
        .iter()
        .map(|&(name, weight)| (weight - weight.floor(), name))
        .collect();
    fractional.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| b.1.cmp(a.1)));

    let mut i = 0;
    while schedule.len() < num_days {
        schedule.push(fractional[i % fractional.len()].1);
        i += 1;
    }

    // Interleave in original input order to avoid clumping.
    let mut counts: Vec<(&str, usize)> = targets
        .names()
        .map(|name| (name, schedule.iter().filter(|&&s| s == name).count()))
        .collect();

    let mut interleaved: DaySchedule = Vec::with_capacity(num_days);
    while interleaved.len() < num_days {
        for (name, count) in &mut counts {
            if *count > 0 {
                interleaved.push(Some((*name).to_string()));
                *count -= 1;
                if interleaved.len() == num_days {
                    break;
                }
            }
        }
    }

    interleaved
}
