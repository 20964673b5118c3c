//! Exercise selection with fallback rules.
//!
//! Maps a (muscle group, movement pattern) pair to concrete exercises.
//! When the exact pair has no catalog entry, selection widens to entries
//! sharing the muscle group, then the movement pattern, then the whole
//! catalog.

use crate::ExerciseCatalog;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick a single exercise for the given muscle group and movement pattern.
///
/// Lookup order: exact pair match, then the first catalog entry for the
/// muscle group, then the first entry for the movement pattern.
pub fn choose_exercise<'a>(
    catalog: &'a ExerciseCatalog,
    muscle_group: &str,
    movement_pattern: &str,
) -> Option<&'a str> {
    if let Some(exercise) = catalog
        .find(muscle_group, movement_pattern)
        .and_then(|e| e.exercises.first())
    {
        return Some(exercise);
    }

    // Fallback to matching by muscle group
    for entry in catalog.entries() {
        if entry.muscle_group == muscle_group {
            if let Some(exercise) = entry.exercises.first() {
                return Some(exercise);
            }
        }
    }

    // Fallback to matching by movement pattern
    for entry in catalog.entries() {
        if entry.movement_pattern == movement_pattern {
            if let Some(exercise) = entry.exercises.first() {
                return Some(exercise);
            }
        }
    }

    None
}

/// Select `count` exercises for one session.
///
/// The candidate pool is built from exact pair matches, then entries
/// sharing the muscle group, then entries sharing the movement pattern
/// (same-group entries already counted), falling back to the whole catalog
/// only when the pool would otherwise be empty. The deduplicated pool is
/// exhausted in a freshly shuffled order before any name repeats.
///
/// With an empty catalog the result is `count` blank names, so callers can
/// still emit rows.
pub fn select_exercises(
    catalog: &ExerciseCatalog,
    muscle_group: &str,
    movement_pattern: &str,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }

    let mut choices: Vec<&str> = Vec::new();

    // Primary matches
    if let Some(entry) = catalog.find(muscle_group, movement_pattern) {
        choices.extend(entry.exercises.iter().map(String::as_str));
    }

    // Secondary matches: same muscle group
    for entry in catalog.entries() {
        if entry.muscle_group == muscle_group && entry.movement_pattern != movement_pattern {
            choices.extend(entry.exercises.iter().map(String::as_str));
        }
    }

    // Secondary matches: same pattern
    for entry in catalog.entries() {
        if entry.movement_pattern == movement_pattern && entry.muscle_group != muscle_group {
            choices.extend(entry.exercises.iter().map(String::as_str));
        }
    }

    // If still empty, draw from the entire catalog
    if choices.is_empty() {
        for entry in catalog.entries() {
            choices.extend(entry.exercises.iter().map(String::as_str));
        }
    }

    // Deduplicate preserving first-seen order
    let mut pool: Vec<&str> = Vec::new();
    for exercise in choices {
        if !pool.contains(&exercise) {
            pool.push(exercise);
        }
    }

    if pool.is_empty() {
        return vec![String::new(); count];
    }

    // Refill cycles: every pool member appears before any name repeats.
    let mut result = Vec::with_capacity(count);
    while result.len() < count {
        let mut cycle = pool.clone();
        cycle.shuffle(rng);
        for exercise in cycle {
            result.push(exercise.to_string());
            if result.len() == count {
                break;
            }
        }
    }

    result
}
