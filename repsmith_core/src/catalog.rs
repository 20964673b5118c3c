//! Built-in exercise catalog.
//!
//! This module provides the default (muscle group, movement pattern) →
//! exercises lookup table. Coaches can extend it through configuration;
//! the engine only ever reads it.

use crate::types::{CatalogEntry, ExerciseCatalog};
use once_cell::sync::Lazy;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<ExerciseCatalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static ExerciseCatalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog of exercises
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns
/// a cached reference. This function is retained for testing and for callers
/// that extend the catalog with custom entries.
pub fn build_default_catalog() -> ExerciseCatalog {
    build_default_catalog_internal()
}

fn entry(muscle_group: &str, movement_pattern: &str, exercises: &[&str]) -> CatalogEntry {
    CatalogEntry {
        muscle_group: muscle_group.into(),
        movement_pattern: movement_pattern.into(),
        exercises: exercises.iter().map(|e| (*e).to_string()).collect(),
    }
}

/// Internal function that actually builds the catalog
fn build_default_catalog_internal() -> ExerciseCatalog {
    let mut catalog = ExerciseCatalog::new();

    catalog.push(entry(
        "Legs – Quads",
        "Squat",
        &["Air Squat", "Goblet Squat", "Barbell Back Squat"],
    ));
    catalog.push(entry(
        "Legs – Hamstrings",
        "Hinge",
        &["Romanian Deadlift", "Barbell Deadlift"],
    ));
    catalog.push(entry("Glutes", "Hinge", &["Glute Bridge", "Hip Thrust"]));
    catalog.push(entry(
        "Chest",
        "Push – Horizontal",
        &["Push-Up", "Bench Press"],
    ));
    catalog.push(entry("Back", "Pull – Vertical", &["Pull-Up"]));
    catalog.push(entry("Back", "Pull – Horizontal", &["Bent-Over Row"]));
    catalog.push(entry("Core", "Core – Stability", &["Plank"]));
    catalog.push(entry("Core", "Core – Rotation", &["Weighted Russian Twist"]));
    catalog.push(entry("Full Body", "Carry", &["Farmer's Carry"]));

    catalog
}

impl ExerciseCatalog {
    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen: Vec<(&str, &str)> = Vec::new();

        for e in self.entries() {
            if e.muscle_group.is_empty() && e.movement_pattern.is_empty() {
                errors.push("Catalog entry has neither muscle group nor movement pattern".into());
            }
            if e.exercises.is_empty() {
                errors.push(format!(
                    "Entry '{} / {}' lists no exercises",
                    e.muscle_group, e.movement_pattern
                ));
            }
            for exercise in &e.exercises {
                if exercise.is_empty() {
                    errors.push(format!(
                        "Entry '{} / {}' has an empty exercise name",
                        e.muscle_group, e.movement_pattern
                    ));
                }
            }

            let key = (e.muscle_group.as_str(), e.movement_pattern.as_str());
            if seen.contains(&key) {
                errors.push(format!(
                    "Duplicate entry for '{} / {}'",
                    e.muscle_group, e.movement_pattern
                ));
            } else {
                seen.push(key);
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_exact_pair_lists_expected_exercises() {
        let catalog = build_default_catalog();
        let chest = catalog.find("Chest", "Push – Horizontal").unwrap();
        assert_eq!(chest.exercises, vec!["Push-Up", "Bench Press"]);
    }

    #[test]
    fn test_default_catalog_validates() {
        let catalog = build_default_catalog();
        let errors = catalog.validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_validate_flags_duplicate_pairs() {
        let mut catalog = build_default_catalog();
        catalog.push(entry("Chest", "Push – Horizontal", &["Dumbbell Press"]));

        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("Duplicate entry")));
    }

    #[test]
    fn test_validate_flags_empty_exercise_list() {
        let mut catalog = ExerciseCatalog::new();
        catalog.push(entry("Shoulders", "Push – Vertical", &[]));

        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("lists no exercises")));
    }

    #[test]
    fn test_cached_catalog_matches_built() {
        assert_eq!(get_default_catalog().len(), build_default_catalog().len());
    }
}
