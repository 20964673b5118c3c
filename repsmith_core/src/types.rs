//! Core domain types for the repsmith program generator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Rep/RPE ranges and the volume/intensity level tables
//! - Weekly set targets
//! - The exercise catalog
//! - Program parameters and output rows

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Ranges and Levels
// ============================================================================

/// An inclusive (low, high) pair of reps or RPE.
///
/// `low <= high` is expected but not enforced; the engine degrades
/// gracefully on degenerate ranges instead of rejecting them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub low: i32,
    pub high: i32,
}

impl Range {
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }
}

/// Base volume level selected by the coach.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VolumeLevel {
    Low,
    Medium,
    High,
}

impl VolumeLevel {
    /// Rep range for this level. High volume treats 12+ as 12-15 for
    /// numeric purposes.
    pub const fn range(self) -> Range {
        match self {
            VolumeLevel::Low => Range::new(2, 8),
            VolumeLevel::Medium => Range::new(6, 15),
            VolumeLevel::High => Range::new(12, 15),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            VolumeLevel::Low => "Low Volume",
            VolumeLevel::Medium => "Medium Volume",
            VolumeLevel::High => "High Volume",
        }
    }

    /// Resolve a level from its display label.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Low Volume" => Some(VolumeLevel::Low),
            "Medium Volume" => Some(VolumeLevel::Medium),
            "High Volume" => Some(VolumeLevel::High),
            _ => None,
        }
    }
}

/// Base intensity level selected by the coach.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    Low,
    Medium,
    High,
}

impl IntensityLevel {
    /// RPE range for this level.
    pub const fn range(self) -> Range {
        match self {
            IntensityLevel::Low => Range::new(6, 7),
            IntensityLevel::Medium => Range::new(7, 8),
            IntensityLevel::High => Range::new(9, 10),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            IntensityLevel::Low => "Low Intensity",
            IntensityLevel::Medium => "Medium Intensity",
            IntensityLevel::High => "High Intensity",
        }
    }

    /// Resolve a level from its display label.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Low Intensity" => Some(IntensityLevel::Low),
            "Medium Intensity" => Some(IntensityLevel::Medium),
            "High Intensity" => Some(IntensityLevel::High),
            _ => None,
        }
    }
}

// ============================================================================
// Targets
// ============================================================================

/// Weekly set targets, name-unique and insertion-ordered.
///
/// Allocation tie-breaking and day interleaving both follow the order in
/// which targets were entered, so this is a sequence rather than a map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targets(Vec<(String, u32)>);

impl Targets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weekly count for a target, replacing an existing entry in
    /// place (the target keeps its original position).
    pub fn set(&mut self, name: impl Into<String>, sets: u32) {
        let name = name.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count = sets,
            None => self.0.push((name, sets)),
        }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Targets {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut targets = Targets::new();
        for (name, sets) in iter {
            targets.set(name, sets);
        }
        targets
    }
}

// ============================================================================
// Exercise Catalog
// ============================================================================

/// The exercises available for one (muscle group, movement pattern) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub muscle_group: String,
    pub movement_pattern: String,
    pub exercises: Vec<String>,
}

/// The read-only exercise catalog.
///
/// Entries keep their insertion order: the selector's fallback rules pick
/// the first entry in catalog order that matches.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExerciseCatalog {
    entries: Vec<CatalogEntry>,
}

impl ExerciseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    /// Append entries after the existing ones, preserving their order.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = CatalogEntry>) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// First entry matching the pair exactly.
    pub fn find(&self, muscle_group: &str, movement_pattern: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.muscle_group == muscle_group && e.movement_pattern == movement_pattern)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Program Parameters
// ============================================================================

/// Coach-selected parameters for one generation run.
///
/// Style, level, and progression fields carry the display labels supplied
/// by the input boundary; unknown labels degrade to built-in defaults
/// rather than failing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramParams {
    pub num_weeks: u32,
    pub days_per_week: u32,
    pub muscle_targets: Targets,
    pub pattern_targets: Targets,
    pub warm_style: String,
    pub wod_style: String,
    pub acc_style: String,
    pub volume_level: String,
    pub intensity_level: String,
    pub progression: String,
    pub num_wod_exercises: usize,
    pub num_acc_exercises: usize,
    pub amrap_format: Option<String>,
}

impl Default for ProgramParams {
    fn default() -> Self {
        Self {
            num_weeks: 8,
            days_per_week: 3,
            muscle_targets: Targets::new(),
            pattern_targets: Targets::new(),
            warm_style: WARM_UP_TYPES[0].to_string(),
            wod_style: WOD_STYLES[0].to_string(),
            acc_style: WOD_STYLES[0].to_string(),
            volume_level: VolumeLevel::Low.label().to_string(),
            intensity_level: IntensityLevel::Low.label().to_string(),
            progression: PROGRESSION_TYPES[0].to_string(),
            num_wod_exercises: 2,
            num_acc_exercises: 2,
            amrap_format: None,
        }
    }
}

impl ProgramParams {
    /// Reject parameters that cannot produce a program.
    pub fn validate(&self) -> Result<()> {
        if self.num_weeks == 0 {
            return Err(Error::Params("number of weeks must be at least 1".into()));
        }
        if self.days_per_week == 0 {
            return Err(Error::Params("days per week must be at least 1".into()));
        }
        Ok(())
    }
}

// ============================================================================
// Output Rows
// ============================================================================

/// Section of a training session, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "Warm-Up")]
    WarmUp,
    #[serde(rename = "WOD")]
    Wod,
    Accessory,
}

impl Section {
    pub const fn label(self) -> &'static str {
        match self {
            Section::WarmUp => "Warm-Up",
            Section::Wod => "WOD",
            Section::Accessory => "Accessory",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of program output.
///
/// `sets == None` and empty strings render as blank fields on export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRow {
    pub week: u32,
    pub day: u32,
    pub section: Section,
    pub style: String,
    pub muscle_group: String,
    pub movement_pattern: String,
    pub exercise: String,
    pub sets: Option<u32>,
    pub reps_time: String,
    pub rpe_range: String,
}

// ============================================================================
// Selection Lists
// ============================================================================

/// WOD and accessory style options.
pub const WOD_STYLES: &[&str] = &["AMRAP", "For Time", "OTM/EMOM", "Tabata", "Alternating"];

/// Muscle groups a coach can target.
pub const MUSCLE_GROUPS: &[&str] = &[
    "Full Body",
    "Legs – Quads",
    "Legs – Hamstrings",
    "Glutes",
    "Chest",
    "Back",
    "Shoulders",
    "Arms",
    "Core",
];

/// Movement patterns a coach can target.
pub const MOVEMENT_PATTERNS: &[&str] = &[
    "Squat",
    "Hinge",
    "Push – Horizontal",
    "Push – Vertical",
    "Pull – Horizontal",
    "Pull – Vertical",
    "Carry",
    "Core – Stability",
    "Core – Rotation",
];

/// Warm-up styles.
pub const WARM_UP_TYPES: &[&str] = &[
    "Dynamic Warm-Up + Activation",
    "Pre-exhaust Warm-Up",
    "Activation & Mobility",
    "Traditional Warm-Up",
];

/// Progression model labels.
pub const PROGRESSION_TYPES: &[&str] = &["Linear", "Undulating", "Block", "Conjugate"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_preserve_insertion_order() {
        let mut targets = Targets::new();
        targets.set("Chest", 6);
        targets.set("Back", 3);
        targets.set("Core", 4);

        let names: Vec<_> = targets.names().collect();
        assert_eq!(names, vec!["Chest", "Back", "Core"]);
    }

    #[test]
    fn test_targets_replace_keeps_position() {
        let mut targets = Targets::new();
        targets.set("Chest", 6);
        targets.set("Back", 3);
        targets.set("Chest", 9);

        let entries: Vec<_> = targets.iter().collect();
        assert_eq!(entries, vec![("Chest", 9), ("Back", 3)]);
    }

    #[test]
    fn test_volume_level_labels_roundtrip() {
        for level in [VolumeLevel::Low, VolumeLevel::Medium, VolumeLevel::High] {
            assert_eq!(VolumeLevel::parse(level.label()), Some(level));
        }
        assert_eq!(VolumeLevel::parse("Extreme Volume"), None);
    }

    #[test]
    fn test_intensity_level_ranges() {
        assert_eq!(IntensityLevel::Low.range(), Range::new(6, 7));
        assert_eq!(IntensityLevel::Medium.range(), Range::new(7, 8));
        assert_eq!(IntensityLevel::High.range(), Range::new(9, 10));
    }

    #[test]
    fn test_catalog_find_returns_first_match() {
        let mut catalog = ExerciseCatalog::new();
        catalog.push(CatalogEntry {
            muscle_group: "Chest".into(),
            movement_pattern: "Push – Horizontal".into(),
            exercises: vec!["Push-Up".into()],
        });
        catalog.push(CatalogEntry {
            muscle_group: "Chest".into(),
            movement_pattern: "Push – Vertical".into(),
            exercises: vec!["Overhead Press".into()],
        });

        let entry = catalog.find("Chest", "Push – Horizontal").unwrap();
        assert_eq!(entry.exercises[0], "Push-Up");
        assert!(catalog.find("Chest", "Hinge").is_none());
    }

    #[test]
    fn test_params_validate_rejects_zero_weeks() {
        let params = ProgramParams {
            num_weeks: 0,
            ..ProgramParams::default()
        };
        assert!(params.validate().is_err());

        let params = ProgramParams {
            days_per_week: 0,
            ..ProgramParams::default()
        };
        assert!(params.validate().is_err());

        assert!(ProgramParams::default().validate().is_ok());
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(Section::WarmUp.to_string(), "Warm-Up");
        assert_eq!(Section::Wod.to_string(), "WOD");
        assert_eq!(Section::Accessory.to_string(), "Accessory");
    }
}
