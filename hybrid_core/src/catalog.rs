//! Default catalog of cardio templates and exercises.
//!
//! The catalog is plain data: the engine only ever reads it. Entry order is
//! significant, since every selection is a first-fit scan in catalog order.

use crate::types::*;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

/// Cached default catalog - built once and shared read-only
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds a fresh copy of the default catalog
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference. This function is retained for tests and custom catalogs.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

fn cardio(
    id: &str,
    title: &str,
    cardio_type: CardioType,
    duration: u32,
    intensity: Intensity,
) -> CardioTemplate {
    CardioTemplate {
        id: id.into(),
        title: title.into(),
        cardio_type,
        duration,
        intensity,
    }
}

fn exercise(
    id: &str,
    name: &str,
    pattern: MovementPattern,
    equipment: &[Equipment],
    muscle_groups: &[&str],
    avoid_if_injury: &[&str],
) -> ExerciseTemplate {
    ExerciseTemplate {
        id: id.into(),
        name: name.into(),
        pattern,
        equipment: equipment.to_vec(),
        muscle_groups: muscle_groups.iter().map(|m| m.to_string()).collect(),
        avoid_if_injury: avoid_if_injury.iter().map(|i| i.to_string()).collect(),
    }
}

fn build_default_catalog_internal() -> Catalog {
    use CardioType::*;
    use Equipment::*;
    use Intensity::*;
    use MovementPattern::*;

    // ========================================================================
    // Cardio Templates
    // ========================================================================

    let cardio = vec![
        cardio("run_easy", "Easy Run", Run, 30, Easy),
        cardio("run_intervals", "Run Intervals", Run, 45, Hard),
        cardio("run_tempo", "Tempo Run", Run, 40, Hard),
        cardio("run_long", "Long Run", Run, 75, Moderate),
        cardio("bike_easy", "Easy Spin", Bike, 45, Easy),
        cardio("bike_recovery", "Recovery Bike", Bike, 25, Easy),
        cardio("bike_zone2", "Zone 2 Ride", Bike, 40, Moderate),
        cardio("bike_intervals", "Bike VO2 Intervals", Bike, 50, Hard),
        cardio("bike_threshold", "Threshold Bike", Bike, 60, Hard),
        cardio("bike_long", "Long Ride", Bike, 120, Moderate),
        cardio("swim_easy", "Easy Swim", Swim, 30, Easy),
        cardio("swim_intervals", "Swim Intervals", Swim, 45, Hard),
        cardio("swim_endurance", "Endurance Swim", Swim, 50, Moderate),
        cardio("row_easy", "Easy Row", Row, 25, Easy),
        cardio("row_steady", "Steady Row", Row, 30, Moderate),
        cardio("row_intervals", "Row Intervals", Row, 30, Hard),
        cardio("hiit_circuit", "HIIT Circuit", Hiit, 20, Hard),
        cardio("walk_incline", "Incline Walk", Walk, 35, Easy),
    ];

    // ========================================================================
    // Exercises (within a pattern, preferred variants first)
    // ========================================================================

    let exercises = vec![
        // Chest press
        exercise(
            "bb_bench",
            "Barbell Bench Press",
            ChestPress,
            &[Barbell],
            &["chest", "triceps", "front_delts"],
            &["shoulders"],
        ),
        exercise(
            "db_bench",
            "Dumbbell Bench Press",
            ChestPress,
            &[Dumbbells],
            &["chest", "triceps", "front_delts"],
            &[],
        ),
        exercise(
            "incline_bb_press",
            "Incline Barbell Press",
            ChestPress,
            &[Barbell],
            &["upper_chest", "front_delts", "triceps"],
            &["shoulders"],
        ),
        exercise(
            "incline_db_press",
            "Incline Dumbbell Press",
            ChestPress,
            &[Dumbbells],
            &["upper_chest", "front_delts", "triceps"],
            &["shoulders"],
        ),
        exercise(
            "machine_chest_press",
            "Machine Chest Press",
            ChestPress,
            &[Machine],
            &["chest", "triceps"],
            &[],
        ),
        exercise(
            "push_up",
            "Push-Up",
            ChestPress,
            &[Bodyweight],
            &["chest", "triceps", "core"],
            &["wrists"],
        ),
        exercise(
            "feet_elevated_push_up",
            "Feet-Elevated Push-Up",
            ChestPress,
            &[Bodyweight],
            &["upper_chest", "triceps"],
            &["wrists", "shoulders"],
        ),
        // Shoulder press
        exercise(
            "ohp",
            "Overhead Press",
            ShoulderPress,
            &[Barbell],
            &["front_delts", "triceps", "upper_back"],
            &["shoulders", "lower_back"],
        ),
        exercise(
            "seated_db_press",
            "Seated Dumbbell Shoulder Press",
            ShoulderPress,
            &[Dumbbells],
            &["front_delts", "side_delts", "triceps"],
            &["shoulders"],
        ),
        exercise(
            "landmine_press",
            "Landmine Press",
            ShoulderPress,
            &[Barbell],
            &["front_delts", "upper_chest"],
            &[],
        ),
        exercise(
            "arnold_press",
            "Arnold Press",
            ShoulderPress,
            &[Dumbbells],
            &["front_delts", "side_delts"],
            &["shoulders"],
        ),
        exercise(
            "kb_press",
            "Kettlebell Press",
            ShoulderPress,
            &[Kettlebell],
            &["front_delts", "triceps"],
            &["shoulders"],
        ),
        exercise(
            "pike_push_up",
            "Pike Push-Up",
            ShoulderPress,
            &[Bodyweight],
            &["front_delts", "triceps"],
            &["shoulders", "wrists"],
        ),
        // Chest isolation
        exercise("cable_fly", "Cable Fly", ChestIsolation, &[Cable], &["chest"], &["shoulders"]),
        exercise("pec_deck", "Pec Deck", ChestIsolation, &[Machine], &["chest"], &["shoulders"]),
        exercise(
            "db_fly",
            "Dumbbell Fly",
            ChestIsolation,
            &[Dumbbells],
            &["chest"],
            &["shoulders"],
        ),
        exercise(
            "wide_push_up",
            "Wide Push-Up",
            ChestIsolation,
            &[Bodyweight],
            &["chest"],
            &["wrists"],
        ),
        // Lateral raise
        exercise(
            "cable_lateral_raise",
            "Cable Lateral Raise",
            LateralRaise,
            &[Cable],
            &["side_delts"],
            &["shoulders"],
        ),
        exercise(
            "db_lateral_raise",
            "Dumbbell Lateral Raise",
            LateralRaise,
            &[Dumbbells],
            &["side_delts"],
            &["shoulders"],
        ),
        exercise(
            "machine_lateral_raise",
            "Machine Lateral Raise",
            LateralRaise,
            &[Machine],
            &["side_delts"],
            &["shoulders"],
        ),
        // Rear delt
        exercise("face_pull", "Face Pull", RearDelt, &[Cable], &["rear_delts", "upper_back"], &[]),
        exercise(
            "reverse_pec_deck",
            "Reverse Pec Deck",
            RearDelt,
            &[Machine],
            &["rear_delts"],
            &[],
        ),
        exercise(
            "db_rear_delt_fly",
            "Dumbbell Rear Delt Fly",
            RearDelt,
            &[Dumbbells],
            &["rear_delts"],
            &[],
        ),
        exercise(
            "prone_y_raise",
            "Prone Y-Raise",
            RearDelt,
            &[Bodyweight],
            &["rear_delts", "lower_traps"],
            &[],
        ),
        // Triceps
        exercise("cable_pushdown", "Cable Triceps Pushdown", Triceps, &[Cable], &["triceps"], &[]),
        exercise(
            "skull_crusher",
            "Skull Crusher",
            Triceps,
            &[Barbell, Dumbbells],
            &["triceps"],
            &["elbows"],
        ),
        exercise(
            "overhead_db_extension",
            "Overhead Dumbbell Triceps Extension",
            Triceps,
            &[Dumbbells],
            &["triceps"],
            &["shoulders", "elbows"],
        ),
        exercise(
            "diamond_push_up",
            "Diamond Push-Up",
            Triceps,
            &[Bodyweight],
            &["triceps", "chest"],
            &["wrists"],
        ),
        exercise("bench_dip", "Bench Dip", Triceps, &[Bodyweight], &["triceps"], &["shoulders"]),
        // Vertical pull
        exercise(
            "pull_up",
            "Pull-Up",
            VerticalPull,
            &[PullUpBar],
            &["lats", "biceps"],
            &["elbows"],
        ),
        exercise(
            "lat_pulldown",
            "Lat Pulldown",
            VerticalPull,
            &[Cable, Machine],
            &["lats", "biceps"],
            &[],
        ),
        exercise(
            "chin_up",
            "Chin-Up",
            VerticalPull,
            &[PullUpBar],
            &["lats", "biceps"],
            &["elbows"],
        ),
        exercise(
            "db_pullover",
            "Dumbbell Pullover",
            VerticalPull,
            &[Dumbbells],
            &["lats", "chest"],
            &["shoulders"],
        ),
        // Horizontal pull
        exercise(
            "bb_row",
            "Barbell Row",
            HorizontalPull,
            &[Barbell],
            &["upper_back", "lats", "biceps"],
            &["lower_back"],
        ),
        exercise(
            "one_arm_db_row",
            "One-Arm Dumbbell Row",
            HorizontalPull,
            &[Dumbbells],
            &["lats", "upper_back", "biceps"],
            &[],
        ),
        exercise(
            "seated_cable_row",
            "Seated Cable Row",
            HorizontalPull,
            &[Cable],
            &["upper_back", "lats"],
            &[],
        ),
        exercise(
            "chest_supported_row",
            "Chest-Supported Dumbbell Row",
            HorizontalPull,
            &[Dumbbells],
            &["upper_back", "rear_delts"],
            &[],
        ),
        exercise(
            "kb_row",
            "Kettlebell Row",
            HorizontalPull,
            &[Kettlebell],
            &["lats", "upper_back"],
            &[],
        ),
        exercise(
            "inverted_row",
            "Inverted Row",
            HorizontalPull,
            &[Bodyweight, PullUpBar],
            &["upper_back", "biceps"],
            &[],
        ),
        // Biceps
        exercise("bb_curl", "Barbell Curl", Biceps, &[Barbell], &["biceps"], &["elbows"]),
        exercise("db_curl", "Dumbbell Curl", Biceps, &[Dumbbells], &["biceps"], &[]),
        exercise("cable_curl", "Cable Curl", Biceps, &[Cable], &["biceps"], &[]),
        exercise("hammer_curl", "Hammer Curl", Biceps, &[Dumbbells], &["biceps", "forearms"], &[]),
        // Squat
        exercise(
            "back_squat",
            "Back Squat",
            Squat,
            &[Barbell],
            &["quads", "glutes", "core"],
            &["knees", "lower_back"],
        ),
        exercise(
            "front_squat",
            "Front Squat",
            Squat,
            &[Barbell],
            &["quads", "core"],
            &["knees", "wrists"],
        ),
        exercise(
            "goblet_squat",
            "Goblet Squat",
            Squat,
            &[Dumbbells, Kettlebell],
            &["quads", "glutes"],
            &["knees"],
        ),
        exercise(
            "leg_press",
            "Leg Press",
            Squat,
            &[Machine],
            &["quads", "glutes"],
            &["lower_back"],
        ),
        exercise(
            "bodyweight_squat",
            "Bodyweight Squat",
            Squat,
            &[Bodyweight],
            &["quads", "glutes"],
            &[],
        ),
        exercise("box_squat", "Box Squat", Squat, &[Bodyweight], &["quads", "glutes"], &[]),
        // Hinge
        exercise(
            "deadlift",
            "Conventional Deadlift",
            Hinge,
            &[Barbell],
            &["hamstrings", "glutes", "lower_back"],
            &["lower_back"],
        ),
        exercise(
            "rdl",
            "Romanian Deadlift",
            Hinge,
            &[Barbell, Dumbbells],
            &["hamstrings", "glutes"],
            &["lower_back"],
        ),
        exercise(
            "kb_swing",
            "Kettlebell Swing",
            Hinge,
            &[Kettlebell],
            &["glutes", "hamstrings"],
            &["lower_back"],
        ),
        exercise("hip_thrust", "Hip Thrust", Hinge, &[Barbell, Dumbbells], &["glutes"], &[]),
        exercise(
            "glute_bridge",
            "Glute Bridge",
            Hinge,
            &[Bodyweight],
            &["glutes", "hamstrings"],
            &[],
        ),
        exercise(
            "single_leg_glute_bridge",
            "Single-Leg Glute Bridge",
            Hinge,
            &[Bodyweight],
            &["glutes", "hamstrings"],
            &[],
        ),
        // Single leg
        exercise(
            "bulgarian_split_squat",
            "Bulgarian Split Squat",
            SingleLeg,
            &[Dumbbells, Bodyweight],
            &["quads", "glutes"],
            &["knees"],
        ),
        exercise(
            "walking_lunge",
            "Walking Lunge",
            SingleLeg,
            &[Dumbbells, Bodyweight],
            &["quads", "glutes"],
            &["knees"],
        ),
        exercise(
            "single_leg_rdl",
            "Single-Leg Romanian Deadlift",
            SingleLeg,
            &[Dumbbells, Kettlebell],
            &["hamstrings", "glutes"],
            &[],
        ),
        exercise(
            "step_up",
            "Step-Up",
            SingleLeg,
            &[Dumbbells, Bodyweight],
            &["quads", "glutes"],
            &["knees"],
        ),
        exercise(
            "reverse_lunge",
            "Reverse Lunge",
            SingleLeg,
            &[Bodyweight],
            &["quads", "glutes"],
            &[],
        ),
        // Quad isolation
        exercise(
            "leg_extension",
            "Leg Extension",
            QuadIsolation,
            &[Machine],
            &["quads"],
            &["knees"],
        ),
        exercise(
            "sissy_squat",
            "Sissy Squat",
            QuadIsolation,
            &[Bodyweight],
            &["quads"],
            &["knees"],
        ),
        exercise("wall_sit", "Wall Sit", QuadIsolation, &[Bodyweight], &["quads"], &[]),
        // Hamstring isolation
        exercise(
            "lying_leg_curl",
            "Lying Leg Curl",
            HamstringIsolation,
            &[Machine],
            &["hamstrings"],
            &[],
        ),
        exercise(
            "seated_leg_curl",
            "Seated Leg Curl",
            HamstringIsolation,
            &[Machine],
            &["hamstrings"],
            &[],
        ),
        exercise(
            "db_leg_curl",
            "Dumbbell Leg Curl",
            HamstringIsolation,
            &[Dumbbells],
            &["hamstrings"],
            &[],
        ),
        exercise(
            "nordic_curl",
            "Nordic Curl",
            HamstringIsolation,
            &[Bodyweight],
            &["hamstrings"],
            &["knees"],
        ),
        exercise(
            "slider_leg_curl",
            "Slider Leg Curl",
            HamstringIsolation,
            &[Bodyweight],
            &["hamstrings", "glutes"],
            &[],
        ),
        // Calf
        exercise("standing_calf_raise", "Standing Calf Raise", Calf, &[Machine], &["calves"], &[]),
        exercise("seated_calf_raise", "Seated Calf Raise", Calf, &[Machine], &["calves"], &[]),
        exercise(
            "single_leg_calf_raise",
            "Single-Leg Calf Raise",
            Calf,
            &[Bodyweight, Dumbbells],
            &["calves"],
            &[],
        ),
        // Core
        exercise("cable_crunch", "Cable Crunch", Core, &[Cable], &["abs"], &["lower_back"]),
        exercise(
            "hanging_leg_raise",
            "Hanging Leg Raise",
            Core,
            &[PullUpBar],
            &["abs", "hip_flexors"],
            &["shoulders"],
        ),
        exercise("pallof_press", "Pallof Press", Core, &[Cable], &["obliques", "abs"], &[]),
        exercise("plank", "Plank", Core, &[Bodyweight], &["abs", "core"], &[]),
        exercise("dead_bug", "Dead Bug", Core, &[Bodyweight], &["abs", "core"], &[]),
        exercise(
            "ab_wheel",
            "Ab Wheel Rollout",
            Core,
            &[Bodyweight],
            &["abs", "lats"],
            &["lower_back"],
        ),
    ];

    Catalog { cardio, exercises }
}

impl Catalog {
    /// Load a catalog from a TOML file (`[[cardio]]` and `[[exercises]]` tables)
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog: Catalog = toml::from_str(&contents)?;
        tracing::info!(
            "Loaded catalog from {:?}: {} cardio templates, {} exercises",
            path,
            catalog.cardio.len(),
            catalog.exercises.len()
        );
        Ok(catalog)
    }

    /// Look up a cardio template by id
    ///
    /// A miss means the catalog and the schedule tables disagree, which is a
    /// fatal configuration error rather than bad user input.
    pub fn cardio(&self, id: &str) -> Result<&CardioTemplate> {
        self.cardio
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::UnknownTemplate(id.to_string()))
    }

    /// First easy template of the given activity type, in catalog order
    pub fn easy_cardio_of_type(&self, cardio_type: CardioType) -> Option<&CardioTemplate> {
        self.cardio
            .iter()
            .find(|t| t.cardio_type == cardio_type && t.intensity == Intensity::Easy)
    }

    /// First easy template of any type, in catalog order
    pub fn first_easy_cardio(&self) -> Option<&CardioTemplate> {
        self.cardio.iter().find(|t| t.intensity == Intensity::Easy)
    }

    /// Exercises of one movement pattern, in catalog order
    pub fn exercises_in(
        &self,
        pattern: MovementPattern,
    ) -> impl Iterator<Item = &ExerciseTemplate> + '_ {
        self.exercises.iter().filter(move |e| e.pattern == pattern)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut cardio_ids = HashSet::new();
        for template in &self.cardio {
            if template.id.is_empty() {
                errors.push("Cardio template has empty ID".to_string());
            }
            if !cardio_ids.insert(template.id.as_str()) {
                errors.push(format!("Duplicate cardio template ID '{}'", template.id));
            }
            if template.title.is_empty() {
                errors.push(format!("Cardio template '{}' has empty title", template.id));
            }
            if template.duration == 0 {
                errors.push(format!("Cardio template '{}' has zero duration", template.id));
            }
        }

        // Every id the schedule tables reference must resolve
        for id in crate::cardio::referenced_template_ids() {
            if !cardio_ids.contains(id) {
                errors.push(format!("Schedule references non-existent cardio template '{}'", id));
            }
        }

        if self.first_easy_cardio().is_none() {
            errors.push("Catalog has no easy cardio template".to_string());
        }

        let mut exercise_ids = HashSet::new();
        for ex in &self.exercises {
            if ex.id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
            }
            if !exercise_ids.insert(ex.id.as_str()) {
                errors.push(format!("Duplicate exercise ID '{}'", ex.id));
            }
            if ex.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", ex.id));
            }
            if ex.equipment.is_empty() {
                errors.push(format!("Exercise '{}' lists no equipment", ex.id));
            }
        }

        for pattern in MovementPattern::ALL {
            if self.exercises_in(pattern).next().is_none() {
                errors.push(format!("Catalog has no {:?} exercises", pattern));
            }
        }

        errors
    }
}
