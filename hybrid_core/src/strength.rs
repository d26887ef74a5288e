//! Strength program generation.
//!
//! Picks a split from the weekly frequency, then fills every workout slot with
//! the first catalog exercise (in catalog order) that the athlete can perform
//! with their equipment, that does not aggravate a listed injury, and that has
//! not already been chosen this week. Selection is order-based so the same
//! inputs always produce the same program.

use crate::volume::{determine_split, get_volume_config, VolumeConfig};
use crate::{
    Catalog, Equipment, ExerciseSpec, ExerciseTemplate, GeneratedPlan, MovementPattern,
    PlanInput, ProgramFamily, Split, WorkoutSpec,
};
use std::collections::HashSet;

use crate::MovementPattern as P;

/// Per-slot dosing: compounds take the volume config as is, isolation work
/// caps sets and rest and raises the rep floor.
#[derive(Clone, Copy, Debug)]
enum Dose {
    Compound,
    Isolation {
        sets: u32,
        reps_min: u32,
        reps_max: u32,
        rest_seconds: u32,
    },
}

const DELTS: Dose = Dose::Isolation { sets: 3, reps_min: 12, reps_max: 20, rest_seconds: 60 };
const ARMS: Dose = Dose::Isolation { sets: 3, reps_min: 10, reps_max: 15, rest_seconds: 60 };
const CHEST_FLY: Dose = Dose::Isolation { sets: 3, reps_min: 10, reps_max: 15, rest_seconds: 60 };
const LEGS_ISO: Dose = Dose::Isolation { sets: 3, reps_min: 10, reps_max: 15, rest_seconds: 75 };
const CALVES: Dose = Dose::Isolation { sets: 4, reps_min: 12, reps_max: 20, rest_seconds: 45 };
const CORE: Dose = Dose::Isolation { sets: 3, reps_min: 10, reps_max: 15, rest_seconds: 45 };
const MAIN: Dose = Dose::Compound;

type Slots = &'static [(MovementPattern, Dose)];

const FULL_BODY_A: Slots = &[
    (P::Squat, MAIN),
    (P::ChestPress, MAIN),
    (P::HorizontalPull, MAIN),
    (P::ShoulderPress, MAIN),
    (P::HamstringIsolation, LEGS_ISO),
    (P::Core, CORE),
];
const FULL_BODY_B: Slots = &[
    (P::Hinge, MAIN),
    (P::ChestPress, MAIN),
    (P::VerticalPull, MAIN),
    (P::SingleLeg, MAIN),
    (P::LateralRaise, DELTS),
    (P::Core, CORE),
];
/// Full Body C keeps this many leading exercises from A, then continues with B
const FULL_BODY_C_HEAD: usize = 3;

const UPPER_A: Slots = &[
    (P::ChestPress, MAIN),
    (P::HorizontalPull, MAIN),
    (P::ShoulderPress, MAIN),
    (P::VerticalPull, MAIN),
    (P::LateralRaise, DELTS),
    (P::Biceps, ARMS),
    (P::Triceps, ARMS),
];
const LOWER_A: Slots = &[
    (P::Squat, MAIN),
    (P::Hinge, MAIN),
    (P::SingleLeg, MAIN),
    (P::QuadIsolation, LEGS_ISO),
    (P::HamstringIsolation, LEGS_ISO),
    (P::Calf, CALVES),
];
const UPPER_B: Slots = &[
    (P::VerticalPull, MAIN),
    (P::ChestPress, MAIN),
    (P::HorizontalPull, MAIN),
    (P::ShoulderPress, MAIN),
    (P::RearDelt, DELTS),
    (P::Triceps, ARMS),
    (P::Biceps, ARMS),
];
const LOWER_B: Slots = &[
    (P::Hinge, MAIN),
    (P::Squat, MAIN),
    (P::SingleLeg, MAIN),
    (P::HamstringIsolation, LEGS_ISO),
    (P::QuadIsolation, LEGS_ISO),
    (P::Core, CORE),
];

const PUSH_A: Slots = &[
    (P::ChestPress, MAIN),
    (P::ChestPress, MAIN),
    (P::ShoulderPress, MAIN),
    (P::LateralRaise, DELTS),
    (P::Triceps, ARMS),
    (P::ChestIsolation, CHEST_FLY),
];
const PULL_A: Slots = &[
    (P::VerticalPull, MAIN),
    (P::HorizontalPull, MAIN),
    (P::HorizontalPull, MAIN),
    (P::RearDelt, DELTS),
    (P::Biceps, ARMS),
    (P::Biceps, ARMS),
];
const LEGS_A: Slots = &[
    (P::Squat, MAIN),
    (P::Hinge, MAIN),
    (P::SingleLeg, MAIN),
    (P::QuadIsolation, LEGS_ISO),
    (P::HamstringIsolation, LEGS_ISO),
    (P::Calf, CALVES),
    (P::Core, CORE),
];

impl Dose {
    fn apply(
        self,
        exercise: &ExerciseTemplate,
        volume: &VolumeConfig,
        available: &[Equipment],
    ) -> ExerciseSpec {
        let (sets, reps_min, reps_max, rest_seconds) = match self {
            Dose::Compound => (
                volume.sets,
                volume.reps_min,
                volume.reps_max,
                volume.rest_seconds,
            ),
            Dose::Isolation {
                sets,
                reps_min,
                reps_max,
                rest_seconds,
            } => (
                volume.sets.min(sets),
                volume.reps_min.max(reps_min),
                volume.reps_max.max(reps_max),
                volume.rest_seconds.min(rest_seconds),
            ),
        };

        ExerciseSpec {
            name: exercise.name.clone(),
            sets,
            reps_min,
            reps_max,
            rpe: Some(volume.rpe),
            rest_seconds,
            muscle_groups: exercise.muscle_groups.clone(),
            // Only the pieces this athlete will actually use
            equipment: exercise
                .equipment
                .iter()
                .copied()
                .filter(|e| available.contains(e))
                .collect(),
            avoid_if_injury: exercise.avoid_if_injury.clone(),
        }
    }
}

/// True when the athlete owns at least one listed piece of equipment and none
/// of the exercise's contraindications match an injury.
pub fn exercise_fits(
    exercise: &ExerciseTemplate,
    available: &[Equipment],
    injuries: &[String],
) -> bool {
    let has_equipment = exercise.equipment.iter().any(|e| available.contains(e));
    let contraindicated = exercise
        .avoid_if_injury
        .iter()
        .any(|tag| injuries.iter().any(|i| i.trim().eq_ignore_ascii_case(tag)));
    has_equipment && !contraindicated
}

/// First exercise in `pool` that fits and is not in `used`
///
/// `None` means the pool is exhausted for this athlete; callers omit the slot.
pub fn pick_exercise<'a, I>(
    pool: I,
    available: &[Equipment],
    injuries: &[String],
    used: &HashSet<String>,
) -> Option<&'a ExerciseTemplate>
where
    I: IntoIterator<Item = &'a ExerciseTemplate>,
{
    pool.into_iter()
        .find(|ex| !used.contains(&ex.name) && exercise_fits(ex, available, injuries))
}

/// Selection state threaded through the builders of one generation call
#[derive(Debug, Default)]
pub struct WeekSelection {
    /// Exercise names already placed in this week's fresh workouts
    pub used: HashSet<String>,
    /// Slots left empty because their pool had no eligible exercise
    pub omitted: usize,
}

struct Selector<'a> {
    catalog: &'a Catalog,
    available: &'static [Equipment],
    injuries: &'a [String],
    volume: VolumeConfig,
}

impl Selector<'_> {
    fn workout(&self, name: &str, slots: Slots, week: &mut WeekSelection) -> WorkoutSpec {
        let mut exercises = Vec::with_capacity(slots.len());

        for &(pattern, dose) in slots {
            let pool = self.catalog.exercises_in(pattern);
            match pick_exercise(pool, self.available, self.injuries, &week.used) {
                Some(exercise) => {
                    week.used.insert(exercise.name.clone());
                    exercises.push(dose.apply(exercise, &self.volume, self.available));
                }
                None => {
                    week.omitted += 1;
                    tracing::debug!(workout = name, ?pattern, "No eligible exercise, slot omitted");
                }
            }
        }

        WorkoutSpec {
            name: name.to_string(),
            order: 0,
            exercises,
        }
    }
}

/// Second-rotation day: same movements as `source`, led by its second exercise
fn rotated(name: &str, source: &WorkoutSpec) -> WorkoutSpec {
    let exercises = source
        .exercises
        .iter()
        .skip(1)
        .chain(source.exercises.first())
        .cloned()
        .collect();

    WorkoutSpec {
        name: name.to_string(),
        order: 0,
        exercises,
    }
}

/// Leading `head` exercises of `first` followed by the remainder of `second`
fn blended(name: &str, first: &WorkoutSpec, second: &WorkoutSpec, head: usize) -> WorkoutSpec {
    let exercises = first
        .exercises
        .iter()
        .take(head)
        .chain(second.exercises.iter().skip(head))
        .cloned()
        .collect();

    WorkoutSpec {
        name: name.to_string(),
        order: 0,
        exercises,
    }
}

fn build_full_body(selector: &Selector, days: u32, week: &mut WeekSelection) -> Vec<WorkoutSpec> {
    let a = selector.workout("Full Body A", FULL_BODY_A, week);
    if days < 2 {
        return vec![a];
    }

    let b = selector.workout("Full Body B", FULL_BODY_B, week);
    if days < 3 {
        return vec![a, b];
    }

    let c = blended("Full Body C", &a, &b, FULL_BODY_C_HEAD);
    vec![a, b, c]
}

fn build_upper_lower(selector: &Selector, week: &mut WeekSelection) -> Vec<WorkoutSpec> {
    vec![
        selector.workout("Upper A", UPPER_A, week),
        selector.workout("Lower A", LOWER_A, week),
        selector.workout("Upper B", UPPER_B, week),
        selector.workout("Lower B", LOWER_B, week),
    ]
}

fn build_ppl(selector: &Selector, days: u32, week: &mut WeekSelection) -> Vec<WorkoutSpec> {
    let push = selector.workout("Push A", PUSH_A, week);
    let pull = selector.workout("Pull A", PULL_A, week);
    let legs = selector.workout("Legs A", LEGS_A, week);

    let mut workouts = Vec::with_capacity(6);
    if days >= 5 {
        workouts.push(rotated("Push B", &push));
        workouts.push(rotated("Pull B", &pull));
    }
    if days >= 6 {
        workouts.push(rotated("Legs B", &legs));
    }

    let mut all = vec![push, pull, legs];
    all.append(&mut workouts);
    all
}

fn plan_notes(input: &PlanInput, volume: &VolumeConfig, split: Split, omitted: usize) -> String {
    let mut notes = format!(
        "{} training days per week on a {} split. Main lifts: {} sets of {}-{} reps at RPE {:.1} with {}s rest; accessories use higher reps and shorter rest.",
        input.training_days,
        split.display_name(),
        volume.sets,
        volume.reps_min,
        volume.reps_max,
        volume.rpe,
        volume.rest_seconds,
    );

    if !input.injuries.is_empty() {
        notes.push_str(&format!(
            " Exercises that aggravate {} are excluded.",
            input.injuries.join(", ")
        ));
    }

    if omitted > 0 {
        notes.push_str(&format!(
            " {} exercise slot(s) could not be filled with the available equipment.",
            omitted
        ));
    }

    notes
}

/// Generate a strength program for the given athlete input
///
/// Never fails: pools exhausted by equipment or injury filtering simply make
/// the affected workouts shorter.
pub fn generate_plan(catalog: &Catalog, input: &PlanInput) -> GeneratedPlan {
    if !(2..=6).contains(&input.training_days) {
        tracing::warn!(
            "Training days {} outside the usual 2-6 range, generating anyway",
            input.training_days
        );
    }

    let split = determine_split(input.training_days, input.experience_level);
    let volume = get_volume_config(input.experience_level, input.goal);
    let selector = Selector {
        catalog,
        available: input.equipment.available(),
        injuries: &input.injuries,
        volume,
    };

    let mut week = WeekSelection::default();
    let mut workouts = match split {
        Split::FullBody => build_full_body(&selector, input.training_days, &mut week),
        Split::UpperLower => build_upper_lower(&selector, &mut week),
        Split::Ppl => build_ppl(&selector, input.training_days, &mut week),
    };

    for (i, workout) in workouts.iter_mut().enumerate() {
        workout.order = i as u32 + 1;
    }

    if week.omitted > 0 {
        tracing::debug!(
            "{} slot(s) omitted for equipment {:?} and injuries {:?}",
            week.omitted,
            input.equipment,
            input.injuries
        );
    }

    let family = ProgramFamily::from(input.goal);
    let notes = plan_notes(input, &volume, split, week.omitted);

    tracing::info!(
        "Generated {:?} program with {} workouts ({} distinct exercises)",
        split,
        workouts.len(),
        week.used.len()
    );

    GeneratedPlan {
        name: format!("{} {} Program", split.display_name(), family.display_name()),
        program_type: family,
        split,
        days_per_week: input.training_days,
        workouts,
        notes,
    }
}
