//! Core domain types for the hybrid training planner.
//!
//! This module defines the fundamental types used throughout the system:
//! - Athlete profile and the two generation inputs derived from it
//! - Catalog entries (cardio templates and exercises)
//! - Weekly hybrid schedule output
//! - Strength program output

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Enums
// ============================================================================

/// Primary training goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Strength,
    Endurance,
    #[default]
    General,
}

/// Training experience (also used for the cardio-specific training volume)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Equipment tier the athlete has access to
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentTier {
    #[default]
    FullGym,
    HomeGym,
    Minimal,
    Bodyweight,
}

/// A single piece of equipment an exercise can be performed with
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Barbell,
    Dumbbells,
    Cable,
    Machine,
    Bodyweight,
    #[serde(rename = "pull-up bar")]
    PullUpBar,
    Kettlebell,
}

impl EquipmentTier {
    /// Equipment available at this tier
    pub fn available(self) -> &'static [Equipment] {
        use Equipment::*;
        match self {
            EquipmentTier::FullGym => &[
                Barbell, Dumbbells, Cable, Machine, Bodyweight, PullUpBar, Kettlebell,
            ],
            EquipmentTier::HomeGym => &[Dumbbells, Barbell, Bodyweight, PullUpBar, Kettlebell],
            EquipmentTier::Minimal => &[Dumbbells, Bodyweight],
            EquipmentTier::Bodyweight => &[Bodyweight, PullUpBar],
        }
    }
}

// ============================================================================
// Athlete Profile and Generation Inputs
// ============================================================================

/// A race or event the athlete is training for
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RaceGoal {
    #[serde(rename = "type")]
    pub race_type: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Option<String>,
}

/// Full athlete profile as stored by the surrounding application
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AthleteProfile {
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default = "default_training_days")]
    pub training_days: u32,
    #[serde(default)]
    pub equipment: EquipmentTier,
    #[serde(default)]
    pub injuries: Vec<String>,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub race_goals: Vec<RaceGoal>,
    #[serde(default)]
    pub training_volume: Option<ExperienceLevel>,
    #[serde(default)]
    pub gender: Option<String>,
}

fn default_training_days() -> u32 {
    3
}

impl AthleteProfile {
    /// Project the fields the strength engine consumes
    pub fn plan_input(&self) -> PlanInput {
        PlanInput {
            goal: self.goal,
            experience_level: self.experience_level,
            training_days: self.training_days,
            equipment: self.equipment,
            injuries: self.injuries.clone(),
            sport: self.sport.clone(),
            gender: self.gender.clone(),
        }
    }

    /// Project the fields the weekly schedule builder consumes
    pub fn hybrid_input(&self) -> HybridProgramInput {
        HybridProgramInput {
            goal: self.goal,
            experience_level: self.experience_level,
            training_days: self.training_days,
            sport: self.sport.clone(),
            race_goals: self.race_goals.clone(),
            training_volume: self.training_volume,
        }
    }
}

/// Input to the strength plan engine
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    pub goal: Goal,
    pub experience_level: ExperienceLevel,
    pub training_days: u32,
    pub equipment: EquipmentTier,
    #[serde(default)]
    pub injuries: Vec<String>,
    #[serde(default)]
    pub sport: Option<String>,
    /// Carried for contract compatibility; selection does not depend on it.
    #[serde(default)]
    pub gender: Option<String>,
}

/// Input to the weekly hybrid schedule builder
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HybridProgramInput {
    pub goal: Goal,
    pub experience_level: ExperienceLevel,
    pub training_days: u32,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub race_goals: Vec<RaceGoal>,
    #[serde(default)]
    pub training_volume: Option<ExperienceLevel>,
}

// ============================================================================
// Cardio Catalog Types
// ============================================================================

/// Activity type of a cardio session
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CardioType {
    Run,
    Bike,
    Swim,
    Row,
    Hiit,
    Walk,
}

/// Qualitative effort bucket
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Easy,
    Moderate,
    Hard,
    Max,
}

impl Intensity {
    /// Hard or max effort, the tiers the safety rules count
    pub fn is_hard(self) -> bool {
        matches!(self, Intensity::Hard | Intensity::Max)
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Intensity::Easy => "easy",
            Intensity::Moderate => "moderate",
            Intensity::Hard => "hard",
            Intensity::Max => "max",
        })
    }
}

/// A cardio session template from the catalog
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardioTemplate {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub cardio_type: CardioType,
    pub duration: u32,
    pub intensity: Intensity,
}

/// A cardio template bound to a specific day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardioAssignment {
    pub template_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub cardio_type: CardioType,
    pub duration: u32,
    pub intensity: Intensity,
}

impl From<&CardioTemplate> for CardioAssignment {
    fn from(template: &CardioTemplate) -> Self {
        Self {
            template_id: template.id.clone(),
            title: template.title.clone(),
            cardio_type: template.cardio_type,
            duration: template.duration,
            intensity: template.intensity,
        }
    }
}

// ============================================================================
// Exercise Catalog Types
// ============================================================================

/// Movement pattern an exercise belongs to; each pattern is one selection pool
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    ChestPress,
    ShoulderPress,
    ChestIsolation,
    LateralRaise,
    RearDelt,
    Triceps,
    VerticalPull,
    HorizontalPull,
    Biceps,
    Squat,
    Hinge,
    SingleLeg,
    QuadIsolation,
    HamstringIsolation,
    Calf,
    Core,
}

impl MovementPattern {
    pub const ALL: [MovementPattern; 16] = [
        MovementPattern::ChestPress,
        MovementPattern::ShoulderPress,
        MovementPattern::ChestIsolation,
        MovementPattern::LateralRaise,
        MovementPattern::RearDelt,
        MovementPattern::Triceps,
        MovementPattern::VerticalPull,
        MovementPattern::HorizontalPull,
        MovementPattern::Biceps,
        MovementPattern::Squat,
        MovementPattern::Hinge,
        MovementPattern::SingleLeg,
        MovementPattern::QuadIsolation,
        MovementPattern::HamstringIsolation,
        MovementPattern::Calf,
        MovementPattern::Core,
    ];
}

/// An exercise definition from the catalog
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTemplate {
    pub id: String,
    pub name: String,
    pub pattern: MovementPattern,
    /// Any one of these is enough to perform the exercise
    pub equipment: Vec<Equipment>,
    pub muscle_groups: Vec<String>,
    #[serde(default)]
    pub avoid_if_injury: Vec<String>,
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The cardio and exercise catalogs; Vec order is the selection order
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default)]
    pub cardio: Vec<CardioTemplate>,
    #[serde(default)]
    pub exercises: Vec<ExerciseTemplate>,
}

// ============================================================================
// Weekly Hybrid Plan Types
// ============================================================================

/// Which cardio week the schedule builder produced
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProgramKind {
    Triathlete,
    Runner,
    Swimmer,
    Cyclist,
    Endurance,
    General,
}

impl ProgramKind {
    pub fn label(self) -> &'static str {
        match self {
            ProgramKind::Triathlete => "triathlete",
            ProgramKind::Runner => "runner",
            ProgramKind::Swimmer => "swimmer",
            ProgramKind::Cyclist => "cyclist",
            ProgramKind::Endurance => "endurance",
            ProgramKind::General => "general",
        }
    }
}

impl std::fmt::Display for ProgramKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One day of the weekly schedule
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: String,
    pub day_index: usize,
    pub has_strength: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardio: Option<CardioAssignment>,
    pub is_rest: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DayPlan {
    /// Append an annotation, joining with any existing note
    pub fn add_note(&mut self, note: &str) {
        self.note = Some(match self.note.take() {
            Some(existing) => format!("{} · {}", existing, note),
            None => note.to_string(),
        });
    }
}

/// Seven days of strength and cardio assignments with weekly totals
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyHybridPlan {
    pub days: Vec<DayPlan>,
    pub weekly_cardio_minutes: u32,
    pub weekly_lift_days: u32,
    pub program_type: ProgramKind,
    pub description: String,
}

// ============================================================================
// Strength Program Types
// ============================================================================

/// Resistance-training split family
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Split {
    FullBody,
    UpperLower,
    Ppl,
}

impl Split {
    pub fn display_name(self) -> &'static str {
        match self {
            Split::FullBody => "Full Body",
            Split::UpperLower => "Upper/Lower",
            Split::Ppl => "Push/Pull/Legs",
        }
    }
}

/// Strength program family, derived from the goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProgramFamily {
    FatLoss,
    Hypertrophy,
    Strength,
    MuscularEndurance,
    GeneralFitness,
}

impl From<Goal> for ProgramFamily {
    fn from(goal: Goal) -> Self {
        match goal {
            Goal::FatLoss => ProgramFamily::FatLoss,
            Goal::MuscleGain => ProgramFamily::Hypertrophy,
            Goal::Strength => ProgramFamily::Strength,
            Goal::Endurance => ProgramFamily::MuscularEndurance,
            Goal::General => ProgramFamily::GeneralFitness,
        }
    }
}

impl ProgramFamily {
    pub fn display_name(self) -> &'static str {
        match self {
            ProgramFamily::FatLoss => "Fat Loss",
            ProgramFamily::Hypertrophy => "Hypertrophy",
            ProgramFamily::Strength => "Strength",
            ProgramFamily::MuscularEndurance => "Muscular Endurance",
            ProgramFamily::GeneralFitness => "General Fitness",
        }
    }
}

/// A catalog exercise annotated with its prescribed dose
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSpec {
    pub name: String,
    pub sets: u32,
    pub reps_min: u32,
    pub reps_max: u32,
    pub rpe: Option<f32>,
    pub rest_seconds: u32,
    pub muscle_groups: Vec<String>,
    pub equipment: Vec<Equipment>,
    pub avoid_if_injury: Vec<String>,
}

/// One training session of the strength program
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSpec {
    pub name: String,
    pub order: u32,
    pub exercises: Vec<ExerciseSpec>,
}

/// The complete strength program
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub name: String,
    #[serde(rename = "type")]
    pub program_type: ProgramFamily,
    pub split: Split,
    pub days_per_week: u32,
    pub workouts: Vec<WorkoutSpec>,
    pub notes: String,
}
