//! Volume policy and split selection.

use crate::{ExperienceLevel, Goal, Split};

/// Baseline per-set dose for compound lifts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeConfig {
    pub sets: u32,
    pub reps_min: u32,
    pub reps_max: u32,
    pub rpe: f32,
    pub rest_seconds: u32,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            sets: 3,
            reps_min: 8,
            reps_max: 12,
            rpe: 7.5,
            rest_seconds: 90,
        }
    }
}

/// Map experience and goal to a volume configuration
///
/// Experience sets the sets/reps/rest baseline; the goal is applied on top
/// and wins wherever both touch the same field.
pub fn get_volume_config(experience: ExperienceLevel, goal: Goal) -> VolumeConfig {
    let mut config = VolumeConfig::default();

    match experience {
        ExperienceLevel::Beginner => {
            config.sets = 3;
            config.reps_min = 8;
            config.reps_max = 12;
            config.rest_seconds = 90;
        }
        ExperienceLevel::Intermediate => {
            config.sets = 4;
            config.reps_min = 6;
            config.reps_max = 12;
            config.rest_seconds = 120;
        }
        ExperienceLevel::Advanced => {
            config.sets = 4;
            config.reps_min = 5;
            config.reps_max = 10;
            config.rest_seconds = 150;
        }
    }

    match goal {
        Goal::Strength => {
            config.reps_min = 3;
            config.reps_max = 6;
            config.rpe = 8.5;
            config.rest_seconds = 180;
        }
        Goal::Endurance => {
            config.reps_min = 15;
            config.reps_max = 20;
            config.rpe = 6.5;
            config.rest_seconds = 60;
        }
        Goal::MuscleGain => {
            config.reps_min = 8;
            config.reps_max = 15;
            config.rpe = 8.0;
            config.rest_seconds = 90;
        }
        Goal::FatLoss => {
            config.reps_min = 10;
            config.reps_max = 15;
            config.rpe = 7.5;
            config.rest_seconds = 60;
        }
        Goal::General => {}
    }

    config
}

/// Pick the split family for a weekly lifting frequency
pub fn determine_split(training_days: u32, experience: ExperienceLevel) -> Split {
    match training_days {
        0..=3 => Split::FullBody,
        4 => Split::UpperLower,
        _ if experience == ExperienceLevel::Beginner => Split::UpperLower,
        _ => Split::Ppl,
    }
}
