//! Cardio day assignment and strength day slotting.
//!
//! Every sport has a fixed Monday-to-Sunday table of cardio templates. A
//! lower weekly frequency drops the table's low-priority days in a fixed
//! order, and a taper swaps designated quality sessions for their easy
//! counterparts. Athletes without a sport get the general rotation instead.

use crate::constraints::is_heavy_lower_label;
use crate::sport::SportProfile;
use crate::{CardioAssignment, Catalog, ExperienceLevel, Goal, ProgramKind, Result};
use std::collections::BTreeSet;

/// Day labels, Monday first
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Strength days are capped at this many per week in the hybrid schedule
pub const MAX_LIFT_DAYS: u32 = 5;

/// Annotation placed on days whose session was swapped for the taper
pub const TAPER_NOTE: &str = "Taper: easy effort before race";

/// Low-intensity bike session used for recovery days and as a last-resort
/// downgrade target
pub const RECOVERY_CARDIO: &str = "bike_recovery";

/// Generic formats for athletes without a sport, in rotation order
pub const GENERAL_ROTATION: [&str; 5] = [
    "bike_zone2",
    "hiit_circuit",
    "row_steady",
    "walk_incline",
    "run_easy",
];

const SUNDAY: usize = 6;

/// A cardio session planned for one day, before constraint enforcement
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedCardio {
    pub assignment: CardioAssignment,
    pub note: Option<&'static str>,
}

/// Cardio plan for Monday..Sunday
pub type CardioWeek = [Option<PlannedCardio>; 7];

/// Strength workout label per day, Monday..Sunday
pub type StrengthWeek = [Option<&'static str>; 7];

#[derive(Clone, Copy, Debug)]
struct Slot {
    day: usize,
    template: &'static str,
    /// Easy counterpart used while tapering; `None` for sessions kept as is
    taper: Option<&'static str>,
}

const fn easy(day: usize, template: &'static str) -> Slot {
    Slot {
        day,
        template,
        taper: None,
    }
}

const fn quality(day: usize, template: &'static str, taper: &'static str) -> Slot {
    Slot {
        day,
        template,
        taper: Some(taper),
    }
}

struct SportWeek {
    slots: &'static [Slot],
    /// Days removed, in order, while the table has more sessions than allowed
    drop_order: &'static [usize],
}

const TRIATHLETE_WEEK: SportWeek = SportWeek {
    slots: &[
        quality(0, "swim_intervals", "swim_easy"),
        quality(1, "bike_threshold", "bike_easy"),
        quality(3, "run_tempo", "run_easy"),
        quality(5, "bike_long", "bike_easy"),
        quality(6, "run_long", "run_easy"),
    ],
    drop_order: &[5, 6],
};

const RUNNER_WEEK: SportWeek = SportWeek {
    slots: &[
        quality(1, "run_intervals", "run_easy"),
        easy(2, "run_easy"),
        quality(3, "run_tempo", "run_easy"),
        easy(4, "run_easy"),
        quality(5, "run_long", "run_easy"),
    ],
    drop_order: &[4, 2],
};

const SWIMMER_WEEK: SportWeek = SportWeek {
    slots: &[
        easy(0, "swim_easy"),
        quality(2, "swim_intervals", "swim_easy"),
        quality(4, "swim_endurance", "swim_easy"),
        easy(5, "bike_easy"),
    ],
    drop_order: &[5],
};

const CYCLIST_WEEK: SportWeek = SportWeek {
    slots: &[
        quality(1, "bike_intervals", "bike_easy"),
        quality(3, "bike_threshold", "bike_easy"),
        quality(5, "bike_long", "bike_easy"),
        easy(6, "bike_easy"),
    ],
    drop_order: &[6],
};

const ENDURANCE_WEEK: SportWeek = SportWeek {
    slots: &[
        quality(1, "run_tempo", "run_easy"),
        easy(2, "bike_zone2"),
        quality(3, "row_intervals", "row_easy"),
        quality(5, "run_long", "run_easy"),
    ],
    drop_order: &[],
};

fn sport_week(kind: ProgramKind) -> Option<&'static SportWeek> {
    match kind {
        ProgramKind::Triathlete => Some(&TRIATHLETE_WEEK),
        ProgramKind::Runner => Some(&RUNNER_WEEK),
        ProgramKind::Swimmer => Some(&SWIMMER_WEEK),
        ProgramKind::Cyclist => Some(&CYCLIST_WEEK),
        ProgramKind::Endurance => Some(&ENDURANCE_WEEK),
        ProgramKind::General => None,
    }
}

/// Every cardio template id the schedule tables can emit
pub fn referenced_template_ids() -> BTreeSet<&'static str> {
    let mut ids: BTreeSet<&'static str> = [
        &TRIATHLETE_WEEK,
        &RUNNER_WEEK,
        &SWIMMER_WEEK,
        &CYCLIST_WEEK,
        &ENDURANCE_WEEK,
    ]
    .iter()
    .flat_map(|week| week.slots.iter())
    .flat_map(|slot| std::iter::once(slot.template).chain(slot.taper))
    .collect();

    ids.extend(GENERAL_ROTATION);
    ids.insert(RECOVERY_CARDIO);
    ids
}

/// Which cardio week to build, in fixed sport priority order
pub fn program_kind(profile: &SportProfile, goal: Goal) -> ProgramKind {
    if profile.is_triathlete {
        ProgramKind::Triathlete
    } else if profile.is_runner {
        ProgramKind::Runner
    } else if profile.is_swimmer {
        ProgramKind::Swimmer
    } else if profile.is_cyclist {
        ProgramKind::Cyclist
    } else if goal == Goal::Endurance {
        ProgramKind::Endurance
    } else {
        ProgramKind::General
    }
}

/// Weekly cardio session count
pub fn cardio_days_per_week(
    kind: ProgramKind,
    goal: Goal,
    volume: Option<ExperienceLevel>,
) -> u32 {
    match kind {
        ProgramKind::Triathlete | ProgramKind::Runner => match volume {
            Some(ExperienceLevel::Advanced) => 5,
            Some(ExperienceLevel::Intermediate) => 4,
            _ => 3,
        },
        ProgramKind::Swimmer | ProgramKind::Cyclist => match volume {
            Some(ExperienceLevel::Advanced) => 4,
            _ => 3,
        },
        ProgramKind::Endurance => 4,
        ProgramKind::General if goal == Goal::FatLoss => 3,
        ProgramKind::General => 2,
    }
}

/// Strength workout label for each day of the week
///
/// The hybrid schedule caps lift days at [`MAX_LIFT_DAYS`], so the six-day
/// table is only reachable by calling this directly.
pub fn assign_strength_days(lift_days: u32) -> StrengthWeek {
    match lift_days {
        6.. => [
            Some("Push A"),
            Some("Pull A"),
            Some("Legs A"),
            Some("Push B"),
            Some("Pull B"),
            Some("Legs B"),
            None,
        ],
        5 => [
            Some("Push"),
            Some("Pull"),
            Some("Legs"),
            Some("Upper"),
            Some("Full Body"),
            None,
            None,
        ],
        4 => [
            Some("Upper A"),
            Some("Lower A"),
            None,
            Some("Upper B"),
            Some("Lower B"),
            None,
            None,
        ],
        3 => [
            Some("Full Body A"),
            None,
            Some("Full Body B"),
            None,
            Some("Full Body C"),
            None,
            None,
        ],
        2 => [Some("Upper"), None, None, Some("Lower"), None, None, None],
        1 => [Some("Full Body"), None, None, None, None, None, None],
        0 => [None; 7],
    }
}

/// Fill a sport's cardio table, trimmed to `cardio_days` and taper-adjusted
pub fn build_sport_cardio(
    kind: ProgramKind,
    catalog: &Catalog,
    cardio_days: u32,
    in_taper: bool,
) -> Result<CardioWeek> {
    let mut cardio: CardioWeek = Default::default();
    let Some(week) = sport_week(kind) else {
        return Ok(cardio);
    };

    let mut active: Vec<&Slot> = week.slots.iter().collect();
    for &day in week.drop_order {
        if active.len() <= cardio_days as usize {
            break;
        }
        active.retain(|slot| slot.day != day);
        tracing::debug!(
            "Dropped {} cardio for {} sessions/week",
            DAY_LABELS[day],
            cardio_days
        );
    }

    for slot in active {
        let (id, note) = match slot.taper {
            Some(easy_id) if in_taper => {
                tracing::debug!(
                    "Taper: {} {} replaced by {}",
                    DAY_LABELS[slot.day],
                    slot.template,
                    easy_id
                );
                (easy_id, Some(TAPER_NOTE))
            }
            _ => (slot.template, None),
        };

        cardio[slot.day] = Some(PlannedCardio {
            assignment: catalog.cardio(id)?.into(),
            note,
        });
    }

    Ok(cardio)
}

/// Fill non-lift days (Monday to Saturday) from the general rotation
///
/// Sunday stays free. A day right after a lower-body or full-body lift gets
/// the recovery ride in place of the rotation's format.
pub fn build_general_cardio(
    catalog: &Catalog,
    strength: &StrengthWeek,
    cardio_days: u32,
) -> Result<CardioWeek> {
    let mut cardio: CardioWeek = Default::default();
    let mut filled = 0;

    for day in 0..SUNDAY {
        if filled >= cardio_days as usize {
            break;
        }
        if strength[day].is_some() {
            continue;
        }

        let after_heavy_lift = day > 0 && strength[day - 1].is_some_and(is_heavy_lower_label);
        let id = if after_heavy_lift {
            RECOVERY_CARDIO
        } else {
            GENERAL_ROTATION[filled % GENERAL_ROTATION.len()]
        };

        cardio[day] = Some(PlannedCardio {
            assignment: catalog.cardio(id)?.into(),
            note: None,
        });
        filled += 1;
    }

    if filled < cardio_days as usize {
        tracing::debug!(
            "Only {} of {} general cardio sessions fit around lift days",
            filled,
            cardio_days
        );
    }

    Ok(cardio)
}
