//! Sport profile resolution.
//!
//! Derives the handful of facts the schedule builder branches on (which sport
//! the athlete trains for, how far away the nearest race is) from the raw
//! profile. Recomputed on every generation call.

use crate::RaceGoal;
use chrono::NaiveDate;
use serde::Serialize;

const TRIATHLON_RACES: &[&str] = &["sprint_tri", "olympic_tri", "half_ironman", "ironman"];
const RUNNING_RACES: &[&str] = &["5k_10k", "half_marathon", "full_marathon", "ultra_marathon"];
const SWIM_RACES: &[&str] = &["open_water_swim", "swim_meet"];
const CYCLING_RACES: &[&str] = &["gran_fondo", "century_ride", "cycling_race"];
const OCR_RACES: &[&str] = &["spartan", "tough_mudder", "ocr_race"];
const POWERLIFTING_MEETS: &[&str] = &["powerlifting_meet"];

/// Race within this many weeks puts the athlete in a taper
pub const TAPER_WEEKS: i64 = 3;
/// Race within this many weeks counts as approaching
pub const APPROACH_WEEKS: i64 = 6;

/// Derived sport facts for one generation call
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SportProfile {
    pub is_triathlete: bool,
    pub is_runner: bool,
    pub is_swimmer: bool,
    pub is_cyclist: bool,
    pub is_ocr: bool,
    pub is_powerlifter: bool,
    pub primary_sport: String,
    pub weeks_to_race: Option<i64>,
    pub in_taper: bool,
    pub race_approaching: bool,
}

/// Resolve the sport profile from the raw sport field and race goals
///
/// `today` anchors the weeks-to-race computation; callers pass the current
/// date so the function itself stays pure.
pub fn resolve_sport_profile(
    sport: Option<&str>,
    race_goals: &[RaceGoal],
    today: NaiveDate,
) -> SportProfile {
    let sport = sport
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let flag = |name: &str, races: &[&str]| {
        sport.as_deref() == Some(name)
            || race_goals
                .iter()
                .any(|g| races.contains(&g.race_type.as_str()))
    };

    let is_triathlete = flag("triathlon", TRIATHLON_RACES);
    let is_runner = flag("running", RUNNING_RACES);
    let is_swimmer = flag("swimming", SWIM_RACES);
    let is_cyclist = flag("cycling", CYCLING_RACES);
    let is_ocr = flag("ocr", OCR_RACES);
    let is_powerlifter = flag("powerlifting", POWERLIFTING_MEETS);

    let weeks_to_race = race_goals
        .iter()
        .filter_map(|g| g.date)
        .map(|date| weeks_until(today, date))
        .min();

    let in_taper = weeks_to_race.is_some_and(|w| w <= TAPER_WEEKS);
    let race_approaching = weeks_to_race.is_some_and(|w| w <= APPROACH_WEEKS);

    let primary_sport = if is_triathlete {
        "triathlon".to_string()
    } else if is_runner {
        "running".to_string()
    } else if is_swimmer {
        "swimming".to_string()
    } else if is_cyclist {
        "cycling".to_string()
    } else if is_ocr {
        "ocr".to_string()
    } else if let Some(s) = sport {
        s
    } else {
        "general".to_string()
    };

    tracing::debug!(
        primary_sport = %primary_sport,
        ?weeks_to_race,
        in_taper,
        race_approaching,
        "Resolved sport profile"
    );

    SportProfile {
        is_triathlete,
        is_runner,
        is_swimmer,
        is_cyclist,
        is_ocr,
        is_powerlifter,
        primary_sport,
        weeks_to_race,
        in_taper,
        race_approaching,
    }
}

/// Whole weeks from `today` until `date`, never negative
fn weeks_until(today: NaiveDate, date: NaiveDate) -> i64 {
    ((date - today).num_days() / 7).max(0)
}
