//! Weekly hybrid schedule builder.
//!
//! Builds one Monday-to-Sunday week of strength and cardio:
//! - Resolve the sport profile (sport flags, weeks to race, taper)
//! - Slot strength workouts onto fixed weekdays
//! - Fill cardio from the sport's week table or the general rotation
//! - Enforce recovery constraints, then total up the week

use crate::cardio::{
    assign_strength_days, build_general_cardio, build_sport_cardio, cardio_days_per_week,
    program_kind, CardioWeek, StrengthWeek, DAY_LABELS, MAX_LIFT_DAYS,
};
use crate::constraints::enforce_constraints;
use crate::sport::{resolve_sport_profile, SportProfile};
use crate::{Catalog, DayPlan, HybridProgramInput, ProgramKind, Result, WeeklyHybridPlan};
use chrono::NaiveDate;

/// Generate the weekly hybrid plan for an athlete
///
/// `today` anchors the weeks-to-race computation. The only failure is a
/// cardio template id missing from `catalog`, which aborts the whole call.
pub fn generate_hybrid_week(
    catalog: &Catalog,
    input: &HybridProgramInput,
    today: NaiveDate,
) -> Result<WeeklyHybridPlan> {
    if !(2..=6).contains(&input.training_days) {
        tracing::warn!(
            "Training days {} outside the usual 2-6 range, generating anyway",
            input.training_days
        );
    }

    let profile = resolve_sport_profile(input.sport.as_deref(), &input.race_goals, today);
    let kind = program_kind(&profile, input.goal);
    let lift_days = input.training_days.min(MAX_LIFT_DAYS);
    let cardio_days = cardio_days_per_week(kind, input.goal, input.training_volume);

    let strength = assign_strength_days(lift_days);
    let cardio = match kind {
        ProgramKind::General => build_general_cardio(catalog, &strength, cardio_days)?,
        _ => build_sport_cardio(kind, catalog, cardio_days, profile.in_taper)?,
    };

    let mut days = merge_days(strength, cardio);
    enforce_constraints(&mut days, catalog)?;

    let plan = aggregate(days, kind, &profile);

    tracing::info!(
        "Generated {} week: {} lift days, {} cardio minutes",
        kind,
        plan.weekly_lift_days,
        plan.weekly_cardio_minutes
    );

    Ok(plan)
}

fn merge_days(strength: StrengthWeek, cardio: CardioWeek) -> Vec<DayPlan> {
    DAY_LABELS
        .iter()
        .zip(strength)
        .zip(cardio)
        .enumerate()
        .map(|(day_index, ((label, lift), planned))| {
            let mut day = DayPlan {
                day: label.to_string(),
                day_index,
                has_strength: lift.is_some(),
                strength_label: lift.map(str::to_string),
                cardio: None,
                is_rest: false,
                note: None,
            };
            if let Some(planned) = planned {
                day.cardio = Some(planned.assignment);
                if let Some(note) = planned.note {
                    day.add_note(note);
                }
            }
            day
        })
        .collect()
}

fn aggregate(
    mut days: Vec<DayPlan>,
    kind: ProgramKind,
    profile: &SportProfile,
) -> WeeklyHybridPlan {
    for day in &mut days {
        day.is_rest = !day.has_strength && day.cardio.is_none();
    }

    let weekly_cardio_minutes = days
        .iter()
        .filter_map(|d| d.cardio.as_ref())
        .map(|c| c.duration)
        .sum();
    let weekly_lift_days = days.iter().filter(|d| d.has_strength).count() as u32;
    let cardio_sessions = days.iter().filter(|d| d.cardio.is_some()).count();

    let description = describe(kind, profile, weekly_lift_days, cardio_sessions);

    WeeklyHybridPlan {
        days,
        weekly_cardio_minutes,
        weekly_lift_days,
        program_type: kind,
        description,
    }
}

fn describe(
    kind: ProgramKind,
    profile: &SportProfile,
    lift_days: u32,
    cardio_sessions: usize,
) -> String {
    let focus = match kind {
        ProgramKind::Triathlete => "Triathlon week balancing swim, bike and run",
        ProgramKind::Runner => "Run-focused week",
        ProgramKind::Swimmer => "Swim-focused week",
        ProgramKind::Cyclist => "Cycling-focused week",
        ProgramKind::Endurance => "Mixed endurance week",
        ProgramKind::General => "General fitness week",
    };

    let mut description = format!(
        "{} with {} strength day{} and {} cardio session{}.",
        focus,
        lift_days,
        if lift_days == 1 { "" } else { "s" },
        cardio_sessions,
        if cardio_sessions == 1 { "" } else { "s" },
    );

    if kind == ProgramKind::General && profile.primary_sport != "general" {
        description.push_str(&format!(
            " Cardio kept general around {} training.",
            profile.primary_sport
        ));
    }

    match profile.weeks_to_race {
        Some(weeks) if profile.in_taper => description.push_str(&format!(
            " Taper: race in {} week{}, quality sessions swapped for easy efforts.",
            weeks,
            if weeks == 1 { "" } else { "s" }
        )),
        Some(weeks) if profile.race_approaching => description.push_str(&format!(
            " Race in {} weeks: keep quality sessions sharp.",
            weeks
        )),
        _ => {}
    }

    description
}
