//! Recovery constraints applied to an assembled week.

use crate::cardio::RECOVERY_CARDIO;
use crate::{Catalog, CardioTemplate, DayPlan, Error, Intensity, Result};

/// Hard cardio days allowed back to back before a downgrade
pub const MAX_CONSECUTIVE_HARD: usize = 2;

pub const INTENSITY_REDUCED_NOTE: &str = "Intensity reduced — recovery day";
pub const POST_LIFT_NOTE: &str = "Easy cardio — recovery after heavy lift";

/// True for strength labels that load the legs heavily
pub fn is_heavy_lower_label(label: &str) -> bool {
    let label = label.to_lowercase();
    ["legs", "lower", "full"]
        .iter()
        .any(|keyword| label.contains(keyword))
}

/// Walk the week Monday to Sunday and downgrade cardio that breaks a
/// recovery rule
///
/// Two rules, checked against the session as scheduled:
///
/// 1. A hard or max session preceded by two or more consecutive hard days.
///    The streak is counted on days already processed, so an earlier
///    downgrade resets it.
/// 2. A hard session the day after a lower-body or full-body lift.
///
/// When either fires the session is replaced once: by the first easy
/// template of the same activity type, or failing that by the first easy
/// template of any type (rule 1) or the recovery ride (rule 2 only).
pub fn enforce_constraints(days: &mut [DayPlan], catalog: &Catalog) -> Result<()> {
    for i in 0..days.len() {
        let Some(cardio) = days[i].cardio.as_ref() else {
            continue;
        };

        let hard_streak = days[..i]
            .iter()
            .rev()
            .take_while(|d| d.cardio.as_ref().is_some_and(|c| c.intensity.is_hard()))
            .count();
        let too_many_hard = cardio.intensity.is_hard() && hard_streak >= MAX_CONSECUTIVE_HARD;

        let after_heavy_lift = i > 0
            && cardio.intensity == Intensity::Hard
            && days[i - 1]
                .strength_label
                .as_deref()
                .is_some_and(is_heavy_lower_label);

        if !too_many_hard && !after_heavy_lift {
            continue;
        }

        let original = cardio.template_id.clone();
        let replacement = easy_replacement(catalog, cardio.cardio_type, too_many_hard)?;

        tracing::debug!(
            "{}: {} downgraded to {} (hard streak {}, after heavy lift {})",
            days[i].day,
            original,
            replacement.id,
            hard_streak,
            after_heavy_lift
        );

        let day = &mut days[i];
        day.cardio = Some(replacement.into());
        if too_many_hard {
            day.add_note(INTENSITY_REDUCED_NOTE);
        }
        if after_heavy_lift {
            day.add_note(POST_LIFT_NOTE);
        }
    }

    Ok(())
}

fn easy_replacement(
    catalog: &Catalog,
    cardio_type: crate::CardioType,
    any_type: bool,
) -> Result<&CardioTemplate> {
    if let Some(template) = catalog.easy_cardio_of_type(cardio_type) {
        return Ok(template);
    }
    if any_type {
        catalog.first_easy_cardio().ok_or_else(|| {
            Error::CatalogValidation("catalog has no easy cardio template".to_string())
        })
    } else {
        catalog.cardio(RECOVERY_CARDIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_default_catalog, CardioAssignment, CardioType};

    fn day(index: usize, lift: Option<&str>, template: Option<&str>, catalog: &Catalog) -> DayPlan {
        let cardio: Option<CardioAssignment> =
            template.map(|id| catalog.cardio(id).unwrap().into());
        DayPlan {
            day: crate::cardio::DAY_LABELS[index].to_string(),
            day_index: index,
            has_strength: lift.is_some(),
            strength_label: lift.map(str::to_string),
            is_rest: lift.is_none() && cardio.is_none(),
            cardio,
            note: None,
        }
    }

    fn week(schedule: [(Option<&str>, Option<&str>); 7], catalog: &Catalog) -> Vec<DayPlan> {
        schedule.iter()
            .enumerate()
            .map(|(i, (lift, cardio))| day(i, *lift, *cardio, catalog))
            .collect()
    }

    #[test]
    fn test_heavy_lower_labels() {
        assert!(is_heavy_lower_label("Lower A"));
        assert!(is_heavy_lower_label("Legs B"));
        assert!(is_heavy_lower_label("Full Body C"));
        assert!(!is_heavy_lower_label("Upper"));
        assert!(!is_heavy_lower_label("Push A"));
    }

    #[test]
    fn test_third_hard_day_downgraded_to_same_type() {
        let catalog = build_default_catalog();
        let mut days = week(
            [
                (None, Some("run_intervals")),
                (None, Some("run_tempo")),
                (None, Some("bike_intervals")),
                (None, None),
                (None, None),
                (None, None),
                (None, None),
            ],
            &catalog,
        );

        enforce_constraints(&mut days, &catalog).unwrap();

        let wed = days[2].cardio.as_ref().unwrap();
        assert_eq!(wed.template_id, "bike_easy");
        assert_eq!(wed.intensity, Intensity::Easy);
        assert_eq!(days[2].note.as_deref(), Some(INTENSITY_REDUCED_NOTE));
        // Monday and Tuesday untouched
        assert_eq!(days[0].cardio.as_ref().unwrap().template_id, "run_intervals");
        assert_eq!(days[1].cardio.as_ref().unwrap().template_id, "run_tempo");
    }

    #[test]
    fn test_downgrade_resets_streak() {
        let catalog = build_default_catalog();
        let mut days = week(
            [
                (None, Some("run_intervals")),
                (None, Some("run_tempo")),
                (None, Some("bike_intervals")),
                (None, Some("row_intervals")),
                (None, Some("swim_intervals")),
                (None, None),
                (None, None),
            ],
            &catalog,
        );

        enforce_constraints(&mut days, &catalog).unwrap();

        let ids: Vec<_> = days
            .iter()
            .filter_map(|d| d.cardio.as_ref().map(|c| c.template_id.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec!["run_intervals", "run_tempo", "bike_easy", "row_intervals", "swim_intervals"]
        );
    }

    #[test]
    fn test_hard_after_lower_lift() {
        let catalog = build_default_catalog();
        let mut days = week(
            [
                (Some("Lower A"), None),
                (None, Some("run_tempo")),
                (Some("Upper B"), None),
                (None, Some("run_intervals")),
                (None, None),
                (None, None),
                (None, None),
            ],
            &catalog,
        );

        enforce_constraints(&mut days, &catalog).unwrap();

        assert_eq!(days[1].cardio.as_ref().unwrap().template_id, "run_easy");
        assert_eq!(days[1].note.as_deref(), Some(POST_LIFT_NOTE));
        // After an upper day, hard stays hard
        assert_eq!(days[3].cardio.as_ref().unwrap().template_id, "run_intervals");
        assert!(days[3].note.is_none());
    }

    #[test]
    fn test_moderate_after_lift_is_kept() {
        let catalog = build_default_catalog();
        let mut days = week(
            [
                (Some("Full Body A"), None),
                (None, Some("run_long")),
                (None, None),
                (None, None),
                (None, None),
                (None, None),
                (None, None),
            ],
            &catalog,
        );

        enforce_constraints(&mut days, &catalog).unwrap();
        assert_eq!(days[1].cardio.as_ref().unwrap().template_id, "run_long");
    }

    #[test]
    fn test_max_intensity_only_counts_for_streaks() {
        let mut catalog = build_default_catalog();
        catalog.cardio.push(crate::CardioTemplate {
            id: "run_sprints".into(),
            title: "All-out Sprints".into(),
            cardio_type: CardioType::Run,
            duration: 20,
            intensity: Intensity::Max,
        });
        let mut days = week(
            [
                (Some("Legs A"), Some("run_sprints")),
                (None, Some("run_sprints")),
                (None, Some("run_sprints")),
                (None, None),
                (None, None),
                (None, None),
                (None, None),
            ],
            &catalog,
        );

        enforce_constraints(&mut days, &catalog).unwrap();

        // Tuesday follows legs but is max, not hard
        assert_eq!(days[1].cardio.as_ref().unwrap().template_id, "run_sprints");
        assert_eq!(days[2].cardio.as_ref().unwrap().template_id, "run_easy");
    }

    #[test]
    fn test_both_rules_fire_on_one_day() {
        let catalog = build_default_catalog();
        let mut days = week(
            [
                (None, Some("run_intervals")),
                (Some("Legs A"), Some("bike_threshold")),
                (None, Some("run_tempo")),
                (None, None),
                (None, None),
                (None, None),
                (None, None),
            ],
            &catalog,
        );

        enforce_constraints(&mut days, &catalog).unwrap();

        assert_eq!(days[2].cardio.as_ref().unwrap().template_id, "run_easy");
        assert_eq!(
            days[2].note.as_deref(),
            Some("Intensity reduced — recovery day · Easy cardio — recovery after heavy lift")
        );
    }

    #[test]
    fn test_recovery_ride_when_type_has_no_easy_template() {
        let catalog = build_default_catalog();
        let mut days = week(
            [
                (Some("Lower A"), None),
                (None, Some("hiit_circuit")),
                (None, None),
                (None, None),
                (None, None),
                (None, None),
                (None, None),
            ],
            &catalog,
        );

        enforce_constraints(&mut days, &catalog).unwrap();

        let tue = days[1].cardio.as_ref().unwrap();
        assert_eq!(tue.template_id, RECOVERY_CARDIO);
        assert_eq!(tue.cardio_type, CardioType::Bike);
    }

    #[test]
    fn test_streak_falls_back_to_any_easy_template() {
        let catalog = build_default_catalog();
        let mut days = week(
            [
                (None, Some("run_intervals")),
                (None, Some("bike_intervals")),
                (None, Some("hiit_circuit")),
                (None, None),
                (None, None),
                (None, None),
                (None, None),
            ],
            &catalog,
        );

        enforce_constraints(&mut days, &catalog).unwrap();

        let first_easy = catalog.first_easy_cardio().unwrap();
        assert_eq!(days[2].cardio.as_ref().unwrap().template_id, first_easy.id);
    }

    #[test]
    fn test_no_easy_template_is_an_error() {
        let mut catalog = build_default_catalog();
        let mut days = week(
            [
                (None, Some("run_intervals")),
                (None, Some("run_tempo")),
                (None, Some("bike_intervals")),
                (None, None),
                (None, None),
                (None, None),
                (None, None),
            ],
            &catalog,
        );
        catalog.cardio.retain(|t| t.intensity != Intensity::Easy);

        let result = enforce_constraints(&mut days, &catalog);
        assert!(matches!(result, Err(Error::CatalogValidation(_))));
    }
}
