//! Read-only views over generated plans.

use crate::{CardioAssignment, GeneratedPlan, WeeklyHybridPlan};
use chrono::Weekday;

/// Cardio scheduled on the given weekday, if any
pub fn cardio_for_weekday(plan: &WeeklyHybridPlan, weekday: Weekday) -> Option<&CardioAssignment> {
    let index = weekday.num_days_from_monday() as usize;
    plan.days
        .iter()
        .find(|d| d.day_index == index)
        .and_then(|d| d.cardio.as_ref())
}

/// Today's cardio, given a Sunday-based day of week (0 = Sunday, 6 = Saturday)
///
/// Plans are Monday-based, so Sunday maps to index 6 and Monday to 0.
pub fn todays_cardio(plan: &WeeklyHybridPlan, sunday_based_day: u32) -> Option<&CardioAssignment> {
    let index = (sunday_based_day as usize + 6) % 7;
    plan.days
        .iter()
        .find(|d| d.day_index == index)
        .and_then(|d| d.cardio.as_ref())
}

/// Plain-text rendering of the week, one line per day plus totals
pub fn weekly_summary(plan: &WeeklyHybridPlan) -> String {
    let mut out = format!("Weekly plan ({}): {}\n", plan.program_type, plan.description);

    for day in &plan.days {
        let mut parts = Vec::new();
        if let Some(ref label) = day.strength_label {
            parts.push(format!("Strength: {}", label));
        }
        if let Some(ref cardio) = day.cardio {
            parts.push(format!(
                "Cardio: {} ({} min, {})",
                cardio.title, cardio.duration, cardio.intensity
            ));
        }
        if day.is_rest {
            parts.push("Rest".to_string());
        }

        let mut line = format!("{}: {}", day.day, parts.join(" + "));
        if let Some(ref note) = day.note {
            line.push_str(&format!(" [{}]", note));
        }
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str(&format!(
        "Total: {} lift days, {} cardio minutes",
        plan.weekly_lift_days, plan.weekly_cardio_minutes
    ));
    out
}

impl GeneratedPlan {
    /// Plain-text rendering of the program, one block per workout
    pub fn summary(&self) -> String {
        let mut out = format!("{} ({} days/week)\n", self.name, self.days_per_week);

        for workout in &self.workouts {
            out.push_str(&format!("\nDay {}: {}\n", workout.order, workout.name));
            for ex in &workout.exercises {
                let rpe = ex.rpe.map(|r| format!(" @ RPE {}", r)).unwrap_or_default();
                out.push_str(&format!(
                    "  - {}: {} x {}-{}{}, rest {}s\n",
                    ex.name, ex.sets, ex.reps_min, ex.reps_max, rpe, ex.rest_seconds
                ));
            }
        }

        if !self.notes.is_empty() {
            out.push_str(&format!("\n{}\n", self.notes));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate_hybrid_week;
    use crate::strength::generate_plan;
    use crate::{
        build_default_catalog, EquipmentTier, ExperienceLevel, Goal, HybridProgramInput, PlanInput,
    };
    use chrono::NaiveDate;

    fn plan() -> WeeklyHybridPlan {
        let input = HybridProgramInput {
            goal: Goal::Endurance,
            experience_level: ExperienceLevel::Intermediate,
            training_days: 4,
            sport: Some("running".into()),
            race_goals: vec![],
            training_volume: Some(ExperienceLevel::Intermediate),
        };
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        generate_hybrid_week(&build_default_catalog(), &input, today).unwrap()
    }

    #[test]
    fn test_cardio_for_weekday() {
        let plan = plan();
        assert_eq!(
            cardio_for_weekday(&plan, Weekday::Tue).map(|c| c.template_id.as_str()),
            Some("run_intervals")
        );
        assert!(cardio_for_weekday(&plan, Weekday::Mon).is_none());
    }

    #[test]
    fn test_todays_cardio_maps_sunday_based_index() {
        let plan = plan();
        // 2 = Tuesday in a Sunday-based calendar
        assert_eq!(todays_cardio(&plan, 2), cardio_for_weekday(&plan, Weekday::Tue));
        // 6 = Saturday, 0 = Sunday
        assert_eq!(todays_cardio(&plan, 6), cardio_for_weekday(&plan, Weekday::Sat));
        assert_eq!(todays_cardio(&plan, 0), cardio_for_weekday(&plan, Weekday::Sun));
    }

    #[test]
    fn test_weekly_summary_lines() {
        let plan = plan();
        let summary = weekly_summary(&plan);
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("Weekly plan (runner)"));
        assert_eq!(lines[1], "Mon: Strength: Upper A");
        assert_eq!(lines[2], "Tue: Strength: Lower A + Cardio: Run Intervals (45 min, hard)");
        assert_eq!(lines[7], "Sun: Rest");
        assert_eq!(lines[8], "Total: 4 lift days, 190 cardio minutes");
    }

    #[test]
    fn test_weekly_summary_does_not_change_plan() {
        let plan = plan();
        let before = plan.clone();
        let _ = weekly_summary(&plan);
        assert_eq!(plan, before);
    }

    #[test]
    fn test_generated_plan_summary() {
        let input = PlanInput {
            goal: Goal::Strength,
            experience_level: ExperienceLevel::Advanced,
            training_days: 4,
            equipment: EquipmentTier::FullGym,
            injuries: vec![],
            sport: None,
            gender: None,
        };
        let program = generate_plan(&build_default_catalog(), &input);
        let summary = program.summary();

        assert!(summary.starts_with("Upper/Lower Strength Program (4 days/week)"));
        assert!(summary.contains("Day 1: Upper A"));
        assert!(summary.contains("Barbell Bench Press: 4 x 3-6 @ RPE 8.5, rest 180s"));
        assert!(summary.contains("Day 4: Lower B"));
    }
}
