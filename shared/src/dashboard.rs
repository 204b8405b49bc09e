//! Dashboard summary
//!
//! A read-only view over one user document for a given day: streak and
//! flow meter, targets, whether today's logs exist and today's macro totals.

use chrono::NaiveDate;
use serde::Serialize;

use crate::challenges::ChallengeBoard;
use crate::diet_log::{day_totals, DailyTotals};
use crate::document::UserDocument;
use crate::gamification::{FlowMeter, Streak};
use crate::metabolic::CalculatedTargets;
use crate::workout_plan::WorkoutDay;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub streak: Streak,
    pub science_points: u32,
    pub flow_meter: FlowMeter,
    pub targets: CalculatedTargets,
    pub weight_change: String,
    pub workout_logged_today: bool,
    pub diet_logged_today: bool,
    pub todays_workout: WorkoutDay,
    pub diet_totals: DailyTotals,
    pub challenges: Option<ChallengeBoard>,
}

impl DashboardSummary {
    pub fn from_document(document: &UserDocument, today: NaiveDate) -> Self {
        let todays_meals = document.diet.logs.get(&today);
        let gamification = &document.gamification;

        Self {
            date: today,
            streak: gamification.streak,
            science_points: gamification.science_points,
            flow_meter: FlowMeter::from_streak(gamification.streak.current),
            targets: *document.targets(),
            weight_change: document.progress.weight_change.clone(),
            workout_logged_today: document.workouts.logs.contains_key(&today),
            // an emptied day does not count as logged
            diet_logged_today: todays_meals.is_some_and(|day| !day.is_empty()),
            todays_workout: document.workouts.plan.day_for_date(today).clone(),
            diet_totals: todays_meals.map(day_totals).unwrap_or_default(),
            challenges: gamification.challenges.clone(),
        }
    }
}
