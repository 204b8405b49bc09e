//! Per-user document
//!
//! The whole state of one user lives in a single document. Transitions take
//! the document by value and return the updated one; loading and persisting
//! is the caller's job.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::challenges::{generate_challenges, ChallengeCategory};
use crate::diet_log::{DietLogs, MealEntry};
use crate::diet_plan::{generate_diet_plan, DietPlan};
use crate::errors::CoreResult;
use crate::gamification::{Gamification, StreakTransition};
use crate::metabolic::{calculate_targets, CalculatedTargets};
use crate::profile::Profile;
use crate::progress::{weekly_weight_change, WeightEntries};
use crate::validation::validate_weight_kg;
use crate::workout_log::{WorkoutLog, WorkoutLogs};
use crate::workout_plan::{generate_workout_plan, WorkoutPlan, WorkoutSplit};

/// Profile fields plus the targets derived from them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSection {
    #[serde(flatten)]
    pub profile: Profile,
    pub calculated: CalculatedTargets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutsSection {
    pub plan: WorkoutPlan,
    #[serde(default)]
    pub logs: WorkoutLogs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietSection {
    pub plan: DietPlan,
    #[serde(default)]
    pub logs: DietLogs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSection {
    #[serde(default)]
    pub weight_entries: WeightEntries,
    pub weight_change: String,
}

/// Everything stored for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    pub profile: ProfileSection,
    pub workouts: WorkoutsSection,
    pub diet: DietSection,
    pub progress: ProgressSection,
    pub gamification: Gamification,
}

impl UserDocument {
    /// Build the initial document for a newly onboarded user
    pub fn new(profile: Profile, today: NaiveDate) -> CoreResult<Self> {
        profile.check()?;
        let calculated = calculate_targets(&profile)?;
        let split = profile.workout_split.unwrap_or_default();
        let weight_entries = WeightEntries::from([(today, profile.weight_kg)]);

        Ok(Self {
            workouts: WorkoutsSection {
                plan: generate_workout_plan(split),
                logs: WorkoutLogs::new(),
            },
            diet: DietSection {
                plan: generate_diet_plan(&calculated),
                logs: DietLogs::new(),
            },
            progress: ProgressSection {
                weight_change: weekly_weight_change(&weight_entries),
                weight_entries,
            },
            gamification: Gamification::new(today),
            profile: ProfileSection {
                profile,
                calculated,
            },
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile.profile
    }

    pub fn targets(&self) -> &CalculatedTargets {
        &self.profile.calculated
    }

    /// Replace the profile and recompute targets. A changed preferred split
    /// regenerates the workout plan; the diet plan is left alone.
    pub fn update_profile(mut self, profile: Profile) -> CoreResult<Self> {
        profile.check()?;
        let calculated = calculate_targets(&profile)?;
        if let Some(split) = profile.workout_split {
            if split != self.workouts.plan.split {
                self.workouts.plan = generate_workout_plan(split);
            }
        }
        self.profile = ProfileSection {
            profile,
            calculated,
        };
        Ok(self)
    }

    /// Record a weight for a date, overwriting that date, and refresh the trend
    pub fn log_weight(mut self, date: NaiveDate, weight_kg: f64) -> CoreResult<Self> {
        validate_weight_kg(weight_kg)?;
        self.progress.weight_entries.insert(date, weight_kg);
        self.progress.weight_change = weekly_weight_change(&self.progress.weight_entries);
        Ok(self)
    }

    /// Record the workout for a date, replacing any earlier one
    pub fn log_workout(mut self, date: NaiveDate, log: WorkoutLog) -> CoreResult<Self> {
        log.check()?;
        self.workouts.logs.insert(date, log);
        self.recompute_points();
        Ok(self)
    }

    /// Record a meal for a date under its lowercased meal type
    pub fn log_meal(mut self, date: NaiveDate, meal: MealEntry) -> CoreResult<Self> {
        meal.check()?;
        self.diet
            .logs
            .entry(date)
            .or_default()
            .insert(meal.key(), meal);
        self.recompute_points();
        Ok(self)
    }

    pub fn change_workout_split(mut self, split: WorkoutSplit) -> Self {
        self.workouts.plan = generate_workout_plan(split);
        self.profile.profile.workout_split = Some(split);
        self
    }

    /// Rebuild the diet plan from the current targets
    pub fn regenerate_diet_plan(mut self) -> Self {
        self.diet.plan = generate_diet_plan(&self.profile.calculated);
        self
    }

    /// Replace the challenge board with a fresh draw
    pub fn assign_challenges<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.gamification.challenges = Some(generate_challenges(rng));
        self
    }

    /// Draw challenges only when none are assigned; the flag reports a draw
    pub fn ensure_challenges<R: Rng + ?Sized>(self, rng: &mut R) -> (Self, bool) {
        if self.gamification.challenges.is_some() {
            return (self, false);
        }
        (self.assign_challenges(rng), true)
    }

    pub fn complete_challenge(mut self, category: ChallengeCategory) -> CoreResult<Self> {
        self.gamification.complete_challenge(category)?;
        Ok(self)
    }

    pub fn check_in(mut self, today: NaiveDate) -> (Self, StreakTransition) {
        let transition = self.gamification.check_in(today);
        (self, transition)
    }

    fn recompute_points(&mut self) {
        self.gamification
            .recompute_points(self.workouts.logs.len(), self.diet.logs.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diet_plan::PlanDay;
    use crate::errors::CoreError;
    use crate::gamification::Streak;
    use crate::profile::fixtures::sample_profile;
    use crate::workout_log::LoggedExercise;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn onboarded() -> UserDocument {
        UserDocument::new(sample_profile(), date("2024-01-01")).unwrap()
    }

    fn squat_day() -> WorkoutLog {
        WorkoutLog {
            name: "Legs".to_string(),
            exercises: vec![LoggedExercise {
                name: "Squats".to_string(),
                sets: 4,
                reps: "8-12".to_string(),
                weight: 100.0,
            }],
        }
    }

    fn meal(name: &str) -> MealEntry {
        MealEntry {
            name: name.to_string(),
            food_item: "Rice and chicken".to_string(),
            calories: 600.0,
            protein: 45.0,
            carbs: 70.0,
            fat: 12.0,
        }
    }

    #[test]
    fn test_new_document_is_seeded() {
        let doc = onboarded();
        assert_eq!(doc.targets().maintenance_calories, 2759);
        assert_eq!(doc.workouts.plan.split, WorkoutSplit::FullBody);
        assert_eq!(doc.diet.plan.len(), 7);
        assert_eq!(doc.progress.weight_entries[&date("2024-01-01")], 80.0);
        assert_eq!(doc.progress.weight_change, "No data");
        assert_eq!(doc.gamification.streak, Streak { current: 1, longest: 1 });
        assert_eq!(doc.gamification.science_points, 0);
        assert!(doc.gamification.challenges.is_none());
    }

    #[test]
    fn test_new_document_uses_preferred_split() {
        let mut profile = sample_profile();
        profile.workout_split = Some(WorkoutSplit::PushPullLegs);
        let doc = UserDocument::new(profile, date("2024-01-01")).unwrap();
        assert_eq!(doc.workouts.plan.day1.name, "Push");
    }

    #[test]
    fn test_new_document_rejects_invalid_profile() {
        let mut profile = sample_profile();
        profile.age = 10;
        assert!(UserDocument::new(profile, date("2024-01-01")).is_err());
    }

    #[test]
    fn test_log_weight_updates_trend() {
        let doc = onboarded().log_weight(date("2024-01-15"), 78.0).unwrap();
        assert_eq!(doc.progress.weight_change, "-1.0kg");

        let doc = doc.log_weight(date("2024-01-15"), 79.0).unwrap();
        assert_eq!(doc.progress.weight_entries.len(), 2);
        assert_eq!(doc.progress.weight_change, "-0.5kg");

        assert!(doc.log_weight(date("2024-01-16"), 10.0).is_err());
    }

    #[test]
    fn test_logs_recompute_points() {
        let doc = onboarded()
            .log_workout(date("2024-01-02"), squat_day())
            .unwrap()
            .log_meal(date("2024-01-02"), meal("Lunch"))
            .unwrap()
            .log_meal(date("2024-01-02"), meal("Dinner"))
            .unwrap();
        // 1 workout + 1 diet day = 1.5, rounded
        assert_eq!(doc.gamification.science_points, 2);
        assert_eq!(doc.diet.logs[&date("2024-01-02")].len(), 2);

        let doc = doc.log_workout(date("2024-01-02"), squat_day()).unwrap();
        assert_eq!(doc.workouts.logs.len(), 1);
        assert_eq!(doc.gamification.science_points, 2);
    }

    #[test]
    fn test_same_meal_type_overwrites() {
        let mut second = meal("lunch");
        second.food_item = "Salad".to_string();
        let doc = onboarded()
            .log_meal(date("2024-01-02"), meal("Lunch"))
            .unwrap()
            .log_meal(date("2024-01-02"), second)
            .unwrap();
        let day = &doc.diet.logs[&date("2024-01-02")];
        assert_eq!(day.len(), 1);
        assert_eq!(day["lunch"].food_item, "Salad");
    }

    #[test]
    fn test_invalid_workout_rejected() {
        let mut log = squat_day();
        log.exercises.clear();
        assert!(onboarded().log_workout(date("2024-01-02"), log).is_err());
    }

    #[test]
    fn test_change_split_and_profile_update() {
        let doc = onboarded().change_workout_split(WorkoutSplit::UpperLower);
        assert_eq!(doc.workouts.plan.day1.name, "Upper");
        assert_eq!(doc.profile().workout_split, Some(WorkoutSplit::UpperLower));

        let mut profile = doc.profile().clone();
        profile.goal = crate::profile::Goal::Cut;
        profile.workout_split = Some(WorkoutSplit::PushPullLegs);
        let doc = doc.update_profile(profile).unwrap();
        assert_eq!(doc.targets().daily_calorie_target, 2459);
        assert_eq!(doc.workouts.plan.split, WorkoutSplit::PushPullLegs);
        // diet plan still reflects the old target until regenerated
        assert_eq!(doc.diet.plan[&PlanDay::Monday].meals[0].calories, 690);
        let doc = doc.regenerate_diet_plan();
        assert_eq!(doc.diet.plan[&PlanDay::Monday].meals[0].calories, 615);
    }

    #[test]
    fn test_challenge_flow() {
        let doc = onboarded();
        assert!(matches!(
            doc.clone().complete_challenge(ChallengeCategory::Strength),
            Err(CoreError::InvalidInput(_))
        ));

        let doc = doc
            .assign_challenges(&mut StdRng::seed_from_u64(5))
            .complete_challenge(ChallengeCategory::Strength)
            .unwrap()
            .complete_challenge(ChallengeCategory::Strength)
            .unwrap();
        assert_eq!(doc.gamification.science_points, 3);
    }

    #[test]
    fn test_ensure_challenges_draws_only_once() {
        let mut rng = StdRng::seed_from_u64(11);
        let (doc, drawn) = onboarded().ensure_challenges(&mut rng);
        assert!(drawn);
        let board = doc.gamification.challenges.clone();
        assert!(board.is_some());

        let (doc, drawn) = doc.ensure_challenges(&mut rng);
        assert!(!drawn);
        assert_eq!(doc.gamification.challenges, board);
    }

    #[test]
    fn test_check_in() {
        let (doc, transition) = onboarded().check_in(date("2024-01-02"));
        assert_eq!(transition, StreakTransition::Extended);
        assert_eq!(doc.gamification.streak.current, 2);
    }

    #[test]
    fn test_document_json_shape() {
        let json = serde_json::to_value(onboarded()).unwrap();
        assert_eq!(json["profile"]["name"], "Alex");
        assert_eq!(json["profile"]["calculated"]["dailyCalorieTarget"], 2759);
        assert_eq!(json["workouts"]["plan"]["split"], "Full Body");
        assert_eq!(json["progress"]["weightEntries"]["2024-01-01"], 80.0);
        assert_eq!(json["gamification"]["streak"]["longest"], 1);

        let back: UserDocument = serde_json::from_value(json).unwrap();
        assert_eq!(back, onboarded());
    }
}
