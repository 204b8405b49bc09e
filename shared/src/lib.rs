//! FitFlow Shared Library
//!
//! The calculation core used by the backend and the WASM module: profile
//! types, energy and macro targets, weight trends, workout and diet plans,
//! weekly challenges, gamification and the per-user document model.

pub mod challenges;
pub mod dashboard;
pub mod diet_log;
pub mod diet_plan;
pub mod document;
pub mod errors;
pub mod gamification;
pub mod metabolic;
pub mod profile;
pub mod progress;
pub mod validation;
pub mod workout_log;
pub mod workout_plan;

// Re-export commonly used items
pub use challenges::{generate_challenges, ChallengeBoard, ChallengeCategory};
pub use dashboard::DashboardSummary;
pub use diet_log::{day_totals, DailyTotals, DayMealLog, DietLogs, MealEntry};
pub use diet_plan::{generate_diet_plan, DayMeals, DietPlan, MealSlot, PlanDay, PlannedMeal};
pub use document::UserDocument;
pub use errors::*;
pub use gamification::{
    science_points, update_streak, FlowMeter, Gamification, Streak, StreakTransition,
};
pub use metabolic::{calculate_targets, CalculatedTargets, Macros};
pub use profile::{Gender, Goal, Profile};
pub use progress::{analyze_weight_trend, weekly_weight_change, WeightEntries, WeightTrend};
pub use workout_log::{LoggedExercise, WorkoutLog, WorkoutLogs};
pub use workout_plan::{
    generate_workout_plan, generate_workout_plan_by_name, WorkoutDay, WorkoutPlan, WorkoutSplit,
    REST_DAY,
};
