//! Gamification accumulator
//!
//! Science points are derived from log counts, streaks advance on
//! consecutive-day check-ins and challenges award a one-time bonus.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::challenges::{ChallengeBoard, ChallengeCategory};
use crate::errors::{CoreError, CoreResult};

/// Points awarded for completing a weekly challenge
pub const CHALLENGE_BONUS_POINTS: u32 = 3;

const WORKOUT_POINTS: f64 = 1.0;
const DIET_DAY_POINTS: f64 = 0.5;

/// Streak length that unlocks the weekly progress report
pub const REPORT_UNLOCK_STREAK: u32 = 7;

const FLOW_PERCENT_PER_DAY: f64 = 14.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
}

impl Default for Streak {
    fn default() -> Self {
        Self {
            current: 1,
            longest: 1,
        }
    }
}

/// Progress toward the weekly report, driven by the current streak
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowMeter {
    /// 0..=100
    pub progress_percent: f64,
    pub days_to_unlock: u32,
    pub report_unlocked: bool,
}

impl FlowMeter {
    pub fn from_streak(current: u32) -> Self {
        Self {
            progress_percent: (f64::from(current) * FLOW_PERCENT_PER_DAY).min(100.0),
            days_to_unlock: REPORT_UNLOCK_STREAK.saturating_sub(current),
            report_unlocked: current >= REPORT_UNLOCK_STREAK,
        }
    }
}

/// Which branch a streak update took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakTransition {
    Extended,
    Reset,
    Unchanged,
}

/// Gamification section of a user document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gamification {
    pub streak: Streak,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<ChallengeBoard>,
    #[serde(default)]
    pub science_points: u32,
    pub last_active: NaiveDate,
}

impl Gamification {
    /// Fresh state for a user first seen on `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            streak: Streak::default(),
            challenges: None,
            science_points: 0,
            last_active: today,
        }
    }

    /// Apply the daily streak rule for a check-in on `today`
    pub fn check_in(&mut self, today: NaiveDate) -> StreakTransition {
        let transition = update_streak(&mut self.streak, self.last_active, today);
        if transition != StreakTransition::Unchanged {
            self.last_active = today;
        }
        transition
    }

    /// Recompute points from log counts, replacing the current total
    pub fn recompute_points(&mut self, workout_count: usize, diet_day_count: usize) {
        self.science_points = science_points(workout_count, diet_day_count);
    }

    /// Complete a challenge once. Returns the points awarded, 0 if it was
    /// already completed.
    pub fn complete_challenge(&mut self, category: ChallengeCategory) -> CoreResult<u32> {
        let board = self.challenges.as_mut().ok_or_else(|| {
            CoreError::InvalidInput("no challenges have been assigned yet".to_string())
        })?;
        if !board.mark_completed(category) {
            return Ok(0);
        }
        self.science_points += CHALLENGE_BONUS_POINTS;
        Ok(CHALLENGE_BONUS_POINTS)
    }
}

/// round(workouts * 1 + diet days * 0.5)
pub fn science_points(workout_count: usize, diet_day_count: usize) -> u32 {
    let points = workout_count as f64 * WORKOUT_POINTS + diet_day_count as f64 * DIET_DAY_POINTS;
    crate::metabolic::round_to_u32(points)
}

/// Advance, reset or keep a streak given the last active day and today
pub fn update_streak(streak: &mut Streak, last_active: NaiveDate, today: NaiveDate) -> StreakTransition {
    let diff = (today - last_active).num_days();
    match diff {
        1 => {
            streak.current += 1;
            streak.longest = streak.longest.max(streak.current);
            StreakTransition::Extended
        }
        d if d > 1 => {
            streak.current = 1;
            StreakTransition::Reset
        }
        // same day or clock skew
        _ => StreakTransition::Unchanged,
    }
}
