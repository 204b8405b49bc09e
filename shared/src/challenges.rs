//! Weekly challenges
//!
//! One challenge is drawn per category from a fixed pool. Draws are
//! independent and repeats across weeks are allowed.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Challenge category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeCategory {
    Strength,
    Nutrition,
    Recovery,
}

impl ChallengeCategory {
    pub const ALL: [ChallengeCategory; 3] = [
        ChallengeCategory::Strength,
        ChallengeCategory::Nutrition,
        ChallengeCategory::Recovery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeCategory::Strength => "strength",
            ChallengeCategory::Nutrition => "nutrition",
            ChallengeCategory::Recovery => "recovery",
        }
    }

    /// The fixed pool challenges in this category are drawn from
    pub fn pool(&self) -> &'static [&'static str] {
        match self {
            ChallengeCategory::Strength => &STRENGTH_POOL,
            ChallengeCategory::Nutrition => &NUTRITION_POOL,
            ChallengeCategory::Recovery => &RECOVERY_POOL,
        }
    }
}

impl fmt::Display for ChallengeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChallengeCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::InvalidChallengeCategory(s.to_string()))
    }
}

const STRENGTH_POOL: [&str; 3] = [
    "Add 2.5kg to your squat this week",
    "Increase reps by 2 on your main lifts",
    "Try a new compound exercise variation",
];

const NUTRITION_POOL: [&str; 3] = [
    "Hit protein goal before 6PM for 3 days",
    "Drink 3L of water daily for a week",
    "Add a vegetable to every meal",
];

const RECOVERY_POOL: [&str; 3] = [
    "Log 7+ hours of sleep 4 nights",
    "Add 10 minutes of stretching after workouts",
    "Take a complete rest day with no exercise",
];

/// The active challenges and their completion flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeBoard {
    pub strength: String,
    pub nutrition: String,
    pub recovery: String,
    #[serde(default)]
    pub strength_completed: bool,
    #[serde(default)]
    pub nutrition_completed: bool,
    #[serde(default)]
    pub recovery_completed: bool,
}

impl ChallengeBoard {
    pub fn challenge(&self, category: ChallengeCategory) -> &str {
        match category {
            ChallengeCategory::Strength => &self.strength,
            ChallengeCategory::Nutrition => &self.nutrition,
            ChallengeCategory::Recovery => &self.recovery,
        }
    }

    pub fn is_completed(&self, category: ChallengeCategory) -> bool {
        match category {
            ChallengeCategory::Strength => self.strength_completed,
            ChallengeCategory::Nutrition => self.nutrition_completed,
            ChallengeCategory::Recovery => self.recovery_completed,
        }
    }

    /// Mark a category completed; returns false if it already was
    pub fn mark_completed(&mut self, category: ChallengeCategory) -> bool {
        let flag = match category {
            ChallengeCategory::Strength => &mut self.strength_completed,
            ChallengeCategory::Nutrition => &mut self.nutrition_completed,
            ChallengeCategory::Recovery => &mut self.recovery_completed,
        };
        if *flag {
            return false;
        }
        *flag = true;
        true
    }

    pub fn completed_count(&self) -> usize {
        ChallengeCategory::ALL
            .into_iter()
            .filter(|c| self.is_completed(*c))
            .count()
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, category: ChallengeCategory) -> String {
    let pool = category.pool();
    pool[rng.gen_range(0..pool.len())].to_string()
}

/// Draw a fresh board, all categories open
pub fn generate_challenges<R: Rng + ?Sized>(rng: &mut R) -> ChallengeBoard {
    ChallengeBoard {
        strength: draw(rng, ChallengeCategory::Strength),
        nutrition: draw(rng, ChallengeCategory::Nutrition),
        recovery: draw(rng, ChallengeCategory::Recovery),
        strength_completed: false,
        nutrition_completed: false,
        recovery_completed: false,
    }
}
