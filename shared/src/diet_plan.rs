//! Weekly diet plan generation
//!
//! Each day has four meals taking fixed shares of the daily calorie and
//! protein targets. Monday has its own menu; the other six days rotate
//! through alternating templates and a protein/side pairing per day.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::metabolic::{round_to_u32, CalculatedTargets};

/// Meal slots in serving order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    /// Share of daily calories and protein served in this slot
    pub fn share(&self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.35,
            MealSlot::Dinner => 0.30,
            MealSlot::Snack => 0.10,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        };
        f.write_str(s)
    }
}

/// Plan days, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl PlanDay {
    pub const ALL: [PlanDay; 7] = [
        PlanDay::Monday,
        PlanDay::Tuesday,
        PlanDay::Wednesday,
        PlanDay::Thursday,
        PlanDay::Friday,
        PlanDay::Saturday,
        PlanDay::Sunday,
    ];
}

impl From<chrono::Weekday> for PlanDay {
    fn from(weekday: chrono::Weekday) -> Self {
        PlanDay::ALL[weekday.num_days_from_monday() as usize]
    }
}

/// One planned meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub name: MealSlot,
    pub description: String,
    pub calories: u32,
    pub protein: u32,
}

/// Meals planned for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMeals {
    pub meals: Vec<PlannedMeal>,
}

impl DayMeals {
    pub fn total_calories(&self) -> u32 {
        self.meals.iter().map(|m| m.calories).sum()
    }
}

/// Seven days of meals keyed by weekday
pub type DietPlan = BTreeMap<PlanDay, DayMeals>;

fn monday_description(slot: MealSlot) -> String {
    let s = match slot {
        MealSlot::Breakfast => "Protein Oatmeal with Berries",
        MealSlot::Lunch => "Chicken Salad with Quinoa",
        MealSlot::Dinner => "Baked Salmon with Vegetables",
        MealSlot::Snack => "Greek Yogurt with Almonds",
    };
    s.to_string()
}

const ROTATING_PROTEINS: [&str; 6] = [
    "Turkey",
    "Lean Beef",
    "Tofu",
    "White Fish",
    "Eggs",
    "Protein Shake",
];

const ROTATING_SIDES: [&str; 6] = [
    "Brown Rice",
    "Sweet Potato",
    "Whole Grain Pasta",
    "Bulgur",
    "Beans",
    "Quinoa",
];

/// Description for a rotating (Tuesday..Sunday) day at `index` 0..6
fn rotating_description(slot: MealSlot, index: usize) -> String {
    let even = index % 2 == 0;
    match slot {
        MealSlot::Breakfast if even => "Protein Smoothie Bowl".to_string(),
        MealSlot::Breakfast => "Eggs with Whole Grain Toast".to_string(),
        MealSlot::Lunch => format!("{} with {}", ROTATING_PROTEINS[index], ROTATING_SIDES[index]),
        MealSlot::Dinner if even => "Lean Protein Stir Fry".to_string(),
        MealSlot::Dinner => "Protein with Roasted Vegetables".to_string(),
        MealSlot::Snack if even => "Protein Bar".to_string(),
        MealSlot::Snack => "Cottage Cheese with Fruit".to_string(),
    }
}

fn build_day(targets: &CalculatedTargets, describe: impl Fn(MealSlot) -> String) -> DayMeals {
    let calories = f64::from(targets.daily_calorie_target);
    let protein = f64::from(targets.macros.protein);
    DayMeals {
        meals: MealSlot::ALL
            .into_iter()
            .map(|slot| PlannedMeal {
                name: slot,
                description: describe(slot),
                calories: round_to_u32(calories * slot.share()),
                protein: round_to_u32(protein * slot.share()),
            })
            .collect(),
    }
}

/// Build a full week of meals from the calorie and protein targets
pub fn generate_diet_plan(targets: &CalculatedTargets) -> DietPlan {
    let mut plan = DietPlan::new();
    plan.insert(PlanDay::Monday, build_day(targets, monday_description));
    for (index, day) in PlanDay::ALL.into_iter().skip(1).enumerate() {
        plan.insert(day, build_day(targets, |slot| rotating_description(slot, index)));
    }
    plan
}
