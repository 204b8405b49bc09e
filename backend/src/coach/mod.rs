//! AI coach
//!
//! Builds the coaching prompt from a user's document and hands it to a
//! generative text client. Client failures never reach the user: the
//! service replies with [`FALLBACK_REPLY`] instead.

mod gemini;

use anyhow::Result;
use async_trait::async_trait;
use fitflow_shared::{CalculatedTargets, Goal, UserDocument, WorkoutSplit};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::config::CoachConfig;

pub use gemini::GeminiClient;

/// Reply sent whenever the generative client fails
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I couldn't process your request right now. Please try again later.";

/// Streak length above which the prompt asks for a motivational note
const MOTIVATION_STREAK_THRESHOLD: u32 = 3;

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("coach is disabled")]
    Disabled,

    #[error("request failed: {0}")]
    Http(reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("response contained no text")]
    EmptyResponse,
}

impl From<reqwest::Error> for CoachError {
    // reqwest puts the request URL in its error text; never carry it into logs
    fn from(err: reqwest::Error) -> Self {
        CoachError::Http(err.without_url())
    }
}

/// Generates free text for a prompt
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, CoachError>;
}

/// Client used when the coach is switched off; every call fails
pub struct DisabledClient;

#[async_trait]
impl GenerativeClient for DisabledClient {
    async fn generate(&self, _prompt: &str) -> Result<String, CoachError> {
        Err(CoachError::Disabled)
    }
}

/// Pick the client for the configured coach
pub fn client_from_config(config: &CoachConfig) -> Result<Arc<dyn GenerativeClient>> {
    if !config.enabled {
        return Ok(Arc::new(DisabledClient));
    }
    if !config.has_api_key() {
        warn!("Coach is enabled without an API key; replies will use the fallback");
        return Ok(Arc::new(DisabledClient));
    }
    Ok(Arc::new(GeminiClient::from_config(config)?))
}

/// What the coach knows about the user
#[derive(Debug, Clone, PartialEq)]
pub struct CoachContext {
    pub name: String,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: Goal,
    pub targets: CalculatedTargets,
    pub weight_change: String,
    pub workout_split: WorkoutSplit,
    pub current_streak: u32,
}

impl CoachContext {
    pub fn from_document(document: &UserDocument) -> Self {
        let profile = document.profile();
        Self {
            name: profile.name.clone(),
            age: profile.age,
            height_cm: profile.height_cm,
            weight_kg: profile.weight_kg,
            goal: profile.goal,
            targets: *document.targets(),
            weight_change: document.progress.weight_change.clone(),
            workout_split: document.workouts.plan.split,
            current_streak: document.gamification.streak.current,
        }
    }
}

/// Render the coaching prompt for a user question
pub fn build_prompt(context: &CoachContext, message: &str) -> String {
    let macros = &context.targets.macros;
    let motivation = if context.current_streak > MOTIVATION_STREAK_THRESHOLD {
        "3. Motivational note for their streak\n"
    } else {
        ""
    };

    format!(
        "Fitness Coach Assistant - User Context:\n\
         - Name: {name}\n\
         - Stats: {age}y, {height}cm, {weight}kg\n\
         - Goal: {goal} ({calories} kcal)\n\
         - Macros: P{protein}g/C{carbs}g/F{fat}g\n\
         - Progress: {change}/week\n\
         - Current Workout Split: {split}\n\
         \n\
         User Question: \"{message}\"\n\
         \n\
         Respond with:\n\
         1. Science-backed advice (cite studies when possible)\n\
         2. Actionable steps\n\
         {motivation}",
        name = context.name,
        age = context.age,
        height = context.height_cm,
        weight = context.weight_kg,
        goal = context.goal,
        calories = context.targets.daily_calorie_target,
        protein = macros.protein,
        carbs = macros.carbs,
        fat = macros.fat,
        change = context.weight_change,
        split = context.workout_split,
    )
}

/// Ask the client for a reply, falling back to the apology on any failure
pub async fn reply(client: &dyn GenerativeClient, prompt: &str) -> String {
    match client.generate(prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Coach request failed, sending fallback reply");
            FALLBACK_REPLY.to_string()
        }
    }
}
