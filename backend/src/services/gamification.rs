//! Gamification service - streak check-ins and weekly challenges

use crate::error::ApiError;
use crate::repositories::DocumentStore;
use crate::services::{load_document, save_document};
use chrono::NaiveDate;
use fitflow_shared::{ChallengeBoard, ChallengeCategory, Gamification, StreakTransition};
use rand::Rng;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResult {
    pub transition: StreakTransition,
    pub gamification: Gamification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeCompletion {
    pub category: ChallengeCategory,
    /// Points added by this call, 0 when it was already completed
    pub points_awarded: u32,
    pub gamification: Gamification,
}

/// Gamification service
pub struct GamificationService;

impl GamificationService {
    /// Apply the daily streak rule for a check-in on `today`
    pub async fn check_in(
        store: &dyn DocumentStore,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<CheckInResult, ApiError> {
        let (document, transition) = load_document(store, user_id).await?.check_in(today);

        // nothing changed, nothing to write
        if transition != StreakTransition::Unchanged {
            save_document(store, user_id, &document).await?;
        }

        info!(
            user_id,
            ?transition,
            current = document.gamification.streak.current,
            longest = document.gamification.streak.longest,
            "Check-in"
        );
        Ok(CheckInResult {
            transition,
            gamification: document.gamification,
        })
    }

    /// Draw a new board of weekly challenges, replacing the current one
    pub async fn assign_challenges<R: Rng + Send + ?Sized>(
        store: &dyn DocumentStore,
        user_id: &str,
        rng: &mut R,
    ) -> Result<ChallengeBoard, ApiError> {
        let document = load_document(store, user_id).await?.assign_challenges(rng);
        save_document(store, user_id, &document).await?;

        info!(user_id, "Weekly challenges assigned");
        document
            .gamification
            .challenges
            .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("challenge board missing after draw")))
    }

    /// Mark a challenge completed; the bonus is only awarded once
    pub async fn complete_challenge(
        store: &dyn DocumentStore,
        user_id: &str,
        category: ChallengeCategory,
    ) -> Result<ChallengeCompletion, ApiError> {
        let document = load_document(store, user_id).await?;
        let before = document.gamification.science_points;

        let document = document.complete_challenge(category)?;
        let points_awarded = document.gamification.science_points - before;
        if points_awarded > 0 {
            save_document(store, user_id, &document).await?;
        }

        info!(user_id, category = %category, points_awarded, "Challenge completion");
        Ok(ChallengeCompletion {
            category,
            points_awarded,
            gamification: document.gamification,
        })
    }
}
