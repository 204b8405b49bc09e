//! Dashboard service - the home screen summary

use crate::error::ApiError;
use crate::repositories::DocumentStore;
use crate::services::{load_document, save_document};
use chrono::NaiveDate;
use fitflow_shared::DashboardSummary;
use rand::Rng;
use tracing::info;

/// Dashboard service
pub struct DashboardService;

impl DashboardService {
    /// Summary for `today`; draws the weekly challenges if the user has none yet
    pub async fn summary<R: Rng + Send + ?Sized>(
        store: &dyn DocumentStore,
        user_id: &str,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<DashboardSummary, ApiError> {
        let (document, drawn) = load_document(store, user_id).await?.ensure_challenges(rng);
        if drawn {
            save_document(store, user_id, &document).await?;
            info!(user_id, "Weekly challenges assigned on first dashboard load");
        }

        let summary = DashboardSummary::from_document(&document, today);
        info!(
            user_id,
            %today,
            streak = summary.streak.current,
            workout_logged = summary.workout_logged_today,
            diet_logged = summary.diet_logged_today,
            "Dashboard loaded"
        );
        Ok(summary)
    }
}
