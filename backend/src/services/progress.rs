//! Progress service - weight logging and trend

use crate::error::ApiError;
use crate::repositories::DocumentStore;
use crate::services::{load_document, save_document};
use chrono::NaiveDate;
use fitflow_shared::progress::latest_weight;
use fitflow_shared::{analyze_weight_trend, WeightEntries};
use serde::Serialize;
use tracing::info;

/// Weight history with the derived trend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub weight_entries: WeightEntries,
    /// Display string, e.g. "-0.5kg" or "No data"
    pub weight_change: String,
    /// Numeric weekly change when a trend exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_change_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_weight_kg: Option<f64>,
}

impl ProgressSummary {
    fn from_entries(entries: &WeightEntries, weight_change: &str) -> Self {
        Self {
            weight_entries: entries.clone(),
            weight_change: weight_change.to_string(),
            weekly_change_kg: analyze_weight_trend(entries).weekly_change(),
            latest_weight_kg: latest_weight(entries).map(|(_, kg)| kg),
        }
    }
}

/// Progress service for weight tracking
pub struct ProgressService;

impl ProgressService {
    /// Log a weight for a date; a second log on the same date replaces the first
    pub async fn log_weight(
        store: &dyn DocumentStore,
        user_id: &str,
        date: NaiveDate,
        weight_kg: f64,
    ) -> Result<ProgressSummary, ApiError> {
        let document = load_document(store, user_id)
            .await?
            .log_weight(date, weight_kg)?;
        save_document(store, user_id, &document).await?;

        info!(user_id, %date, weight_kg, trend = %document.progress.weight_change, "Weight logged");
        Ok(ProgressSummary::from_entries(
            &document.progress.weight_entries,
            &document.progress.weight_change,
        ))
    }

    pub async fn get_progress(
        store: &dyn DocumentStore,
        user_id: &str,
    ) -> Result<ProgressSummary, ApiError> {
        let document = load_document(store, user_id).await?;
        Ok(ProgressSummary::from_entries(
            &document.progress.weight_entries,
            &document.progress.weight_change,
        ))
    }
}
