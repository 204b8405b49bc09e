//! Business logic services
//!
//! Every service follows the same cycle: load the user's document, apply a
//! document transition from the shared crate, write the whole document back.

pub mod coach;
pub mod dashboard;
pub mod diet;
pub mod gamification;
pub mod profile;
pub mod progress;
pub mod workouts;

pub use coach::CoachService;
pub use dashboard::DashboardService;
pub use diet::DietService;
pub use gamification::GamificationService;
pub use profile::ProfileService;
pub use progress::ProgressService;
pub use workouts::WorkoutService;

use crate::error::ApiError;
use crate::repositories::DocumentStore;
use fitflow_shared::UserDocument;

/// Load a user's document; users who have not onboarded get 404
pub(crate) async fn load_document(
    store: &dyn DocumentStore,
    user_id: &str,
) -> Result<UserDocument, ApiError> {
    store
        .get(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found; complete onboarding first".to_string()))
}

pub(crate) async fn save_document(
    store: &dyn DocumentStore,
    user_id: &str,
    document: &UserDocument,
) -> Result<(), ApiError> {
    store.put(user_id, document).await?;
    Ok(())
}
