//! Profile service - onboarding and profile updates

use crate::error::ApiError;
use crate::repositories::DocumentStore;
use crate::services::{load_document, save_document};
use chrono::NaiveDate;
use fitflow_shared::{Profile, UserDocument};
use tracing::info;

/// Profile service for onboarding and profile edits
pub struct ProfileService;

impl ProfileService {
    /// Create the user's document; a user can onboard only once
    pub async fn create_profile(
        store: &dyn DocumentStore,
        user_id: &str,
        profile: Profile,
        today: NaiveDate,
    ) -> Result<UserDocument, ApiError> {
        if store.get(user_id).await?.is_some() {
            return Err(ApiError::Conflict("Profile already exists".to_string()));
        }

        let document = UserDocument::new(profile, today)?;
        save_document(store, user_id, &document).await?;

        info!(
            user_id,
            daily_calorie_target = document.targets().daily_calorie_target,
            "User onboarded"
        );
        Ok(document)
    }

    /// Full user document
    pub async fn get_document(
        store: &dyn DocumentStore,
        user_id: &str,
    ) -> Result<UserDocument, ApiError> {
        load_document(store, user_id).await
    }

    /// Replace the profile and recompute targets
    pub async fn update_profile(
        store: &dyn DocumentStore,
        user_id: &str,
        profile: Profile,
    ) -> Result<UserDocument, ApiError> {
        let document = load_document(store, user_id).await?.update_profile(profile)?;
        save_document(store, user_id, &document).await?;

        info!(
            user_id,
            daily_calorie_target = document.targets().daily_calorie_target,
            "Profile updated"
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryDocumentStore;
    use crate::services::fixtures::{date, profile};
    use fitflow_shared::Goal;

    #[tokio::test]
    async fn test_onboarding_twice_conflicts() {
        let store = InMemoryDocumentStore::new();
        ProfileService::create_profile(&store, "u1", profile(), date("2024-01-01"))
            .await
            .unwrap();

        let err = ProfileService::create_profile(&store, "u1", profile(), date("2024-01-02"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_invalid_profile_is_rejected_and_not_stored() {
        let store = InMemoryDocumentStore::new();
        let mut bad = profile();
        bad.activity_level = 7;

        let err = ProfileService::create_profile(&store, "u1", bad, date("2024-01-01"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_recomputes_targets() {
        let store = InMemoryDocumentStore::new();
        ProfileService::create_profile(&store, "u1", profile(), date("2024-01-01"))
            .await
            .unwrap();

        let mut updated = profile();
        updated.goal = Goal::Bulk;
        let document = ProfileService::update_profile(&store, "u1", updated).await.unwrap();
        assert_eq!(document.targets().daily_calorie_target, 3059);

        let stored = ProfileService::get_document(&store, "u1").await.unwrap();
        assert_eq!(stored, document);
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let store = InMemoryDocumentStore::new();
        let err = ProfileService::get_document(&store, "ghost").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
