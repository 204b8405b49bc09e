//! Coach service - answers user questions with the generative client

use crate::coach::{self, CoachContext, GenerativeClient};
use crate::error::ApiError;
use crate::repositories::DocumentStore;
use crate::services::load_document;
use tracing::info;

/// Longest question accepted, in characters
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Coach service for chat messages
pub struct CoachService;

impl CoachService {
    /// Answer a question in the context of the user's document
    ///
    /// Client failures are replaced by the fallback reply, so this only
    /// fails on bad input or a missing document.
    pub async fn ask(
        store: &dyn DocumentStore,
        client: &dyn GenerativeClient,
        user_id: &str,
        message: &str,
    ) -> Result<String, ApiError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ApiError::Validation("Message is required".to_string()));
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ApiError::Validation(format!(
                "Message must be at most {MAX_MESSAGE_CHARS} characters"
            )));
        }

        let document = load_document(store, user_id).await?;
        let prompt = coach::build_prompt(&CoachContext::from_document(&document), message);

        info!(user_id, prompt_len = prompt.len(), "Coach request");
        Ok(coach::reply(client, &prompt).await)
    }
}
