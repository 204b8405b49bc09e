//! Application state management
//!
//! Shared state passed to every handler through Axum's state extraction.
//! Built once at startup; every field is cheap to clone.

use crate::auth::JwtService;
use crate::coach::GenerativeClient;
use crate::config::AppConfig;
use crate::repositories::DocumentStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// User document storage
    pub store: Arc<dyn DocumentStore>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
    /// Generative text client used by the coach
    pub coach: Arc<dyn GenerativeClient>,
}

impl AppState {
    /// Create a new application state, deriving JWT keys from the config secret
    pub fn new(
        store: Arc<dyn DocumentStore>,
        coach: Arc<dyn GenerativeClient>,
        config: AppConfig,
    ) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry_secs);

        Self {
            store,
            config: Arc::new(config),
            jwt,
            coach,
        }
    }

    #[inline]
    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    #[inline]
    pub fn coach(&self) -> &dyn GenerativeClient {
        self.coach.as_ref()
    }
}
