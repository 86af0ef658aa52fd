// app/src/state.rs
use crate::config::AppConfig;
use chrono::Duration;
use std::sync::Arc;
use storefront::{Database, TokenKeys};

#[derive(Clone)]
pub struct AppState {
  pub db: Arc<dyn Database>,
  pub tokens: Arc<TokenKeys>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(db: Arc<dyn Database>, config: AppConfig) -> Self {
    let tokens = Arc::new(TokenKeys::from_secret(config.secret_key.as_bytes()));
    Self {
      db,
      tokens,
      config: Arc::new(config),
    }
  }

  /// Lifetime of tokens handed out by the `/token` endpoint.
  pub fn access_token_ttl(&self) -> Duration {
    Duration::minutes(self.config.access_token_expire_minutes)
  }
}
