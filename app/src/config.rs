// app/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub database_max_connections: u32,
  /// HS256 secret. Must stay the same across restarts or issued tokens stop verifying.
  pub secret_key: String,
  pub access_token_expire_minutes: i64,
}

// Secrets stay out of logs.
impl std::fmt::Debug for AppConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AppConfig")
      .field("server_host", &self.server_host)
      .field("server_port", &self.server_port)
      .field("database_url", &"[REDACTED]")
      .field("database_max_connections", &self.database_max_connections)
      .field("secret_key", &"[REDACTED]")
      .field("access_token_expire_minutes", &self.access_token_expire_minutes)
      .finish()
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the process environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let required = |var_name: &str| {
      lookup(var_name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };
    let optional = |var_name: &str, default: &str| lookup(var_name).unwrap_or_else(|| default.to_string());

    let server_host = optional("SERVER_HOST", "127.0.0.1");
    let server_port = optional("SERVER_PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = required("DATABASE_URL")?;
    let database_max_connections = optional("DATABASE_MAX_CONNECTIONS", "5")
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DATABASE_MAX_CONNECTIONS: {}", e)))?;
    let secret_key = required("SECRET_KEY")?;
    let access_token_expire_minutes = optional("ACCESS_TOKEN_EXPIRE_MINUTES", "15")
      .parse::<i64>()
      .map_err(|e| AppError::Config(format!("Invalid ACCESS_TOKEN_EXPIRE_MINUTES: {}", e)))?;
    if access_token_expire_minutes <= 0 {
      return Err(AppError::Config(
        "ACCESS_TOKEN_EXPIRE_MINUTES must be positive".to_string(),
      ));
    }

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      database_max_connections,
      secret_key,
      access_token_expire_minutes,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
