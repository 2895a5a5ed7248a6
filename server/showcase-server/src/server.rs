use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tracing::warn;

use auth_gate::{AdminDirectory, AuthConfig, SecurityAuditLog, TokenService};
use content_store::{CachedStore, Clock, JsonStore, SystemClock};

/// Server configuration, sourced from the environment (`.env` supported).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory holding one JSON file per content collection.
    pub data_dir: PathBuf,
    /// Built frontend to serve as SPA fallback, if present.
    pub dist_dir: PathBuf,
    /// Shared HS256 token secret.
    pub jwt_secret: String,
    /// Optional JSON file replacing the built-in admin accounts.
    pub admin_users_file: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("JWT_SECRET not set, using the development default");
                "dev_secret_key_change_me".to_string()
            }
        };
        Self {
            data_dir: env::var("DATA_DIR").map_or_else(|_| PathBuf::from("data"), PathBuf::from),
            dist_dir: env::var("DIST_DIR").map_or_else(|_| PathBuf::from("dist"), PathBuf::from),
            jwt_secret,
            admin_users_file: env::var("ADMIN_USERS").ok().map(PathBuf::from),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            dist_dir: PathBuf::from("dist"),
            jwt_secret: "dev_secret_key_change_me".to_string(),
            admin_users_file: None,
        }
    }
}

/// Shared server state: the cached content store, the token service with its
/// audit log, and the process start time for the health endpoint. Built once
/// per process and cloned into handlers.
#[derive(Clone)]
pub struct ShowcaseServer {
    pub config: ServerConfig,
    pub content: Arc<CachedStore>,
    pub tokens: Arc<TokenService>,
    pub clock: Arc<dyn Clock>,
    pub started_at: Instant,
}

impl ShowcaseServer {
    pub fn new(config: ServerConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self::with_clock(config, clock)
    }

    /// Construction seam for tests that need a pinned clock.
    pub fn with_clock(config: ServerConfig, clock: Arc<dyn Clock>) -> Self {
        let content = Arc::new(CachedStore::new(
            JsonStore::new(config.data_dir.clone()),
            clock.clone(),
        ));

        let directory = match &config.admin_users_file {
            Some(path) => AdminDirectory::from_file_or_default(path),
            None => AdminDirectory::default(),
        };
        let audit = Arc::new(SecurityAuditLog::new(clock.clone()));
        let tokens = Arc::new(TokenService::new(
            AuthConfig {
                jwt_secret: config.jwt_secret.clone(),
                ..AuthConfig::default()
            },
            directory,
            audit,
            clock.clone(),
        ));

        Self {
            config,
            content,
            tokens,
            clock,
            started_at: Instant::now(),
        }
    }
}
