use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{AdminRole, AdminUser};

/// Token-issuing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared HS256 signing secret.
    pub jwt_secret: String,
    /// Token validity in hours.
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "dev_secret_key_change_me".to_string(),
            token_ttl_hours: 24,
        }
    }
}

/// The fixed set of admin accounts.
///
/// Externalized from code: built-in defaults, optionally replaced by a JSON
/// file of [`AdminUser`] records. The set is static for the process
/// lifetime; there is no registration or persistence to the content store.
#[derive(Debug, Clone)]
pub struct AdminDirectory {
    users: Vec<AdminUser>,
}

impl AdminDirectory {
    pub fn new(users: Vec<AdminUser>) -> Self {
        Self { users }
    }

    /// Load the directory from a JSON file, falling back to the built-in
    /// defaults when the file is absent or unreadable.
    pub fn from_file_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<Vec<AdminUser>>(&raw) {
                Ok(users) if !users.is_empty() => Self::new(users),
                Ok(_) => {
                    warn!(path = %path.display(), "admin user file is empty, using defaults");
                    Self::default()
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed parsing admin user file, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn find_by_email(&self, email: &str) -> Option<&AdminUser> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for AdminDirectory {
    fn default() -> Self {
        Self::new(vec![
            AdminUser {
                id: "1".to_string(),
                email: "admin@showcase.dev".to_string(),
                password: "Admin@2024!".to_string(),
                name: "System Administrator".to_string(),
                role: AdminRole::Admin,
            },
            AdminUser {
                id: "2".to_string(),
                email: "moderator@showcase.dev".to_string(),
                password: "Mod@2024!".to_string(),
                name: "Content Moderator".to_string(),
                role: AdminRole::Moderator,
            },
        ])
    }
}
