//! Admin authentication for the content API.
//!
//! A single shared-secret HS256 token gates the mutating and sensitive
//! endpoints. There is no revocation and no refresh; logout is client-side
//! token deletion. Every authentication attempt, successful or not, is
//! recorded in a bounded in-memory security audit log.

pub mod audit;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use audit::{AuditEntry, SecurityAuditLog, AUDIT_LOG_CAPACITY};
pub use config::{AdminDirectory, AuthConfig};
pub use error::AuthError;
pub use models::{AdminRole, AdminUser, Claims, IssuedToken, PublicUser};
pub use service::TokenService;
