use serde::{Deserialize, Serialize};

/// Admin roles. Carried in tokens but not consulted for authorization:
/// every authenticated endpoint treats any valid token as sufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Admin,
    Moderator,
}

/// A configured admin account.
///
/// The password is stored and compared in plaintext. Known weakness,
/// tracked in DESIGN.md; do not treat these accounts as real secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: AdminRole,
}

/// The user shape returned to clients: everything except the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: AdminRole,
}

impl From<&AdminUser> for PublicUser {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

/// JWT claims embedded in issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (admin user id)
    pub sub: String,
    pub email: String,
    pub role: AdminRole,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expiration (seconds since epoch)
    pub exp: i64,
}

/// A freshly issued token plus the public view of its user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub user: PublicUser,
}
