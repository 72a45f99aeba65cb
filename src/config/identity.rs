//! Identity configuration - the signed-in profile from `orbit.toml` or
//! environment variables (`ORBIT_USER_ID`, `ORBIT_USER_NAME`,
//! `ORBIT_USER_EMAIL`).

use serde::Deserialize;

use crate::session::User;

const USER_ID_ENV_VAR: &str = "ORBIT_USER_ID";
const USER_NAME_ENV_VAR: &str = "ORBIT_USER_NAME";
const USER_EMAIL_ENV_VAR: &str = "ORBIT_USER_EMAIL";

/// A configured identity profile. Only the user ID is required.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityProfile {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl IdentityProfile {
    /// Converts the profile into a session user, filling display defaults.
    #[must_use]
    pub fn into_user(self) -> User {
        User {
            id: self.user_id,
            display_name: self.display_name.unwrap_or_else(|| "User".to_string()),
            email: self.email.unwrap_or_default(),
        }
    }
}

/// Reads the identity profile from environment variables, if `ORBIT_USER_ID`
/// is set.
#[must_use]
pub fn from_env() -> Option<IdentityProfile> {
    let user_id = std::env::var(USER_ID_ENV_VAR).ok()?;
    Some(IdentityProfile {
        user_id,
        display_name: std::env::var(USER_NAME_ENV_VAR).ok(),
        email: std::env::var(USER_EMAIL_ENV_VAR).ok(),
    })
}
