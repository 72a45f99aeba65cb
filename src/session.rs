//! Identity session - explicit current-user state with a change stream.
//!
//! The session is created by the application shell and passed by reference
//! into whatever needs the signed-in user; it is never a process-wide
//! global. Observers subscribe for state changes and unsubscribe by
//! dropping the receiver.

use tokio::sync::watch;

use crate::errors::{Error, Result};

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable user ID every owned record is scoped by
    pub id: String,
    pub display_name: String,
    pub email: String,
}

/// Current-user state plus a broadcast of its changes.
#[derive(Debug)]
pub struct Session {
    state: watch::Sender<Option<User>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::signed_out()
    }
}

impl Session {
    /// A session with nobody signed in.
    #[must_use]
    pub fn signed_out() -> Self {
        Session {
            state: watch::Sender::new(None),
        }
    }

    /// A session that starts signed in.
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Session {
            state: watch::Sender::new(Some(user)),
        }
    }

    /// Replaces the signed-in user and notifies subscribers.
    pub fn sign_in(&self, user: User) {
        tracing::info!(user_id = %user.id, "user signed in");
        self.state.send_replace(Some(user));
    }

    /// Clears the signed-in user and notifies subscribers.
    pub fn sign_out(&self) {
        if let Some(user) = self.state.send_replace(None) {
            tracing::info!(user_id = %user.id, "user signed out");
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().clone()
    }

    /// The signed-in user, or an error for flows that cannot proceed
    /// anonymously.
    pub fn require_user(&self) -> Result<User> {
        self.current_user().ok_or(Error::SignedOut)
    }

    /// Subscribes to sign-in/sign-out changes. Dropping the receiver ends
    /// the subscription.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.state.subscribe()
    }
}
