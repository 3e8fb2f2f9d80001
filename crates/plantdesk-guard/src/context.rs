//! Session-scoped authorization context.

use std::sync::{Arc, RwLock};

use plantdesk_domain::{id::UserId, profile::Profile, role::Role};

/// Identity of the signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: UserId,
    pub email: String,
}

/// Snapshot of the current session consumed by route guards.
///
/// `is_loading` is the only non-terminal state; while it is set, guards make
/// no navigation decision.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    pub user: Option<SessionUser>,
    pub profile: Option<Profile>,
    pub is_admin: bool,
    pub is_loading: bool,
}

impl AuthContext {
    /// Context before the first session resolution completes.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// Resolved context with no session.
    pub fn signed_out() -> Self {
        Self::default()
    }
}

/// Identity-provider session notifications that refresh the context.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Session resolution started; guards wait.
    Loading,
    /// A session was established or refreshed.
    SignedIn {
        user: SessionUser,
        profile: Option<Profile>,
        role: Option<Role>,
    },
    /// The session ended or could not be established.
    SignedOut,
}

/// Reference-counted cell holding the live [`AuthContext`].
///
/// Clones share the same underlying context. [`AuthContextCell::apply`] is
/// the single refresh trigger; guards read through
/// [`AuthContextCell::snapshot`] and never poll.
#[derive(Debug, Clone)]
pub struct AuthContextCell {
    inner: Arc<RwLock<AuthContext>>,
}

impl Default for AuthContextCell {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthContextCell {
    /// New cell in the loading state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(AuthContext::loading())),
        }
    }

    pub fn snapshot(&self) -> AuthContext {
        self.inner
            .read()
            .expect("auth context lock poisoned")
            .clone()
    }

    pub fn apply(&self, event: SessionEvent) {
        let mut ctx = self.inner.write().expect("auth context lock poisoned");
        *ctx = match event {
            SessionEvent::Loading => AuthContext::loading(),
            SessionEvent::SignedIn {
                user,
                profile,
                role,
            } => AuthContext {
                user: Some(user),
                profile,
                is_admin: role.is_some_and(Role::is_admin),
                is_loading: false,
            },
            SessionEvent::SignedOut => AuthContext::signed_out(),
        };
    }
}
