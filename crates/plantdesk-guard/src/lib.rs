//! Navigation gating for the browser client.
//!
//! Guards are pure: they consult the live [`context::AuthContext`] and return
//! a decision; they hold no state and are recomputed on every evaluation.

pub mod context;
pub mod guard;

pub use context::{AuthContext, AuthContextCell, SessionEvent, SessionUser};
pub use guard::{
    AdminGuard, AuthenticatedGuard, DEFAULT_LANDING_PATH, GuardDecision, RouteGuard, SIGN_IN_PATH,
};
