//! Route guards: authenticated and admin-only.

use crate::context::AuthContext;

/// Redirect target for sessions that fail authentication gating.
pub const SIGN_IN_PATH: &str = "/auth";

/// Redirect target for authenticated non-admin users leaving admin routes.
pub const DEFAULT_LANDING_PATH: &str = "/plant-manager/dashboard";

/// Outcome of evaluating a guard against the current context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Context still loading: render a waiting indicator, decide nothing.
    Wait,
    /// Render the protected content.
    Render,
    /// Navigate away to the given path.
    Redirect(&'static str),
}

/// Shared capability of all route guards: consult the context, decide.
pub trait RouteGuard {
    fn evaluate(&self, ctx: &AuthContext) -> GuardDecision;
}

/// Requires a signed-in user with an active profile.
pub struct AuthenticatedGuard;

impl RouteGuard for AuthenticatedGuard {
    fn evaluate(&self, ctx: &AuthContext) -> GuardDecision {
        if ctx.is_loading {
            return GuardDecision::Wait;
        }
        // An inactive account navigates exactly like a missing one.
        let active = match (&ctx.user, &ctx.profile) {
            (Some(_), Some(profile)) => profile.is_active,
            _ => false,
        };
        if !active {
            return GuardDecision::Redirect(SIGN_IN_PATH);
        }
        GuardDecision::Render
    }
}

/// Requires everything [`AuthenticatedGuard`] does, plus the admin role.
///
/// A valid-but-insufficient session redirects to the default landing page,
/// not the sign-in page.
pub struct AdminGuard;

impl RouteGuard for AdminGuard {
    fn evaluate(&self, ctx: &AuthContext) -> GuardDecision {
        match AuthenticatedGuard.evaluate(ctx) {
            GuardDecision::Render if !ctx.is_admin => {
                GuardDecision::Redirect(DEFAULT_LANDING_PATH)
            }
            decision => decision,
        }
    }
}
