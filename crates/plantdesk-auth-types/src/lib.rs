//! Access-token types shared between the identity provider boundary and the
//! privileged services that authenticate callers.

pub mod token;

pub use token::{AuthError, Identity, JwtClaims, validate_access_token};
