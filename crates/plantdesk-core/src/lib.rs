//! Service plumbing shared by all Plantdesk services: health endpoints,
//! request-id propagation, and tracing setup.

pub mod health;
pub mod middleware;
pub mod tracing;
