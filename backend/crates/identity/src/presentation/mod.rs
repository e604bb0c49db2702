//! Presentation Layer
//!
//! HTTP handlers, DTOs, extractors and router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;

pub use extract::JsonBody;
pub use handlers::IdentityAppState;
pub use router::{identity_router, identity_router_generic};
