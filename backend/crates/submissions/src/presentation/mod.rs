//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::SubmissionsAppState;
pub use router::{submissions_router, submissions_router_generic};
