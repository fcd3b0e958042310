//! # MeetHub Gateway
//!
//! Edge-side request authentication for the MeetHub perimeter. The
//! [`EdgeAuthFilter`] middleware validates bearer tokens once at the
//! edge; internal services trust that validation and only re-derive the
//! subject. Routing and proxying belong to the gateway shell that
//! mounts this filter.

pub mod error;
pub mod middleware;

pub use middleware::auth::{AuthContext, EdgeAuthFilter};
