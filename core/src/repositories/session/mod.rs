//! Session store interface backing the token lifecycle

mod memory;
mod r#trait;

pub use memory::InMemorySessionStore;
pub use r#trait::{revocation_key, session_key, SessionStore, REVOCATION_MARKER};
