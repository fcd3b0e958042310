//! Participant repository interface for resource-level authorization

mod memory;
mod r#trait;

pub use memory::InMemoryParticipantRepository;
pub use r#trait::ParticipantRepository;
