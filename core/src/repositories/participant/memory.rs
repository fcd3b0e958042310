//! In-memory implementation of the participant repository for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::participant::{Participant, ParticipantRole};
use crate::errors::DomainResult;

use super::r#trait::ParticipantRepository;

/// In-memory participant repository
#[derive(Clone)]
pub struct InMemoryParticipantRepository {
    participants: Arc<Mutex<HashMap<i64, Vec<Participant>>>>,
}

impl InMemoryParticipantRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            participants: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a participant record for a meeting
    pub async fn add(&self, meeting_id: i64, user_id: i64, role: ParticipantRole) {
        let mut participants = self.participants.lock().await;
        participants
            .entry(meeting_id)
            .or_default()
            .push(Participant::new(user_id, meeting_id, role));
    }
}

impl Default for InMemoryParticipantRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn find_by_meeting_id(&self, meeting_id: i64) -> DomainResult<Vec<Participant>> {
        let participants = self.participants.lock().await;
        Ok(participants.get(&meeting_id).cloned().unwrap_or_default())
    }
}
