//! Participant repository trait.

use async_trait::async_trait;

use crate::domain::entities::participant::Participant;
use crate::errors::DomainResult;

/// Repository trait for meeting participant lookups
///
/// Downstream services load the participant set of a meeting to decide
/// resource-level authorization. The meeting entities themselves are
/// owned elsewhere; this trait only exposes the membership view the
/// authorizer needs.
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Load all participant records for a meeting
    ///
    /// # Returns
    /// * `Ok(participants)` - Possibly empty; an empty set means the
    ///   meeting has no membership records at all
    async fn find_by_meeting_id(&self, meeting_id: i64) -> DomainResult<Vec<Participant>>;
}
