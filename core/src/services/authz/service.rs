//! Participant role checks for meeting-scoped endpoints

use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::participant::ParticipantRole;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::ParticipantRepository;

/// Checks resource-level role membership for an already-authenticated
/// subject
///
/// Runs behind the edge: the gateway has validated the token, so the
/// subject is taken on trust and only the membership question is
/// decided here. Role comparison is exact match against the endpoint's
/// allow-list; there is no hierarchy.
pub struct ResourceAuthorizer<P: ParticipantRepository> {
    repository: Arc<P>,
}

impl<P: ParticipantRepository> ResourceAuthorizer<P> {
    /// Creates a new resource authorizer
    pub fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// Confirms the subject holds one of the allowed roles in the meeting
    ///
    /// # Returns
    /// * `Ok(role)` - The member's role, one of `allowed`
    /// * `Err(ResourceNotFound)` - The meeting has no participant records
    /// * `Err(Forbidden)` - Subject is not a member, or holds a role
    ///   outside the allow-list
    pub async fn authorize(
        &self,
        user_id: i64,
        meeting_id: i64,
        allowed: &[ParticipantRole],
    ) -> DomainResult<ParticipantRole> {
        let participants = self.repository.find_by_meeting_id(meeting_id).await?;
        if participants.is_empty() {
            return Err(AuthError::ResourceNotFound.into());
        }

        let member = participants
            .iter()
            .find(|p| p.user_id == user_id)
            .ok_or(AuthError::Forbidden)?;

        if !allowed.contains(&member.role) {
            debug!(
                user_id,
                meeting_id,
                role = member.role.as_str(),
                "member role outside allow-list"
            );
            return Err(AuthError::Forbidden.into());
        }

        Ok(member.role)
    }
}
