//! Participant entities for resource-level authorization.

use serde::{Deserialize, Serialize};

/// Role a user holds within a single meeting
///
/// Authorization compares roles by exact match against an endpoint's
/// allow-list; there is no role hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParticipantRole {
    Host,
    Attendee,
}

impl ParticipantRole {
    /// Stable string form used in storage and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantRole::Host => "HOST",
            ParticipantRole::Attendee => "ATTENDEE",
        }
    }
}

/// Membership record tying a user to a meeting with one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// User id of the member
    pub user_id: i64,

    /// Meeting the membership belongs to
    pub meeting_id: i64,

    /// Role the member holds in this meeting
    pub role: ParticipantRole,
}

impl Participant {
    /// Creates a new participant record
    pub fn new(user_id: i64, meeting_id: i64, role: ParticipantRole) -> Self {
        Self {
            user_id,
            meeting_id,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_as_str() {
        assert_eq!(ParticipantRole::Host.as_str(), "HOST");
        assert_eq!(ParticipantRole::Attendee.as_str(), "ATTENDEE");
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&ParticipantRole::Host).unwrap();
        assert_eq!(json, "\"HOST\"");

        let role: ParticipantRole = serde_json::from_str("\"ATTENDEE\"").unwrap();
        assert_eq!(role, ParticipantRole::Attendee);
    }

    #[test]
    fn test_participant_new() {
        let participant = Participant::new(42, 7, ParticipantRole::Host);
        assert_eq!(participant.user_id, 42);
        assert_eq!(participant.meeting_id, 7);
        assert_eq!(participant.role, ParticipantRole::Host);
    }
}
