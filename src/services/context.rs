/// Conversation mode tag sent with every chat request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextTag {
    General,
    UserStuck,
    Morning,
    // Only sent explicitly, e.g. when submitting mission proof.
    MissionReview,
}

impl ContextTag {
    /// Rudimentary keyword check; "stuck" wins over "morning".
    pub fn detect(message: &str) -> Self {
        let msg_lower = message.to_lowercase();

        if msg_lower.contains("stuck") {
            ContextTag::UserStuck
        } else if msg_lower.contains("morning") {
            ContextTag::Morning
        } else {
            ContextTag::General
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContextTag::General => "CONTEXT_GENERAL",
            ContextTag::UserStuck => "CONTEXT_USER_STUCK",
            ContextTag::Morning => "CONTEXT_MORNING",
            ContextTag::MissionReview => "CONTEXT_MISSION_REVIEW",
        }
    }
}
