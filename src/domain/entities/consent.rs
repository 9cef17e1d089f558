use serde::{Deserialize, Serialize};

/// Notification channel a user can opt in or out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentKind {
    EmailNotifications,
    SmsNotifications,
}

impl ConsentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentKind::EmailNotifications => "email_notifications",
            ConsentKind::SmsNotifications => "sms_notifications",
        }
    }
}

impl std::fmt::Display for ConsentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single opt-in/opt-out choice for one notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consent {
    pub kind: ConsentKind,
    pub enabled: bool,
}
