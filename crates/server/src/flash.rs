//! One-shot flash notices carried in the session.
//!
//! Handlers push a notice before redirecting; the next rendered page drains
//! and displays the queue. Stored directly under a session key, like the
//! cart, rather than through a separate middleware crate.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::models::session_keys;

/// Severity of a flash notice. Drives styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    Success,
    Info,
    Error,
}

impl FlashLevel {
    /// CSS classes for the notice banner.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-100 text-green-800",
            Self::Info => "bg-blue-100 text-blue-800",
            Self::Error => "bg-red-100 text-red-800",
        }
    }
}

/// A queued notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

/// Queue a notice for the next rendered page.
///
/// # Errors
///
/// Returns the session store error if the queue cannot be persisted.
pub async fn push(
    session: &Session,
    level: FlashLevel,
    message: impl Into<String>,
) -> Result<(), tower_sessions::session::Error> {
    let mut queue: Vec<FlashMessage> = session
        .get(session_keys::FLASH)
        .await
        .ok()
        .flatten()
        .unwrap_or_default();

    queue.push(FlashMessage {
        level,
        message: message.into(),
    });

    session.insert(session_keys::FLASH, queue).await
}

/// Drain all queued notices, oldest first.
///
/// A session store failure drops the queue rather than failing the render.
pub async fn take(session: &Session) -> Vec<FlashMessage> {
    session
        .remove::<Vec<FlashMessage>>(session_keys::FLASH)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_level_serde_names() {
        let json = serde_json::to_string(&FlashLevel::Success).expect("serialize");
        assert_eq!(json, r#""success""#);
        let level: FlashLevel = serde_json::from_str(r#""error""#).expect("deserialize");
        assert_eq!(level, FlashLevel::Error);
    }

    #[test]
    fn test_flash_message_roundtrip() {
        let message = FlashMessage {
            level: FlashLevel::Info,
            message: "Added another Mug to your cart.".to_string(),
        };
        let json = serde_json::to_string(&message).expect("serialize");
        let back: FlashMessage = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, message);
    }
}
