//! Discord incoming-webhook message payload.

use serde::{Deserialize, Serialize};

/// The JSON body posted to a Discord incoming webhook.
///
/// Discord accepts `{"username": ..., "content": ...}` and posts `content`
/// into the channel under the given sender name. The payload carries nothing
/// else: no timestamps, no nonces, no embeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordMessage {
    /// Sender name shown in the channel.
    pub username: String,
    /// The message text.
    pub content: String,
}

impl DiscordMessage {
    /// Creates a new message.
    pub fn new(username: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_two_fields() {
        let message = DiscordMessage::new("Billing Bot", "hello");
        let value = serde_json::to_value(&message).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["username"], "Billing Bot");
        assert_eq!(object["content"], "hello");
    }

    #[test]
    fn test_serialization_is_stable() {
        let message = DiscordMessage::new("bot", "same text");

        let first = serde_json::to_string(&message).unwrap();
        let second = serde_json::to_string(&message).unwrap();
        assert_eq!(first, second);
    }
}
