use serde::{Deserialize, Serialize};

use crate::chat::ChatId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

/// Which users a command list applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotCommandScope {
    #[default]
    Default,
    AllPrivateChats,
    AllGroupChats,
    AllChatAdministrators,
    Chat {
        chat_id: ChatId,
    },
    ChatAdministrators {
        chat_id: ChatId,
    },
    ChatMember {
        chat_id: ChatId,
        user_id: i64,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuButton {
    #[default]
    Default,
    Commands,
    WebApp {
        text: String,
        web_app: WebAppInfo,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotName {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotDescription {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotShortDescription {
    pub short_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppInfo {
    pub url: String,
}

/// Data sent from a Web App to the bot.
#[derive(Debug, Clone, Deserialize)]
pub struct WebAppData {
    pub data: String,
    pub button_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentWebAppMessage {
    #[serde(default)]
    pub inline_message_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreparedInlineMessage {
    pub id: String,
    pub expiration_date: i64,
}

/// Structured hints attached to a failed API call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group moved to a supergroup with this identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before the request can be repeated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_command_scope_wire_shape() {
        assert_eq!(
            serde_json::to_value(BotCommandScope::AllPrivateChats).unwrap(),
            json!({"type": "all_private_chats"})
        );
        assert_eq!(
            serde_json::to_value(BotCommandScope::ChatMember {
                chat_id: ChatId::from(-100),
                user_id: 7,
            })
            .unwrap(),
            json!({"type": "chat_member", "chat_id": -100, "user_id": 7})
        );
    }

    #[test]
    fn test_menu_button_round_trip_from_server() {
        let button: MenuButton = serde_json::from_str(
            r#"{"type": "web_app", "text": "Open", "web_app": {"url": "https://example.com"}}"#,
        )
        .unwrap();
        assert_eq!(
            button,
            MenuButton::WebApp {
                text: "Open".to_string(),
                web_app: WebAppInfo {
                    url: "https://example.com".to_string()
                },
            }
        );
    }
}
