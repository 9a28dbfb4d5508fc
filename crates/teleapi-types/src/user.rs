use std::fmt;

use serde::{Deserialize, Serialize};

/// A Telegram user or bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub added_to_attachment_menu: bool,
    // Only returned by getMe.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub can_join_groups: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub can_read_all_group_messages: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub supports_inline_queries: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub can_connect_to_business: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_main_web_app: bool,
}

impl User {
    /// Full name, `first_name` followed by `last_name` when present.
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {last}", self.first_name),
            _ => self.first_name.clone(),
        }
    }
}

/// Renders the username when set, otherwise the full name.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.username.as_deref() {
            Some(username) if !username.is_empty() => f.write_str(username),
            _ => f.write_str(&self.full_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefers_username() {
        let user = User {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: Some("Lovelace".to_string()),
            username: Some("ada".to_string()),
            ..User::default()
        };
        assert_eq!(user.to_string(), "ada");
    }

    #[test]
    fn test_display_falls_back_to_full_name() {
        let user = User {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: Some("Lovelace".to_string()),
            ..User::default()
        };
        assert_eq!(user.to_string(), "Ada Lovelace");

        let user = User {
            id: 2,
            first_name: "Grace".to_string(),
            ..User::default()
        };
        assert_eq!(user.to_string(), "Grace");
    }

    #[test]
    fn test_optional_flags_are_not_serialized_when_false() {
        let user = User {
            id: 7,
            first_name: "Bot".to_string(),
            ..User::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "is_bot": false, "first_name": "Bot"})
        );
    }
}
