//! Payloads of service messages (chat events rendered as messages).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::chat::Chat;
use crate::media::{Document, PhotoSize};
use crate::message::Message;
use crate::user::User;

#[derive(Debug, Clone, Deserialize)]
pub struct MessageAutoDeleteTimerChanged {
    pub message_auto_delete_time: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProximityAlertTriggered {
    pub traveler: User,
    pub watcher: User,
    pub distance: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WriteAccessAllowed {
    #[serde(default)]
    pub from_request: bool,
    #[serde(default)]
    pub web_app_name: Option<String>,
    #[serde(default)]
    pub from_attachment_menu: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatBoostAdded {
    pub boost_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SharedUser {
    pub user_id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub photo: Vec<PhotoSize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsersShared {
    pub request_id: i64,
    pub users: Vec<SharedUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatShared {
    pub request_id: i64,
    pub chat_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub photo: Vec<PhotoSize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundFill {
    Solid {
        color: u32,
    },
    Gradient {
        top_color: u32,
        bottom_color: u32,
        rotation_angle: u32,
    },
    FreeformGradient {
        colors: Vec<u32>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundType {
    Fill {
        fill: BackgroundFill,
        dark_theme_dimming: u32,
    },
    Wallpaper {
        document: Document,
        dark_theme_dimming: u32,
        #[serde(default)]
        is_blurred: bool,
        #[serde(default)]
        is_moving: bool,
    },
    Pattern {
        document: Document,
        fill: BackgroundFill,
        intensity: u32,
        #[serde(default)]
        is_inverted: bool,
        #[serde(default)]
        is_moving: bool,
    },
    ChatTheme {
        theme_name: String,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatBackground {
    #[serde(rename = "type")]
    pub kind: BackgroundType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForumTopicCreated {
    pub name: String,
    pub icon_color: u32,
    #[serde(default)]
    pub icon_custom_emoji_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForumTopicEdited {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon_custom_emoji_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForumTopicClosed {}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForumTopicReopened {}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralForumTopicHidden {}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralForumTopicUnhidden {}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GiveawayCreated {
    #[serde(default)]
    pub prize_star_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Giveaway {
    pub chats: Vec<Chat>,
    pub winners_selection_date: i64,
    pub winner_count: u32,
    #[serde(default)]
    pub only_new_members: bool,
    #[serde(default)]
    pub has_public_winners: bool,
    #[serde(default)]
    pub prize_description: Option<String>,
    #[serde(default)]
    pub country_codes: Vec<String>,
    #[serde(default)]
    pub prize_star_count: Option<u32>,
    #[serde(default)]
    pub premium_subscription_month_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GiveawayWinners {
    pub chat: Chat,
    pub giveaway_message_id: i64,
    pub winners_selection_date: i64,
    pub winner_count: u32,
    pub winners: Vec<User>,
    #[serde(default)]
    pub additional_chat_count: Option<u32>,
    #[serde(default)]
    pub prize_star_count: Option<u32>,
    #[serde(default)]
    pub premium_subscription_month_count: Option<u32>,
    #[serde(default)]
    pub unclaimed_prize_count: Option<u32>,
    #[serde(default)]
    pub only_new_members: bool,
    #[serde(default)]
    pub was_refunded: bool,
    #[serde(default)]
    pub prize_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GiveawayCompleted {
    pub winner_count: u32,
    #[serde(default)]
    pub unclaimed_prize_count: Option<u32>,
    #[serde(default)]
    pub giveaway_message: Option<Message>,
    #[serde(default)]
    pub is_star_giveaway: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaidMessagePriceChanged {
    pub paid_message_star_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectMessagePriceChanged {
    pub are_direct_messages_enabled: bool,
    #[serde(default)]
    pub direct_message_star_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoChatScheduled {
    pub start_date: i64,
}

impl VideoChatScheduled {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.start_date, 0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoChatStarted {}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoChatEnded {
    pub duration: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoChatParticipantsInvited {
    #[serde(default)]
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_pattern_decodes() {
        let background: ChatBackground = serde_json::from_str(
            r#"{"type": {"type": "fill", "dark_theme_dimming": 20,
                 "fill": {"type": "gradient", "top_color": 1, "bottom_color": 2, "rotation_angle": 45}}}"#,
        )
        .unwrap();
        assert!(matches!(
            background.kind,
            BackgroundType::Fill {
                fill: BackgroundFill::Gradient {
                    rotation_angle: 45,
                    ..
                },
                dark_theme_dimming: 20,
            }
        ));
    }

    #[test]
    fn test_video_chat_scheduled_time() {
        let scheduled = VideoChatScheduled { start_date: 60 };
        assert_eq!(scheduled.time().map(|t| t.timestamp()), Some(60));
    }
}
