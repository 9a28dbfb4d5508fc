use std::fmt;

use serde::{Deserialize, Serialize};

use crate::media::Location;
use crate::message::{Message, ReactionType};
use crate::user::User;

/// Target chat: a numeric identifier or a public `@username`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl Default for ChatId {
    fn default() -> Self {
        Self::Id(0)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(username) => f.write_str(username),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,
    /// Legacy value still seen in inline query `chat_type`.
    Sender,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_forum: bool,
}

impl Chat {
    pub fn is_private(&self) -> bool {
        self.kind == ChatType::Private
    }

    pub fn is_group(&self) -> bool {
        self.kind == ChatType::Group
    }

    pub fn is_supergroup(&self) -> bool {
        self.kind == ChatType::Supergroup
    }

    pub fn is_channel(&self) -> bool {
        self.kind == ChatType::Channel
    }

    /// The chat as a request target.
    pub fn chat_id(&self) -> ChatId {
        ChatId::Id(self.id)
    }
}

/// Full chat description returned by `getChat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatFullInfo {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatType,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_forum: bool,
    #[serde(default)]
    pub accent_color_id: i64,
    #[serde(default)]
    pub max_reaction_count: u32,
    #[serde(default)]
    pub photo: Option<ChatPhoto>,
    #[serde(default)]
    pub active_usernames: Vec<String>,
    #[serde(default)]
    pub available_reactions: Option<Vec<ReactionType>>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub has_private_forwards: bool,
    #[serde(default)]
    pub join_to_send_messages: bool,
    #[serde(default)]
    pub join_by_request: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub invite_link: Option<String>,
    #[serde(default)]
    pub pinned_message: Option<Box<Message>>,
    #[serde(default)]
    pub permissions: Option<ChatPermissions>,
    #[serde(default)]
    pub slow_mode_delay: Option<u32>,
    #[serde(default)]
    pub message_auto_delete_time: Option<u32>,
    #[serde(default)]
    pub has_protected_content: bool,
    #[serde(default)]
    pub sticker_set_name: Option<String>,
    #[serde(default)]
    pub can_set_sticker_set: bool,
    #[serde(default)]
    pub linked_chat_id: Option<i64>,
    #[serde(default)]
    pub location: Option<ChatLocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatPhoto {
    pub small_file_id: String,
    pub small_file_unique_id: String,
    pub big_file_id: String,
    pub big_file_unique_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatLocation {
    pub location: Location,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPermissions {
    #[serde(default)]
    pub can_send_messages: bool,
    #[serde(default)]
    pub can_send_audios: bool,
    #[serde(default)]
    pub can_send_documents: bool,
    #[serde(default)]
    pub can_send_photos: bool,
    #[serde(default)]
    pub can_send_videos: bool,
    #[serde(default)]
    pub can_send_video_notes: bool,
    #[serde(default)]
    pub can_send_voice_notes: bool,
    #[serde(default)]
    pub can_send_polls: bool,
    #[serde(default)]
    pub can_send_other_messages: bool,
    #[serde(default)]
    pub can_add_web_page_previews: bool,
    #[serde(default)]
    pub can_change_info: bool,
    #[serde(default)]
    pub can_invite_users: bool,
    #[serde(default)]
    pub can_pin_messages: bool,
    #[serde(default)]
    pub can_manage_topics: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAdministratorRights {
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub can_manage_chat: bool,
    #[serde(default)]
    pub can_delete_messages: bool,
    #[serde(default)]
    pub can_manage_video_chats: bool,
    #[serde(default)]
    pub can_restrict_members: bool,
    #[serde(default)]
    pub can_promote_members: bool,
    #[serde(default)]
    pub can_change_info: bool,
    #[serde(default)]
    pub can_invite_users: bool,
    #[serde(default)]
    pub can_post_messages: bool,
    #[serde(default)]
    pub can_edit_messages: bool,
    #[serde(default)]
    pub can_pin_messages: bool,
    #[serde(default)]
    pub can_post_stories: bool,
    #[serde(default)]
    pub can_edit_stories: bool,
    #[serde(default)]
    pub can_delete_stories: bool,
    #[serde(default)]
    pub can_manage_topics: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatInviteLink {
    pub invite_link: String,
    pub creator: User,
    #[serde(default)]
    pub creates_join_request: bool,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub is_revoked: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub expire_date: Option<i64>,
    #[serde(default)]
    pub member_limit: Option<u32>,
    #[serde(default)]
    pub pending_join_request_count: Option<u32>,
    #[serde(default)]
    pub subscription_period: Option<u32>,
    #[serde(default)]
    pub subscription_price: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMemberStatus {
    Creator,
    Administrator,
    Member,
    Restricted,
    Left,
    Kicked,
    #[serde(other)]
    Unknown,
}

/// Membership of a user in a chat.
///
/// Flags irrelevant to `status` are absent on the wire and decode as `false`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMember {
    pub user: User,
    pub status: ChatMemberStatus,
    #[serde(default)]
    pub custom_title: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub until_date: Option<i64>,
    #[serde(default)]
    pub can_be_edited: bool,
    #[serde(default)]
    pub can_manage_chat: bool,
    #[serde(default)]
    pub can_post_messages: bool,
    #[serde(default)]
    pub can_edit_messages: bool,
    #[serde(default)]
    pub can_delete_messages: bool,
    #[serde(default)]
    pub can_manage_video_chats: bool,
    #[serde(default)]
    pub can_restrict_members: bool,
    #[serde(default)]
    pub can_promote_members: bool,
    #[serde(default)]
    pub can_change_info: bool,
    #[serde(default)]
    pub can_invite_users: bool,
    #[serde(default)]
    pub can_pin_messages: bool,
    #[serde(default)]
    pub can_manage_topics: bool,
    #[serde(default)]
    pub is_member: bool,
    #[serde(default)]
    pub can_send_messages: bool,
    #[serde(default)]
    pub can_send_polls: bool,
    #[serde(default)]
    pub can_send_other_messages: bool,
    #[serde(default)]
    pub can_add_web_page_previews: bool,
}

impl ChatMember {
    pub fn is_creator(&self) -> bool {
        self.status == ChatMemberStatus::Creator
    }

    pub fn is_administrator(&self) -> bool {
        self.status == ChatMemberStatus::Administrator
    }

    pub fn has_left(&self) -> bool {
        self.status == ChatMemberStatus::Left
    }

    pub fn was_kicked(&self) -> bool {
        self.status == ChatMemberStatus::Kicked
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMemberUpdated {
    pub chat: Chat,
    pub from: User,
    pub date: i64,
    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,
    #[serde(default)]
    pub invite_link: Option<ChatInviteLink>,
    #[serde(default)]
    pub via_join_request: bool,
    #[serde(default)]
    pub via_chat_folder_invite_link: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatJoinRequest {
    pub chat: Chat,
    pub from: User,
    pub user_chat_id: i64,
    pub date: i64,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub invite_link: Option<ChatInviteLink>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ChatBoostSource {
    Premium {
        user: User,
    },
    GiftCode {
        user: User,
    },
    Giveaway {
        giveaway_message_id: i64,
        #[serde(default)]
        user: Option<User>,
        #[serde(default)]
        prize_star_count: Option<u32>,
        #[serde(default)]
        is_unclaimed: bool,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatBoost {
    pub boost_id: String,
    pub add_date: i64,
    pub expiration_date: i64,
    pub source: ChatBoostSource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatBoostUpdated {
    pub chat: Chat,
    pub boost: ChatBoost,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatBoostRemoved {
    pub chat: Chat,
    pub boost_id: String,
    pub remove_date: i64,
    pub source: ChatBoostSource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserChatBoosts {
    pub boosts: Vec<ChatBoost>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForumTopic {
    pub message_thread_id: i64,
    pub name: String,
    pub icon_color: u32,
    #[serde(default)]
    pub icon_custom_emoji_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessBotRights {
    #[serde(default)]
    pub can_reply: bool,
    #[serde(default)]
    pub can_read_messages: bool,
    #[serde(default)]
    pub can_delete_sent_messages: bool,
    #[serde(default)]
    pub can_delete_all_messages: bool,
    #[serde(default)]
    pub can_edit_name: bool,
    #[serde(default)]
    pub can_edit_bio: bool,
    #[serde(default)]
    pub can_edit_profile_photo: bool,
    #[serde(default)]
    pub can_edit_username: bool,
    #[serde(default)]
    pub can_change_gift_settings: bool,
    #[serde(default)]
    pub can_view_gifts_and_stars: bool,
    #[serde(default)]
    pub can_convert_gifts_to_stars: bool,
    #[serde(default)]
    pub can_transfer_and_upgrade_gifts: bool,
    #[serde(default)]
    pub can_transfer_stars: bool,
    #[serde(default)]
    pub can_manage_stories: bool,
    #[serde(default)]
    pub can_delete_outgoing_messages: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessConnection {
    pub id: String,
    pub user: User,
    pub user_chat_id: i64,
    pub date: i64,
    #[serde(default)]
    pub can_reply: bool,
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default)]
    pub rights: Option<BusinessBotRights>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessMessagesDeleted {
    pub business_connection_id: String,
    pub chat: Chat,
    pub message_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_type_predicates() {
        let chat: Chat = serde_json::from_str(r#"{"id": -100, "type": "supergroup"}"#).unwrap();
        assert!(chat.is_supergroup());
        assert!(!chat.is_group());
        assert!(!chat.is_private());
        assert_eq!(chat.chat_id(), ChatId::Id(-100));
    }

    #[test]
    fn test_unknown_chat_type_decodes() {
        let chat: Chat = serde_json::from_str(r#"{"id": 1, "type": "galaxy"}"#).unwrap();
        assert_eq!(chat.kind, ChatType::Unknown);
    }

    #[test]
    fn test_chat_id_serializes_untagged() {
        assert_eq!(serde_json::to_string(&ChatId::from(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&ChatId::from("@news")).unwrap(),
            "\"@news\""
        );
    }

    #[test]
    fn test_chat_member_status_predicates() {
        let member: ChatMember = serde_json::from_str(
            r#"{"user": {"id": 1, "is_bot": false, "first_name": "A"}, "status": "kicked", "until_date": 0}"#,
        )
        .unwrap();
        assert!(member.was_kicked());
        assert!(!member.is_administrator());
        assert!(!member.can_send_messages);
    }

    #[test]
    fn test_boost_source_is_tagged() {
        let boost: ChatBoost = serde_json::from_str(
            r#"{"boost_id": "b", "add_date": 1, "expiration_date": 2,
                "source": {"source": "giveaway", "giveaway_message_id": 9, "is_unclaimed": true}}"#,
        )
        .unwrap();
        assert!(matches!(
            boost.source,
            ChatBoostSource::Giveaway {
                giveaway_message_id: 9,
                is_unclaimed: true,
                ..
            }
        ));
    }
}
