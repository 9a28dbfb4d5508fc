use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::chat::{Chat, ChatId};
use crate::checklist::{Checklist, ChecklistTasksAdded, ChecklistTasksDone};
use crate::games::Game;
use crate::gifts::{GiftInfo, UniqueGiftInfo};
use crate::markup::InlineKeyboardMarkup;
use crate::media::{
    Animation, Audio, Contact, Dice, Document, Location, PaidMediaInfo, PhotoSize, Poll, Venue,
    Video, VideoNote, Voice,
};
use crate::payments::{Invoice, RefundedPayment, SuccessfulPayment};
use crate::service::{
    ChatBackground, ChatBoostAdded, ChatShared, DirectMessagePriceChanged, ForumTopicClosed,
    ForumTopicCreated, ForumTopicEdited, ForumTopicReopened, GeneralForumTopicHidden,
    GeneralForumTopicUnhidden, Giveaway, GiveawayCompleted, GiveawayCreated, GiveawayWinners,
    MessageAutoDeleteTimerChanged, PaidMessagePriceChanged, ProximityAlertTriggered, UsersShared,
    VideoChatEnded, VideoChatParticipantsInvited, VideoChatScheduled, VideoChatStarted,
    WriteAccessAllowed,
};
use crate::bot::WebAppData;
use crate::stickers::Sticker;
use crate::user::User;

/// Identifier of a message, returned by `copyMessage` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MessageId {
    pub message_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub message_thread_id: Option<i64>,
    #[serde(default)]
    pub from: Option<User>,
    #[serde(default)]
    pub sender_chat: Option<Chat>,
    #[serde(default)]
    pub sender_boost_count: Option<u32>,
    #[serde(default)]
    pub sender_business_bot: Option<User>,
    pub date: i64,
    #[serde(default)]
    pub business_connection_id: Option<String>,
    pub chat: Chat,
    #[serde(default)]
    pub forward_origin: Option<MessageOrigin>,
    #[serde(default)]
    pub is_topic_message: bool,
    #[serde(default)]
    pub is_automatic_forward: bool,
    #[serde(default)]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(default)]
    pub external_reply: Option<Box<ExternalReplyInfo>>,
    #[serde(default)]
    pub quote: Option<TextQuote>,
    #[serde(default)]
    pub reply_to_story: Option<Story>,
    #[serde(default)]
    pub via_bot: Option<User>,
    #[serde(default)]
    pub edit_date: Option<i64>,
    #[serde(default)]
    pub has_protected_content: bool,
    #[serde(default)]
    pub is_from_offline: bool,
    #[serde(default)]
    pub media_group_id: Option<String>,
    #[serde(default)]
    pub author_signature: Option<String>,
    #[serde(default)]
    pub paid_star_count: Option<u32>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub entities: Vec<MessageEntity>,
    #[serde(default)]
    pub link_preview_options: Option<LinkPreviewOptions>,
    #[serde(default)]
    pub effect_id: Option<String>,
    #[serde(default)]
    pub animation: Option<Animation>,
    #[serde(default)]
    pub audio: Option<Audio>,
    #[serde(default)]
    pub document: Option<Document>,
    #[serde(default)]
    pub paid_media: Option<PaidMediaInfo>,
    #[serde(default)]
    pub photo: Vec<PhotoSize>,
    #[serde(default)]
    pub sticker: Option<Sticker>,
    #[serde(default)]
    pub story: Option<Story>,
    #[serde(default)]
    pub video: Option<Video>,
    #[serde(default)]
    pub video_note: Option<VideoNote>,
    #[serde(default)]
    pub voice: Option<Voice>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default)]
    pub show_caption_above_media: bool,
    #[serde(default)]
    pub has_media_spoiler: bool,
    #[serde(default)]
    pub checklist: Option<Checklist>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub dice: Option<Dice>,
    #[serde(default)]
    pub game: Option<Game>,
    #[serde(default)]
    pub poll: Option<Poll>,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub new_chat_members: Vec<User>,
    #[serde(default)]
    pub left_chat_member: Option<User>,
    #[serde(default)]
    pub new_chat_title: Option<String>,
    #[serde(default)]
    pub new_chat_photo: Vec<PhotoSize>,
    #[serde(default)]
    pub delete_chat_photo: bool,
    #[serde(default)]
    pub group_chat_created: bool,
    #[serde(default)]
    pub supergroup_chat_created: bool,
    #[serde(default)]
    pub channel_chat_created: bool,
    #[serde(default)]
    pub message_auto_delete_timer_changed: Option<MessageAutoDeleteTimerChanged>,
    #[serde(default)]
    pub migrate_to_chat_id: Option<i64>,
    #[serde(default)]
    pub migrate_from_chat_id: Option<i64>,
    #[serde(default)]
    pub pinned_message: Option<Box<Message>>,
    #[serde(default)]
    pub invoice: Option<Invoice>,
    #[serde(default)]
    pub successful_payment: Option<SuccessfulPayment>,
    #[serde(default)]
    pub refunded_payment: Option<RefundedPayment>,
    #[serde(default)]
    pub users_shared: Option<UsersShared>,
    #[serde(default)]
    pub chat_shared: Option<ChatShared>,
    #[serde(default)]
    pub gift: Option<GiftInfo>,
    #[serde(default)]
    pub unique_gift: Option<UniqueGiftInfo>,
    #[serde(default)]
    pub connected_website: Option<String>,
    #[serde(default)]
    pub write_access_allowed: Option<WriteAccessAllowed>,
    #[serde(default)]
    pub proximity_alert_triggered: Option<ProximityAlertTriggered>,
    #[serde(default)]
    pub boost_added: Option<ChatBoostAdded>,
    #[serde(default)]
    pub chat_background_set: Option<ChatBackground>,
    #[serde(default)]
    pub checklist_tasks_done: Option<Box<ChecklistTasksDone>>,
    #[serde(default)]
    pub checklist_tasks_added: Option<Box<ChecklistTasksAdded>>,
    #[serde(default)]
    pub direct_message_price_changed: Option<DirectMessagePriceChanged>,
    #[serde(default)]
    pub forum_topic_created: Option<ForumTopicCreated>,
    #[serde(default)]
    pub forum_topic_edited: Option<ForumTopicEdited>,
    #[serde(default)]
    pub forum_topic_closed: Option<ForumTopicClosed>,
    #[serde(default)]
    pub forum_topic_reopened: Option<ForumTopicReopened>,
    #[serde(default)]
    pub general_forum_topic_hidden: Option<GeneralForumTopicHidden>,
    #[serde(default)]
    pub general_forum_topic_unhidden: Option<GeneralForumTopicUnhidden>,
    #[serde(default)]
    pub giveaway_created: Option<GiveawayCreated>,
    #[serde(default)]
    pub giveaway: Option<Giveaway>,
    #[serde(default)]
    pub giveaway_winners: Option<GiveawayWinners>,
    #[serde(default)]
    pub giveaway_completed: Option<Box<GiveawayCompleted>>,
    #[serde(default)]
    pub paid_message_price_changed: Option<PaidMessagePriceChanged>,
    #[serde(default)]
    pub video_chat_scheduled: Option<VideoChatScheduled>,
    #[serde(default)]
    pub video_chat_started: Option<VideoChatStarted>,
    #[serde(default)]
    pub video_chat_ended: Option<VideoChatEnded>,
    #[serde(default)]
    pub video_chat_participants_invited: Option<VideoChatParticipantsInvited>,
    #[serde(default)]
    pub web_app_data: Option<WebAppData>,
    #[serde(default)]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Message {
    /// Send time as a UTC timestamp.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }

    /// The leading `bot_command` entity, when the text starts with one.
    fn command_entity(&self) -> Option<&MessageEntity> {
        self.entities
            .first()
            .filter(|entity| entity.offset == 0 && entity.is_command())
    }

    pub fn is_command(&self) -> bool {
        self.command_entity().is_some()
    }

    /// Command name without the leading slash, keeping any `@botname` suffix.
    pub fn command_with_at(&self) -> Option<String> {
        let entity = self.command_entity()?;
        let text = self.text.as_deref()?;
        Some(utf16_slice(text, 1, entity.length))
    }

    /// Command name without the leading slash or `@botname` suffix.
    pub fn command(&self) -> Option<String> {
        let mut command = self.command_with_at()?;
        if let Some(at) = command.find('@') {
            command.truncate(at);
        }
        Some(command)
    }

    /// Everything after the command and the separating space.
    ///
    /// Empty when the command makes up the whole text.
    pub fn command_arguments(&self) -> Option<String> {
        let entity = self.command_entity()?;
        let text = self.text.as_deref()?;
        Some(utf16_slice(text, entity.length.saturating_add(1), usize::MAX))
    }
}

/// Slice of `text` between UTF-16 code unit offsets, clamped to its length.
fn utf16_slice(text: &str, start: usize, end: usize) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    let end = end.min(units.len());
    let start = start.min(end);
    String::from_utf16_lossy(&units[start..end])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEntityKind {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Blockquote,
    ExpandableBlockquote,
    Code,
    Pre,
    TextLink,
    TextMention,
    CustomEmoji,
    #[serde(other)]
    Unknown,
}

/// A span of special text. Offsets and lengths count UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: MessageEntityKind,
    pub offset: usize,
    pub length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
}

impl MessageEntity {
    pub fn new(kind: MessageEntityKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            offset,
            length,
            url: None,
            user: None,
            language: None,
            custom_emoji_id: None,
        }
    }

    /// Parsed `url` of a `text_link` entity.
    pub fn parse_url(&self) -> Option<Url> {
        let raw = self.url.as_deref().filter(|url| !url.is_empty())?;
        Url::parse(raw).ok()
    }

    /// The substring of `text` covered by this entity.
    pub fn extract(&self, text: &str) -> String {
        utf16_slice(text, self.offset, self.offset.saturating_add(self.length))
    }

    pub fn is_mention(&self) -> bool {
        self.kind == MessageEntityKind::Mention
    }

    pub fn is_text_mention(&self) -> bool {
        self.kind == MessageEntityKind::TextMention
    }

    pub fn is_hashtag(&self) -> bool {
        self.kind == MessageEntityKind::Hashtag
    }

    pub fn is_command(&self) -> bool {
        self.kind == MessageEntityKind::BotCommand
    }

    pub fn is_url(&self) -> bool {
        self.kind == MessageEntityKind::Url
    }

    pub fn is_email(&self) -> bool {
        self.kind == MessageEntityKind::Email
    }

    pub fn is_bold(&self) -> bool {
        self.kind == MessageEntityKind::Bold
    }

    pub fn is_italic(&self) -> bool {
        self.kind == MessageEntityKind::Italic
    }

    pub fn is_code(&self) -> bool {
        self.kind == MessageEntityKind::Code
    }

    pub fn is_pre(&self) -> bool {
        self.kind == MessageEntityKind::Pre
    }

    pub fn is_text_link(&self) -> bool {
        self.kind == MessageEntityKind::TextLink
    }
}

/// Where a forwarded message originally came from.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageOrigin {
    User {
        date: i64,
        sender_user: User,
    },
    HiddenUser {
        date: i64,
        sender_user_name: String,
    },
    Chat {
        date: i64,
        sender_chat: Chat,
        #[serde(default)]
        author_signature: Option<String>,
    },
    Channel {
        date: i64,
        chat: Chat,
        message_id: i64,
        #[serde(default)]
        author_signature: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalReplyInfo {
    pub origin: MessageOrigin,
    #[serde(default)]
    pub chat: Option<Chat>,
    #[serde(default)]
    pub message_id: Option<i64>,
    #[serde(default)]
    pub link_preview_options: Option<LinkPreviewOptions>,
    #[serde(default)]
    pub animation: Option<Animation>,
    #[serde(default)]
    pub audio: Option<Audio>,
    #[serde(default)]
    pub document: Option<Document>,
    #[serde(default)]
    pub paid_media: Option<PaidMediaInfo>,
    #[serde(default)]
    pub photo: Vec<PhotoSize>,
    #[serde(default)]
    pub sticker: Option<Sticker>,
    #[serde(default)]
    pub story: Option<Story>,
    #[serde(default)]
    pub video: Option<Video>,
    #[serde(default)]
    pub video_note: Option<VideoNote>,
    #[serde(default)]
    pub voice: Option<Voice>,
    #[serde(default)]
    pub has_media_spoiler: bool,
    #[serde(default)]
    pub checklist: Option<Checklist>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub dice: Option<Dice>,
    #[serde(default)]
    pub game: Option<Game>,
    #[serde(default)]
    pub giveaway: Option<Giveaway>,
    #[serde(default)]
    pub giveaway_winners: Option<GiveawayWinners>,
    #[serde(default)]
    pub invoice: Option<Invoice>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub poll: Option<Poll>,
    #[serde(default)]
    pub venue: Option<Venue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextQuote {
    pub text: String,
    #[serde(default)]
    pub entities: Vec<MessageEntity>,
    pub position: usize,
    #[serde(default)]
    pub is_manual: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Story {
    pub chat: Chat,
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreviewOptions {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub prefer_small_media: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub prefer_large_media: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub show_above_text: bool,
}

/// Describes the message being replied to.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplyParameters {
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<ChatId>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub allow_sending_without_reply: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quote_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_position: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReactionType {
    Emoji { emoji: String },
    CustomEmoji { custom_emoji_id: String },
    Paid,
    #[serde(other)]
    Unknown,
}

impl ReactionType {
    pub fn emoji(emoji: impl Into<String>) -> Self {
        Self::Emoji {
            emoji: emoji.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactionCount {
    #[serde(rename = "type")]
    pub kind: ReactionType,
    pub total_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageReactionUpdated {
    pub chat: Chat,
    pub message_id: i64,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub actor_chat: Option<Chat>,
    pub date: i64,
    #[serde(default)]
    pub old_reaction: Vec<ReactionType>,
    #[serde(default)]
    pub new_reaction: Vec<ReactionType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageReactionCountUpdated {
    pub chat: Chat,
    pub message_id: i64,
    pub date: i64,
    #[serde(default)]
    pub reactions: Vec<ReactionCount>,
}
