use serde::Deserialize;

use crate::chat::{
    BusinessConnection, BusinessMessagesDeleted, Chat, ChatBoostRemoved, ChatBoostUpdated,
    ChatJoinRequest, ChatMemberUpdated, ChatType,
};
use crate::constants::UpdateType;
use crate::media::{Location, Poll, PollAnswer};
use crate::message::{Message, MessageReactionCountUpdated, MessageReactionUpdated};
use crate::payments::{OrderInfo, ShippingAddress};
use crate::user::User;

/// One incoming event.
///
/// The wire format carries one optional field per event kind. Decoding keeps
/// every present payload in [`UpdateKind`] declaration order; `kind` is the
/// first of them and the rest stay reachable through [`Update::payloads`].
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawUpdate")]
pub struct Update {
    pub update_id: i64,
    pub kind: UpdateKind,
    extra: Vec<UpdateKind>,
}

#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum UpdateKind {
    Message(Message),
    EditedMessage(Message),
    ChannelPost(Message),
    EditedChannelPost(Message),
    BusinessConnection(BusinessConnection),
    BusinessMessage(Message),
    EditedBusinessMessage(Message),
    DeletedBusinessMessages(BusinessMessagesDeleted),
    MessageReaction(MessageReactionUpdated),
    MessageReactionCount(MessageReactionCountUpdated),
    InlineQuery(InlineQuery),
    ChosenInlineResult(ChosenInlineResult),
    CallbackQuery(CallbackQuery),
    ShippingQuery(ShippingQuery),
    PreCheckoutQuery(PreCheckoutQuery),
    PurchasedPaidMedia(PaidMediaPurchased),
    Poll(Poll),
    PollAnswer(PollAnswer),
    MyChatMember(ChatMemberUpdated),
    ChatMember(ChatMemberUpdated),
    ChatJoinRequest(ChatJoinRequest),
    ChatBoost(ChatBoostUpdated),
    RemovedChatBoost(ChatBoostRemoved),
    /// An event kind this crate does not know about yet.
    Unknown,
}

/// Payloads consulted by [`Update::sender`], highest priority first.
const SENDER_PRIORITY: &[UpdateType] = &[
    UpdateType::Message,
    UpdateType::EditedMessage,
    UpdateType::ChannelPost,
    UpdateType::EditedChannelPost,
    UpdateType::BusinessConnection,
    UpdateType::BusinessMessage,
    UpdateType::EditedBusinessMessage,
    UpdateType::MessageReaction,
    UpdateType::InlineQuery,
    UpdateType::ChosenInlineResult,
    UpdateType::CallbackQuery,
    UpdateType::ShippingQuery,
    UpdateType::PreCheckoutQuery,
    UpdateType::PurchasedPaidMedia,
    UpdateType::PollAnswer,
    UpdateType::MyChatMember,
    UpdateType::ChatMember,
    UpdateType::ChatJoinRequest,
];

/// Payloads consulted by [`Update::chat`], highest priority first.
const CHAT_PRIORITY: &[UpdateType] = &[
    UpdateType::Message,
    UpdateType::EditedMessage,
    UpdateType::ChannelPost,
    UpdateType::EditedChannelPost,
    UpdateType::BusinessMessage,
    UpdateType::EditedBusinessMessage,
    UpdateType::DeletedBusinessMessages,
    UpdateType::MessageReaction,
    UpdateType::MessageReactionCount,
    UpdateType::CallbackQuery,
    UpdateType::MyChatMember,
    UpdateType::ChatMember,
    UpdateType::ChatJoinRequest,
    UpdateType::ChatBoost,
    UpdateType::RemovedChatBoost,
];

impl Update {
    /// Every payload present in the envelope. Normally exactly one.
    pub fn payloads(&self) -> impl Iterator<Item = &UpdateKind> {
        std::iter::once(&self.kind).chain(&self.extra)
    }

    /// First present payload whose type appears in `priority`.
    fn first_of(&self, priority: &[UpdateType]) -> Option<&UpdateKind> {
        priority
            .iter()
            .find_map(|wanted| self.payloads().find(|kind| kind.update_type() == Some(*wanted)))
    }

    /// The user who triggered the event.
    ///
    /// `None` for anonymous channel posts and for event kinds without an actor
    /// (polls, reaction counts, boosts). The highest-priority payload decides,
    /// even when its sender is absent.
    pub fn sender(&self) -> Option<&User> {
        match self.first_of(SENDER_PRIORITY)? {
            UpdateKind::Message(message)
            | UpdateKind::EditedMessage(message)
            | UpdateKind::ChannelPost(message)
            | UpdateKind::EditedChannelPost(message)
            | UpdateKind::BusinessMessage(message)
            | UpdateKind::EditedBusinessMessage(message) => message.from.as_ref(),
            UpdateKind::BusinessConnection(connection) => Some(&connection.user),
            UpdateKind::MessageReaction(reaction) => reaction.user.as_ref(),
            UpdateKind::InlineQuery(query) => Some(&query.from),
            UpdateKind::ChosenInlineResult(result) => Some(&result.from),
            UpdateKind::CallbackQuery(query) => Some(&query.from),
            UpdateKind::ShippingQuery(query) => Some(&query.from),
            UpdateKind::PreCheckoutQuery(query) => Some(&query.from),
            UpdateKind::PurchasedPaidMedia(purchase) => Some(&purchase.from),
            UpdateKind::PollAnswer(answer) => answer.user.as_ref(),
            UpdateKind::MyChatMember(update) | UpdateKind::ChatMember(update) => {
                Some(&update.from)
            }
            UpdateKind::ChatJoinRequest(request) => Some(&request.from),
            _ => None,
        }
    }

    /// The chat the event happened in.
    ///
    /// Callback queries only have a chat when they originate from a message the
    /// bot sent, not from an inline message.
    pub fn chat(&self) -> Option<&Chat> {
        match self.first_of(CHAT_PRIORITY)? {
            UpdateKind::Message(message)
            | UpdateKind::EditedMessage(message)
            | UpdateKind::ChannelPost(message)
            | UpdateKind::EditedChannelPost(message)
            | UpdateKind::BusinessMessage(message)
            | UpdateKind::EditedBusinessMessage(message) => Some(&message.chat),
            UpdateKind::DeletedBusinessMessages(deleted) => Some(&deleted.chat),
            UpdateKind::MessageReaction(reaction) => Some(&reaction.chat),
            UpdateKind::MessageReactionCount(count) => Some(&count.chat),
            UpdateKind::CallbackQuery(query) => query.message.as_deref().map(|m| &m.chat),
            UpdateKind::MyChatMember(update) | UpdateKind::ChatMember(update) => {
                Some(&update.chat)
            }
            UpdateKind::ChatJoinRequest(request) => Some(&request.chat),
            UpdateKind::ChatBoost(boost) => Some(&boost.chat),
            UpdateKind::RemovedChatBoost(removed) => Some(&removed.chat),
            _ => None,
        }
    }

    /// The message carried by message-like events.
    pub fn message(&self) -> Option<&Message> {
        match &self.kind {
            UpdateKind::Message(message)
            | UpdateKind::EditedMessage(message)
            | UpdateKind::ChannelPost(message)
            | UpdateKind::EditedChannelPost(message)
            | UpdateKind::BusinessMessage(message)
            | UpdateKind::EditedBusinessMessage(message) => Some(message),
            _ => None,
        }
    }

    pub fn callback_data(&self) -> Option<&str> {
        match &self.kind {
            UpdateKind::CallbackQuery(query) => query.data.as_deref(),
            _ => None,
        }
    }

    pub fn update_type(&self) -> Option<UpdateType> {
        self.kind.update_type()
    }
}

impl UpdateKind {
    pub fn update_type(&self) -> Option<UpdateType> {
        let update_type = match self {
            Self::Message(_) => UpdateType::Message,
            Self::EditedMessage(_) => UpdateType::EditedMessage,
            Self::ChannelPost(_) => UpdateType::ChannelPost,
            Self::EditedChannelPost(_) => UpdateType::EditedChannelPost,
            Self::BusinessConnection(_) => UpdateType::BusinessConnection,
            Self::BusinessMessage(_) => UpdateType::BusinessMessage,
            Self::EditedBusinessMessage(_) => UpdateType::EditedBusinessMessage,
            Self::DeletedBusinessMessages(_) => UpdateType::DeletedBusinessMessages,
            Self::MessageReaction(_) => UpdateType::MessageReaction,
            Self::MessageReactionCount(_) => UpdateType::MessageReactionCount,
            Self::InlineQuery(_) => UpdateType::InlineQuery,
            Self::ChosenInlineResult(_) => UpdateType::ChosenInlineResult,
            Self::CallbackQuery(_) => UpdateType::CallbackQuery,
            Self::ShippingQuery(_) => UpdateType::ShippingQuery,
            Self::PreCheckoutQuery(_) => UpdateType::PreCheckoutQuery,
            Self::PurchasedPaidMedia(_) => UpdateType::PurchasedPaidMedia,
            Self::Poll(_) => UpdateType::Poll,
            Self::PollAnswer(_) => UpdateType::PollAnswer,
            Self::MyChatMember(_) => UpdateType::MyChatMember,
            Self::ChatMember(_) => UpdateType::ChatMember,
            Self::ChatJoinRequest(_) => UpdateType::ChatJoinRequest,
            Self::ChatBoost(_) => UpdateType::ChatBoost,
            Self::RemovedChatBoost(_) => UpdateType::RemovedChatBoost,
            Self::Unknown => return None,
        };
        Some(update_type)
    }
}

#[derive(Deserialize)]
struct RawUpdate {
    update_id: i64,
    message: Option<Message>,
    edited_message: Option<Message>,
    channel_post: Option<Message>,
    edited_channel_post: Option<Message>,
    business_connection: Option<BusinessConnection>,
    business_message: Option<Message>,
    edited_business_message: Option<Message>,
    deleted_business_messages: Option<BusinessMessagesDeleted>,
    message_reaction: Option<MessageReactionUpdated>,
    message_reaction_count: Option<MessageReactionCountUpdated>,
    inline_query: Option<InlineQuery>,
    chosen_inline_result: Option<ChosenInlineResult>,
    callback_query: Option<CallbackQuery>,
    shipping_query: Option<ShippingQuery>,
    pre_checkout_query: Option<PreCheckoutQuery>,
    #[serde(alias = "paid_media_purchased")]
    purchased_paid_media: Option<PaidMediaPurchased>,
    poll: Option<Poll>,
    poll_answer: Option<PollAnswer>,
    my_chat_member: Option<ChatMemberUpdated>,
    chat_member: Option<ChatMemberUpdated>,
    chat_join_request: Option<ChatJoinRequest>,
    chat_boost: Option<ChatBoostUpdated>,
    removed_chat_boost: Option<ChatBoostRemoved>,
}

impl From<RawUpdate> for Update {
    fn from(raw: RawUpdate) -> Self {
        let RawUpdate {
            update_id,
            message,
            edited_message,
            channel_post,
            edited_channel_post,
            business_connection,
            business_message,
            edited_business_message,
            deleted_business_messages,
            message_reaction,
            message_reaction_count,
            inline_query,
            chosen_inline_result,
            callback_query,
            shipping_query,
            pre_checkout_query,
            purchased_paid_media,
            poll,
            poll_answer,
            my_chat_member,
            chat_member,
            chat_join_request,
            chat_boost,
            removed_chat_boost,
        } = raw;

        let mut payloads = [
            message.map(UpdateKind::Message),
            edited_message.map(UpdateKind::EditedMessage),
            channel_post.map(UpdateKind::ChannelPost),
            edited_channel_post.map(UpdateKind::EditedChannelPost),
            business_connection.map(UpdateKind::BusinessConnection),
            business_message.map(UpdateKind::BusinessMessage),
            edited_business_message.map(UpdateKind::EditedBusinessMessage),
            deleted_business_messages.map(UpdateKind::DeletedBusinessMessages),
            message_reaction.map(UpdateKind::MessageReaction),
            message_reaction_count.map(UpdateKind::MessageReactionCount),
            inline_query.map(UpdateKind::InlineQuery),
            chosen_inline_result.map(UpdateKind::ChosenInlineResult),
            callback_query.map(UpdateKind::CallbackQuery),
            shipping_query.map(UpdateKind::ShippingQuery),
            pre_checkout_query.map(UpdateKind::PreCheckoutQuery),
            purchased_paid_media.map(UpdateKind::PurchasedPaidMedia),
            poll.map(UpdateKind::Poll),
            poll_answer.map(UpdateKind::PollAnswer),
            my_chat_member.map(UpdateKind::MyChatMember),
            chat_member.map(UpdateKind::ChatMember),
            chat_join_request.map(UpdateKind::ChatJoinRequest),
            chat_boost.map(UpdateKind::ChatBoost),
            removed_chat_boost.map(UpdateKind::RemovedChatBoost),
        ]
        .into_iter()
        .flatten();
        let kind = payloads.next().unwrap_or(UpdateKind::Unknown);

        Self {
            update_id,
            kind,
            extra: payloads.collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// Absent for buttons attached to inline messages.
    #[serde(default)]
    pub message: Option<Box<Message>>,
    #[serde(default)]
    pub inline_message_id: Option<String>,
    pub chat_instance: String,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub game_short_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    pub query: String,
    pub offset: String,
    #[serde(default)]
    pub chat_type: Option<ChatType>,
    #[serde(default)]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub inline_message_id: Option<String>,
    pub query: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShippingQuery {
    pub id: String,
    pub from: User,
    pub invoice_payload: String,
    pub shipping_address: ShippingAddress,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreCheckoutQuery {
    pub id: String,
    pub from: User,
    pub currency: String,
    pub total_amount: i64,
    pub invoice_payload: String,
    #[serde(default)]
    pub shipping_option_id: Option<String>,
    #[serde(default)]
    pub order_info: Option<OrderInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaidMediaPurchased {
    pub from: User,
    pub paid_media_payload: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookInfo {
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: u32,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub last_error_date: Option<i64>,
    #[serde(default)]
    pub last_error_message: Option<String>,
    #[serde(default)]
    pub last_synchronization_error_date: Option<i64>,
    #[serde(default)]
    pub max_connections: Option<u32>,
    #[serde(default)]
    pub allowed_updates: Vec<String>,
}

impl WebhookInfo {
    pub fn is_set(&self) -> bool {
        !self.url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = r#"{"id": 11, "is_bot": false, "first_name": "Alice"}"#;
    const CHAT: &str = r#"{"id": 22, "type": "group", "title": "Room"}"#;

    fn message_json(from: Option<&str>) -> String {
        match from {
            Some(from) => format!(
                r#"{{"message_id": 1, "date": 0, "chat": {CHAT}, "from": {from}, "text": "hi"}}"#
            ),
            None => format!(r#"{{"message_id": 1, "date": 0, "chat": {CHAT}, "text": "hi"}}"#),
        }
    }

    fn update(fields: &str) -> Update {
        serde_json::from_str(&format!(r#"{{"update_id": 100, {fields}}}"#)).unwrap()
    }

    #[test]
    fn test_message_update_sender_and_chat() {
        let update = update(&format!(r#""message": {}"#, message_json(Some(USER))));
        assert_eq!(update.update_id, 100);
        assert_eq!(update.sender().map(|u| u.id), Some(11));
        assert_eq!(update.chat().map(|c| c.id), Some(22));
        assert_eq!(update.update_type(), Some(UpdateType::Message));
        assert!(update.message().is_some());
    }

    #[test]
    fn test_anonymous_channel_post_has_no_sender() {
        let update = update(&format!(r#""channel_post": {}"#, message_json(None)));
        assert!(update.sender().is_none());
        assert_eq!(update.chat().map(|c| c.id), Some(22));
    }

    #[test]
    fn test_callback_query_without_message_has_sender_but_no_chat() {
        let update = update(&format!(
            r#""callback_query": {{"id": "cb", "from": {USER}, "chat_instance": "ci",
                "inline_message_id": "im", "data": "vote:yes"}}"#
        ));
        assert!(matches!(update.kind, UpdateKind::CallbackQuery(_)));
        assert_eq!(update.sender().map(|u| u.id), Some(11));
        assert!(update.chat().is_none());
        assert_eq!(update.callback_data(), Some("vote:yes"));
    }

    #[test]
    fn test_callback_query_with_message_reports_message_chat() {
        let update = update(&format!(
            r#""callback_query": {{"id": "cb", "from": {USER}, "chat_instance": "ci",
                "message": {}}}"#,
            message_json(None)
        ));
        assert_eq!(update.chat().map(|c| c.id), Some(22));
    }

    #[test]
    fn test_inline_query_has_sender_only() {
        let update = update(&format!(
            r#""inline_query": {{"id": "q", "from": {USER}, "query": "cats", "offset": ""}}"#
        ));
        assert_eq!(update.sender().map(|u| u.id), Some(11));
        assert!(update.chat().is_none());
        assert!(update.callback_data().is_none());
    }

    #[test]
    fn test_reaction_count_has_chat_only() {
        let update = update(&format!(
            r#""message_reaction_count": {{"chat": {CHAT}, "message_id": 5, "date": 1,
                "reactions": [{{"type": {{"type": "emoji", "emoji": "🔥"}}, "total_count": 3}}]}}"#
        ));
        assert!(update.sender().is_none());
        assert_eq!(update.chat().map(|c| c.id), Some(22));
    }

    #[test]
    fn test_business_connection_reports_account_owner() {
        let update = update(&format!(
            r#""business_connection": {{"id": "bc", "user": {USER}, "user_chat_id": 11,
                "date": 0, "can_reply": true, "is_enabled": true}}"#
        ));
        assert_eq!(update.sender().map(|u| u.id), Some(11));
        assert!(update.chat().is_none());
    }

    #[test]
    fn test_sender_scans_past_payloads_without_actor() {
        let update = update(&format!(
            r#""poll": {{"id": "p", "question": "Q?", "options": [], "total_voter_count": 0,
                "is_closed": false, "is_anonymous": true, "type": "regular",
                "allows_multiple_answers": false}},
               "chat_join_request": {{"chat": {CHAT}, "from": {USER}, "user_chat_id": 11, "date": 0}}"#
        ));
        assert!(matches!(update.kind, UpdateKind::Poll(_)));
        assert_eq!(update.payloads().count(), 2);
        assert_eq!(update.sender().map(|u| u.id), Some(11));
        assert_eq!(update.chat().map(|c| c.id), Some(22));
    }

    #[test]
    fn test_chat_scans_past_payloads_without_chat() {
        let update = update(&format!(
            r#""business_connection": {{"id": "bc", "user": {{"id": 99, "is_bot": false, "first_name": "B"}},
                "user_chat_id": 99, "date": 0, "can_reply": true, "is_enabled": true}},
               "message_reaction": {{"chat": {CHAT}, "message_id": 5, "user": {USER}, "date": 1,
                "old_reaction": [], "new_reaction": []}}"#
        ));
        assert!(matches!(update.kind, UpdateKind::BusinessConnection(_)));
        assert_eq!(update.chat().map(|c| c.id), Some(22));
        // The business connection ranks above the reaction for senders.
        assert_eq!(update.sender().map(|u| u.id), Some(99));
    }

    #[test]
    fn test_sender_priority_order() {
        let update = update(&format!(
            r#""callback_query": {{"id": "cb", "from": {{"id": 99, "is_bot": false, "first_name": "B"}},
                "chat_instance": "ci"}},
               "inline_query": {{"id": "q", "from": {USER}, "query": "", "offset": ""}}"#
        ));
        assert!(matches!(update.kind, UpdateKind::InlineQuery(_)));
        assert_eq!(update.sender().map(|u| u.id), Some(11));

        // An anonymous channel post outranks the join request and has no sender.
        let update = self::update(&format!(
            r#""chat_join_request": {{"chat": {CHAT}, "from": {USER}, "user_chat_id": 11, "date": 0}},
               "channel_post": {}"#,
            message_json(None)
        ));
        assert!(matches!(update.kind, UpdateKind::ChannelPost(_)));
        assert!(update.sender().is_none());
    }

    #[test]
    fn test_unknown_update_kind() {
        let update = update(r#""some_future_event": {"x": 1}"#);
        assert!(matches!(update.kind, UpdateKind::Unknown));
        assert!(update.sender().is_none());
        assert!(update.chat().is_none());
        assert!(update.update_type().is_none());
    }

    #[test]
    fn test_legacy_paid_media_field_name() {
        let update = update(&format!(
            r#""paid_media_purchased": {{"from": {USER}, "paid_media_payload": "p"}}"#
        ));
        assert_eq!(update.update_type(), Some(UpdateType::PurchasedPaidMedia));
    }

    #[test]
    fn test_webhook_info_is_set() {
        let info: WebhookInfo = serde_json::from_str(
            r#"{"url": "", "has_custom_certificate": false, "pending_update_count": 0}"#,
        )
        .unwrap();
        assert!(!info.is_set());
    }
}
