//! Text messages, forwarding, locations, polls and message edits.

use serde::Serialize;
use teleapi_types::{
    ChatAction, ChatId, LinkPreviewOptions, Message, MessageEntity, MessageId, ParseMode, Poll,
    ReactionType, UserProfilePhotos,
};

use crate::error::Result;
use crate::methods::{Caption, SendOptions};
use crate::params::{Candidate, Params};
use crate::request::{BaseChat, BaseEdit, Edited, Request, add_link_preview};

#[derive(Debug, Clone, Default)]
pub struct SendMessage {
    pub base: BaseChat,
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub entities: Vec<MessageEntity>,
    pub link_preview_options: Option<LinkPreviewOptions>,
    pub options: SendOptions,
}

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }
}

impl Request for SendMessage {
    const METHOD: &'static str = "sendMessage";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_first_valid("text", &[Candidate::Str(&self.text)])?;
        params.add_some("parse_mode", self.parse_mode);
        params.add_json_list("entities", &self.entities)?;
        add_link_preview(&mut params, self.link_preview_options.as_ref())?;
        self.options.write(&mut params);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForwardMessage {
    pub base: BaseChat,
    pub from_chat_id: ChatId,
    pub message_id: i64,
    pub video_start_timestamp: u32,
}

impl ForwardMessage {
    pub fn new(chat_id: impl Into<ChatId>, from_chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            from_chat_id: from_chat_id.into(),
            message_id,
            ..Self::default()
        }
    }
}

impl Request for ForwardMessage {
    const METHOD: &'static str = "forwardMessage";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_chat_id("from_chat_id", &self.from_chat_id)?;
        params.add_first_valid("message_id", &[Candidate::Int(self.message_id)])?;
        params.add_non_zero("video_start_timestamp", self.video_start_timestamp);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForwardMessages {
    pub base: BaseChat,
    pub from_chat_id: ChatId,
    pub message_ids: Vec<i64>,
}

impl Request for ForwardMessages {
    const METHOD: &'static str = "forwardMessages";
    type Response = Vec<MessageId>;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_chat_id("from_chat_id", &self.from_chat_id)?;
        params.add_json_list("message_ids", &self.message_ids)?;
        params.require(&["message_ids"])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CopyMessage {
    pub base: BaseChat,
    pub from_chat_id: ChatId,
    pub message_id: i64,
    pub caption: Caption,
    pub video_start_timestamp: u32,
    pub allow_paid_broadcast: bool,
}

impl CopyMessage {
    pub fn new(chat_id: impl Into<ChatId>, from_chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            from_chat_id: from_chat_id.into(),
            message_id,
            ..Self::default()
        }
    }
}

impl Request for CopyMessage {
    const METHOD: &'static str = "copyMessage";
    type Response = MessageId;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_chat_id("from_chat_id", &self.from_chat_id)?;
        params.add_first_valid("message_id", &[Candidate::Int(self.message_id)])?;
        self.caption.write(&mut params)?;
        params.add_non_zero("video_start_timestamp", self.video_start_timestamp);
        params.add_flag("allow_paid_broadcast", self.allow_paid_broadcast);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CopyMessages {
    pub base: BaseChat,
    pub from_chat_id: ChatId,
    pub message_ids: Vec<i64>,
    pub remove_caption: bool,
}

impl Request for CopyMessages {
    const METHOD: &'static str = "copyMessages";
    type Response = Vec<MessageId>;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_chat_id("from_chat_id", &self.from_chat_id)?;
        params.add_json_list("message_ids", &self.message_ids)?;
        params.require(&["message_ids"])?;
        params.add_flag("remove_caption", self.remove_caption);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendLocation {
    pub base: BaseChat,
    pub latitude: f64,
    pub longitude: f64,
    pub horizontal_accuracy: f64,
    pub live_period: u32,
    pub heading: u32,
    pub proximity_alert_radius: u32,
    pub options: SendOptions,
}

impl SendLocation {
    pub fn new(chat_id: impl Into<ChatId>, latitude: f64, longitude: f64) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            latitude,
            longitude,
            ..Self::default()
        }
    }
}

impl Request for SendLocation {
    const METHOD: &'static str = "sendLocation";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.insert("latitude", self.latitude.to_string());
        params.insert("longitude", self.longitude.to_string());
        params.add_non_zero("horizontal_accuracy", self.horizontal_accuracy);
        params.add_non_zero("live_period", self.live_period);
        params.add_non_zero("heading", self.heading);
        params.add_non_zero("proximity_alert_radius", self.proximity_alert_radius);
        self.options.write(&mut params);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditMessageLiveLocation {
    pub base: BaseEdit,
    pub latitude: f64,
    pub longitude: f64,
    pub horizontal_accuracy: f64,
    pub live_period: u32,
    pub heading: u32,
    pub proximity_alert_radius: u32,
}

impl Request for EditMessageLiveLocation {
    const METHOD: &'static str = "editMessageLiveLocation";
    type Response = Edited;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.insert("latitude", self.latitude.to_string());
        params.insert("longitude", self.longitude.to_string());
        params.add_non_zero("horizontal_accuracy", self.horizontal_accuracy);
        params.add_non_zero("live_period", self.live_period);
        params.add_non_zero("heading", self.heading);
        params.add_non_zero("proximity_alert_radius", self.proximity_alert_radius);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StopMessageLiveLocation {
    pub base: BaseEdit,
}

impl Request for StopMessageLiveLocation {
    const METHOD: &'static str = "stopMessageLiveLocation";
    type Response = Edited;

    fn params(&self) -> Result<Params> {
        self.base.params()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendVenue {
    pub base: BaseChat,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    pub foursquare_id: String,
    pub foursquare_type: String,
    pub google_place_id: String,
    pub google_place_type: String,
    pub options: SendOptions,
}

impl Request for SendVenue {
    const METHOD: &'static str = "sendVenue";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.insert("latitude", self.latitude.to_string());
        params.insert("longitude", self.longitude.to_string());
        params.insert("title", self.title.as_str());
        params.insert("address", self.address.as_str());
        params.add_non_empty("foursquare_id", &self.foursquare_id);
        params.add_non_empty("foursquare_type", &self.foursquare_type);
        params.add_non_empty("google_place_id", &self.google_place_id);
        params.add_non_empty("google_place_type", &self.google_place_type);
        self.options.write(&mut params);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendContact {
    pub base: BaseChat,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub vcard: String,
    pub options: SendOptions,
}

impl Request for SendContact {
    const METHOD: &'static str = "sendContact";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_first_valid("phone_number", &[Candidate::Str(&self.phone_number)])?;
        params.add_first_valid("first_name", &[Candidate::Str(&self.first_name)])?;
        params.add_non_empty("last_name", &self.last_name);
        params.add_non_empty("vcard", &self.vcard);
        self.options.write(&mut params);
        Ok(params)
    }
}

/// One answer option of a new poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputPollOption {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text_entities: Vec<MessageEntity>,
}

impl From<&str> for InputPollOption {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendPoll {
    pub base: BaseChat,
    pub question: String,
    pub question_parse_mode: Option<ParseMode>,
    pub question_entities: Vec<MessageEntity>,
    pub options: Vec<InputPollOption>,
    pub is_anonymous: bool,
    /// `regular` or `quiz`; the server defaults to `regular`.
    pub kind: String,
    pub allows_multiple_answers: bool,
    pub correct_option_id: Option<u32>,
    pub explanation: String,
    pub explanation_parse_mode: Option<ParseMode>,
    pub explanation_entities: Vec<MessageEntity>,
    pub open_period: u32,
    pub close_date: i64,
    pub is_closed: bool,
    pub send: SendOptions,
}

impl SendPoll {
    pub fn new<'a>(
        chat_id: impl Into<ChatId>,
        question: impl Into<String>,
        options: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            question: question.into(),
            options: options.into_iter().map(InputPollOption::from).collect(),
            is_anonymous: true,
            ..Self::default()
        }
    }
}

impl Request for SendPoll {
    const METHOD: &'static str = "sendPoll";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_first_valid("question", &[Candidate::Str(&self.question)])?;
        params.add_some("question_parse_mode", self.question_parse_mode);
        params.add_json_list("question_entities", &self.question_entities)?;
        params.add_json_list("options", &self.options)?;
        params.require(&["options"])?;
        params.add_bool("is_anonymous", self.is_anonymous);
        params.add_non_empty("type", &self.kind);
        params.add_bool("allows_multiple_answers", self.allows_multiple_answers);
        params.add_some("correct_option_id", self.correct_option_id);
        params.add_non_empty("explanation", &self.explanation);
        params.add_some("explanation_parse_mode", self.explanation_parse_mode);
        params.add_json_list("explanation_entities", &self.explanation_entities)?;
        params.add_non_zero("open_period", self.open_period);
        params.add_non_zero("close_date", self.close_date);
        params.add_flag("is_closed", self.is_closed);
        self.send.write(&mut params);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StopPoll {
    pub base: BaseEdit,
}

impl Request for StopPoll {
    const METHOD: &'static str = "stopPoll";
    type Response = Poll;

    fn params(&self) -> Result<Params> {
        self.base.params()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendDice {
    pub base: BaseChat,
    /// Defaults to 🎲 on the server when empty.
    pub emoji: String,
    pub options: SendOptions,
}

impl Request for SendDice {
    const METHOD: &'static str = "sendDice";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_non_empty("emoji", &self.emoji);
        self.options.write(&mut params);
        Ok(params)
    }
}

#[derive(Debug, Clone)]
pub struct SendChatAction {
    pub base: BaseChat,
    pub action: ChatAction,
}

impl SendChatAction {
    pub fn new(chat_id: impl Into<ChatId>, action: ChatAction) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            action,
        }
    }
}

impl Request for SendChatAction {
    const METHOD: &'static str = "sendChatAction";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.insert("action", self.action.as_str());
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetMessageReaction {
    pub chat_id: ChatId,
    pub message_id: i64,
    /// Empty clears the bot's reactions.
    pub reaction: Vec<ReactionType>,
    pub is_big: bool,
}

impl Request for SetMessageReaction {
    const METHOD: &'static str = "setMessageReaction";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_chat_id("chat_id", &self.chat_id)?;
        params.add_first_valid("message_id", &[Candidate::Int(self.message_id)])?;
        params.add_json("reaction", &self.reaction)?;
        params.add_flag("is_big", self.is_big);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditMessageText {
    pub base: BaseEdit,
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub entities: Vec<MessageEntity>,
    pub link_preview_options: Option<LinkPreviewOptions>,
}

impl Request for EditMessageText {
    const METHOD: &'static str = "editMessageText";
    type Response = Edited;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_first_valid("text", &[Candidate::Str(&self.text)])?;
        params.add_some("parse_mode", self.parse_mode);
        params.add_json_list("entities", &self.entities)?;
        add_link_preview(&mut params, self.link_preview_options.as_ref())?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditMessageCaption {
    pub base: BaseEdit,
    /// An empty caption removes the existing one.
    pub caption: Caption,
}

impl Request for EditMessageCaption {
    const METHOD: &'static str = "editMessageCaption";
    type Response = Edited;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        self.caption.write(&mut params)?;
        if !params.contains_key("caption") {
            params.insert("caption", "");
        }
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditMessageReplyMarkup {
    pub base: BaseEdit,
}

impl Request for EditMessageReplyMarkup {
    const METHOD: &'static str = "editMessageReplyMarkup";
    type Response = Edited;

    fn params(&self) -> Result<Params> {
        self.base.params()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
}

impl DeleteMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
        }
    }
}

impl Request for DeleteMessage {
    const METHOD: &'static str = "deleteMessage";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_chat_id("chat_id", &self.chat_id)?;
        params.add_first_valid("message_id", &[Candidate::Int(self.message_id)])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteMessages {
    pub chat_id: ChatId,
    pub message_ids: Vec<i64>,
}

impl Request for DeleteMessages {
    const METHOD: &'static str = "deleteMessages";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_chat_id("chat_id", &self.chat_id)?;
        params.add_json_list("message_ids", &self.message_ids)?;
        params.require(&["message_ids"])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetUserProfilePhotos {
    pub user_id: i64,
    pub offset: u32,
    pub limit: u32,
}

impl Request for GetUserProfilePhotos {
    const METHOD: &'static str = "getUserProfilePhotos";
    type Response = UserProfilePhotos;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        params.add_non_zero("offset", self.offset);
        params.add_non_zero("limit", self.limit);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetUserEmojiStatus {
    pub user_id: i64,
    /// Empty removes the status.
    pub emoji_status_custom_emoji_id: String,
    pub emoji_status_expiration_date: i64,
}

impl Request for SetUserEmojiStatus {
    const METHOD: &'static str = "setUserEmojiStatus";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        params.add_non_empty("emoji_status_custom_emoji_id", &self.emoji_status_custom_emoji_id);
        params.add_non_zero("emoji_status_expiration_date", self.emoji_status_expiration_date);
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::request::EditTarget;

    #[test]
    fn test_send_message_params() {
        let params = SendMessage::new(42_i64, "<b>hi</b>")
            .parse_mode(ParseMode::Html)
            .params()
            .unwrap();
        assert_eq!(params.get("chat_id"), Some("42"));
        assert_eq!(params.get("text"), Some("<b>hi</b>"));
        assert_eq!(params.get("parse_mode"), Some("HTML"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_send_message_requires_text() {
        let err = SendMessage::new(42_i64, "").params().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref key } if key == "text"));
    }

    #[test]
    fn test_forward_message_username_source() {
        let params = ForwardMessage::new(1_i64, "@source", 99).params().unwrap();
        assert_eq!(params.get("from_chat_id"), Some("@source"));
        assert_eq!(params.get("message_id"), Some("99"));
        assert!(!params.contains_key("video_start_timestamp"));
    }

    #[test]
    fn test_copy_messages_encodes_ids() {
        let request = CopyMessages {
            base: BaseChat::new(1_i64),
            from_chat_id: ChatId::Id(2),
            message_ids: vec![10, 11],
            remove_caption: true,
        };
        let params = request.params().unwrap();
        assert_eq!(params.get("message_ids"), Some("[10,11]"));
        assert_eq!(params.get("remove_caption"), Some("true"));

        let empty = CopyMessages {
            message_ids: Vec::new(),
            ..request
        };
        assert!(empty.params().is_err());
    }

    #[test]
    fn test_location_keeps_zero_coordinates() {
        let params = SendLocation::new(1_i64, 0.0, 51.5).params().unwrap();
        assert_eq!(params.get("latitude"), Some("0"));
        assert_eq!(params.get("longitude"), Some("51.5"));
        assert!(!params.contains_key("live_period"));
    }

    #[test]
    fn test_poll_writes_explicit_booleans() {
        let mut poll = SendPoll::new(1_i64, "Lunch?", ["pizza", "sushi"]);
        poll.kind = "quiz".to_string();
        poll.correct_option_id = Some(0);
        let params = poll.params().unwrap();
        assert_eq!(params.get("is_anonymous"), Some("true"));
        assert_eq!(params.get("allows_multiple_answers"), Some("false"));
        assert_eq!(params.get("correct_option_id"), Some("0"));
        assert_eq!(
            params.get("options"),
            Some(r#"[{"text":"pizza"},{"text":"sushi"}]"#)
        );
        assert!(!params.contains_key("is_closed"));
    }

    #[test]
    fn test_chat_action_spelling() {
        let params = SendChatAction::new(5_i64, ChatAction::UploadDocument)
            .params()
            .unwrap();
        assert_eq!(params.get("action"), Some("upload_document"));
    }

    #[test]
    fn test_reaction_clear_is_empty_list() {
        let request = SetMessageReaction {
            chat_id: ChatId::Id(1),
            message_id: 2,
            ..SetMessageReaction::default()
        };
        assert_eq!(request.params().unwrap().get("reaction"), Some("[]"));

        let request = SetMessageReaction {
            reaction: vec![ReactionType::emoji("👍")],
            ..request
        };
        assert_eq!(
            request.params().unwrap().get("reaction"),
            Some(r#"[{"type":"emoji","emoji":"👍"}]"#)
        );
    }

    #[test]
    fn test_edit_caption_can_clear() {
        let request = EditMessageCaption {
            base: BaseEdit::new(EditTarget::chat(1, 2)),
            caption: Caption::default(),
        };
        assert_eq!(request.params().unwrap().get("caption"), Some(""));
    }
}
