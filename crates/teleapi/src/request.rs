//! The request descriptor trait and the bases shared by concrete requests.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use teleapi_types::{
    ChatId, InlineKeyboardMarkup, LinkPreviewOptions, Message, ReplyMarkup, ReplyParameters,
};

use crate::error::Result;
use crate::file::RequestFile;
use crate::params::{Candidate, Params};

/// One remote call: a method name, its parameters and optional file parts.
pub trait Request {
    /// Remote method name, e.g. `sendMessage`.
    const METHOD: &'static str;

    /// Type the `result` payload decodes into.
    type Response: DeserializeOwned;

    /// Builds the parameter mapping. Any error aborts the call before I/O.
    fn params(&self) -> Result<Params>;

    /// Files that must be uploaded as multipart parts.
    fn files(&self) -> Vec<RequestFile> {
        Vec::new()
    }
}

/// Fields shared by every request that posts into a chat.
#[derive(Debug, Clone, Default)]
pub struct BaseChat {
    pub chat_id: ChatId,
    pub message_thread_id: i64,
    pub business_connection_id: String,
    pub reply_to_message_id: i64,
    pub reply_parameters: Option<ReplyParameters>,
    pub allow_sending_without_reply: bool,
    pub disable_notification: bool,
    pub protect_content: bool,
    pub reply_markup: Option<ReplyMarkup>,
}

impl BaseChat {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            ..Self::default()
        }
    }

    pub fn reply_to(mut self, message_id: i64) -> Self {
        self.reply_to_message_id = message_id;
        self
    }

    pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into());
        self
    }

    pub fn silent(mut self) -> Self {
        self.disable_notification = true;
        self
    }

    pub fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_chat_id("chat_id", &self.chat_id)?;
        params.add_non_zero("message_thread_id", self.message_thread_id);
        params.add_non_empty("business_connection_id", &self.business_connection_id);
        params.add_non_zero("reply_to_message_id", self.reply_to_message_id);
        params.add_json("reply_parameters", &self.reply_parameters)?;
        params.add_flag("allow_sending_without_reply", self.allow_sending_without_reply);
        params.add_flag("disable_notification", self.disable_notification);
        params.add_flag("protect_content", self.protect_content);
        params.add_json("reply_markup", &self.reply_markup)?;
        Ok(params)
    }
}

/// Message addressed by an edit: a chat message or an inline message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    Chat { chat_id: ChatId, message_id: i64 },
    Inline(String),
}

impl Default for EditTarget {
    fn default() -> Self {
        Self::Inline(String::new())
    }
}

impl EditTarget {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self::Chat {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self::Inline(inline_message_id.into())
    }

    pub fn write(&self, params: &mut Params) -> Result<()> {
        match self {
            Self::Chat {
                chat_id,
                message_id,
            } => {
                params.add_chat_id("chat_id", chat_id)?;
                params.add_first_valid("message_id", &[Candidate::Int(*message_id)])
            }
            Self::Inline(id) => params.add_first_valid("inline_message_id", &[Candidate::Str(id)]),
        }
    }
}

/// Fields shared by every edit of an existing message.
#[derive(Debug, Clone, Default)]
pub struct BaseEdit {
    pub target: EditTarget,
    pub business_connection_id: String,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl BaseEdit {
    pub fn new(target: EditTarget) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    pub fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        self.target.write(&mut params)?;
        params.add_non_empty("business_connection_id", &self.business_connection_id);
        params.add_json("reply_markup", &self.reply_markup)?;
        Ok(params)
    }
}

impl From<EditTarget> for BaseEdit {
    fn from(target: EditTarget) -> Self {
        Self::new(target)
    }
}

/// Result of an edit: the edited message, or `true` for inline messages.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Edited {
    Message(Box<Message>),
    Inline(bool),
}

impl Edited {
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::Message(message) => Some(message),
            Self::Inline(_) => None,
        }
    }
}

/// Link preview options, skipped when absent.
pub(crate) fn add_link_preview(params: &mut Params, options: Option<&LinkPreviewOptions>) -> Result<()> {
    params.add_json("link_preview_options", &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use teleapi_types::{InlineKeyboardButton, ReplyKeyboardRemove};

    #[test]
    fn test_base_chat_minimal() {
        let params = BaseChat::new(42_i64).params().unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("chat_id"), Some("42"));
    }

    #[test]
    fn test_base_chat_options() {
        let params = BaseChat::new("@channel")
            .reply_to(7)
            .silent()
            .reply_markup(ReplyKeyboardRemove::default())
            .params()
            .unwrap();
        assert_eq!(params.get("chat_id"), Some("@channel"));
        assert_eq!(params.get("reply_to_message_id"), Some("7"));
        assert_eq!(params.get("disable_notification"), Some("true"));
        assert!(!params.contains_key("protect_content"));
        assert_eq!(
            params.get("reply_markup"),
            Some(r#"{"remove_keyboard":true}"#)
        );
    }

    #[test]
    fn test_base_chat_without_target_fails() {
        let err = BaseChat::default().params().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref key } if key == "chat_id"));
    }

    #[test]
    fn test_edit_targets() {
        let params = BaseEdit::new(EditTarget::chat(10, 5)).params().unwrap();
        assert_eq!(params.get("chat_id"), Some("10"));
        assert_eq!(params.get("message_id"), Some("5"));
        assert!(!params.contains_key("inline_message_id"));

        let mut edit = BaseEdit::new(EditTarget::inline("AAE"));
        edit.reply_markup = Some(InlineKeyboardMarkup::new(vec![vec![
            InlineKeyboardButton::callback("ok", "ok"),
        ]]));
        let params = edit.params().unwrap();
        assert_eq!(params.get("inline_message_id"), Some("AAE"));
        assert!(!params.contains_key("chat_id"));
        assert!(params.contains_key("reply_markup"));
    }

    #[test]
    fn test_edit_target_requires_message_id() {
        let err = BaseEdit::new(EditTarget::chat(10, 0)).params().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref key } if key == "message_id"));
        assert!(BaseEdit::default().params().is_err());
    }

    #[test]
    fn test_edited_decodes_both_shapes() {
        let edited: Edited = serde_json::from_str("true").unwrap();
        assert!(edited.message().is_none());
        let edited: Edited = serde_json::from_str(
            r#"{"message_id":1,"date":0,"chat":{"id":1,"type":"private"}}"#,
        )
        .unwrap();
        assert_eq!(edited.message().map(|m| m.message_id), Some(1));
    }
}
