//! Concrete requests, grouped by the area of the API they belong to.

pub mod bot;
pub mod business;
pub mod chat;
pub mod checklists;
pub mod games;
pub mod gifts;
pub mod inline;
pub mod media;
pub mod messages;
pub mod passport;
pub mod payments;
pub mod stickers;
pub mod stories;

use teleapi_types::{MessageEntity, ParseMode};

use crate::error::Result;
use crate::params::Params;

/// Caption of a media message.
#[derive(Debug, Clone, Default)]
pub struct Caption {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub entities: Vec<MessageEntity>,
    pub show_above_media: bool,
}

impl Caption {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    pub(crate) fn write(&self, params: &mut Params) -> Result<()> {
        params.add_non_empty("caption", &self.text);
        params.add_some("parse_mode", self.parse_mode);
        params.add_json_list("caption_entities", &self.entities)?;
        params.add_flag("show_caption_above_media", self.show_above_media);
        Ok(())
    }
}

impl From<&str> for Caption {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Caption {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Delivery options accepted by most `send*` methods.
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub message_effect_id: String,
    pub allow_paid_broadcast: bool,
}

impl SendOptions {
    pub(crate) fn write(&self, params: &mut Params) {
        params.add_non_empty("message_effect_id", &self.message_effect_id);
        params.add_flag("allow_paid_broadcast", self.allow_paid_broadcast);
    }
}

/// Formatted text attached to a gift or subscription.
#[derive(Debug, Clone, Default)]
pub struct GiftText {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub entities: Vec<MessageEntity>,
}

impl GiftText {
    pub(crate) fn write(&self, params: &mut Params) -> Result<()> {
        params.add_non_empty("text", &self.text);
        params.add_some("text_parse_mode", self.parse_mode);
        params.add_json_list("text_entities", &self.entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teleapi_types::MessageEntityKind;

    #[test]
    fn test_caption_fields() {
        let mut caption = Caption::new("*hi*").parse_mode(ParseMode::MarkdownV2);
        caption.entities.push(MessageEntity::new(MessageEntityKind::Bold, 0, 2));
        let mut params = Params::new();
        caption.write(&mut params).unwrap();
        assert_eq!(params.get("caption"), Some("*hi*"));
        assert_eq!(params.get("parse_mode"), Some("MarkdownV2"));
        assert!(params.get("caption_entities").unwrap().contains("\"bold\""));
        assert!(!params.contains_key("show_caption_above_media"));
    }

    #[test]
    fn test_empty_caption_writes_nothing() {
        let mut params = Params::new();
        Caption::default().write(&mut params).unwrap();
        SendOptions::default().write(&mut params);
        assert!(params.is_empty());
    }
}
