//! Inline mode: query answers, result shapes and Web App replies.

use serde::{Serialize, Serializer};
use teleapi_types::{
    InlineKeyboardMarkup, LabeledPrice, LinkPreviewOptions, MessageEntity, ParseMode,
    PreparedInlineMessage, SentWebAppMessage, WebAppInfo,
};

use crate::error::Result;
use crate::params::{Candidate, Params};
use crate::request::Request;

/// Caption fields shared by media results.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultCaption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub show_caption_above_media: bool,
}

/// Preview image for results that are not media themselves.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultThumbnail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_height: Option<u32>,
}

/// Content sent instead of the result's own media.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
    Location(InputLocationMessageContent),
    Venue(InputVenueMessageContent),
    Contact(InputContactMessageContent),
    Invoice(Box<InputInvoiceMessageContent>),
}

impl InputMessageContent {
    pub fn text(message_text: impl Into<String>) -> Self {
        Self::Text(InputTextMessageContent {
            message_text: message_text.into(),
            parse_mode: None,
            entities: Vec::new(),
            link_preview_options: None,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InputTextMessageContent {
    pub message_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputLocationMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputVenueMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(flatten)]
    pub place: VenuePlace,
}

/// Foursquare and Google Places identifiers of a venue.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VenuePlace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_place_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_place_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputContactMessageContent {
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcard: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputInvoiceMessageContent {
    pub title: String,
    pub description: String,
    pub payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_token: Option<String>,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tip_amount: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggested_tip_amounts: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_height: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub need_name: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub need_phone_number: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub need_email: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub need_shipping_address: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub send_phone_number_to_provider: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub send_email_to_provider: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_flexible: bool,
}

/// Declares a result struct: `id`, the listed fields, then the optional
/// keyboard and replacement content every result carries.
macro_rules! inline_result {
    ($(#[$meta:meta])* $name:ident { $($body:tt)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, Serialize)]
        pub struct $name {
            pub id: String,
            $($body)*
            #[serde(skip_serializing_if = "Option::is_none")]
            pub reply_markup: Option<InlineKeyboardMarkup>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub input_message_content: Option<InputMessageContent>,
        }
    };
}

inline_result!(InlineQueryResultArticle {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub thumbnail: ResultThumbnail,
});

inline_result!(InlineQueryResultPhoto {
    pub photo_url: String,
    pub thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub caption: ResultCaption,
});

inline_result!(InlineQueryResultGif {
    pub gif_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gif_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gif_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gif_duration: Option<u32>,
    pub thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub caption: ResultCaption,
});

inline_result!(InlineQueryResultMpeg4Gif {
    pub mpeg4_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpeg4_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpeg4_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpeg4_duration: Option<u32>,
    pub thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub caption: ResultCaption,
});

inline_result!(InlineQueryResultVideo {
    pub video_url: String,
    pub mime_type: String,
    pub thumbnail_url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub caption: ResultCaption,
});

inline_result!(InlineQueryResultAudio {
    pub audio_url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_duration: Option<u32>,
    #[serde(flatten)]
    pub caption: ResultCaption,
});

inline_result!(InlineQueryResultVoice {
    pub voice_url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_duration: Option<u32>,
    #[serde(flatten)]
    pub caption: ResultCaption,
});

inline_result!(InlineQueryResultDocument {
    pub title: String,
    pub document_url: String,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub caption: ResultCaption,
    #[serde(flatten)]
    pub thumbnail: ResultThumbnail,
});

inline_result!(InlineQueryResultLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,
    #[serde(flatten)]
    pub thumbnail: ResultThumbnail,
});

inline_result!(InlineQueryResultVenue {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(flatten)]
    pub place: VenuePlace,
    #[serde(flatten)]
    pub thumbnail: ResultThumbnail,
});

inline_result!(InlineQueryResultContact {
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcard: Option<String>,
    #[serde(flatten)]
    pub thumbnail: ResultThumbnail,
});

/// Games accept no replacement content; `input_message_content` is ignored
/// by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InlineQueryResultGame {
    pub id: String,
    pub game_short_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

inline_result!(InlineQueryResultCachedPhoto {
    pub photo_file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub caption: ResultCaption,
});

inline_result!(InlineQueryResultCachedGif {
    pub gif_file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub caption: ResultCaption,
});

inline_result!(InlineQueryResultCachedMpeg4Gif {
    pub mpeg4_file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub caption: ResultCaption,
});

inline_result!(InlineQueryResultCachedSticker {
    pub sticker_file_id: String,
});

inline_result!(InlineQueryResultCachedDocument {
    pub title: String,
    pub document_file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub caption: ResultCaption,
});

inline_result!(InlineQueryResultCachedVideo {
    pub video_file_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub caption: ResultCaption,
});

inline_result!(InlineQueryResultCachedVoice {
    pub voice_file_id: String,
    pub title: String,
    #[serde(flatten)]
    pub caption: ResultCaption,
});

inline_result!(InlineQueryResultCachedAudio {
    pub audio_file_id: String,
    #[serde(flatten)]
    pub caption: ResultCaption,
});

/// One result of an inline query.
///
/// Cached variants share the wire `type` of their URL counterparts and are
/// told apart by their `*_file_id` field.
#[derive(Debug, Clone)]
pub enum InlineQueryResult {
    Article(InlineQueryResultArticle),
    Photo(InlineQueryResultPhoto),
    Gif(InlineQueryResultGif),
    Mpeg4Gif(InlineQueryResultMpeg4Gif),
    Video(InlineQueryResultVideo),
    Audio(InlineQueryResultAudio),
    Voice(InlineQueryResultVoice),
    Document(InlineQueryResultDocument),
    Location(InlineQueryResultLocation),
    Venue(InlineQueryResultVenue),
    Contact(InlineQueryResultContact),
    Game(InlineQueryResultGame),
    CachedPhoto(InlineQueryResultCachedPhoto),
    CachedGif(InlineQueryResultCachedGif),
    CachedMpeg4Gif(InlineQueryResultCachedMpeg4Gif),
    CachedSticker(InlineQueryResultCachedSticker),
    CachedDocument(InlineQueryResultCachedDocument),
    CachedVideo(InlineQueryResultCachedVideo),
    CachedVoice(InlineQueryResultCachedVoice),
    CachedAudio(InlineQueryResultCachedAudio),
}

impl InlineQueryResult {
    /// A text article answered with `text`.
    pub fn article(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Article(InlineQueryResultArticle {
            id: id.into(),
            title: title.into(),
            input_message_content: Some(InputMessageContent::text(text)),
            ..InlineQueryResultArticle::default()
        })
    }

    pub fn photo(id: impl Into<String>, photo_url: impl Into<String>) -> Self {
        let photo_url = photo_url.into();
        Self::Photo(InlineQueryResultPhoto {
            id: id.into(),
            thumbnail_url: photo_url.clone(),
            photo_url,
            ..InlineQueryResultPhoto::default()
        })
    }

    pub fn cached_photo(id: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self::CachedPhoto(InlineQueryResultCachedPhoto {
            id: id.into(),
            photo_file_id: file_id.into(),
            ..InlineQueryResultCachedPhoto::default()
        })
    }

    pub fn cached_sticker(id: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self::CachedSticker(InlineQueryResultCachedSticker {
            id: id.into(),
            sticker_file_id: file_id.into(),
            ..InlineQueryResultCachedSticker::default()
        })
    }

    pub fn game(id: impl Into<String>, game_short_name: impl Into<String>) -> Self {
        Self::Game(InlineQueryResultGame {
            id: id.into(),
            game_short_name: game_short_name.into(),
            reply_markup: None,
        })
    }

    /// Value of the wire `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Article(_) => "article",
            Self::Photo(_) | Self::CachedPhoto(_) => "photo",
            Self::Gif(_) | Self::CachedGif(_) => "gif",
            Self::Mpeg4Gif(_) | Self::CachedMpeg4Gif(_) => "mpeg4_gif",
            Self::Video(_) | Self::CachedVideo(_) => "video",
            Self::Audio(_) | Self::CachedAudio(_) => "audio",
            Self::Voice(_) | Self::CachedVoice(_) => "voice",
            Self::Document(_) | Self::CachedDocument(_) => "document",
            Self::Location(_) => "location",
            Self::Venue(_) => "venue",
            Self::Contact(_) => "contact",
            Self::Game(_) => "game",
            Self::CachedSticker(_) => "sticker",
        }
    }
}

#[derive(Serialize)]
struct Tagged<'a, T> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for InlineQueryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let kind = self.kind();
        match self {
            Self::Article(body) => Tagged { kind, body }.serialize(serializer),
            Self::Photo(body) => Tagged { kind, body }.serialize(serializer),
            Self::Gif(body) => Tagged { kind, body }.serialize(serializer),
            Self::Mpeg4Gif(body) => Tagged { kind, body }.serialize(serializer),
            Self::Video(body) => Tagged { kind, body }.serialize(serializer),
            Self::Audio(body) => Tagged { kind, body }.serialize(serializer),
            Self::Voice(body) => Tagged { kind, body }.serialize(serializer),
            Self::Document(body) => Tagged { kind, body }.serialize(serializer),
            Self::Location(body) => Tagged { kind, body }.serialize(serializer),
            Self::Venue(body) => Tagged { kind, body }.serialize(serializer),
            Self::Contact(body) => Tagged { kind, body }.serialize(serializer),
            Self::Game(body) => Tagged { kind, body }.serialize(serializer),
            Self::CachedPhoto(body) => Tagged { kind, body }.serialize(serializer),
            Self::CachedGif(body) => Tagged { kind, body }.serialize(serializer),
            Self::CachedMpeg4Gif(body) => Tagged { kind, body }.serialize(serializer),
            Self::CachedSticker(body) => Tagged { kind, body }.serialize(serializer),
            Self::CachedDocument(body) => Tagged { kind, body }.serialize(serializer),
            Self::CachedVideo(body) => Tagged { kind, body }.serialize(serializer),
            Self::CachedVoice(body) => Tagged { kind, body }.serialize(serializer),
            Self::CachedAudio(body) => Tagged { kind, body }.serialize(serializer),
        }
    }
}

/// Button shown above inline results.
#[derive(Debug, Clone, Serialize)]
pub struct InlineQueryResultsButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_parameter: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AnswerInlineQuery {
    pub inline_query_id: String,
    pub results: Vec<InlineQueryResult>,
    /// Seconds the result may be cached on the server.
    pub cache_time: u32,
    pub is_personal: bool,
    pub next_offset: String,
    pub button: Option<InlineQueryResultsButton>,
}

impl AnswerInlineQuery {
    pub fn new(
        inline_query_id: impl Into<String>,
        results: impl IntoIterator<Item = InlineQueryResult>,
    ) -> Self {
        Self {
            inline_query_id: inline_query_id.into(),
            results: results.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Request for AnswerInlineQuery {
    const METHOD: &'static str = "answerInlineQuery";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("inline_query_id", &[Candidate::Str(&self.inline_query_id)])?;
        // An empty result list is a valid "nothing found" answer.
        params.add_json("results", &self.results)?;
        params.add_non_zero("cache_time", self.cache_time);
        params.add_flag("is_personal", self.is_personal);
        params.add_non_empty("next_offset", &self.next_offset);
        params.add_json("button", &self.button)?;
        Ok(params)
    }
}

#[derive(Debug, Clone)]
pub struct AnswerWebAppQuery {
    pub web_app_query_id: String,
    pub result: InlineQueryResult,
}

impl Request for AnswerWebAppQuery {
    const METHOD: &'static str = "answerWebAppQuery";
    type Response = SentWebAppMessage;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("web_app_query_id", &[Candidate::Str(&self.web_app_query_id)])?;
        params.add_json("result", &self.result)?;
        Ok(params)
    }
}

/// Stores a message a Mini App user can later send.
#[derive(Debug, Clone)]
pub struct SavePreparedInlineMessage {
    pub user_id: i64,
    pub result: InlineQueryResult,
    pub allow_user_chats: bool,
    pub allow_bot_chats: bool,
    pub allow_group_chats: bool,
    pub allow_channel_chats: bool,
}

impl Request for SavePreparedInlineMessage {
    const METHOD: &'static str = "savePreparedInlineMessage";
    type Response = PreparedInlineMessage;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        params.add_json("result", &self.result)?;
        params.add_flag("allow_user_chats", self.allow_user_chats);
        params.add_flag("allow_bot_chats", self.allow_bot_chats);
        params.add_flag("allow_group_chats", self.allow_group_chats);
        params.add_flag("allow_channel_chats", self.allow_channel_chats);
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use teleapi_types::InlineKeyboardButton;

    #[test]
    fn test_article_encoding() {
        let result = InlineQueryResult::article("1", "Hello", "Hello, world");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "type": "article",
                "id": "1",
                "title": "Hello",
                "input_message_content": {"message_text": "Hello, world"},
            })
        );
    }

    #[test]
    fn test_cached_variants_share_wire_type() {
        let cached = serde_json::to_value(InlineQueryResult::cached_photo("2", "AgAD")).unwrap();
        assert_eq!(cached["type"], "photo");
        assert_eq!(cached["photo_file_id"], "AgAD");
        assert!(cached.get("photo_url").is_none());

        let sticker = serde_json::to_value(InlineQueryResult::cached_sticker("3", "CAAC")).unwrap();
        assert_eq!(sticker["type"], "sticker");
    }

    #[test]
    fn test_flattened_caption_and_markup() {
        let mut result = InlineQueryResultPhoto {
            id: "p".to_string(),
            photo_url: "https://example.com/p.jpg".to_string(),
            thumbnail_url: "https://example.com/t.jpg".to_string(),
            ..InlineQueryResultPhoto::default()
        };
        result.caption.caption = Some("*cat*".to_string());
        result.caption.parse_mode = Some(ParseMode::MarkdownV2);
        result.reply_markup = Some(InlineKeyboardMarkup::row([InlineKeyboardButton::callback(
            "Like", "like:p",
        )]));
        let value = serde_json::to_value(InlineQueryResult::Photo(result)).unwrap();
        assert_eq!(value["caption"], "*cat*");
        assert_eq!(value["parse_mode"], "MarkdownV2");
        assert!(value.get("caption_entities").is_none());
        assert_eq!(
            value["reply_markup"]["inline_keyboard"][0][0]["callback_data"],
            "like:p"
        );
    }

    #[test]
    fn test_answer_inline_query_params() {
        let mut request = AnswerInlineQuery::new("q-7", [InlineQueryResult::game("g", "tetris")]);
        request.is_personal = true;
        request.next_offset = "20".to_string();
        let params = request.params().unwrap();
        assert_eq!(params.get("inline_query_id"), Some("q-7"));
        assert_eq!(
            params.get("results"),
            Some(r#"[{"type":"game","id":"g","game_short_name":"tetris"}]"#)
        );
        assert_eq!(params.get("is_personal"), Some("true"));
        assert_eq!(params.get("next_offset"), Some("20"));
        assert!(!params.contains_key("cache_time"));
        assert!(!params.contains_key("button"));
    }

    #[test]
    fn test_empty_answer_keeps_results() {
        let params = AnswerInlineQuery::new("q", []).params().unwrap();
        assert_eq!(params.get("results"), Some("[]"));
    }

    #[test]
    fn test_prepared_message_requires_user() {
        let request = SavePreparedInlineMessage {
            user_id: 0,
            result: InlineQueryResult::article("1", "t", "x"),
            allow_user_chats: true,
            allow_bot_chats: false,
            allow_group_chats: false,
            allow_channel_chats: false,
        };
        assert!(request.params().is_err());
    }
}
