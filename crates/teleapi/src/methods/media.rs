//! Requests that carry media: single files, media groups and paid media.

use std::slice;

use teleapi_types::{ChatId, File, Message};

use crate::error::Result;
use crate::file::{InputFile, RequestFile, upload_parts};
use crate::media_group::{InputMedia, InputPaidMedia, attach_all};
use crate::methods::{Caption, SendOptions};
use crate::params::{Candidate, Params};
use crate::request::{BaseChat, BaseEdit, Edited, Request};

#[derive(Debug, Clone)]
pub struct SendPhoto {
    pub base: BaseChat,
    pub photo: InputFile,
    pub caption: Caption,
    pub has_spoiler: bool,
    pub options: SendOptions,
}

impl SendPhoto {
    pub fn new(chat_id: impl Into<ChatId>, photo: InputFile) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            photo,
            caption: Caption::default(),
            has_spoiler: false,
            options: SendOptions::default(),
        }
    }

    fn file_fields(&self) -> [(&'static str, Option<&InputFile>); 1] {
        [("photo", Some(&self.photo))]
    }
}

impl Request for SendPhoto {
    const METHOD: &'static str = "sendPhoto";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_inline_files(self.file_fields());
        self.caption.write(&mut params)?;
        params.add_flag("has_spoiler", self.has_spoiler);
        self.options.write(&mut params);
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        upload_parts(self.file_fields())
    }
}

#[derive(Debug, Clone)]
pub struct SendAudio {
    pub base: BaseChat,
    pub audio: InputFile,
    pub thumbnail: Option<InputFile>,
    pub caption: Caption,
    pub duration: u32,
    pub performer: String,
    pub title: String,
    pub options: SendOptions,
}

impl SendAudio {
    pub fn new(chat_id: impl Into<ChatId>, audio: InputFile) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            audio,
            thumbnail: None,
            caption: Caption::default(),
            duration: 0,
            performer: String::new(),
            title: String::new(),
            options: SendOptions::default(),
        }
    }

    fn file_fields(&self) -> [(&'static str, Option<&InputFile>); 2] {
        [
            ("audio", Some(&self.audio)),
            ("thumbnail", self.thumbnail.as_ref()),
        ]
    }
}

impl Request for SendAudio {
    const METHOD: &'static str = "sendAudio";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_inline_files(self.file_fields());
        self.caption.write(&mut params)?;
        params.add_non_zero("duration", self.duration);
        params.add_non_empty("performer", &self.performer);
        params.add_non_empty("title", &self.title);
        self.options.write(&mut params);
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        upload_parts(self.file_fields())
    }
}

#[derive(Debug, Clone)]
pub struct SendDocument {
    pub base: BaseChat,
    pub document: InputFile,
    pub thumbnail: Option<InputFile>,
    pub caption: Caption,
    pub disable_content_type_detection: bool,
    pub options: SendOptions,
}

impl SendDocument {
    pub fn new(chat_id: impl Into<ChatId>, document: InputFile) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            document,
            thumbnail: None,
            caption: Caption::default(),
            disable_content_type_detection: false,
            options: SendOptions::default(),
        }
    }

    fn file_fields(&self) -> [(&'static str, Option<&InputFile>); 2] {
        [
            ("document", Some(&self.document)),
            ("thumbnail", self.thumbnail.as_ref()),
        ]
    }
}

impl Request for SendDocument {
    const METHOD: &'static str = "sendDocument";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_inline_files(self.file_fields());
        self.caption.write(&mut params)?;
        params.add_flag(
            "disable_content_type_detection",
            self.disable_content_type_detection,
        );
        self.options.write(&mut params);
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        upload_parts(self.file_fields())
    }
}

#[derive(Debug, Clone)]
pub struct SendVideo {
    pub base: BaseChat,
    pub video: InputFile,
    pub thumbnail: Option<InputFile>,
    pub cover: Option<InputFile>,
    pub start_timestamp: u32,
    pub duration: u32,
    pub width: u32,
    pub height: u32,
    pub caption: Caption,
    pub has_spoiler: bool,
    pub supports_streaming: bool,
    pub options: SendOptions,
}

impl SendVideo {
    pub fn new(chat_id: impl Into<ChatId>, video: InputFile) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            video,
            thumbnail: None,
            cover: None,
            start_timestamp: 0,
            duration: 0,
            width: 0,
            height: 0,
            caption: Caption::default(),
            has_spoiler: false,
            supports_streaming: false,
            options: SendOptions::default(),
        }
    }

    fn file_fields(&self) -> [(&'static str, Option<&InputFile>); 3] {
        [
            ("video", Some(&self.video)),
            ("thumbnail", self.thumbnail.as_ref()),
            ("cover", self.cover.as_ref()),
        ]
    }
}

impl Request for SendVideo {
    const METHOD: &'static str = "sendVideo";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_inline_files(self.file_fields());
        params.add_non_zero("start_timestamp", self.start_timestamp);
        params.add_non_zero("duration", self.duration);
        params.add_non_zero("width", self.width);
        params.add_non_zero("height", self.height);
        self.caption.write(&mut params)?;
        params.add_flag("has_spoiler", self.has_spoiler);
        params.add_flag("supports_streaming", self.supports_streaming);
        self.options.write(&mut params);
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        upload_parts(self.file_fields())
    }
}

#[derive(Debug, Clone)]
pub struct SendAnimation {
    pub base: BaseChat,
    pub animation: InputFile,
    pub thumbnail: Option<InputFile>,
    pub duration: u32,
    pub width: u32,
    pub height: u32,
    pub caption: Caption,
    pub has_spoiler: bool,
    pub options: SendOptions,
}

impl SendAnimation {
    pub fn new(chat_id: impl Into<ChatId>, animation: InputFile) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            animation,
            thumbnail: None,
            duration: 0,
            width: 0,
            height: 0,
            caption: Caption::default(),
            has_spoiler: false,
            options: SendOptions::default(),
        }
    }

    fn file_fields(&self) -> [(&'static str, Option<&InputFile>); 2] {
        [
            ("animation", Some(&self.animation)),
            ("thumbnail", self.thumbnail.as_ref()),
        ]
    }
}

impl Request for SendAnimation {
    const METHOD: &'static str = "sendAnimation";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_inline_files(self.file_fields());
        params.add_non_zero("duration", self.duration);
        params.add_non_zero("width", self.width);
        params.add_non_zero("height", self.height);
        self.caption.write(&mut params)?;
        params.add_flag("has_spoiler", self.has_spoiler);
        self.options.write(&mut params);
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        upload_parts(self.file_fields())
    }
}

#[derive(Debug, Clone)]
pub struct SendVideoNote {
    pub base: BaseChat,
    pub video_note: InputFile,
    pub thumbnail: Option<InputFile>,
    pub duration: u32,
    /// Diameter of the round video.
    pub length: u32,
    pub options: SendOptions,
}

impl SendVideoNote {
    pub fn new(chat_id: impl Into<ChatId>, video_note: InputFile) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            video_note,
            thumbnail: None,
            duration: 0,
            length: 0,
            options: SendOptions::default(),
        }
    }

    fn file_fields(&self) -> [(&'static str, Option<&InputFile>); 2] {
        [
            ("video_note", Some(&self.video_note)),
            ("thumbnail", self.thumbnail.as_ref()),
        ]
    }
}

impl Request for SendVideoNote {
    const METHOD: &'static str = "sendVideoNote";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_inline_files(self.file_fields());
        params.add_non_zero("duration", self.duration);
        params.add_non_zero("length", self.length);
        self.options.write(&mut params);
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        upload_parts(self.file_fields())
    }
}

#[derive(Debug, Clone)]
pub struct SendVoice {
    pub base: BaseChat,
    pub voice: InputFile,
    pub caption: Caption,
    pub duration: u32,
    pub options: SendOptions,
}

impl SendVoice {
    pub fn new(chat_id: impl Into<ChatId>, voice: InputFile) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            voice,
            caption: Caption::default(),
            duration: 0,
            options: SendOptions::default(),
        }
    }

    fn file_fields(&self) -> [(&'static str, Option<&InputFile>); 1] {
        [("voice", Some(&self.voice))]
    }
}

impl Request for SendVoice {
    const METHOD: &'static str = "sendVoice";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_inline_files(self.file_fields());
        self.caption.write(&mut params)?;
        params.add_non_zero("duration", self.duration);
        self.options.write(&mut params);
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        upload_parts(self.file_fields())
    }
}

#[derive(Debug, Clone)]
pub struct SendSticker {
    pub base: BaseChat,
    pub sticker: InputFile,
    /// Only for freshly uploaded stickers.
    pub emoji: String,
    pub options: SendOptions,
}

impl SendSticker {
    pub fn new(chat_id: impl Into<ChatId>, sticker: InputFile) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            sticker,
            emoji: String::new(),
            options: SendOptions::default(),
        }
    }

    fn file_fields(&self) -> [(&'static str, Option<&InputFile>); 1] {
        [("sticker", Some(&self.sticker))]
    }
}

impl Request for SendSticker {
    const METHOD: &'static str = "sendSticker";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_inline_files(self.file_fields());
        params.add_non_empty("emoji", &self.emoji);
        self.options.write(&mut params);
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        upload_parts(self.file_fields())
    }
}

/// An album of 2-10 photos, videos, documents or audios.
#[derive(Debug, Clone, Default)]
pub struct SendMediaGroup {
    pub base: BaseChat,
    pub media: Vec<InputMedia>,
    pub options: SendOptions,
}

impl SendMediaGroup {
    pub fn new(chat_id: impl Into<ChatId>, media: Vec<InputMedia>) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            media,
            options: SendOptions::default(),
        }
    }
}

impl Request for SendMediaGroup {
    const METHOD: &'static str = "sendMediaGroup";
    type Response = Vec<Message>;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        let (media, _) = attach_all(&self.media, 0);
        params.add_json_list("media", &media)?;
        params.require(&["media"])?;
        self.options.write(&mut params);
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        attach_all(&self.media, 0).1
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendPaidMedia {
    pub base: BaseChat,
    /// Price in Telegram Stars.
    pub star_count: u32,
    pub media: Vec<InputPaidMedia>,
    /// Bot-defined payload, not shown to the user.
    pub payload: String,
    pub caption: Caption,
    pub allow_paid_broadcast: bool,
}

impl Request for SendPaidMedia {
    const METHOD: &'static str = "sendPaidMedia";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_first_valid("star_count", &[Candidate::Int(self.star_count.into())])?;
        let (media, _) = attach_all(&self.media, 0);
        params.add_json_list("media", &media)?;
        params.require(&["media"])?;
        params.add_non_empty("payload", &self.payload);
        self.caption.write(&mut params)?;
        params.add_flag("allow_paid_broadcast", self.allow_paid_broadcast);
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        attach_all(&self.media, 0).1
    }
}

#[derive(Debug, Clone)]
pub struct EditMessageMedia {
    pub base: BaseEdit,
    pub media: InputMedia,
}

impl Request for EditMessageMedia {
    const METHOD: &'static str = "editMessageMedia";
    type Response = Edited;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        let (media, _) = attach_all(slice::from_ref(&self.media), 0);
        params.add_json("media", &media[0])?;
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        attach_all(slice::from_ref(&self.media), 0).1
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetFile {
    pub file_id: String,
}

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

impl Request for GetFile {
    const METHOD: &'static str = "getFile";
    type Response = File;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("file_id", &[Candidate::Str(&self.file_id)])?;
        Ok(params)
    }
}
