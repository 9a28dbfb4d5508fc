//! Input media items and the rewriter that turns uploads into `attach://`
//! placeholders plus named multipart parts.

use serde::Serialize;
use teleapi_types::{MessageEntity, ParseMode};

use crate::file::{InlineFile, InputFile, RequestFile};

/// Photo, video, animation, audio or document inside a media group or an
/// `editMessageMedia` call.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Animation(InputMediaAnimation),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

impl InputMedia {
    pub fn photo(media: InputFile) -> Self {
        Self::Photo(InputMediaPhoto::new(media))
    }

    pub fn video(media: InputFile) -> Self {
        Self::Video(InputMediaVideo::new(media))
    }

    pub fn animation(media: InputFile) -> Self {
        Self::Animation(InputMediaAnimation::new(media))
    }

    pub fn audio(media: InputFile) -> Self {
        Self::Audio(InputMediaAudio::new(media))
    }

    pub fn document(media: InputFile) -> Self {
        Self::Document(InputMediaDocument::new(media))
    }

    /// Sets the caption on any variant.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        let caption = Some(caption.into());
        match &mut self {
            Self::Photo(m) => m.caption = caption,
            Self::Video(m) => m.caption = caption,
            Self::Animation(m) => m.caption = caption,
            Self::Audio(m) => m.caption = caption,
            Self::Document(m) => m.caption = caption,
        }
        self
    }

    /// Sets the thumbnail; photos have none and ignore it.
    pub fn thumbnail(mut self, thumbnail: InputFile) -> Self {
        let thumbnail = Some(thumbnail);
        match &mut self {
            Self::Photo(_) => {}
            Self::Video(m) => m.thumbnail = thumbnail,
            Self::Animation(m) => m.thumbnail = thumbnail,
            Self::Audio(m) => m.thumbnail = thumbnail,
            Self::Document(m) => m.thumbnail = thumbnail,
        }
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMediaPhoto {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub show_caption_above_media: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_spoiler: bool,
}

impl InputMediaPhoto {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            caption: None,
            parse_mode: None,
            caption_entities: Vec::new(),
            show_caption_above_media: false,
            has_spoiler: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMediaVideo {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub show_caption_above_media: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub supports_streaming: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_spoiler: bool,
}

impl InputMediaVideo {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            thumbnail: None,
            cover: None,
            start_timestamp: None,
            caption: None,
            parse_mode: None,
            caption_entities: Vec::new(),
            show_caption_above_media: false,
            width: None,
            height: None,
            duration: None,
            supports_streaming: false,
            has_spoiler: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMediaAnimation {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub show_caption_above_media: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_spoiler: bool,
}

impl InputMediaAnimation {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            caption_entities: Vec::new(),
            show_caption_above_media: false,
            width: None,
            height: None,
            duration: None,
            has_spoiler: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMediaAudio {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl InputMediaAudio {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            caption_entities: Vec::new(),
            duration: None,
            performer: None,
            title: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMediaDocument {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_content_type_detection: bool,
}

impl InputMediaDocument {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            caption_entities: Vec::new(),
            disable_content_type_detection: false,
        }
    }
}

/// Media behind a paid-media post.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputPaidMedia {
    Photo {
        media: InputFile,
    },
    Video {
        media: InputFile,
        #[serde(skip_serializing_if = "Option::is_none")]
        thumbnail: Option<InputFile>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cover: Option<InputFile>,
        #[serde(skip_serializing_if = "Option::is_none")]
        start_timestamp: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<u32>,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        supports_streaming: bool,
    },
}

impl InputPaidMedia {
    pub fn photo(media: InputFile) -> Self {
        Self::Photo { media }
    }

    pub fn video(media: InputFile) -> Self {
        Self::Video {
            media,
            thumbnail: None,
            cover: None,
            start_timestamp: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: false,
        }
    }
}

/// Role of a file reference inside one item; the suffix of its part name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Media,
    Thumb,
    Cover,
}

/// Items whose file references can be swapped for attachment placeholders.
pub(crate) trait Attachable: Clone {
    /// Every file reference of the item, primary media first.
    fn slots_mut(&mut self) -> Vec<(Slot, &mut InputFile)>;
}

impl Attachable for InputMedia {
    fn slots_mut(&mut self) -> Vec<(Slot, &mut InputFile)> {
        let (media, thumbnail, cover) = match self {
            Self::Photo(m) => (&mut m.media, None, None),
            Self::Video(m) => (&mut m.media, m.thumbnail.as_mut(), m.cover.as_mut()),
            Self::Animation(m) => (&mut m.media, m.thumbnail.as_mut(), None),
            Self::Audio(m) => (&mut m.media, m.thumbnail.as_mut(), None),
            Self::Document(m) => (&mut m.media, m.thumbnail.as_mut(), None),
        };
        collect_slots(media, thumbnail, cover)
    }
}

impl Attachable for InputPaidMedia {
    fn slots_mut(&mut self) -> Vec<(Slot, &mut InputFile)> {
        match self {
            Self::Photo { media } => collect_slots(media, None, None),
            Self::Video {
                media,
                thumbnail,
                cover,
                ..
            } => collect_slots(media, thumbnail.as_mut(), cover.as_mut()),
        }
    }
}

pub(crate) fn collect_slots<'a>(
    media: &'a mut InputFile,
    thumbnail: Option<&'a mut InputFile>,
    cover: Option<&'a mut InputFile>,
) -> Vec<(Slot, &'a mut InputFile)> {
    let mut slots = vec![(Slot::Media, media)];
    slots.extend(thumbnail.map(|file| (Slot::Thumb, file)));
    slots.extend(cover.map(|file| (Slot::Cover, file)));
    slots
}

fn part_name(index: usize, slot: Slot) -> String {
    match slot {
        Slot::Media => format!("file-{index}"),
        Slot::Thumb => format!("file-{index}-thumb"),
        Slot::Cover => format!("file-{index}-cover"),
    }
}

/// Rewrites `items` in one pass.
///
/// Returns copies of the items with every upload replaced by
/// `attach://file-<i>[-thumb|-cover]` (`i` = `base` + position) and the parts
/// carrying the original uploads, in item order. Inline references pass
/// through untouched and contribute no parts.
pub(crate) fn attach_all<M: Attachable>(items: &[M], base: usize) -> (Vec<M>, Vec<RequestFile>) {
    let mut files = Vec::new();
    let rewritten = items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let mut item = item.clone();
            for (slot, file) in item.slots_mut() {
                if let InputFile::Upload(upload) = file {
                    let name = part_name(base + position, slot);
                    files.push(RequestFile::new(name.clone(), upload.clone()));
                    *file = InputFile::Inline(InlineFile::attach(&name));
                }
            }
            item
        })
        .collect();
    (rewritten, files)
}
