//! Sticker sets and the stickers inside them.

use std::slice;

use serde::Serialize;
use teleapi_types::{File, MaskPosition, Sticker, StickerFormat, StickerSet, StickerType};

use crate::error::Result;
use crate::file::{InputFile, RequestFile, upload_parts};
use crate::media_group::{Attachable, Slot, attach_all, collect_slots};
use crate::params::{Candidate, Params};
use crate::request::Request;

/// A sticker to add to a set. Uploads become `attach://file-<i>` parts.
#[derive(Debug, Clone, Serialize)]
pub struct InputSticker {
    pub sticker: InputFile,
    pub format: StickerFormat,
    pub emoji_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl InputSticker {
    pub fn new(sticker: InputFile, format: StickerFormat, emoji: impl Into<String>) -> Self {
        Self {
            sticker,
            format,
            emoji_list: vec![emoji.into()],
            mask_position: None,
            keywords: Vec::new(),
        }
    }
}

impl Attachable for InputSticker {
    fn slots_mut(&mut self) -> Vec<(Slot, &mut InputFile)> {
        collect_slots(&mut self.sticker, None, None)
    }
}

fn named(name: &str) -> Result<Params> {
    let mut params = Params::new();
    params.add_first_valid("name", &[Candidate::Str(name)])?;
    Ok(params)
}

fn for_sticker(sticker: &str) -> Result<Params> {
    let mut params = Params::new();
    params.add_first_valid("sticker", &[Candidate::Str(sticker)])?;
    Ok(params)
}

#[derive(Debug, Clone, Default)]
pub struct GetStickerSet {
    pub name: String,
}

impl Request for GetStickerSet {
    const METHOD: &'static str = "getStickerSet";
    type Response = StickerSet;

    fn params(&self) -> Result<Params> {
        named(&self.name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetCustomEmojiStickers {
    pub custom_emoji_ids: Vec<String>,
}

impl Request for GetCustomEmojiStickers {
    const METHOD: &'static str = "getCustomEmojiStickers";
    type Response = Vec<Sticker>;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_json_list("custom_emoji_ids", &self.custom_emoji_ids)?;
        params.require(&["custom_emoji_ids"])?;
        Ok(params)
    }
}

/// Uploads a sticker file for later use in set creation.
#[derive(Debug, Clone)]
pub struct UploadStickerFile {
    pub user_id: i64,
    pub sticker: InputFile,
    pub sticker_format: StickerFormat,
}

impl UploadStickerFile {
    fn file_fields(&self) -> [(&'static str, Option<&InputFile>); 1] {
        [("sticker", Some(&self.sticker))]
    }
}

impl Request for UploadStickerFile {
    const METHOD: &'static str = "uploadStickerFile";
    type Response = File;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        params.add_inline_files(self.file_fields());
        params.insert("sticker_format", self.sticker_format.as_str());
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        upload_parts(self.file_fields())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateNewStickerSet {
    pub user_id: i64,
    /// Short name; must end in `_by_<bot_username>`.
    pub name: String,
    pub title: String,
    pub stickers: Vec<InputSticker>,
    pub sticker_type: Option<StickerType>,
    pub needs_repainting: bool,
}

impl Request for CreateNewStickerSet {
    const METHOD: &'static str = "createNewStickerSet";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = named(&self.name)?;
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        params.add_first_valid("title", &[Candidate::Str(&self.title)])?;
        let (stickers, _) = attach_all(&self.stickers, 0);
        params.add_json_list("stickers", &stickers)?;
        params.require(&["stickers"])?;
        params.add_some("sticker_type", self.sticker_type.map(StickerType::as_str));
        params.add_flag("needs_repainting", self.needs_repainting);
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        attach_all(&self.stickers, 0).1
    }
}

#[derive(Debug, Clone)]
pub struct AddStickerToSet {
    pub user_id: i64,
    pub name: String,
    pub sticker: InputSticker,
}

impl Request for AddStickerToSet {
    const METHOD: &'static str = "addStickerToSet";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = named(&self.name)?;
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        let (sticker, _) = attach_all(slice::from_ref(&self.sticker), 0);
        params.add_json("sticker", &sticker[0])?;
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        attach_all(slice::from_ref(&self.sticker), 0).1
    }
}

#[derive(Debug, Clone)]
pub struct ReplaceStickerInSet {
    pub user_id: i64,
    pub name: String,
    /// File id of the sticker being replaced.
    pub old_sticker: String,
    pub sticker: InputSticker,
}

impl Request for ReplaceStickerInSet {
    const METHOD: &'static str = "replaceStickerInSet";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = named(&self.name)?;
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        params.add_first_valid("old_sticker", &[Candidate::Str(&self.old_sticker)])?;
        let (sticker, _) = attach_all(slice::from_ref(&self.sticker), 0);
        params.add_json("sticker", &sticker[0])?;
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        attach_all(slice::from_ref(&self.sticker), 0).1
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetStickerPositionInSet {
    pub sticker: String,
    /// Zero-based target position.
    pub position: u32,
}

impl Request for SetStickerPositionInSet {
    const METHOD: &'static str = "setStickerPositionInSet";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = for_sticker(&self.sticker)?;
        params.insert("position", self.position.to_string());
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteStickerFromSet {
    pub sticker: String,
}

impl Request for DeleteStickerFromSet {
    const METHOD: &'static str = "deleteStickerFromSet";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        for_sticker(&self.sticker)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetStickerEmojiList {
    pub sticker: String,
    pub emoji_list: Vec<String>,
}

impl Request for SetStickerEmojiList {
    const METHOD: &'static str = "setStickerEmojiList";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = for_sticker(&self.sticker)?;
        params.add_json_list("emoji_list", &self.emoji_list)?;
        params.require(&["emoji_list"])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetStickerKeywords {
    pub sticker: String,
    /// An empty list removes all keywords.
    pub keywords: Vec<String>,
}

impl Request for SetStickerKeywords {
    const METHOD: &'static str = "setStickerKeywords";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = for_sticker(&self.sticker)?;
        params.add_json("keywords", &self.keywords)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetStickerMaskPosition {
    pub sticker: String,
    /// `None` removes the mask position.
    pub mask_position: Option<MaskPosition>,
}

impl Request for SetStickerMaskPosition {
    const METHOD: &'static str = "setStickerMaskPosition";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = for_sticker(&self.sticker)?;
        params.add_json("mask_position", &self.mask_position)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetStickerSetTitle {
    pub name: String,
    pub title: String,
}

impl Request for SetStickerSetTitle {
    const METHOD: &'static str = "setStickerSetTitle";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = named(&self.name)?;
        params.add_first_valid("title", &[Candidate::Str(&self.title)])?;
        Ok(params)
    }
}

/// Sets or, with no thumbnail, drops the thumbnail of a regular or mask set.
#[derive(Debug, Clone)]
pub struct SetStickerSetThumbnail {
    pub name: String,
    pub user_id: i64,
    pub thumbnail: Option<InputFile>,
    pub format: StickerFormat,
}

impl SetStickerSetThumbnail {
    fn file_fields(&self) -> [(&'static str, Option<&InputFile>); 1] {
        [("thumbnail", self.thumbnail.as_ref())]
    }
}

impl Request for SetStickerSetThumbnail {
    const METHOD: &'static str = "setStickerSetThumbnail";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = named(&self.name)?;
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        params.add_inline_files(self.file_fields());
        params.insert("format", self.format.as_str());
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        upload_parts(self.file_fields())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetCustomEmojiStickerSetThumbnail {
    pub name: String,
    /// Empty falls back to the first sticker of the set.
    pub custom_emoji_id: String,
}

impl Request for SetCustomEmojiStickerSetThumbnail {
    const METHOD: &'static str = "setCustomEmojiStickerSetThumbnail";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = named(&self.name)?;
        params.add_non_empty("custom_emoji_id", &self.custom_emoji_id);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteStickerSet {
    pub name: String,
}

impl Request for DeleteStickerSet {
    const METHOD: &'static str = "deleteStickerSet";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        named(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn set_with(stickers: Vec<InputSticker>) -> CreateNewStickerSet {
        CreateNewStickerSet {
            user_id: 1,
            name: "cats_by_bot".to_string(),
            title: "Cats".to_string(),
            stickers,
            ..CreateNewStickerSet::default()
        }
    }

    #[test]
    fn test_new_set_attaches_uploads() {
        let request = set_with(vec![
            InputSticker::new(InputFile::file_id("CAAC"), StickerFormat::Static, "😺"),
            InputSticker::new(InputFile::path("/tmp/cat.webp"), StickerFormat::Static, "😸"),
        ]);
        let params = request.params().unwrap();
        let stickers: serde_json::Value =
            serde_json::from_str(params.get("stickers").unwrap()).unwrap();
        assert_eq!(stickers[0]["sticker"], "CAAC");
        assert_eq!(stickers[1]["sticker"], "attach://file-1");
        assert_eq!(stickers[1]["format"], "static");
        assert!(stickers[1].get("keywords").is_none());

        let files = request.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "file-1");
    }

    #[test]
    fn test_new_set_requires_stickers() {
        let err = set_with(Vec::new()).params().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref key } if key == "stickers"));
    }

    #[test]
    fn test_add_sticker_uses_first_part() {
        let request = AddStickerToSet {
            user_id: 1,
            name: "cats_by_bot".to_string(),
            sticker: InputSticker::new(
                InputFile::bytes("cat.tgs", vec![1, 2, 3]),
                StickerFormat::Animated,
                "😹",
            ),
        };
        let params = request.params().unwrap();
        assert!(params.get("sticker").unwrap().contains("attach://file-0"));
        assert_eq!(request.files()[0].name, "file-0");
    }

    #[test]
    fn test_position_zero_is_sent() {
        let params = SetStickerPositionInSet {
            sticker: "CAAC".to_string(),
            position: 0,
        }
        .params()
        .unwrap();
        assert_eq!(params.get("position"), Some("0"));
    }

    #[test]
    fn test_upload_sticker_file() {
        let request = UploadStickerFile {
            user_id: 5,
            sticker: InputFile::path("/tmp/s.webm"),
            sticker_format: StickerFormat::Video,
        };
        let params = request.params().unwrap();
        assert_eq!(params.get("sticker_format"), Some("video"));
        assert!(!params.contains_key("sticker"));
        assert_eq!(request.files()[0].name, "sticker");
    }
}
