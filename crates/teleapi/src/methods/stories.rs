//! Stories posted on behalf of a business account.

use std::slice;

use serde::Serialize;
use teleapi_types::{MessageEntity, ParseMode, ReactionType, Story};

use crate::error::Result;
use crate::file::{InputFile, RequestFile};
use crate::media_group::{Attachable, Slot, attach_all, collect_slots};
use crate::params::{Candidate, Params};
use crate::request::Request;

/// Photo or video shown by a story. Uploads travel as `attach://file-0`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputStoryContent {
    Photo {
        photo: InputFile,
    },
    Video {
        video: InputFile,
        /// Seconds, up to 60.
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cover_frame_timestamp: Option<f64>,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        is_animation: bool,
    },
}

impl InputStoryContent {
    pub fn photo(photo: InputFile) -> Self {
        Self::Photo { photo }
    }

    pub fn video(video: InputFile) -> Self {
        Self::Video {
            video,
            duration: None,
            cover_frame_timestamp: None,
            is_animation: false,
        }
    }
}

impl Attachable for InputStoryContent {
    fn slots_mut(&mut self) -> Vec<(Slot, &mut InputFile)> {
        match self {
            Self::Photo { photo } => collect_slots(photo, None, None),
            Self::Video { video, .. } => collect_slots(video, None, None),
        }
    }
}

/// Placement of an area, in percent of the story size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StoryAreaPosition {
    pub x_percentage: f64,
    pub y_percentage: f64,
    pub width_percentage: f64,
    pub height_percentage: f64,
    pub rotation_angle: f64,
    pub corner_radius_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationAddress {
    /// ISO 3166-1 alpha-2 code.
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoryAreaType {
    Location {
        latitude: f64,
        longitude: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        address: Option<LocationAddress>,
    },
    SuggestedReaction {
        reaction_type: ReactionType,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        is_dark: bool,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        is_flipped: bool,
    },
    Link {
        url: String,
    },
    Weather {
        temperature: f64,
        emoji: String,
        /// ARGB color of the area background.
        background_color: u32,
    },
    UniqueGift {
        name: String,
    },
}

/// A clickable area on a story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryArea {
    pub position: StoryAreaPosition,
    #[serde(rename = "type")]
    pub kind: StoryAreaType,
}

/// Caption, areas and visibility shared by posting and editing.
#[derive(Debug, Clone, Default)]
pub struct StoryDetails {
    pub caption: String,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Vec<MessageEntity>,
    pub areas: Vec<StoryArea>,
    pub post_to_chat_page: bool,
    pub protect_content: bool,
}

impl StoryDetails {
    fn write(&self, params: &mut Params) -> Result<()> {
        params.add_non_empty("caption", &self.caption);
        params.add_some("parse_mode", self.parse_mode);
        params.add_json_list("caption_entities", &self.caption_entities)?;
        params.add_json_list("areas", &self.areas)?;
        params.add_flag("post_to_chat_page", self.post_to_chat_page);
        params.add_flag("protect_content", self.protect_content);
        Ok(())
    }
}

fn write_content(params: &mut Params, content: &InputStoryContent) -> Result<()> {
    let (content, _) = attach_all(slice::from_ref(content), 0);
    params.add_json("content", &content[0])
}

fn content_parts(content: &InputStoryContent) -> Vec<RequestFile> {
    attach_all(slice::from_ref(content), 0).1
}

#[derive(Debug, Clone)]
pub struct PostStory {
    pub business_connection_id: String,
    pub content: InputStoryContent,
    /// Seconds the story stays visible: 6, 12, 24 or 48 hours.
    pub active_period: u32,
    pub details: StoryDetails,
}

impl PostStory {
    pub fn new(
        business_connection_id: impl Into<String>,
        content: InputStoryContent,
        active_period: u32,
    ) -> Self {
        Self {
            business_connection_id: business_connection_id.into(),
            content,
            active_period,
            details: StoryDetails::default(),
        }
    }
}

impl Request for PostStory {
    const METHOD: &'static str = "postStory";
    type Response = Story;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid(
            "business_connection_id",
            &[Candidate::Str(&self.business_connection_id)],
        )?;
        write_content(&mut params, &self.content)?;
        params.add_first_valid("active_period", &[Candidate::Int(self.active_period.into())])?;
        self.details.write(&mut params)?;
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        content_parts(&self.content)
    }
}

#[derive(Debug, Clone)]
pub struct EditStory {
    pub business_connection_id: String,
    pub story_id: i64,
    pub content: InputStoryContent,
    pub details: StoryDetails,
}

impl Request for EditStory {
    const METHOD: &'static str = "editStory";
    type Response = Story;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid(
            "business_connection_id",
            &[Candidate::Str(&self.business_connection_id)],
        )?;
        params.add_first_valid("story_id", &[Candidate::Int(self.story_id)])?;
        write_content(&mut params, &self.content)?;
        self.details.write(&mut params)?;
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        content_parts(&self.content)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteStory {
    pub business_connection_id: String,
    pub story_id: i64,
}

impl Request for DeleteStory {
    const METHOD: &'static str = "deleteStory";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid(
            "business_connection_id",
            &[Candidate::Str(&self.business_connection_id)],
        )?;
        params.add_first_valid("story_id", &[Candidate::Int(self.story_id)])?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_post_story_by_file_id() {
        let mut request = PostStory::new(
            "test_connection",
            InputStoryContent::photo(InputFile::file_id("test_photo_id")),
            86_400,
        );
        request.details.caption = "Test story caption".to_string();
        request.details.parse_mode = Some(ParseMode::Markdown);
        request.details.post_to_chat_page = true;
        request.details.areas.push(StoryArea {
            position: StoryAreaPosition {
                x_percentage: 50.0,
                y_percentage: 50.0,
                width_percentage: 20.0,
                height_percentage: 20.0,
                rotation_angle: 0.0,
                corner_radius_percentage: 5.0,
            },
            kind: StoryAreaType::Location {
                latitude: 37.7749,
                longitude: -122.4194,
                address: Some(LocationAddress {
                    country_code: "US".to_string(),
                    city: Some("San Francisco".to_string()),
                    ..LocationAddress::default()
                }),
            },
        });

        let params = request.params().unwrap();
        assert_eq!(params.get("business_connection_id"), Some("test_connection"));
        assert_eq!(params.get("active_period"), Some("86400"));
        assert_eq!(
            params.get("content"),
            Some(r#"{"type":"photo","photo":"test_photo_id"}"#)
        );
        assert_eq!(params.get("parse_mode"), Some("Markdown"));
        assert_eq!(params.get("post_to_chat_page"), Some("true"));
        assert!(!params.contains_key("protect_content"));
        let areas: serde_json::Value = serde_json::from_str(params.get("areas").unwrap()).unwrap();
        assert_eq!(areas[0]["type"]["type"], "location");
        assert_eq!(areas[0]["type"]["address"]["city"], "San Francisco");
        assert!(request.files().is_empty());
    }

    #[test]
    fn test_uploaded_video_is_attached() {
        let request = EditStory {
            business_connection_id: "bc".to_string(),
            story_id: 12_345,
            content: InputStoryContent::video(InputFile::path("/tmp/story.mp4")),
            details: StoryDetails::default(),
        };
        let params = request.params().unwrap();
        assert_eq!(
            params.get("content"),
            Some(r#"{"type":"video","video":"attach://file-0"}"#)
        );
        let files = request.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "file-0");
    }

    #[test]
    fn test_delete_story_needs_id() {
        let err = DeleteStory {
            business_connection_id: "bc".to_string(),
            story_id: 0,
        }
        .params()
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref key } if key == "story_id"));
    }
}
