//! Managing a connected business account on its owner's behalf.

use std::slice;

use serde::Serialize;
use teleapi_types::{AcceptedGiftTypes, BusinessConnection, OwnedGifts, StarAmount};

use crate::error::Result;
use crate::file::{InputFile, RequestFile};
use crate::media_group::{Attachable, Slot, attach_all, collect_slots};
use crate::params::{Candidate, Params};
use crate::request::Request;

fn connection(business_connection_id: &str) -> Result<Params> {
    let mut params = Params::new();
    params.add_first_valid(
        "business_connection_id",
        &[Candidate::Str(business_connection_id)],
    )?;
    Ok(params)
}

#[derive(Debug, Clone, Default)]
pub struct GetBusinessConnection {
    pub business_connection_id: String,
}

impl Request for GetBusinessConnection {
    const METHOD: &'static str = "getBusinessConnection";
    type Response = BusinessConnection;

    fn params(&self) -> Result<Params> {
        connection(&self.business_connection_id)
    }
}

/// Marks an incoming message as read. Only chats active in the last day
/// are accepted.
#[derive(Debug, Clone, Default)]
pub struct ReadBusinessMessage {
    pub business_connection_id: String,
    pub chat_id: i64,
    pub message_id: i64,
}

impl Request for ReadBusinessMessage {
    const METHOD: &'static str = "readBusinessMessage";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = connection(&self.business_connection_id)?;
        params.add_first_valid("chat_id", &[Candidate::Int(self.chat_id)])?;
        params.add_first_valid("message_id", &[Candidate::Int(self.message_id)])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteBusinessMessages {
    pub business_connection_id: String,
    /// All from the same chat, 1 to 100.
    pub message_ids: Vec<i64>,
}

impl Request for DeleteBusinessMessages {
    const METHOD: &'static str = "deleteBusinessMessages";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = connection(&self.business_connection_id)?;
        params.add_json_list("message_ids", &self.message_ids)?;
        params.require(&["message_ids"])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetBusinessAccountName {
    pub business_connection_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Request for SetBusinessAccountName {
    const METHOD: &'static str = "setBusinessAccountName";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = connection(&self.business_connection_id)?;
        params.add_first_valid("first_name", &[Candidate::Str(&self.first_name)])?;
        params.add_non_empty("last_name", &self.last_name);
        Ok(params)
    }
}

/// An empty username removes the current one.
#[derive(Debug, Clone, Default)]
pub struct SetBusinessAccountUsername {
    pub business_connection_id: String,
    pub username: String,
}

impl Request for SetBusinessAccountUsername {
    const METHOD: &'static str = "setBusinessAccountUsername";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = connection(&self.business_connection_id)?;
        params.add_non_empty("username", &self.username);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetBusinessAccountBio {
    pub business_connection_id: String,
    pub bio: String,
}

impl Request for SetBusinessAccountBio {
    const METHOD: &'static str = "setBusinessAccountBio";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = connection(&self.business_connection_id)?;
        params.add_non_empty("bio", &self.bio);
        Ok(params)
    }
}

/// Profile photo content. The file itself can't be reused by `file_id`,
/// so it is always uploaded as `attach://file-0`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputProfilePhoto {
    Static {
        photo: InputFile,
    },
    Animated {
        animation: InputFile,
        /// Seconds into the video used as the static frame.
        #[serde(skip_serializing_if = "Option::is_none")]
        main_frame_timestamp: Option<f64>,
    },
}

impl Attachable for InputProfilePhoto {
    fn slots_mut(&mut self) -> Vec<(Slot, &mut InputFile)> {
        match self {
            Self::Static { photo } => collect_slots(photo, None, None),
            Self::Animated { animation, .. } => collect_slots(animation, None, None),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SetBusinessAccountProfilePhoto {
    pub business_connection_id: String,
    pub photo: InputProfilePhoto,
    /// Sets the photo visible to users outside the contact list.
    pub is_public: bool,
}

impl Request for SetBusinessAccountProfilePhoto {
    const METHOD: &'static str = "setBusinessAccountProfilePhoto";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = connection(&self.business_connection_id)?;
        let (photo, _) = attach_all(slice::from_ref(&self.photo), 0);
        params.add_json("photo", &photo[0])?;
        params.add_flag("is_public", self.is_public);
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        attach_all(slice::from_ref(&self.photo), 0).1
    }
}

#[derive(Debug, Clone, Default)]
pub struct RemoveBusinessAccountProfilePhoto {
    pub business_connection_id: String,
    pub is_public: bool,
}

impl Request for RemoveBusinessAccountProfilePhoto {
    const METHOD: &'static str = "removeBusinessAccountProfilePhoto";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = connection(&self.business_connection_id)?;
        params.add_flag("is_public", self.is_public);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetBusinessAccountGiftSettings {
    pub business_connection_id: String,
    pub show_gift_button: bool,
    pub accepted_gift_types: AcceptedGiftTypes,
}

impl Request for SetBusinessAccountGiftSettings {
    const METHOD: &'static str = "setBusinessAccountGiftSettings";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = connection(&self.business_connection_id)?;
        params.add_bool("show_gift_button", self.show_gift_button);
        params.add_json("accepted_gift_types", &self.accepted_gift_types)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetBusinessAccountStarBalance {
    pub business_connection_id: String,
}

impl Request for GetBusinessAccountStarBalance {
    const METHOD: &'static str = "getBusinessAccountStarBalance";
    type Response = StarAmount;

    fn params(&self) -> Result<Params> {
        connection(&self.business_connection_id)
    }
}

/// Moves Stars from the business account to the bot's balance.
#[derive(Debug, Clone, Default)]
pub struct TransferBusinessAccountStars {
    pub business_connection_id: String,
    pub star_count: u32,
}

impl Request for TransferBusinessAccountStars {
    const METHOD: &'static str = "transferBusinessAccountStars";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = connection(&self.business_connection_id)?;
        params.add_first_valid("star_count", &[Candidate::Int(self.star_count.into())])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetBusinessAccountGifts {
    pub business_connection_id: String,
    pub exclude_unsaved: bool,
    pub exclude_saved: bool,
    pub exclude_unlimited: bool,
    pub exclude_limited: bool,
    pub exclude_unique: bool,
    pub sort_by_price: bool,
    /// Opaque offset from the previous page.
    pub offset: String,
    pub limit: u32,
}

impl Request for GetBusinessAccountGifts {
    const METHOD: &'static str = "getBusinessAccountGifts";
    type Response = OwnedGifts;

    fn params(&self) -> Result<Params> {
        let mut params = connection(&self.business_connection_id)?;
        params.add_flag("exclude_unsaved", self.exclude_unsaved);
        params.add_flag("exclude_saved", self.exclude_saved);
        params.add_flag("exclude_unlimited", self.exclude_unlimited);
        params.add_flag("exclude_limited", self.exclude_limited);
        params.add_flag("exclude_unique", self.exclude_unique);
        params.add_flag("sort_by_price", self.sort_by_price);
        params.add_non_empty("offset", &self.offset);
        params.add_non_zero("limit", self.limit);
        Ok(params)
    }
}
