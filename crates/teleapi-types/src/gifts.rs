use serde::{Deserialize, Serialize};

use crate::message::MessageEntity;
use crate::stickers::Sticker;
use crate::user::User;

#[derive(Debug, Clone, Deserialize)]
pub struct Gift {
    pub id: String,
    pub sticker: Sticker,
    pub star_count: u32,
    #[serde(default)]
    pub upgrade_star_count: Option<u32>,
    #[serde(default)]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub remaining_count: Option<u32>,
}

/// Result of `getAvailableGifts`.
#[derive(Debug, Clone, Deserialize)]
pub struct Gifts {
    pub gifts: Vec<Gift>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UniqueGiftModel {
    pub name: String,
    pub sticker: Sticker,
    pub rarity_per_mille: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UniqueGiftSymbol {
    pub name: String,
    pub sticker: Sticker,
    pub rarity_per_mille: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UniqueGiftBackdropColors {
    pub center_color: u32,
    pub edge_color: u32,
    pub symbol_color: u32,
    pub text_color: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UniqueGiftBackdrop {
    pub name: String,
    pub colors: UniqueGiftBackdropColors,
    pub rarity_per_mille: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UniqueGift {
    pub base_name: String,
    pub name: String,
    pub number: u32,
    pub model: UniqueGiftModel,
    pub symbol: UniqueGiftSymbol,
    pub backdrop: UniqueGiftBackdrop,
}

/// Service payload: a regular gift was sent or received.
#[derive(Debug, Clone, Deserialize)]
pub struct GiftInfo {
    pub gift: Gift,
    #[serde(default)]
    pub owned_gift_id: Option<String>,
    #[serde(default)]
    pub convert_star_count: Option<u32>,
    #[serde(default)]
    pub prepaid_upgrade_star_count: Option<u32>,
    #[serde(default)]
    pub can_be_upgraded: bool,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub entities: Vec<MessageEntity>,
    #[serde(default)]
    pub is_private: bool,
}

/// Service payload: a unique gift was sent or received.
#[derive(Debug, Clone, Deserialize)]
pub struct UniqueGiftInfo {
    pub gift: UniqueGift,
    /// `upgrade` or `transfer`.
    pub origin: String,
    #[serde(default)]
    pub owned_gift_id: Option<String>,
    #[serde(default)]
    pub transfer_star_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OwnedGift {
    Regular {
        gift: Gift,
        #[serde(default)]
        owned_gift_id: Option<String>,
        #[serde(default)]
        sender_user: Option<User>,
        send_date: i64,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        is_private: bool,
        #[serde(default)]
        is_saved: bool,
        #[serde(default)]
        can_be_upgraded: bool,
        #[serde(default)]
        was_refunded: bool,
        #[serde(default)]
        convert_star_count: Option<u32>,
        #[serde(default)]
        prepaid_upgrade_star_count: Option<u32>,
    },
    Unique {
        gift: UniqueGift,
        #[serde(default)]
        owned_gift_id: Option<String>,
        #[serde(default)]
        sender_user: Option<User>,
        send_date: i64,
        #[serde(default)]
        is_saved: bool,
        #[serde(default)]
        can_be_transferred: bool,
        #[serde(default)]
        transfer_star_count: Option<u32>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnedGifts {
    pub total_count: u32,
    pub gifts: Vec<OwnedGift>,
    #[serde(default)]
    pub next_offset: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedGiftTypes {
    pub unlimited_gifts: bool,
    pub limited_gifts: bool,
    pub unique_gifts: bool,
    pub premium_subscription: bool,
}
