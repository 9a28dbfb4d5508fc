//! Gifts: catalog, sending, conversion and unique-gift management.

use teleapi_types::{ChatId, Gifts};

use crate::error::Result;
use crate::methods::GiftText;
use crate::params::{Candidate, Params};
use crate::request::Request;

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAvailableGifts;

impl Request for GetAvailableGifts {
    const METHOD: &'static str = "getAvailableGifts";
    type Response = Gifts;

    fn params(&self) -> Result<Params> {
        Ok(Params::new())
    }
}

/// Who receives a gift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GiftRecipient {
    User(i64),
    Chat(ChatId),
}

impl GiftRecipient {
    fn write(&self, params: &mut Params) -> Result<()> {
        match self {
            Self::User(user_id) => params.add_first_valid("user_id", &[Candidate::Int(*user_id)]),
            Self::Chat(chat_id) => params.add_chat_id("chat_id", chat_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SendGift {
    pub recipient: GiftRecipient,
    pub gift_id: String,
    /// Pays for the upgrade to a unique gift from the bot's balance.
    pub pay_for_upgrade: bool,
    pub text: GiftText,
}

impl SendGift {
    pub fn new(recipient: GiftRecipient, gift_id: impl Into<String>) -> Self {
        Self {
            recipient,
            gift_id: gift_id.into(),
            pay_for_upgrade: false,
            text: GiftText::default(),
        }
    }
}

impl Request for SendGift {
    const METHOD: &'static str = "sendGift";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        self.recipient.write(&mut params)?;
        params.add_first_valid("gift_id", &[Candidate::Str(&self.gift_id)])?;
        params.add_flag("pay_for_upgrade", self.pay_for_upgrade);
        self.text.write(&mut params)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GiftPremiumSubscription {
    pub user_id: i64,
    /// 3, 6 or 12.
    pub month_count: u32,
    pub star_count: u32,
    pub text: GiftText,
}

impl Request for GiftPremiumSubscription {
    const METHOD: &'static str = "giftPremiumSubscription";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        params.add_first_valid("month_count", &[Candidate::Int(self.month_count.into())])?;
        params.add_first_valid("star_count", &[Candidate::Int(self.star_count.into())])?;
        self.text.write(&mut params)?;
        Ok(params)
    }
}

fn owned_gift(business_connection_id: &str, owned_gift_id: &str) -> Result<Params> {
    let mut params = Params::new();
    params.add_first_valid(
        "business_connection_id",
        &[Candidate::Str(business_connection_id)],
    )?;
    params.add_first_valid("owned_gift_id", &[Candidate::Str(owned_gift_id)])?;
    Ok(params)
}

#[derive(Debug, Clone, Default)]
pub struct ConvertGiftToStars {
    pub business_connection_id: String,
    pub owned_gift_id: String,
}

impl Request for ConvertGiftToStars {
    const METHOD: &'static str = "convertGiftToStars";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        owned_gift(&self.business_connection_id, &self.owned_gift_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpgradeGift {
    pub business_connection_id: String,
    pub owned_gift_id: String,
    pub keep_original_details: bool,
    /// Stars paid for the upgrade; zero when it was prepaid.
    pub star_count: u32,
}

impl Request for UpgradeGift {
    const METHOD: &'static str = "upgradeGift";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = owned_gift(&self.business_connection_id, &self.owned_gift_id)?;
        params.add_flag("keep_original_details", self.keep_original_details);
        params.add_non_zero("star_count", self.star_count);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransferGift {
    pub business_connection_id: String,
    pub owned_gift_id: String,
    pub new_owner_chat_id: i64,
    /// Transfer fee; zero when the transfer is free.
    pub star_count: u32,
}

impl Request for TransferGift {
    const METHOD: &'static str = "transferGift";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = owned_gift(&self.business_connection_id, &self.owned_gift_id)?;
        params.add_first_valid("new_owner_chat_id", &[Candidate::Int(self.new_owner_chat_id)])?;
        params.add_non_zero("star_count", self.star_count);
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teleapi_types::ParseMode;

    #[test]
    fn test_gift_to_user_with_text() {
        let mut request = SendGift::new(GiftRecipient::User(77), "gift-1");
        request.text = GiftText {
            text: "<b>Happy birthday</b>".to_string(),
            parse_mode: Some(ParseMode::Html),
            entities: Vec::new(),
        };
        let params = request.params().unwrap();
        assert_eq!(params.get("user_id"), Some("77"));
        assert!(!params.contains_key("chat_id"));
        assert_eq!(params.get("text_parse_mode"), Some("HTML"));
        assert!(!params.contains_key("pay_for_upgrade"));
    }

    #[test]
    fn test_gift_to_channel() {
        let request = SendGift::new(GiftRecipient::Chat(ChatId::from("@news")), "gift-2");
        let params = request.params().unwrap();
        assert_eq!(params.get("chat_id"), Some("@news"));
        assert!(!params.contains_key("user_id"));
    }

    #[test]
    fn test_transfer_requires_new_owner() {
        let request = TransferGift {
            business_connection_id: "bc".to_string(),
            owned_gift_id: "og".to_string(),
            ..TransferGift::default()
        };
        assert!(request.params().is_err());
    }
}
