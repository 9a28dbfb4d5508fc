use serde::{Deserialize, Serialize};

use crate::chat::Chat;
use crate::user::User;

/// A portion of the price, in the smallest units of the currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPrice {
    pub label: String,
    pub amount: i64,
}

impl LabeledPrice {
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Invoice {
    pub title: String,
    pub description: String,
    pub start_parameter: String,
    pub currency: String,
    pub total_amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShippingAddress {
    pub country_code: String,
    pub state: String,
    pub city: String,
    pub street_line1: String,
    pub street_line2: String,
    pub post_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingOption {
    pub id: String,
    pub title: String,
    pub prices: Vec<LabeledPrice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuccessfulPayment {
    pub currency: String,
    pub total_amount: i64,
    pub invoice_payload: String,
    #[serde(default)]
    pub subscription_expiration_date: Option<i64>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub is_first_recurring: bool,
    #[serde(default)]
    pub shipping_option_id: Option<String>,
    #[serde(default)]
    pub order_info: Option<OrderInfo>,
    pub telegram_payment_charge_id: String,
    pub provider_payment_charge_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefundedPayment {
    pub currency: String,
    pub total_amount: i64,
    pub invoice_payload: String,
    pub telegram_payment_charge_id: String,
    #[serde(default)]
    pub provider_payment_charge_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct StarAmount {
    pub amount: i64,
    #[serde(default)]
    pub nanostar_amount: i64,
}

/// Counterparty of a Star transaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionPartner {
    User {
        user: User,
        #[serde(default)]
        invoice_payload: Option<String>,
        #[serde(default)]
        subscription_period: Option<u32>,
    },
    Chat {
        chat: Chat,
    },
    AffiliateProgram {
        #[serde(default)]
        sponsor_user: Option<User>,
        commission_per_mille: u32,
    },
    Fragment,
    TelegramAds,
    TelegramApi {
        request_count: u32,
    },
    Other,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StarTransaction {
    pub id: String,
    pub amount: i64,
    #[serde(default)]
    pub nanostar_amount: i64,
    pub date: i64,
    #[serde(default)]
    pub source: Option<TransactionPartner>,
    #[serde(default)]
    pub receiver: Option<TransactionPartner>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StarTransactions {
    pub transactions: Vec<StarTransaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_transactions_decode_partner_kinds() {
        let transactions: StarTransactions = serde_json::from_str(
            r#"{"transactions": [
                {"id": "t1", "amount": 50, "date": 10,
                 "source": {"type": "user", "user": {"id": 3, "is_bot": false, "first_name": "U"}}},
                {"id": "t2", "amount": 5, "date": 11, "receiver": {"type": "fragment"}},
                {"id": "t3", "amount": 1, "date": 12, "receiver": {"type": "brand_new"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(transactions.transactions.len(), 3);
        assert!(matches!(
            transactions.transactions[0].source,
            Some(TransactionPartner::User { ref user, .. }) if user.id == 3
        ));
        assert!(matches!(
            transactions.transactions[1].receiver,
            Some(TransactionPartner::Fragment)
        ));
        assert!(matches!(
            transactions.transactions[2].receiver,
            Some(TransactionPartner::Unknown)
        ));
    }
}
