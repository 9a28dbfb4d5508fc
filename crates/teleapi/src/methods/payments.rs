//! Invoices, checkout answers and Telegram Stars.

use teleapi_types::{
    ChatId, InlineKeyboardButton, InlineKeyboardMarkup, LabeledPrice, Message, ShippingOption,
    StarAmount, StarTransactions,
};

use crate::error::Result;
use crate::methods::SendOptions;
use crate::params::{Candidate, Params};
use crate::request::{BaseChat, Request};

/// Currency code of payments in Telegram Stars.
pub const STARS_CURRENCY: &str = "XTR";

/// Product description shared by `sendInvoice` and `createInvoiceLink`.
#[derive(Debug, Clone, Default)]
pub struct InvoiceDetails {
    pub title: String,
    pub description: String,
    /// Bot-defined payload, never shown to the user.
    pub payload: String,
    /// Empty for payments in Telegram Stars.
    pub provider_token: String,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    pub max_tip_amount: u32,
    pub suggested_tip_amounts: Vec<u32>,
    pub provider_data: String,
    pub photo_url: String,
    pub photo_size: u32,
    pub photo_width: u32,
    pub photo_height: u32,
    pub need_name: bool,
    pub need_phone_number: bool,
    pub need_email: bool,
    pub need_shipping_address: bool,
    pub send_phone_number_to_provider: bool,
    pub send_email_to_provider: bool,
    pub is_flexible: bool,
}

impl InvoiceDetails {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        payload: impl Into<String>,
        currency: impl Into<String>,
        prices: Vec<LabeledPrice>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            payload: payload.into(),
            currency: currency.into(),
            prices,
            ..Self::default()
        }
    }

    /// An invoice paid in Telegram Stars with a single price component.
    pub fn stars(
        title: impl Into<String>,
        description: impl Into<String>,
        payload: impl Into<String>,
        amount: i64,
    ) -> Self {
        let title = title.into();
        let price = LabeledPrice::new(title.clone(), amount);
        Self::new(title, description, payload, STARS_CURRENCY, vec![price])
    }

    fn write(&self, params: &mut Params) -> Result<()> {
        params.add_first_valid("title", &[Candidate::Str(&self.title)])?;
        params.add_first_valid("description", &[Candidate::Str(&self.description)])?;
        params.add_first_valid("payload", &[Candidate::Str(&self.payload)])?;
        params.add_non_empty("provider_token", &self.provider_token);
        params.add_first_valid("currency", &[Candidate::Str(&self.currency)])?;
        params.add_json_list("prices", &self.prices)?;
        params.require(&["prices"])?;
        params.add_non_zero("max_tip_amount", self.max_tip_amount);
        params.add_json_list("suggested_tip_amounts", &self.suggested_tip_amounts)?;
        params.add_non_empty("provider_data", &self.provider_data);
        params.add_non_empty("photo_url", &self.photo_url);
        params.add_non_zero("photo_size", self.photo_size);
        params.add_non_zero("photo_width", self.photo_width);
        params.add_non_zero("photo_height", self.photo_height);
        params.add_flag("need_name", self.need_name);
        params.add_flag("need_phone_number", self.need_phone_number);
        params.add_flag("need_email", self.need_email);
        params.add_flag("need_shipping_address", self.need_shipping_address);
        params.add_flag("send_phone_number_to_provider", self.send_phone_number_to_provider);
        params.add_flag("send_email_to_provider", self.send_email_to_provider);
        params.add_flag("is_flexible", self.is_flexible);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendInvoice {
    pub base: BaseChat,
    pub invoice: InvoiceDetails,
    /// Deep-link parameter replacing the Pay button in forwarded copies.
    pub start_parameter: String,
    pub options: SendOptions,
}

impl SendInvoice {
    pub fn new(chat_id: impl Into<ChatId>, invoice: InvoiceDetails) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            invoice,
            ..Self::default()
        }
    }
}

impl Request for SendInvoice {
    const METHOD: &'static str = "sendInvoice";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        self.invoice.write(&mut params)?;
        params.add_non_empty("start_parameter", &self.start_parameter);
        self.options.write(&mut params);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateInvoiceLink {
    pub invoice: InvoiceDetails,
    pub business_connection_id: String,
    /// Seconds between subscription payments; Stars only.
    pub subscription_period: u32,
}

impl Request for CreateInvoiceLink {
    const METHOD: &'static str = "createInvoiceLink";
    type Response = String;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_non_empty("business_connection_id", &self.business_connection_id);
        self.invoice.write(&mut params)?;
        params.add_non_zero("subscription_period", self.subscription_period);
        Ok(params)
    }
}

/// Reply to a shipping query: options on success, an error message otherwise.
#[derive(Debug, Clone, Default)]
pub struct AnswerShippingQuery {
    pub shipping_query_id: String,
    pub ok: bool,
    pub shipping_options: Vec<ShippingOption>,
    pub error_message: String,
}

impl AnswerShippingQuery {
    pub fn accept(shipping_query_id: impl Into<String>, options: Vec<ShippingOption>) -> Self {
        Self {
            shipping_query_id: shipping_query_id.into(),
            ok: true,
            shipping_options: options,
            error_message: String::new(),
        }
    }

    pub fn reject(shipping_query_id: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            shipping_query_id: shipping_query_id.into(),
            ok: false,
            shipping_options: Vec::new(),
            error_message: error_message.into(),
        }
    }
}

impl Request for AnswerShippingQuery {
    const METHOD: &'static str = "answerShippingQuery";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("shipping_query_id", &[Candidate::Str(&self.shipping_query_id)])?;
        params.add_bool("ok", self.ok);
        params.add_json_list("shipping_options", &self.shipping_options)?;
        params.add_non_empty("error_message", &self.error_message);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnswerPreCheckoutQuery {
    pub pre_checkout_query_id: String,
    pub ok: bool,
    pub error_message: String,
}

impl Request for AnswerPreCheckoutQuery {
    const METHOD: &'static str = "answerPreCheckoutQuery";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid(
            "pre_checkout_query_id",
            &[Candidate::Str(&self.pre_checkout_query_id)],
        )?;
        params.add_bool("ok", self.ok);
        params.add_non_empty("error_message", &self.error_message);
        Ok(params)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetStarTransactions {
    pub offset: u32,
    pub limit: u32,
}

impl Request for GetStarTransactions {
    const METHOD: &'static str = "getStarTransactions";
    type Response = StarTransactions;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_non_zero("offset", self.offset);
        params.add_non_zero("limit", self.limit);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RefundStarPayment {
    pub user_id: i64,
    pub telegram_payment_charge_id: String,
}

impl Request for RefundStarPayment {
    const METHOD: &'static str = "refundStarPayment";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        params.add_first_valid(
            "telegram_payment_charge_id",
            &[Candidate::Str(&self.telegram_payment_charge_id)],
        )?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditUserStarSubscription {
    pub user_id: i64,
    pub telegram_payment_charge_id: String,
    /// `false` re-enables a subscription the bot canceled earlier.
    pub is_canceled: bool,
}

impl Request for EditUserStarSubscription {
    const METHOD: &'static str = "editUserStarSubscription";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        params.add_first_valid(
            "telegram_payment_charge_id",
            &[Candidate::Str(&self.telegram_payment_charge_id)],
        )?;
        params.add_bool("is_canceled", self.is_canceled);
        Ok(params)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetMyStarBalance;

impl Request for GetMyStarBalance {
    const METHOD: &'static str = "getMyStarBalance";
    type Response = StarAmount;

    fn params(&self) -> Result<Params> {
        Ok(Params::new())
    }
}

/// Inline keyboard whose first button is the Pay button.
pub fn pay_keyboard(text: impl Into<String>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::row([InlineKeyboardButton {
        text: text.into(),
        pay: true,
        ..InlineKeyboardButton::default()
    }])
}
