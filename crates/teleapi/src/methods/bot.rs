//! Bot account, update delivery and command configuration.

use teleapi_types::{
    BotCommand, BotCommandScope, BotDescription, BotName, BotShortDescription,
    ChatAdministratorRights, ChatId, MenuButton, Update, UpdateType, User, WebhookInfo,
};

use crate::error::Result;
use crate::file::{InputFile, RequestFile, upload_parts};
use crate::params::{Candidate, Params};
use crate::request::Request;

/// Requests without parameters.
macro_rules! bare_requests {
    ($($(#[$meta:meta])* $name:ident => $method:literal -> $response:ty;)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Request for $name {
            const METHOD: &'static str = $method;
            type Response = $response;

            fn params(&self) -> Result<Params> {
                Ok(Params::new())
            }
        }
    )*};
}

bare_requests! {
    GetMe => "getMe" -> User;
    /// Logs out from the cloud API server before moving to a local one.
    LogOut => "logOut" -> bool;
    Close => "close" -> bool;
    GetWebhookInfo => "getWebhookInfo" -> WebhookInfo;
}

/// Long polling for incoming updates.
#[derive(Debug, Clone, Default)]
pub struct GetUpdates {
    /// Identifier of the first update to return; confirms everything before it.
    pub offset: i64,
    pub limit: u32,
    /// Long-poll timeout in seconds.
    pub timeout: u32,
    pub allowed_updates: Vec<UpdateType>,
}

impl GetUpdates {
    pub fn new(offset: i64) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    pub fn timeout(mut self, seconds: u32) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Request for GetUpdates {
    const METHOD: &'static str = "getUpdates";
    type Response = Vec<Update>;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_non_zero("offset", self.offset);
        params.add_non_zero("limit", self.limit);
        params.add_non_zero("timeout", self.timeout);
        params.add_json_list("allowed_updates", &self.allowed_updates)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetWebhook {
    /// HTTPS endpoint; an empty value removes the webhook.
    pub url: String,
    /// Self-signed public key certificate.
    pub certificate: Option<InputFile>,
    pub ip_address: String,
    pub max_connections: u32,
    pub allowed_updates: Vec<UpdateType>,
    pub drop_pending_updates: bool,
    pub secret_token: String,
}

impl SetWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    fn file_fields(&self) -> [(&'static str, Option<&InputFile>); 1] {
        [("certificate", self.certificate.as_ref())]
    }
}

impl Request for SetWebhook {
    const METHOD: &'static str = "setWebhook";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.insert("url", self.url.as_str());
        params.add_inline_files(self.file_fields());
        params.add_non_empty("ip_address", &self.ip_address);
        params.add_non_zero("max_connections", self.max_connections);
        params.add_json_list("allowed_updates", &self.allowed_updates)?;
        params.add_flag("drop_pending_updates", self.drop_pending_updates);
        params.add_non_empty("secret_token", &self.secret_token);
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        upload_parts(self.file_fields())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteWebhook {
    pub drop_pending_updates: bool,
}

impl Request for DeleteWebhook {
    const METHOD: &'static str = "deleteWebhook";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_flag("drop_pending_updates", self.drop_pending_updates);
        Ok(params)
    }
}

fn scoped(scope: Option<&BotCommandScope>, language_code: &str) -> Result<Params> {
    let mut params = Params::new();
    params.add_json("scope", &scope)?;
    params.add_non_empty("language_code", language_code);
    Ok(params)
}

#[derive(Debug, Clone, Default)]
pub struct SetMyCommands {
    pub commands: Vec<BotCommand>,
    pub scope: Option<BotCommandScope>,
    pub language_code: String,
}

impl SetMyCommands {
    pub fn new(commands: impl IntoIterator<Item = BotCommand>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Request for SetMyCommands {
    const METHOD: &'static str = "setMyCommands";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = scoped(self.scope.as_ref(), &self.language_code)?;
        // An empty list is a valid way to clear the commands.
        params.add_json("commands", &self.commands)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetMyCommands {
    pub scope: Option<BotCommandScope>,
    pub language_code: String,
}

impl Request for GetMyCommands {
    const METHOD: &'static str = "getMyCommands";
    type Response = Vec<BotCommand>;

    fn params(&self) -> Result<Params> {
        scoped(self.scope.as_ref(), &self.language_code)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteMyCommands {
    pub scope: Option<BotCommandScope>,
    pub language_code: String,
}

impl Request for DeleteMyCommands {
    const METHOD: &'static str = "deleteMyCommands";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        scoped(self.scope.as_ref(), &self.language_code)
    }
}

/// Localized profile texts: a setter writing `$field` and a getter.
macro_rules! profile_text {
    ($($set:ident => $set_method:literal, $get:ident => $get_method:literal -> $response:ty, $field:literal;)*) => {$(
        #[derive(Debug, Clone, Default)]
        pub struct $set {
            /// Empty removes the text for the given language.
            pub value: String,
            pub language_code: String,
        }

        impl Request for $set {
            const METHOD: &'static str = $set_method;
            type Response = bool;

            fn params(&self) -> Result<Params> {
                let mut params = Params::new();
                params.add_non_empty($field, &self.value);
                params.add_non_empty("language_code", &self.language_code);
                Ok(params)
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $get {
            pub language_code: String,
        }

        impl Request for $get {
            const METHOD: &'static str = $get_method;
            type Response = $response;

            fn params(&self) -> Result<Params> {
                let mut params = Params::new();
                params.add_non_empty("language_code", &self.language_code);
                Ok(params)
            }
        }
    )*};
}

profile_text! {
    SetMyName => "setMyName", GetMyName => "getMyName" -> BotName, "name";
    SetMyDescription => "setMyDescription", GetMyDescription => "getMyDescription" -> BotDescription, "description";
    SetMyShortDescription => "setMyShortDescription", GetMyShortDescription => "getMyShortDescription" -> BotShortDescription, "short_description";
}

/// Menu button of a private chat, or the default one when no chat is given.
#[derive(Debug, Clone, Default)]
pub struct SetChatMenuButton {
    pub chat_id: Option<i64>,
    pub menu_button: Option<MenuButton>,
}

impl Request for SetChatMenuButton {
    const METHOD: &'static str = "setChatMenuButton";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_some("chat_id", self.chat_id);
        params.add_json("menu_button", &self.menu_button)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetChatMenuButton {
    pub chat_id: Option<i64>,
}

impl Request for GetChatMenuButton {
    const METHOD: &'static str = "getChatMenuButton";
    type Response = MenuButton;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_some("chat_id", self.chat_id);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetMyDefaultAdministratorRights {
    /// `None` resets to no default rights.
    pub rights: Option<ChatAdministratorRights>,
    pub for_channels: bool,
}

impl Request for SetMyDefaultAdministratorRights {
    const METHOD: &'static str = "setMyDefaultAdministratorRights";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_json("rights", &self.rights)?;
        params.add_flag("for_channels", self.for_channels);
        Ok(params)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetMyDefaultAdministratorRights {
    pub for_channels: bool,
}

impl Request for GetMyDefaultAdministratorRights {
    const METHOD: &'static str = "getMyDefaultAdministratorRights";
    type Response = ChatAdministratorRights;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_flag("for_channels", self.for_channels);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    pub text: String,
    pub show_alert: bool,
    pub url: String,
    /// Seconds clients may cache the answer.
    pub cache_time: u32,
}

impl AnswerCallbackQuery {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            ..Self::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

impl Request for AnswerCallbackQuery {
    const METHOD: &'static str = "answerCallbackQuery";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("callback_query_id", &[Candidate::Str(&self.callback_query_id)])?;
        params.add_non_empty("text", &self.text);
        params.add_flag("show_alert", self.show_alert);
        params.add_non_empty("url", &self.url);
        params.add_non_zero("cache_time", self.cache_time);
        Ok(params)
    }
}

/// Scope addressing a single chat, for the command methods.
pub fn chat_scope(chat_id: impl Into<ChatId>) -> BotCommandScope {
    BotCommandScope::Chat {
        chat_id: chat_id.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_bare_requests_are_empty() {
        assert!(GetMe.params().unwrap().is_empty());
        assert_eq!(GetMe::METHOD, "getMe");
        assert_eq!(LogOut::METHOD, "logOut");
    }

    #[test]
    fn test_get_updates_encodes_filter() {
        let mut request = GetUpdates::new(101).timeout(30);
        request.allowed_updates = vec![UpdateType::Message, UpdateType::CallbackQuery];
        let params = request.params().unwrap();
        assert_eq!(params.get("offset"), Some("101"));
        assert_eq!(params.get("timeout"), Some("30"));
        assert!(!params.contains_key("limit"));
        assert_eq!(
            params.get("allowed_updates"),
            Some(r#"["message","callback_query"]"#)
        );
    }

    #[test]
    fn test_webhook_certificate_upload() {
        let mut request = SetWebhook::new("https://bot.example.com/hook");
        request.certificate = Some(InputFile::path("/etc/bot/cert.pem"));
        request.secret_token = "s3cret".to_string();
        let params = request.params().unwrap();
        assert_eq!(params.get("url"), Some("https://bot.example.com/hook"));
        assert!(!params.contains_key("certificate"));
        let files = request.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "certificate");
        assert_eq!(files[0].file.name(), "cert.pem");
    }

    #[test]
    fn test_commands_with_scope() {
        let mut request = SetMyCommands::new([BotCommand::new("start", "Start the bot")]);
        request.scope = Some(chat_scope(-100_i64));
        let params = request.params().unwrap();
        assert_eq!(params.get("scope"), Some(r#"{"type":"chat","chat_id":-100}"#));
        assert_eq!(
            params.get("commands"),
            Some(r#"[{"command":"start","description":"Start the bot"}]"#)
        );

        let params = SetMyCommands::default().params().unwrap();
        assert_eq!(params.get("commands"), Some("[]"));
        assert!(!params.contains_key("scope"));
    }

    #[test]
    fn test_profile_text_field_names() {
        let request = SetMyShortDescription {
            value: "Weather bot".to_string(),
            language_code: "en".to_string(),
        };
        let params = request.params().unwrap();
        assert_eq!(params.get("short_description"), Some("Weather bot"));
        assert_eq!(params.get("language_code"), Some("en"));
    }

    #[test]
    fn test_menu_button_default_chat() {
        let request = SetChatMenuButton {
            chat_id: None,
            menu_button: Some(MenuButton::Commands),
        };
        let params = request.params().unwrap();
        assert!(!params.contains_key("chat_id"));
        assert_eq!(params.get("menu_button"), Some(r#"{"type":"commands"}"#));
    }

    #[test]
    fn test_callback_answer_requires_id() {
        let err = AnswerCallbackQuery::default().params().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref key } if key == "callback_query_id"));

        let params = AnswerCallbackQuery::new("q1").text("Saved").params().unwrap();
        assert_eq!(params.get("text"), Some("Saved"));
        assert!(!params.contains_key("show_alert"));
    }
}
