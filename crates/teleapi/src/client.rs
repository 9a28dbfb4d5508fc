//! The bot handle: turns requests into calls on a [`Transport`].

use teleapi_types::{Update, User};
use tracing::{debug, warn};

use crate::config::{BotConfig, FILE_ENDPOINT};
use crate::error::{Error, Result};
use crate::methods::bot::GetMe;
use crate::methods::media::GetFile;
use crate::request::Request;
use crate::response::{ApiResponse, decode};
use crate::transport::{HttpTransport, PreparedRequest, Transport};

/// A bot identified by its token, sending through `T`.
///
/// Requests are independent values, so one `Bot` may be shared between tasks.
pub struct Bot<T = HttpTransport> {
    transport: T,
    token: String,
    file_endpoint: String,
}

impl Bot<HttpTransport> {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        Self::with_transport(token.clone(), HttpTransport::new(token))
    }

    pub fn from_config(config: &BotConfig) -> anyhow::Result<Self> {
        let transport = HttpTransport::from_config(config)?;
        let mut bot = Self::with_transport(config.resolve_token()?, transport);
        bot.file_endpoint = config.resolve_file_endpoint()?;
        Ok(bot)
    }
}

impl<T: Transport> Bot<T> {
    pub fn with_transport(token: impl Into<String>, transport: T) -> Self {
        Self {
            transport,
            token: token.into(),
            file_endpoint: FILE_ENDPOINT.to_string(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the parameters and file parts of `request`. Files are not opened.
    pub fn prepare<R: Request>(request: &R) -> Result<PreparedRequest> {
        Ok(PreparedRequest {
            method: R::METHOD,
            params: request.params()?,
            files: request.files(),
        })
    }

    /// Submits `request` and decodes its result.
    pub async fn send<R: Request>(&self, request: &R) -> Result<R::Response> {
        let prepared = Self::prepare(request)?;
        debug!(
            method = R::METHOD,
            fields = prepared.params.len(),
            multipart = prepared.is_multipart(),
            "Submitting request"
        );
        let body = self.transport.submit(prepared).await?;
        let response = ApiResponse::from_slice(R::METHOD, &body)?;
        if !response.ok {
            warn!(
                method = R::METHOD,
                code = response.error_code,
                description = %response.description,
                "API returned an error"
            );
        }
        response.into_result(R::METHOD)
    }

    pub async fn get_me(&self) -> Result<User> {
        self.send(&GetMe).await
    }

    /// Download URL for `file_id`, or `None` when the server gave no path
    /// (files over the download limit).
    pub async fn file_direct_url(&self, file_id: &str) -> Result<Option<String>> {
        let file = self.send(&GetFile::new(file_id)).await?;
        Ok(file.link_with(&self.file_endpoint, &self.token))
    }

    /// Decodes an update pushed to a webhook.
    pub fn parse_update(body: &[u8]) -> Result<Update> {
        serde_json::from_slice(body).map_err(|source| Error::Decode {
            method: "webhook".to_string(),
            source,
        })
    }
}

/// Decodes a raw envelope for `R` without a bot, e.g. from a stored response.
pub fn decode_response<R: Request>(body: &[u8]) -> Result<R::Response> {
    decode(R::METHOD, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::chat::{GetChat, GetChatMemberCount};
    use teleapi_types::UpdateKind;

    #[test]
    fn test_prepare_does_no_io() {
        let prepared = Bot::<HttpTransport>::prepare(&GetChat::new(42_i64)).unwrap();
        assert_eq!(prepared.method, "getChat");
        assert_eq!(prepared.params.get("chat_id"), Some("42"));
        assert!(!prepared.is_multipart());
    }

    #[test]
    fn test_prepare_stops_on_invalid_params() {
        assert!(Bot::<HttpTransport>::prepare(&GetChat::new(0_i64)).is_err());
    }

    #[test]
    fn test_parse_webhook_update() {
        let body = br#"{"update_id":10,"callback_query":{"id":"cb","from":{"id":5,"is_bot":false,"first_name":"Ann"},"chat_instance":"ci","data":"yes"}}"#;
        let update = Bot::<HttpTransport>::parse_update(body).unwrap();
        assert_eq!(update.update_id, 10);
        assert!(matches!(update.kind, UpdateKind::CallbackQuery(_)));
        assert_eq!(update.sender().map(|user| user.id), Some(5));
    }

    #[test]
    fn test_decode_response_for_request() {
        let count = decode_response::<GetChatMemberCount>(br#"{"ok":true,"result":12}"#).unwrap();
        assert_eq!(count, 12);
    }
}
