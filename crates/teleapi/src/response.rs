//! The inbound envelope wrapping every API result.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use teleapi_types::ResponseParameters;

use crate::error::{ApiError, Error, Result};

/// `{"ok": ..., "result": ...}` as sent back for every method.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Option<ResponseParameters>,
}

impl ApiResponse {
    /// Parses the envelope from a raw response body.
    pub fn from_slice(method: &str, body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|source| Error::Decode {
            method: method.to_string(),
            source,
        })
    }

    /// Decodes `result` on success; turns `ok: false` into [`Error::Api`].
    pub fn into_result<T: DeserializeOwned>(self, method: &str) -> Result<T> {
        if !self.ok {
            return Err(Error::Api(ApiError {
                code: self.error_code,
                description: self.description,
                parameters: self.parameters,
            }));
        }
        serde_json::from_value(self.result).map_err(|source| Error::Decode {
            method: method.to_string(),
            source,
        })
    }
}

/// Envelope and result in one step.
pub fn decode<T: DeserializeOwned>(method: &str, body: &[u8]) -> Result<T> {
    ApiResponse::from_slice(method, body)?.into_result(method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teleapi_types::User;

    #[test]
    fn test_flood_control_error() {
        let body = br#"{"ok":false,"error_code":429,"description":"Too Many Requests","parameters":{"retry_after":5}}"#;
        let err = decode::<bool>("sendMessage", body).unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.code, 429);
        assert_eq!(api.description, "Too Many Requests");
        assert_eq!(api.retry_after(), Some(5));
        assert_eq!(api.migrate_to_chat_id(), None);
    }

    #[test]
    fn test_success_decodes_result() {
        let body = br#"{"ok":true,"result":{"id":7,"is_bot":true,"first_name":"Helper","username":"helper_bot"}}"#;
        let user: User = decode("getMe", body).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.is_bot);
    }

    #[test]
    fn test_wrong_result_shape() {
        let body = br#"{"ok":true,"result":"not a user"}"#;
        let err = decode::<User>("getMe", body).unwrap_err();
        assert!(matches!(err, Error::Decode { ref method, .. } if method == "getMe"));
    }

    #[test]
    fn test_non_json_body() {
        let err = decode::<bool>("close", b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
