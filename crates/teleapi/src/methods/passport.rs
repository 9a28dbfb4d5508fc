//! Telegram Passport error reporting.

use serde::Serialize;

use crate::error::Result;
use crate::params::{Candidate, Params};
use crate::request::Request;

/// An issue found in user-submitted Passport data.
///
/// `kind` is the encrypted element type (`passport`, `utility_bill`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PassportElementError {
    Data {
        #[serde(rename = "type")]
        kind: String,
        field_name: String,
        data_hash: String,
        message: String,
    },
    FrontSide {
        #[serde(rename = "type")]
        kind: String,
        file_hash: String,
        message: String,
    },
    ReverseSide {
        #[serde(rename = "type")]
        kind: String,
        file_hash: String,
        message: String,
    },
    Selfie {
        #[serde(rename = "type")]
        kind: String,
        file_hash: String,
        message: String,
    },
    File {
        #[serde(rename = "type")]
        kind: String,
        file_hash: String,
        message: String,
    },
    Files {
        #[serde(rename = "type")]
        kind: String,
        file_hashes: Vec<String>,
        message: String,
    },
    TranslationFile {
        #[serde(rename = "type")]
        kind: String,
        file_hash: String,
        message: String,
    },
    TranslationFiles {
        #[serde(rename = "type")]
        kind: String,
        file_hashes: Vec<String>,
        message: String,
    },
    Unspecified {
        #[serde(rename = "type")]
        kind: String,
        element_hash: String,
        message: String,
    },
}

/// Tells the user which Passport elements must be resubmitted.
#[derive(Debug, Clone, Default)]
pub struct SetPassportDataErrors {
    pub user_id: i64,
    pub errors: Vec<PassportElementError>,
}

impl Request for SetPassportDataErrors {
    const METHOD: &'static str = "setPassportDataErrors";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        params.add_json("errors", &self.errors)?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_sources() {
        let request = SetPassportDataErrors {
            user_id: 8,
            errors: vec![
                PassportElementError::Selfie {
                    kind: "passport".to_string(),
                    file_hash: "h1".to_string(),
                    message: "Face not visible".to_string(),
                },
                PassportElementError::TranslationFiles {
                    kind: "bank_statement".to_string(),
                    file_hashes: vec!["a".to_string(), "b".to_string()],
                    message: "Unreadable".to_string(),
                },
            ],
        };
        let params = request.params().unwrap();
        let errors: serde_json::Value = serde_json::from_str(params.get("errors").unwrap()).unwrap();
        assert_eq!(errors[0]["source"], "selfie");
        assert_eq!(errors[0]["type"], "passport");
        assert_eq!(errors[1]["source"], "translation_files");
        assert_eq!(errors[1]["file_hashes"][1], "b");
    }
}
