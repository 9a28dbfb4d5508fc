//! Typed requests for the Telegram Bot API.
//!
//! Every remote method is a value implementing [`Request`]: it knows its
//! method name, builds a flat [`Params`] mapping and lists the files that must
//! travel as multipart parts. [`Bot`] submits requests through a
//! [`Transport`] and decodes the response envelope.

pub mod client;
pub mod config;
pub mod error;
pub mod file;
pub mod media_group;
pub mod methods;
pub mod params;
pub mod request;
pub mod response;
pub mod transport;

pub use client::{Bot, decode_response};
pub use config::BotConfig;
pub use error::{ApiError, Error, Result};
pub use file::{InlineFile, InputFile, RequestFile, UploadFile};
pub use media_group::{InputMedia, InputPaidMedia};
pub use params::{Candidate, Params};
pub use request::{BaseChat, BaseEdit, EditTarget, Edited, Request};
pub use response::ApiResponse;
pub use teleapi_types as types;
pub use transport::{HttpTransport, PreparedRequest, Transport};
