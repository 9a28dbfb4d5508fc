use serde::{Deserialize, Serialize};

use crate::media::{Animation, PhotoSize};
use crate::message::MessageEntity;
use crate::user::User;

#[derive(Debug, Clone, Deserialize)]
pub struct Game {
    pub title: String,
    pub description: String,
    pub photo: Vec<PhotoSize>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub text_entities: Vec<MessageEntity>,
    #[serde(default)]
    pub animation: Option<Animation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameHighScore {
    pub position: u32,
    pub user: User,
    pub score: i64,
}

/// Placeholder carried by a "play" button; holds no data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackGame {}
