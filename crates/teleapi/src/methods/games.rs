//! HTML5 games and their score tables.

use teleapi_types::{ChatId, GameHighScore, Message};

use crate::error::Result;
use crate::methods::SendOptions;
use crate::params::{Candidate, Params};
use crate::request::{BaseChat, EditTarget, Edited, Request};

#[derive(Debug, Clone, Default)]
pub struct SendGame {
    pub base: BaseChat,
    pub game_short_name: String,
    pub options: SendOptions,
}

impl SendGame {
    pub fn new(chat_id: impl Into<ChatId>, game_short_name: impl Into<String>) -> Self {
        Self {
            base: BaseChat::new(chat_id),
            game_short_name: game_short_name.into(),
            options: SendOptions::default(),
        }
    }
}

impl Request for SendGame {
    const METHOD: &'static str = "sendGame";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_first_valid("game_short_name", &[Candidate::Str(&self.game_short_name)])?;
        self.options.write(&mut params);
        Ok(params)
    }
}

/// Records a score; returns the edited game message unless
/// `disable_edit_message` is set.
#[derive(Debug, Clone, Default)]
pub struct SetGameScore {
    pub target: EditTarget,
    pub user_id: i64,
    pub score: u32,
    /// Allows lowering the score.
    pub force: bool,
    pub disable_edit_message: bool,
}

impl Request for SetGameScore {
    const METHOD: &'static str = "setGameScore";
    type Response = Edited;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        params.insert("score", self.score.to_string());
        params.add_flag("force", self.force);
        params.add_flag("disable_edit_message", self.disable_edit_message);
        self.target.write(&mut params)?;
        Ok(params)
    }
}

/// Scores of the given user and a few neighbors.
#[derive(Debug, Clone, Default)]
pub struct GetGameHighScores {
    pub target: EditTarget,
    pub user_id: i64,
}

impl Request for GetGameHighScores {
    const METHOD: &'static str = "getGameHighScores";
    type Response = Vec<GameHighScore>;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        self.target.write(&mut params)?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_field_name() {
        let request = SetGameScore {
            target: EditTarget::chat(-10_i64, 4),
            user_id: 3,
            score: 0,
            ..SetGameScore::default()
        };
        let params = request.params().unwrap();
        assert_eq!(params.get("score"), Some("0"));
        assert!(!params.contains_key("scrore"));
        assert_eq!(params.get("message_id"), Some("4"));
        assert!(!params.contains_key("force"));
    }

    #[test]
    fn test_high_scores_for_inline_message() {
        let request = GetGameHighScores {
            target: EditTarget::inline("AAQ"),
            user_id: 3,
        };
        let params = request.params().unwrap();
        assert_eq!(params.get("inline_message_id"), Some("AAQ"));
        assert!(!params.contains_key("chat_id"));
    }

    #[test]
    fn test_send_game_requires_name() {
        assert!(SendGame::new(1_i64, "").params().is_err());
        let params = SendGame::new(1_i64, "tetris").params().unwrap();
        assert_eq!(params.get("game_short_name"), Some("tetris"));
    }
}
