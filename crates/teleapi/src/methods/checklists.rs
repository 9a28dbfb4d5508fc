//! Checklists sent on behalf of a business account.

use serde::Serialize;
use teleapi_types::{ChatId, InlineKeyboardMarkup, Message, MessageEntity, ParseMode};

use crate::error::Result;
use crate::methods::SendOptions;
use crate::params::{Candidate, Params};
use crate::request::{BaseChat, Request};

#[derive(Debug, Clone, Default, Serialize)]
pub struct InputChecklistTask {
    /// Unique within the checklist, positive.
    pub id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text_entities: Vec<MessageEntity>,
}

impl InputChecklistTask {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InputChecklist {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub title_entities: Vec<MessageEntity>,
    pub tasks: Vec<InputChecklistTask>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub others_can_add_tasks: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub others_can_mark_tasks_as_done: bool,
}

impl InputChecklist {
    pub fn new(title: impl Into<String>, tasks: Vec<InputChecklistTask>) -> Self {
        Self {
            title: title.into(),
            tasks,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendChecklist {
    /// Needs `base.business_connection_id`.
    pub base: BaseChat,
    pub checklist: InputChecklist,
    pub options: SendOptions,
}

impl SendChecklist {
    pub fn new(
        business_connection_id: impl Into<String>,
        chat_id: impl Into<ChatId>,
        checklist: InputChecklist,
    ) -> Self {
        let mut base = BaseChat::new(chat_id);
        base.business_connection_id = business_connection_id.into();
        Self {
            base,
            checklist,
            options: SendOptions::default(),
        }
    }
}

impl Request for SendChecklist {
    const METHOD: &'static str = "sendChecklist";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = self.base.params()?;
        params.add_json("checklist", &self.checklist)?;
        self.options.write(&mut params);
        params.require(&["business_connection_id"])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditMessageChecklist {
    pub business_connection_id: String,
    pub chat_id: ChatId,
    pub message_id: i64,
    pub checklist: InputChecklist,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Request for EditMessageChecklist {
    const METHOD: &'static str = "editMessageChecklist";
    type Response = Message;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid(
            "business_connection_id",
            &[Candidate::Str(&self.business_connection_id)],
        )?;
        params.add_chat_id("chat_id", &self.chat_id)?;
        params.add_first_valid("message_id", &[Candidate::Int(self.message_id)])?;
        params.add_json("checklist", &self.checklist)?;
        params.add_json("reply_markup", &self.reply_markup)?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn groceries() -> InputChecklist {
        InputChecklist::new(
            "Groceries",
            vec![
                InputChecklistTask::new(1, "Milk"),
                InputChecklistTask::new(2, "Bread"),
            ],
        )
    }

    #[test]
    fn test_send_checklist_encoding() {
        let params = SendChecklist::new("bc-1", 42_i64, groceries()).params().unwrap();
        assert_eq!(params.get("business_connection_id"), Some("bc-1"));
        assert_eq!(
            params.get("checklist"),
            Some(r#"{"title":"Groceries","tasks":[{"id":1,"text":"Milk"},{"id":2,"text":"Bread"}]}"#)
        );
    }

    #[test]
    fn test_send_checklist_needs_business_connection() {
        let request = SendChecklist {
            base: BaseChat::new(42_i64),
            checklist: groceries(),
            options: SendOptions::default(),
        };
        let err = request.params().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref key } if key == "business_connection_id"));
    }

    #[test]
    fn test_edit_checklist_targets_message() {
        let request = EditMessageChecklist {
            business_connection_id: "bc".to_string(),
            chat_id: ChatId::Id(42),
            message_id: 0,
            checklist: groceries(),
            reply_markup: None,
        };
        let err = request.params().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref key } if key == "message_id"));
    }
}
