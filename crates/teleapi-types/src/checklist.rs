use serde::Deserialize;

use crate::message::{Message, MessageEntity};
use crate::user::User;

#[derive(Debug, Clone, Deserialize)]
pub struct Checklist {
    pub title: String,
    #[serde(default)]
    pub title_entities: Vec<MessageEntity>,
    pub tasks: Vec<ChecklistTask>,
    #[serde(default)]
    pub others_can_add_tasks: bool,
    #[serde(default)]
    pub others_can_mark_tasks_as_done: bool,
}

impl Checklist {
    /// Tasks that have been marked as done.
    pub fn completed(&self) -> impl Iterator<Item = &ChecklistTask> {
        self.tasks.iter().filter(|task| task.is_done())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistTask {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub text_entities: Vec<MessageEntity>,
    #[serde(default)]
    pub completed_by_user: Option<User>,
    #[serde(default)]
    pub completion_date: Option<i64>,
}

impl ChecklistTask {
    pub fn is_done(&self) -> bool {
        self.completion_date.is_some_and(|date| date != 0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistTasksDone {
    #[serde(default)]
    pub checklist_message: Option<Message>,
    #[serde(default)]
    pub marked_as_done_task_ids: Vec<i64>,
    #[serde(default)]
    pub marked_as_not_done_task_ids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistTasksAdded {
    #[serde(default)]
    pub checklist_message: Option<Message>,
    pub tasks: Vec<ChecklistTask>,
}
