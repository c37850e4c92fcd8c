use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Answer {
    pub id: Uuid,
    pub question_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_text: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

/// One submitted answer as supplied by the caller. At most one of the three
/// payloads is read, depending on the question type.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct AnswerItem {
    pub question_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_ids: Vec<Uuid>,
}
