use crate::survey::question::Question;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct SurveyVersion {
    pub id: Uuid,
    pub survey_id: Uuid,
    pub version: i32,
    pub is_current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

/// A version together with its full question set, questions ordered by
/// `order_index`, options by (`order_index`, label).
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct SurveyVersionDetail {
    pub id: Uuid,
    pub survey_id: Uuid,
    pub version: i32,
    pub is_current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub questions: Vec<Question>,
}
