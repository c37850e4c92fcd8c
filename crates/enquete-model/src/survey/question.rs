use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct QuestionOption {
    pub id: Uuid,
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

/// Type tag plus the payload shape that goes with it. Keeping the two
/// together makes every per-type branch in the answer validator exhaustive.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Number { min_value: i32, max_value: i32 },
    Text,
    OptionSingle { options: Vec<QuestionOption> },
    OptionMulti { options: Vec<QuestionOption> },
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Question {
    pub id: Uuid,
    pub survey_version_id: Uuid,
    pub label: String,
    pub is_required: bool,
    pub order_index: i32,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    pub fn options(&self) -> &[QuestionOption] {
        match &self.kind {
            QuestionKind::Number { .. } | QuestionKind::Text => &[],
            QuestionKind::OptionSingle { options } | QuestionKind::OptionMulti { options } => options,
        }
    }

    pub fn allows_multiple_answers(&self) -> bool {
        matches!(self.kind, QuestionKind::OptionMulti { .. })
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NewQuestionOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NewQuestionKind {
    Number { min_value: i32, max_value: i32 },
    Text,
    OptionSingle { options: Vec<NewQuestionOption> },
    OptionMulti { options: Vec<NewQuestionOption> },
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NewQuestion {
    pub label: String,
    pub is_required: bool,
    pub order_index: i32,
    #[serde(flatten)]
    pub kind: NewQuestionKind,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn question_kind_round_trips_with_type_tag() {
        let json = serde_json::json!({
            "id": "8f2f9a06-6a5b-4b87-9e37-2f9f4d3f2a11",
            "survey_version_id": "0b6f3a64-4c2e-4ac0-9c2e-5f0a6c0b8d3c",
            "label": "How satisfied were you?",
            "is_required": true,
            "order_index": 1,
            "type": "number",
            "min_value": 0,
            "max_value": 100,
        });

        let question: Question = serde_json::from_value(json).unwrap();
        assert_eq!(
            question.kind,
            QuestionKind::Number {
                min_value: 0,
                max_value: 100
            }
        );
        assert!(question.options().is_empty());
    }

    #[test]
    fn option_question_exposes_options() {
        let json = serde_json::json!({
            "label": "Fuel type",
            "is_required": false,
            "order_index": 2,
            "type": "option_multi",
            "options": [{"label": "Petrol", "value": "petrol"}],
        });

        let question: NewQuestion = serde_json::from_value(json).unwrap();
        let NewQuestionKind::OptionMulti { options } = question.kind else {
            panic!("expected option_multi");
        };
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].order_index, None);
    }
}
