use crate::convert::{FromDbModel, FromModel, IntoModel, TryFromDbModel};
use enquete_entity::survey::{question, question_option};
use enquete_model::survey::question::{NewQuestionKind, Question, QuestionKind, QuestionOption};

impl FromDbModel<question_option::Model> for QuestionOption {
    fn from_db_model(model: question_option::Model) -> Self {
        Self {
            id: model.id,
            label: model.label,
            value: model.value,
            order_index: model.order_index,
        }
    }
}

impl FromModel<&NewQuestionKind> for question::QuestionType {
    fn from_model(model: &NewQuestionKind) -> Self {
        match model {
            NewQuestionKind::Number { .. } => Self::Number,
            NewQuestionKind::Text => Self::Text,
            NewQuestionKind::OptionSingle { .. } => Self::OptionSingle,
            NewQuestionKind::OptionMulti { .. } => Self::OptionMulti,
        }
    }
}

/// A question row only makes sense together with its option rows; bounds and
/// options are checked against the stored type so a malformed row surfaces
/// as an error instead of a bogus model.
impl TryFromDbModel<(question::Model, Vec<question_option::Model>)> for Question {
    type Error = crate::error::Error;

    fn try_from_db_model(
        (question, options): (question::Model, Vec<question_option::Model>),
    ) -> Result<Self, Self::Error> {
        let kind = match question.r#type {
            question::QuestionType::Number => {
                if !options.is_empty() {
                    return Err(crate::error::Error::UnexpectedOptions(question.id));
                }
                match (question.min_value, question.max_value) {
                    (Some(min_value), Some(max_value)) => QuestionKind::Number {
                        min_value,
                        max_value,
                    },
                    _ => return Err(crate::error::Error::MissingBounds(question.id)),
                }
            }
            question::QuestionType::Text => {
                if !options.is_empty() {
                    return Err(crate::error::Error::UnexpectedOptions(question.id));
                }
                QuestionKind::Text
            }
            question::QuestionType::OptionSingle => QuestionKind::OptionSingle {
                options: options.into_iter().map(IntoModel::into_model).collect(),
            },
            question::QuestionType::OptionMulti => QuestionKind::OptionMulti {
                options: options.into_iter().map(IntoModel::into_model).collect(),
            },
        };

        Ok(Self {
            id: question.id,
            survey_version_id: question.survey_version_id,
            label: question.label,
            is_required: question.is_required,
            order_index: question.order_index,
            kind,
        })
    }
}
