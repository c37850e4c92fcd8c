use crate::survey::error::{AnswerIssue, SurveyError, ValidationFailure};
use enquete_db::survey::answer::NewAnswer;
use enquete_db::survey::response::SubmitOutcome;
use enquete_entity::survey::response::Status;
use enquete_model::survey::answer::AnswerItem;
use enquete_model::survey::question::{Question, QuestionKind};
use enquete_model::survey::response::SurveyResponse;
use enquete_model_tools::convert::{IntoModel, TryIntoModel};
use sea_orm::DatabaseConnection;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Validates a batch of answers against the response's question schema and
/// commits them together with the started→submitted transition, as one
/// atomic unit. Submission is one-shot: a submitted response never accepts
/// another batch, and partially valid batches persist nothing.
pub async fn submit_answers(
    db: &DatabaseConnection,
    response_id: Uuid,
    items: Vec<AnswerItem>,
) -> Result<SurveyResponse, SurveyError> {
    let response = enquete_db::survey::response::Query::find_response_by_id(db, response_id)
        .await?
        .ok_or(SurveyError::ResponseNotFound(response_id))?;
    if response.status == Status::Submitted {
        return Err(SurveyError::AlreadySubmitted);
    }
    let existing = enquete_db::survey::answer::Query::count_for_response(db, response_id).await?;
    if existing > 0 {
        return Err(SurveyError::AlreadyAnswered);
    }

    let questions = enquete_db::survey::question::Query::find_with_options_for_version(db, response.survey_version_id)
        .await?
        .into_iter()
        .map(TryIntoModel::try_into_model)
        .collect::<Result<Vec<Question>, _>>()?;

    let staged = validate_answers(&questions, &items)?;

    // The flip is re-checked against the row's status inside the commit
    // transaction, so a concurrent submit that won in the meantime surfaces
    // here instead of double-inserting.
    match enquete_db::survey::response::Mutation::submit(db, response_id, staged).await? {
        SubmitOutcome::Submitted(response) => Ok(response.into_model()),
        SubmitOutcome::NotStarted => Err(SurveyError::AlreadySubmitted),
    }
}

/// The per-type validation and staging pass. Failures are collected across
/// the whole batch (missing required questions reported together at the
/// end) rather than stopping at the first offender.
fn validate_answers(questions: &[Question], items: &[AnswerItem]) -> Result<Vec<NewAnswer>, ValidationFailure> {
    let by_id: HashMap<Uuid, &Question> = questions.iter().map(|question| (question.id, question)).collect();

    let mut issues = Vec::new();
    let mut supplied = HashSet::new();
    let mut staged: Vec<NewAnswer> = Vec::new();
    let mut staged_options: HashSet<(Uuid, Uuid)> = HashSet::new();
    let mut answered: HashSet<Uuid> = HashSet::new();

    for item in items {
        let Some(question) = by_id.get(&item.question_id) else {
            issues.push(AnswerIssue::UnknownQuestion {
                question: item.question_id,
            });
            continue;
        };

        if !supplied.insert(question.id) && !question.allows_multiple_answers() {
            issues.push(AnswerIssue::DuplicateAnswer { question: question.id });
            continue;
        }

        match &question.kind {
            QuestionKind::Number { min_value, max_value } => {
                let Some(value) = item.value_number else {
                    issues.push(AnswerIssue::MissingValue { question: question.id });
                    continue;
                };
                if value < *min_value || value > *max_value {
                    issues.push(AnswerIssue::OutOfRange {
                        question: question.id,
                        value,
                        min: *min_value,
                        max: *max_value,
                    });
                    continue;
                }
                staged.push(NewAnswer {
                    question_id: question.id,
                    option_id: None,
                    value_number: Some(value),
                    value_text: None,
                });
                answered.insert(question.id);
            }
            QuestionKind::Text => {
                let text = item.value_text.as_deref().unwrap_or_default().trim();
                if text.is_empty() && question.is_required {
                    issues.push(AnswerIssue::MissingValue { question: question.id });
                    continue;
                }
                // Empty optional text is stored as "no answer", never "".
                staged.push(NewAnswer {
                    question_id: question.id,
                    option_id: None,
                    value_number: None,
                    value_text: (!text.is_empty()).then(|| text.to_string()),
                });
                answered.insert(question.id);
            }
            QuestionKind::OptionSingle { options } => {
                let selected = dedup_preserving_order(&item.option_ids);
                if selected.is_empty() {
                    issues.push(AnswerIssue::MissingValue { question: question.id });
                    continue;
                }
                if selected.len() > 1 {
                    issues.push(AnswerIssue::TooManyOptions { question: question.id });
                    continue;
                }
                let option_id = selected[0];
                if !options.iter().any(|option| option.id == option_id) {
                    issues.push(AnswerIssue::UnknownOption {
                        question: question.id,
                        option: option_id,
                    });
                    continue;
                }
                staged.push(NewAnswer {
                    question_id: question.id,
                    option_id: Some(option_id),
                    value_number: None,
                    value_text: None,
                });
                answered.insert(question.id);
            }
            QuestionKind::OptionMulti { options } => {
                let selected = dedup_preserving_order(&item.option_ids);
                if selected.is_empty() && question.is_required {
                    issues.push(AnswerIssue::MissingValue { question: question.id });
                    continue;
                }
                for option_id in selected {
                    if !options.iter().any(|option| option.id == option_id) {
                        issues.push(AnswerIssue::UnknownOption {
                            question: question.id,
                            option: option_id,
                        });
                        continue;
                    }
                    // One row per (question, option) even if the option
                    // recurs in a later batch item.
                    if staged_options.insert((question.id, option_id)) {
                        staged.push(NewAnswer {
                            question_id: question.id,
                            option_id: Some(option_id),
                            value_number: None,
                            value_text: None,
                        });
                        answered.insert(question.id);
                    }
                }
            }
        }
    }

    let missing: Vec<Uuid> = questions
        .iter()
        .filter(|question| question.is_required && !answered.contains(&question.id))
        .map(|question| question.id)
        .collect();
    if !missing.is_empty() {
        issues.push(AnswerIssue::MissingRequiredAnswers { questions: missing });
    }

    if issues.is_empty() {
        Ok(staged)
    } else {
        Err(ValidationFailure { issues })
    }
}

fn dedup_preserving_order(ids: &[Uuid]) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
