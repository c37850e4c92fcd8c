use crate::survey::error::SurveyError;
use enquete_entity::survey::survey::Status;
use enquete_model::survey::question::{NewQuestion, NewQuestionKind, Question};
use enquete_model::survey::survey::{Survey, UpdateSurvey};
use enquete_model::survey::version::{SurveyVersion, SurveyVersionDetail};
use enquete_model_tools::convert::{IntoDbModel, IntoModel, TryIntoModel};
use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use uuid::Uuid;

pub async fn create_survey(db: &DatabaseConnection, name: &str, brand: &str) -> Result<Survey, SurveyError> {
    let survey = enquete_db::survey::survey::Mutation::create_survey(db, name, brand).await?;
    Ok(survey.into_model())
}

pub async fn get_survey(db: &DatabaseConnection, id: Uuid) -> Result<Survey, SurveyError> {
    let survey = enquete_db::survey::survey::Query::find_survey_by_id(db, id)
        .await?
        .ok_or(SurveyError::SurveyNotFound(id))?;
    Ok(survey.into_model())
}

pub async fn list_surveys(db: &DatabaseConnection) -> Result<Vec<Survey>, SurveyError> {
    let surveys = enquete_db::survey::survey::Query::find_all(db).await?;
    Ok(surveys.into_iter().map(IntoModel::into_model).collect())
}

pub async fn find_active_by_brand(db: &DatabaseConnection, brand: &str) -> Result<Vec<Survey>, SurveyError> {
    let surveys = enquete_db::survey::survey::Query::find_by_brand(db, brand).await?;
    Ok(surveys.into_iter().map(IntoModel::into_model).collect())
}

/// Partial update. A ready survey is structurally frozen: name and brand can
/// no longer change and status can never leave ready. `is_active` stays
/// editable throughout.
pub async fn update_survey(db: &DatabaseConnection, id: Uuid, changes: UpdateSurvey) -> Result<Survey, SurveyError> {
    let survey = enquete_db::survey::survey::Query::find_survey_by_id(db, id)
        .await?
        .ok_or(SurveyError::SurveyNotFound(id))?;

    if survey.status == Status::Ready {
        let changes_name = changes.name.as_ref().is_some_and(|name| name != &survey.name);
        let changes_brand = changes.brand.as_ref().is_some_and(|brand| brand != &survey.brand);
        let leaves_ready = changes
            .status
            .is_some_and(|status| status != enquete_model::survey::survey::SurveyStatus::Ready);
        if changes_name || changes_brand || leaves_ready {
            return Err(SurveyError::ReadyImmutable);
        }
    }

    let status = changes.status.map(IntoDbModel::into_db_model);
    let updated = enquete_db::survey::survey::Mutation::update_survey(
        db,
        id,
        changes.name,
        changes.brand,
        changes.is_active,
        status,
    )
    .await?;
    Ok(updated.into_model())
}

pub async fn create_version(
    db: &DatabaseConnection,
    survey_id: Uuid,
    version: i32,
    is_current: bool,
    notes: Option<String>,
) -> Result<SurveyVersion, SurveyError> {
    let survey = enquete_db::survey::survey::Query::find_survey_by_id(db, survey_id)
        .await?
        .ok_or(SurveyError::SurveyNotFound(survey_id))?;
    if survey.status == Status::Ready {
        return Err(SurveyError::ReadyImmutable);
    }

    let version =
        enquete_db::survey::version::Mutation::create_version(db, survey_id, version, is_current, notes).await?;
    Ok(version.into_model())
}

/// Promotes an existing version to current; the sibling flag is cleared in
/// the same transaction.
pub async fn set_current_version(db: &DatabaseConnection, version_id: Uuid) -> Result<SurveyVersion, SurveyError> {
    let version = enquete_db::survey::version::Query::find_version_by_id(db, version_id)
        .await?
        .ok_or(SurveyError::VersionNotFound(version_id))?;

    let promoted = enquete_db::survey::version::Mutation::set_current(db, version.survey_id, version_id).await?;
    Ok(promoted.into_model())
}

pub async fn list_versions(db: &DatabaseConnection, survey_id: Uuid) -> Result<Vec<SurveyVersion>, SurveyError> {
    enquete_db::survey::survey::Query::find_survey_by_id(db, survey_id)
        .await?
        .ok_or(SurveyError::SurveyNotFound(survey_id))?;

    let versions = enquete_db::survey::version::Query::list_for_survey(db, survey_id).await?;
    Ok(versions.into_iter().map(IntoModel::into_model).collect())
}

pub async fn current_version(db: &DatabaseConnection, survey_id: Uuid) -> Result<SurveyVersion, SurveyError> {
    enquete_db::survey::survey::Query::find_survey_by_id(db, survey_id)
        .await?
        .ok_or(SurveyError::SurveyNotFound(survey_id))?;

    let version = enquete_db::survey::version::Query::find_current_for_survey(db, survey_id)
        .await?
        .ok_or(SurveyError::NoCurrentVersion(survey_id))?;
    Ok(version.into_model())
}

/// Adds a question (with its denormalized options) to a version. Rejected
/// once the survey is ready or the version has responses.
pub async fn add_question(
    db: &DatabaseConnection,
    version_id: Uuid,
    input: NewQuestion,
) -> Result<Question, SurveyError> {
    let version = enquete_db::survey::version::Query::find_version_by_id(db, version_id)
        .await?
        .ok_or(SurveyError::VersionNotFound(version_id))?;
    let survey = enquete_db::survey::survey::Query::find_survey_by_id(db, version.survey_id)
        .await?
        .ok_or(SurveyError::SurveyNotFound(version.survey_id))?;

    if survey.status == Status::Ready {
        return Err(SurveyError::ReadyImmutable);
    }
    let responses = enquete_db::survey::response::Query::count_for_version(db, version_id).await?;
    if responses > 0 {
        return Err(SurveyError::VersionImmutable);
    }

    if input.order_index < 1 {
        return Err(SurveyError::InvalidOrderIndex(input.order_index));
    }

    let (min_value, max_value, options) = match &input.kind {
        NewQuestionKind::Number { min_value, max_value } => {
            if min_value > max_value {
                return Err(SurveyError::InvalidBounds {
                    min: *min_value,
                    max: *max_value,
                });
            }
            (Some(*min_value), Some(*max_value), Vec::new())
        }
        NewQuestionKind::Text => (None, None, Vec::new()),
        NewQuestionKind::OptionSingle { options } | NewQuestionKind::OptionMulti { options } => {
            if options.is_empty() {
                return Err(SurveyError::MissingOptions);
            }
            let mut values = HashSet::new();
            for option in options {
                if !values.insert(option.value.as_str()) {
                    return Err(SurveyError::DuplicateOptionValue(option.value.clone()));
                }
            }
            let options = options
                .iter()
                .map(|option| enquete_db::survey::question::NewQuestionOption {
                    label: option.label.clone(),
                    value: option.value.clone(),
                    order_index: option.order_index,
                })
                .collect();
            (None, None, options)
        }
    };

    let (question, question_options) = enquete_db::survey::question::Mutation::create_question(
        db,
        version_id,
        (&input.kind).into_db_model(),
        input.label,
        input.is_required,
        input.order_index,
        min_value,
        max_value,
        options,
    )
    .await?;

    Ok((question, question_options).try_into_model()?)
}

/// The version with its full, ordered question set.
pub async fn get_full_version(db: &DatabaseConnection, version_id: Uuid) -> Result<SurveyVersionDetail, SurveyError> {
    let version = enquete_db::survey::version::Query::find_version_by_id(db, version_id)
        .await?
        .ok_or(SurveyError::VersionNotFound(version_id))?;

    let questions = enquete_db::survey::question::Query::find_with_options_for_version(db, version_id).await?;
    Ok((version, questions).try_into_model()?)
}
