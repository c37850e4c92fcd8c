use crate::survey::error::SurveyError;
use crate::survey::selector;
use enquete_model::survey::response::{EnsureResponse, ResponseFilter, SurveyResponse, SurveyResponseDetail};
use enquete_model_tools::convert::{IntoDbModel, IntoModel};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

/// Idempotent get-or-create for a (version, form) pair. The pair's unique
/// constraint arbitrates concurrent callers; whoever loses the insert race
/// gets the winner's row back.
pub async fn start(
    db: &DatabaseConnection,
    survey_version_id: Uuid,
    test_drive_form_id: &str,
) -> Result<SurveyResponse, SurveyError> {
    let version = enquete_db::survey::version::Query::find_version_by_id(db, survey_version_id)
        .await?
        .ok_or(SurveyError::VersionNotFound(survey_version_id))?;
    let form = enquete_db::test_drive_form::Query::find_form_by_id(db, test_drive_form_id)
        .await?
        .ok_or_else(|| SurveyError::FormNotFound(test_drive_form_id.to_string()))?;

    let (response, _created) = enquete_db::survey::response::Mutation::try_create(db, version.id, form.id).await?;
    Ok(response.into_model())
}

/// `start` with the version resolved from the brand's survey configuration.
/// `created` is true only for the caller whose insert actually won.
pub async fn ensure(
    db: &DatabaseConnection,
    test_drive_form_id: &str,
    brand: &str,
) -> Result<EnsureResponse, SurveyError> {
    let version = selector::current_version_for_brand(db, brand).await?;
    let form = enquete_db::test_drive_form::Query::find_form_by_id(db, test_drive_form_id)
        .await?
        .ok_or_else(|| SurveyError::FormNotFound(test_drive_form_id.to_string()))?;

    let (response, created) = enquete_db::survey::response::Mutation::try_create(db, version.id, form.id).await?;
    Ok(EnsureResponse {
        response: response.into_model(),
        created,
    })
}

pub async fn get_response(db: &DatabaseConnection, id: Uuid) -> Result<SurveyResponseDetail, SurveyError> {
    let response = enquete_db::survey::response::Query::find_response_by_id(db, id)
        .await?
        .ok_or(SurveyError::ResponseNotFound(id))?;
    let answers = enquete_db::survey::answer::Query::list_for_response(db, id).await?;
    Ok((response, answers).into_model())
}

pub async fn list_responses(
    db: &DatabaseConnection,
    filter: ResponseFilter,
) -> Result<Vec<SurveyResponse>, SurveyError> {
    let status = filter.status.map(IntoDbModel::into_db_model);
    let responses = enquete_db::survey::response::Query::find_all_filtered(
        db,
        status,
        filter.survey_id,
        filter.survey_version_id,
    )
    .await?;
    Ok(responses.into_iter().map(IntoModel::into_model).collect())
}
