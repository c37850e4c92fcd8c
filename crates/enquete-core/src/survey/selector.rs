use crate::survey::error::SurveyError;
use enquete_model::survey::version::SurveyVersion;
use enquete_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;

/// Picks the version new responses for a brand are answered against: the
/// current version of the most-recently-created active, ready survey.
/// Both failure cases are configuration errors for the caller to surface,
/// not retry.
pub async fn current_version_for_brand(db: &DatabaseConnection, brand: &str) -> Result<SurveyVersion, SurveyError> {
    let survey = enquete_db::survey::survey::Query::find_active_ready_by_brand(db, brand)
        .await?
        .ok_or_else(|| SurveyError::NoActiveSurvey(brand.to_string()))?;

    let version = enquete_db::survey::version::Query::find_current_for_survey(db, survey.id)
        .await?
        .ok_or(SurveyError::NoCurrentVersion(survey.id))?;

    Ok(version.into_model())
}
