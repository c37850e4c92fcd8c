use crate::survey::error::SurveyError;
use crate::survey::response;
use enquete_model::survey::response::EnsureResponse;
use sea_orm::DatabaseConnection;

/// Outcome for the surrounding workflow: either a response exists for the
/// form (created just now or on an earlier call), or the brand's survey is
/// not configured and nothing was created.
#[derive(Debug, Clone, PartialEq)]
pub enum EnsureOutcome {
    Ensured(EnsureResponse),
    NotCreated,
}

/// Idempotent hook for the test-drive workflow. Survey misconfiguration
/// must not block the workflow that triggered it, so the selector's
/// configuration errors are reported as `NotCreated` instead of raised;
/// storage errors still propagate.
pub async fn ensure_response_for_form(
    db: &DatabaseConnection,
    test_drive_form_id: &str,
    brand: &str,
) -> Result<EnsureOutcome, SurveyError> {
    match response::ensure(db, test_drive_form_id, brand).await {
        Ok(ensured) => {
            if ensured.created {
                tracing::info!(
                    %test_drive_form_id,
                    %brand,
                    response = %ensured.response.id,
                    "created survey response for test drive form"
                );
            }
            Ok(EnsureOutcome::Ensured(ensured))
        }
        Err(error @ (SurveyError::NoActiveSurvey(_) | SurveyError::NoCurrentVersion(_))) => {
            tracing::warn!(
                %test_drive_form_id,
                %brand,
                %error,
                "survey not configured for brand, skipping response creation"
            );
            Ok(EnsureOutcome::NotCreated)
        }
        Err(error) => Err(error),
    }
}
