use crate::convert::{FromDbModel, FromModel, IntoModel};
use enquete_entity::survey::{answer, response};
use enquete_model::survey::response::{ResponseStatus, SurveyResponse, SurveyResponseDetail};

impl FromDbModel<response::Status> for ResponseStatus {
    fn from_db_model(model: response::Status) -> Self {
        match model {
            response::Status::Started => Self::Started,
            response::Status::Submitted => Self::Submitted,
        }
    }
}

impl FromModel<ResponseStatus> for response::Status {
    fn from_model(model: ResponseStatus) -> Self {
        match model {
            ResponseStatus::Started => Self::Started,
            ResponseStatus::Submitted => Self::Submitted,
        }
    }
}

impl FromDbModel<response::Model> for SurveyResponse {
    fn from_db_model(model: response::Model) -> Self {
        Self {
            id: model.id,
            survey_version_id: model.survey_version_id,
            test_drive_form_id: model.test_drive_form_id,
            status: model.status.into_model(),
            submitted_at: model.submitted_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl FromDbModel<(response::Model, Vec<answer::Model>)> for SurveyResponseDetail {
    fn from_db_model((response, answers): (response::Model, Vec<answer::Model>)) -> Self {
        Self {
            id: response.id,
            survey_version_id: response.survey_version_id,
            test_drive_form_id: response.test_drive_form_id,
            status: response.status.into_model(),
            submitted_at: response.submitted_at,
            created_at: response.created_at,
            updated_at: response.updated_at,
            answers: answers.into_iter().map(IntoModel::into_model).collect(),
        }
    }
}
