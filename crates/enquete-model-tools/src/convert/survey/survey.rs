use crate::convert::{FromDbModel, FromModel, IntoModel};
use enquete_entity::survey::survey;
use enquete_model::survey::survey::{Survey, SurveyStatus};

impl FromDbModel<survey::Status> for SurveyStatus {
    fn from_db_model(model: survey::Status) -> Self {
        match model {
            survey::Status::Draft => Self::Draft,
            survey::Status::Ready => Self::Ready,
        }
    }
}

impl FromModel<SurveyStatus> for survey::Status {
    fn from_model(model: SurveyStatus) -> Self {
        match model {
            SurveyStatus::Draft => Self::Draft,
            SurveyStatus::Ready => Self::Ready,
        }
    }
}

impl FromDbModel<survey::Model> for Survey {
    fn from_db_model(model: survey::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            brand: model.brand,
            is_active: model.is_active,
            status: model.status.into_model(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
