use enquete_entity::survey::version::{self, Entity as SurveyVersion, Model as VersionModel};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_version_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<VersionModel>, DbErr> {
        SurveyVersion::find_by_id(id).one(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %id, "failed to load survey version");
        })
    }

    pub async fn list_for_survey(db: &DatabaseConnection, survey_id: Uuid) -> Result<Vec<VersionModel>, DbErr> {
        let query = SurveyVersion::find()
            .filter(version::Column::SurveyId.eq(survey_id))
            .order_by_desc(version::Column::Version);
        query.all(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %survey_id, "failed to load survey versions");
        })
    }

    pub async fn find_current_for_survey(
        db: &DatabaseConnection,
        survey_id: Uuid,
    ) -> Result<Option<VersionModel>, DbErr> {
        let query = SurveyVersion::find()
            .filter(version::Column::SurveyId.eq(survey_id))
            .filter(version::Column::IsCurrent.eq(true));
        query.one(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %survey_id, "failed to load current survey version");
        })
    }
}
