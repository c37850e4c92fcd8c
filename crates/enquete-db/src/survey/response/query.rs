use enquete_entity::survey::response::{self, Entity as SurveyResponse, Model as ResponseModel};
use enquete_entity::survey::version;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_response_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<ResponseModel>, DbErr> {
        SurveyResponse::find_by_id(id).one(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %id, "failed to load survey response");
        })
    }

    pub async fn find_by_version_and_form(
        db: &DatabaseConnection,
        survey_version_id: Uuid,
        test_drive_form_id: &str,
    ) -> Result<Option<ResponseModel>, DbErr> {
        let query = SurveyResponse::find()
            .filter(response::Column::SurveyVersionId.eq(survey_version_id))
            .filter(response::Column::TestDriveFormId.eq(test_drive_form_id));
        query.one(db).await.inspect_err(|error| {
            tracing::error!(
                error = error as &dyn Error,
                %survey_version_id,
                %test_drive_form_id,
                "failed to load survey response for version and form"
            );
        })
    }

    /// Used by the schema store: a version with responses is immutable.
    pub async fn count_for_version(db: &DatabaseConnection, survey_version_id: Uuid) -> Result<u64, DbErr> {
        SurveyResponse::find()
            .filter(response::Column::SurveyVersionId.eq(survey_version_id))
            .count(db)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    error = error as &dyn Error,
                    %survey_version_id,
                    "failed to count responses for survey version"
                );
            })
    }

    pub async fn find_all_filtered(
        db: &DatabaseConnection,
        status: Option<response::Status>,
        survey_id: Option<Uuid>,
        survey_version_id: Option<Uuid>,
    ) -> Result<Vec<ResponseModel>, DbErr> {
        let mut query = SurveyResponse::find();
        if let Some(status) = status {
            query = query.filter(response::Column::Status.eq(status));
        }
        if let Some(survey_version_id) = survey_version_id {
            query = query.filter(response::Column::SurveyVersionId.eq(survey_version_id));
        }
        if let Some(survey_id) = survey_id {
            query = query
                .join(JoinType::InnerJoin, response::Relation::Version.def())
                .filter(version::Column::SurveyId.eq(survey_id));
        }

        query
            .order_by_desc(response::Column::UpdatedAt)
            .all(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load survey responses");
            })
    }
}
