use enquete_entity::survey::survey::{self, Entity as Survey, Model as SurveyModel};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_survey_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<SurveyModel>, DbErr> {
        Survey::find_by_id(id).one(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %id, "failed to load survey");
        })
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<SurveyModel>, DbErr> {
        let query = Survey::find().order_by_desc(survey::Column::CreatedAt);
        query.all(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load surveys");
        })
    }

    pub async fn find_by_brand(db: &DatabaseConnection, brand: &str) -> Result<Vec<SurveyModel>, DbErr> {
        let query = Survey::find()
            .filter(survey::Column::Brand.eq(brand))
            .filter(survey::Column::IsActive.eq(true))
            .filter(survey::Column::Status.eq(survey::Status::Ready))
            .order_by_desc(survey::Column::CreatedAt);
        query.all(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %brand, "failed to load surveys by brand");
        })
    }

    /// The most-recently-created active, ready survey for the brand, if any.
    pub async fn find_active_ready_by_brand(
        db: &DatabaseConnection,
        brand: &str,
    ) -> Result<Option<SurveyModel>, DbErr> {
        let query = Survey::find()
            .filter(survey::Column::Brand.eq(brand))
            .filter(survey::Column::IsActive.eq(true))
            .filter(survey::Column::Status.eq(survey::Status::Ready))
            .order_by_desc(survey::Column::CreatedAt);
        query.one(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %brand, "failed to load active survey for brand");
        })
    }
}
