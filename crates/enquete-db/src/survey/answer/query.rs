use enquete_entity::survey::answer::{self, Entity as SurveyAnswer, Model as AnswerModel};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn count_for_response(db: &DatabaseConnection, response_id: Uuid) -> Result<u64, DbErr> {
        SurveyAnswer::find()
            .filter(answer::Column::ResponseId.eq(response_id))
            .count(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %response_id, "failed to count answers for response");
            })
    }

    pub async fn list_for_response(db: &DatabaseConnection, response_id: Uuid) -> Result<Vec<AnswerModel>, DbErr> {
        let query = SurveyAnswer::find()
            .filter(answer::Column::ResponseId.eq(response_id))
            .order_by_asc(answer::Column::CreatedAt);
        query.all(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %response_id, "failed to load answers for response");
        })
    }
}
