use enquete_entity::survey::question::{self, Entity as SurveyQuestion, Model as QuestionModel};
use enquete_entity::survey::question_option::{self, Entity as QuestionOption, Model as OptionModel};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    /// The version's full question set with options, questions ordered by
    /// `order_index`, options by (`order_index`, label).
    pub async fn find_with_options_for_version(
        db: &DatabaseConnection,
        survey_version_id: Uuid,
    ) -> Result<Vec<(QuestionModel, Vec<OptionModel>)>, DbErr> {
        let query = SurveyQuestion::find()
            .find_with_related(QuestionOption)
            .filter(question::Column::SurveyVersionId.eq(survey_version_id))
            .order_by_asc(question::Column::OrderIndex)
            .order_by_asc(question_option::Column::OrderIndex)
            .order_by_asc(question_option::Column::Label);
        query.all(db).await.inspect_err(|error| {
            tracing::error!(
                error = error as &dyn Error,
                %survey_version_id,
                "failed to load questions for survey version"
            );
        })
    }
}
