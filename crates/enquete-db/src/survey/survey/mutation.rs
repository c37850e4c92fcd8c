use enquete_entity::survey::survey::{self, Model as SurveyModel};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_survey(db: &DatabaseConnection, name: &str, brand: &str) -> Result<SurveyModel, DbErr> {
        let now = chrono::Utc::now().naive_utc();
        let survey = survey::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            brand: Set(brand.to_string()),
            is_active: Set(true),
            status: Set(survey::Status::Draft),
            created_at: Set(now),
            updated_at: Set(now),
        };

        survey.insert(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %name, %brand, "failed to create survey");
        })
    }

    /// Applies the given fields and bumps `updated_at`; absent fields stay
    /// untouched. Immutability rules are enforced by the caller.
    pub async fn update_survey(
        db: &DatabaseConnection,
        id: Uuid,
        name: Option<String>,
        brand: Option<String>,
        is_active: Option<bool>,
        status: Option<survey::Status>,
    ) -> Result<SurveyModel, DbErr> {
        let survey = survey::ActiveModel {
            id: Unchanged(id),
            name: name.map_or(NotSet, Set),
            brand: brand.map_or(NotSet, Set),
            is_active: is_active.map_or(NotSet, Set),
            status: status.map_or(NotSet, Set),
            created_at: NotSet,
            updated_at: Set(chrono::Utc::now().naive_utc()),
        };

        survey.update(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %id, "failed to update survey");
        })
    }
}
