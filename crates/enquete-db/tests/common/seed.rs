use enquete_db::survey::{survey, version};
use enquete_entity::survey::survey::{Model as SurveyModel, Status};
use enquete_entity::survey::version::Model as VersionModel;
use enquete_entity::test_drive_form;
use sea_orm::{DatabaseConnection, EntityTrait, IntoActiveModel};
use uuid::Uuid;

#[allow(dead_code)]
pub async fn create_test_form(db: &DatabaseConnection) -> test_drive_form::Model {
    let form = test_drive_form::Model {
        id: format!("form-{}", Uuid::new_v4()),
        created_at: chrono::Utc::now().naive_utc(),
    };
    test_drive_form::Entity::insert(form.clone().into_active_model())
        .exec(db)
        .await
        .unwrap();
    form
}

/// A ready survey for the brand with a single current version v1.
#[allow(dead_code)]
pub async fn create_ready_survey(db: &DatabaseConnection, brand: &str) -> (SurveyModel, VersionModel) {
    let survey = survey::Mutation::create_survey(db, "Test drive follow-up", brand)
        .await
        .unwrap();
    let version = version::Mutation::create_version(db, survey.id, 1, true, None)
        .await
        .unwrap();
    let survey = survey::Mutation::update_survey(db, survey.id, None, None, None, Some(Status::Ready))
        .await
        .unwrap();
    (survey, version)
}
