use enquete_core::survey::store;
use enquete_entity::test_drive_form;
use enquete_model::survey::question::NewQuestion;
use enquete_model::survey::survey::{Survey, SurveyStatus, UpdateSurvey};
use enquete_model::survey::version::SurveyVersion;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbConn, DbErr, EntityTrait, IntoActiveModel};
use uuid::Uuid;

pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    let migration = match db.get_database_backend() {
        sea_orm::DatabaseBackend::Postgres => include_str!("../../../enquete-db/tests/common/postgres.sql"),
        sea_orm::DatabaseBackend::Sqlite => include_str!("../../../enquete-db/tests/common/sqlite.sql"),
        #[allow(clippy::unimplemented)]
        sea_orm::DatabaseBackend::MySql => unimplemented!(),
    };

    db.execute_unprepared(migration).await?;
    Ok(())
}

#[allow(dead_code)]
pub async fn connect() -> DatabaseConnection {
    let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();
    db
}

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

/// Drives the schema store through its regular lifecycle: draft survey,
/// current version v1 with the given questions, then the ready flip.
#[allow(dead_code)]
pub async fn ready_survey(
    db: &DatabaseConnection,
    brand: &str,
    questions: Vec<NewQuestion>,
) -> (Survey, SurveyVersion) {
    let survey = store::create_survey(db, "Test drive follow-up", brand).await.unwrap();
    let version = store::create_version(db, survey.id, 1, true, None).await.unwrap();
    for question in questions {
        store::add_question(db, version.id, question).await.unwrap();
    }
    let survey = store::update_survey(
        db,
        survey.id,
        UpdateSurvey {
            status: Some(SurveyStatus::Ready),
            ..UpdateSurvey::default()
        },
    )
    .await
    .unwrap();
    (survey, version)
}
