use enquete_db::survey::survey::Query;
use enquete_entity::survey::survey::{Model as SurveyModel, Status};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use test_log::test;
use uuid::Uuid;

#[test(tokio::test)]
async fn test_find_active_ready_by_brand() -> Result<(), DbErr> {
    let now = chrono::Utc::now().naive_utc();
    let survey = SurveyModel {
        id: Uuid::new_v4(),
        name: "Test drive follow-up".to_owned(),
        brand: "aurora".to_owned(),
        is_active: true,
        status: Status::Ready,
        created_at: now,
        updated_at: now,
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[survey.clone()]])
        .into_connection();

    assert_eq!(Query::find_active_ready_by_brand(&db, "aurora").await?, Some(survey));

    Ok(())
}

#[test(tokio::test)]
async fn test_find_active_ready_by_brand_empty() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<SurveyModel>::new()])
        .into_connection();

    assert_eq!(Query::find_active_ready_by_brand(&db, "aurora").await?, None);

    Ok(())
}
