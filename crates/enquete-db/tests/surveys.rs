mod common;

use crate::common::setup_schema;
use enquete_db::survey::survey::{Mutation, Query};
use enquete_entity::survey::survey::Status;
use sea_orm::{Database, DatabaseConnection};
use std::time::Duration;
use test_log::test;

async fn connect() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();
    db
}

#[test(tokio::test)]
async fn test_create_survey_defaults() {
    let db = connect().await;

    let survey = Mutation::create_survey(&db, "Test drive follow-up", "aurora").await.unwrap();

    assert_eq!(survey.name, "Test drive follow-up");
    assert_eq!(survey.brand, "aurora");
    assert_eq!(survey.status, Status::Draft);
    assert!(survey.is_active);
}

#[test(tokio::test)]
async fn test_update_survey_applies_only_given_fields() {
    let db = connect().await;
    let survey = Mutation::create_survey(&db, "Test drive follow-up", "aurora").await.unwrap();

    let updated = Mutation::update_survey(&db, survey.id, Some("Renamed".to_owned()), None, Some(false), None)
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.brand, "aurora");
    assert!(!updated.is_active);
    assert_eq!(updated.status, Status::Draft);
    assert!(updated.updated_at >= survey.updated_at);
}

#[test(tokio::test)]
async fn test_find_active_ready_by_brand_picks_latest() {
    let db = connect().await;

    let older = Mutation::create_survey(&db, "First wave", "aurora").await.unwrap();
    Mutation::update_survey(&db, older.id, None, None, None, Some(Status::Ready))
        .await
        .unwrap();

    // created_at is the tie breaker, so give the second survey a later one
    tokio::time::sleep(Duration::from_millis(10)).await;
    let newer = Mutation::create_survey(&db, "Second wave", "aurora").await.unwrap();
    Mutation::update_survey(&db, newer.id, None, None, None, Some(Status::Ready))
        .await
        .unwrap();

    let found = Query::find_active_ready_by_brand(&db, "aurora").await.unwrap().unwrap();
    assert_eq!(found.id, newer.id);
}

#[test(tokio::test)]
async fn test_find_active_ready_by_brand_skips_draft_and_inactive() {
    let db = connect().await;

    let draft = Mutation::create_survey(&db, "Still drafting", "aurora").await.unwrap();
    assert_eq!(draft.status, Status::Draft);

    let retired = Mutation::create_survey(&db, "Retired", "aurora").await.unwrap();
    Mutation::update_survey(&db, retired.id, None, None, Some(false), Some(Status::Ready))
        .await
        .unwrap();

    let other_brand = Mutation::create_survey(&db, "Elsewhere", "volta").await.unwrap();
    Mutation::update_survey(&db, other_brand.id, None, None, None, Some(Status::Ready))
        .await
        .unwrap();

    assert_eq!(Query::find_active_ready_by_brand(&db, "aurora").await.unwrap(), None);
}
