mod common;

use crate::common::setup_schema;
use enquete_db::survey::{survey, version};
use sea_orm::{Database, DatabaseConnection};
use test_log::test;
use uuid::Uuid;

async fn connect() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();
    db
}

#[test(tokio::test)]
async fn test_create_version_stores_notes() {
    let db = connect().await;
    let survey = survey::Mutation::create_survey(&db, "Follow-up", "aurora").await.unwrap();

    let created = version::Mutation::create_version(&db, survey.id, 1, false, Some("pilot".to_owned()))
        .await
        .unwrap();

    assert_eq!(created.version, 1);
    assert!(!created.is_current);
    assert_eq!(created.notes.as_deref(), Some("pilot"));
}

#[test(tokio::test)]
async fn test_creating_current_version_clears_sibling_flag() {
    let db = connect().await;
    let survey = survey::Mutation::create_survey(&db, "Follow-up", "aurora").await.unwrap();

    let v1 = version::Mutation::create_version(&db, survey.id, 1, true, None).await.unwrap();
    assert!(v1.is_current);

    let v2 = version::Mutation::create_version(&db, survey.id, 2, true, None).await.unwrap();
    assert!(v2.is_current);

    let v1 = version::Query::find_version_by_id(&db, v1.id).await.unwrap().unwrap();
    assert!(!v1.is_current);

    let current = version::Query::find_current_for_survey(&db, survey.id).await.unwrap().unwrap();
    assert_eq!(current.id, v2.id);
}

#[test(tokio::test)]
async fn test_creating_non_current_version_keeps_existing_flag() {
    let db = connect().await;
    let survey = survey::Mutation::create_survey(&db, "Follow-up", "aurora").await.unwrap();

    let v1 = version::Mutation::create_version(&db, survey.id, 1, true, None).await.unwrap();
    version::Mutation::create_version(&db, survey.id, 2, false, None).await.unwrap();

    let current = version::Query::find_current_for_survey(&db, survey.id).await.unwrap().unwrap();
    assert_eq!(current.id, v1.id);
}

#[test(tokio::test)]
async fn test_set_current_switches_versions() {
    let db = connect().await;
    let survey = survey::Mutation::create_survey(&db, "Follow-up", "aurora").await.unwrap();

    let v1 = version::Mutation::create_version(&db, survey.id, 1, true, None).await.unwrap();
    let v2 = version::Mutation::create_version(&db, survey.id, 2, false, None).await.unwrap();

    let promoted = version::Mutation::set_current(&db, survey.id, v2.id).await.unwrap();
    assert!(promoted.is_current);

    let v1 = version::Query::find_version_by_id(&db, v1.id).await.unwrap().unwrap();
    assert!(!v1.is_current);

    let versions = version::Query::list_for_survey(&db, survey.id).await.unwrap();
    assert_eq!(versions.iter().filter(|v| v.is_current).count(), 1);
}

#[test(tokio::test)]
async fn test_set_current_unknown_version_fails() {
    let db = connect().await;
    let survey = survey::Mutation::create_survey(&db, "Follow-up", "aurora").await.unwrap();
    version::Mutation::create_version(&db, survey.id, 1, true, None).await.unwrap();

    let result = version::Mutation::set_current(&db, survey.id, Uuid::new_v4()).await;
    assert!(result.is_err());

    // the existing flag must survive the failed promotion
    let current = version::Query::find_current_for_survey(&db, survey.id).await.unwrap();
    assert!(current.is_some());
}

#[test(tokio::test)]
async fn test_version_number_unique_per_survey() {
    let db = connect().await;
    let survey = survey::Mutation::create_survey(&db, "Follow-up", "aurora").await.unwrap();

    version::Mutation::create_version(&db, survey.id, 1, false, None).await.unwrap();
    let duplicate = version::Mutation::create_version(&db, survey.id, 1, false, None).await;
    assert!(duplicate.is_err());

    let versions = version::Query::list_for_survey(&db, survey.id).await.unwrap();
    assert_eq!(versions.len(), 1);
}

#[test(tokio::test)]
async fn test_list_for_survey_orders_by_version_desc() {
    let db = connect().await;
    let survey = survey::Mutation::create_survey(&db, "Follow-up", "aurora").await.unwrap();

    version::Mutation::create_version(&db, survey.id, 1, false, None).await.unwrap();
    version::Mutation::create_version(&db, survey.id, 3, false, None).await.unwrap();
    version::Mutation::create_version(&db, survey.id, 2, false, None).await.unwrap();

    let versions = version::Query::list_for_survey(&db, survey.id).await.unwrap();
    let numbers: Vec<i32> = versions.iter().map(|v| v.version).collect();
    assert_eq!(numbers, vec![3, 2, 1]);
}
