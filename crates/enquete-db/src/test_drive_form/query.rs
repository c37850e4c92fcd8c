use enquete_entity::test_drive_form::{Entity as TestDriveForm, Model as FormModel};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use std::error::Error;

pub struct Query;

impl Query {
    /// Point read; the form record is owned by the surrounding system.
    pub async fn find_form_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<FormModel>, DbErr> {
        TestDriveForm::find_by_id(id).one(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %id, "failed to load test drive form");
        })
    }
}
