use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "survey_response_status_enum")]
pub enum Status {
    #[sea_orm(string_value = "started")]
    Started,
    #[sea_orm(string_value = "submitted")]
    Submitted,
}

/// One respondent's attempt at a survey version, tied 1:1 to a test drive
/// form. The (survey_version_id, test_drive_form_id) pair is unique and
/// arbitrates concurrent creation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "survey_responses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub survey_version_id: Uuid,
    pub test_drive_form_id: String,
    pub status: Status,
    pub submitted_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::version::Entity",
        from = "Column::SurveyVersionId",
        to = "super::version::Column::Id"
    )]
    Version,
    #[sea_orm(
        belongs_to = "crate::test_drive_form::Entity",
        from = "Column::TestDriveFormId",
        to = "crate::test_drive_form::Column::Id"
    )]
    TestDriveForm,
    #[sea_orm(has_many = "super::answer::Entity")]
    Answer,
}

impl Related<super::version::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Version.def()
    }
}

impl Related<crate::test_drive_form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestDriveForm.def()
    }
}

impl Related<super::answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
