use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "survey_question_type_enum")]
pub enum QuestionType {
    #[sea_orm(string_value = "number")]
    Number,
    #[sea_orm(string_value = "text")]
    Text,
    #[sea_orm(string_value = "option_single")]
    OptionSingle,
    #[sea_orm(string_value = "option_multi")]
    OptionMulti,
}

/// `min_value`/`max_value` are set for `number` questions only, always
/// together.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "survey_questions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub survey_version_id: Uuid,
    pub r#type: QuestionType,
    pub label: String,
    pub is_required: bool,
    pub order_index: i32,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::version::Entity",
        from = "Column::SurveyVersionId",
        to = "super::version::Column::Id"
    )]
    Version,
    #[sea_orm(has_many = "super::question_option::Entity")]
    QuestionOption,
}

impl Related<super::version::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Version.def()
    }
}

impl Related<super::question_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
