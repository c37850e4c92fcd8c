use enquete_entity::survey::answer::{self, Entity as SurveyAnswer};
use sea_orm::ActiveValue::Set;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

/// A staged answer row, validated by the caller. Exactly one of the three
/// payloads is set, per the question type.
#[derive(Debug)]
pub struct NewAnswer {
    pub question_id: Uuid,
    pub option_id: Option<Uuid>,
    pub value_number: Option<i32>,
    pub value_text: Option<String>,
}

pub struct Mutation;

impl Mutation {
    pub async fn insert_many<C: ConnectionTrait>(
        conn: &C,
        response_id: Uuid,
        answers: Vec<NewAnswer>,
    ) -> Result<(), DbErr> {
        if answers.is_empty() {
            return Ok(());
        }
        let now = chrono::Utc::now().naive_utc();
        let rows: Vec<_> = answers
            .into_iter()
            .map(|a| answer::ActiveModel {
                id: Set(Uuid::new_v4()),
                response_id: Set(response_id),
                question_id: Set(a.question_id),
                option_id: Set(a.option_id),
                value_number: Set(a.value_number),
                value_text: Set(a.value_text),
                created_at: Set(now),
            })
            .collect();

        SurveyAnswer::insert_many(rows).exec(conn).await?;
        Ok(())
    }
}
