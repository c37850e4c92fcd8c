use crate::util::FlattenTransactionResultExt;
use enquete_entity::survey::question::{self, Model as QuestionModel};
use enquete_entity::survey::question_option::{self, Model as OptionModel};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, TransactionTrait};
use uuid::Uuid;

/// Option payload for a new question. A missing `order_index` defaults to
/// the option's 1-based position in the payload.
pub struct NewQuestionOption {
    pub label: String,
    pub value: String,
    pub order_index: Option<i32>,
}

pub struct Mutation;

impl Mutation {
    /// Inserts a question together with its denormalized option rows in one
    /// transaction. Type-specific validation happens in the caller; this
    /// only persists.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_question<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        survey_version_id: Uuid,
        question_type: question::QuestionType,
        label: String,
        is_required: bool,
        order_index: i32,
        min_value: Option<i32>,
        max_value: Option<i32>,
        options: Vec<NewQuestionOption>,
    ) -> Result<(QuestionModel, Vec<OptionModel>), DbErr> {
        conn.transaction::<_, (QuestionModel, Vec<OptionModel>), DbErr>(|txn| {
            Box::pin(async move {
                let now = chrono::Utc::now().naive_utc();
                let question = question::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    survey_version_id: Set(survey_version_id),
                    r#type: Set(question_type),
                    label: Set(label),
                    is_required: Set(is_required),
                    order_index: Set(order_index),
                    min_value: Set(min_value),
                    max_value: Set(max_value),
                    created_at: Set(now),
                };
                let question = question.insert(txn).await?;

                let mut created = Vec::with_capacity(options.len());
                for (position, option) in options.into_iter().enumerate() {
                    let order_index = match option.order_index {
                        Some(order_index) => order_index,
                        None => i32::try_from(position).unwrap_or(i32::MAX - 1) + 1,
                    };
                    let option = question_option::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        question_id: Set(question.id),
                        label: Set(option.label),
                        value: Set(option.value),
                        order_index: Set(Some(order_index)),
                        created_at: Set(now),
                    };
                    created.push(option.insert(txn).await?);
                }

                Ok((question, created))
            })
        })
        .await
        .flatten_res()
    }
}
