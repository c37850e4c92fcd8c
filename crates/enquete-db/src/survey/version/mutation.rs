use crate::util::{FlattenTransactionResultExt, RequireRecord};
use enquete_entity::survey::version::{self, Entity as SurveyVersion, Model as VersionModel};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Inserts a version; when `is_current` is requested, the sibling flags
    /// are cleared in the same transaction so two versions never appear
    /// current at once.
    pub async fn create_version<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        survey_id: Uuid,
        version_number: i32,
        is_current: bool,
        notes: Option<String>,
    ) -> Result<VersionModel, DbErr> {
        conn.transaction(|txn| {
            Box::pin(async move {
                if is_current {
                    Self::clear_current(txn, survey_id).await?;
                }

                let version = version::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    survey_id: Set(survey_id),
                    version: Set(version_number),
                    is_current: Set(is_current),
                    notes: Set(notes),
                    created_at: Set(chrono::Utc::now().naive_utc()),
                };

                version.insert(txn).await
            })
        })
        .await
        .flatten_res()
    }

    /// Promotes an existing version to current, clearing the previous flag
    /// in the same transaction.
    pub async fn set_current<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        survey_id: Uuid,
        version_id: Uuid,
    ) -> Result<VersionModel, DbErr> {
        conn.transaction(|txn| {
            Box::pin(async move {
                Self::clear_current(txn, survey_id).await?;

                let flag = version::ActiveModel {
                    id: NotSet,
                    survey_id: NotSet,
                    version: NotSet,
                    is_current: Set(true),
                    notes: NotSet,
                    created_at: NotSet,
                };
                let res = SurveyVersion::update_many()
                    .set(flag)
                    .filter(version::Column::Id.eq(version_id))
                    .filter(version::Column::SurveyId.eq(survey_id))
                    .exec(txn)
                    .await?;
                if res.rows_affected == 0 {
                    return Err(DbErr::RecordNotFound(format!(
                        "Survey version {version_id} not found"
                    )));
                }

                SurveyVersion::find_by_id(version_id).one(txn).await.require()
            })
        })
        .await
        .flatten_res()
    }

    async fn clear_current<C: ConnectionTrait>(conn: &C, survey_id: Uuid) -> Result<(), DbErr> {
        let clear = version::ActiveModel {
            id: NotSet,
            survey_id: NotSet,
            version: NotSet,
            is_current: Set(false),
            notes: NotSet,
            created_at: NotSet,
        };
        SurveyVersion::update_many()
            .set(clear)
            .filter(version::Column::SurveyId.eq(survey_id))
            .exec(conn)
            .await?;
        Ok(())
    }
}
