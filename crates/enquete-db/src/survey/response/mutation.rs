use crate::survey::answer::{self, NewAnswer};
use crate::util::{FlattenTransactionResultExt, RequireRecord};
use enquete_entity::survey::response::{self, Entity as SurveyResponse, Model as ResponseModel};
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, TransactionTrait, TryInsertResult,
};
use std::error::Error;
use uuid::Uuid;

/// Result of the transactional submit: the started→submitted flip either
/// matched the row or someone else already flipped it.
pub enum SubmitOutcome {
    Submitted(ResponseModel),
    NotStarted,
}

pub struct Mutation;

impl Mutation {
    /// Arena-style upsert on the (version, form) unique pair: attempt the
    /// insert with ON CONFLICT DO NOTHING, then read the row back. The
    /// returned flag is true only for the caller whose insert actually won;
    /// a race loser gets the winner's row.
    pub async fn try_create<C: ConnectionTrait>(
        conn: &C,
        survey_version_id: Uuid,
        test_drive_form_id: String,
    ) -> Result<(ResponseModel, bool), DbErr> {
        let response = Self::new_started(survey_version_id, test_drive_form_id.clone());

        let mut on_conflict = OnConflict::columns([
            response::Column::SurveyVersionId,
            response::Column::TestDriveFormId,
        ]);
        on_conflict.do_nothing();
        let insert = SurveyResponse::insert(response)
            .on_conflict(on_conflict)
            .do_nothing()
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    error = error as &dyn Error,
                    %survey_version_id,
                    %test_drive_form_id,
                    "failed to insert survey response"
                );
            })?;
        let created = matches!(insert, TryInsertResult::Inserted(_));

        let res = SurveyResponse::find()
            .filter(response::Column::SurveyVersionId.eq(survey_version_id))
            .filter(response::Column::TestDriveFormId.eq(&test_drive_form_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    error = error as &dyn Error,
                    %survey_version_id,
                    %test_drive_form_id,
                    "failed to load survey response after insertion"
                );
            })?;

        res.ok_or_else(|| {
            tracing::error!(%survey_version_id, %test_drive_form_id, "survey response not found after insertion");
            DbErr::RecordNotFound("survey response not found after insertion".to_owned())
        })
        .map(|model| (model, created))
    }

    /// The submit commit: flips exactly the addressed row from started to
    /// submitted and bulk-inserts the staged answers, as one transaction.
    /// The flip is scoped by id AND current status, so a concurrent second
    /// submit matches zero rows and nothing of it becomes visible.
    pub async fn submit<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        response_id: Uuid,
        answers: Vec<NewAnswer>,
    ) -> Result<SubmitOutcome, DbErr> {
        conn.transaction::<_, SubmitOutcome, DbErr>(|txn| {
            Box::pin(async move {
                let now = chrono::Utc::now().naive_utc();
                let submitted = response::ActiveModel {
                    id: NotSet,
                    survey_version_id: NotSet,
                    test_drive_form_id: NotSet,
                    status: Set(response::Status::Submitted),
                    submitted_at: Set(Some(now)),
                    created_at: NotSet,
                    updated_at: Set(now),
                };
                let res = SurveyResponse::update_many()
                    .set(submitted)
                    .filter(response::Column::Id.eq(response_id))
                    .filter(response::Column::Status.eq(response::Status::Started))
                    .exec(txn)
                    .await?;
                if res.rows_affected == 0 {
                    return Ok(SubmitOutcome::NotStarted);
                }

                answer::Mutation::insert_many(txn, response_id, answers).await?;

                let response = SurveyResponse::find_by_id(response_id).one(txn).await.require()?;
                Ok(SubmitOutcome::Submitted(response))
            })
        })
        .await
        .flatten_res()
    }

    fn new_started(survey_version_id: Uuid, test_drive_form_id: String) -> response::ActiveModel {
        let now = chrono::Utc::now().naive_utc();
        response::ActiveModel {
            id: Set(Uuid::new_v4()),
            survey_version_id: Set(survey_version_id),
            test_drive_form_id: Set(test_drive_form_id),
            status: Set(response::Status::Started),
            submitted_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}
