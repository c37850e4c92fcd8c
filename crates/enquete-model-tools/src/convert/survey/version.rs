use crate::convert::{FromDbModel, TryFromDbModel, TryIntoModel};
use enquete_entity::survey::{question, question_option, version};
use enquete_model::survey::question::Question;
use enquete_model::survey::version::{SurveyVersion, SurveyVersionDetail};

impl FromDbModel<version::Model> for SurveyVersion {
    fn from_db_model(model: version::Model) -> Self {
        Self {
            id: model.id,
            survey_id: model.survey_id,
            version: model.version,
            is_current: model.is_current,
            notes: model.notes,
            created_at: model.created_at,
        }
    }
}

type QuestionRows = Vec<(question::Model, Vec<question_option::Model>)>;

impl TryFromDbModel<(version::Model, QuestionRows)> for SurveyVersionDetail {
    type Error = crate::error::Error;

    fn try_from_db_model((version, questions): (version::Model, QuestionRows)) -> Result<Self, Self::Error> {
        let questions = questions
            .into_iter()
            .map(TryIntoModel::try_into_model)
            .collect::<Result<Vec<Question>, _>>()?;

        Ok(Self {
            id: version.id,
            survey_id: version.survey_id,
            version: version.version,
            is_current: version.is_current,
            notes: version.notes,
            created_at: version.created_at,
            questions,
        })
    }
}
