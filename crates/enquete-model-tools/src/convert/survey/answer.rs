use crate::convert::FromDbModel;
use enquete_entity::survey::answer;
use enquete_model::survey::answer::Answer;

impl FromDbModel<answer::Model> for Answer {
    fn from_db_model(model: answer::Model) -> Self {
        Self {
            id: model.id,
            question_id: model.question_id,
            option_id: model.option_id,
            value_number: model.value_number,
            value_text: model.value_text,
            created_at: model.created_at,
        }
    }
}
