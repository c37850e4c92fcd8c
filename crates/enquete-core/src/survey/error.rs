use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("survey {0} not found")]
    SurveyNotFound(Uuid),

    #[error("survey version {0} not found")]
    VersionNotFound(Uuid),

    #[error("test drive form {0} not found")]
    FormNotFound(String),

    #[error("survey response {0} not found")]
    ResponseNotFound(Uuid),

    #[error("survey is ready and cannot be modified")]
    ReadyImmutable,

    #[error("survey version is immutable because it already has responses")]
    VersionImmutable,

    #[error("order_index must be >= 1, got {0}")]
    InvalidOrderIndex(i32),

    #[error("min_value {min} must be <= max_value {max}")]
    InvalidBounds { min: i32, max: i32 },

    #[error("options are required for option questions")]
    MissingOptions,

    #[error("duplicate option value {0:?}")]
    DuplicateOptionValue(String),

    #[error("no active survey found for brand {0:?}")]
    NoActiveSurvey(String),

    #[error("survey {0} has no current version")]
    NoCurrentVersion(Uuid),

    #[error("survey response is already submitted")]
    AlreadySubmitted,

    #[error("survey response already has answers")]
    AlreadyAnswered,

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error(transparent)]
    MalformedRow(#[from] enquete_model_tools::error::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Everything wrong with one submitted batch, collected across all items so
/// the caller can fix the whole form in one round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("survey answers failed validation: {}", .issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ValidationFailure {
    pub issues: Vec<AnswerIssue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerIssue {
    #[error("question {question} does not belong to this survey version")]
    UnknownQuestion { question: Uuid },

    #[error("duplicate answer for question {question}")]
    DuplicateAnswer { question: Uuid },

    #[error("a value is required for question {question}")]
    MissingValue { question: Uuid },

    #[error("value {value} is outside [{min}, {max}] for question {question}")]
    OutOfRange {
        question: Uuid,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("exactly one option must be selected for question {question}")]
    TooManyOptions { question: Uuid },

    #[error("option {option} does not belong to question {question}")]
    UnknownOption { question: Uuid, option: Uuid },

    #[error("missing required answers for questions {questions:?}")]
    MissingRequiredAnswers { questions: Vec<Uuid> },
}
