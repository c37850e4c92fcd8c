use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
    #[error("number question {0} has no min/max bounds")]
    MissingBounds(Uuid),
    #[error("question {0} carries options but is not an option question")]
    UnexpectedOptions(Uuid),
}
