pub mod mutation;
pub mod query;

pub use mutation::{Mutation, NewQuestionOption};
pub use query::Query;
