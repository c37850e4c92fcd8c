pub mod mutation;
pub mod query;

pub use mutation::{Mutation, SubmitOutcome};
pub use query::Query;
