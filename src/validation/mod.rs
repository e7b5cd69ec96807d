//! Declarative validation for the signup form
//!
//! Each field owns an ordered list of rules. Fields are checked
//! independently and every failing field is reported, but within a field
//! only the first failing rule's message is kept.

mod error;
pub mod rules;
mod schema;

pub use error::{ErrorMap, FieldValidationError};
pub use schema::Schema;
