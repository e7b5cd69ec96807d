//! Form domain layer
//!
//! Field value objects, the signup form container and the record it
//! produces once every rule passes.

mod field;
mod form_state;
mod record;

pub use field::{FieldName, FieldValue, FormField, Gender, InputKind, Interest};
pub use form_state::{Form, SignupForm, SUBMIT_INDEX};
pub use record::SignupRecord;
