//! Form validation: declarative per-field rules and form state
//! validated on every change.

mod schema;
mod state;

pub use schema::{Field, FieldErrors, Rule, Schema, PROFILE_SCHEMA};
pub use state::{FormState, ProfileForm};
