//! Entity structs for all survey domain objects.
//!
//! Each entity maps to a table created by the `survey-db` migrations.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output and schema validation.

mod assignment;
mod field;
mod form;
mod response;
mod section;
mod user;

pub use assignment::{Assignment, AssignmentView};
pub use field::{Field, FieldOption, FieldType, NewField};
pub use form::Form;
pub use response::{FieldValue, MultipleFieldValue, Response};
pub use section::Section;
pub use user::User;
