mod assignment;
mod field;
mod field_type;
mod form;
mod response;
mod section;
mod user;

pub use assignment::AssignmentCommands;
pub use field::FieldCommands;
pub use field_type::FieldTypeCommands;
pub use form::FormCommands;
pub use response::ResponseCommands;
pub use section::SectionCommands;
pub use user::UserCommands;
