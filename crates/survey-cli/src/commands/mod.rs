pub mod assignment;
pub mod dispatch;
pub mod field;
pub mod field_type;
pub mod form;
pub mod response;
pub mod section;
pub mod shared;
pub mod user;
