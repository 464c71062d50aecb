pub mod found;
pub mod parse;
