pub mod clan;
pub mod validate;
