//! Domain entities and the validation rules that guard them.

pub mod category;
pub mod validation;
