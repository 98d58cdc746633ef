pub mod common;
pub mod meal_verification;
pub mod survey;
pub mod teacher;
