pub mod health;
pub mod meal_verification;
pub mod query_params;
pub mod server;
pub mod survey;
pub mod teacher;
