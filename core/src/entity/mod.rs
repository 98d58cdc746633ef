pub mod prelude;
pub mod teachers;
