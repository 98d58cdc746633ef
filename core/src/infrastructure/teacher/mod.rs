pub mod mappers;
pub mod repositories;

pub use repositories::teacher_repository::PostgresTeacherRepository;
