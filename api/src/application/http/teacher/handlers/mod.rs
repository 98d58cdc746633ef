pub mod create_teacher;
pub mod get_teacher;
pub mod get_teachers;
