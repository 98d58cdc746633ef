pub mod teacher_repository;
