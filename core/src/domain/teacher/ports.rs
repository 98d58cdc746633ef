use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    teacher::{
        entities::{LocalizedTeacher, Teacher},
        value_objects::{CreateTeacherInput, GetTeacherInput, GetTeachersInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait TeacherRepository: Send + Sync {
    fn create_teacher(
        &self,
        teacher: Teacher,
    ) -> impl Future<Output = Result<Teacher, CoreError>> + Send;

    fn list_teachers(&self) -> impl Future<Output = Result<Vec<Teacher>, CoreError>> + Send;

    fn get_teacher_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Teacher>, CoreError>> + Send;
}

pub trait TeacherService: Send + Sync {
    fn create_teacher(
        &self,
        input: CreateTeacherInput,
    ) -> impl Future<Output = Result<Teacher, CoreError>> + Send;

    fn get_teachers(
        &self,
        input: GetTeachersInput,
    ) -> impl Future<Output = Result<Vec<LocalizedTeacher>, CoreError>> + Send;

    fn get_teacher(
        &self,
        input: GetTeacherInput,
    ) -> impl Future<Output = Result<LocalizedTeacher, CoreError>> + Send;
}
