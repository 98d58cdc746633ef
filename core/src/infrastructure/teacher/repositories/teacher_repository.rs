use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        teacher::{entities::Teacher, ports::TeacherRepository},
    },
    entity::teachers::{ActiveModel, Column, Entity},
};

#[derive(Debug)]
pub struct PostgresTeacherRepository {
    pub db: DatabaseConnection,
}

impl PostgresTeacherRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TeacherRepository for PostgresTeacherRepository {
    async fn create_teacher(&self, teacher: Teacher) -> Result<Teacher, CoreError> {
        let active_model = ActiveModel {
            id: Set(teacher.id),
            username_en: Set(teacher.username_en),
            username_gu: Set(teacher.username_gu),
            school_en: Set(teacher.school_en),
            school_gu: Set(teacher.school_gu),
            location_en: Set(teacher.location_en),
            location_gu: Set(teacher.location_gu),
            created_at: Set(teacher.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create teacher: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Teacher::from(created))
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>, CoreError> {
        let teachers = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list teachers: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(teachers.into_iter().map(Teacher::from).collect())
    }

    async fn get_teacher_by_id(&self, id: Uuid) -> Result<Option<Teacher>, CoreError> {
        let teacher = Entity::find_by_id(id).one(&self.db).await.map_err(|e| {
            error!("Failed to get teacher by id: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(teacher.map(Teacher::from))
    }
}
