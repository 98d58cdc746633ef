use uuid::Uuid;

use crate::domain::common::language::Language;

#[derive(Debug, Clone)]
pub struct CreateTeacherInput {
    pub username_en: String,
    pub username_gu: String,
    pub school_en: String,
    pub school_gu: String,
    pub location_en: String,
    pub location_gu: String,
}

#[derive(Debug, Clone, Copy)]
pub struct GetTeachersInput {
    pub language: Language,
}

#[derive(Debug, Clone, Copy)]
pub struct GetTeacherInput {
    pub language: Language,
    pub teacher_id: Uuid,
}
