use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    meal_verification::ports::LLMClient,
    teacher::{
        entities::{LocalizedTeacher, Teacher, TeacherConfig},
        ports::{TeacherRepository, TeacherService},
        value_objects::{CreateTeacherInput, GetTeacherInput, GetTeachersInput},
    },
};

impl<TR, LLM> TeacherService for Service<TR, LLM>
where
    TR: TeacherRepository,
    LLM: LLMClient,
{
    async fn create_teacher(&self, input: CreateTeacherInput) -> Result<Teacher, CoreError> {
        let teacher = Teacher::new(TeacherConfig {
            username_en: input.username_en,
            username_gu: input.username_gu,
            school_en: input.school_en,
            school_gu: input.school_gu,
            location_en: input.location_en,
            location_gu: input.location_gu,
        });

        let teacher = self.teacher_repository.create_teacher(teacher).await?;
        info!(teacher_id = %teacher.id, "teacher created");

        Ok(teacher)
    }

    async fn get_teachers(
        &self,
        input: GetTeachersInput,
    ) -> Result<Vec<LocalizedTeacher>, CoreError> {
        let teachers = self.teacher_repository.list_teachers().await?;

        Ok(teachers
            .iter()
            .map(|teacher| teacher.localized(input.language))
            .collect())
    }

    async fn get_teacher(&self, input: GetTeacherInput) -> Result<LocalizedTeacher, CoreError> {
        self.teacher_repository
            .get_teacher_by_id(input.teacher_id)
            .await?
            .map(|teacher| teacher.localized(input.language))
            .ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::language::Language,
        meal_verification::{ports::MockLLMClient, value_objects::VerificationConfig},
        teacher::ports::MockTeacherRepository,
    };

    fn input() -> CreateTeacherInput {
        CreateTeacherInput {
            username_en: "Ravi Shah".to_string(),
            username_gu: "રવિ શાહ".to_string(),
            school_en: "Model School".to_string(),
            school_gu: "મોડેલ શાળા".to_string(),
            location_en: "Surat".to_string(),
            location_gu: "સુરત".to_string(),
        }
    }

    fn teacher() -> Teacher {
        let input = input();
        Teacher::new(TeacherConfig {
            username_en: input.username_en,
            username_gu: input.username_gu,
            school_en: input.school_en,
            school_gu: input.school_gu,
            location_en: input.location_en,
            location_gu: input.location_gu,
        })
    }

    fn service(repository: MockTeacherRepository) -> Service<MockTeacherRepository, MockLLMClient> {
        Service::new(repository, MockLLMClient::new(), VerificationConfig::default())
    }

    #[tokio::test]
    async fn test_create_teacher_persists_all_fields() {
        let mut repository = MockTeacherRepository::new();
        repository
            .expect_create_teacher()
            .withf(|teacher| {
                teacher.username_en == "Ravi Shah"
                    && teacher.username_gu == "રવિ શાહ"
                    && teacher.location_gu == "સુરત"
            })
            .times(1)
            .returning(|teacher| Box::pin(async move { Ok(teacher) }));

        let created = service(repository).create_teacher(input()).await.unwrap();

        assert_eq!(created.school_en, "Model School");
        assert_eq!(created.school_gu, "મોડેલ શાળા");
    }

    #[tokio::test]
    async fn test_create_teacher_propagates_storage_failure() {
        let mut repository = MockTeacherRepository::new();
        repository
            .expect_create_teacher()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let result = service(repository).create_teacher(input()).await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_get_teachers_localizes_every_record() {
        let stored = vec![teacher(), teacher()];
        let expected_ids: Vec<Uuid> = stored.iter().map(|t| t.id).collect();

        let mut repository = MockTeacherRepository::new();
        repository.expect_list_teachers().times(1).returning(move || {
            let stored = stored.clone();
            Box::pin(async move { Ok(stored) })
        });

        let teachers = service(repository)
            .get_teachers(GetTeachersInput {
                language: Language::Gu,
            })
            .await
            .unwrap();

        assert_eq!(teachers.len(), 2);
        assert_eq!(
            teachers.iter().map(|t| t.id).collect::<Vec<_>>(),
            expected_ids
        );
        assert!(teachers.iter().all(|t| t.username == "રવિ શાહ"));
    }

    #[tokio::test]
    async fn test_get_teacher_returns_localized_record() {
        let stored = teacher();
        let id = stored.id;

        let mut repository = MockTeacherRepository::new();
        repository
            .expect_get_teacher_by_id()
            .withf(move |requested| *requested == id)
            .returning(move |_| {
                let stored = stored.clone();
                Box::pin(async move { Ok(Some(stored)) })
            });

        let teacher = service(repository)
            .get_teacher(GetTeacherInput {
                language: Language::En,
                teacher_id: id,
            })
            .await
            .unwrap();

        assert_eq!(teacher.id, id);
        assert_eq!(teacher.school, "Model School");
        assert_eq!(teacher.location, "Surat");
    }

    #[tokio::test]
    async fn test_get_unknown_teacher_is_not_found() {
        let mut repository = MockTeacherRepository::new();
        repository
            .expect_get_teacher_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(repository)
            .get_teacher(GetTeacherInput {
                language: Language::En,
                teacher_id: Uuid::new_v4(),
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }
}
