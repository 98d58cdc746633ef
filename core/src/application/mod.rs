use crate::{
    domain::common::{MealCheckConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        llm::LLMProvider,
        teacher::PostgresTeacherRepository,
    },
};

pub type MealCheckService = Service<PostgresTeacherRepository, LLMProvider>;

/// Connects the database, runs migrations and wires the configured LLM provider.
pub async fn create_service(config: MealCheckConfig) -> Result<MealCheckService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let teacher_repository = PostgresTeacherRepository::new(postgres.get_db());
    let llm_client = LLMProvider::from_config(&config.llm);

    tracing::info!(
        provider = ?config.llm.provider,
        model = %config.llm.model,
        "meal check service ready"
    );

    Ok(Service::new(
        teacher_repository,
        llm_client,
        config.verification,
    ))
}
