use tracing::{debug, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    meal_verification::{
        entities::{MenuVerification, NutritionTable},
        matcher::match_menu,
        normalizer::normalize_lines,
        ports::{LLMClient, MealVerificationService},
        prompts::{food_list_request, nutrition_request},
        value_objects::{MenuList, VerifyMenuInput},
    },
    teacher::ports::TeacherRepository,
};

impl<TR, LLM> Service<TR, LLM>
where
    TR: TeacherRepository,
    LLM: LLMClient,
{
    /// Parsing is deterministic, so repeating it only matters if a parser
    /// implementation is not. The attempts stay bounded either way.
    fn parse_nutrition(&self, text: &str) -> NutritionTable {
        let attempts = self.verification.max_parse_attempts.max(1);

        for attempt in 1..=attempts {
            let table = self.nutrition_parser.parse(text);
            if !table.is_empty() {
                return table;
            }
            debug!(attempt, attempts, "nutrition reply produced no items");
        }

        NutritionTable::new()
    }
}

impl<TR, LLM> MealVerificationService for Service<TR, LLM>
where
    TR: TeacherRepository,
    LLM: LLMClient,
{
    async fn verify_menu(&self, input: VerifyMenuInput) -> Result<MenuVerification, CoreError> {
        // 1. Validate input before any external call
        let menu = MenuList::new(&input.menu)?;

        if input.image.is_empty() {
            return Err(CoreError::InvalidInput(
                "Missing 'image' parameter".to_string(),
            ));
        }

        let config = &self.verification;
        let profile = config.profile(input.profile);

        // 2. Build both prompts
        let food_request =
            food_list_request(input.language, input.image.clone(), config.food_max_tokens);
        let nutrition_request =
            nutrition_request(input.language, input.image, config.nutrition_max_tokens);

        // 3. Ask for the food list and the nutrition narrative at the same time
        let (food_reply, nutrition_reply) = tokio::try_join!(
            self.llm_client.generate(food_request),
            self.llm_client.generate(nutrition_request.clone()),
        )?;

        // 4. Reject plates without food
        let detected_items = normalize_lines(&food_reply);
        if config.no_food_keywords.looks_like_no_food(&detected_items) {
            info!(
                language = %input.language,
                "detection reply does not describe any food"
            );
            return Err(CoreError::NoFoodDetected(input.language));
        }

        // 5. Reconcile with the planned menu
        let matched = match_menu(&menu, &detected_items, profile.threshold, config.strategy);
        debug!(
            found = matched.found.len(),
            missing = matched.missing.len(),
            threshold = profile.threshold,
            "menu reconciled"
        );

        // 6. Extract nutrition, regenerating the narrative once if needed
        let mut nutritions = self.parse_nutrition(&nutrition_reply);

        if nutritions.is_empty() {
            warn!("nutrition reply had no parsable items, requesting it again");
            let regenerated = self.llm_client.generate(nutrition_request).await?;
            nutritions = self.parse_nutrition(&regenerated);
        }

        if nutritions.is_empty() {
            warn!("nutrition info could not be extracted after regeneration");
            return Err(CoreError::NutritionUnavailable);
        }

        Ok(MenuVerification {
            detected_items,
            input_menu: menu.into_inner(),
            found_items: matched.found,
            missing_items: matched.missing,
            nutritions,
        })
    }
}
