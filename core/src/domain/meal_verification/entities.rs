use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Nutrient name (lower-cased) to free text value, in narrative order.
pub type NutrientMap = IndexMap<String, String>;

/// Item header to its nutrients, in narrative order.
pub type NutritionTable = IndexMap<String, NutrientMap>;

/// Partition of a menu into served and missing items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

/// Outcome of a successful menu verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuVerification {
    pub detected_items: Vec<String>,
    pub input_menu: Vec<String>,
    pub found_items: Vec<String>,
    pub missing_items: Vec<String>,
    pub nutritions: NutritionTable,
}
