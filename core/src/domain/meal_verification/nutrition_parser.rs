use std::sync::LazyLock;

use regex::Regex;

use crate::domain::meal_verification::entities::{NutrientMap, NutritionTable};

/// Optional "N." ordinal followed by a `**label**`.
static ITEM_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+\.\s*)?\*{2}(.+?)\*{2}").expect("item header pattern is valid")
});

/// Optional bullet, optionally bold key, ASCII or full-width colon, value.
static NUTRIENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-*]?\s*\*{0,2}([\w\x{0A80}-\x{0AFF}\s():]+)\*{0,2}\s*[:：]\s*(.+)")
        .expect("nutrient line pattern is valid")
});

/// Turns a nutrition narrative into a table. An empty table means nothing
/// usable was found and the caller may retry.
pub trait NutritionParser: Send + Sync {
    fn parse(&self, text: &str) -> NutritionTable;
}

/// Line scanner for markdown-ish narratives:
///
/// ```text
/// 1. **Poha**
///    - Calories: 250 kcal
///    - **Protein**: 5 g
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexNutritionParser;

impl RegexNutritionParser {
    pub fn new() -> Self {
        Self
    }
}

impl NutritionParser for RegexNutritionParser {
    fn parse(&self, text: &str) -> NutritionTable {
        let mut table = NutritionTable::new();
        let mut current: Option<String> = None;

        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if let Some(header) = ITEM_HEADER.captures(line) {
                let item = header[1].trim().to_string();
                // a repeated header starts over instead of merging
                table.insert(item.clone(), NutrientMap::new());
                current = Some(item);
                continue;
            }

            let Some(item) = current.as_ref() else {
                continue;
            };

            if let Some(nutrient) = NUTRIENT_LINE.captures(line) {
                let key = nutrient[1].trim().to_lowercase();
                if key.is_empty() {
                    continue;
                }
                let value = nutrient[2].trim().to_string();
                if let Some(nutrients) = table.get_mut(item) {
                    nutrients.insert(key, value);
                }
            }
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> NutritionTable {
        RegexNutritionParser::new().parse(text)
    }

    #[test]
    fn test_parses_plain_narrative() {
        let table = parse("**rice**\n- calories: 200 kcal\n- protein: 4g\n**sev**\n- calories: 150 kcal");

        assert_eq!(table.len(), 2);
        assert_eq!(table["rice"]["calories"], "200 kcal");
        assert_eq!(table["rice"]["protein"], "4g");
        assert_eq!(table["rice"].len(), 2);
        assert_eq!(table["sev"]["calories"], "150 kcal");
        assert_eq!(table["sev"].len(), 1);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["rice", "sev"]);
    }

    #[test]
    fn test_numbered_headers_and_bold_keys() {
        let text = "\
Here is the breakdown:

1. **Poha (flattened rice)**
   - **Calories**: ~250 kcal
   - **Protein**: 5 g
   * Fat: 7 g

2. **Sev**
   - Carbohydrates (carbs): 30 g";
        let table = parse(text);

        assert_eq!(table.len(), 2);
        let poha = &table["Poha (flattened rice)"];
        assert_eq!(poha["calories"], "~250 kcal");
        assert_eq!(poha["protein"], "5 g");
        assert_eq!(poha["fat"], "7 g");
        assert_eq!(table["Sev"]["carbohydrates (carbs)"], "30 g");
    }

    #[test]
    fn test_gujarati_with_full_width_colon() {
        let text = "**ભાત**\n- કેલરી： ૨૦૦ કિલોકેલરી\n- પ્રોટીન: ૪ ગ્રામ";
        let table = parse(text);

        assert_eq!(table["ભાત"]["કેલરી"], "૨૦૦ કિલોકેલરી");
        assert_eq!(table["ભાત"]["પ્રોટીન"], "૪ ગ્રામ");
    }

    #[test]
    fn test_header_without_nutrients_keeps_empty_entry() {
        let table = parse("**salad**\nsome prose without a colon\n**dal**\n- protein: 9 g");

        assert!(table["salad"].is_empty());
        assert_eq!(table["dal"]["protein"], "9 g");
    }

    #[test]
    fn test_repeated_header_resets_nutrients() {
        let table = parse("**rice**\n- calories: 200\n- fat: 1 g\n**rice**\n- protein: 4 g");

        assert_eq!(table.len(), 1);
        assert_eq!(table["rice"].len(), 1);
        assert_eq!(table["rice"]["protein"], "4 g");
    }

    #[test]
    fn test_lines_before_first_header_are_ignored() {
        let table = parse("calories: 999\n**roti**\n- calories: 80 kcal");

        assert_eq!(table.len(), 1);
        assert_eq!(table["roti"]["calories"], "80 kcal");
    }

    #[test]
    fn test_no_header_yields_empty_table() {
        assert!(parse("").is_empty());
        assert!(parse("Rice\n- calories: 200 kcal\nSev - 150 kcal").is_empty());
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let text = "1. **Khichdi**\n- calories: 300 kcal\n2. **Kadhi**\n- protein: 6 g";
        assert_eq!(parse(text), parse(text));
    }
}
