use crate::domain::meal_verification::{
    entities::MatchResult,
    value_objects::{MatchStrategy, MenuList},
};

impl MatchStrategy {
    /// Similarity of two strings on a 0-100 scale.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        match self {
            MatchStrategy::Fuzzy => partial_ratio(a, b),
            MatchStrategy::Contains => contains_score(a, b),
        }
    }
}

/// Marks each menu entry as found on the first detected item scoring at or
/// above `threshold`. Scanning stops at the first hit, so this is not a best
/// match search.
pub fn match_menu(
    menu: &MenuList,
    detected: &[String],
    threshold: u8,
    strategy: MatchStrategy,
) -> MatchResult {
    let threshold = f64::from(threshold);

    let found: Vec<String> = menu
        .items()
        .iter()
        .filter(|item| {
            detected
                .iter()
                .any(|candidate| strategy.score(item, candidate) >= threshold)
        })
        .cloned()
        .collect();

    let missing = menu
        .items()
        .iter()
        .filter(|item| !found.contains(item))
        .cloned()
        .collect();

    MatchResult { found, missing }
}

/// Best indel similarity between the shorter string and any equally long
/// window of the longer one, including the partial windows hanging over
/// either end. Case insensitive, compared per Unicode scalar value.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let (m, n) = (short.len(), long.len());

    let mut best: f64 = 0.0;

    for start in 0..=n - m {
        best = best.max(ratio(&short, &long[start..start + m]));
        if best >= 100.0 {
            return 100.0;
        }
    }

    for end in 1..m {
        best = best.max(ratio(&short, &long[..end]));
    }

    for start in (n - m + 1)..n {
        best = best.max(ratio(&short, &long[start..]));
    }

    best
}

fn contains_score(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a.contains(&b) || b.contains(&a) {
        100.0
    } else {
        0.0
    }
}

fn ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }

    200.0 * longest_common_subsequence(a, b) as f64 / total as f64
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];

    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(items: &[&str]) -> MenuList {
        MenuList::new(items).unwrap()
    }

    fn detected(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partial_ratio_substring_scores_full() {
        assert_eq!(partial_ratio("rice", "boiled rice"), 100.0);
        assert_eq!(partial_ratio("Plain SEV", "sev"), 100.0);
    }

    #[test]
    fn test_partial_ratio_bounds() {
        assert_eq!(partial_ratio("", ""), 100.0);
        assert_eq!(partial_ratio("rice", ""), 0.0);
        assert_eq!(partial_ratio("dal", "rice"), 0.0);
    }

    #[test]
    fn test_partial_ratio_near_match() {
        // best window is "da" or "al": 2 * 2 / 5
        assert_eq!(partial_ratio("dal", "daal"), 80.0);
    }

    #[test]
    fn test_partial_ratio_gujarati() {
        assert_eq!(partial_ratio("ભાત", "બાફેલા ભાત"), 100.0);
    }

    #[test]
    fn test_match_example_from_plate() {
        let result = match_menu(
            &menu(&["rice", "sev"]),
            &detected(&["boiled rice", "plain sev", "salt"]),
            50,
            MatchStrategy::Fuzzy,
        );
        assert_eq!(result.found, vec!["rice", "sev"]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_match_is_a_partition_in_menu_order() {
        let menu = menu(&["dal", "rice", "roti", "sev"]);
        let result = match_menu(
            &menu,
            &detected(&["sev", "steamed rice"]),
            85,
            MatchStrategy::Fuzzy,
        );
        assert_eq!(result.found, vec!["rice", "sev"]);
        assert_eq!(result.missing, vec!["dal", "roti"]);

        for item in menu.items() {
            let in_found = result.found.contains(item);
            let in_missing = result.missing.contains(item);
            assert!(in_found ^ in_missing, "{item} must be in exactly one side");
        }
    }

    #[test]
    fn test_raising_threshold_never_grows_found() {
        let menu = menu(&["poha", "sev", "jalebi", "chutney"]);
        let detected = detected(&["pohe", "sev mix", "jilebi", "green chatni"]);

        let mut previous: Option<Vec<String>> = None;
        for threshold in (0..=100).step_by(5) {
            let found = match_menu(&menu, &detected, threshold, MatchStrategy::Fuzzy).found;
            if let Some(previous) = &previous {
                assert!(found.iter().all(|item| previous.contains(item)));
            }
            previous = Some(found);
        }
    }

    #[test]
    fn test_threshold_controls_strictness() {
        let menu = menu(&["dal"]);
        let detected = detected(&["daal"]);

        let strict = match_menu(&menu, &detected, 85, MatchStrategy::Fuzzy);
        let lenient = match_menu(&menu, &detected, 50, MatchStrategy::Fuzzy);

        assert_eq!(strict.missing, vec!["dal"]);
        assert_eq!(lenient.found, vec!["dal"]);
    }

    #[test]
    fn test_contains_strategy_is_binary() {
        let menu = menu(&["rice", "poha"]);
        let result = match_menu(
            &menu,
            &detected(&["Jeera Rice", "pohe"]),
            1,
            MatchStrategy::Contains,
        );
        assert_eq!(result.found, vec!["rice"]);
        assert_eq!(result.missing, vec!["poha"]);
    }

    #[test]
    fn test_no_detected_items_means_all_missing() {
        let result = match_menu(&menu(&["rice"]), &[], 0, MatchStrategy::Fuzzy);
        assert!(result.found.is_empty());
        assert_eq!(result.missing, vec!["rice"]);
    }
}
