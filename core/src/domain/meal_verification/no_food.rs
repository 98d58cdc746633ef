const STRIPPED_PUNCTUATION: [char; 7] = ['"', '\'', ',', '.', '?', '!', '।'];

const ENGLISH_FRAGMENTS: [&str; 5] = [
    "no food",
    "sorry",
    "not detect",
    "could not see",
    "unable to identify",
];

const GUJARATI_FRAGMENTS: [&str; 9] = [
    "માફ",
    "જાણ્યું નથી",
    "ઓળખી શકાતું નથી",
    "નથી ઓળખી",
    "ખોરાક નથી",
    "દેખાતા નથી",
    "નથી પડતો",
    "સ્પષ્ટ નથી",
    "કોઈ ખોરાક દેખાતો નથી",
];

/// Apology and refusal fragments that mark a detection reply as "no food".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoFoodKeywords {
    fragments: Vec<String>,
}

impl NoFoodKeywords {
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keywords = Self {
            fragments: Vec::new(),
        };
        keywords.extend(fragments);
        keywords
    }

    /// Adds fragments, lower-cased and stripped of the punctuation removed from
    /// replies; blanks and duplicates are skipped.
    pub fn extend<I, S>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for fragment in fragments {
            let fragment = fragment
                .into()
                .to_lowercase()
                .replace(STRIPPED_PUNCTUATION, "")
                .trim()
                .to_string();
            if !fragment.is_empty() && !self.fragments.contains(&fragment) {
                self.fragments.push(fragment);
            }
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Heuristic check on the normalized detection lines. An empty list
    /// counts as no food.
    pub fn looks_like_no_food<S: AsRef<str>>(&self, items: &[S]) -> bool {
        if items.is_empty() {
            return true;
        }

        let joined = items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ")
            .to_lowercase()
            .replace(STRIPPED_PUNCTUATION, "");

        self.fragments
            .iter()
            .any(|fragment| joined.contains(fragment.as_str()))
    }
}

impl Default for NoFoodKeywords {
    fn default() -> Self {
        Self::new(GUJARATI_FRAGMENTS.into_iter().chain(ENGLISH_FRAGMENTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_no_food() {
        assert!(NoFoodKeywords::default().looks_like_no_food::<&str>(&[]));
    }

    #[test]
    fn test_apology_is_no_food() {
        let keywords = NoFoodKeywords::default();
        assert!(keywords.looks_like_no_food(&["sorry, no food items are visible"]));
        assert!(keywords.looks_like_no_food(&["I'm Sorry.", "I could not see any dish!"]));
    }

    #[test]
    fn test_real_items_are_food() {
        assert!(!NoFoodKeywords::default().looks_like_no_food(&["rice", "bread"]));
    }

    #[test]
    fn test_gujarati_refusals() {
        let keywords = NoFoodKeywords::default();
        assert!(keywords.looks_like_no_food(&["માફ કરશો, છબી સ્પષ્ટ નથી।"]));
        assert!(keywords.looks_like_no_food(&["આ છબીમાં કોઈ ખોરાક દેખાતો નથી"]));
        assert!(!keywords.looks_like_no_food(&["ભાત", "દાળ", "૨ રોટલી"]));
    }

    #[test]
    fn test_punctuation_inside_fragment_is_ignored() {
        let keywords = NoFoodKeywords::default();
        assert!(keywords.looks_like_no_food(&["Unable to. identify, anything"]));
    }

    #[test]
    fn test_keywords_are_extensible() {
        let mut keywords = NoFoodKeywords::new(["no food"]);
        assert!(!keywords.looks_like_no_food(&["empty plate"]));

        keywords.extend(["Empty Plate", "  ", "no food"]);
        assert_eq!(keywords.fragments(), &["no food", "empty plate"]);
        assert!(keywords.looks_like_no_food(&["an empty plate"]));
    }

    #[test]
    fn test_extended_keywords_ignore_punctuation() {
        let mut keywords = NoFoodKeywords::default();
        keywords.extend(["Can't identify", "?!"]);

        assert!(keywords.fragments().contains(&"cant identify".to_string()));
        assert!(!keywords.fragments().iter().any(String::is_empty));
        assert!(keywords.looks_like_no_food(&["I can't identify any dish here"]));
    }
}
