const CODE_FENCE: &str = "```";

/// Splits a generated reply into candidate item names.
///
/// Blank lines and code fence markers are dropped, and the bullet hyphens
/// around each line are stripped.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(CODE_FENCE))
        .map(|line| {
            line.trim_start_matches('•')
                .trim_matches(|c: char| c == '-' || c == ' ')
                .trim()
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
