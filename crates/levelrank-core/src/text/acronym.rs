//! Acronym construction and ordered-subsequence matching

/// First character of every whitespace-separated word, uppercased.
pub fn generate_acronym(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// True when `letters` appears, in order, inside `acronym`.
///
/// The letters need not be contiguous: `"HP"` matches `"HPRVNPG"`, while
/// `"PH"` does not.
pub fn matches_acronym_query(acronym: &str, letters: &str) -> bool {
    if letters.is_empty() {
        return false;
    }

    let mut remaining = acronym.chars().flat_map(char::to_uppercase);
    letters
        .chars()
        .flat_map(char::to_uppercase)
        .all(|wanted| remaining.any(|c| c == wanted))
}
