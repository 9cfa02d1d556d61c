use strsim::levenshtein;

/// Edit-distance similarity between two strings, in `[0, 1]`.
///
/// `1 - levenshtein(a, b) / max(len(a), len(b))`, compared case-insensitively
/// with lengths counted in characters. Two empty strings are identical; one
/// empty string against a non-empty one scores 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if len_a == 0 && len_b == 0 {
        return 1.0;
    }
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let distance = levenshtein(&a, &b);
    1.0 - distance as f64 / len_a.max(len_b) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings() {
        let sim = similarity("hopeless pursuit", "hopeless pursuit");
        assert!(
            (sim - 1.0).abs() < 1e-9,
            "identical strings should have similarity 1.0, got {}",
            sim
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(similarity("Hopeless", "hOPELESS"), 1.0);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("abc", ""), 0.0);
        assert_eq!(similarity("", "abc"), 0.0);
    }

    #[test]
    fn symmetric() {
        let pairs = [("kitten", "sitting"), ("flaw", "lawn"), ("a", "abcd")];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "{} vs {}", a, b);
        }
    }

    #[test]
    fn known_similarity() {
        // kitten -> sitting takes 3 edits over 7 characters
        let sim = similarity("kitten", "sitting");
        assert!((sim - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn single_typo_clears_fuzzy_threshold() {
        assert!(similarity("hopeles pursuit", "hopeless pursuit") >= 0.72);
        assert!(similarity("xyz", "hopeless pursuit") < 0.72);
    }
}
