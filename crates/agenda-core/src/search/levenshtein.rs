//! Levenshtein edit distance.

/// Compute the Levenshtein edit distance between two strings.
///
/// Substitution, insertion and deletion each cost one. Characters are
/// compared as-is, so callers that want case-insensitive distances must
/// lower-case both inputs first.
///
/// Only two rows of the dynamic-programming table are kept alive, sized by
/// the length of `a`.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=a_chars.len()).collect();
    let mut curr = vec![0usize; a_chars.len() + 1];

    for (i, b_char) in b_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, a_char) in a_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr[j + 1] = (prev[j] + cost) // substitution
                .min(curr[j] + 1) // insertion
                .min(prev[j + 1] + 1); // deletion
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_cost_the_other_length() {
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
        assert_eq!(distance("", ""), 0);
    }

    #[test]
    fn identical_strings_have_zero_distance() {
        for value in ["a", "python", "Kubernetes Deep Dive", "über"] {
            assert_eq!(distance(value, value), 0);
        }
    }

    #[test]
    fn single_edits() {
        assert_eq!(distance("kitten", "sitten"), 1);
        assert_eq!(distance("cat", "cats"), 1);
        assert_eq!(distance("cats", "cat"), 1);
        assert_eq!(distance("python", "pythom"), 1);
    }

    #[test]
    fn classic_examples() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("kuberenetes", "kubernetes"), 1);
    }

    #[test]
    fn distance_is_bounded_by_longer_input() {
        let pairs = [
            ("abc", "xyz"),
            ("short", "a much longer string"),
            ("xyz123", "database systems"),
            ("", "nonempty"),
        ];
        for (a, b) in pairs {
            let bound = a.chars().count().max(b.chars().count());
            assert!(distance(a, b) <= bound, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn compares_characters_not_bytes() {
        assert_eq!(distance("é", "e"), 1);
        assert_eq!(distance("naïve", "naive"), 1);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(distance("Python", "python"), 1);
    }
}
