//! "Did you mean?" lookups over a list of candidate strings.

use crate::cs::dynamic::edit_distance::levenshtein_distance;

/// Maximum edit distance for a suggestion to be considered close enough.
///
/// Short names (length <= 4) allow one edit, longer names allow two.
pub fn max_edit_distance(name_len: usize) -> usize {
    if name_len <= 4 {
        1
    } else {
        2
    }
}

/// Edit distance from `query` to every candidate, in candidate order.
///
/// Runs on the rayon thread pool when the `parallel` feature is enabled.
#[cfg(feature = "parallel")]
pub fn distances<S: AsRef<str> + Sync>(query: &str, candidates: &[S]) -> Vec<usize> {
    use rayon::prelude::*;

    candidates
        .par_iter()
        .map(|candidate| levenshtein_distance(query, candidate.as_ref()))
        .collect()
}

/// Edit distance from `query` to every candidate, in candidate order.
#[cfg(not(feature = "parallel"))]
pub fn distances<S: AsRef<str> + Sync>(query: &str, candidates: &[S]) -> Vec<usize> {
    candidates
        .iter()
        .map(|candidate| levenshtein_distance(query, candidate.as_ref()))
        .collect()
}

/// Returns the candidate closest to `query`, if any is within
/// [`max_edit_distance`] of it. Ties keep the earliest candidate.
///
/// # Examples
///
/// ```
/// use levenshtein::cs::string::closest_match;
///
/// let names = ["apple", "maple", "banana"];
/// assert_eq!(closest_match("appel", &names), Some("apple"));
/// assert_eq!(closest_match("cherry", &names), None);
/// ```
pub fn closest_match<'a, S: AsRef<str> + Sync>(
    query: &str,
    candidates: &'a [S],
) -> Option<&'a str> {
    let limit = max_edit_distance(query.chars().count());

    distances(query, candidates)
        .into_iter()
        .enumerate()
        .filter(|&(_, distance)| distance <= limit)
        .min_by_key(|&(index, distance)| (distance, index))
        .map(|(index, _)| candidates[index].as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert_eq!(max_edit_distance(0), 1);
        assert_eq!(max_edit_distance(4), 1);
        assert_eq!(max_edit_distance(5), 2);
    }

    #[test]
    fn test_distances_in_order() {
        let candidates = vec![String::from("apple"), String::from("papple"), String::new()];
        assert_eq!(distances("apple", &candidates), vec![0, 1, 5]);
    }

    #[test]
    fn test_closest_match() {
        let names = ["string", "strong", "spring"];
        assert_eq!(closest_match("strng", &names), Some("string"));
        assert_eq!(closest_match("sprung", &names), Some("spring"));
    }

    #[test]
    fn test_ties_keep_first() {
        let names = ["bat", "cat"];
        assert_eq!(closest_match("hat", &names), Some("bat"));
    }

    #[test]
    fn test_short_names_are_strict() {
        let names = ["map"];
        assert_eq!(closest_match("mop", &names), Some("map"));
        assert_eq!(closest_match("mug", &names), None);
    }

    #[test]
    fn test_no_candidates() {
        let names: [&str; 0] = [];
        assert_eq!(closest_match("anything", &names), None);
    }
}
