//! Closest-name suggestions for misspelled wave identifiers.

/// Find the closest candidate by Levenshtein distance, ignoring case.
///
/// Returns `None` if the best distance exceeds half the longer string, or
/// if the input already equals a candidate ignoring case.
pub(crate) fn fuzzy_match<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let input_lower = input.to_lowercase();

    let (name, dist) = candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein(&input_lower, &candidate.to_lowercase())))
        .min_by_key(|&(_, dist)| dist)?;

    let max_len = input.chars().count().max(name.chars().count());
    (dist > 0 && dist <= max_len / 2).then_some(name)
}

/// Levenshtein edit distance between two strings.
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
