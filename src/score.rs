/// Case-insensitive similarity score, 100 for an exact match.
///
/// Goes negative once the edit distance exceeds 100.
pub fn title_score(query: &str, candidate: &str) -> i32 {
    let distance = strsim::levenshtein(&query.to_lowercase(), &candidate.to_lowercase());
    100 - i32::try_from(distance).unwrap_or(i32::MAX - 100)
}
