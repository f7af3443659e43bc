use std::collections::HashSet;

/// Lexical overlap of two response bodies in [0.0, 1.0].
///
/// Jaccard index over lowercased whitespace-split word sets. Identical
/// strings short-circuit to 1.0; an empty side short-circuits to 0.0 since
/// an absent body carries no signal to compare against.
pub fn content_similarity(body_a: &str, body_b: &str) -> f64 {
    if body_a == body_b {
        return 1.0;
    }
    if body_a.is_empty() || body_b.is_empty() {
        return 0.0;
    }

    let lower_a = body_a.to_lowercase();
    let lower_b = body_b.to_lowercase();
    let words_a: HashSet<&str> = lower_a.split_whitespace().collect();
    let words_b: HashSet<&str> = lower_b.split_whitespace().collect();

    let union = words_a.union(&words_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = words_a.intersection(&words_b).count();

    intersection as f64 / union as f64
}
