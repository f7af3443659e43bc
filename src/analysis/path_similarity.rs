use url::Url;

/// Extracts the path portion of a URL. Inputs that don't parse as absolute
/// URLs (bare paths, garbage) are treated as the path itself, so this never
/// fails.
fn path_of(input: &str) -> String {
    match Url::parse(input) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => input.to_string(),
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

fn is_numeric_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())
}

/// Structural similarity of two URL paths in [0.0, 1.0].
///
/// Numeric segments count as equal to each other: `/api/users/1` and
/// `/api/users/2` are the same endpoint with different record ids, which is
/// exactly the shape IDOR probing cares about. When the paths have different
/// segment counts only the common prefix length is compared, so a deep and a
/// shallow path that share structure don't score near zero on length alone.
pub fn path_similarity(url_a: &str, url_b: &str) -> f64 {
    let path_a = path_of(url_a);
    let path_b = path_of(url_b);

    let segs_a = segments(&path_a);
    let segs_b = segments(&path_b);

    if segs_a.is_empty() && segs_b.is_empty() {
        return 1.0;
    }

    let compared = segs_a.len().min(segs_b.len());
    if compared == 0 {
        return 0.0;
    }

    let matches = segs_a
        .iter()
        .zip(segs_b.iter())
        .filter(|(a, b)| a == b || (is_numeric_segment(a) && is_numeric_segment(b)))
        .count();

    matches as f64 / compared as f64
}
