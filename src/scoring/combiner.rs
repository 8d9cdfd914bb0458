//! Blending of semantic and keyword scores.

/// Combine a semantic similarity and a keyword overlap into a match score.
///
/// Both inputs are treated as fractions in `[0, 1]` (out-of-range values are
/// clamped) and the result is their simple average on a percentage scale:
/// `(semantic * 100 + keyword * 100) / 2`.
///
/// # Arguments
///
/// * `semantic` - Semantic similarity of the raw texts
/// * `keyword` - Keyword overlap of the normalized token sets
///
/// # Examples
///
/// ```
/// use resume_ranker::scoring::combiner::combine;
///
/// assert_eq!(combine(1.0, 1.0), 100.0);
/// assert_eq!(combine(0.1, 0.0), 5.0);
/// ```
pub fn combine(semantic: f64, keyword: f64) -> f64 {
    let semantic = clamp_unit(semantic);
    let keyword = clamp_unit(keyword);

    (semantic * 100.0 + keyword * 100.0) / 2.0
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_bounds() {
        assert_eq!(combine(0.0, 0.0), 0.0);
        assert_eq!(combine(1.0, 1.0), 100.0);
    }

    #[test]
    fn test_combine_is_simple_average() {
        assert_eq!(combine(0.5, 0.25), 37.5);
        assert_eq!(combine(0.0, 1.0), 50.0);
        assert_eq!(combine(0.8, 0.0), combine(0.0, 0.8));
    }

    #[test]
    fn test_combine_clamps_inputs() {
        assert_eq!(combine(-1.0, 2.0), 50.0);
        assert_eq!(combine(f64::NAN, 1.0), 50.0);
    }
}
