pub mod csv;
pub mod text;
pub mod traits;

/// Parses one sample token. Missing-value markers (`nan`, `na`, `-`, empty) map to `NaN`;
/// anything else that is not a number yields `None`.
pub(crate) fn parse_sample(token: &str) -> Option<f64> {
    let token = token.trim();
    if token.is_empty()
        || token == "-"
        || token.eq_ignore_ascii_case("nan")
        || token.eq_ignore_ascii_case("na")
    {
        return Some(f64::NAN);
    }
    token.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sample_handles_numbers_and_missing_markers() {
        assert_eq!(parse_sample("1.5"), Some(1.5));
        assert_eq!(parse_sample(" -2e-3 "), Some(-2e-3));
        for marker in ["nan", "NaN", "NA", "-", "", "  "] {
            assert!(parse_sample(marker).unwrap().is_nan(), "marker {:?}", marker);
        }
        assert_eq!(parse_sample("energy"), None);
    }
}
