/// Extract the numbers of a whitespace separated `text`.
///
/// Each word is parsed on its own with `.` as decimal separator and no
/// grouping separators. Words that are not finite numbers are dropped.
///
/// # Examples
///
/// ```
/// # use calcengine::parse_values;
///
/// assert_eq!(parse_values("1 2.5\n-3\tfoo 1,000"), vec![1.0, 2.5, -3.0]);
/// ```
#[must_use]
pub fn parse_values(text: &str) -> Vec<f64> {
    text.split_whitespace()
        .filter_map(|word| match word.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                tracing::warn!(word, "ignoring invalid input");
                None
            }
        })
        .collect()
}
