//! Number formatting for generated CSS text

/// Format a number the way a CSS template literal would print it.
///
/// Integral values print without a fraction (`100`, not `100.0`), other
/// values use the shortest representation that round-trips (`1.1`,
/// `23.561944901923447`). Negative zero prints as `0`.
pub fn css_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
