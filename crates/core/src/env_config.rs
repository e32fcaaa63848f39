//! Environment variable parsing with warn-level logging for invalid values.

/// Parse a raw environment value with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub(crate) fn parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_value() {
        let result: u32 = parse_with_default("WORKERS", Some("42".to_owned()), 10);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_parse_invalid_value() {
        let result: u32 = parse_with_default("WORKERS", Some("banana".to_owned()), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_parse_missing_value() {
        let result: u32 = parse_with_default("WORKERS", None, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_parse_empty_value_falls_back() {
        let result: u16 = parse_with_default("PORT", Some(String::new()), 8080);
        assert_eq!(result, 8080);
    }

    #[test]
    fn test_parse_out_of_range_port_falls_back() {
        let result: u16 = parse_with_default("PORT", Some("70000".to_owned()), 8080);
        assert_eq!(result, 8080);
    }
}
