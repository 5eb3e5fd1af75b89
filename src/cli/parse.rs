use campusnav_core::config::Algorithm;
use campusnav_core::format::OutputFormat;
use campusnav_core::model::LocationKind;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse location kind from string
pub fn parse_location_kind(s: &str) -> std::result::Result<LocationKind, String> {
    s.parse::<LocationKind>()
}

/// Parse a path enumeration bound; zero would stop before the first path
pub fn parse_max_paths(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json"), Ok(OutputFormat::Json));
        assert_eq!(parse_format("Human"), Ok(OutputFormat::Human));
        assert!(parse_format("yaml").unwrap_err().contains("unknown format"));
    }

    #[test]
    fn test_parse_max_paths_rejects_zero() {
        assert_eq!(parse_max_paths("3"), Ok(3));
        assert!(parse_max_paths("0").is_err());
        assert!(parse_max_paths("-1").is_err());
    }
}
