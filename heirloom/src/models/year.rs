//! Lenient year handling.
//!
//! Year fields come from user-entered metadata and older archive exports, so
//! they may hold numbers, numeric strings, blanks or free text. Anything that
//! does not parse as an integer year is treated as absent.

use serde::{Deserialize, Deserializer, de::IgnoredAny};

/// Parse a year-like string, returning `None` for blank or non-numeric input.
pub fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i32>().ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Integer(i64),
    Float(f64),
    Text(String),
    Unknown(IgnoredAny),
}

/// `deserialize_with` helper for optional year fields.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawYear>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(RawYear::Unknown(_)) => None,
        Some(RawYear::Integer(value)) => i32::try_from(value).ok(),
        Some(RawYear::Float(value)) => {
            if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
                Some(value as i32)
            } else {
                None
            }
        }
        Some(RawYear::Text(text)) => parse_year(&text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "lenient")]
        year: Option<i32>,
    }

    fn year_of(json: &str) -> Option<i32> {
        serde_json::from_str::<Holder>(json).unwrap().year
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("1986"), Some(1986));
        assert_eq!(parse_year(" 1960 "), Some(1960));
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("circa 1950"), None);
        assert_eq!(parse_year("19x6"), None);
    }

    #[test]
    fn test_lenient_deserialization() {
        assert_eq!(year_of(r#"{"year": 1986}"#), Some(1986));
        assert_eq!(year_of(r#"{"year": "1986"}"#), Some(1986));
        assert_eq!(year_of(r#"{"year": 1986.0}"#), Some(1986));
        assert_eq!(year_of(r#"{"year": "unknown"}"#), None);
        assert_eq!(year_of(r#"{"year": ""}"#), None);
        assert_eq!(year_of(r#"{"year": null}"#), None);
        assert_eq!(year_of(r#"{"year": true}"#), None);
        assert_eq!(year_of(r#"{}"#), None);
    }
}
