//! Scalar values produced by field accessors.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

/// The natural scalar form of a single record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Int(i64),
    Text(String),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Optional text, mapping `None` to `Null`.
    pub fn text(value: Option<&str>) -> Self {
        value.map_or(FieldValue::Null, |s| FieldValue::Text(s.to_string()))
    }

    pub fn date(value: Option<NaiveDate>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Date)
    }
}

/// Null renders as the empty string; dates as ISO-8601, timestamps as RFC 3339.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::Timestamp(ts) => {
                f.write_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn display_null_is_empty() {
        assert_eq!(FieldValue::Null.to_string(), "");
        assert!(FieldValue::text(None).is_null());
        assert!(FieldValue::date(None).is_null());
    }

    #[test]
    fn display_scalars() {
        assert_eq!(FieldValue::Int(42).to_string(), "42");
        assert_eq!(FieldValue::Text("a, b".into()).to_string(), "a, b");
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(FieldValue::Date(d).to_string(), "2024-01-05");
        let ts = Utc.with_ymd_and_hms(2024, 1, 5, 8, 0, 0).unwrap();
        assert_eq!(FieldValue::Timestamp(ts).to_string(), "2024-01-05T08:00:00Z");
    }

    #[test]
    fn serializes_untagged() {
        let values = vec![
            FieldValue::Null,
            FieldValue::Int(1),
            FieldValue::Text("x".into()),
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,1,"x","2024-01-05"]"#);
    }
}
