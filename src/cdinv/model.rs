use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One CD in the inventory.
///
/// The serialized keys keep the column names shown in the inventory table so a
/// data file stays readable once decompressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ID", deserialize_with = "coerce_id")]
    pub id: i64,
    #[serde(rename = "CD Title")]
    pub title: String,
    #[serde(rename = "Artist")]
    pub artist: String,
}

impl Record {
    pub fn new(id: i64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
        }
    }
}

impl fmt::Display for Record {
    /// Table row layout: `ID<TAB>Title (by:Artist)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} (by:{})", self.id, self.title, self.artist)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

/// 2^63, the first float past `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Loaded IDs are coerced to integers: whole numbers pass through, floats are
/// truncated and numeric strings are parsed after trimming. Anything that does
/// not fit an `i64` is an error rather than a clamped value.
fn coerce_id<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Int(n) => Ok(n),
        RawId::Float(f) if (-I64_BOUND..I64_BOUND).contains(&f) => Ok(f.trunc() as i64),
        RawId::Float(f) => Err(de::Error::custom(format!("ID {} is out of range", f))),
        RawId::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("ID {:?} is not an integer", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_table_row() {
        let record = Record::new(1, "Abbey Road", "The Beatles");
        assert_eq!(record.to_string(), "1\tAbbey Road (by:The Beatles)");
    }

    #[test]
    fn serializes_with_column_names() {
        let record = Record::new(3, "Blue", "Joni Mitchell");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"ID":3,"CD Title":"Blue","Artist":"Joni Mitchell"}"#
        );
    }

    #[test]
    fn coerces_string_id() {
        let json = r#"{"ID":" 7 ","CD Title":"Kind of Blue","Artist":"Miles Davis"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.title, "Kind of Blue");
    }

    #[test]
    fn truncates_float_id() {
        let json = r#"{"ID":4.0,"CD Title":"Horses","Artist":"Patti Smith"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 4);
    }

    #[test]
    fn truncates_fractional_float_id() {
        let json = r#"{"ID":-2.9,"CD Title":"Horses","Artist":"Patti Smith"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, -2);
    }

    #[test]
    fn rejects_ids_beyond_i64() {
        for id in ["18446744073709551615", "9223372036854775808", "1e300", "-1e19"] {
            let json = format!(r#"{{"ID":{},"CD Title":"Horses","Artist":"Patti Smith"}}"#, id);
            let err = serde_json::from_str::<Record>(&json).unwrap_err();
            assert!(err.to_string().contains("out of range"), "{id}: {err}");
        }
    }

    #[test]
    fn keeps_i64_extremes() {
        let json = r#"{"ID":-9223372036854775808,"CD Title":"Horses","Artist":"Patti Smith"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, i64::MIN);
    }

    #[test]
    fn rejects_non_numeric_id() {
        let json = r#"{"ID":"four","CD Title":"Horses","Artist":"Patti Smith"}"#;
        let err = serde_json::from_str::<Record>(json).unwrap_err();
        assert!(err.to_string().contains("not an integer"));
    }
}
