// src/utils/id.rs

//! Lenient integer fields for request bodies.
//!
//! Browser forms post `"3"` where API clients post `3`; both are accepted.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

impl NumberOrString {
    fn into_i64<E: de::Error>(self) -> Result<i64, E> {
        match self {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected an integer, got {:?}", s))),
        }
    }
}

/// Required integer given as a JSON number or a numeric string.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_i64()
}

/// Optional variant; `null` and an absent key both yield `None`.
/// Pair with `#[serde(default)]` so a missing key is accepted.
pub fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(NumberOrString::into_i64)
        .transpose()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::lenient_i64")]
        id: i64,
        #[serde(default, deserialize_with = "super::lenient_opt_i64")]
        extra: Option<i64>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let p: Probe = serde_json::from_str(r#"{"id": 4, "extra": "7"}"#).unwrap();
        assert_eq!(p.id, 4);
        assert_eq!(p.extra, Some(7));

        let p: Probe = serde_json::from_str(r#"{"id": " 12 "}"#).unwrap();
        assert_eq!(p.id, 12);
        assert_eq!(p.extra, None);
    }

    #[test]
    fn null_optional_is_none() {
        let p: Probe = serde_json::from_str(r#"{"id": 1, "extra": null}"#).unwrap();
        assert_eq!(p.extra, None);
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(serde_json::from_str::<Probe>(r#"{"id": "science"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"id": 1, "extra": true}"#).is_err());
    }
}
