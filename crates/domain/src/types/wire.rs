//! Lenient decoders for loosely typed wire scalars
//!
//! The PHP backend is inconsistent about scalar shapes: ids come back as
//! JSON strings or integers depending on the endpoint, and boolean flags
//! sometimes arrive as `"1"`/`"0"` strings. Each decoder here tries the
//! expected shape first and falls back to the alternative explicitly.

use serde::{Deserialize, Deserializer};

/// Decodes a server-assigned id from either a JSON string or an integer,
/// normalized to a string.
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Text(s) => Ok(s),
        Raw::Number(n) => Ok(n.to_string()),
    }
}

/// Decodes an optional boolean that may arrive as a bool, an integer, or a
/// `"1"`/`"0"`/`"true"` string. Absent and null both decode to `None`.
pub fn opt_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Number(i64),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Flag(b) => b,
        Raw::Number(n) => n != 0,
        Raw::Text(s) => s == "1" || s.eq_ignore_ascii_case("true"),
    }))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct IdHolder {
        #[serde(deserialize_with = "super::id_string")]
        id: String,
    }

    #[derive(Deserialize)]
    struct FlagHolder {
        #[serde(default, deserialize_with = "super::opt_flag")]
        is_active: Option<bool>,
    }

    #[test]
    fn id_decodes_from_string() {
        let h: IdHolder = serde_json::from_str(r#"{"id":"42"}"#).unwrap();
        assert_eq!(h.id, "42");
    }

    #[test]
    fn id_decodes_from_integer() {
        let h: IdHolder = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(h.id, "42");
    }

    #[test]
    fn id_rejects_other_shapes() {
        assert!(serde_json::from_str::<IdHolder>(r#"{"id":[1]}"#).is_err());
        assert!(serde_json::from_str::<IdHolder>(r#"{"id":null}"#).is_err());
    }

    #[test]
    fn flag_decodes_every_backend_shape() {
        for (raw, expected) in [
            (r#"{"is_active":true}"#, Some(true)),
            (r#"{"is_active":false}"#, Some(false)),
            (r#"{"is_active":"1"}"#, Some(true)),
            (r#"{"is_active":"0"}"#, Some(false)),
            (r#"{"is_active":"true"}"#, Some(true)),
            (r#"{"is_active":1}"#, Some(true)),
            (r#"{"is_active":null}"#, None),
            (r#"{}"#, None),
        ] {
            let h: FlagHolder = serde_json::from_str(raw).unwrap();
            assert_eq!(h.is_active, expected, "input: {raw}");
        }
    }
}
