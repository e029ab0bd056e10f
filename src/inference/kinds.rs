//! JSON value kinds and their mapping onto property kinds

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::value::RawValue;

use crate::models::PropertyKind;

/// Kind of a raw JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonValueKind {
    Object,
    Array,
    String,
    Number,
    True,
    False,
    Null,
}

impl JsonValueKind {
    /// Determine the kind of an already validated raw JSON value
    pub fn of(raw: &RawValue) -> Self {
        match raw.get().trim_start().as_bytes().first() {
            Some(b'{') => JsonValueKind::Object,
            Some(b'[') => JsonValueKind::Array,
            Some(b'"') => JsonValueKind::String,
            Some(b't') => JsonValueKind::True,
            Some(b'f') => JsonValueKind::False,
            Some(b'n') => JsonValueKind::Null,
            _ => JsonValueKind::Number,
        }
    }

    /// Property kind for scalar values; objects and arrays need the walk
    pub fn scalar_kind(self) -> Option<PropertyKind> {
        match self {
            JsonValueKind::String => Some(PropertyKind::String),
            JsonValueKind::Number => Some(PropertyKind::Decimal),
            JsonValueKind::True | JsonValueKind::False => Some(PropertyKind::Bool),
            JsonValueKind::Null => Some(PropertyKind::Null),
            JsonValueKind::Object | JsonValueKind::Array => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            JsonValueKind::Object => "object",
            JsonValueKind::Array => "array",
            JsonValueKind::String => "string",
            JsonValueKind::Number => "number",
            JsonValueKind::True => "true",
            JsonValueKind::False => "false",
            JsonValueKind::Null => "null",
        }
    }
}

/// Members of a JSON object in document order, values kept as raw text
///
/// Duplicate keys are preserved.
pub(crate) struct Members(pub(crate) Vec<(String, Box<RawValue>)>);

impl<'de> Deserialize<'de> for Members {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = Members;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Members, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Box<RawValue>>()? {
                    members.push(entry);
                }
                Ok(Members(members))
            }
        }

        deserializer.deserialize_map(MembersVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> Box<RawValue> {
        RawValue::from_string(json.to_string()).unwrap()
    }

    #[test]
    fn test_kind_of_each_value() {
        let cases = [
            ("{\"a\":1}", JsonValueKind::Object),
            ("[1,2]", JsonValueKind::Array),
            ("\"text\"", JsonValueKind::String),
            ("10", JsonValueKind::Number),
            ("-1.5e3", JsonValueKind::Number),
            ("true", JsonValueKind::True),
            ("false", JsonValueKind::False),
            ("null", JsonValueKind::Null),
        ];
        for (json, kind) in cases {
            assert_eq!(JsonValueKind::of(&raw(json)), kind, "{json}");
        }
    }

    #[test]
    fn test_scalar_kind_mapping() {
        assert_eq!(
            JsonValueKind::String.scalar_kind(),
            Some(PropertyKind::String)
        );
        assert_eq!(
            JsonValueKind::Number.scalar_kind(),
            Some(PropertyKind::Decimal)
        );
        assert_eq!(JsonValueKind::True.scalar_kind(), Some(PropertyKind::Bool));
        assert_eq!(JsonValueKind::False.scalar_kind(), Some(PropertyKind::Bool));
        assert_eq!(JsonValueKind::Null.scalar_kind(), Some(PropertyKind::Null));
        assert_eq!(JsonValueKind::Object.scalar_kind(), None);
        assert_eq!(JsonValueKind::Array.scalar_kind(), None);
    }

    #[test]
    fn test_members_keep_order_and_duplicates() {
        let Members(members) =
            serde_json::from_str(r#"{"z": 1, "a": {"x": {}}, "z": "again"}"#).unwrap();
        let keys: Vec<&str> = members.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "z"]);
        assert_eq!(members[1].1.get(), r#"{"x": {}}"#);
    }
}
