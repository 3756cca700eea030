use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that distinguishes "never appeared" from "appeared but empty".
///
/// Pair with `#[serde(default, skip_serializing_if = "Field::is_unset")]` on the
/// containing struct: `Unset` omits the key, `Null` writes `null`, `Value`
/// writes the inner value. Deserialising reverses the mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
    #[default]
    Unset,
    Null,
    Value(T),
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl Field<String> {
    /// Empty text becomes an explicit null, anything else a concrete value
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() { Field::Null } else { Field::Value(text.to_string()) }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Field::Value(v) => v.serialize(serializer),
            // Unset is normally skipped by the container; if it is not, null is the
            // closest representation.
            Field::Null | Field::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Field::Value(v),
            None => Field::Null,
        })
    }
}
