//! Tri-state field wrapper for partial updates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field in a PATCH body: absent, explicitly `null`, or set to a value.
///
/// Plain `Option<T>` cannot distinguish a field that was omitted from one
/// sent as `null`; `Patch<T>` keeps the three states apart so "leave
/// untouched" and "clear" never get conflated. Fields of this type must be
/// tagged `#[serde(default)]` so omission maps to [`Patch::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Field not present in the body; leave the stored value untouched.
    #[default]
    Absent,
    /// Field present as JSON `null`.
    Null,
    /// Field present with a value.
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|opt| match opt {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(v) => serializer.serialize_some(v),
            Self::Null | Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        name: Patch<String>,
        #[serde(default)]
        age: Patch<u32>,
    }

    #[test]
    fn omitted_field_is_absent() {
        let body: Body = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.name, Patch::Absent);
        assert_eq!(body.age, Patch::Absent);
    }

    #[test]
    fn null_field_is_null() {
        let body: Body = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(body.name, Patch::Null);
        assert_eq!(body.age, Patch::Absent);
    }

    #[test]
    fn value_field_is_value() {
        let body: Body = serde_json::from_str(r#"{"name": "Ada", "age": 36}"#).unwrap();
        assert_eq!(body.name, Patch::Value("Ada".to_string()));
        assert_eq!(body.age, Patch::Value(36));
    }
}
