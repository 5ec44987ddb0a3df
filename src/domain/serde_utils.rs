//! Serde utilities for tolerant payload decoding.
//!
//! The backend serializes some database integers as native numbers and some
//! as numeric strings depending on which query produced them. These helpers
//! normalize both forms to one semantic type.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

/// Module to handle fields that arrive as either an integer or a numeric string.
pub mod int_or_string {
    use super::{Deserializer, Serializer, Visitor, de, fmt};

    /// Serializes an i64 as a native number.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(*value)
    }

    /// Deserializes an i64 from a number or a numeric string, preferring the
    /// numeric form and falling back to string parsing.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither an integer nor a parseable
    /// numeric string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IntOrStringVisitor;

        impl Visitor<'_> for IntOrStringVisitor {
            type Value = i64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a numeric string")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value).map_err(de::Error::custom)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.trim().parse::<i64>().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(IntOrStringVisitor)
    }

    /// Module to handle optional integer-or-string fields.
    pub mod option {
        use super::{Deserializer, Serializer, Visitor, de, fmt};

        /// Serializes an optional i64 as a native number.
        ///
        /// # Errors
        ///
        /// Returns an error if the serializer fails.
        pub fn serialize<S>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(v) => super::serialize(v, serializer),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional i64 from a number, a numeric string, or null.
        ///
        /// # Errors
        ///
        /// Returns an error if deserialization fails.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct OptionVisitor;

            impl<'de> Visitor<'de> for OptionVisitor {
                type Value = Option<i64>;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("an optional integer or numeric string")
                }

                fn visit_none<E>(self) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(None)
                }

                fn visit_unit<E>(self) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(None)
                }

                fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    super::deserialize(deserializer).map(Some)
                }
            }

            deserializer.deserialize_option(OptionVisitor)
        }
    }
}

/// Module to handle string fields the backend sometimes emits as integers
/// (release years in particular).
pub mod string_or_int {
    use super::{Deserializer, Visitor, de, fmt};

    /// Deserializes a string from a string or an integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrIntVisitor;

        impl Visitor<'_> for StringOrIntVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or an integer")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }
        }

        deserializer.deserialize_any(StringOrIntVisitor)
    }

    /// Module to handle optional string-or-integer fields.
    pub mod option {
        use super::{Deserializer, Visitor, de, fmt};

        /// Deserializes an optional string from a string, an integer, or null.
        ///
        /// # Errors
        ///
        /// Returns an error if deserialization fails.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct OptionVisitor;

            impl<'de> Visitor<'de> for OptionVisitor {
                type Value = Option<String>;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("an optional string or integer")
                }

                fn visit_none<E>(self) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(None)
                }

                fn visit_unit<E>(self) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(None)
                }

                fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    super::deserialize(deserializer).map(Some)
                }
            }

            deserializer.deserialize_option(OptionVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Counter {
        #[serde(default, with = "super::int_or_string::option")]
        count: Option<i64>,
    }

    #[test]
    fn test_int_or_string_accepts_native_number() {
        let counter: Counter = serde_json::from_str(r#"{"count": 3}"#).unwrap();
        assert_eq!(counter.count, Some(3));
    }

    #[test]
    fn test_int_or_string_accepts_numeric_string() {
        let counter: Counter = serde_json::from_str(r#"{"count": "17"}"#).unwrap();
        assert_eq!(counter.count, Some(17));
    }

    #[test]
    fn test_int_or_string_null_and_missing_are_none() {
        let counter: Counter = serde_json::from_str(r#"{"count": null}"#).unwrap();
        assert_eq!(counter.count, None);

        let counter: Counter = serde_json::from_str("{}").unwrap();
        assert_eq!(counter.count, None);
    }

    #[test]
    fn test_int_or_string_rejects_garbage() {
        let result: Result<Counter, _> = serde_json::from_str(r#"{"count": "many"}"#);
        assert!(result.is_err());
    }

    #[derive(Deserialize)]
    struct Release {
        #[serde(default, deserialize_with = "super::string_or_int::option::deserialize")]
        year: Option<String>,
    }

    #[test]
    fn test_string_or_int_normalizes_integer_year() {
        let release: Release = serde_json::from_str(r#"{"year": 2003}"#).unwrap();
        assert_eq!(release.year.as_deref(), Some("2003"));

        let release: Release = serde_json::from_str(r#"{"year": "2003"}"#).unwrap();
        assert_eq!(release.year.as_deref(), Some("2003"));
    }
}
