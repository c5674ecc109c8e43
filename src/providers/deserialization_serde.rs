//! Serde implementation for LINE SDK [`Deserializer`] trait.
//!
//! This module provides a `serde` deserializer for the [`LINE API`] JSON
//! responses.
//!
//! # Examples
//! ```
//! use line_sdk::{core::Deserializer as _, providers::deserialization_serde::DeserializerSerde};
//!
//! #[derive(serde::Deserialize, Debug, PartialEq)]
//! struct Foo {
//!    bar: String,
//! }
//!
//! let foo: Foo = DeserializerSerde.deserialize(b"{\"bar\":\"baz\"}").unwrap();
//! assert_eq!(foo, Foo { bar: "baz".to_string() });
//! ```
//!
//! [`Deserializer`]: ../../core/deserializer/trait.Deserializer.html
//! [`LINE API`]: https://developers.line.biz/en/reference/line-login/

use crate::core::{Deserializer, LineSdkError};

/// Serde implementation for LINE SDK [`Deserializer`] trait.
///
/// This struct implements the [`Deserializer`] trait for the [`serde`] crate.
/// It is used by the client to deserialize the data returned by the
/// [`LINE API`].
///
/// [`Deserializer`]: ../../core/deserializer/trait.Deserializer.html
/// [`serde`]: https://crates.io/crates/serde
/// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
#[derive(Debug, Clone, Copy, Default)]
pub struct DeserializerSerde;

impl Deserializer for DeserializerSerde {
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, LineSdkError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        serde_json::from_slice(bytes).map_err(|e| LineSdkError::Deserialization {
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::core::Unit;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Foo {
        bar: String,
    }

    #[test]
    fn deserialize() {
        let sut = DeserializerSerde;

        let result: Foo = sut.deserialize(&Vec::from("{\"bar\":\"baz\"}")).unwrap();

        assert_eq!(
            result,
            Foo {
                bar: "baz".to_string()
            }
        );
    }

    #[test]
    fn deserialize_unit_from_empty_object() {
        let result: Unit = DeserializerSerde.deserialize(b"{}").unwrap();

        assert_eq!(result, Unit {});
    }

    #[test]
    fn deserialize_unit_ignoring_fields() {
        let result: Result<Unit, _> = DeserializerSerde.deserialize(br#"{"message":"ok"}"#);

        assert!(result.is_ok());
    }

    #[test]
    fn fail_unit_from_empty_body() {
        let result: Result<Unit, _> = DeserializerSerde.deserialize(b"");

        assert!(matches!(
            result,
            Err(LineSdkError::Deserialization { .. })
        ));
    }
}
