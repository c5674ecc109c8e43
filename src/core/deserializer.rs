//! Deserialization of Rust data structures.
//!
//! This module contains the `Deserializer` trait which is used to implement
//! deserialization of the [`LINE API`] responses.
//!
//! [`LINE API`]: https://developers.line.biz/en/reference/line-login/

use super::LineSdkError;

/// Trait for deserializing Rust data structures.
///
/// It is used by the client to turn the processed response body into the
/// request's declared response type.
///
/// To implement this trait, you must provide a `deserialize` method that
/// takes a `&[u8]` and returns a `Result<T, LineSdkError>`.
///
/// # Examples
/// ```
/// use line_sdk::core::{Deserializer, LineSdkError};
///
/// struct MyDeserializer;
///
/// impl Deserializer for MyDeserializer {
///    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, LineSdkError>
///    where
///        T: for<'de> serde::Deserialize<'de>,
///    {
///         // ...
///         # unimplemented!()
///    }
/// }
/// ```
pub trait Deserializer: Send + Sync {
    /// Deserialize a `&[u8]` into a `Result<T, LineSdkError>`.
    ///
    /// # Errors
    /// Should return [`LineSdkError::Deserialization`] if `bytes` can't be
    /// decoded into `T`.
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, LineSdkError>
    where
        T: for<'de> serde::Deserialize<'de>;
}
