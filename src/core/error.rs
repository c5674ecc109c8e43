//! # Error types
//!
//! This module contains the error types for the [`line_sdk`] crate.
//!
//! [`line_sdk`]: ../index.html

use snafu::Snafu;

/// LINE SDK error type
///
/// This type is used to represent errors that can occur while preparing,
/// sending or processing requests to the [`LINE API`].
/// It is used as the error type for the [`Result`] type.
///
/// # Examples
/// ```
/// use line_sdk::core::LineSdkError;
///
/// fn foo() -> Result<(), LineSdkError> {
///   Ok(())
/// }
///
/// foo().map_err(|e| match e {
///   LineSdkError::Transport { .. } => println!("Transport error"),
///   LineSdkError::API { status, .. } => println!("Server responded with {status}"),
///   _ => println!("Other error"),
/// });
/// ```
///
/// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
#[derive(Snafu, Debug, Clone, PartialEq, Eq)]
pub enum LineSdkError {
    /// this error is returned when the transport layer fails
    #[snafu(display("Transport error: {details}"))]
    Transport {
        /// docs
        details: String,
    },

    /// this error is returned when request parameters can't be serialized
    #[snafu(display("Serialization error: {details}"))]
    Serialization {
        /// docs
        details: String,
    },

    /// this error is returned when the deserialization of the response fails
    #[snafu(display("Deserialization error: {details}"))]
    Deserialization {
        /// docs
        details: String,
    },

    /// this error is returned when the initialization of client fails
    #[snafu(display("Client initialization error: {details}"))]
    ClientInitialization {
        /// docs
        details: String,
    },

    /// this error is returned when a request requires credentials which the
    /// client doesn't have
    #[snafu(display("Authentication error: {details}"))]
    Authentication {
        /// docs
        details: String,
    },

    /// this error is returned when the server responds with a non-success
    /// status code
    #[snafu(display("API error ({status}): {message}"))]
    API {
        /// Operation status (HTTP) code.
        status: u16,

        /// Machine readable error code (OAuth2 `error` field), if any.
        error: Option<String>,

        /// A message explaining what went wrong.
        message: String,
    },
}
