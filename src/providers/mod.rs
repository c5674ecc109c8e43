//! # Providers module
//!
//! This module contains the Providers that can be used by [`LineSdkClient`].
//! It is intended to be used by the [`line_sdk`] crate.
//!
//! [`LineSdkClient`]: ../dx/line_sdk_client/type.LineSdkClient.html
//! [`line_sdk`]: ../index.html

pub mod deserialization_serde;
