//! # LINE SDK Developer Experience
//!
//! This module provides structures and methods for the [LINE API].
//! It is intended to be used by the [`line_sdk`] crate.
//!
//! [`line_sdk`]: ../index.html
//! [LINE API]: https://developers.line.biz/en/reference/line-login/

pub mod auth;

#[doc(inline)]
pub use profile::{GetUserProfileRequest, UserProfile};
pub mod profile;

#[cfg(feature = "reqwest")]
pub use line_sdk_client::LineSdkClient;

#[cfg(all(feature = "reqwest", feature = "blocking"))]
pub use line_sdk_client::LineSdkBlockingClient;

pub use line_sdk_client::{
    LineSdkClientBuilder, LineSdkClientChannelBuilder, LineSdkClientConfigBuilder,
    LineSdkClientDeserializerBuilder, LineSdkClientInstance, LineSdkClientRef, LineSdkConfig,
    LineSdkGenericClient,
};
pub mod line_sdk_client;
