//! # Transport Providers Module
//!
//! This module contains the Transport Providers that can be used by
//! [`LineSdkClient`]. It is intended to be used by the [`line_sdk`] crate.
//!
//! [`LineSdkClient`]: ../dx/line_sdk_client/type.LineSdkClient.html
//! [`line_sdk`]: ../index.html

#[cfg(feature = "reqwest")]
pub use self::reqwest::TransportReqwest;
#[cfg(feature = "reqwest")]
pub mod reqwest;

#[cfg(all(feature = "reqwest", feature = "blocking"))]
pub use self::reqwest::blocking;

pub use middleware::LineSdkMiddleware;
pub mod middleware;
