//! # LINE SDK Core
//!
//! Core functionality of the LINE SDK client.
//!
//! This module contains the building blocks shared by every request: request
//! descriptors, transport abstraction, response pipeline and deserialization.
//! It is intended to be used by the [`line_sdk`] crate.
//!
//! [`line_sdk`]: ../index.html

#[doc(inline)]
pub use error::LineSdkError;
pub mod error;

#[doc(inline)]
pub use error_response::APIErrorBody;
pub mod error_response;

#[doc(inline)]
pub use transport::Transport;
pub mod transport;

#[cfg(feature = "blocking")]
#[doc(inline)]
pub use transport::blocking;

#[doc(inline)]
pub use transport_request::{TransportMethod, TransportRequest};
pub mod transport_request;

#[doc(inline)]
pub use transport_response::TransportResponse;
pub mod transport_response;

#[doc(inline)]
pub use deserializer::Deserializer;
pub mod deserializer;

#[doc(inline)]
pub use request::{build_transport_request, AuthenticateMethod, ContentType, Request};
pub mod request;

#[doc(inline)]
pub use pipeline::{DataTransformRedirector, RedirectAction, ResponsePipeline, ResponseRedirector};
pub mod pipeline;

#[doc(inline)]
pub use types::Unit;
pub mod types;

pub(crate) mod utils;
