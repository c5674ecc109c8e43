//! # Transport module
//!
//! This module contains the [`Transport`] trait and the [`TransportRequest`]
//! and [`TransportResponse`] types.
//!
//! You can implement this trait for your own types, or use one of the provided
//! features to use a transport library.
//!
//! [`LINE API`]: https://developers.line.biz/en/reference/line-login/

use super::{transport_response::TransportResponse, LineSdkError, TransportRequest};

/// This trait is used to send requests to the [`LINE API`].
///
/// You can implement this trait for your own types, or use one of the provided
/// features to use a transport library.
///
/// # Examples
/// ```
/// use line_sdk::core::{Transport, TransportRequest, TransportResponse, LineSdkError};
///
/// struct MyTransport;
///
/// #[async_trait::async_trait]
/// impl Transport for MyTransport {
///    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, LineSdkError> {
///         // Send your request here
///
///         Ok(TransportResponse::default())
///    }
/// }
/// ```
///
/// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send a request to the [`LINE API`].
    ///
    /// # Errors
    /// Should return an [`LineSdkError::Transport`] if the request cannot be
    /// sent.
    ///
    /// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, LineSdkError>;
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! # Blocking transport module
    //!
    //! This module contains the [`Transport`] trait used for blocking
    //! requests.
    //!
    //! [`LINE API`]: https://developers.line.biz/en/reference/line-login/

    use crate::core::{LineSdkError, TransportRequest, TransportResponse};

    /// This trait is used to send requests to the [`LINE API`].
    ///
    /// This trait is used for blocking requests.
    ///
    /// # Examples
    /// ```
    /// use line_sdk::core::{blocking::Transport, TransportRequest, TransportResponse, LineSdkError};
    ///
    /// struct MyTransport;
    ///
    /// impl Transport for MyTransport {
    ///    fn send(&self, req: TransportRequest) -> Result<TransportResponse, LineSdkError> {
    ///         // Send your request here
    ///
    ///         Ok(TransportResponse::default())
    ///    }
    /// }
    /// ```
    ///
    /// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
    pub trait Transport {
        /// Send a request to the [`LINE API`].
        ///
        /// # Errors
        /// Should return an [`LineSdkError::Transport`] if the request cannot
        /// be sent.
        ///
        /// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
        fn send(&self, req: TransportRequest) -> Result<TransportResponse, LineSdkError>;
    }
}
