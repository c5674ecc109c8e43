//! # LINE SDK middleware
//!
//! This module contains the [`LineSdkMiddleware`] transport wrapper which
//! decorates every outgoing request with SDK-wide headers before it is
//! passed to the actual transport.

use crate::{
    core::{
        utils::headers::USER_AGENT, LineSdkError, Transport, TransportRequest, TransportResponse,
    },
    dx::line_sdk_client::{SDK_ID, VERSION},
};

/// Transport wrapper which adds SDK identification headers.
#[derive(Debug, Clone)]
pub struct LineSdkMiddleware<T> {
    /// Wrapped transport.
    pub(crate) transport: T,

    /// Value of the `User-Agent` header.
    pub(crate) user_agent: String,
}

impl<T> LineSdkMiddleware<T> {
    /// Wrap `transport` with default SDK headers.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            user_agent: format!("{SDK_ID}/{VERSION}"),
        }
    }

    fn prepare_request(&self, mut req: TransportRequest) -> TransportRequest {
        req.headers
            .entry(USER_AGENT.into())
            .or_insert_with(|| self.user_agent.clone());
        req
    }
}

#[async_trait::async_trait]
impl<T> Transport for LineSdkMiddleware<T>
where
    T: Transport + Sync + Send,
{
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, LineSdkError> {
        self.transport.send(self.prepare_request(req)).await
    }
}

#[cfg(feature = "blocking")]
impl<T> crate::core::blocking::Transport for LineSdkMiddleware<T>
where
    T: crate::core::blocking::Transport,
{
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, LineSdkError> {
        self.transport.send(self.prepare_request(req))
    }
}
