//! Revoke refresh token module.
//!
//! This module contains the `Revoke refresh token` request descriptor.

use serde::Serialize;

use crate::{
    core::{AuthenticateMethod, ContentType, Request, ResponsePipeline, TransportMethod, Unit},
    dx::auth::{revoke_token::empty_body_as_object, REVOKE_PATH},
};

/// The [`PostRevokeRefreshTokenRequest`] describes invalidation of a refresh
/// token together with access tokens issued with it.
///
/// Shares endpoint with [`PostRevokeTokenRequest`].
///
/// [`PostRevokeTokenRequest`]: crate::dx::auth::PostRevokeTokenRequest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRevokeRefreshTokenRequest {
    /// Channel ID of LINE Login channel which issued the token.
    pub channel_id: String,

    /// Refresh token which should be revoked.
    pub refresh_token: String,
}

/// Form parameters of [`PostRevokeRefreshTokenRequest`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RevokeRefreshTokenParameters {
    /// Channel ID.
    pub client_id: String,

    /// Refresh token to revoke.
    pub refresh_token: String,
}

impl PostRevokeRefreshTokenRequest {
    /// Create revoke refresh token request.
    pub fn new<C, R>(channel_id: C, refresh_token: R) -> Self
    where
        C: Into<String>,
        R: Into<String>,
    {
        Self {
            channel_id: channel_id.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl Request for PostRevokeRefreshTokenRequest {
    type Parameters = RevokeRefreshTokenParameters;
    type Response = Unit;

    fn method(&self) -> TransportMethod {
        TransportMethod::Post
    }

    fn path(&self) -> &str {
        REVOKE_PATH
    }

    fn content_type(&self) -> ContentType {
        ContentType::FormUrlEncoded
    }

    fn authenticate(&self) -> AuthenticateMethod {
        AuthenticateMethod::None
    }

    fn parameters(&self) -> Option<Self::Parameters> {
        Some(RevokeRefreshTokenParameters {
            client_id: self.channel_id.clone(),
            refresh_token: self.refresh_token.clone(),
        })
    }

    fn prefix_pipeline(&self) -> Option<ResponsePipeline> {
        Some(empty_body_as_object())
    }
}
