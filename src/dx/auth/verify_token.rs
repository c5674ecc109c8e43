//! Verify access token module.
//!
//! This module contains the `Verify access token` request descriptor.

use serde::Serialize;

use crate::{
    core::{AuthenticateMethod, ContentType, Request, TransportMethod},
    dx::auth::AccessTokenVerifyResult,
};

/// The [`GetVerifyTokenRequest`] describes validity check of an access token.
///
/// Result contains the channel for which the token has been issued, its
/// remaining lifetime and granted scopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetVerifyTokenRequest {
    /// Access token which should be verified.
    pub access_token: String,
}

/// Query parameters of [`GetVerifyTokenRequest`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VerifyTokenParameters {
    /// Access token to verify.
    pub access_token: String,
}

impl GetVerifyTokenRequest {
    /// Create verify access token request.
    pub fn new<S>(access_token: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            access_token: access_token.into(),
        }
    }
}

impl Request for GetVerifyTokenRequest {
    type Parameters = VerifyTokenParameters;
    type Response = AccessTokenVerifyResult;

    fn method(&self) -> TransportMethod {
        TransportMethod::Get
    }

    fn path(&self) -> &str {
        "/oauth2/v2.1/verify"
    }

    fn content_type(&self) -> ContentType {
        ContentType::None
    }

    fn authenticate(&self) -> AuthenticateMethod {
        AuthenticateMethod::None
    }

    fn parameters(&self) -> Option<Self::Parameters> {
        Some(VerifyTokenParameters {
            access_token: self.access_token.clone(),
        })
    }
}
