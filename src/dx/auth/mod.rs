//! Auth module.
//!
//! Manage OAuth2 tokens issued by LINE Login.
//! This module contains request descriptors for token revocation and
//! verification, and [`LineSdkClient`] methods which send them.
//!
//! [`LineSdkClient`]: crate::LineSdkClient

#[doc(inline)]
pub use revoke_token::{PostRevokeTokenRequest, RevokeTokenParameters};
pub mod revoke_token;

#[doc(inline)]
pub use revoke_refresh_token::{PostRevokeRefreshTokenRequest, RevokeRefreshTokenParameters};
pub mod revoke_refresh_token;

#[doc(inline)]
pub use verify_token::{GetVerifyTokenRequest, VerifyTokenParameters};
pub mod verify_token;

#[doc(inline)]
pub use result::AccessTokenVerifyResult;
pub mod result;

use crate::{
    core::{Deserializer, LineSdkError, Transport, Unit},
    dx::LineSdkClientInstance,
};

/// Token revocation endpoint.
pub(crate) const REVOKE_PATH: &str = "/oauth2/v2.1/revoke";

impl<T, D> LineSdkClientInstance<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Revoke access token issued for the client's channel.
    ///
    /// # Example
    /// ```no_run
    /// use line_sdk::LineSdkClientBuilder;
    ///
    /// # #[cfg(feature = "reqwest")]
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = // LineSdkClient
    /// #     LineSdkClientBuilder::with_reqwest_transport()
    /// #         .with_channel_id("1234567890")
    /// #         .build()?;
    /// client.revoke_access_token("<access token>").await?;
    /// # Ok(())
    /// # }
    /// # #[cfg(not(feature = "reqwest"))]
    /// # fn main() {}
    /// ```
    pub async fn revoke_access_token<S>(&self, access_token: S) -> Result<Unit, LineSdkError>
    where
        S: Into<String>,
    {
        self.send(PostRevokeTokenRequest::new(
            self.channel_id(),
            access_token,
        ))
        .await
    }

    /// Revoke refresh token issued for the client's channel.
    pub async fn revoke_refresh_token<S>(&self, refresh_token: S) -> Result<Unit, LineSdkError>
    where
        S: Into<String>,
    {
        self.send(PostRevokeRefreshTokenRequest::new(
            self.channel_id(),
            refresh_token,
        ))
        .await
    }

    /// Verify access token.
    ///
    /// # Example
    /// ```no_run
    /// use line_sdk::LineSdkClientBuilder;
    ///
    /// # #[cfg(feature = "reqwest")]
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = // LineSdkClient
    /// #     LineSdkClientBuilder::with_reqwest_transport()
    /// #         .with_channel_id("1234567890")
    /// #         .build()?;
    /// let result = client.verify_access_token("<access token>").await?;
    /// println!("expires in {} seconds", result.expires_in);
    /// # Ok(())
    /// # }
    /// # #[cfg(not(feature = "reqwest"))]
    /// # fn main() {}
    /// ```
    pub async fn verify_access_token<S>(
        &self,
        access_token: S,
    ) -> Result<AccessTokenVerifyResult, LineSdkError>
    where
        S: Into<String>,
    {
        self.send(GetVerifyTokenRequest::new(access_token)).await
    }
}

#[cfg(feature = "blocking")]
impl<T, D> LineSdkClientInstance<T, D>
where
    T: crate::core::blocking::Transport,
    D: Deserializer,
{
    /// Revoke access token issued for the client's channel synchronously.
    ///
    /// # Example
    /// ```no_run
    /// use line_sdk::LineSdkClientBuilder;
    ///
    /// # #[cfg(feature = "reqwest")]
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = // LineSdkBlockingClient
    /// #     LineSdkClientBuilder::with_reqwest_blocking_transport()
    /// #         .with_channel_id("1234567890")
    /// #         .build()?;
    /// client.revoke_access_token_blocking("<access token>")?;
    /// # Ok(())
    /// # }
    /// # #[cfg(not(feature = "reqwest"))]
    /// # fn main() {}
    /// ```
    pub fn revoke_access_token_blocking<S>(&self, access_token: S) -> Result<Unit, LineSdkError>
    where
        S: Into<String>,
    {
        self.send_blocking(PostRevokeTokenRequest::new(
            self.channel_id(),
            access_token,
        ))
    }

    /// Revoke refresh token issued for the client's channel synchronously.
    pub fn revoke_refresh_token_blocking<S>(&self, refresh_token: S) -> Result<Unit, LineSdkError>
    where
        S: Into<String>,
    {
        self.send_blocking(PostRevokeRefreshTokenRequest::new(
            self.channel_id(),
            refresh_token,
        ))
    }

    /// Verify access token synchronously.
    pub fn verify_access_token_blocking<S>(
        &self,
        access_token: S,
    ) -> Result<AccessTokenVerifyResult, LineSdkError>
    where
        S: Into<String>,
    {
        self.send_blocking(GetVerifyTokenRequest::new(access_token))
    }
}
