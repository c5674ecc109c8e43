//! User profile module.
//!
//! This module contains the `Get user profile` request descriptor.

use serde::Deserialize;

use crate::{
    core::{Deserializer, LineSdkError, Request, Transport, TransportMethod},
    dx::LineSdkClientInstance,
};

/// The [`GetUserProfileRequest`] describes retrieval of the profile which
/// belongs to the owner of the current access token.
///
/// The request is authenticated with the client's access token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetUserProfileRequest;

impl Request for GetUserProfileRequest {
    type Parameters = ();
    type Response = UserProfile;

    fn method(&self) -> TransportMethod {
        TransportMethod::Get
    }

    fn path(&self) -> &str {
        "/v2/profile"
    }
}

/// LINE user profile.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User ID.
    pub user_id: String,

    /// User's display name.
    pub display_name: String,

    /// Profile image URL.
    pub picture_url: Option<String>,

    /// User's status message.
    pub status_message: Option<String>,
}

impl<T, D> LineSdkClientInstance<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Retrieve profile of the current access token owner.
    ///
    /// Access token should be set with [`set_token`] or
    /// [`with_access_token`] beforehand.
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
    /// #         .with_access_token("<access token>")
    /// #         .build()?;
    /// let profile = client.profile().await?;
    /// println!("Hello, {}", profile.display_name);
    /// # Ok(())
    /// # }
    /// # #[cfg(not(feature = "reqwest"))]
    /// # fn main() {}
    /// ```
    ///
    /// [`set_token`]: LineSdkClientInstance::set_token
    /// [`with_access_token`]: crate::dx::LineSdkClientConfigBuilder::with_access_token
    pub async fn profile(&self) -> Result<UserProfile, LineSdkError> {
        self.send(GetUserProfileRequest).await
    }
}

#[cfg(feature = "blocking")]
impl<T, D> LineSdkClientInstance<T, D>
where
    T: crate::core::blocking::Transport,
    D: Deserializer,
{
    /// Retrieve profile of the current access token owner synchronously.
    pub fn profile_blocking(&self) -> Result<UserProfile, LineSdkError> {
        self.send_blocking(GetUserProfileRequest)
    }
}
