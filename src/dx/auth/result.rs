//! Auth results module.

use serde::Deserialize;

/// Result of the access token verification.
///
/// # Examples
/// ```
/// use line_sdk::{
///     core::Deserializer, dx::auth::AccessTokenVerifyResult,
///     providers::deserialization_serde::DeserializerSerde,
/// };
///
/// let body = br#"{"scope":"profile","client_id":"1440057261","expires_in":2591659}"#;
/// let result: AccessTokenVerifyResult = DeserializerSerde.deserialize(body)?;
///
/// assert_eq!(result.client_id, "1440057261");
/// assert_eq!(result.permissions(), vec!["profile"]);
/// # Ok::<(), line_sdk::core::LineSdkError>(())
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccessTokenVerifyResult {
    /// Channel ID for which the access token was issued.
    pub client_id: String,

    /// Number of seconds until the access token expires.
    pub expires_in: u64,

    /// Space separated permissions granted to the access token.
    pub scope: String,
}

impl AccessTokenVerifyResult {
    /// Permissions granted to the access token.
    pub fn permissions(&self) -> Vec<&str> {
        self.scope.split_whitespace().collect()
    }
}
