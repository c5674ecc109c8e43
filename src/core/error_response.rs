//! # Error response
//!
//! The module contains a result type that represents parsed service error
//! responses for [`LineSdkError`] consumption.

use crate::core::LineSdkError;

/// LINE service error response.
///
/// `APIErrorBody` enum variants covers the error body shapes returned by the
/// [`LINE API`] endpoints used by this crate.
///
/// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum APIErrorBody {
    /// Error response of the OAuth2 endpoints.
    ///
    /// # Example
    /// ```json
    /// {
    ///     "error": "invalid_request",
    ///     "error_description": "access_token invalid"
    /// }
    /// ```
    AsOAuthError {
        /// Machine readable error code.
        error: String,

        /// A message explaining what went wrong.
        error_description: Option<String>,
    },

    /// Error response of the regular REST endpoints.
    ///
    /// # Example
    /// ```json
    /// {
    ///     "message": "The access token expired"
    /// }
    /// ```
    AsObjectWithMessage {
        /// A message explaining what went wrong.
        message: String,
    },
}

impl APIErrorBody {
    /// Convert parsed body into [`LineSdkError::API`] for specific `status`.
    pub fn into_error(self, status: u16) -> LineSdkError {
        match self {
            APIErrorBody::AsOAuthError {
                error,
                error_description,
            } => LineSdkError::API {
                status,
                message: error_description.unwrap_or_else(|| error.clone()),
                error: Some(error),
            },
            APIErrorBody::AsObjectWithMessage { message } => LineSdkError::API {
                status,
                error: None,
                message,
            },
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn parse_oauth_error() {
        let body: APIErrorBody = serde_json::from_str(
            r#"{"error":"invalid_request","error_description":"access_token invalid"}"#,
        )
        .unwrap();

        assert_eq!(
            body.into_error(400),
            LineSdkError::API {
                status: 400,
                error: Some("invalid_request".into()),
                message: "access_token invalid".into(),
            }
        );
    }

    #[test]
    fn use_error_code_when_description_missing() {
        let body: APIErrorBody = serde_json::from_str(r#"{"error":"invalid_client"}"#).unwrap();

        assert_eq!(
            body.into_error(401),
            LineSdkError::API {
                status: 401,
                error: Some("invalid_client".into()),
                message: "invalid_client".into(),
            }
        );
    }

    #[test]
    fn parse_message_error() {
        let body: APIErrorBody =
            serde_json::from_str(r#"{"message":"The access token expired"}"#).unwrap();

        assert_eq!(
            body.into_error(401),
            LineSdkError::API {
                status: 401,
                error: None,
                message: "The access token expired".into(),
            }
        );
    }
}
