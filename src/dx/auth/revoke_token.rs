//! Revoke access token module.
//!
//! This module contains the `Revoke access token` request descriptor.

use serde::Serialize;

use crate::{
    core::{
        AuthenticateMethod, ContentType, DataTransformRedirector, Request, ResponsePipeline,
        TransportMethod, Unit,
    },
    dx::auth::REVOKE_PATH,
};

/// The [`PostRevokeTokenRequest`] describes invalidation of an access token
/// issued for a LINE Login channel.
///
/// The endpoint is called without credentials and replies with an empty body
/// or `{}` on success.
///
/// This struct is used by the [`revoke_access_token`] method of the
/// [`LineSdkClient`].
///
/// # Examples
/// ```
/// use line_sdk::{
///     core::{Request, TransportMethod},
///     dx::auth::PostRevokeTokenRequest,
/// };
///
/// let request = PostRevokeTokenRequest::new("1234", "tok-abc");
///
/// assert_eq!(request.method(), TransportMethod::Post);
/// assert_eq!(request.path(), "/oauth2/v2.1/revoke");
/// ```
///
/// [`revoke_access_token`]: crate::dx::LineSdkClientInstance::revoke_access_token
/// [`LineSdkClient`]: crate::LineSdkClient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRevokeTokenRequest {
    /// Channel ID of LINE Login channel which issued the token.
    pub channel_id: String,

    /// Access token which should be revoked.
    pub access_token: String,
}

/// Form parameters of [`PostRevokeTokenRequest`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RevokeTokenParameters {
    /// Channel ID.
    pub client_id: String,

    /// Access token to revoke.
    pub access_token: String,
}

impl PostRevokeTokenRequest {
    /// Create revoke access token request.
    pub fn new<C, A>(channel_id: C, access_token: A) -> Self
    where
        C: Into<String>,
        A: Into<String>,
    {
        Self {
            channel_id: channel_id.into(),
            access_token: access_token.into(),
        }
    }
}

impl Request for PostRevokeTokenRequest {
    type Parameters = RevokeTokenParameters;
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
        Some(RevokeTokenParameters {
            client_id: self.channel_id.clone(),
            access_token: self.access_token.clone(),
        })
    }

    fn prefix_pipeline(&self) -> Option<ResponsePipeline> {
        Some(empty_body_as_object())
    }
}

/// Pipeline which turns zero-length body into `{}`.
pub(crate) fn empty_body_as_object() -> ResponsePipeline {
    ResponsePipeline::default().redirector(DataTransformRedirector::new(
        |data: &[u8]| data.is_empty(),
        |_: &[u8]| b"{}".to_vec(),
    ))
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::core::{build_transport_request, TransportResponse};
    use test_case::test_case;

    #[test_case("1234", "tok-abc"; "regular values")]
    #[test_case("", ""; "empty strings")]
    #[test_case("1234", "a&b=c d"; "reserved characters")]
    fn compute_parameters_from_fields(channel_id: &str, access_token: &str) {
        let request = PostRevokeTokenRequest::new(channel_id, access_token);

        assert_eq!(
            request.parameters(),
            Some(RevokeTokenParameters {
                client_id: channel_id.into(),
                access_token: access_token.into(),
            })
        );
    }

    #[test_case("1234", "tok-abc")]
    #[test_case("", "")]
    fn keep_endpoint_constant(channel_id: &str, access_token: &str) {
        let request = PostRevokeTokenRequest::new(channel_id, access_token);

        assert_eq!(request.method(), TransportMethod::Post);
        assert_eq!(request.path(), "/oauth2/v2.1/revoke");
        assert_eq!(request.content_type(), ContentType::FormUrlEncoded);
        assert_eq!(request.authenticate(), AuthenticateMethod::None);
    }

    #[test]
    fn serialize_form_body_in_declared_order() {
        let request = build_transport_request(&PostRevokeTokenRequest::new("1234", "tok-abc"))
            .unwrap();

        assert_eq!(
            request.body,
            Some(b"client_id=1234&access_token=tok-abc".to_vec())
        );
        assert!(request.query_parameters.is_empty());
    }

    #[test]
    fn serialize_empty_values() {
        let request = build_transport_request(&PostRevokeTokenRequest::new("", "")).unwrap();

        assert_eq!(request.body, Some(b"client_id=&access_token=".to_vec()));
    }

    #[test_case(None, b"{}"; "missing body")]
    #[test_case(Some(&b""[..]), b"{}"; "empty body")]
    #[test_case(Some(&b"{}"[..]), b"{}"; "empty object")]
    #[test_case(Some(&br#"{"error":"x"}"#[..]), br#"{"error":"x"}"#; "error object")]
    fn prepare_body_for_decoding(body: Option<&[u8]>, expected: &[u8]) {
        let pipeline = PostRevokeTokenRequest::new("1234", "tok-abc")
            .prefix_pipeline()
            .unwrap();

        let response = pipeline
            .process(TransportResponse {
                status: 200,
                body: body.map(<[u8]>::to_vec),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(response.data(), expected);
    }
}
