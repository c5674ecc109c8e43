//! # Request descriptor
//!
//! This module contains the [`Request`] trait which describes single
//! [`LINE API`] endpoint call, and the [`build_transport_request`] function which
//! turns a descriptor into a [`TransportRequest`].
//!
//! [`LINE API`]: https://developers.line.biz/en/reference/line-login/

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::core::{
    utils::headers::{APPLICATION_FORM_URLENCODED, APPLICATION_JSON, CONTENT_TYPE},
    LineSdkError, ResponsePipeline, TransportMethod, TransportRequest,
};

/// How request parameters should be serialized.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ContentType {
    /// Parameters are always sent in query string.
    None,

    /// `application/json` body.
    Json,

    /// `application/x-www-form-urlencoded` body.
    FormUrlEncoded,
}

impl ContentType {
    /// `Content-Type` header value.
    pub fn header_value(&self) -> Option<&'static str> {
        match self {
            ContentType::None => None,
            ContentType::Json => Some(APPLICATION_JSON),
            ContentType::FormUrlEncoded => Some(APPLICATION_FORM_URLENCODED),
        }
    }
}

/// Which credentials should be attached to the request.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum AuthenticateMethod {
    /// Request is sent without credentials.
    None,

    /// Request is sent with `Authorization: Bearer <access token>`.
    Token,
}

/// [`LINE API`] endpoint call description.
///
/// Implementors are immutable values created right before the call and
/// dropped after it. Everything the client needs to build and process the
/// call is derived from the descriptor's own fields.
///
/// # Examples
/// ```
/// use line_sdk::core::{AuthenticateMethod, Request, TransportMethod, Unit};
///
/// struct Ping;
///
/// impl Request for Ping {
///     type Parameters = ();
///     type Response = Unit;
///
///     fn method(&self) -> TransportMethod {
///         TransportMethod::Get
///     }
///
///     fn path(&self) -> &str {
///         "/ping"
///     }
///
///     fn authenticate(&self) -> AuthenticateMethod {
///         AuthenticateMethod::None
///     }
/// }
/// ```
///
/// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
pub trait Request: Send + Sync {
    /// Typed request parameters.
    ///
    /// Field declaration order is used as wire order.
    type Parameters: Serialize;

    /// Type into which the processed response body is decoded.
    type Response: DeserializeOwned;

    /// HTTP method.
    fn method(&self) -> TransportMethod;

    /// Endpoint path relative to API host.
    fn path(&self) -> &str;

    /// Parameters serialization format.
    fn content_type(&self) -> ContentType {
        ContentType::Json
    }

    /// Credentials requirement.
    fn authenticate(&self) -> AuthenticateMethod {
        AuthenticateMethod::Token
    }

    /// Request parameters.
    ///
    /// Computed from the descriptor fields on every call.
    fn parameters(&self) -> Option<Self::Parameters> {
        None
    }

    /// Steps which should process raw response before anything else.
    fn prefix_pipeline(&self) -> Option<ResponsePipeline> {
        None
    }
}

/// Create transport request from the request descriptor.
///
/// Parameters go into the body for `POST` requests with
/// [`ContentType::Json`] or [`ContentType::FormUrlEncoded`], and into the query
/// string otherwise.
///
/// # Errors
/// Returns [`LineSdkError::Serialization`] when parameters can't be encoded.
///
/// # Examples
/// ```
/// use line_sdk::{core::build_transport_request, dx::auth::PostRevokeTokenRequest};
///
/// let request = build_transport_request(&PostRevokeTokenRequest::new("1234", "tok-abc"))?;
///
/// assert_eq!(request.path, "/oauth2/v2.1/revoke");
/// assert_eq!(
///     request.body.as_deref(),
///     Some(&b"client_id=1234&access_token=tok-abc"[..])
/// );
/// # Ok::<(), line_sdk::core::LineSdkError>(())
/// ```
pub fn build_transport_request<R>(request: &R) -> Result<TransportRequest, LineSdkError>
where
    R: Request + ?Sized,
{
    let method = request.method();
    let content_type = request.content_type();
    let mut transport_request = TransportRequest {
        path: request.path().to_string(),
        method,
        ..Default::default()
    };

    let Some(parameters) = request.parameters() else {
        return Ok(transport_request);
    };

    let in_body = !matches!(method, TransportMethod::Get);
    match content_type {
        ContentType::FormUrlEncoded if in_body => {
            transport_request.body = Some(encode_form(&parameters)?.into_bytes());
        }
        ContentType::Json if in_body => {
            transport_request.body =
                Some(serde_json::to_vec(&parameters).map_err(|err| {
                    LineSdkError::Serialization {
                        details: err.to_string(),
                    }
                })?);
        }
        _ => transport_request.query_parameters = query_parameters(&parameters)?,
    }

    if transport_request.body.is_some() {
        if let Some(value) = content_type.header_value() {
            transport_request
                .headers
                .insert(CONTENT_TYPE.into(), value.into());
        }
    }

    Ok(transport_request)
}

fn encode_form<P>(parameters: &P) -> Result<String, LineSdkError>
where
    P: Serialize,
{
    serde_urlencoded::to_string(parameters).map_err(|err| LineSdkError::Serialization {
        details: err.to_string(),
    })
}

fn query_parameters<P>(parameters: &P) -> Result<HashMap<String, String>, LineSdkError>
where
    P: Serialize,
{
    let encoded = encode_form(parameters)?;
    serde_urlencoded::from_str::<Vec<(String, String)>>(&encoded)
        .map(|pairs| pairs.into_iter().collect())
        .map_err(|err| LineSdkError::Serialization {
            details: err.to_string(),
        })
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::core::Unit;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Parameters {
        name: String,
        count: u32,
        enabled: bool,
    }

    struct TestRequest {
        method: TransportMethod,
        content_type: ContentType,
    }

    impl Request for TestRequest {
        type Parameters = Parameters;
        type Response = Unit;

        fn method(&self) -> TransportMethod {
            self.method
        }

        fn path(&self) -> &str {
            "/test"
        }

        fn content_type(&self) -> ContentType {
            self.content_type
        }

        fn parameters(&self) -> Option<Self::Parameters> {
            Some(Parameters {
                name: "a b".into(),
                count: 3,
                enabled: true,
            })
        }
    }

    struct NoParameters;

    impl Request for NoParameters {
        type Parameters = ();
        type Response = Unit;

        fn method(&self) -> TransportMethod {
            TransportMethod::Post
        }

        fn path(&self) -> &str {
            "/empty"
        }
    }

    fn request(method: TransportMethod, content_type: ContentType) -> TestRequest {
        TestRequest {
            method,
            content_type,
        }
    }

    #[test]
    fn encode_form_body_in_declared_order() {
        let result =
            build_transport_request(&request(TransportMethod::Post, ContentType::FormUrlEncoded))
                .unwrap();

        assert_eq!(result.method, TransportMethod::Post);
        assert_eq!(result.path, "/test");
        assert_eq!(
            result.body,
            Some(b"name=a+b&count=3&enabled=true".to_vec())
        );
        assert_eq!(
            result.headers.get(CONTENT_TYPE).unwrap(),
            APPLICATION_FORM_URLENCODED
        );
        assert!(result.query_parameters.is_empty());
    }

    #[test]
    fn encode_json_body() {
        let result =
            build_transport_request(&request(TransportMethod::Post, ContentType::Json)).unwrap();

        assert_eq!(
            result.body,
            Some(br#"{"name":"a b","count":3,"enabled":true}"#.to_vec())
        );
        assert_eq!(result.headers.get(CONTENT_TYPE).unwrap(), APPLICATION_JSON);
    }

    #[test]
    fn put_get_parameters_into_query() {
        let result =
            build_transport_request(&request(TransportMethod::Get, ContentType::FormUrlEncoded))
                .unwrap();

        assert_eq!(result.body, None);
        assert!(result.headers.is_empty());
        assert_eq!(
            result.query_parameters,
            HashMap::from([
                ("name".to_string(), "a b".to_string()),
                ("count".to_string(), "3".to_string()),
                ("enabled".to_string(), "true".to_string()),
            ])
        );
    }

    #[test]
    fn put_parameters_into_query_without_content_type() {
        let result =
            build_transport_request(&request(TransportMethod::Post, ContentType::None)).unwrap();

        assert_eq!(result.body, None);
        assert!(result.headers.is_empty());
        assert_eq!(result.query_parameters.len(), 3);
    }

    #[test]
    fn leave_body_empty_without_parameters() {
        let result = build_transport_request(&NoParameters).unwrap();

        assert_eq!(result.path, "/empty");
        assert_eq!(result.body, None);
        assert!(result.headers.is_empty());
        assert!(result.query_parameters.is_empty());
    }

    #[test]
    fn use_request_defaults() {
        assert_eq!(NoParameters.content_type(), ContentType::Json);
        assert_eq!(NoParameters.authenticate(), AuthenticateMethod::Token);
        assert!(NoParameters.prefix_pipeline().is_none());
    }
}
