//! # Reqwest Transport Implementation
//!
//! This module contains the [`TransportReqwest`] struct.
//! It is used to send requests to the [`LINE API`] using the [`reqwest`] crate.
//! It is intended to be used by the [`line_sdk`] crate.
//!
//! It requires the [`reqwest` feature] to be enabled.
//!
//! [`TransportReqwest`]: ./struct.TransportReqwest.html
//! [`LINE API`]: https://developers.line.biz/en/reference/line-login/
//! [`reqwest`]: https://docs.rs/reqwest
//! [`line_sdk`]: ../index.html
//! [`reqwest` feature]: ../index.html#features

use crate::{
    core::{
        utils::encoding::url_encode, LineSdkError, Transport, TransportMethod, TransportRequest,
        TransportResponse,
    },
    dx::line_sdk_client::{LineSdkClientBuilder, LineSdkClientDeserializerBuilder},
};
use bytes::Bytes;
use log::info;
use reqwest::{header::HeaderMap, StatusCode};
use std::collections::HashMap;

/// Default [`LINE API`] host.
///
/// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
pub(crate) const DEFAULT_HOSTNAME: &str = "https://api.line.me";

/// This struct is used to send requests to the [`LINE API`] using the
/// [`reqwest`] crate. It is used as the transport type for the
/// [`LineSdkClient`].
///
/// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
/// [`reqwest`]: https://docs.rs/reqwest
/// [`LineSdkClient`]: ../../dx/line_sdk_client/type.LineSdkClient.html
#[derive(Clone, Debug)]
pub struct TransportReqwest {
    reqwest_client: reqwest::Client,

    /// The hostname to use for requests.
    /// It is used as the base URL for all requests.
    ///
    /// It defaults to `https://api.line.me`.
    /// # Examples
    /// ```
    /// use line_sdk::transport::TransportReqwest;
    ///
    /// let transport = {
    ///    let mut transport = TransportReqwest::default();
    ///    transport.hostname = "https://wherever.you.want.com".into();
    ///    transport
    /// };
    /// ```
    pub hostname: String,
}

#[async_trait::async_trait]
impl Transport for TransportReqwest {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, LineSdkError> {
        let request_url = prepare_url(&self.hostname, &request.path, &request.query_parameters);
        info!(
            "{} {}",
            request.method,
            loggable_url(&self.hostname, &request.path)
        );
        let headers = prepare_headers(&request.headers)?;
        let builder = match request.method {
            TransportMethod::Get => self.reqwest_client.get(request_url),
            TransportMethod::Post => self.reqwest_client.post(request_url),
        };
        let builder = match request.body {
            Some(body) => builder.body(body),
            None => builder,
        };

        let result = builder
            .headers(headers)
            .send()
            .await
            .map_err(|e| LineSdkError::Transport {
                details: e.to_string(),
            })?;

        let status = result.status();
        let headers = result.headers().clone();
        result
            .bytes()
            .await
            .map_err(|e| LineSdkError::Transport {
                details: e.to_string(),
            })
            .map(|bytes| create_result(status, &headers, bytes))
    }
}

impl Default for TransportReqwest {
    fn default() -> Self {
        Self {
            reqwest_client: reqwest::Client::default(),
            hostname: DEFAULT_HOSTNAME.into(),
        }
    }
}

impl TransportReqwest {
    /// Create a new [`TransportReqwest`] instance.
    ///
    /// It provides a default [`reqwest`] client using
    /// [`reqwest::Client::default()`] and a default hostname of
    /// `https://api.line.me`.
    ///
    /// # Example
    /// ```
    /// use line_sdk::transport::TransportReqwest;
    ///
    /// let transport = TransportReqwest::new();
    /// ```
    ///
    /// [`TransportReqwest`]: ./struct.TransportReqwest.html
    /// [`reqwest`]: https://docs.rs/reqwest
    pub fn new() -> Self {
        Self::default()
    }

    /// set the custom hostname for request
    pub fn set_hostname<S>(&mut self, hostname: S)
    where
        S: Into<String>,
    {
        self.hostname = hostname.into();
    }
}

pub(crate) fn prepare_headers(
    request_headers: &HashMap<String, String>,
) -> Result<HeaderMap, LineSdkError> {
    HeaderMap::try_from(request_headers).map_err(|err| LineSdkError::Transport {
        details: err.to_string(),
    })
}

/// Request URL without query string.
///
/// Query may carry credentials (`access_token`) and must not be logged.
pub(crate) fn loggable_url(hostname: &str, path: &str) -> String {
    format!("{}{path}", hostname.trim_end_matches('/'))
}

pub(crate) fn prepare_url(
    hostname: &str,
    path: &str,
    query_params: &HashMap<String, String>,
) -> String {
    let url = loggable_url(hostname, path);
    if query_params.is_empty() {
        return url;
    }

    let mut query = query_params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                url_encode(key.as_bytes()),
                url_encode(value.as_bytes())
            )
        })
        .collect::<Vec<String>>();
    query.sort();

    format!("{url}?{}", query.join("&"))
}

pub(crate) fn create_result(
    status: StatusCode,
    headers: &HeaderMap,
    body: Bytes,
) -> TransportResponse {
    TransportResponse {
        status: status.as_u16(),
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect(),
        body: (!body.is_empty()).then(|| body.to_vec()),
    }
}

impl LineSdkClientBuilder {
    /// Creates a new [`LineSdkClientDeserializerBuilder`] with the default
    /// [`TransportReqwest`] transport.
    /// The default transport uses the [`reqwest`] crate to send requests to
    /// the [`LINE API`]. The default hostname is `https://api.line.me`.
    ///
    /// # Examples
    /// ```
    /// use line_sdk::LineSdkClientBuilder;
    ///
    /// let client = LineSdkClientBuilder::with_reqwest_transport()
    ///     .with_channel_id("1234567890")
    ///     .build();
    /// ```
    ///
    /// [`LineSdkClientDeserializerBuilder`]: ../../dx/line_sdk_client/struct.LineSdkClientDeserializerBuilder.html
    /// [`TransportReqwest`]: ./struct.TransportReqwest.html
    /// [`reqwest`]: https://docs.rs/reqwest
    /// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
    pub fn with_reqwest_transport() -> LineSdkClientDeserializerBuilder<TransportReqwest> {
        LineSdkClientBuilder::with_transport(TransportReqwest::new())
    }
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! # Reqwest Transport Blocking Implementation
    //!
    //! This module contains the [`TransportReqwest`] struct.
    //! It is used to send requests to the [`LINE API`] using the [`reqwest`]
    //! crate.
    //!
    //! It requires the [`reqwest` and `blocking` feature] to be enabled.
    //!
    //! [`TransportReqwest`]: ./struct.TransportReqwest.html
    //! [`LINE API`]: https://developers.line.biz/en/reference/line-login/
    //! [`reqwest`]: https://docs.rs/reqwest

    use log::info;

    use crate::{
        core::{LineSdkError, TransportMethod, TransportRequest, TransportResponse},
        dx::line_sdk_client::{LineSdkClientBuilder, LineSdkClientDeserializerBuilder},
        transport::reqwest::{
            create_result, loggable_url, prepare_headers, prepare_url, DEFAULT_HOSTNAME,
        },
    };

    /// This struct is used to send requests to the [`LINE API`] using the
    /// [`reqwest`] crate.
    ///
    /// It requires the [`reqwest` and `blocking` feature] to be enabled.
    ///
    /// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
    /// [`reqwest`]: https://docs.rs/reqwest
    #[derive(Clone, Debug)]
    pub struct TransportReqwest {
        reqwest_client: reqwest::blocking::Client,

        /// The hostname to use for requests.
        /// It is used as the base URL for all requests.
        ///
        /// It defaults to `https://api.line.me`.
        pub hostname: String,
    }

    impl crate::core::blocking::Transport for TransportReqwest {
        fn send(&self, request: TransportRequest) -> Result<TransportResponse, LineSdkError> {
            let request_url = prepare_url(&self.hostname, &request.path, &request.query_parameters);
            info!(
                "{} {}",
                request.method,
                loggable_url(&self.hostname, &request.path)
            );
            let headers = prepare_headers(&request.headers)?;
            let builder = match request.method {
                TransportMethod::Get => self.reqwest_client.get(request_url),
                TransportMethod::Post => self.reqwest_client.post(request_url),
                };
            let builder = match request.body {
                Some(body) => builder.body(body),
                None => builder,
            };

            let result = builder
                .headers(headers)
                .send()
                .map_err(|e| LineSdkError::Transport {
                    details: e.to_string(),
                })?;

            let status = result.status();
            let headers = result.headers().clone();
            result
                .bytes()
                .map_err(|e| LineSdkError::Transport {
                    details: e.to_string(),
                })
                .map(|bytes| create_result(status, &headers, bytes))
        }
    }

    impl Default for TransportReqwest {
        fn default() -> Self {
            Self {
                reqwest_client: reqwest::blocking::Client::default(),
                hostname: DEFAULT_HOSTNAME.into(),
            }
        }
    }

    impl TransportReqwest {
        /// Create a new [`TransportReqwest`] instance.
        ///
        /// # Example
        /// ```
        /// use line_sdk::transport::blocking::TransportReqwest;
        ///
        /// let transport = TransportReqwest::new();
        /// ```
        pub fn new() -> Self {
            Self::default()
        }

        /// set the custom hostname for request
        pub fn set_hostname<S>(&mut self, hostname: S)
        where
            S: Into<String>,
        {
            self.hostname = hostname.into();
        }
    }

    impl LineSdkClientBuilder {
        /// Creates a new [`LineSdkClientDeserializerBuilder`] with the
        /// blocking [`TransportReqwest`] transport.
        ///
        /// # Examples
        /// ```
        /// use line_sdk::LineSdkClientBuilder;
        ///
        /// let client = LineSdkClientBuilder::with_reqwest_blocking_transport()
        ///     .with_channel_id("1234567890")
        ///     .build();
        /// ```
        pub fn with_reqwest_blocking_transport() -> LineSdkClientDeserializerBuilder<TransportReqwest>
        {
            LineSdkClientBuilder::with_blocking_transport(TransportReqwest::new())
        }
    }

    #[cfg(test)]
    mod should {
        use crate::core::blocking::Transport;

        use super::*;

        use wiremock::matchers::{body_string, method, path as path_macher, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        #[tokio::test]
        async fn send_via_get_method() {
            let server = MockServer::start().await;

            Mock::given(method("GET"))
                .and(path_macher("/oauth2/v2.1/verify"))
                .and(query_param("access_token", "tok-abc"))
                .respond_with(ResponseTemplate::new(200).set_body_string(
                    r#"{"scope":"profile","client_id":"1234","expires_in":2591659}"#,
                ))
                .mount(&server)
                .await;

            tokio::task::spawn_blocking(move || {
                let transport = TransportReqwest {
                    reqwest_client: reqwest::blocking::Client::default(),
                    hostname: server.uri(),
                };

                let request = TransportRequest {
                    path: "/oauth2/v2.1/verify".into(),
                    query_parameters: [("access_token".into(), "tok-abc".into())].into(),
                    method: TransportMethod::Get,
                    ..Default::default()
                };

                let response = transport.send(request).unwrap();

                assert_eq!(response.status, 200);
            })
            .await
            .unwrap();
        }

        #[tokio::test]
        async fn send_via_post_method() {
            let form = "client_id=1234&access_token=tok-abc";
            let path = "/oauth2/v2.1/revoke";

            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path_macher(path))
                .and(body_string(form.to_string()))
                .respond_with(ResponseTemplate::new(200))
                .mount(&server)
                .await;

            tokio::task::spawn_blocking(move || {
                let transport = TransportReqwest {
                    reqwest_client: reqwest::blocking::Client::default(),
                    hostname: server.uri(),
                };

                let request = TransportRequest {
                    path: path.into(),
                    method: TransportMethod::Post,
                    body: Some(form.as_bytes().to_vec()),
                    ..Default::default()
                };

                let response = transport.send(request).unwrap();

                assert_eq!(response.status, 200);
                assert_eq!(response.body, None);
            })
            .await
            .unwrap();
        }
    }
}
