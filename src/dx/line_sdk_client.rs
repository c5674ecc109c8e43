//! LINE SDK client module
//!
//! This module contains the [`LineSdkClient`] struct.
//! It's used to send requests to [`LINE API`].
//! It's intended to be used by the [`line_sdk`] crate.
//!
//! [`LINE API`]: https://developers.line.biz/en/reference/line-login/
//! [`line_sdk`]: ../index.html

use std::{ops::Deref, sync::Arc};

use derive_builder::Builder;
use log::{debug, info, warn};
use spin::RwLock;

use crate::{
    core::{
        build_transport_request, utils::headers::AUTHORIZATION, APIErrorBody, AuthenticateMethod,
        Deserializer, LineSdkError, Request, TransportRequest, TransportResponse,
    },
    providers::deserialization_serde::DeserializerSerde,
    transport::middleware::LineSdkMiddleware,
};

#[cfg(feature = "reqwest")]
use crate::transport::TransportReqwest;

/// SDK identifier reported in the `User-Agent` header.
pub(crate) const SDK_ID: &str = "line-sdk-rust";

/// SDK version reported in the `User-Agent` header.
pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// LINE SDK client
///
/// Client for [`LINE API`].
/// The client is transport-layer-agnostic, so you can use any transport layer
/// that implements the [`Transport`] trait.
///
/// You can create clients using the [`LineSdkClientBuilder`].
/// You must provide a channel ID of the LINE Login channel to which the
/// client belongs.
///
/// # Examples
/// ```
/// use line_sdk::LineSdkClientBuilder;
///
/// // note that `with_reqwest_transport` requires `reqwest` feature
/// // to be enabled (default)
/// # #[cfg(feature = "reqwest")]
/// # fn main() -> Result<(), line_sdk::core::LineSdkError> {
/// let client = LineSdkClientBuilder::with_reqwest_transport()
///    .with_channel_id("1234567890")
///    .build()?;
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "reqwest"))]
/// # fn main() {}
/// ```
///
/// Using your own [`Transport`] implementation:
///
/// ```
/// use line_sdk::LineSdkClientBuilder;
///
/// # use line_sdk::core::{Transport, TransportRequest, TransportResponse, LineSdkError};
/// # struct MyTransport;
/// # #[async_trait::async_trait]
/// # impl Transport for MyTransport {
/// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, LineSdkError> {
/// #         unimplemented!()
/// #     }
/// # }
/// # fn main() -> Result<(), LineSdkError> {
/// // note that MyTransport must implement the `Transport` trait
/// let client = LineSdkClientBuilder::with_transport(MyTransport)
///    .with_channel_id("1234567890")
///    .build()?;
/// # Ok(())
/// # }
/// ```
///
/// # Synchronization
///
/// Client is thread-safe and can be shared between threads. You don't need to
/// wrap it in `Arc` or `Mutex` because it is already wrapped in `Arc` and uses
/// interior mutability for its internal state.
///
/// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
/// [`Transport`]: ../core/transport/trait.Transport.html
#[cfg(feature = "reqwest")]
pub type LineSdkClient = LineSdkGenericClient<TransportReqwest, DeserializerSerde>;

/// LINE SDK client with blocking reqwest transport.
///
/// See [`LineSdkClient`] for more information.
#[cfg(all(feature = "reqwest", feature = "blocking"))]
pub type LineSdkBlockingClient =
    LineSdkGenericClient<crate::transport::blocking::TransportReqwest, DeserializerSerde>;

/// LINE SDK client with custom transport and deserializer.
///
/// See [`LineSdkClient`] for more information.
pub type LineSdkGenericClient<T, D> = LineSdkClientInstance<LineSdkMiddleware<T>, D>;

/// LINE SDK client raw instance.
///
/// This struct contains the actual client state.
/// It shouldn't be used directly. Use [`LineSdkGenericClient`] or
/// [`LineSdkClient`] instead.
#[derive(Debug)]
pub struct LineSdkClientInstance<T, D> {
    pub(crate) inner: Arc<LineSdkClientRef<T, D>>,
}

impl<T, D> Deref for LineSdkClientInstance<T, D> {
    type Target = LineSdkClientRef<T, D>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, D> Clone for LineSdkClientInstance<T, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Client reference
///
/// This struct contains the actual client state.
/// It's wrapped in `Arc` by [`LineSdkClient`] and uses interior mutability for
/// its internal state.
///
/// Not intended to be used directly. Use [`LineSdkClient`] instead.
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    name = "LineSdkClientConfigBuilder",
    build_fn(private, name = "build_internal"),
    setter(prefix = "with")
)]
pub struct LineSdkClientRef<T, D> {
    /// Transport layer
    pub(crate) transport: T,

    /// [`LINE API`] responses deserializer
    ///
    /// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
    pub(crate) deserializer: Arc<D>,

    /// Configuration
    pub(crate) config: LineSdkConfig,

    /// Access token used by requests which require authentication.
    #[builder(
        setter(custom),
        field(vis = "pub(crate)"),
        default = "Arc::new(spin::RwLock::new(String::new()))"
    )]
    pub(crate) access_token: Arc<RwLock<String>>,
}

impl<T, D> LineSdkClientInstance<T, D> {
    /// Update currently used access token.
    ///
    /// The token is attached to every request which requires authentication.
    ///
    /// # Example
    /// ```rust
    /// use line_sdk::LineSdkClientBuilder;
    ///
    /// # #[cfg(feature = "reqwest")]
    /// # fn main() -> Result<(), line_sdk::core::LineSdkError> {
    /// let client = // LineSdkClient
    /// #     LineSdkClientBuilder::with_reqwest_transport()
    /// #         .with_channel_id("1234567890")
    /// #         .build()?;
    /// client.set_token("<access token from login>");
    /// assert!(client.get_token().is_some());
    /// #     Ok(())
    /// # }
    /// # #[cfg(not(feature = "reqwest"))]
    /// # fn main() {}
    /// ```
    pub fn set_token<S>(&self, access_token: S)
    where
        S: Into<String>,
    {
        let mut token = self.access_token.write();
        *token = access_token.into();
    }

    /// Retrieve currently used access token.
    pub fn get_token(&self) -> Option<String> {
        let token = self.access_token.read().deref().clone();
        (!token.is_empty()).then_some(token)
    }

    /// Forget currently used access token.
    pub fn clear_token(&self) {
        self.access_token.write().clear();
    }

    /// Channel ID of LINE Login channel used by the client.
    pub fn channel_id(&self) -> &str {
        &self.config.channel_id
    }

    /// Create transport request from the request descriptor.
    ///
    /// Attaches `Authorization` header when the request requires
    /// authentication.
    pub(crate) fn prepare_request<R>(&self, request: &R) -> Result<TransportRequest, LineSdkError>
    where
        R: Request,
    {
        let mut transport_request = build_transport_request(request)?;

        if request.authenticate() == AuthenticateMethod::Token {
            let token = self.get_token().ok_or(LineSdkError::Authentication {
                details: format!(
                    "Request to {} requires access token, but none has been set",
                    request.path()
                ),
            })?;

            transport_request
                .headers
                .insert(AUTHORIZATION.into(), format!("Bearer {token}"));
        }

        debug!(
            "Prepared {} {} request",
            transport_request.method, transport_request.path
        );

        Ok(transport_request)
    }
}

impl<T, D> LineSdkClientInstance<T, D>
where
    D: Deserializer,
{
    /// Process response received for `request`.
    ///
    /// Runs the request's prefix pipeline, validates status code and decodes
    /// body into the request's response type.
    pub(crate) fn process_response<R>(
        &self,
        request: &R,
        response: TransportResponse,
    ) -> Result<R::Response, LineSdkError>
    where
        R: Request,
    {
        // Pipeline may replace an empty body, which shouldn't leak into errors.
        let empty_body = response.data().is_empty();
        let response = match request.prefix_pipeline() {
            Some(pipeline) => pipeline.process(response)?,
            None => response,
        };

        if !response.is_success() {
            warn!(
                "{} responded with status {}",
                request.path(),
                response.status
            );
            return Err(if empty_body {
                LineSdkError::API {
                    status: response.status,
                    error: None,
                    message: String::new(),
                }
            } else {
                self.api_error(&response)
            });
        }

        self.deserializer.deserialize(response.data())
    }

    fn api_error(&self, response: &TransportResponse) -> LineSdkError {
        self.deserializer
            .deserialize::<APIErrorBody>(response.data())
            .map(|body| body.into_error(response.status))
            .unwrap_or_else(|_| LineSdkError::API {
                status: response.status,
                error: None,
                message: String::from_utf8_lossy(response.data()).into_owned(),
            })
    }
}

impl<T, D> LineSdkClientInstance<T, D>
where
    T: crate::core::Transport,
    D: Deserializer,
{
    /// Send `request` and decode its response.
    ///
    /// # Example
    /// ```no_run
    /// use line_sdk::{dx::auth::PostRevokeTokenRequest, LineSdkClientBuilder};
    ///
    /// # #[cfg(feature = "reqwest")]
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = // LineSdkClient
    /// #     LineSdkClientBuilder::with_reqwest_transport()
    /// #         .with_channel_id("1234567890")
    /// #         .build()?;
    /// client
    ///     .send(PostRevokeTokenRequest::new("1234567890", "<access token>"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// # #[cfg(not(feature = "reqwest"))]
    /// # fn main() {}
    /// ```
    pub async fn send<R>(&self, request: R) -> Result<R::Response, LineSdkError>
    where
        R: Request,
    {
        let transport_request = self.prepare_request(&request)?;
        let response = self.transport.send(transport_request).await?;
        self.process_response(&request, response)
    }
}

#[cfg(feature = "blocking")]
impl<T, D> LineSdkClientInstance<T, D>
where
    T: crate::core::blocking::Transport,
    D: Deserializer,
{
    /// Send `request` and decode its response synchronously.
    ///
    /// # Example
    /// ```no_run
    /// use line_sdk::{dx::auth::PostRevokeTokenRequest, LineSdkClientBuilder};
    ///
    /// # #[cfg(feature = "reqwest")]
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = // LineSdkBlockingClient
    /// #     LineSdkClientBuilder::with_reqwest_blocking_transport()
    /// #         .with_channel_id("1234567890")
    /// #         .build()?;
    /// client.send_blocking(PostRevokeTokenRequest::new("1234567890", "<access token>"))?;
    /// # Ok(())
    /// # }
    /// # #[cfg(not(feature = "reqwest"))]
    /// # fn main() {}
    /// ```
    pub fn send_blocking<R>(&self, request: R) -> Result<R::Response, LineSdkError>
    where
        R: Request,
    {
        let transport_request = self.prepare_request(&request)?;
        let response = self.transport.send(transport_request)?;
        self.process_response(&request, response)
    }
}

impl<T, D> LineSdkClientConfigBuilder<T, D> {
    /// Set initial access token.
    ///
    /// It returns [`LineSdkClientConfigBuilder`] that you can use to set the
    /// configuration for the client.
    pub fn with_access_token<S>(mut self, access_token: S) -> Self
    where
        S: Into<String>,
    {
        self.access_token = Some(Arc::new(RwLock::new(access_token.into())));
        self
    }

    /// Build a [`LineSdkClient`] from the builder
    pub fn build(self) -> Result<LineSdkClientInstance<LineSdkMiddleware<T>, D>, LineSdkError> {
        self.build_internal()
            .map_err(|err| LineSdkError::ClientInitialization {
                details: err.to_string(),
            })
            .and_then(|pre_build| {
                if pre_build.config.channel_id.is_empty() {
                    return Err(LineSdkError::ClientInitialization {
                        details: "Channel ID can't be empty".into(),
                    });
                }

                info!(
                    "Client Configuration: \n channel_id: {}\n access_token set: {}",
                    pre_build.config.channel_id,
                    !pre_build.access_token.read().is_empty()
                );

                Ok(LineSdkClientRef {
                    transport: LineSdkMiddleware::new(pre_build.transport),
                    deserializer: pre_build.deserializer,
                    config: pre_build.config,
                    access_token: pre_build.access_token,
                })
            })
            .map(|client| LineSdkClientInstance {
                inner: Arc::new(client),
            })
    }
}

/// LINE SDK configuration
///
/// Configuration for [`LineSdkClient`].
/// This struct separates the configuration from the actual client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSdkConfig {
    /// Channel ID of LINE Login channel.
    pub(crate) channel_id: String,
}

/// LINE SDK builder for [`LineSdkClient`]
///
/// Builder for [`LineSdkClient`] that is a first step to create a client.
/// The client is transport-layer-agnostic, so you can use any transport layer
/// that implements the [`Transport`] trait.
///
/// The builder provides methods to set the transport layer and returns the next
/// step of the builder with the remaining parameters.
///
/// See [`LineSdkClient`] for more information.
///
/// [`Transport`]: ../core/transport/trait.Transport.html
#[derive(Debug, Clone)]
pub struct LineSdkClientBuilder;

impl LineSdkClientBuilder {
    /// Set the transport layer for the client.
    ///
    /// Returns [`LineSdkClientDeserializerBuilder`] where following can be
    /// set:
    /// * [`LINE API`] response deserializer
    /// * channel ID.
    ///
    /// # Examples
    /// ```
    /// # use line_sdk::core::{Transport, TransportRequest, TransportResponse, LineSdkError};
    /// use line_sdk::LineSdkClientBuilder;
    /// #
    /// # struct MyTransport;
    /// # #[async_trait::async_trait]
    /// # impl Transport for MyTransport {
    /// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, LineSdkError> {
    /// #         unimplemented!()
    /// #     }
    /// # }
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = LineSdkClientBuilder::with_transport(MyTransport)
    ///     .with_channel_id("1234567890")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
    pub fn with_transport<T>(transport: T) -> LineSdkClientDeserializerBuilder<T>
    where
        T: crate::core::Transport,
    {
        LineSdkClientDeserializerBuilder { transport }
    }

    /// Set the blocking transport layer for the client.
    ///
    /// Returns [`LineSdkClientDeserializerBuilder`] where following can be
    /// set:
    /// * [`LINE API`] response deserializer
    /// * channel ID.
    ///
    /// # Examples
    /// ```
    /// # use line_sdk::core::{blocking::Transport, TransportRequest, TransportResponse, LineSdkError};
    /// use line_sdk::LineSdkClientBuilder;
    ///
    /// # struct MyTransport;
    /// # impl Transport for MyTransport {
    /// #     fn send(&self, _request: TransportRequest) -> Result<TransportResponse, LineSdkError> {
    /// #         unimplemented!()
    /// #     }
    /// # }
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = LineSdkClientBuilder::with_blocking_transport(MyTransport)
    ///     .with_channel_id("1234567890")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
    #[cfg(feature = "blocking")]
    pub fn with_blocking_transport<T>(transport: T) -> LineSdkClientDeserializerBuilder<T>
    where
        T: crate::core::blocking::Transport + Send + Sync,
    {
        LineSdkClientDeserializerBuilder { transport }
    }
}

/// LINE SDK builder for [`LineSdkClient`] used to set custom deserializer.
///
/// The builder provides methods to set a custom [`LINE API`] response
/// deserializer and returns the next step of the builder with the remaining
/// parameters. Skipping it selects [`DeserializerSerde`].
///
/// See [`LineSdkClient`] for more information.
///
/// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
#[derive(Debug, Clone)]
pub struct LineSdkClientDeserializerBuilder<T> {
    pub(crate) transport: T,
}

impl<T> LineSdkClientDeserializerBuilder<T> {
    /// Set [`LINE API`] responses deserializer.
    ///
    /// It returns [`LineSdkClientChannelBuilder`] builder that you can use
    /// to set the channel ID for the client.
    ///
    /// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
    pub fn with_deserializer<D>(self, deserializer: D) -> LineSdkClientChannelBuilder<T, D>
    where
        D: Deserializer,
    {
        LineSdkClientChannelBuilder {
            transport: self.transport,
            deserializer,
        }
    }

    /// Set the channel ID of LINE Login channel.
    ///
    /// Responses will be processed with [`DeserializerSerde`].
    ///
    /// It returns [`LineSdkClientConfigBuilder`] that you can use to set the
    /// rest of client configuration.
    pub fn with_channel_id<S>(self, channel_id: S) -> LineSdkClientConfigBuilder<T, DeserializerSerde>
    where
        S: Into<String>,
    {
        self.with_deserializer(DeserializerSerde)
            .with_channel_id(channel_id)
    }
}

/// LINE SDK builder for [`LineSdkClient`] used to set channel ID.
///
/// See [`LineSdkClient`] for more information.
#[derive(Debug, Clone)]
pub struct LineSdkClientChannelBuilder<T, D> {
    pub(crate) transport: T,
    pub(crate) deserializer: D,
}

impl<T, D> LineSdkClientChannelBuilder<T, D> {
    /// Set the channel ID of LINE Login channel.
    ///
    /// It returns [`LineSdkClientConfigBuilder`] that you can use to set the
    /// rest of client configuration.
    pub fn with_channel_id<S>(self, channel_id: S) -> LineSdkClientConfigBuilder<T, D>
    where
        S: Into<String>,
    {
        LineSdkClientConfigBuilder {
            transport: Some(self.transport),
            deserializer: Some(Arc::new(self.deserializer)),
            config: Some(LineSdkConfig {
                channel_id: channel_id.into(),
            }),
            ..Default::default()
        }
    }
}
