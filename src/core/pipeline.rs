//! # Response pipeline
//!
//! This module contains the [`ResponsePipeline`] type and the
//! [`ResponseRedirector`] trait.
//!
//! Requests may declare an ordered list of redirectors which are applied to
//! the raw [`TransportResponse`] before the status check and before the body
//! is handed to the [`Deserializer`]. This lets single endpoints patch up
//! known server quirks without special cases in the generic decoding stage.
//!
//! [`Deserializer`]: ../deserializer/trait.Deserializer.html

use log::debug;

use crate::core::{LineSdkError, TransportResponse};

/// Outcome of single redirector run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectAction {
    /// Pass response to the next step unchanged.
    Continue,

    /// Replace response body and pass it to the next step.
    ///
    /// Status code and headers are preserved.
    ContinueWith(Vec<u8>),

    /// Abort response processing with error.
    Stop(LineSdkError),
}

/// Response pre-decode step.
///
/// Redirectors are stateless and are evaluated in the order in which they
/// have been declared in [`ResponsePipeline`].
///
/// # Examples
/// ```
/// use line_sdk::core::{RedirectAction, ResponseRedirector, TransportResponse};
///
/// struct EmptyIsNull;
///
/// impl ResponseRedirector for EmptyIsNull {
///     fn should_apply(&self, response: &TransportResponse) -> bool {
///         response.data().is_empty()
///     }
///
///     fn redirect(&self, _response: &TransportResponse) -> RedirectAction {
///         RedirectAction::ContinueWith(b"null".to_vec())
///     }
/// }
/// ```
pub trait ResponseRedirector: Send + Sync {
    /// Whether this step wants to handle `response`.
    fn should_apply(&self, response: &TransportResponse) -> bool;

    /// Produce next action for `response`.
    ///
    /// Called only when [`should_apply`] returned `true`.
    ///
    /// [`should_apply`]: #tymethod.should_apply
    fn redirect(&self, response: &TransportResponse) -> RedirectAction;
}

/// Conditional response body rewrite.
///
/// When `condition` holds for the raw body, the body is replaced with the
/// output of `transform`. Otherwise the body passes through byte-for-byte.
pub struct DataTransformRedirector<C, F>
where
    C: Fn(&[u8]) -> bool + Send + Sync,
    F: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    condition: C,
    transform: F,
}

impl<C, F> DataTransformRedirector<C, F>
where
    C: Fn(&[u8]) -> bool + Send + Sync,
    F: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    /// Create redirector from predicate and rewrite functions.
    pub fn new(condition: C, transform: F) -> Self {
        Self {
            condition,
            transform,
        }
    }
}

impl<C, F> ResponseRedirector for DataTransformRedirector<C, F>
where
    C: Fn(&[u8]) -> bool + Send + Sync,
    F: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    fn should_apply(&self, response: &TransportResponse) -> bool {
        (self.condition)(response.data())
    }

    fn redirect(&self, response: &TransportResponse) -> RedirectAction {
        RedirectAction::ContinueWith((self.transform)(response.data()))
    }
}

/// Ordered list of [`ResponseRedirector`] steps.
///
/// # Examples
/// ```
/// use line_sdk::core::{DataTransformRedirector, ResponsePipeline, TransportResponse};
///
/// let pipeline = ResponsePipeline::default().redirector(DataTransformRedirector::new(
///     |data| data.is_empty(),
///     |_| b"{}".to_vec(),
/// ));
///
/// let response = pipeline.process(TransportResponse {
///     status: 200,
///     ..Default::default()
/// })?;
/// assert_eq!(response.data(), b"{}");
/// # Ok::<(), line_sdk::core::LineSdkError>(())
/// ```
#[derive(Default)]
pub struct ResponsePipeline {
    redirectors: Vec<Box<dyn ResponseRedirector>>,
}

impl ResponsePipeline {
    /// Append `redirector` to the end of the pipeline.
    pub fn redirector<R>(mut self, redirector: R) -> Self
    where
        R: ResponseRedirector + 'static,
    {
        self.redirectors.push(Box::new(redirector));
        self
    }

    /// Number of steps in pipeline.
    pub fn len(&self) -> usize {
        self.redirectors.len()
    }

    /// Whether pipeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.redirectors.is_empty()
    }

    /// Run `response` through every step in declaration order.
    ///
    /// # Errors
    /// Returns error carried by the first [`RedirectAction::Stop`].
    pub fn process(&self, response: TransportResponse) -> Result<TransportResponse, LineSdkError> {
        self.redirectors
            .iter()
            .enumerate()
            .try_fold(response, |response, (index, redirector)| {
                if !redirector.should_apply(&response) {
                    return Ok(response);
                }

                match redirector.redirect(&response) {
                    RedirectAction::Continue => Ok(response),
                    RedirectAction::ContinueWith(body) => {
                        debug!(
                            "Pipeline step {index} replaced response body ({} -> {} bytes)",
                            response.data().len(),
                            body.len()
                        );

                        Ok(TransportResponse {
                            body: Some(body),
                            ..response
                        })
                    }
                    RedirectAction::Stop(error) => Err(error),
                }
            })
    }
}

impl std::fmt::Debug for ResponsePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponsePipeline")
            .field("redirectors", &self.redirectors.len())
            .finish()
    }
}

#[cfg(test)]
mod should {
    use super::*;

    fn empty_to_object() -> DataTransformRedirector<
        impl Fn(&[u8]) -> bool + Send + Sync,
        impl Fn(&[u8]) -> Vec<u8> + Send + Sync,
    > {
        DataTransformRedirector::new(|data: &[u8]| data.is_empty(), |_: &[u8]| b"{}".to_vec())
    }

    fn response(status: u16, body: Option<&[u8]>) -> TransportResponse {
        TransportResponse {
            status,
            body: body.map(<[u8]>::to_vec),
            ..Default::default()
        }
    }

    struct StopOnServerError;

    impl ResponseRedirector for StopOnServerError {
        fn should_apply(&self, response: &TransportResponse) -> bool {
            response.status >= 500
        }

        fn redirect(&self, response: &TransportResponse) -> RedirectAction {
            RedirectAction::Stop(LineSdkError::API {
                status: response.status,
                error: None,
                message: "server error".into(),
            })
        }
    }

    struct Uppercase;

    impl ResponseRedirector for Uppercase {
        fn should_apply(&self, _response: &TransportResponse) -> bool {
            true
        }

        fn redirect(&self, response: &TransportResponse) -> RedirectAction {
            RedirectAction::ContinueWith(response.data().to_ascii_uppercase())
        }
    }

    #[test]
    fn rewrite_missing_body() {
        let pipeline = ResponsePipeline::default().redirector(empty_to_object());

        let result = pipeline.process(response(200, None)).unwrap();

        assert_eq!(result.body, Some(b"{}".to_vec()));
    }

    #[test]
    fn rewrite_zero_length_body() {
        let pipeline = ResponsePipeline::default().redirector(empty_to_object());

        let result = pipeline.process(response(200, Some(b""))).unwrap();

        assert_eq!(result.body, Some(vec![b'{', b'}']));
    }

    #[test]
    fn keep_non_empty_body_untouched() {
        let pipeline = ResponsePipeline::default().redirector(empty_to_object());
        let original = response(400, Some(br#"{"error":"x"}"#));

        let result = pipeline.process(original.clone()).unwrap();

        assert_eq!(result, original);
    }

    #[test]
    fn keep_status_and_headers_on_rewrite() {
        let pipeline = ResponsePipeline::default().redirector(empty_to_object());
        let original = TransportResponse {
            status: 204,
            headers: [("x-line-request-id".into(), "abc".into())].into(),
            body: None,
        };

        let result = pipeline.process(original).unwrap();

        assert_eq!(result.status, 204);
        assert_eq!(result.headers.get("x-line-request-id").unwrap(), "abc");
    }

    #[test]
    fn run_steps_in_declaration_order() {
        let pipeline = ResponsePipeline::default()
            .redirector(empty_to_object())
            .redirector(Uppercase);

        let result = pipeline.process(response(200, None)).unwrap();

        // `{}` has no letters, so only the first step is observable.
        assert_eq!(result.data(), b"{}");

        let result = pipeline.process(response(200, Some(b"ok"))).unwrap();
        assert_eq!(result.data(), b"OK");
    }

    #[test]
    fn stop_on_first_failing_step() {
        let pipeline = ResponsePipeline::default()
            .redirector(StopOnServerError)
            .redirector(Uppercase);

        let result = pipeline.process(response(503, Some(b"busy")));

        assert!(matches!(result, Err(LineSdkError::API { status: 503, .. })));
    }

    #[test]
    fn pass_through_when_empty() {
        let pipeline = ResponsePipeline::default();
        let original = response(200, Some(b"{}"));

        assert!(pipeline.is_empty());
        assert_eq!(pipeline.process(original.clone()).unwrap(), original);
    }
}
