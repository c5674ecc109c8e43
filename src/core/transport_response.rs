//! This module contains the `TransportResponse` struct.
//!
//! This struct is used to represent the response from a request to the
//! [`LINE API`]. It is used as the response type for the [`Transport`] trait.
//!
//! [`Transport`]: ../transport/trait.Transport.html
//! [`LINE API`]: https://developers.line.biz/en/reference/line-login/

use std::collections::HashMap;

/// This struct is used to represent the response from a request to the
/// [`LINE API`]. It is used as the response type for the [`Transport`] trait.
///
/// [`Transport`]: ../transport/trait.Transport.html
/// [`LINE API`]: https://developers.line.biz/en/reference/line-login/
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportResponse {
    /// status code of the response
    pub status: u16,

    /// headers of the response
    pub headers: HashMap<String, String>,

    /// body of the response
    ///
    /// `None` when the server sent no bytes at all.
    pub body: Option<Vec<u8>>,
}

impl TransportResponse {
    /// Raw body bytes.
    ///
    /// A missing body is presented as an empty slice.
    pub fn data(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }

    /// Whether response status is in `200..300` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
