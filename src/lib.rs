//! # LINE SDK
//!
//! Client for the [LINE Login API]. The crate provides request descriptors
//! for the OAuth2 and profile endpoints together with a transport-agnostic
//! client which sends them.
//!
//! ## Getting started
//!
//! ```no_run
//! use line_sdk::LineSdkClientBuilder;
//!
//! # #[cfg(feature = "reqwest")]
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LineSdkClientBuilder::with_reqwest_transport()
//!     .with_channel_id("1234567890")
//!     .build()?;
//!
//! client.revoke_access_token("<access token>").await?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "reqwest"))]
//! # fn main() {}
//! ```
//!
//! ## Features
//!
//! * `reqwest` - [`reqwest`] based transport (enabled by default)
//! * `blocking` - blocking API and transport (enabled by default)
//! * `full` - all of the above
//!
//! [LINE Login API]: https://developers.line.biz/en/reference/line-login/
//! [`reqwest`]: https://docs.rs/reqwest

#![deny(missing_docs)]

#[cfg(feature = "reqwest")]
#[doc(inline)]
pub use dx::LineSdkClient;

#[cfg(all(feature = "reqwest", feature = "blocking"))]
#[doc(inline)]
pub use dx::LineSdkBlockingClient;

#[doc(inline)]
pub use dx::{auth, LineSdkClientBuilder, LineSdkGenericClient};

pub mod core;
pub mod dx;
pub mod providers;
pub mod transport;
