//! Shared response types.

/// Zero-payload response.
///
/// Used as response type by requests which succeed without any meaningful
/// body fields. Decodes from any JSON object, e.g. `{}`.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unit {}
