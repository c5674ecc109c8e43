//! Headers module
//!
//! This module provides a constants for HTTP headers.
//!

pub(crate) const CONTENT_TYPE: &str = "Content-Type";
pub(crate) const AUTHORIZATION: &str = "Authorization";
pub(crate) const USER_AGENT: &str = "User-Agent";
pub(crate) const APPLICATION_JSON: &str = "application/json";
pub(crate) const APPLICATION_FORM_URLENCODED: &str =
    "application/x-www-form-urlencoded; charset=utf-8";
