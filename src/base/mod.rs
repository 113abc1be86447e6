//! Base types and error handling.
//!
//! Provides the crate-wide error enum ([`CookieError`](error::CookieError))
//! and its [`CookieResult`](error::CookieResult) alias.

pub mod error;
