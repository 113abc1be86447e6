//! # cookietray
//!
//! A request-scoped cookie accessor for HTTP hosts.
//!
//! `cookietray` is the thin layer between handler code and the cookies
//! that travel in headers: it reads the request's `Cookie` header into an
//! ordered table, gives handlers typed get/set/remove/clear access over
//! it, and pairs every mutation with a staged `Set-Cookie` response
//! header so the user agent and the current request never disagree.
//!
//! It deliberately is **not** a cookie jar: there is no cross-domain
//! storage, no persistence, and no policy engine. The host HTTP layer
//! owns the request lifecycle; this crate owns the accessor contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use cookietray::cookies::{CookieStore, CookieValue, Expiry};
//! use cookietray::http::{read_ambient_cookies, ResponseDirectives};
//!
//! // Once per request: parse the incoming header, stage the response.
//! let mut table = read_ambient_cookies("theme=dark; uid=42");
//! let mut response = ResponseDirectives::new();
//! let mut store = CookieStore::new(&mut table, &mut response);
//!
//! // Handler code works through the store.
//! store.set("session", "abc123", Expiry::Session, Some("/"), None, false, true)?;
//! assert_eq!(store.get("theme"), Some(&CookieValue::Text("dark".into())));
//! store.remove("uid")?;
//! assert!(!store.all().contains("uid"));
//!
//! // When the response is assembled, collect the Set-Cookie headers.
//! drop(store);
//! let headers = response.into_header_map();
//! assert_eq!(headers.len(), 2); // session write + uid expiration
//! # Ok::<(), cookietray::base::error::CookieError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error types shared across the crate
//! - [`cookies`] - The table, typed values, directives, and the store façade
//! - [`http`] - The host boundary: `Cookie` parsing and `Set-Cookie` staging
//!
//! ## Scope
//!
//! All operations are synchronous, in-memory mutations plus one header
//! emission; correctness rests on the host providing one table per
//! logical request. A table shared across concurrent requests is a host
//! defect; the `&mut`-based API makes that hard to write by accident.

pub mod base;
pub mod cookies;
pub mod http;
