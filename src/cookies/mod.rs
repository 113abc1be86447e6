//! Request-scoped cookie storage and the store façade over it.
//!
//! One [`CookieTable`](table::CookieTable) exists per request, populated
//! from the incoming `Cookie` header and discarded when the request ends.
//! A [`CookieStore`](store::CookieStore) borrows the table together with
//! the host's `Set-Cookie` sink and keeps the two in lockstep: every write
//! updates the table and stages exactly one outbound directive, every
//! removal deletes the entry and stages an expired directive.
//!
//! | Concern | Type |
//! |---------|------|
//! | Typed values | [`CookieValue`](value::CookieValue) |
//! | Ordered per-request state | [`CookieTable`](table::CookieTable) |
//! | One outbound instruction | [`CookieDirective`](directive::CookieDirective) |
//! | The façade | [`CookieStore`](store::CookieStore) |
//! | Associative capabilities | [`access`] traits |
//!
//! # Setting and reading cookies
//!
//! ```rust
//! use cookietray::cookies::{CookieStore, CookieValue, Expiry};
//! use cookietray::http::{read_ambient_cookies, ResponseDirectives};
//!
//! let mut table = read_ambient_cookies("theme=dark");
//! let mut response = ResponseDirectives::new();
//! let mut store = CookieStore::new(&mut table, &mut response);
//!
//! store.set("uid", 42, Expiry::Session, Some("/"), None, false, true)?;
//! assert_eq!(store.get("theme"), Some(&CookieValue::Text("dark".into())));
//! assert_eq!(store.get("uid"), Some(&CookieValue::Number(42)));
//! # Ok::<(), cookietray::base::error::CookieError>(())
//! ```

pub mod access;
pub mod directive;
pub mod store;
pub mod table;
pub mod value;

// Re-exports for convenience
pub use access::{ContainsCookie, IterateCookies, ReadCookies, WriteCookies};
pub use directive::{CookieDirective, Expiry};
pub use store::CookieStore;
pub use table::{CookieCursor, CookieIter, CookieTable};
pub use value::CookieValue;
