//! Associative access, split into one capability per trait.
//!
//! The read-side capabilities ([`ReadCookies`], [`ContainsCookie`],
//! [`IterateCookies`]) apply to anything exposing a cookie view, which
//! covers the table itself and the store façade. The mutating pair lives in
//! [`WriteCookies`] and is only implemented by the store, since a write
//! must also emit a `Set-Cookie` directive.

use crate::base::error::CookieResult;
use crate::cookies::table::{CookieIter, CookieTable};
use crate::cookies::value::CookieValue;

/// Read a single cookie by name.
pub trait ReadCookies {
    fn read(&self, name: &str) -> Option<&CookieValue>;
}

/// Existence check by name.
pub trait ContainsCookie {
    fn contains(&self, name: &str) -> bool;
}

/// Produce a fresh pass over all `(name, value)` pairs in table order.
pub trait IterateCookies {
    fn cookies(&self) -> CookieIter<'_>;
}

/// Write or delete by name, with default attributes: session expiry, no
/// path or domain, neither secure nor http-only.
pub trait WriteCookies {
    fn write(&mut self, name: &str, value: CookieValue) -> CookieResult<()>;
    fn delete(&mut self, name: &str) -> CookieResult<()>;
}

impl ReadCookies for CookieTable {
    fn read(&self, name: &str) -> Option<&CookieValue> {
        self.get(name)
    }
}

impl ContainsCookie for CookieTable {
    fn contains(&self, name: &str) -> bool {
        CookieTable::contains(self, name)
    }
}

impl IterateCookies for CookieTable {
    fn cookies(&self) -> CookieIter<'_> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<C: IterateCookies>(source: &C) -> Vec<String> {
        source.cookies().map(|(n, _)| n.to_string()).collect()
    }

    #[test]
    fn test_table_capabilities() {
        let mut table = CookieTable::new();
        table.insert("a", CookieValue::Number(1));
        table.insert("b", CookieValue::Null);

        assert_eq!(table.read("a"), Some(&CookieValue::Number(1)));
        assert_eq!(table.read("missing"), None);
        assert!(ContainsCookie::contains(&table, "b"));
        assert_eq!(names(&table), vec!["a", "b"]);
    }
}
