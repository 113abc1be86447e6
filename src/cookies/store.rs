use std::fmt;

use crate::base::error::CookieResult;
use crate::cookies::access::{ContainsCookie, IterateCookies, ReadCookies, WriteCookies};
use crate::cookies::directive::{CookieDirective, Expiry};
use crate::cookies::table::{CookieCursor, CookieIter, CookieTable};
use crate::cookies::value::CookieValue;
use crate::http::directives::EmitSetCookie;

/// Façade over one request's ambient cookies.
///
/// Borrows the host-owned [`CookieTable`] and the host's `Set-Cookie` sink
/// for the duration of one request. Every write mutates the table and
/// emits exactly one directive; every removal deletes the table entry and
/// emits an already-expired directive so the user agent deletes its copy
/// too.
///
/// All mutators validate their arguments before touching anything, so a
/// failed call leaves both the table and the staged headers as they were.
/// A sink failure ([`HeadersAlreadySent`](crate::base::error::CookieError::HeadersAlreadySent))
/// is propagated unchanged; by then the local table already reflects the
/// write, which keeps the table consistent with what this request
/// observed.
///
/// Mutators return `&mut Self` so calls chain with `?`:
///
/// ```
/// use cookietray::cookies::{CookieStore, CookieTable, Expiry};
/// use cookietray::http::ResponseDirectives;
///
/// let mut table = CookieTable::new();
/// let mut response = ResponseDirectives::new();
/// let mut store = CookieStore::new(&mut table, &mut response);
///
/// store
///     .set("theme", "dark", Expiry::Session, None, None, false, false)?
///     .set("uid", 42, Expiry::Session, None, None, false, false)?
///     .remove("stale")?;
/// # Ok::<(), cookietray::base::error::CookieError>(())
/// ```
pub struct CookieStore<'r> {
    table: &'r mut CookieTable,
    sink: &'r mut dyn EmitSetCookie,
}

impl<'r> CookieStore<'r> {
    pub fn new(table: &'r mut CookieTable, sink: &'r mut dyn EmitSetCookie) -> Self {
        Self { table, sink }
    }

    /// Value for `name`, or `None` if absent. No side effects.
    pub fn get(&self, name: &str) -> Option<&CookieValue> {
        self.table.get(name)
    }

    /// Read view of the full table. Not write-through: mutate via the
    /// store so directives stay paired with table changes.
    pub fn all(&self) -> &CookieTable {
        self.table
    }

    /// Fresh pass over `(name, value)` pairs in table order.
    pub fn iter(&self) -> CookieIter<'_> {
        self.table.iter()
    }

    /// Cursor over the table, positioned at the first entry.
    pub fn cursor(&self) -> CookieCursor<'_> {
        self.table.cursor()
    }

    /// Write `name -> value` and emit a directive with the given
    /// attributes. Overwriting reissues the directive; the last write in
    /// a request wins on both sides.
    pub fn set(
        &mut self,
        name: &str,
        value: impl Into<CookieValue>,
        expiry: Expiry,
        path: Option<&str>,
        domain: Option<&str>,
        secure: bool,
        http_only: bool,
    ) -> CookieResult<&mut Self> {
        let value = value.into();
        let directive =
            CookieDirective::new(name, value.clone(), expiry, path, domain, secure, http_only)?;

        tracing::debug!(name = %name, secure, http_only, "staging cookie write");
        self.table.insert(name, value);
        self.sink.emit_set_cookie(&directive)?;
        Ok(self)
    }

    /// [`set`](Self::set) with `secure` forced on and `http_only` off.
    pub fn set_secure(
        &mut self,
        name: &str,
        value: impl Into<CookieValue>,
        expiry: Expiry,
        path: Option<&str>,
        domain: Option<&str>,
    ) -> CookieResult<&mut Self> {
        self.set(name, value, expiry, path, domain, true, false)
    }

    /// Apply [`set`](Self::set) to each entry in iteration order, sharing
    /// one set of attributes.
    ///
    /// Fail-fast: the first invalid entry aborts the call. Entries already
    /// processed remain applied; there is no rollback and no silent
    /// partial success.
    pub fn set_bulk<N, V, I>(
        &mut self,
        entries: I,
        expiry: Expiry,
        path: Option<&str>,
        domain: Option<&str>,
        secure: bool,
        http_only: bool,
    ) -> CookieResult<&mut Self>
    where
        N: AsRef<str>,
        V: Into<CookieValue>,
        I: IntoIterator<Item = (N, V)>,
    {
        for (name, value) in entries {
            self.set(name.as_ref(), value, expiry, path, domain, secure, http_only)?;
        }
        Ok(self)
    }

    /// Bulk variant of [`set_secure`](Self::set_secure).
    pub fn set_secure_bulk<N, V, I>(
        &mut self,
        entries: I,
        expiry: Expiry,
        path: Option<&str>,
        domain: Option<&str>,
    ) -> CookieResult<&mut Self>
    where
        N: AsRef<str>,
        V: Into<CookieValue>,
        I: IntoIterator<Item = (N, V)>,
    {
        self.set_bulk(entries, expiry, path, domain, true, false)
    }

    /// Delete `name` from the table and instruct the user agent to do the
    /// same via an epoch-expired directive.
    ///
    /// Idempotent from the caller's perspective: removing an absent name
    /// leaves the table untouched but still emits the directive, so
    /// calling twice observes the same table state.
    pub fn remove(&mut self, name: &str) -> CookieResult<&mut Self> {
        let directive = CookieDirective::expired(name)?;
        let was_present = self.table.remove(name);

        tracing::debug!(name = %name, was_present, "expiring cookie");
        self.sink.emit_set_cookie(&directive)?;
        Ok(self)
    }

    /// Remove every cookie known at call time.
    pub fn clear(&mut self) -> CookieResult<&mut Self> {
        // Removal mutates the table, so iterate over a key snapshot.
        for name in self.table.names() {
            self.remove(&name)?;
        }
        Ok(self)
    }
}

// The sink is a trait object, so show the table and elide the rest.
impl fmt::Debug for CookieStore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieStore")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl ReadCookies for CookieStore<'_> {
    fn read(&self, name: &str) -> Option<&CookieValue> {
        self.get(name)
    }
}

impl ContainsCookie for CookieStore<'_> {
    fn contains(&self, name: &str) -> bool {
        self.table.contains(name)
    }
}

impl IterateCookies for CookieStore<'_> {
    fn cookies(&self) -> CookieIter<'_> {
        self.iter()
    }
}

impl WriteCookies for CookieStore<'_> {
    fn write(&mut self, name: &str, value: CookieValue) -> CookieResult<()> {
        self.set(name, value, Expiry::Session, None, None, false, false)?;
        Ok(())
    }

    fn delete(&mut self, name: &str) -> CookieResult<()> {
        self.remove(name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::error::CookieError;

    /// Sink that records every emitted directive.
    #[derive(Default)]
    struct RecordingSink {
        emitted: Vec<CookieDirective>,
        reject: bool,
    }

    impl EmitSetCookie for RecordingSink {
        fn emit_set_cookie(&mut self, directive: &CookieDirective) -> CookieResult<()> {
            if self.reject {
                return Err(CookieError::HeadersAlreadySent);
            }
            self.emitted.push(directive.clone());
            Ok(())
        }
    }

    #[test]
    fn test_set_then_get() {
        let mut table = CookieTable::new();
        let mut sink = RecordingSink::default();
        let mut store = CookieStore::new(&mut table, &mut sink);

        store
            .set("key", "user", Expiry::Session, None, Some("example.com"), false, false)
            .unwrap();

        assert_eq!(store.get("key"), Some(&CookieValue::Text("user".into())));
        drop(store);
        assert_eq!(sink.emitted.len(), 1);
        assert_eq!(sink.emitted[0].domain.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_overwrite_reissues_directive() {
        let mut table = CookieTable::new();
        let mut sink = RecordingSink::default();
        let mut store = CookieStore::new(&mut table, &mut sink);

        store
            .set("k", "first", Expiry::Session, None, None, false, false)
            .unwrap()
            .set("k", "second", Expiry::Session, None, None, false, false)
            .unwrap();

        assert_eq!(store.get("k"), Some(&CookieValue::Text("second".into())));
        assert_eq!(store.all().len(), 1);
        drop(store);
        assert_eq!(sink.emitted.len(), 2);
    }

    #[test]
    fn test_invalid_name_leaves_everything_untouched() {
        let mut table = CookieTable::new();
        table.insert("existing", CookieValue::Number(1));
        let mut sink = RecordingSink::default();
        let mut store = CookieStore::new(&mut table, &mut sink);

        let err = store
            .set("bad name", "v", Expiry::Session, None, None, false, false)
            .unwrap_err();
        assert!(err.is_invalid_argument());

        assert_eq!(store.all().len(), 1);
        drop(store);
        assert!(sink.emitted.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut table = CookieTable::new();
        let mut sink = RecordingSink::default();
        let mut store = CookieStore::new(&mut table, &mut sink);

        store
            .set("k", "v", Expiry::Session, None, None, false, false)
            .unwrap()
            .remove("k")
            .unwrap()
            .remove("k")
            .unwrap();

        assert_eq!(store.get("k"), None);
        assert!(!store.contains("k"));
        drop(store);
        // One write plus one expiration per remove call.
        assert_eq!(sink.emitted.len(), 3);
        assert!(sink.emitted[1].value.is_null());
        assert_eq!(sink.emitted[1], sink.emitted[2]);
    }

    #[test]
    fn test_clear_removes_all_and_emits_per_name() {
        let mut table = CookieTable::new();
        table.insert("a", CookieValue::Text("1".into()));
        table.insert("b", CookieValue::Text("2".into()));
        let mut sink = RecordingSink::default();
        let mut store = CookieStore::new(&mut table, &mut sink);

        store.clear().unwrap();

        assert!(store.all().is_empty());
        assert_eq!(store.iter().count(), 0);
        drop(store);
        assert_eq!(sink.emitted.len(), 2);
    }

    #[test]
    fn test_bulk_applies_in_order() {
        let mut table = CookieTable::new();
        let mut sink = RecordingSink::default();
        let mut store = CookieStore::new(&mut table, &mut sink);

        store
            .set_bulk(
                [("a", "1"), ("b", "2")],
                Expiry::Session,
                None,
                None,
                false,
                false,
            )
            .unwrap();

        let names: Vec<_> = store.iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(store.contains("a") && store.contains("b"));
    }

    #[test]
    fn test_bulk_fails_fast_keeps_prefix() {
        let mut table = CookieTable::new();
        let mut sink = RecordingSink::default();
        let mut store = CookieStore::new(&mut table, &mut sink);

        let err = store
            .set_bulk(
                [("ok", "1"), ("bad name", "2"), ("after", "3")],
                Expiry::Session,
                None,
                None,
                false,
                false,
            )
            .unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(store.contains("ok"));
        assert!(!store.contains("after"));
        drop(store);
        assert_eq!(sink.emitted.len(), 1);
    }

    #[test]
    fn test_set_secure_forces_flags() {
        let mut table = CookieTable::new();
        let mut sink = RecordingSink::default();
        let mut store = CookieStore::new(&mut table, &mut sink);

        store
            .set_secure("k", "v", Expiry::Session, None, Some("example.com"))
            .unwrap();

        drop(store);
        assert!(sink.emitted[0].secure);
        assert!(!sink.emitted[0].http_only);
    }

    #[test]
    fn test_write_and_delete_aliases() {
        let mut table = CookieTable::new();
        let mut sink = RecordingSink::default();
        let mut store = CookieStore::new(&mut table, &mut sink);

        store.write("k", CookieValue::Number(5)).unwrap();
        assert_eq!(store.read("k"), Some(&CookieValue::Number(5)));

        store.delete("k").unwrap();
        assert_eq!(store.read("k"), None);

        drop(store);
        assert_eq!(sink.emitted[0].expiry, Expiry::Session);
        assert!(!sink.emitted[0].secure);
        assert!(sink.emitted[0].path.is_none());
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut table = CookieTable::new();
        let mut sink = RecordingSink {
            reject: true,
            ..Default::default()
        };
        let mut store = CookieStore::new(&mut table, &mut sink);

        let err = store
            .set("k", "v", Expiry::Session, None, None, false, false)
            .unwrap_err();
        assert_eq!(err, CookieError::HeadersAlreadySent);
        assert!(!err.is_invalid_argument());
    }
}
