use std::borrow::Cow;
use std::fmt;

/// A cookie value as seen by the store.
///
/// The incoming `Cookie` header only carries text, but callers routinely
/// write counters and ids, and a null value is distinct from an absent
/// name: `set(name, Null)` leaves the name present, `remove(name)` deletes
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieValue {
    Text(String),
    Number(i64),
    Null,
}

impl CookieValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CookieValue::Null)
    }

    /// Text payload, if this value is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CookieValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Wire form: text as-is, numbers in decimal, null as the empty string.
    /// Percent-encoding of reserved characters happens at the header layer.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            CookieValue::Text(s) => Cow::Borrowed(s.as_str()),
            CookieValue::Number(n) => Cow::Owned(n.to_string()),
            CookieValue::Null => Cow::Borrowed(""),
        }
    }
}

impl fmt::Display for CookieValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for CookieValue {
    fn from(s: &str) -> Self {
        CookieValue::Text(s.to_string())
    }
}

impl From<String> for CookieValue {
    fn from(s: String) -> Self {
        CookieValue::Text(s)
    }
}

impl From<i64> for CookieValue {
    fn from(n: i64) -> Self {
        CookieValue::Number(n)
    }
}

impl<T: Into<CookieValue>> From<Option<T>> for CookieValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CookieValue::Null,
        }
    }
}
