use http::header::SET_COOKIE;
use http::{HeaderMap, HeaderValue};
use time::OffsetDateTime;

use crate::base::error::{CookieError, CookieResult};
use crate::cookies::directive::CookieDirective;

/// Outbound `Set-Cookie` sink provided by the host HTTP layer.
///
/// Callable multiple times per request; each call appends or overwrites a
/// header entry keyed by cookie name. Once the response headers have been
/// flushed the sink must fail with
/// [`HeadersAlreadySent`](CookieError::HeadersAlreadySent), a host-level
/// condition the store propagates rather than handles.
pub trait EmitSetCookie {
    fn emit_set_cookie(&mut self, directive: &CookieDirective) -> CookieResult<()>;
}

/// `Set-Cookie` staging area for one response.
///
/// Keeps one rendered header value per cookie name, in first-emission
/// order; re-emitting a name overwrites its value in place. Convert into
/// an [`http::HeaderMap`] when the response is assembled, and call
/// [`mark_sent`](Self::mark_sent) once headers are flushed so later
/// emissions fail instead of silently going nowhere.
#[derive(Debug, Clone, Default)]
pub struct ResponseDirectives {
    staged: Vec<(String, HeaderValue)>,
    sent: bool,
}

impl ResponseDirectives {
    pub fn new() -> Self {
        Self {
            staged: Vec::new(),
            sent: false,
        }
    }

    /// Latch the flushed state. Emissions from here on fail.
    pub fn mark_sent(&mut self) {
        self.sent = true;
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Rendered header value staged for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.staged
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Staged `(cookie name, header value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.staged.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Consume the staging area into a header map with one `Set-Cookie`
    /// entry per staged cookie, preserving emission order.
    pub fn into_header_map(self) -> HeaderMap {
        let mut map = HeaderMap::with_capacity(self.staged.len());
        for (_, value) in self.staged {
            map.append(SET_COOKIE, value);
        }
        map
    }
}

impl EmitSetCookie for ResponseDirectives {
    fn emit_set_cookie(&mut self, directive: &CookieDirective) -> CookieResult<()> {
        if self.sent {
            return Err(CookieError::HeadersAlreadySent);
        }

        let rendered = directive.to_header_string(OffsetDateTime::now_utc());
        let value = HeaderValue::from_str(&rendered)
            .map_err(|_| CookieError::UnencodableValue(directive.name.clone()))?;

        if let Some((_, existing)) = self.staged.iter_mut().find(|(n, _)| *n == directive.name) {
            *existing = value;
        } else {
            self.staged.push((directive.name.clone(), value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::directive::Expiry;
    use crate::cookies::value::CookieValue;

    fn directive(name: &str, value: &str) -> CookieDirective {
        CookieDirective::new(
            name,
            CookieValue::Text(value.into()),
            Expiry::Session,
            None,
            None,
            false,
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_emission_order_preserved() {
        let mut sink = ResponseDirectives::new();
        sink.emit_set_cookie(&directive("a", "1")).unwrap();
        sink.emit_set_cookie(&directive("b", "2")).unwrap();
        sink.emit_set_cookie(&directive("c", "3")).unwrap();

        let names: Vec<_> = sink.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reemission_overwrites_by_name() {
        let mut sink = ResponseDirectives::new();
        sink.emit_set_cookie(&directive("a", "1")).unwrap();
        sink.emit_set_cookie(&directive("b", "2")).unwrap();
        sink.emit_set_cookie(&directive("a", "updated")).unwrap();

        assert_eq!(sink.len(), 2);
        let staged = sink.get("a").unwrap().to_str().unwrap();
        assert!(staged.starts_with("a=updated"));
        // Overwrite keeps the original position.
        assert_eq!(sink.iter().next().unwrap().0, "a");
    }

    #[test]
    fn test_mark_sent_rejects_and_leaves_staged_untouched() {
        let mut sink = ResponseDirectives::new();
        sink.emit_set_cookie(&directive("a", "1")).unwrap();
        sink.mark_sent();

        let err = sink.emit_set_cookie(&directive("b", "2")).unwrap_err();
        assert_eq!(err, CookieError::HeadersAlreadySent);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_into_header_map() {
        let mut sink = ResponseDirectives::new();
        sink.emit_set_cookie(&directive("a", "1")).unwrap();
        sink.emit_set_cookie(&directive("b", "2")).unwrap();

        let map = sink.into_header_map();
        let values: Vec<_> = map.get_all(SET_COOKIE).iter().collect();
        assert_eq!(values.len(), 2);
        assert!(values[0].to_str().unwrap().starts_with("a=1"));
        assert!(values[1].to_str().unwrap().starts_with("b=2"));
    }
}
