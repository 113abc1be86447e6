use cookie::{Cookie, Expiration};
use time::{Duration, OffsetDateTime};

use crate::base::error::{CookieError, CookieResult};
use crate::cookies::value::CookieValue;

/// When a cookie should expire on the user agent.
///
/// `Session` puts no `Expires` attribute on the wire. `In` offsets are
/// resolved against the emission instant, not the construction instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    Session,
    At(OffsetDateTime),
    In(Duration),
}

impl Expiry {
    fn resolve(self, now: OffsetDateTime) -> Expiration {
        match self {
            Expiry::Session => Expiration::Session,
            Expiry::At(instant) => Expiration::DateTime(instant),
            Expiry::In(offset) => Expiration::DateTime(now + offset),
        }
    }

    pub(crate) fn validate(self) -> CookieResult<()> {
        match self {
            Expiry::Session => Ok(()),
            Expiry::At(instant) if instant < OffsetDateTime::UNIX_EPOCH => {
                Err(CookieError::PreEpochExpiry)
            }
            Expiry::At(_) => Ok(()),
            Expiry::In(offset) if offset.is_negative() => Err(CookieError::NegativeExpiry),
            Expiry::In(_) => Ok(()),
        }
    }
}

/// One outbound `Set-Cookie` instruction.
///
/// Transient value object: constructed per write, rendered once, not
/// retained. Construction validates the name and expiry so the store can
/// guarantee validate-then-act.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieDirective {
    pub name: String,
    pub value: CookieValue,
    pub expiry: Expiry,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
    pub http_only: bool,
}

impl CookieDirective {
    pub fn new(
        name: &str,
        value: CookieValue,
        expiry: Expiry,
        path: Option<&str>,
        domain: Option<&str>,
        secure: bool,
        http_only: bool,
    ) -> CookieResult<Self> {
        validate_name(name)?;
        expiry.validate()?;

        Ok(Self {
            name: name.to_string(),
            value,
            expiry,
            path: path.map(str::to_string),
            domain: domain.map(str::to_string),
            secure,
            http_only,
        })
    }

    /// Deletion directive: null value, expired at the unix epoch, so the
    /// user agent drops the cookie on receipt.
    pub fn expired(name: &str) -> CookieResult<Self> {
        Self::new(
            name,
            CookieValue::Null,
            Expiry::At(OffsetDateTime::UNIX_EPOCH),
            None,
            None,
            false,
            false,
        )
    }

    /// Render the `Set-Cookie` header value. Attributes with no value are
    /// omitted; the cookie value is percent-encoded.
    pub fn to_header_string(&self, now: OffsetDateTime) -> String {
        let mut builder = Cookie::build((self.name.as_str(), self.value.render()))
            .expires(self.expiry.resolve(now))
            .secure(self.secure)
            .http_only(self.http_only);

        if let Some(path) = &self.path {
            builder = builder.path(path.as_str());
        }
        if let Some(domain) = &self.domain {
            builder = builder.domain(domain.as_str());
        }

        builder.build().encoded().to_string()
    }
}

fn validate_name(name: &str) -> CookieResult<()> {
    if name.is_empty() {
        return Err(CookieError::EmptyName);
    }
    if !name.bytes().all(is_token_byte) {
        return Err(CookieError::InvalidName(name.to_string()));
    }
    Ok(())
}

// RFC 2616 token: printable ASCII minus separators.
fn is_token_byte(b: u8) -> bool {
    matches!(b, 0x21..=0x7e) && !b"()<>@,;:\\\"/[]?={}".contains(&b)
}
