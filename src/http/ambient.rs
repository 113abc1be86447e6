use cookie::Cookie;

use crate::cookies::table::CookieTable;
use crate::cookies::value::CookieValue;

/// Parse the incoming request's `Cookie` header into a [`CookieTable`].
///
/// Values are percent-decoded; pairs that fail to parse are skipped with a
/// debug log, the way user agents drop what they cannot read. Header order
/// becomes table order. An empty header yields an empty table.
pub fn read_ambient_cookies(header: &str) -> CookieTable {
    let mut table = CookieTable::new();

    for parsed in Cookie::split_parse_encoded(header) {
        match parsed {
            Ok(pair) => {
                table.insert(pair.name(), CookieValue::Text(pair.value().to_string()));
            }
            Err(error) => {
                tracing::debug!(error = %error, "skipping malformed cookie pair");
            }
        }
    }

    table
}
