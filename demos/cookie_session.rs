//! One simulated request/response cycle driven entirely through the store.
//!
//! Run with: cargo run --example cookie_session

use cookietray::base::error::CookieError;
use cookietray::cookies::{CookieStore, Expiry};
use cookietray::http::{read_ambient_cookies, ResponseDirectives};
use time::{Duration, OffsetDateTime};

fn main() -> Result<(), CookieError> {
    // What the user agent sent us.
    let incoming = "theme=dark; visits=4; legacy_tracker=xyz";
    println!("--- Step 1: Incoming Cookie header ---");
    println!("{incoming}\n");

    let mut table = read_ambient_cookies(incoming);
    let mut response = ResponseDirectives::new();
    let mut store = CookieStore::new(&mut table, &mut response);

    println!("--- Step 2: Handler mutations ---");
    let next_week = OffsetDateTime::now_utc() + Duration::days(7);
    store
        .set("visits", 5, Expiry::At(next_week), Some("/"), None, false, false)?
        .set_secure("session", "abc123", Expiry::Session, Some("/"), None)?
        .remove("legacy_tracker")?;

    for (name, value) in store.iter() {
        println!("  {name} = {value}");
    }

    println!("\n--- Step 3: Outgoing Set-Cookie headers ---");
    drop(store);
    for (name, value) in response.iter() {
        println!("  [{name}] {}", value.to_str().unwrap_or("<non-ascii>"));
    }

    Ok(())
}
