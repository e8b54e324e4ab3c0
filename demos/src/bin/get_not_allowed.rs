//! Treat a 405 as the expected outcome by overriding the success predicate.
//!
//! Runs with debug on, so the transport's verbose diagnostics show up.

use simple_http::status::METHOD_NOT_ALLOWED;
use simple_http::{eq, Client, Headers, Url};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let client = Client::new().with_debug(true);

    let result = client.get_expecting(
        &Url::from("http://localhost:5000/empty_post_response"),
        eq(METHOD_NOT_ALLOWED),
        &Headers::new(),
    );

    match result {
        Ok(success) => println!("got the expected HTTP {}", success.status()),
        Err(failure) => println!("request failed: {failure}"),
    }
}
