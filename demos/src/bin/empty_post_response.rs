//! POST an empty body and accept the 204 reply as success.

use simple_http::status::NO_CONTENT;
use simple_http::{eq, Client, Headers, RequestBody, Url};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let client = Client::new().with_debug(true);
    let headers = Headers::from([("Content-Type".to_string(), "application/json".to_string())]);

    let result = client.post_expecting(
        &Url::from("http://localhost:5000/empty_post_response"),
        &RequestBody::from(""),
        eq(NO_CONTENT),
        &headers,
    );

    match result {
        Ok(success) => {
            println!(
                "HTTP {} with {} body bytes",
                success.status(),
                success.body().value().len()
            );
        }
        Err(failure) => println!("request failed: {failure}"),
    }
}
