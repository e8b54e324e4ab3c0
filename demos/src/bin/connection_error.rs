//! Show the connection-failure branch: no server ever answers here.

use simple_http::{Client, Headers, HttpFailure, Url};

fn main() {
    let client = Client::new();

    match client.get(&Url::from("error"), &Headers::new()) {
        Ok(success) => println!("unexpectedly reached something: HTTP {}", success.status()),
        Err(HttpFailure::Connection(failure)) => println!("Error: {}", failure.value()),
        Err(HttpFailure::Unexpected(response)) => {
            println!("unexpectedly got a response: HTTP {}", response.status)
        }
    }
}
