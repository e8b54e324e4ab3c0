//! GET a public https endpoint and walk every outcome branch explicitly.

use simple_http::{Client, Headers, HttpFailure, Url};

fn main() {
    let client = Client::new();
    let url = Url::from("https://jsonplaceholder.typicode.com/users");

    match client.get(&url, &Headers::new()) {
        Ok(success) => {
            let users: serde_json::Value =
                serde_json::from_str(success.body().value()).expect("endpoint replies JSON");
            println!("first user id: {}", users[0]["id"]);
        }
        Err(HttpFailure::Connection(failure)) => {
            println!("Failed GET for: {}, {}", url.value(), failure.value());
        }
        Err(HttpFailure::Unexpected(response)) => {
            println!("Failed GET for: {}, HTTP {}", url.value(), response.status);
        }
    }
}
