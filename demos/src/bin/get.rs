//! GET against the local mock server, printing one field of the JSON body.
//!
//! Run `cargo run -p mock-server` first; it listens on port 5000.

use simple_http::{Client, Headers, Url};

fn main() {
    let client = Client::new();

    match client.get(&Url::from("http://localhost:5000/get"), &Headers::new()) {
        Ok(success) => {
            let keys: serde_json::Value =
                serde_json::from_str(success.body().value()).expect("mock server replies JSON");
            println!("{}", keys["get"]);
        }
        Err(failure) => println!("request failed: {failure}"),
    }
}
