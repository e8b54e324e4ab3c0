//! POST a JSON body to the local mock server and print the echoed field.

use simple_http::{Client, Headers, RequestBody, Url};

fn main() {
    let client = Client::new();
    let headers = Headers::from([("Content-Type".to_string(), "application/json".to_string())]);

    let result = client.post(
        &Url::from("http://localhost:5000/post"),
        &RequestBody::from("{\"name\":\"test\"}"),
        &headers,
    );

    match result {
        Ok(success) => {
            let keys: serde_json::Value =
                serde_json::from_str(success.body().value()).expect("mock server replies JSON");
            println!("{}", keys["hello"]);
        }
        Err(failure) => println!("request failed: {failure}"),
    }
}
