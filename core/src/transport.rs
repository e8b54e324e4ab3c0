//! The transport contract and the ureq-backed production adapter.
//!
//! # Design
//! The core never opens a socket. [`Transport::perform`] receives one fully
//! built request and returns either the raw exchange (numeric status, raw
//! header block, body text) or a transport error description; nothing in
//! between. Tests swap in scripted transports through the same seam.
//!
//! [`UreqTransport`] fulfils the contract with ureq. Each call builds a
//! fresh agent on its own stack frame, so the handle is released on every
//! exit path and nothing is pooled or shared between calls. Status codes
//! are always surfaced as data; classifying them is the client's job.

use std::fmt;

use ureq::tls::TlsConfig;
use ureq::Agent;

use crate::headers::Headers;
use crate::response::ConnectionFailure;

/// HTTP method for one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Trace,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully built request, as handed to the transport.
#[derive(Debug)]
pub struct TransportRequest<'a> {
    pub method: Method,
    pub url: &'a str,
    pub headers: &'a Headers,
    pub body: Option<&'a str>,
    pub verify_tls: bool,
    pub verbose: bool,
}

/// The raw material of a received response, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub header_block: String,
    pub body: String,
}

/// The external engine that performs one network exchange.
pub trait Transport {
    /// Executes `request`, returning the raw exchange or a transport-level
    /// error description. Implementations report network failure through
    /// the error side, never by panicking.
    fn perform(&self, request: &TransportRequest<'_>) -> Result<RawResponse, ConnectionFailure>;
}

/// Production transport over [`ureq`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl UreqTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for UreqTransport {
    fn perform(&self, request: &TransportRequest<'_>) -> Result<RawResponse, ConnectionFailure> {
        if request.verbose {
            tracing::debug!(
                method = request.method.as_str(),
                url = request.url,
                "dispatching request"
            );
        }

        let mut config = Agent::config_builder()
            .http_status_as_error(false)
            // Redirect statuses classify like any other response.
            .max_redirects(0)
            .max_redirects_will_error(false);
        // Verification is only relaxed for https URLs; plain http has no
        // TLS layer to configure.
        if !request.verify_tls && request.url.starts_with("https") {
            config = config.tls_config(TlsConfig::builder().disable_verification(true).build());
        }
        let agent = config.build().new_agent();

        let sent = match (request.method, request.body) {
            (Method::Get, _) => apply_headers(agent.get(request.url), request.headers).call(),
            (Method::Delete, _) => apply_headers(agent.delete(request.url), request.headers).call(),
            (Method::Head, _) => apply_headers(agent.head(request.url), request.headers).call(),
            (Method::Options, _) => {
                apply_headers(agent.options(request.url), request.headers).call()
            }
            (Method::Trace, _) => apply_headers(agent.trace(request.url), request.headers).call(),
            (Method::Post, Some(body)) => {
                apply_headers(agent.post(request.url), request.headers).send(body.as_bytes())
            }
            (Method::Post, None) => {
                apply_headers(agent.post(request.url), request.headers).send_empty()
            }
            (Method::Put, Some(body)) => {
                apply_headers(agent.put(request.url), request.headers).send(body.as_bytes())
            }
            (Method::Put, None) => {
                apply_headers(agent.put(request.url), request.headers).send_empty()
            }
        };

        let mut response = match sent {
            Ok(response) => response,
            Err(error) => {
                if request.verbose {
                    tracing::debug!(error = %error, "transport error");
                }
                return Err(ConnectionFailure::from(error.to_string()));
            }
        };

        let status = response.status().as_u16();
        let header_block = raw_header_block(&response);
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|error| ConnectionFailure::from(error.to_string()))?;

        if request.verbose {
            tracing::debug!(status, body_bytes = body.len(), "response received");
        }

        Ok(RawResponse {
            status,
            header_block,
            body,
        })
    }
}

fn apply_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &Headers,
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

/// Renders the status line and headers the way a raw HTTP/1.1 header block
/// reads, one `Name: value` line per header.
fn raw_header_block(response: &ureq::http::Response<ureq::Body>) -> String {
    let mut block = format!("{:?} {}\n", response.version(), response.status());
    for (name, value) in response.headers() {
        let value = String::from_utf8_lossy(value.as_bytes());
        block.push_str(&format!("{name}: {value}\n"));
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_render_their_wire_names() {
        let expected = [
            (Method::Get, "GET"),
            (Method::Post, "POST"),
            (Method::Put, "PUT"),
            (Method::Delete, "DELETE"),
            (Method::Head, "HEAD"),
            (Method::Options, "OPTIONS"),
            (Method::Trace, "TRACE"),
        ];
        for (method, name) in expected {
            assert_eq!(method.as_str(), name);
            assert_eq!(method.to_string(), name);
        }
    }
}
