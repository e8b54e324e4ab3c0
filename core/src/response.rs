//! Response envelope and the success/failure outcome algebra.
//!
//! # Design
//! One request execution ends in exactly one of three places: the transport
//! never produced a response (`HttpFailure::Connection`), a response arrived
//! but missed the caller's success predicate (`HttpFailure::Unexpected`), or
//! the predicate held (`HttpSuccess`). `HttpResult` is a plain `Result`, so
//! callers branch with an ordinary exhaustive `match` and forward failures
//! with `?`.

use std::error::Error;
use std::fmt;

use crate::headers::ResponseHeaders;
use crate::status::StatusCode;
use crate::types::{tiny_string, ResponseBody};

tiny_string!(
    /// Transport error description, passed through verbatim from the
    /// transport. When this exists, no response was ever received.
    ConnectionFailure
);

/// A received HTTP response: status code, parsed headers, body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: ResponseHeaders,
    pub body: ResponseBody,
}

/// A response that satisfied the caller's success predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSuccess(HttpResponse);

impl HttpSuccess {
    pub fn new(response: HttpResponse) -> Self {
        Self(response)
    }

    pub fn status(&self) -> StatusCode {
        self.0.status
    }

    pub fn headers(&self) -> &ResponseHeaders {
        &self.0.headers
    }

    pub fn body(&self) -> &ResponseBody {
        &self.0.body
    }

    pub fn response(&self) -> &HttpResponse {
        &self.0
    }

    pub fn into_response(self) -> HttpResponse {
        self.0
    }
}

/// Why a request did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpFailure {
    /// No response was obtained: unresolvable host, unsupported protocol,
    /// refused connection, broken transfer.
    Connection(ConnectionFailure),
    /// A response arrived but its status failed the success predicate. The
    /// whole response is kept so callers can inspect why.
    Unexpected(HttpResponse),
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpFailure::Connection(failure) => {
                write!(f, "connection failure: {failure}")
            }
            HttpFailure::Unexpected(response) => {
                write!(f, "unexpected response: HTTP {}", response.status)
            }
        }
    }
}

impl Error for HttpFailure {}

/// Outcome of one request execution.
///
/// `Ok` wraps the predicate-approved response; `Err` distinguishes the two
/// failure kinds. `.ok()` and `.err()` extract one side when a full match
/// is not wanted.
pub type HttpResult = Result<HttpSuccess, HttpFailure>;
