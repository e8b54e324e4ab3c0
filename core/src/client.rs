//! Client verbs and the execute/classify loop.
//!
//! # Design
//! `Client` owns nothing but a transport and two flags. Every verb funnels
//! into [`Client::execute`], which builds a `TransportRequest`, hands it to
//! the transport, and classifies whatever comes back: a transport error is
//! `HttpFailure::Connection`, a response failing the success predicate is
//! `HttpFailure::Unexpected`, and anything else is `HttpSuccess`. One call,
//! one outcome; no retries and no partial states.
//!
//! Each verb comes in two forms: the plain one expects status 200, the
//! `_expecting` one takes an explicit success predicate.

use crate::headers::{Headers, ResponseHeaders};
use crate::predicate::{eq, Predicate};
use crate::response::{HttpFailure, HttpResponse, HttpResult, HttpSuccess};
use crate::status::{StatusCode, OK};
use crate::transport::{Method, Transport, TransportRequest, UreqTransport};
use crate::types::{RequestBody, ResponseBody};
use crate::url::Url;

/// Synchronous HTTP client over a pluggable transport.
///
/// TLS verification defaults to on and only ever applies to https URLs.
/// The debug flag asks the transport for verbose diagnostics on its logging
/// side channel; it never changes what the caller receives.
#[derive(Debug, Clone)]
pub struct Client<T = UreqTransport> {
    transport: T,
    verify_tls: bool,
    debug: bool,
}

impl Client<UreqTransport> {
    pub fn new() -> Self {
        Self::with_transport(UreqTransport::new())
    }
}

impl Default for Client<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Client<T> {
    /// A client delegating every exchange to `transport`.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            verify_tls: true,
            debug: false,
        }
    }

    pub fn with_tls_verification(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// GET expecting 200.
    pub fn get(&self, url: &Url, headers: &Headers) -> HttpResult {
        self.get_expecting(url, eq(OK), headers)
    }

    /// GET judged by `success`.
    pub fn get_expecting(
        &self,
        url: &Url,
        success: impl Predicate<StatusCode>,
        headers: &Headers,
    ) -> HttpResult {
        self.execute(Method::Get, url, None, headers, success)
    }

    /// POST expecting 200.
    pub fn post(&self, url: &Url, body: &RequestBody, headers: &Headers) -> HttpResult {
        self.post_expecting(url, body, eq(OK), headers)
    }

    /// POST judged by `success`.
    pub fn post_expecting(
        &self,
        url: &Url,
        body: &RequestBody,
        success: impl Predicate<StatusCode>,
        headers: &Headers,
    ) -> HttpResult {
        self.execute(Method::Post, url, Some(body), headers, success)
    }

    /// PUT expecting 200.
    pub fn put(&self, url: &Url, body: &RequestBody, headers: &Headers) -> HttpResult {
        self.put_expecting(url, body, eq(OK), headers)
    }

    /// PUT judged by `success`.
    pub fn put_expecting(
        &self,
        url: &Url,
        body: &RequestBody,
        success: impl Predicate<StatusCode>,
        headers: &Headers,
    ) -> HttpResult {
        self.execute(Method::Put, url, Some(body), headers, success)
    }

    /// DELETE expecting 200.
    pub fn delete(&self, url: &Url, headers: &Headers) -> HttpResult {
        self.delete_expecting(url, eq(OK), headers)
    }

    /// DELETE judged by `success`.
    pub fn delete_expecting(
        &self,
        url: &Url,
        success: impl Predicate<StatusCode>,
        headers: &Headers,
    ) -> HttpResult {
        self.execute(Method::Delete, url, None, headers, success)
    }

    /// HEAD expecting 200.
    pub fn head(&self, url: &Url, headers: &Headers) -> HttpResult {
        self.head_expecting(url, eq(OK), headers)
    }

    /// HEAD judged by `success`.
    pub fn head_expecting(
        &self,
        url: &Url,
        success: impl Predicate<StatusCode>,
        headers: &Headers,
    ) -> HttpResult {
        self.execute(Method::Head, url, None, headers, success)
    }

    /// OPTIONS expecting 200.
    pub fn options(&self, url: &Url, headers: &Headers) -> HttpResult {
        self.options_expecting(url, eq(OK), headers)
    }

    /// OPTIONS judged by `success`.
    pub fn options_expecting(
        &self,
        url: &Url,
        success: impl Predicate<StatusCode>,
        headers: &Headers,
    ) -> HttpResult {
        self.execute(Method::Options, url, None, headers, success)
    }

    /// TRACE expecting 200.
    pub fn trace(&self, url: &Url, headers: &Headers) -> HttpResult {
        self.trace_expecting(url, eq(OK), headers)
    }

    /// TRACE judged by `success`.
    pub fn trace_expecting(
        &self,
        url: &Url,
        success: impl Predicate<StatusCode>,
        headers: &Headers,
    ) -> HttpResult {
        self.execute(Method::Trace, url, None, headers, success)
    }

    /// Builds the request, performs it, classifies the outcome.
    pub fn execute(
        &self,
        method: Method,
        url: &Url,
        body: Option<&RequestBody>,
        headers: &Headers,
        success: impl Predicate<StatusCode>,
    ) -> HttpResult {
        let request = TransportRequest {
            method,
            url: url.value(),
            headers,
            body: body.map(RequestBody::value),
            verify_tls: self.verify_tls,
            verbose: self.debug,
        };

        let raw = match self.transport.perform(&request) {
            Ok(raw) => raw,
            Err(failure) => return Err(HttpFailure::Connection(failure)),
        };

        let response = HttpResponse {
            status: StatusCode::new(raw.status),
            headers: ResponseHeaders::parse(&raw.header_block),
            body: ResponseBody::from(raw.body),
        };

        if success(&response.status) {
            Ok(HttpSuccess::new(response))
        } else {
            Err(HttpFailure::Unexpected(response))
        }
    }
}
