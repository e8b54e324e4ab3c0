//! Typed HTTP request execution with explicit outcome classification.
//!
//! # Overview
//! Builds requests from composable URL and header values, hands them to a
//! pluggable transport for the network exchange, and classifies every call
//! into exactly one of three outcomes: a predicate-approved success, a
//! received-but-unexpected response, or a connection failure with no
//! response at all.
//!
//! # Design
//! - Values are newtypes (`Protocol`, `Host`, `StatusCode`, ...) so the
//!   compiler keeps otherwise-identical strings and integers apart.
//! - Success is a caller-supplied predicate over the status code, `eq(OK)`
//!   unless overridden; non-2xx statuses are data, never transport errors.
//! - `HttpResult` is a plain `Result`, so outcome handling is an ordinary
//!   exhaustive `match` and failures travel with `?`.
//! - The transport is a trait. `UreqTransport` performs real I/O with one
//!   scoped agent per call; tests swap in scripted transports.

pub mod client;
pub mod headers;
pub mod predicate;
pub mod response;
pub mod status;
pub mod transport;
pub mod types;
pub mod url;

pub use client::Client;
pub use headers::{Headers, ResponseHeaders};
pub use predicate::{
    between_inclusive, client_error, eq, informational, logical_or, redirect, server_error,
    successful, Predicate,
};
pub use response::{ConnectionFailure, HttpFailure, HttpResponse, HttpResult, HttpSuccess};
pub use status::StatusCode;
pub use transport::{Method, RawResponse, Transport, TransportRequest, UreqTransport};
pub use types::{Host, PathSegment, Protocol, QueryKey, QueryValue, RequestBody, ResponseBody};
pub use url::{PathSegments, QueryParameters, Url};
