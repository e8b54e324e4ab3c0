//! Numeric status codes and named constants for the assigned IANA set.

use std::fmt;

/// Numeric HTTP status code.
///
/// An integer newtype with value-based equality and ordering, so predicates
/// can compare codes without caring how they were produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// The wrapped numeric code.
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

// 1xx informational
pub const CONTINUE: StatusCode = StatusCode::new(100);
pub const SWITCHING_PROTOCOLS: StatusCode = StatusCode::new(101);
pub const PROCESSING: StatusCode = StatusCode::new(102);
pub const EARLY_HINTS: StatusCode = StatusCode::new(103);

// 2xx successful
pub const OK: StatusCode = StatusCode::new(200);
pub const CREATED: StatusCode = StatusCode::new(201);
pub const ACCEPTED: StatusCode = StatusCode::new(202);
pub const NON_AUTHORITATIVE_INFORMATION: StatusCode = StatusCode::new(203);
pub const NO_CONTENT: StatusCode = StatusCode::new(204);
pub const RESET_CONTENT: StatusCode = StatusCode::new(205);
pub const PARTIAL_CONTENT: StatusCode = StatusCode::new(206);
pub const MULTI_STATUS: StatusCode = StatusCode::new(207);
pub const ALREADY_REPORTED: StatusCode = StatusCode::new(208);
pub const IM_USED: StatusCode = StatusCode::new(226);

// 3xx redirect
pub const MULTIPLE_CHOICE: StatusCode = StatusCode::new(300);
pub const MOVED_PERMANENTLY: StatusCode = StatusCode::new(301);
pub const FOUND: StatusCode = StatusCode::new(302);
pub const SEE_OTHER: StatusCode = StatusCode::new(303);
pub const NOT_MODIFIED: StatusCode = StatusCode::new(304);
pub const USE_PROXY: StatusCode = StatusCode::new(305);
pub const TEMPORARY_REDIRECT: StatusCode = StatusCode::new(307);
pub const PERMANENT_REDIRECT: StatusCode = StatusCode::new(308);

// 4xx client error
pub const BAD_REQUEST: StatusCode = StatusCode::new(400);
pub const UNAUTHORIZED: StatusCode = StatusCode::new(401);
pub const PAYMENT_REQUIRED: StatusCode = StatusCode::new(402);
pub const FORBIDDEN: StatusCode = StatusCode::new(403);
pub const NOT_FOUND: StatusCode = StatusCode::new(404);
pub const METHOD_NOT_ALLOWED: StatusCode = StatusCode::new(405);
pub const NOT_ACCEPTABLE: StatusCode = StatusCode::new(406);
pub const PROXY_AUTHENTICATION_REQUIRED: StatusCode = StatusCode::new(407);
pub const REQUEST_TIMEOUT: StatusCode = StatusCode::new(408);
pub const CONFLICT: StatusCode = StatusCode::new(409);
pub const GONE: StatusCode = StatusCode::new(410);
pub const LENGTH_REQUIRED: StatusCode = StatusCode::new(411);
pub const PRECONDITION_FAILED: StatusCode = StatusCode::new(412);
pub const PAYLOAD_TOO_LARGE: StatusCode = StatusCode::new(413);
pub const URI_TOO_LONG: StatusCode = StatusCode::new(414);
pub const UNSUPPORTED_MEDIA_TYPE: StatusCode = StatusCode::new(415);
pub const RANGE_NOT_SATISFIABLE: StatusCode = StatusCode::new(416);
pub const EXPECTATION_FAILED: StatusCode = StatusCode::new(417);
pub const IM_A_TEAPOT: StatusCode = StatusCode::new(418);
pub const MISDIRECTED_REQUEST: StatusCode = StatusCode::new(421);
pub const UNPROCESSABLE_ENTITY: StatusCode = StatusCode::new(422);
pub const LOCKED: StatusCode = StatusCode::new(423);
pub const FAILED_DEPENDENCY: StatusCode = StatusCode::new(424);
pub const TOO_EARLY: StatusCode = StatusCode::new(425);
pub const UPGRADE_REQUIRED: StatusCode = StatusCode::new(426);
pub const PRECONDITION_REQUIRED: StatusCode = StatusCode::new(428);
pub const TOO_MANY_REQUESTS: StatusCode = StatusCode::new(429);
pub const REQUEST_HEADER_FIELDS_TOO_LARGE: StatusCode = StatusCode::new(431);
pub const UNAVAILABLE_FOR_LEGAL_REASONS: StatusCode = StatusCode::new(451);

// 5xx server error
pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode::new(500);
pub const NOT_IMPLEMENTED: StatusCode = StatusCode::new(501);
pub const BAD_GATEWAY: StatusCode = StatusCode::new(502);
pub const SERVICE_UNAVAILABLE: StatusCode = StatusCode::new(503);
pub const GATEWAY_TIMEOUT: StatusCode = StatusCode::new(504);
pub const HTTP_VERSION_NOT_SUPPORTED: StatusCode = StatusCode::new(505);
pub const VARIANT_ALSO_NEGOTIATES: StatusCode = StatusCode::new(506);
pub const INSUFFICIENT_STORAGE: StatusCode = StatusCode::new(507);
pub const LOOP_DETECTED: StatusCode = StatusCode::new(508);
pub const NOT_EXTENDED: StatusCode = StatusCode::new(510);
pub const NETWORK_AUTHENTICATION_REQUIRED: StatusCode = StatusCode::new(511);
