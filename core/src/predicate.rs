//! Composable boolean predicates over plain values and status codes.
//!
//! # Design
//! A predicate is any pure `Fn(&A) -> bool`; the [`Predicate`] alias names
//! that shape so signatures stay readable. The combinators are generic, so
//! they calibrate against bare integers as easily as status codes; the five
//! range classifiers fix `A = StatusCode`.
//!
//! The classifiers are endpoint-based, spanning from the first to the last
//! assigned code of each class. Unassigned codes inside a span (209 through
//! 225, 306, and so on) therefore classify as members. Callers that need an
//! exact set should compose one from [`eq`] and [`logical_or`].

use crate::status::{self, StatusCode};

/// A pure boolean test over `A`.
///
/// Blanket-implemented for every matching closure, so `eq(OK)` and
/// hand-written closures interchange freely.
pub trait Predicate<A>: Fn(&A) -> bool {}

impl<A, F> Predicate<A> for F where F: Fn(&A) -> bool {}

/// Matches values equal to `expected`.
pub fn eq<A>(expected: A) -> impl Predicate<A>
where
    A: PartialEq,
{
    move |other: &A| *other == expected
}

/// Matches values in `lo..=hi`, endpoints included. With `lo > hi` no value
/// satisfies both bounds, so the predicate matches nothing.
pub fn between_inclusive<A>(lo: A, hi: A) -> impl Predicate<A>
where
    A: PartialOrd,
{
    move |other: &A| lo <= *other && *other <= hi
}

/// Matches values equal to either `a` or `b`.
pub fn logical_or<A>(a: A, b: A) -> impl Predicate<A>
where
    A: PartialEq,
{
    move |other: &A| *other == a || *other == b
}

/// Matches the 1xx informational class, 100 through 103.
pub fn informational() -> impl Predicate<StatusCode> {
    between_inclusive(status::CONTINUE, status::EARLY_HINTS)
}

/// Matches the 2xx successful class, 200 through 226.
pub fn successful() -> impl Predicate<StatusCode> {
    between_inclusive(status::OK, status::IM_USED)
}

/// Matches the 3xx redirect class, 300 through 308.
pub fn redirect() -> impl Predicate<StatusCode> {
    between_inclusive(status::MULTIPLE_CHOICE, status::PERMANENT_REDIRECT)
}

/// Matches the 4xx client error class, 400 through 451.
pub fn client_error() -> impl Predicate<StatusCode> {
    between_inclusive(status::BAD_REQUEST, status::UNAVAILABLE_FOR_LEGAL_REASONS)
}

/// Matches the 5xx server error class, 500 through 511.
pub fn server_error() -> impl Predicate<StatusCode> {
    between_inclusive(
        status::INTERNAL_SERVER_ERROR,
        status::NETWORK_AUTHENTICATION_REQUIRED,
    )
}
