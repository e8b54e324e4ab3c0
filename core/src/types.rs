//! String newtypes for the values the crate passes around.
//!
//! # Design
//! Every string in the public API gets its own single-field wrapper so the
//! compiler rejects accidental mixing; a `Host` where a `Protocol` is
//! expected is a type error, not a runtime surprise. The wrappers are pure
//! data: equality, ordering, and display all delegate to the wrapped string,
//! and `value()` exposes it for formatting and assertions.

/// Generates a string newtype with value-based equality/ordering, `Display`,
/// and `From` conversions from raw strings.
macro_rules! tiny_string {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// The wrapped string.
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

pub(crate) use tiny_string;

tiny_string!(
    /// URL scheme, the part before the `://` separator (`http`, `https`).
    Protocol
);

tiny_string!(
    /// Host and optional port, e.g. `localhost:5000`.
    Host
);

tiny_string!(
    /// One path element, inserted verbatim; no percent-encoding is applied.
    PathSegment
);

tiny_string!(
    /// Query parameter name.
    QueryKey
);

tiny_string!(
    /// Query parameter value.
    QueryValue
);

tiny_string!(
    /// Request payload, opaque to this crate.
    RequestBody
);

tiny_string!(
    /// Response payload, opaque to this crate.
    ResponseBody
);
