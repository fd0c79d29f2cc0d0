#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, unreachable_pub, missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
//! An IRI parser, normalizer, resolver, and recomposer that strictly
//! adheres to IETF [RFC 3986] and [RFC 3987], with scheme-specific
//! validation for `http`/`https`, `file`, `urn`, and `uuid`.
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//! [RFC 3987]: https://datatracker.ietf.org/doc/html/rfc3987/
//!
//! Parsing records the half-open offsets of the components within the
//! source string and allocates nothing else; getters return subslices
//! on demand. An [`Iri`] is immutable, and normalization, resolution,
//! and relativization return new values.
//!
//! # Examples
//!
//! Parse, validate, and extract:
//!
//! ```
//! use fluent_iri::Iri;
//!
//! let iri = Iri::parse("http://user@host:8081/abc/def?qs=ghi#jkl")?;
//! assert_eq!(iri.authority().unwrap().as_str(), "user@host:8081");
//! assert_eq!(iri.path(), "/abc/def");
//!
//! assert!(fluent_iri::check(":no-scheme").is_err());
//! # Ok::<_, fluent_iri::ParseError>(())
//! ```
//!
//! Resolve a reference against a base and back:
//!
//! ```
//! use fluent_iri::Iri;
//!
//! let base = Iri::parse("http://example.com/a/b")?;
//! let target = Iri::parse("c")?.resolve_against(&base)?;
//! assert_eq!(target, "http://example.com/a/c");
//! assert_eq!(base.relativize(&target).unwrap(), "c");
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate features
//!
//! - `std` (default): `std::error::Error` implementations for the
//!   error types. Disable for `no_std` use; an allocator is required
//!   either way.
//! - `serde`: `Serialize` and `Deserialize` for [`Iri`].

extern crate alloc;

mod build;
pub mod component;
pub mod dns;
mod error;
mod internal;
pub mod ip;
mod iri;
mod normalize;
mod parser;
mod relative;
mod resolve;
mod scheme;
pub mod table;

pub use build::Builder;
pub use error::{
    Error, ParseError, ParseErrorKind, ResolveError, SchemeError, SchemeErrorKind,
};
pub use iri::{Iri, ToIri};
pub use scheme::{Compliance, SchemeRules};

/// Checks a string against the IRI-reference grammar.
///
/// # Errors
///
/// Returns `Err` if the string does not match the grammar.
///
/// # Examples
///
/// ```
/// assert!(fluent_iri::check("http://example.com/").is_ok());
/// assert!(fluent_iri::check("http://exa mple.com/").is_err());
/// ```
pub fn check(s: &str) -> Result<(), ParseError> {
    Iri::parse(s).map(|_| ())
}

/// Checks a string against the IRI-reference grammar and applies the
/// rules of its scheme under the given strictness settings.
///
/// # Errors
///
/// Returns `Err` if the string does not match the grammar or violates
/// a rule of its scheme.
///
/// # Examples
///
/// ```
/// use fluent_iri::SchemeRules;
///
/// let rules = SchemeRules::default();
/// assert!(fluent_iri::check_with("urn:example:abc", &rules).is_ok());
/// assert!(fluent_iri::check_with("urn:x:abc", &rules).is_err());
/// ```
pub fn check_with(s: &str, rules: &SchemeRules) -> Result<(), Error> {
    let iri = Iri::parse(s)?;
    iri.check_scheme_rules(rules)?;
    Ok(())
}
