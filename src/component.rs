//! Components of an IRI reference.

use crate::{internal::AuthMeta, table};
use core::{hash, iter, num::ParseIntError};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared ASCII-case-insensitively. You should do a
/// case-insensitive comparison if the scheme specification allows both
/// letter cases in the scheme name.
///
/// # Examples
///
/// ```
/// use fluent_iri::{component::Scheme, Iri};
///
/// const SCHEME_HTTP: &Scheme = Scheme::new_or_panic("http");
///
/// let scheme = Iri::parse("HTTP://EXAMPLE.COM/")?.scheme().unwrap();
///
/// // Case-insensitive comparison.
/// assert_eq!(scheme, SCHEME_HTTP);
/// // Case-sensitive comparison.
/// assert_eq!(scheme.as_str(), "HTTP");
/// # Ok::<_, fluent_iri::ParseError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

const ASCII_CASE_MASK: u8 = 0b0010_0000;

impl Scheme {
    #[ref_cast_custom]
    pub(crate) const fn new_validated(scheme: &str) -> &Self;

    /// Converts a string slice to `&Scheme`, returning `None` if the
    /// string is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme].
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        let b = s.as_bytes();
        if b.is_empty() || !b[0].is_ascii_alphabetic() {
            return None;
        }
        let mut i = 1;
        while i < b.len() {
            if !table::SCHEME.allows_ascii(b[i]) {
                return None;
            }
            i += 1;
        }
        Some(Scheme::new_validated(s))
    }

    /// Converts a string slice to `&Scheme`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name. For a
    /// non-panicking variant, use [`new`](Self::new).
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Scheme {
        match Scheme::new(s) {
            Some(scheme) => scheme,
            None => panic!("invalid scheme"),
        }
    }

    /// Returns the scheme component as a string slice in its original case.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Scheme {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.inner.as_bytes(), other.inner.as_bytes());
        // The only characters allowed in a scheme are alphabets, digits,
        // '+', '-' and '.'. Their ASCII codes allow us to simply set the
        // sixth bits and compare.
        a.len() == b.len()
            && iter::zip(a, b).all(|(x, y)| x | ASCII_CASE_MASK == y | ASCII_CASE_MASK)
    }
}

impl Eq for Scheme {}

impl hash::Hash for Scheme {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for x in self.inner.bytes() {
            state.write_u8(x | ASCII_CASE_MASK);
        }
    }
}

impl core::fmt::Debug for Scheme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.inner, f)
    }
}

impl core::fmt::Display for Scheme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)
    }
}

/// The kind of a parsed [host] subcomponent.
///
/// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HostKind {
    /// A registered name.
    ///
    /// Note that ASCII characters within a registered name are
    /// *case-insensitive*.
    RegName,
    /// An IPv4 address.
    Ipv4,
    /// An IPv6 address, enclosed in square brackets.
    Ipv6,
    /// An IP address of future version, enclosed in square brackets.
    IpvFuture,
}

/// An [authority] component.
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
#[derive(Clone, Copy)]
pub struct Authority<'a> {
    val: &'a str,
    meta: AuthMeta,
}

impl<'a> Authority<'a> {
    pub(crate) fn new(val: &'a str, meta: AuthMeta) -> Self {
        Self { val, meta }
    }

    /// Returns the authority component as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_iri::Iri;
    ///
    /// let iri = Iri::parse("http://user@example.com:8080/")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.as_str(), "user@example.com:8080");
    /// # Ok::<_, fluent_iri::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.val
    }

    /// Returns the optional [userinfo] subcomponent.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_iri::Iri;
    ///
    /// let iri = Iri::parse("http://user@example.com/")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.userinfo(), Some("user"));
    ///
    /// let iri = Iri::parse("http://example.com/")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.userinfo(), None);
    /// # Ok::<_, fluent_iri::ParseError>(())
    /// ```
    #[must_use]
    pub fn userinfo(&self) -> Option<&'a str> {
        let host_start = self.meta.host_bounds.0 - self.meta.start;
        (host_start != 0).then(|| &self.val[..host_start - 1])
    }

    /// Returns the [host] subcomponent as a string slice.
    ///
    /// The host subcomponent is always present, although it may be empty.
    ///
    /// The square brackets enclosing an IPv6 or IPvFuture address are
    /// included.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_iri::Iri;
    ///
    /// let iri = Iri::parse("http://user@example.com:8080/")?;
    /// assert_eq!(iri.authority().unwrap().host(), "example.com");
    ///
    /// let iri = Iri::parse("file:///path/to/file")?;
    /// assert_eq!(iri.authority().unwrap().host(), "");
    ///
    /// let iri = Iri::parse("http://[::1]:8080/")?;
    /// assert_eq!(iri.authority().unwrap().host(), "[::1]");
    /// # Ok::<_, fluent_iri::ParseError>(())
    /// ```
    #[must_use]
    pub fn host(&self) -> &'a str {
        let (start, end) = self.meta.host_bounds;
        &self.val[start - self.meta.start..end - self.meta.start]
    }

    /// Returns the kind of the host subcomponent.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_iri::{component::HostKind, Iri};
    ///
    /// let iri = Iri::parse("foo://127.0.0.1")?;
    /// assert_eq!(iri.authority().unwrap().host_kind(), HostKind::Ipv4);
    ///
    /// let iri = Iri::parse("foo://[::1]")?;
    /// assert_eq!(iri.authority().unwrap().host_kind(), HostKind::Ipv6);
    ///
    /// let iri = Iri::parse("foo://localhost")?;
    /// assert_eq!(iri.authority().unwrap().host_kind(), HostKind::RegName);
    /// # Ok::<_, fluent_iri::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn host_kind(&self) -> HostKind {
        self.meta.host_kind
    }

    /// Returns the optional [port] subcomponent.
    ///
    /// Note that the port may be empty, with leading zeros, or larger
    /// than [`u16::MAX`].
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_iri::Iri;
    ///
    /// let iri = Iri::parse("foo://localhost:4673/")?;
    /// assert_eq!(iri.authority().unwrap().port(), Some("4673"));
    ///
    /// let iri = Iri::parse("foo://localhost:/")?;
    /// assert_eq!(iri.authority().unwrap().port(), Some(""));
    ///
    /// let iri = Iri::parse("foo://localhost/")?;
    /// assert_eq!(iri.authority().unwrap().port(), None);
    /// # Ok::<_, fluent_iri::ParseError>(())
    /// ```
    #[must_use]
    pub fn port(&self) -> Option<&'a str> {
        let host_end = self.meta.host_bounds.1 - self.meta.start;
        (host_end != self.val.len()).then(|| &self.val[host_end + 1..])
    }

    /// Converts the [port] subcomponent to `u16`, if present and nonempty.
    ///
    /// Returns `Ok(None)` if the port is not present or is empty.
    /// Leading zeros are ignored.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    ///
    /// # Errors
    ///
    /// Returns `Err` if the port cannot be parsed into `u16`.
    pub fn port_to_u16(&self) -> Result<Option<u16>, ParseIntError> {
        self.port()
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .transpose()
    }

    /// Checks whether a userinfo subcomponent is present.
    #[inline]
    #[must_use]
    pub fn has_userinfo(&self) -> bool {
        self.meta.host_bounds.0 != self.meta.start
    }

    /// Checks whether a port subcomponent is present.
    ///
    /// Note that the port subcomponent may be present but empty.
    #[inline]
    #[must_use]
    pub fn has_port(&self) -> bool {
        self.meta.host_bounds.1 - self.meta.start != self.val.len()
    }
}

impl<'a> core::fmt::Debug for Authority<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Authority")
            .field("userinfo", &self.userinfo())
            .field("host", &self.host())
            .field("port", &self.port())
            .finish()
    }
}

impl<'a> core::fmt::Display for Authority<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(self.val, f)
    }
}
