use crate::{
    build,
    component::{Authority, Scheme},
    error::{ParseError, ResolveError, SchemeError},
    internal::Meta,
    normalize, parser, relative, resolve,
    scheme::SchemeRules,
};
use alloc::{borrow::ToOwned, string::String};
use borrow_or_share::{BorrowOrShare, Bos};
use core::{
    borrow::Borrow,
    cmp::Ordering,
    fmt, hash,
    num::NonZeroUsize,
    str::{FromStr, Split},
};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// An IRI reference defined in [RFC 3987]: either an IRI or a relative
/// reference.
///
/// [RFC 3987]: https://datatracker.ietf.org/doc/html/rfc3987
///
/// # Variants
///
/// Two variants of `Iri` are available: `Iri<&str>` (borrowed) and
/// `Iri<String>` (owned). Parsing records the offsets of the
/// components within the source string and nothing else; component
/// getters return subslices of the source on demand.
///
/// `Iri<&'a str>` outputs references with lifetime `'a` where possible
/// (thanks to [`borrow-or-share`](borrow_or_share)):
///
/// ```
/// use fluent_iri::Iri;
///
/// // Keep a reference to the path after dropping the `Iri`.
/// let path = Iri::parse("foo:bar")?.path();
/// assert_eq!(path, "bar");
/// # Ok::<_, fluent_iri::ParseError>(())
/// ```
///
/// # Comparison
///
/// `Iri`s are compared [lexicographically](Ord#lexicographical-comparison)
/// by their byte values. Normalization is **not** performed prior to
/// comparison.
///
/// # Examples
///
/// Parse and extract components from an IRI reference:
///
/// ```
/// use fluent_iri::{component::Scheme, Iri};
///
/// const SCHEME_FOO: &Scheme = Scheme::new_or_panic("foo");
///
/// let s = "foo://user@example.com:8042/over/there?name=ferret#nose";
/// let iri = Iri::parse(s)?;
///
/// assert_eq!(iri.scheme().unwrap(), SCHEME_FOO);
///
/// let auth = iri.authority().unwrap();
/// assert_eq!(auth.as_str(), "user@example.com:8042");
/// assert_eq!(auth.userinfo(), Some("user"));
/// assert_eq!(auth.host(), "example.com");
/// assert_eq!(auth.port(), Some("8042"));
///
/// assert_eq!(iri.path(), "/over/there");
/// assert_eq!(iri.query(), Some("name=ferret"));
/// assert_eq!(iri.fragment(), Some("nose"));
/// # Ok::<_, fluent_iri::ParseError>(())
/// ```
#[derive(Clone, Copy)]
pub struct Iri<T> {
    pub(crate) val: T,
    pub(crate) meta: Meta,
}

/// A type that can be parsed into an [`Iri`].
///
/// This trait is implemented for `&S` where `S: AsRef<str>`, producing
/// a borrowed `Iri<&str>`, and for `String`, producing an owned
/// `Iri<String>` whose parse error lets the input be recovered with
/// [`ParseError::into_input`].
pub trait ToIri {
    /// The storage type of the resulting `Iri`.
    type Val;
    /// The error type returned on invalid input.
    type Err;

    /// Parses `self` into an `Iri`.
    fn to_iri(self) -> Result<Iri<Self::Val>, Self::Err>;
}

impl<'a, S: AsRef<str> + ?Sized> ToIri for &'a S {
    type Val = &'a str;
    type Err = ParseError;

    fn to_iri(self) -> Result<Iri<&'a str>, ParseError> {
        let s = self.as_ref();
        parser::parse(s).map(|meta| Iri { val: s, meta })
    }
}

impl ToIri for String {
    type Val = String;
    type Err = ParseError<String>;

    fn to_iri(self) -> Result<Iri<String>, ParseError<String>> {
        match parser::parse(&self) {
            Ok(meta) => Ok(Iri { val: self, meta }),
            Err(e) => Err(e.with_input(self)),
        }
    }
}

impl<T> Iri<T> {
    /// Parses an IRI reference from a string into an `Iri`.
    ///
    /// The return type is `Result<Iri<&str>, ParseError>` for `I = &S`
    /// where `S: AsRef<str> + ?Sized`, and `Result<Iri<String>,
    /// ParseError<String>>` for `I = String`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string does not match the
    /// [`IRI-reference`][abnf] ABNF rule from RFC 3987.
    ///
    /// [abnf]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
    pub fn parse<I>(input: I) -> Result<Self, I::Err>
    where
        I: ToIri<Val = T>,
    {
        input.to_iri()
    }
}

impl Iri<String> {
    /// Borrows this `Iri<String>` as `Iri<&str>`.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    #[must_use]
    pub fn borrow(&self) -> Iri<&str> {
        Iri {
            val: &self.val,
            meta: self.meta,
        }
    }

    /// Consumes this `Iri<String>` and yields the underlying [`String`].
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.val
    }
}

impl Iri<&str> {
    /// Creates a new `Iri<String>` by cloning the contents of this `Iri<&str>`.
    #[inline]
    #[must_use]
    pub fn to_owned(&self) -> Iri<String> {
        Iri {
            val: self.val.to_owned(),
            meta: self.meta,
        }
    }
}

impl<'i, 'o, T: BorrowOrShare<'i, 'o, str>> Iri<T> {
    /// Returns the IRI reference as a string slice.
    #[must_use]
    pub fn as_str(&'i self) -> &'o str {
        self.val.borrow_or_share()
    }

    /// Returns the optional [scheme] component.
    ///
    /// Note that the scheme component is *case-insensitive*. See the
    /// documentation of [`Scheme`] for more details on comparison.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[must_use]
    pub fn scheme(&'i self) -> Option<&'o Scheme> {
        let s = self.as_str();
        self.meta
            .scheme_end
            .map(|end| Scheme::new_validated(&s[..end.get()]))
    }

    /// Returns the optional [authority] component.
    ///
    /// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
    #[must_use]
    pub fn authority(&'i self) -> Option<Authority<'o>> {
        let s = self.as_str();
        self.meta
            .auth_meta
            .map(|am| Authority::new(&s[am.start..self.meta.path_bounds.0], am))
    }

    /// Returns the optional userinfo subcomponent of the authority.
    #[must_use]
    pub fn userinfo(&'i self) -> Option<&'o str> {
        self.authority().and_then(|a| a.userinfo())
    }

    /// Returns the host subcomponent of the authority, if an authority
    /// is present.
    #[must_use]
    pub fn host(&'i self) -> Option<&'o str> {
        self.authority().map(|a| a.host())
    }

    /// Returns the optional port subcomponent of the authority.
    #[must_use]
    pub fn port(&'i self) -> Option<&'o str> {
        self.authority().and_then(|a| a.port())
    }

    /// Returns the [path] component.
    ///
    /// The path component is always present, although it may be empty.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
    #[must_use]
    pub fn path(&'i self) -> &'o str {
        &self.as_str()[self.meta.path_bounds.0..self.meta.path_bounds.1]
    }

    /// Returns an iterator over the `'/'`-separated segments of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_iri::Iri;
    ///
    /// let iri = Iri::parse("http://example.com/a/b/c")?;
    /// let segments: Vec<_> = iri.path_segments().collect();
    /// assert_eq!(segments, ["", "a", "b", "c"]);
    /// # Ok::<_, fluent_iri::ParseError>(())
    /// ```
    pub fn path_segments(&'i self) -> Split<'o, char> {
        self.path().split('/')
    }

    /// Returns the optional [query] component.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
    #[must_use]
    pub fn query(&'i self) -> Option<&'o str> {
        let s = self.as_str();
        self.meta
            .query_end
            .map(|end| &s[self.meta.path_bounds.1 + 1..end.get()])
    }

    /// Returns the optional [fragment] component.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
    #[must_use]
    pub fn fragment(&'i self) -> Option<&'o str> {
        let s = self.as_str();
        self.meta.fragment_start.map(|start| &s[start.get()..])
    }
}

impl<T: Bos<str>> Iri<T> {
    fn borrowed(&self) -> Iri<&str> {
        Iri {
            val: self.as_str(),
            meta: self.meta,
        }
    }

    /// Checks whether a scheme component is present.
    #[inline]
    #[must_use]
    pub fn has_scheme(&self) -> bool {
        self.meta.scheme_end.is_some()
    }

    /// Checks whether an authority component is present.
    #[inline]
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.meta.auth_meta.is_some()
    }

    /// Checks whether a userinfo subcomponent is present.
    #[must_use]
    pub fn has_userinfo(&self) -> bool {
        self.meta
            .auth_meta
            .is_some_and(|am| am.host_bounds.0 != am.start)
    }

    /// Checks whether a host subcomponent is present, i.e., whether an
    /// authority is present.
    ///
    /// Note that the host may be empty.
    #[inline]
    #[must_use]
    pub fn has_host(&self) -> bool {
        self.has_authority()
    }

    /// Checks whether a port subcomponent is present.
    ///
    /// Note that the port may be empty.
    #[must_use]
    pub fn has_port(&self) -> bool {
        self.meta
            .auth_meta
            .is_some_and(|am| am.host_bounds.1 != self.meta.path_bounds.0)
    }

    /// Checks whether a query component is present.
    #[inline]
    #[must_use]
    pub fn has_query(&self) -> bool {
        self.meta.query_end.is_some()
    }

    /// Checks whether a fragment component is present.
    #[inline]
    #[must_use]
    pub fn has_fragment(&self) -> bool {
        self.meta.fragment_start.is_some()
    }

    /// Checks whether the IRI reference is [absolute], i.e., with a
    /// scheme and without a fragment.
    ///
    /// Note that this function is not the opposite of
    /// [`is_relative`](Self::is_relative).
    ///
    /// [absolute]: https://datatracker.ietf.org/doc/html/rfc3986#section-4.3
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_iri::Iri;
    ///
    /// assert!(Iri::parse("http://example.com/")?.is_absolute());
    /// assert!(!Iri::parse("http://example.com/#title1")?.is_absolute());
    /// assert!(!Iri::parse("/path/to/file")?.is_absolute());
    /// # Ok::<_, fluent_iri::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.has_scheme() && !self.has_fragment()
    }

    /// Checks whether the IRI reference is [relative], i.e., without a
    /// scheme.
    ///
    /// [relative]: https://datatracker.ietf.org/doc/html/rfc3986#section-4.2
    #[inline]
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.has_scheme()
    }

    /// Checks whether the IRI reference is [hierarchical]: with a
    /// scheme, an authority, and a path beginning with `'/'`.
    ///
    /// [hierarchical]: https://datatracker.ietf.org/doc/html/rfc3986#section-1.2.3
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        self.has_scheme() && self.has_authority() && self.borrowed().path().starts_with('/')
    }

    /// Checks whether the IRI reference is rootless: with a scheme, no
    /// authority, and a nonempty path not beginning with `'/'`,
    /// like a `urn`.
    #[must_use]
    pub fn is_rootless(&self) -> bool {
        let path = self.borrowed().path();
        self.has_scheme() && !self.has_authority() && !path.is_empty() && !path.starts_with('/')
    }

    /// Normalizes the IRI reference as per
    /// [Section 6.2.2 of RFC 3986][norm] (Syntax-Based Normalization).
    ///
    /// The following operations are performed, in order:
    ///
    /// - The scheme and the host are lowercased.
    /// - In the authority, path, query, and fragment, percent-encoded
    ///   octets are uppercased and those corresponding to unreserved
    ///   characters are decoded.
    /// - Dot segments are removed from the path.
    /// - An `http` authority loses a `:80` port, an `https` authority a
    ///   `:443` one; an empty port loses its colon.
    /// - An empty path becomes `"/"` when an authority is present.
    ///
    /// The operation is idempotent.
    ///
    /// [norm]: https://datatracker.ietf.org/doc/html/rfc3986#section-6.2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_iri::Iri;
    ///
    /// let iri = Iri::parse("HTTPs://HOST:443/a/b/c?q=1#2")?;
    /// assert_eq!(iri.normalize(), "https://host/a/b/c?q=1#2");
    /// # Ok::<_, fluent_iri::ParseError>(())
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Iri<String> {
        normalize::normalize(&self.borrowed())
    }

    /// Resolves the IRI reference against the given base as per
    /// [Section 5.2 of RFC 3986][resolution] (Transform References).
    ///
    /// As a non-strict convenience, a reference whose scheme equals
    /// the base's is treated as if it had no scheme.
    ///
    /// [resolution]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2
    ///
    /// # Errors
    ///
    /// Returns `Err` if the base has no scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_iri::Iri;
    ///
    /// let base = Iri::parse("http://example/dir1/dir2/f3")?;
    /// let target = Iri::parse("..")?.resolve_against(&base)?;
    /// assert_eq!(target, "http://example/dir1/");
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn resolve_against<U: Bos<str>>(&self, base: &Iri<U>) -> Result<Iri<String>, ResolveError> {
        resolve::resolve(&self.borrowed(), &base.borrowed())
    }

    /// Computes a reference relative to `self` that resolves to `target`.
    ///
    /// This is a best-effort inverse of
    /// [`resolve_against`](Self::resolve_against) limited to the
    /// same-document and child-relative forms: `self` must have a
    /// scheme and no query, and `target` the same scheme and authority.
    /// Returns `None` when no relative reference of a supported form
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_iri::Iri;
    ///
    /// let base = Iri::parse("http://example.com/a/b")?;
    /// let target = Iri::parse("http://example.com/a/c?q=1")?;
    /// let rel = base.relativize(&target).unwrap();
    /// assert_eq!(rel, "c?q=1");
    /// assert_eq!(rel.resolve_against(&base)?, target);
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn relativize<U: Bos<str>>(&self, target: &Iri<U>) -> Option<Iri<String>> {
        relative::relativize(&self.borrowed(), &target.borrowed())
    }

    /// Recomposes the IRI reference from its components as per
    /// [Section 5.3 of RFC 3986][recomposition].
    ///
    /// The result is character-for-character identical to
    /// [`as_str`](Self::as_str).
    ///
    /// [recomposition]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.3
    #[must_use]
    pub fn rebuild(&self) -> String {
        let iri = self.borrowed();
        build::compose(
            iri.scheme().map(Scheme::as_str),
            iri.authority().map(|a| a.as_str()),
            iri.path(),
            iri.query(),
            iri.fragment(),
        )
    }

    /// Encodes the IRI reference into a URI reference as per
    /// [Section 3.1 of RFC 3987][mapping] by percent-encoding the
    /// UTF-8 bytes of every character above U+007F.
    ///
    /// [mapping]: https://datatracker.ietf.org/doc/html/rfc3987#section-3.1
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_iri::Iri;
    ///
    /// let iri = Iri::parse("http://example.com/résumé")?;
    /// assert_eq!(iri.to_uri(), "http://example.com/r%C3%A9sum%C3%A9");
    /// # Ok::<_, fluent_iri::ParseError>(())
    /// ```
    #[must_use]
    pub fn to_uri(&self) -> Iri<String> {
        let s = self.as_str();
        if s.is_ascii() {
            return Iri {
                val: s.to_owned(),
                meta: self.meta,
            };
        }

        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        let mut buf = String::with_capacity(s.len());
        for &x in s.as_bytes() {
            if x < 128 {
                buf.push(x as char);
            } else {
                buf.push('%');
                buf.push(HEX[(x >> 4) as usize] as char);
                buf.push(HEX[(x & 15) as usize] as char);
            }
        }

        // Every non-ASCII byte grew by two; shift the offsets accordingly.
        let shift = |i: usize| i + 2 * s.as_bytes()[..i].iter().filter(|&&x| x >= 128).count();
        let mut meta = self.meta;
        meta.scheme_end = meta.scheme_end.and_then(|e| NonZeroUsize::new(shift(e.get())));
        if let Some(am) = &mut meta.auth_meta {
            am.start = shift(am.start);
            am.host_bounds = (shift(am.host_bounds.0), shift(am.host_bounds.1));
        }
        meta.path_bounds = (shift(meta.path_bounds.0), shift(meta.path_bounds.1));
        meta.query_end = meta.query_end.and_then(|e| NonZeroUsize::new(shift(e.get())));
        meta.fragment_start = meta
            .fragment_start
            .and_then(|e| NonZeroUsize::new(shift(e.get())));

        Iri { val: buf, meta }
    }

    /// Applies the rules of the scheme, if the scheme is one of
    /// `http`, `https`, `file`, `urn`, `urn:uuid`, or `uuid`.
    ///
    /// Grammar checks and scheme checks are independent; this method
    /// may be invoked on any parsed reference.
    ///
    /// # Errors
    ///
    /// Returns `Err` on the first rule violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_iri::{Iri, SchemeRules};
    ///
    /// let iri = Iri::parse("http://user@example.com/")?;
    /// assert!(iri.check_scheme_rules(&SchemeRules::default()).is_err());
    /// # Ok::<_, fluent_iri::ParseError>(())
    /// ```
    pub fn check_scheme_rules(&self, rules: &SchemeRules) -> Result<(), SchemeError> {
        crate::scheme::check(&self.borrowed(), rules)
    }
}

impl Default for Iri<&str> {
    /// Creates an empty IRI reference.
    fn default() -> Self {
        Iri {
            val: "",
            meta: Meta::default(),
        }
    }
}

impl Default for Iri<String> {
    /// Creates an empty IRI reference.
    fn default() -> Self {
        Iri {
            val: String::new(),
            meta: Meta::default(),
        }
    }
}

impl<T: Bos<str>, U: Bos<str>> PartialEq<Iri<U>> for Iri<T> {
    fn eq(&self, other: &Iri<U>) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<T: Bos<str>> PartialEq<str> for Iri<T> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T: Bos<str>> PartialEq<Iri<T>> for str {
    fn eq(&self, other: &Iri<T>) -> bool {
        self == other.as_str()
    }
}

impl<T: Bos<str>> PartialEq<&str> for Iri<T> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<T: Bos<str>> PartialEq<Iri<T>> for &str {
    fn eq(&self, other: &Iri<T>) -> bool {
        *self == other.as_str()
    }
}

impl<T: Bos<str>> Eq for Iri<T> {}

impl<T: Bos<str>> hash::Hash for Iri<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<T: Bos<str>> PartialOrd for Iri<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Bos<str>> Ord for Iri<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl<T: Bos<str>> AsRef<str> for Iri<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T: Bos<str>> Borrow<str> for Iri<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<'a> TryFrom<&'a str> for Iri<&'a str> {
    type Error = ParseError;

    /// Equivalent to [`parse`](Self::parse).
    #[inline]
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Iri::parse(value)
    }
}

impl TryFrom<String> for Iri<String> {
    type Error = ParseError<String>;

    /// Equivalent to [`parse`](Self::parse).
    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Iri::parse(value)
    }
}

impl<'a> From<Iri<&'a str>> for &'a str {
    /// Equivalent to [`as_str`](Iri::as_str).
    #[inline]
    fn from(value: Iri<&'a str>) -> &'a str {
        value.val
    }
}

impl From<Iri<String>> for String {
    /// Equivalent to [`into_string`](Iri::into_string).
    #[inline]
    fn from(value: Iri<String>) -> String {
        value.val
    }
}

impl From<Iri<&str>> for Iri<String> {
    /// Equivalent to [`to_owned`](Iri::to_owned).
    #[inline]
    fn from(value: Iri<&str>) -> Self {
        value.to_owned()
    }
}

impl FromStr for Iri<String> {
    type Err = ParseError;

    /// Equivalent to `Iri::parse(s).map(|r| r.to_owned())`.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Iri::parse(s).map(|r| r.to_owned())
    }
}

impl<T: Bos<str>> fmt::Debug for Iri<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iri = self.borrowed();
        f.debug_struct("Iri")
            .field("scheme", &iri.scheme())
            .field("authority", &iri.authority())
            .field("path", &iri.path())
            .field("query", &iri.query())
            .field("fragment", &iri.fragment())
            .finish()
    }
}

impl<T: Bos<str>> fmt::Display for Iri<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

#[cfg(feature = "serde")]
impl<T: Bos<str>> Serialize for Iri<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Iri<&'de str> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <&str>::deserialize(deserializer)?;
        Iri::parse(s).map_err(de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Iri<String> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Iri::parse(s).map_err(|e| de::Error::custom(e.plain()))
    }
}
