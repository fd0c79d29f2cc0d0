//! Error types.

use core::fmt;

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// Unexpected character that is not allowed by the IRI syntax.
    ///
    /// The error index points to the first byte of the character.
    UnexpectedChar,
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character `'%'` of the octet.
    InvalidPctEncodedOctet,
    /// The first path segment of a scheme-less reference contains a colon.
    ///
    /// The error index points to the colon.
    ColonInFirstPathSegment,
    /// More than one colon outside brackets in the host-and-port
    /// section of an authority.
    ///
    /// The error index points to the first colon.
    MultipleColonsInAuthority,
    /// Invalid IP literal, such as an unmatched bracket or a malformed
    /// IPvFuture address.
    ///
    /// The error index points to the preceding left square bracket `'['`.
    InvalidIpLiteral,
    /// Invalid IPv6 address.
    ///
    /// The error index points to the preceding left square bracket `'['`.
    InvalidIpv6Addr,
}

/// An error occurred when parsing an IRI reference.
///
/// The error stores the input that failed to parse when the input
/// was given by value, so that it can be recovered with
/// [`into_input`](Self::into_input).
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct ParseError<I = ()> {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
    pub(crate) input: I,
}

impl ParseError {
    pub(crate) fn with_input<I>(self, input: I) -> ParseError<I> {
        ParseError {
            index: self.index,
            kind: self.kind,
            input,
        }
    }
}

impl<I> ParseError<I> {
    /// Returns the byte index where the error occurred in the input string.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the one-based position where the error occurred.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Recovers the input that failed to parse.
    #[inline]
    pub fn into_input(self) -> I {
        self.input
    }

    /// Returns the error with the input erased.
    #[must_use]
    pub fn plain(&self) -> ParseError {
        ParseError {
            index: self.index,
            kind: self.kind,
            input: (),
        }
    }
}

impl<I> fmt::Debug for ParseError<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseError")
            .field("index", &self.index)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<I> fmt::Display for ParseError<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::UnexpectedChar => "unexpected character",
            ParseErrorKind::InvalidPctEncodedOctet => "invalid percent-encoded octet",
            ParseErrorKind::ColonInFirstPathSegment => {
                "colon in first path segment of a scheme-less reference"
            }
            ParseErrorKind::MultipleColonsInAuthority => "multiple colons in authority",
            ParseErrorKind::InvalidIpLiteral => "invalid IP literal",
            ParseErrorKind::InvalidIpv6Addr => "invalid IPv6 address",
        };
        write!(f, "{msg} at position {}", self.position())
    }
}

#[cfg(feature = "std")]
impl<I> std::error::Error for ParseError<I> {}

/// Detailed cause of a [`SchemeError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum SchemeErrorKind {
    /// An `http` or `https` IRI without an authority.
    HttpMissingAuthority,
    /// An `http` or `https` IRI with an empty host.
    HttpEmptyHost,
    /// An `http` or `https` IRI with a userinfo subcomponent.
    HttpUserinfo,
    /// A `file` IRI whose authority is not empty.
    FileNonEmptyAuthority,
    /// A `urn` IRI whose scheme is not lowercase `urn`.
    UrnSchemeNotLowercase,
    /// A `urn` IRI that does not match the `assigned-name` rule
    /// (`"urn" ":" NID ":" NSS`).
    UrnBadAssignedName,
    /// A `urn` IRI whose query does not start with `'+'` or `'='`.
    UrnBadQueryLead,
    /// A `urn` IRI with a non-ASCII character in its query.
    UrnNonAsciiQuery,
    /// A `urn` IRI with a non-ASCII character in its fragment.
    UrnNonAsciiFragment,
    /// A `uuid` or `urn:uuid` IRI whose UUID is not 36 characters long.
    UuidBadLength,
    /// A `uuid` or `urn:uuid` IRI whose UUID is not lowercase
    /// `8-4-4-4-12` hexadecimal.
    UuidBadFormat,
    /// A `uuid` or `urn:uuid` IRI with a query component.
    UuidDisallowedQuery,
    /// A `uuid` or `urn:uuid` IRI with a fragment component.
    UuidDisallowedFragment,
}

/// An error occurred when applying scheme-specific rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SchemeError(pub(crate) SchemeErrorKind);

impl SchemeError {
    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> SchemeErrorKind {
        self.0
    }
}

impl fmt::Display for SchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SchemeErrorKind::*;
        let msg = match self.0 {
            HttpMissingAuthority => "http and https IRIs require an authority",
            HttpEmptyHost => "http and https IRIs do not allow an empty host",
            HttpUserinfo => "http and https IRIs do not allow userinfo in the authority",
            FileNonEmptyAuthority => "file IRIs are of the form file:///path",
            UrnSchemeNotLowercase => "urn scheme name is not lowercase",
            UrnBadAssignedName => {
                "urn IRI does not match the assigned-name rule (\"urn\" \":\" NID \":\" NSS)"
            }
            UrnBadQueryLead => "urn query must start with '+' or '='",
            UrnNonAsciiQuery => "non-ASCII character in urn query",
            UrnNonAsciiFragment => "non-ASCII character in urn fragment",
            UuidBadLength => "UUID string is not 36 characters long",
            UuidBadFormat => "UUID string is not lowercase 8-4-4-4-12 hexadecimal",
            UuidDisallowedQuery => "uuid IRIs do not allow a query component",
            UuidDisallowedFragment => "uuid IRIs do not allow a fragment component",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SchemeError {}

/// Detailed cause of a [`ResolveError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ResolveErrorKind {
    NonAbsoluteBase,
    Recompose(ParseError),
}

/// An error occurred when resolving an IRI reference against a base.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolveError(pub(crate) ResolveErrorKind);

impl ResolveError {
    /// Checks whether the error is due to the base having no scheme.
    #[inline]
    #[must_use]
    pub fn is_non_absolute_base(&self) -> bool {
        matches!(self.0, ResolveErrorKind::NonAbsoluteBase)
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ResolveErrorKind::NonAbsoluteBase => f.write_str("base IRI has no scheme"),
            ResolveErrorKind::Recompose(e) => write!(f, "recomposed target failed to parse: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ResolveError {}

/// An IRI validation error: either a grammar error or a
/// scheme-specific one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input does not match the IRI-reference grammar.
    Parse(ParseError),
    /// The input violates a rule of its scheme.
    Scheme(SchemeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<SchemeError> for Error {
    fn from(e: SchemeError) -> Self {
        Error::Scheme(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => fmt::Display::fmt(e, f),
            Error::Scheme(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
