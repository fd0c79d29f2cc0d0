//! DNS host-name validation.
//!
//! The grammar follows [RFC 1034, section 3.5][rfc1034] with the
//! historical leading-letter restriction relaxed so that a label may
//! start with a digit:
//!
//! ```text
//! <label> ::= <let-dig> (<let-dig-hyp>)* <let-dig>
//! ```
//!
//! A label may not start or end with a hyphen and may not be empty, so
//! a leading, trailing, or doubled period is invalid. The check is not
//! applied by [`Iri::parse`](crate::Iri::parse); registered names
//! beyond host-name syntax are legal IRI hosts.
//!
//! [rfc1034]: https://datatracker.ietf.org/doc/html/rfc1034#section-3.5

use core::fmt;

/// Detailed cause of a [`HostnameError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum HostnameErrorKind {
    /// A label is empty.
    EmptyLabel,
    /// A label starts with a hyphen.
    LeadingHyphen,
    /// A label ends with a hyphen.
    TrailingHyphen,
    /// A character other than a letter, digit, hyphen, or period.
    InvalidChar,
    /// A percent-encoded octet that is either non-hexadecimal or incomplete.
    InvalidPctEncodedOctet,
}

/// An error occurred when validating a DNS host name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HostnameError {
    index: usize,
    kind: HostnameErrorKind,
}

impl HostnameError {
    /// Returns the byte index where the error occurred in the input string.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> HostnameErrorKind {
        self.kind
    }
}

impl fmt::Display for HostnameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            HostnameErrorKind::EmptyLabel => "empty label",
            HostnameErrorKind::LeadingHyphen => "label starts with a hyphen",
            HostnameErrorKind::TrailingHyphen => "label ends with a hyphen",
            HostnameErrorKind::InvalidChar => "invalid character in label",
            HostnameErrorKind::InvalidPctEncodedOctet => "invalid percent-encoded octet",
        };
        write!(f, "{msg} at position {}", self.index + 1)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HostnameError {}

/// Checks a host against the DNS host-name grammar.
///
/// # Errors
///
/// Returns `Err` on the first violation found.
///
/// # Examples
///
/// ```
/// use fluent_iri::dns;
///
/// assert!(dns::validate("example.com").is_ok());
/// assert!(dns::validate("127.0.0.1").is_ok());
/// assert!(dns::validate("-example.com").is_err());
/// assert!(dns::validate("example..com").is_err());
/// ```
pub fn validate(host: &str) -> Result<(), HostnameError> {
    validate_inner(host, false)
}

/// Checks a host against the DNS host-name grammar, additionally
/// allowing percent-encoded octets inside labels.
///
/// # Errors
///
/// Returns `Err` on the first violation found.
pub fn validate_pct_encoded(host: &str) -> Result<(), HostnameError> {
    validate_inner(host, true)
}

fn validate_inner(host: &str, allow_pct_encoded: bool) -> Result<(), HostnameError> {
    let err = |index, kind| Err(HostnameError { index, kind });
    let b = host.as_bytes();

    let mut label_start = 0;
    let mut i = 0;
    while i < b.len() {
        let x = b[i];
        match x {
            b'.' => {
                if i == label_start {
                    return err(i, HostnameErrorKind::EmptyLabel);
                }
                if b[i - 1] == b'-' {
                    return err(i - 1, HostnameErrorKind::TrailingHyphen);
                }
                label_start = i + 1;
                i += 1;
            }
            b'-' => {
                if i == label_start {
                    return err(i, HostnameErrorKind::LeadingHyphen);
                }
                i += 1;
            }
            b'%' if allow_pct_encoded => {
                if i + 2 >= b.len()
                    || !b[i + 1].is_ascii_hexdigit()
                    || !b[i + 2].is_ascii_hexdigit()
                {
                    return err(i, HostnameErrorKind::InvalidPctEncodedOctet);
                }
                i += 3;
            }
            _ if x.is_ascii_alphanumeric() => i += 1,
            _ => return err(i, HostnameErrorKind::InvalidChar),
        }
    }

    if b.len() == label_start {
        // Empty input or a trailing period.
        return err(label_start, HostnameErrorKind::EmptyLabel);
    }
    if b[b.len() - 1] == b'-' {
        return err(b.len() - 1, HostnameErrorKind::TrailingHyphen);
    }
    Ok(())
}
