//! Scheme-specific validation rules.
//!
//! The rules cover `http`/`https` ([RFC 9110]), `file` ([RFC 8089]),
//! `urn` ([RFC 8141]), and the `urn:uuid`/`uuid` forms ([RFC 4122]).
//! They are applied on request, independently of grammar checks.
//!
//! [RFC 9110]: https://datatracker.ietf.org/doc/html/rfc9110
//! [RFC 8089]: https://datatracker.ietf.org/doc/html/rfc8089
//! [RFC 8141]: https://datatracker.ietf.org/doc/html/rfc8141
//! [RFC 4122]: https://datatracker.ietf.org/doc/html/rfc4122

use crate::{
    error::{SchemeError, SchemeErrorKind},
    iri::Iri,
};

/// How strictly a scheme's rules are applied.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Compliance {
    /// Apply the rules as registered.
    #[default]
    Strict,
    /// Accept historical forms: for `urn`, a one-character NID and an
    /// empty NSS.
    Lax,
}

/// Strictness settings for scheme-specific checks.
///
/// A `SchemeRules` value travels with each call rather than living in
/// process-wide state; the default is strict everywhere.
///
/// # Examples
///
/// ```
/// use fluent_iri::{Compliance, Iri, SchemeRules};
///
/// let iri = Iri::parse("urn:x:abc")?;
/// // A one-character NID is rejected by the registered rules,
/// assert!(iri.check_scheme_rules(&SchemeRules::default()).is_err());
/// // but was allowed by RFC 2141.
/// let lax = SchemeRules {
///     urn: Compliance::Lax,
///     ..SchemeRules::default()
/// };
/// assert!(iri.check_scheme_rules(&lax).is_ok());
/// # Ok::<_, fluent_iri::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SchemeRules {
    /// Strictness of the `urn` checks.
    pub urn: Compliance,
    /// Strictness of the `file` checks.
    pub file: Compliance,
}

type Result<T> = core::result::Result<T, SchemeError>;

macro_rules! err {
    ($kind:ident) => {
        return Err(SchemeError(SchemeErrorKind::$kind))
    };
}

pub(crate) fn check(iri: &Iri<&str>, rules: &SchemeRules) -> Result<()> {
    let Some(scheme) = iri.scheme() else {
        // No scheme, no rules.
        return Ok(());
    };
    let scheme = scheme.as_str();

    if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
        check_http(iri)
    } else if scheme.eq_ignore_ascii_case("file") {
        check_file(iri, rules)
    } else if starts_with_ignore_case(iri.as_str(), "urn:uuid:") {
        check_uuid(iri, "urn:uuid:".len())
    } else if scheme.eq_ignore_ascii_case("urn") {
        check_urn(iri, rules)
    } else if scheme.eq_ignore_ascii_case("uuid") {
        check_uuid(iri, "uuid:".len())
    } else {
        Ok(())
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// An `http` or `https` IRI requires a non-empty host and, per
/// RFC 9110, must not carry userinfo.
fn check_http(iri: &Iri<&str>) -> Result<()> {
    let Some(authority) = iri.authority() else {
        err!(HttpMissingAuthority);
    };
    if authority.host().is_empty() {
        err!(HttpEmptyHost);
    }
    if authority.has_userinfo() {
        err!(HttpUserinfo);
    }
    Ok(())
}

/// Only `file:///path` is supported: in `file://host/path` the first
/// path segment would shadow the path root as a host.
fn check_file(iri: &Iri<&str>, rules: &SchemeRules) -> Result<()> {
    if rules.file == Compliance::Lax {
        return Ok(());
    }
    if let Some(authority) = iri.authority() {
        if !authority.as_str().is_empty() {
            err!(FileNonEmptyAuthority);
        }
    }
    Ok(())
}

/*
    namestring    = assigned-name
                    [ rq-components ]
                    [ "#" f-component ]
    assigned-name = "urn" ":" NID ":" NSS
    NID           = (alphanum) 0*30(ldh) (alphanum)
    ldh           = alphanum / "-"
    NSS           = pchar *(pchar / "/")
    rq-components = [ "?+" r-component ]
                    [ "?=" q-component ]
*/
fn check_urn(iri: &Iri<&str>, rules: &SchemeRules) -> Result<()> {
    // The urn scheme itself is registered lowercase.
    if iri.scheme().map(|s| s.as_str()) != Some("urn") {
        err!(UrnSchemeNotLowercase);
    }

    let path = iri.path();
    let Some(colon) = path.find(':') else {
        err!(UrnBadAssignedName);
    };
    let (nid, nss) = (&path[..colon], &path[colon + 1..]);

    let nid_ok = match rules.urn {
        Compliance::Strict => is_valid_nid(nid, 2) && !nss.is_empty(),
        Compliance::Lax => is_valid_nid(nid, 1),
    };
    if !nid_ok {
        err!(UrnBadAssignedName);
    }

    if let Some(query) = iri.query() {
        if !query.starts_with(['+', '=']) {
            err!(UrnBadQueryLead);
        }
        if !query.is_ascii() {
            err!(UrnNonAsciiQuery);
        }
    }
    if let Some(fragment) = iri.fragment() {
        if !fragment.is_ascii() {
            err!(UrnNonAsciiFragment);
        }
    }
    Ok(())
}

/// `NID = (alphanum) 0*30(ldh) (alphanum)`, with the lower length
/// bound relaxed to `min_len`.
fn is_valid_nid(nid: &str, min_len: usize) -> bool {
    let b = nid.as_bytes();
    (min_len..=32).contains(&b.len())
        && b[0].is_ascii_alphanumeric()
        && b[b.len() - 1].is_ascii_alphanumeric()
        && b.iter().all(|x| x.is_ascii_alphanumeric() || *x == b'-')
}

/// Both `urn:uuid:` and the unofficial `uuid:`: the remainder must be
/// exactly a canonical lowercase UUID, with no query or fragment.
fn check_uuid(iri: &Iri<&str>, prefix_len: usize) -> Result<()> {
    if iri.has_query() {
        err!(UuidDisallowedQuery);
    }
    if iri.has_fragment() {
        err!(UuidDisallowedFragment);
    }

    let uuid = &iri.as_str()[prefix_len..];
    if uuid.len() != 36 {
        err!(UuidBadLength);
    }
    let b = uuid.as_bytes();
    let ok = b.iter().enumerate().all(|(i, &x)| match i {
        8 | 13 | 18 | 23 => x == b'-',
        _ => x.is_ascii_digit() || (b'a'..=b'f').contains(&x),
    });
    if !ok {
        err!(UuidBadFormat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_default(s: &str) -> Result<()> {
        check(&Iri::parse(s).unwrap(), &SchemeRules::default())
    }

    #[test]
    fn http_rules() {
        assert!(check_default("http://example.com/").is_ok());
        assert!(check_default("HTTP://example.com/").is_ok());
        assert!(check_default("https://example.com:8443/a?b#c").is_ok());

        assert_eq!(
            check_default("http:/path").unwrap_err().kind(),
            SchemeErrorKind::HttpMissingAuthority
        );
        assert_eq!(
            check_default("http:///path").unwrap_err().kind(),
            SchemeErrorKind::HttpEmptyHost
        );
        assert_eq!(
            check_default("http://user@example.com/").unwrap_err().kind(),
            SchemeErrorKind::HttpUserinfo
        );
    }

    #[test]
    fn file_rules() {
        assert!(check_default("file:///etc/hosts").is_ok());
        assert!(check_default("file:/etc/hosts").is_ok());
        assert_eq!(
            check_default("file://host/path").unwrap_err().kind(),
            SchemeErrorKind::FileNonEmptyAuthority
        );

        let lax = SchemeRules {
            file: Compliance::Lax,
            ..SchemeRules::default()
        };
        assert!(check(&Iri::parse("file://host/path").unwrap(), &lax).is_ok());
    }

    #[test]
    fn urn_rules() {
        assert!(check_default("urn:example:a123,z456").is_ok());
        assert!(check_default("urn:example:a?+resolve").is_ok());
        assert!(check_default("urn:example:a?=query").is_ok());
        assert!(check_default("urn:example:a#frag").is_ok());

        assert_eq!(
            check_default("URN:example:a").unwrap_err().kind(),
            SchemeErrorKind::UrnSchemeNotLowercase
        );
        // NID too short in strict mode.
        assert_eq!(
            check_default("urn:x:abc").unwrap_err().kind(),
            SchemeErrorKind::UrnBadAssignedName
        );
        // Missing NSS.
        assert_eq!(
            check_default("urn:example").unwrap_err().kind(),
            SchemeErrorKind::UrnBadAssignedName
        );
        assert_eq!(
            check_default("urn:example:").unwrap_err().kind(),
            SchemeErrorKind::UrnBadAssignedName
        );
        // Hyphen at the NID boundary.
        assert_eq!(
            check_default("urn:-ex:a").unwrap_err().kind(),
            SchemeErrorKind::UrnBadAssignedName
        );
        // Query must start with '+' or '='.
        assert_eq!(
            check_default("urn:example:a?bad").unwrap_err().kind(),
            SchemeErrorKind::UrnBadQueryLead
        );
        // Non-ASCII in the query.
        assert_eq!(
            check_default("urn:example:a?=café").unwrap_err().kind(),
            SchemeErrorKind::UrnNonAsciiQuery
        );
        assert_eq!(
            check_default("urn:example:a#café").unwrap_err().kind(),
            SchemeErrorKind::UrnNonAsciiFragment
        );

        let lax = SchemeRules {
            urn: Compliance::Lax,
            ..SchemeRules::default()
        };
        assert!(check(&Iri::parse("urn:x:abc").unwrap(), &lax).is_ok());
        assert!(check(&Iri::parse("urn:example:").unwrap(), &lax).is_ok());
        assert!(check(&Iri::parse("urn:example").unwrap(), &lax).is_err());
    }

    #[test]
    fn uuid_rules() {
        assert!(check_default("urn:uuid:6e8bc430-9c3a-11d9-9669-0800200c9a66").is_ok());
        assert!(check_default("uuid:6e8bc430-9c3a-11d9-9669-0800200c9a66").is_ok());

        // Uppercase hex digits.
        assert_eq!(
            check_default("urn:uuid:6E8BC430-9c3a-11d9-9669-0800200c9a66")
                .unwrap_err()
                .kind(),
            SchemeErrorKind::UuidBadFormat
        );
        // Wrong length.
        assert_eq!(
            check_default("urn:uuid:6e8bc430").unwrap_err().kind(),
            SchemeErrorKind::UuidBadLength
        );
        // Query and fragment are forbidden.
        assert_eq!(
            check_default("urn:uuid:6e8bc430-9c3a-11d9-9669-0800200c9a66?=x")
                .unwrap_err()
                .kind(),
            SchemeErrorKind::UuidDisallowedQuery
        );
        assert_eq!(
            check_default("uuid:6e8bc430-9c3a-11d9-9669-0800200c9a66#x")
                .unwrap_err()
                .kind(),
            SchemeErrorKind::UuidDisallowedFragment
        );
    }
}
