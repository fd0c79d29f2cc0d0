//! IP address grammar checks as per RFC 3986.
//!
//! The functions in this module operate on the text between the square
//! brackets of an IP literal, or on a bare host for [`parse_v4`].

/// Length of the run of hexadecimal digits at `pos`, capped at 4.
fn hex_run(b: &[u8], pos: usize) -> usize {
    let mut n = 0;
    while n < 4 && matches!(b.get(pos + n), Some(x) if x.is_ascii_hexdigit()) {
        n += 1;
    }
    n
}

/// Checks a string against the `IPv6address` ABNF rule from
/// [Section 3.2.2 of RFC 3986][ipv6].
///
/// The grammar is equivalent to
/// `h16 ( ":" h16 ){0..6} [ "::" ( h16 ( ":" h16 ){0..6} )? ] [ ls32 ]`
/// with constraints on the number of fields: without `"::"` an address
/// has exactly eight 16-bit fields (an embedded IPv4 address counting
/// as two), with `"::"` at most seven.
///
/// [ipv6]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
///
/// # Examples
///
/// ```
/// use fluent_iri::ip;
///
/// assert!(ip::is_ipv6_address("2001:db8::7"));
/// assert!(ip::is_ipv6_address("::ffff:192.0.2.33"));
/// assert!(!ip::is_ipv6_address("1:2:3:4:5:6:7"));
/// ```
#[must_use]
pub fn is_ipv6_address(s: &str) -> bool {
    let b = s.as_bytes();
    let mut pos = 0;
    // 16-bit fields consumed so far, on both sides of any "::".
    let mut fields = 0u32;
    let mut ellipsis = false;

    if b.starts_with(b"::") {
        ellipsis = true;
        pos = 2;
    } else if b.first() == Some(&b':') {
        return false;
    }

    // Leading "h16 :" repetitions; a second colon switches sides.
    loop {
        let n = hex_run(b, pos);
        if n == 0 {
            break;
        }
        match b.get(pos + n) {
            Some(b':') => {
                fields += 1;
                pos += n + 1;
                if b.get(pos) == Some(&b':') {
                    if ellipsis {
                        return false;
                    }
                    ellipsis = true;
                    pos += 1;
                } else if pos == b.len() {
                    // Trailing single colon.
                    return false;
                }
            }
            // A period or the end of input: handled below.
            _ => break,
        }
    }

    // Look ahead for a period before any hex letter: if one appears,
    // the trailing field is an embedded IPv4 dotted-quad.
    let mut v4 = false;
    for i in 0..4 {
        match b.get(pos + i) {
            Some(b'.') => {
                v4 = true;
                break;
            }
            Some(x) if x.is_ascii_digit() => {}
            _ => break,
        }
    }

    if v4 {
        if !eat_embedded_v4(b, &mut pos) || pos != b.len() {
            return false;
        }
        fields += 2;
    } else {
        let n = hex_run(b, pos);
        if n > 0 {
            pos += n;
            fields += 1;
        }
        if pos != b.len() {
            return false;
        }
    }

    if ellipsis {
        fields <= 7
    } else {
        fields == 8
    }
}

/// Consumes an embedded dotted-quad: four runs of 1-3 decimal digits,
/// each with value at most 255, separated by periods.
fn eat_embedded_v4(b: &[u8], pos: &mut usize) -> bool {
    for i in 0..4 {
        if i > 0 {
            if b.get(*pos) != Some(&b'.') {
                return false;
            }
            *pos += 1;
        }
        let mut n = 0;
        let mut value = 0u32;
        while n < 3 {
            match b.get(*pos + n) {
                Some(x) if x.is_ascii_digit() => {
                    value = value * 10 + u32::from(x - b'0');
                    n += 1;
                }
                _ => break,
            }
        }
        if n == 0 || value > 255 {
            return false;
        }
        *pos += n;
    }
    true
}

/// Checks a string against the `IPvFuture` ABNF rule from
/// [Section 3.2.2 of RFC 3986][host]:
/// `"v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`.
///
/// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
#[must_use]
pub fn is_ipv_future(s: &str) -> bool {
    let b = s.as_bytes();
    if !matches!(b.first(), Some(b'v' | b'V')) {
        return false;
    }
    let n = hex_run(b, 1);
    if n == 0 || b.get(1 + n) != Some(&b'.') {
        return false;
    }
    let rest = &b[2 + n..];
    !rest.is_empty()
        && rest
            .iter()
            .all(|&x| crate::table::IPV_FUTURE.allows_ascii(x))
}

/// Parses a string against the `IPv4address` ABNF rule from
/// [Section 3.2.2 of RFC 3986][host], in which a `dec-octet` with a
/// leading zero is not allowed.
///
/// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
///
/// # Examples
///
/// ```
/// use fluent_iri::ip;
///
/// assert_eq!(ip::parse_v4("192.0.2.16"), Some([192, 0, 2, 16]));
/// assert_eq!(ip::parse_v4("192.0.2.016"), None);
/// ```
#[must_use]
pub fn parse_v4(s: &str) -> Option<[u8; 4]> {
    let mut out = [0u8; 4];
    let mut parts = s.split('.');
    for octet in &mut out {
        let part = parts.next()?;
        if part.is_empty()
            || part.len() > 3
            || (part.len() > 1 && part.starts_with('0'))
            || !part.bytes().all(|x| x.is_ascii_digit())
        {
            return None;
        }
        *octet = part.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}
