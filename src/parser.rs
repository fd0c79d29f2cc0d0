use crate::{
    component::HostKind,
    error::{ParseError, ParseErrorKind},
    internal::{AuthMeta, Meta},
    ip,
    table::{self, Table},
};
use core::num::NonZeroUsize;

type Result<T> = core::result::Result<T, ParseError>;

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(ParseError {
            index: $index,
            kind: ParseErrorKind::$kind,
            input: (),
        })
    };
}

/// Parses an IRI reference, recording component offsets only.
pub(crate) fn parse(s: &str) -> Result<Meta> {
    let mut parser = Parser {
        s,
        pos: 0,
        out: Meta::default(),
    };
    parser.parse_from_scheme()?;
    Ok(parser.out)
}

/// IRI reference parser.
///
/// A single left-to-right scan without backtracking. The invariants
/// hold that `pos <= s.len()` and that `pos` is non-decreasing and
/// always lies on a character boundary.
struct Parser<'a> {
    s: &'a str,
    pos: usize,
    out: Meta,
}

enum PathKind {
    /// Follows a scheme: `path-absolute`, `path-rootless` or `path-empty`.
    General,
    /// Follows an authority: either empty or beginning with `'/'`.
    AbEmpty,
    /// A scheme-less reference: the first segment must not contain `':'`.
    ContinuedNoScheme,
}

impl<'a> Parser<'a> {
    fn bytes(&self) -> &'a [u8] {
        self.s.as_bytes()
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.s.len()
    }

    fn peek(&self, i: usize) -> Option<u8> {
        self.bytes().get(self.pos + i).copied()
    }

    fn skip(&mut self, n: usize) {
        // INVARIANT: `pos` only moves forward over scanned bytes.
        self.pos += n;
        debug_assert!(self.pos <= self.s.len());
    }

    fn read_str(&mut self, prefix: &str) -> bool {
        let res = self.bytes()[self.pos..].starts_with(prefix.as_bytes());
        if res {
            self.skip(prefix.len());
        }
        res
    }

    /// Consumes characters allowed by the table, validating
    /// percent-encoded octets on the way.
    fn scan(&mut self, t: &Table) -> Result<()> {
        let b = self.bytes();
        while self.pos < b.len() {
            let x = b[self.pos];
            if x == b'%' {
                if !t.allows_pct_encoded() {
                    break;
                }
                if self.pos + 2 >= b.len() {
                    err!(self.pos, InvalidPctEncodedOctet);
                }
                let (hi, lo) = (b[self.pos + 1], b[self.pos + 2]);
                if !hi.is_ascii_hexdigit() || !lo.is_ascii_hexdigit() {
                    err!(self.pos, InvalidPctEncodedOctet);
                }
                self.pos += 3;
            } else if x < 128 {
                if !t.allows_ascii(x) {
                    break;
                }
                self.pos += 1;
            } else {
                if !t.allows_non_ascii() {
                    break;
                }
                // `pos` is on a character boundary, so a decode succeeds.
                let Some(ch) = self.s[self.pos..].chars().next() else {
                    break;
                };
                if !t.allows_code_point(ch as u32) {
                    break;
                }
                self.pos += ch.len_utf8();
            }
        }
        Ok(())
    }

    fn parse_from_scheme(&mut self) -> Result<()> {
        self.scan(&table::SCHEME)?;

        if self.peek(0) == Some(b':') {
            // A scheme of zero length is no scheme at all, and a
            // scheme starts with a letter.
            if self.pos == 0 || !self.bytes()[0].is_ascii_alphabetic() {
                err!(0, UnexpectedChar);
            }
            self.out.scheme_end = NonZeroUsize::new(self.pos);

            self.skip(1);
            if self.read_str("//") {
                return self.parse_from_authority();
            }
            return self.parse_from_path(PathKind::General);
        } else if self.pos == 0 && self.read_str("//") {
            return self.parse_from_authority();
        }
        // Scheme characters are valid in a path.
        self.parse_from_path(PathKind::ContinuedNoScheme)
    }

    fn parse_from_authority(&mut self) -> Result<()> {
        let start = self.pos;
        let host;

        // Scan the userinfo-or-host-and-port run in one go; the
        // colons decide afterwards which one it was.
        let (colon_cnt, first_colon) = self.scan_userinfo_like()?;

        if self.peek(0) == Some(b'@') {
            // Userinfo present; the host follows.
            self.skip(1);
            let host_start = self.pos;
            let kind = self.read_host()?;
            host = (host_start, self.pos, kind);
            self.read_port();
        } else if self.pos == start {
            // Nothing scanned: an IP literal or an empty host.
            if self.peek(0) == Some(b'[') {
                let kind = self.read_ip_literal()?;
                host = (start, self.pos, kind);
                self.read_port();
            } else {
                host = (start, start, HostKind::RegName);
            }
        } else {
            // The whole host-and-port run is scanned; split it.
            let host_end = match colon_cnt {
                0 => self.pos,
                1 => {
                    // Everything after the colon must be the port.
                    let b = self.bytes();
                    for i in first_colon + 1..self.pos {
                        if !b[i].is_ascii_digit() {
                            err!(i, UnexpectedChar);
                        }
                    }
                    first_colon
                }
                _ => err!(first_colon, MultipleColonsInAuthority),
            };
            host = (start, host_end, self.classify_host(start, host_end));
        }

        self.out.auth_meta = Some(AuthMeta {
            start,
            host_bounds: (host.0, host.1),
            host_kind: host.2,
        });
        self.parse_from_path(PathKind::AbEmpty)
    }

    /// Scans like [`scan`](Self::scan) with the userinfo table, which
    /// also covers reg-name, `':'` and port, recording the colons.
    fn scan_userinfo_like(&mut self) -> Result<(usize, usize)> {
        let mut cnt = 0;
        let mut first = 0;
        loop {
            let at_colon = self.peek(0) == Some(b':');
            if at_colon {
                if cnt == 0 {
                    first = self.pos;
                }
                cnt += 1;
                self.skip(1);
                continue;
            }
            let before = self.pos;
            self.scan(&NO_COLON_USERINFO)?;
            if self.pos == before {
                break;
            }
        }
        Ok((cnt, first))
    }

    /// The marked length must be zero when this method is called.
    fn read_host(&mut self) -> Result<HostKind> {
        if self.peek(0) == Some(b'[') {
            self.read_ip_literal()
        } else {
            let start = self.pos;
            self.scan(&table::IREG_NAME)?;
            Ok(self.classify_host(start, self.pos))
        }
    }

    fn classify_host(&self, start: usize, end: usize) -> HostKind {
        if ip::parse_v4(&self.s[start..end]).is_some() {
            HostKind::Ipv4
        } else {
            HostKind::RegName
        }
    }

    fn read_ip_literal(&mut self) -> Result<HostKind> {
        let mark = self.pos;
        self.skip(1);

        let content_start = self.pos;
        self.scan(&LITERAL_CONTENT)?;
        if self.peek(0) != Some(b']') {
            // Unmatched '[', or a character foreign to any IP literal.
            err!(mark, InvalidIpLiteral);
        }
        let content = &self.s[content_start..self.pos];

        let kind = if content.starts_with(['v', 'V']) {
            if !ip::is_ipv_future(content) {
                err!(mark, InvalidIpLiteral);
            }
            HostKind::IpvFuture
        } else {
            if !ip::is_ipv6_address(content) {
                err!(mark, InvalidIpv6Addr);
            }
            HostKind::Ipv6
        };
        self.skip(1);
        Ok(kind)
    }

    fn read_port(&mut self) {
        if self.peek(0) == Some(b':') {
            self.skip(1);
            let mut i = 0;
            while matches!(self.peek(i), Some(x) if x.is_ascii_digit()) {
                i += 1;
            }
            self.skip(i);
        }
    }

    fn parse_from_path(&mut self, kind: PathKind) -> Result<()> {
        self.out.path_bounds = match kind {
            PathKind::General => {
                let start = self.pos;
                self.scan(&table::IPATH)?;
                (start, self.pos)
            }
            PathKind::AbEmpty => {
                let start = self.pos;
                self.scan(&table::IPATH)?;
                if self.pos != start && self.bytes()[start] != b'/' {
                    err!(start, UnexpectedChar);
                }
                (start, self.pos)
            }
            PathKind::ContinuedNoScheme => {
                self.scan(&table::ISEGMENT_NZ_NC)?;
                if self.peek(0) == Some(b':') {
                    err!(self.pos, ColonInFirstPathSegment);
                }
                self.scan(&table::IPATH)?;
                // A scheme-less reference's path starts at the very beginning.
                (0, self.pos)
            }
        };

        if self.read_str("?") {
            self.scan(&table::IQUERY)?;
            self.out.query_end = NonZeroUsize::new(self.pos);
        }

        if self.read_str("#") {
            self.out.fragment_start = NonZeroUsize::new(self.pos);
            self.scan(&table::IFRAGMENT)?;
        }

        if self.has_remaining() {
            err!(self.pos, UnexpectedChar);
        }
        Ok(())
    }
}

/// Userinfo characters without the colon, which
/// [`scan_userinfo_like`](Parser::scan_userinfo_like) counts itself.
static NO_COLON_USERINFO: Table = table::UNRESERVED
    .or(table::SUB_DELIMS)
    .or_pct_encoded()
    .or_ucschar();

/// Characters that may appear between the brackets of an IP literal.
static LITERAL_CONTENT: Table = table::IPV_FUTURE.or(table::HEXDIG);
