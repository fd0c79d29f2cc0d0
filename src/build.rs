use crate::{error::ParseError, iri::Iri};
use alloc::string::{String, ToString};

/// Component Recomposition as per RFC 3986, section 5.3.
///
/// Assembles `scheme? ":" ("//" authority)? path ("?" query)? ("#" fragment)?`.
pub(crate) fn compose(
    scheme: Option<&str>,
    authority: Option<&str>,
    path: &str,
    query: Option<&str>,
    fragment: Option<&str>,
) -> String {
    let mut s = String::new();
    if let Some(scheme) = scheme {
        s.push_str(scheme);
        s.push(':');
    }
    if let Some(authority) = authority {
        s.push_str("//");
        s.push_str(authority);
    }
    s.push_str(path);
    if let Some(query) = query {
        s.push('?');
        s.push_str(query);
    }
    if let Some(fragment) = fragment {
        s.push('#');
        s.push_str(fragment);
    }
    s
}

/// A builder for IRI references.
///
/// The builder accumulates optional components as strings;
/// [`build`](Self::build) recomposes them and re-parses the result, so
/// that every invariant of a parsed value holds on the output.
///
/// The authority may be given either whole with
/// [`authority`](Self::authority) or from its subcomponents with
/// [`userinfo`](Self::userinfo), [`host`](Self::host), and
/// [`port`](Self::port); the subcomponents win when both are set.
///
/// # Examples
///
/// ```
/// use fluent_iri::Builder;
///
/// let iri = Builder::new()
///     .scheme("foo")
///     .userinfo("user")
///     .host("example.com")
///     .port(8042)
///     .path("/over/there")
///     .query("name=ferret")
///     .fragment("nose")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     iri.as_str(),
///     "foo://user@example.com:8042/over/there?name=ferret#nose"
/// );
/// ```
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct Builder {
    scheme: Option<String>,
    authority: Option<String>,
    userinfo: Option<String>,
    host: Option<String>,
    port: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Builder {
    /// Creates a builder with every component absent and an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scheme component.
    pub fn scheme(mut self, scheme: &str) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Sets the authority component as a whole.
    pub fn authority(mut self, authority: &str) -> Self {
        self.authority = Some(authority.into());
        self
    }

    /// Sets the userinfo subcomponent of the authority.
    pub fn userinfo(mut self, userinfo: &str) -> Self {
        self.userinfo = Some(userinfo.into());
        self
    }

    /// Sets the host subcomponent of the authority.
    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the port subcomponent of the authority.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port.to_string());
        self
    }

    /// Sets the path component.
    pub fn path(mut self, path: &str) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the query component.
    pub fn query(mut self, query: &str) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the fragment component.
    pub fn fragment(mut self, fragment: &str) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Recomposes the components and parses the result.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the recomposed string does not match the
    /// IRI-reference grammar; the composed string can be recovered
    /// from the error with [`ParseError::into_input`].
    pub fn build(self) -> Result<Iri<String>, ParseError<String>> {
        let authority;
        if self.userinfo.is_some() || self.host.is_some() || self.port.is_some() {
            let mut s = String::new();
            if let Some(userinfo) = &self.userinfo {
                s.push_str(userinfo);
                s.push('@');
            }
            if let Some(host) = &self.host {
                s.push_str(host);
            }
            if let Some(port) = &self.port {
                s.push(':');
                s.push_str(port);
            }
            authority = Some(s);
        } else {
            authority = self.authority;
        }

        Iri::parse(compose(
            self.scheme.as_deref(),
            authority.as_deref(),
            &self.path,
            self.query.as_deref(),
            self.fragment.as_deref(),
        ))
    }
}
