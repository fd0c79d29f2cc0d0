use crate::{
    build,
    component::Scheme,
    error::{ResolveError, ResolveErrorKind},
    iri::Iri,
    normalize::remove_dot_segments,
    parser,
};
use alloc::string::String;

/// Transform References as per RFC 3986, section 5.2.2.
///
/// As a non-strict convenience, a reference whose scheme equals the
/// base's is treated as scheme-less. The target is recomposed from its
/// components and re-parsed, which re-establishes every parse
/// invariant on the output.
pub(crate) fn resolve(
    reference: &Iri<&str>,
    base: &Iri<&str>,
) -> Result<Iri<String>, ResolveError> {
    if !base.has_scheme() {
        return Err(ResolveError(ResolveErrorKind::NonAbsoluteBase));
    }

    let same_scheme = reference.scheme().map(Scheme::as_str) == base.scheme().map(Scheme::as_str);

    let t_scheme;
    let t_authority;
    let t_path;
    let t_query;
    let t_fragment = reference.fragment();

    if reference.has_scheme() && !same_scheme {
        t_scheme = reference.scheme().map(Scheme::as_str);
        t_authority = reference.authority().map(|a| a.as_str());
        t_path = remove_dot_segments(reference.path());
        t_query = reference.query();
    } else {
        if let Some(authority) = reference.authority() {
            t_authority = Some(authority.as_str());
            t_path = remove_dot_segments(reference.path());
            t_query = reference.query();
        } else {
            if reference.path().is_empty() {
                t_path = base.path().into();
                t_query = reference.query().or_else(|| base.query());
            } else {
                if reference.path().starts_with('/') {
                    t_path = remove_dot_segments(reference.path());
                } else {
                    t_path = remove_dot_segments(&merge(base, reference.path()));
                }
                t_query = reference.query();
            }
            t_authority = base.authority().map(|a| a.as_str());
        }
        t_scheme = base.scheme().map(Scheme::as_str);
    }

    let mut path = t_path;
    // Close the loophole where a target without an authority would be
    // recomposed with a path starting in "//".
    if t_authority.is_none() && path.starts_with("//") {
        path.insert_str(0, "/.");
    }

    let s = build::compose(t_scheme, t_authority, &path, t_query, t_fragment);
    match parser::parse(&s) {
        Ok(meta) => Ok(Iri { val: s, meta }),
        Err(e) => Err(ResolveError(ResolveErrorKind::Recompose(e))),
    }
}

/// Merge Paths as per RFC 3986, section 5.2.3.
fn merge(base: &Iri<&str>, ref_path: &str) -> String {
    let base_path = base.path();
    if base.has_authority() && base_path.is_empty() {
        let mut s = String::with_capacity(ref_path.len() + 1);
        if !ref_path.starts_with('/') {
            s.push('/');
        }
        s.push_str(ref_path);
        return s;
    }
    match base_path.rfind('/') {
        Some(i) => {
            let mut s = String::with_capacity(i + 1 + ref_path.len());
            s.push_str(&base_path[..=i]);
            s.push_str(ref_path);
            s
        }
        None => ref_path.into(),
    }
}
