use crate::{build, component::Scheme, iri::Iri, parser};
use alloc::string::String;

/// Computes a reference relative to `base` that resolves to `target`.
///
/// Only the same-document and child-relative forms are produced: no
/// network-relative (`//host/a`), root-relative (`/a/b`), or parent
/// (`../a`) references. `None` is returned when no reference of a
/// supported form exists.
pub(crate) fn relativize(base: &Iri<&str>, target: &Iri<&str>) -> Option<Iri<String>> {
    if !base.has_scheme() || base.has_query() {
        return None;
    }
    if !target.has_scheme() && !target.has_authority() {
        return None;
    }
    if base.scheme().map(Scheme::as_str) != target.scheme().map(Scheme::as_str) {
        return None;
    }
    if base.authority().map(|a| a.as_str()) != target.authority().map(|a| a.as_str()) {
        return None;
    }

    let base_path = base.path();
    let target_path = target.path();

    if base_path == target_path && (target.has_query() || target.has_fragment()) {
        return recompose("", target);
    }

    let rel_path = relative_path(base_path, target_path)?;
    recompose(&rel_path, target)
}

fn recompose(rel_path: &str, target: &Iri<&str>) -> Option<Iri<String>> {
    let s = build::compose(None, None, rel_path, target.query(), target.fragment());
    let meta = parser::parse(&s).ok()?;
    Some(Iri { val: s, meta })
}

/// Computes a relative path such that resolving it against `base_path`
/// yields `path`. This is limited to the case where everything up to
/// and including the last `'/'` of `base_path` is a prefix of `path`.
fn relative_path(base_path: &str, path: &str) -> Option<String> {
    if base_path == path {
        return Some(String::new());
    }
    let idx = base_path.rfind('/')?;
    let prefix = &base_path[..=idx];
    let rel = path.strip_prefix(prefix)?;
    if rel.is_empty() || rel.starts_with('/') {
        return None;
    }

    // A colon in the initial segment would be reparsed as a scheme.
    let colon = rel.find(':');
    let slash = rel.find('/');
    let needs_dot = match (colon, slash) {
        (Some(c), Some(s)) => c < s,
        (Some(_), None) => true,
        (None, _) => false,
    };

    let mut out = String::with_capacity(rel.len() + 2);
    if needs_dot {
        out.push_str("./");
    }
    out.push_str(rel);
    Some(out)
}
