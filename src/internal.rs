use crate::component::HostKind;
use core::num::NonZeroUsize;

/// Offsets of the parsed components within the source string.
///
/// All offsets are byte indices. An absent optional component leaves
/// its offset unset; the path is always present, possibly empty.
#[derive(Clone, Copy, Default)]
pub(crate) struct Meta {
    /// The index of the trailing colon of the scheme.
    pub scheme_end: Option<NonZeroUsize>,
    pub auth_meta: Option<AuthMeta>,
    pub path_bounds: (usize, usize),
    /// One byte past the last byte of the query.
    pub query_end: Option<NonZeroUsize>,
    /// The index of the first byte of the fragment, one past `'#'`.
    pub fragment_start: Option<NonZeroUsize>,
}

/// Offsets within the authority component.
///
/// The invariants hold that `start <= host_bounds.0 <= host_bounds.1`
/// and that the authority ends where the path begins. A userinfo
/// subcomponent is present iff `host_bounds.0 != start`; a port iff
/// `host_bounds.1` is not the end of the authority.
#[derive(Clone, Copy)]
pub(crate) struct AuthMeta {
    pub start: usize,
    pub host_bounds: (usize, usize),
    pub host_kind: HostKind,
}
