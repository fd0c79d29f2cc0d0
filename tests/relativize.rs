use fluent_iri::Iri;

#[track_caller]
fn relativize(base: &str, target: &str) -> Option<Iri<String>> {
    let base = Iri::parse(base).unwrap();
    let target = Iri::parse(target).unwrap();
    base.relativize(&target)
}

#[test]
fn child_relative() {
    assert_eq!(
        relativize("http://example.com/a/b", "http://example.com/a/c").unwrap(),
        "c"
    );
    assert_eq!(
        relativize("http://example.com/a/b", "http://example.com/a/c/d").unwrap(),
        "c/d"
    );
    assert_eq!(
        relativize("http://example.com/a/", "http://example.com/a/c?q#f").unwrap(),
        "c?q#f"
    );
}

#[test]
fn same_document() {
    assert_eq!(
        relativize("http://example.com/a/b", "http://example.com/a/b#f").unwrap(),
        "#f"
    );
    assert_eq!(
        relativize("http://example.com/a/b", "http://example.com/a/b?q=1").unwrap(),
        "?q=1"
    );
    // Identical IRIs relativize to the empty reference.
    assert_eq!(
        relativize("http://example.com/a/b", "http://example.com/a/b").unwrap(),
        ""
    );
}

#[test]
fn colon_in_first_segment() {
    let rel = relativize("http://example.com/a/b", "http://example.com/a/c:d").unwrap();
    assert_eq!(rel, "./c:d");
}

#[test]
fn unsupported_forms() {
    // Base without a scheme.
    assert!(relativize("//example.com/a/b", "//example.com/a/c").is_none());
    // Base with a query.
    assert!(relativize("http://example.com/a?q", "http://example.com/a").is_none());
    // Different scheme or authority.
    assert!(relativize("http://example.com/a", "https://example.com/a").is_none());
    assert!(relativize("http://example.com/a", "http://example.org/a").is_none());
    // Target neither under the base directory nor equal.
    assert!(relativize("http://example.com/a/b", "http://example.com/x/y").is_none());
    // Parent-relative is out of scope.
    assert!(relativize("http://example.com/a/b/c", "http://example.com/a/d").is_none());
    // A prefix match must be slash-aligned.
    assert!(relativize("http://example.com/a/b", "http://example.com/ab/c").is_none());
    // Target without scheme and authority.
    assert!(relativize("http://example.com/a", "x/y").is_none());
}

#[test]
fn round_trips_through_resolve() {
    let cases = [
        ("http://example.com/a/b", "http://example.com/a/c"),
        ("http://example.com/a/b", "http://example.com/a/c/d?q"),
        ("http://example.com/a/b", "http://example.com/a/b#f"),
        ("http://example.com/a/b", "http://example.com/a/b"),
        ("http://example.com/a/", "http://example.com/a/c:d"),
        ("urn:example:a/b", "urn:example:a/c"),
    ];
    for (base, target) in cases {
        let base = Iri::parse(base).unwrap();
        let target = Iri::parse(target).unwrap();
        let rel = base.relativize(&target).unwrap();
        assert_eq!(
            rel.resolve_against(&base).unwrap(),
            target,
            "round trip failed for base {base}, target {target}, rel {rel}"
        );
    }
}
