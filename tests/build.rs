use fluent_iri::{Builder, Iri, ParseErrorKind};

#[test]
fn build_full() {
    let iri = Builder::new()
        .scheme("foo")
        .userinfo("user")
        .host("example.com")
        .port(8042)
        .path("/over/there")
        .query("name=ferret")
        .fragment("nose")
        .build()
        .unwrap();

    assert_eq!(
        iri.as_str(),
        "foo://user@example.com:8042/over/there?name=ferret#nose"
    );
    assert_eq!(iri.userinfo(), Some("user"));
    assert_eq!(iri.host(), Some("example.com"));
    assert_eq!(iri.port(), Some("8042"));
}

#[test]
fn build_partial() {
    let iri = Builder::new().path("a/b").build().unwrap();
    assert_eq!(iri, "a/b");
    assert!(iri.is_relative());

    let iri = Builder::new()
        .scheme("urn")
        .path("example:abc")
        .build()
        .unwrap();
    assert_eq!(iri, "urn:example:abc");
    assert!(iri.is_rootless());

    let iri = Builder::new()
        .scheme("file")
        .authority("")
        .path("/etc/hosts")
        .build()
        .unwrap();
    assert_eq!(iri, "file:///etc/hosts");

    let iri = Builder::new().query("q").fragment("f").build().unwrap();
    assert_eq!(iri, "?q#f");
}

#[test]
fn subcomponents_win_over_authority() {
    let iri = Builder::new()
        .scheme("http")
        .authority("ignored")
        .host("example.com")
        .build()
        .unwrap();
    assert_eq!(iri, "http://example.com");
}

#[test]
fn built_values_are_reparsed() {
    // The composed string is parsed, so invariants are enforced and
    // offsets populated.
    let iri = Builder::new()
        .scheme("http")
        .host("[::1]")
        .port(80)
        .path("/x")
        .build()
        .unwrap();
    assert_eq!(iri.authority().unwrap().host(), "[::1]");
    assert_eq!(iri.rebuild(), iri.as_str());

    // Invalid components surface as parse errors of the composition.
    let e = Builder::new().scheme("http").path("a b").build().unwrap_err();
    assert_eq!(e.plain().kind(), ParseErrorKind::UnexpectedChar);
    assert_eq!(e.into_input(), "http:a b");

    let e = Builder::new().scheme("1x").path("y").build().unwrap_err();
    assert_eq!(e.plain().kind(), ParseErrorKind::UnexpectedChar);

    // A host with a space never parses back.
    assert!(Builder::new().host("a b").build().is_err());
}

#[test]
fn rebuild_round_trips() {
    for s in [
        "http://user@host:8081/abc/def?qs=ghi#jkl",
        "urn:example:abc",
        "//example.com",
        "?q",
        "#f",
        "",
    ] {
        let iri = Iri::parse(s).unwrap();
        let rebuilt = Builder::new();
        let rebuilt = match iri.scheme() {
            Some(scheme) => rebuilt.scheme(scheme.as_str()),
            None => rebuilt,
        };
        let rebuilt = match iri.authority() {
            Some(a) => rebuilt.authority(a.as_str()),
            None => rebuilt,
        };
        let rebuilt = rebuilt.path(iri.path());
        let rebuilt = match iri.query() {
            Some(q) => rebuilt.query(q),
            None => rebuilt,
        };
        let rebuilt = match iri.fragment() {
            Some(f) => rebuilt.fragment(f),
            None => rebuilt,
        };
        assert_eq!(rebuilt.build().unwrap(), s);
    }
}
