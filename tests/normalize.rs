use fluent_iri::{component::HostKind, Iri};

#[track_caller]
fn norm(s: &str) -> Iri<String> {
    Iri::parse(s).unwrap().normalize()
}

#[test]
fn case_folding() {
    assert_eq!(norm("HTTPs://HOST:443/a/b/c?q=1#2"), "https://host/a/b/c?q=1#2");
    assert_eq!(norm("HTTP://EXAMPLE.COM/"), "http://example.com/");
    // Userinfo and port keep their case and digits; only scheme and
    // host fold.
    assert_eq!(norm("FOO://User@Host:99/P"), "foo://User@host:99/P");
}

#[test]
fn percent_encoding() {
    // Unreserved octets are decoded, others uppercased.
    assert_eq!(norm("http://h/%7ex"), "http://h/~x");
    assert_eq!(norm("http://h/%3ax"), "http://h/%3Ax");
    // The RFC 3986 section 6.2.2 example.
    assert_eq!(
        norm("eXAMPLE://a/./b/../b/%63/%7bfoo%7d"),
        "example://a/b/c/%7Bfoo%7D"
    );
    // The query is normalized as well.
    assert_eq!(norm("a:b?%7e"), "a:b?~");
    assert_eq!(norm("a:b#%7e"), "a:b#~");
    // Decoding in the host lowercases.
    assert_eq!(norm("http://EX%41MPLE.com/"), "http://example.com/");
}

#[test]
fn host_reclassified_after_decoding() {
    let iri = norm("foo://127.0.0.%31/");
    assert_eq!(iri, "foo://127.0.0.1/");
    assert_eq!(iri.authority().unwrap().host_kind(), HostKind::Ipv4);
}

#[test]
fn dot_segments_and_empty_path() {
    assert_eq!(norm("http://example.com"), "http://example.com/");
    assert_eq!(norm("http://example.com/a/./b/../c"), "http://example.com/a/c");
    // No authority, no slash added.
    assert_eq!(norm("a:"), "a:");
    // Relative references are normalized too.
    assert_eq!(norm("./a"), "a");
    assert_eq!(norm("a/./b"), "a/b");
}

#[test]
fn default_ports() {
    assert_eq!(norm("http://example.com:80/"), "http://example.com/");
    assert_eq!(norm("https://example.com:443/x"), "https://example.com/x");
    // Not the scheme's default.
    assert_eq!(norm("http://example.com:8080/"), "http://example.com:8080/");
    assert_eq!(norm("https://example.com:80/"), "https://example.com:80/");
    // An empty port loses its colon.
    assert_eq!(norm("foo://example.com:/"), "foo://example.com/");
    // The port must literally be the default; ":080" is untouched.
    assert_eq!(norm("http://example.com:080/"), "http://example.com:080/");
}

#[test]
fn keeps_output_parseable() {
    // A path collapsing to "//" must not be taken for an authority.
    let iri = norm("a:/..//x");
    assert_eq!(iri, "a:/.//x");
    assert!(!iri.has_authority());
}

#[test]
fn non_ascii_untouched() {
    assert_eq!(norm("http://例え.JP/パス"), "http://例え.jp/パス");
}

#[test]
fn idempotent() {
    for s in [
        "HTTPs://HOST:443/a/b/c?q=1#2",
        "eXAMPLE://a/./b/../b/%63/%7bfoo%7d",
        "http://example.com",
        "a:/..//x",
        "foo://127.0.0.%31/",
        "http://EX%41MPLE.com:80/%7e?%7e#%7e",
        "./a/../b",
    ] {
        let once = norm(s);
        let twice = once.normalize();
        assert_eq!(once, twice, "normalize not idempotent for {s:?}");
    }
}

#[test]
fn to_uri_percent_encodes() {
    let iri = Iri::parse("http://example.com/résumé?q=λ#中").unwrap();
    let uri = iri.to_uri();
    assert_eq!(
        uri,
        "http://example.com/r%C3%A9sum%C3%A9?q=%CE%BB#%E4%B8%AD"
    );
    // Offsets survive the encoding.
    assert_eq!(uri.path(), "/r%C3%A9sum%C3%A9");
    assert_eq!(uri.query(), Some("q=%CE%BB"));
    assert_eq!(uri.fragment(), Some("%E4%B8%AD"));
    assert_eq!(uri.authority().unwrap().host(), "example.com");

    // ASCII input is returned as-is.
    let iri = Iri::parse("http://example.com/a?b#c").unwrap();
    assert_eq!(iri.to_uri(), "http://example.com/a?b#c");

    // The encoded form reparses to equal components.
    let iri = Iri::parse("//例え.jp/パス").unwrap();
    let uri = iri.to_uri();
    let reparsed = Iri::parse(uri.as_str()).unwrap();
    assert_eq!(reparsed.host(), uri.host());
    assert_eq!(reparsed.path(), uri.path());
}
