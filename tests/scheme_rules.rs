use fluent_iri::{check, check_with, Compliance, Error, SchemeErrorKind, SchemeRules};

#[track_caller]
fn scheme_err(s: &str) -> SchemeErrorKind {
    match check_with(s, &SchemeRules::default()) {
        Err(Error::Scheme(e)) => e.kind(),
        other => panic!("expected a scheme error for {s:?}, got {other:?}"),
    }
}

#[test]
fn grammar_and_scheme_checks_are_independent() {
    // Grammatical, but breaking its scheme's rules.
    assert!(check("http://user@example.com/").is_ok());
    assert_eq!(
        scheme_err("http://user@example.com/"),
        SchemeErrorKind::HttpUserinfo
    );

    // Unknown schemes carry no rules.
    assert!(check_with("gopher://anything@goes:0/", &SchemeRules::default()).is_ok());

    // Grammar errors surface as such.
    assert!(matches!(
        check_with("http://a b/", &SchemeRules::default()),
        Err(Error::Parse(_))
    ));
}

#[test]
fn http_and_file() {
    let rules = SchemeRules::default();

    assert!(check_with("http://example.com/", &rules).is_ok());
    assert!(check_with("HtTpS://example.com/", &rules).is_ok());
    assert_eq!(scheme_err("http:no-authority"), SchemeErrorKind::HttpMissingAuthority);
    assert_eq!(scheme_err("http:///x"), SchemeErrorKind::HttpEmptyHost);

    assert!(check_with("file:///x", &rules).is_ok());
    assert_eq!(scheme_err("file://x/y"), SchemeErrorKind::FileNonEmptyAuthority);
}

#[test]
fn urn_strictness() {
    let strict = SchemeRules::default();
    let lax = SchemeRules {
        urn: Compliance::Lax,
        ..SchemeRules::default()
    };

    assert!(check_with("urn:example:abc", &strict).is_ok());
    assert_eq!(scheme_err("urn:x:abc"), SchemeErrorKind::UrnBadAssignedName);
    assert!(check_with("urn:x:abc", &lax).is_ok());

    assert!(check_with("urn:example:abc?=query", &strict).is_ok());
    assert_eq!(scheme_err("urn:example:abc?query"), SchemeErrorKind::UrnBadQueryLead);
}

#[test]
fn uuid_forms() {
    let rules = SchemeRules::default();
    let uuid = "6e8bc430-9c3a-11d9-9669-0800200c9a66";

    assert!(check_with(&format!("urn:uuid:{uuid}"), &rules).is_ok());
    assert!(check_with(&format!("uuid:{uuid}"), &rules).is_ok());
    assert_eq!(
        scheme_err(&format!("urn:uuid:{uuid}#frag")),
        SchemeErrorKind::UuidDisallowedFragment
    );
    assert_eq!(scheme_err("urn:uuid:not-a-uuid"), SchemeErrorKind::UuidBadLength);
}
