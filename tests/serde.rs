#![cfg(feature = "serde")]

use fluent_iri::Iri;

#[test]
fn serialize() {
    let iri = Iri::parse("http://example.com/?q#f").unwrap();
    assert_eq!(
        serde_json::to_string(&iri).unwrap(),
        r#""http://example.com/?q#f""#
    );
}

#[test]
fn deserialize() {
    let iri: Iri<String> = serde_json::from_str(r#""foo://user@example.com:8042/over/there""#).unwrap();
    assert_eq!(iri.host(), Some("example.com"));
    assert_eq!(iri.path(), "/over/there");

    assert!(serde_json::from_str::<Iri<String>>(r#""a b""#).is_err());

    // Borrowed deserialization from a string without escapes.
    let iri: Iri<&str> = serde_json::from_str(r#""foo:bar""#).unwrap();
    assert_eq!(iri.as_str(), "foo:bar");
}
