//! Literal classification grid

use magicscript::TypeCatalog;
use rstest::rstest;

#[rstest]
#[case("\"abc\"", "String")]
#[case("'abc'", "String")]
#[case("''", "String")]
#[case("42", "Integer")]
#[case("-7", "Integer")]
#[case("42L", "Long")]
#[case("3.14", "Double")]
#[case("3.14D", "Double")]
#[case("2.5F", "Float")]
#[case("true", "Boolean")]
#[case("false", "Boolean")]
#[case("[1,2]", "Array")]
#[case("[]", "Array")]
#[case("{}", "Map")]
#[case("{ a: 1, b: 2 }", "Map")]
#[case("null", "Null")]
#[case("undefined", "Null")]
fn classify_recognizes_literal_shapes(#[case] text: &str, #[case] expected: &str) {
    let catalog = TypeCatalog::new();
    assert_eq!(catalog.classify(text), expected, "literal {:?}", text);
}

#[rstest]
#[case("someIdent")]
#[case("1 + 2")]
#[case("db.select('x')")]
#[case("")]
#[case("   ")]
fn classify_falls_back_to_unknown(#[case] text: &str) {
    let catalog = TypeCatalog::new();
    assert_eq!(catalog.classify(text), "unknown", "literal {:?}", text);
}

#[test]
fn classify_never_panics_on_garbage() {
    let catalog = TypeCatalog::new();
    for text in ["\"unterminated", "{unclosed", "[", "::::", "\u{0}\u{1}"] {
        let _ = catalog.classify(text);
    }
}
