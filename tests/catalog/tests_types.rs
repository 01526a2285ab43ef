//! Type table properties: aliases, hierarchy, conversions

use magicscript::TypeCatalog;
use rstest::rstest;

#[rstest]
#[case("int", "Integer")]
#[case("list", "List")]
#[case("map", "Map")]
#[case("string", "String")]
#[case("bool", "Boolean")]
#[case("any", "Object")]
fn aliases_resolve_to_canonical_names(#[case] alias: &str, #[case] canonical: &str) {
    let catalog = TypeCatalog::new();
    assert_eq!(catalog.resolve_alias(alias), canonical);
}

#[test]
fn alias_resolution_is_idempotent() {
    let catalog = TypeCatalog::new();
    for alias in ["int", "list", "map", "string", "bool", "Integer", "NotAType"] {
        let once = catalog.resolve_alias(alias);
        assert_eq!(catalog.resolve_alias(&once), once, "alias {:?}", alias);
    }
}

#[test]
fn unknown_names_pass_through_unchanged() {
    let catalog = TypeCatalog::new();
    assert_eq!(catalog.resolve_alias("Widget"), "Widget");
    assert!(!catalog.is_known_type("Widget"));
}

#[test]
fn subtyping_is_reflexive_and_object_is_root() {
    let catalog = TypeCatalog::new();
    for name in catalog.canonical_names() {
        assert!(catalog.is_subtype_of(name, name), "{} not reflexive", name);
        assert!(catalog.is_subtype_of(name, "Object"), "{} not under Object", name);
        if name != "Object" {
            assert!(
                !catalog.is_subtype_of("Object", name),
                "Object must not descend from {}",
                name
            );
        }
    }
    assert_eq!(catalog.supertype_of("Object"), None);
}

#[test]
fn numeric_and_collection_families() {
    let catalog = TypeCatalog::new();
    assert!(catalog.is_subtype_of("Integer", "Number"));
    assert!(catalog.is_subtype_of("Double", "Number"));
    assert!(catalog.is_subtype_of("List", "Array"));
    assert!(!catalog.is_subtype_of("Number", "Integer"));
    assert!(!catalog.is_subtype_of("Array", "List"));
    assert!(!catalog.is_subtype_of("String", "Number"));
}

#[test]
fn compatibility_covers_widening_and_subtyping() {
    let catalog = TypeCatalog::new();
    assert!(catalog.is_compatible("Integer", "Number"));
    assert!(catalog.is_compatible("Integer", "Long"));
    assert!(catalog.is_compatible("Float", "Double"));
    assert!(catalog.is_compatible("List", "Array"));
    assert!(!catalog.is_compatible("String", "Integer"));
    assert!(!catalog.is_compatible("Double", "Integer"));
    // Everything converts to String and Object
    assert!(catalog.is_compatible("Date", "String"));
    assert!(catalog.is_compatible("PageResult", "Object"));
}

#[test]
fn member_name_sets_and_defaults_are_total() {
    let catalog = TypeCatalog::new();
    assert!(catalog.methods_of("Array").contains(&"size"));
    assert!(catalog.properties_of("HttpResponse").contains(&"status"));
    assert!(catalog.methods_of("NoSuchType").is_empty());
    assert!(catalog.properties_of("NoSuchType").is_empty());
    assert_eq!(catalog.default_value_of("Integer"), Some("0"));
    assert_eq!(catalog.default_value_of("NoSuchType"), None);
}
