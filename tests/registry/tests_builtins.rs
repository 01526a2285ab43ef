//! Builtin table contents and registry queries over them

use crate::helpers::SHARED_REGISTRY;
use magicscript::TypeCatalog;
use rstest::rstest;

#[test]
fn all_builtin_modules_are_present() {
    for name in ["db", "http", "request", "response", "env", "log", "magic"] {
        assert!(SHARED_REGISTRY.has_module(name), "missing module {}", name);
    }
    assert!(!SHARED_REGISTRY.has_module("database"));
}

#[rstest]
#[case("db", "select", "Array")]
#[case("db", "selectOne", "Object")]
#[case("db", "selectInt", "Integer")]
#[case("db", "page", "PageResult")]
#[case("db", "update", "Integer")]
#[case("db", "table", "NamedTable")]
#[case("db", "cache", "db")]
#[case("http", "get", "HttpResponse")]
#[case("http", "post", "HttpResponse")]
#[case("http", "connect", "http")]
#[case("request", "getParameter", "String")]
#[case("request", "getValues", "Array")]
#[case("request", "getHeaders", "Map")]
#[case("response", "json", "ResponseBuilder")]
#[case("response", "end", "ResponseBuilder")]
#[case("env", "get", "String")]
#[case("log", "info", "Null")]
#[case("magic", "call", "Object")]
fn module_method_return_types(#[case] module: &str, #[case] method: &str, #[case] expected: &str) {
    let found = SHARED_REGISTRY
        .method_of_module(module, method)
        .unwrap_or_else(|| panic!("{}.{} not registered", module, method));
    assert_eq!(found.return_type, expected);
}

#[test]
fn structured_lookup_rejects_partial_names() {
    // Lookup is by exact (module, method) pair, never by substring
    assert!(SHARED_REGISTRY.method_of_module("db", "selec").is_none());
    assert!(SHARED_REGISTRY.method_of_module("db", "selectOneRow").is_none());
    assert!(SHARED_REGISTRY.method_of_module("d", "select").is_none());
}

#[test]
fn global_function_categories_and_aggregate() {
    let categories = SHARED_REGISTRY.global_function_categories();
    for expected in ["aggregate", "math", "string", "date", "array", "utility"] {
        assert!(
            categories.iter().any(|c| c == expected),
            "missing category {}",
            expected
        );
    }
    let all = SHARED_REGISTRY.functions_of("all");
    let per_category: usize = categories
        .iter()
        .map(|c| SHARED_REGISTRY.functions_of(c).len())
        .sum();
    assert_eq!(all.len(), per_category);

    let count = SHARED_REGISTRY.global_function("count").unwrap();
    assert_eq!(count.return_type, "Integer");
    assert!(SHARED_REGISTRY.global_function("no_such_fn").is_none());
}

#[rstest]
#[case("Array", "size", "Integer")]
#[case("Array", "join", "String")]
#[case("Array", "filter", "Array")]
#[case("String", "split", "Array")]
#[case("String", "isBlank", "Boolean")]
#[case("Number", "toFixed", "String")]
#[case("Map", "keys", "Array")]
#[case("Date", "getTime", "Long")]
#[case("Object", "asInt", "Integer")]
#[case("Object", "isNull", "Boolean")]
fn extension_method_return_types(
    #[case] receiver: &str,
    #[case] method: &str,
    #[case] expected: &str,
) {
    let found = SHARED_REGISTRY
        .extension_method(receiver, method)
        .unwrap_or_else(|| panic!("{}.{} not registered", receiver, method));
    assert_eq!(found.return_type, expected);
}

#[test]
fn extension_buckets_are_keyed_by_exact_type() {
    // Integer methods live on the Number bucket; the walk up the
    // hierarchy happens in the inferencer, not here
    assert!(SHARED_REGISTRY.extension_method("Integer", "round").is_none());
    assert!(SHARED_REGISTRY.extension_method("Number", "round").is_some());
}

#[test]
fn search_is_case_insensitive_over_names_and_descriptions() {
    let hits = SHARED_REGISTRY.search_methods("SeLeCt");
    assert!(hits.iter().any(|m| m.name == "select"));
    assert!(hits.iter().any(|m| m.name == "selectOne"));

    let empty = SHARED_REGISTRY.search_methods("zzznothing");
    assert!(empty.is_empty());
}

#[test]
fn builtin_tables_validate_against_the_catalog() {
    let issues = SHARED_REGISTRY.validate(&TypeCatalog::new());
    assert!(issues.is_empty(), "Got: {:?}", issues);
}

#[test]
fn builtin_method_signatures_render() {
    let page = SHARED_REGISTRY.method_of_module("db", "page").unwrap();
    let signature = page.signature();
    assert!(signature.starts_with("page("));
    assert!(signature.ends_with("): PageResult"));
}
