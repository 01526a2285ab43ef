//! AnalysisHost lifecycle and the Analysis query surface

use crate::helpers::{host_with, split_caret};
use magicscript::ide::CursorContext;
use magicscript::{AnalysisHost, ApiSettings, TextSize};

#[test]
fn snapshot_answers_every_query_family() {
    let host = host_with("api/list.ms", "var rows = db.select('select 1');\nreturn rows;");
    let analysis = host.analysis();

    assert_eq!(analysis.infer_type("db.page('sql')"), "PageResult");
    assert_eq!(
        analysis.infer_chain_type("db.select('sql').map(r => r.name)"),
        "Array"
    );
    assert_eq!(analysis.module("db").unwrap().name, "db");
    assert!(analysis.search_methods("paging").iter().any(|m| m.name == "page"));
    assert!(analysis.is_feature_available("db.transaction"));
    assert!(!analysis.extension_methods_of("string").is_empty(), "aliases resolve");
}

#[test]
fn infer_type_at_resolves_through_enclosing_scope() {
    let (source, offset) = split_caret("var rows = db.select('x');\nreturn ro|ws;");
    let host = host_with("a.ms", &source);
    let inferred = host.analysis().infer_type_at("a.ms", offset);
    assert_eq!(inferred.as_deref(), Some("Array"));
}

#[test]
fn infer_type_at_misses_politely() {
    let host = host_with("a.ms", "var x = 1;");
    let analysis = host.analysis();
    assert_eq!(analysis.infer_type_at("missing.ms", TextSize::new(0)), None);
    assert_eq!(analysis.infer_type_at("a.ms", TextSize::new(10_000)), None);
}

#[test]
fn parse_errors_surface_on_set_document() {
    let mut host = AnalysisHost::new();
    let clean = host.set_document("a.ms", "var x = 1;");
    assert!(clean.is_empty());

    let broken = host.set_document("a.ms", "var = ;");
    assert!(!broken.is_empty());
    // The document is still queryable despite its errors
    assert!(host.document("a.ms").is_some());
    assert_eq!(host.document_count(), 1);
}

#[test]
fn settings_swap_rewires_feature_gating() {
    let mut host = AnalysisHost::with_settings(ApiSettings::new("1.0").unwrap());
    assert!(!host.analysis().is_feature_available("db.transaction"));

    host.set_settings(ApiSettings::new("2.0").unwrap());
    assert!(host.analysis().is_feature_available("db.transaction"));
}

#[test]
fn registry_reload_drops_memoized_answers() {
    let mut host = host_with("a.ms", "var x = 1;");
    assert_eq!(host.analysis().infer_type("db.select('x')"), "Array");

    host.reload_registry();
    // Builtins are back and the answer is recomputed, not replayed
    assert!(host.registry().has_module("db"));
    assert_eq!(host.analysis().infer_type("db.select('x')"), "Array");
}

#[test]
fn cursor_context_is_reachable_from_the_snapshot() {
    let (source, offset) = split_caret("db.|");
    let host = host_with("a.ms", &source);
    let context = host.analysis().cursor_context("a.ms", offset).unwrap();
    assert_eq!(
        context,
        CursorContext::MemberAccess {
            qualifier: "db".to_string(),
            prefix: String::new(),
        }
    );
    assert!(host.analysis().cursor_context("missing.ms", offset).is_none());
}

#[test]
fn host_validates_its_own_builtin_data() {
    let host = AnalysisHost::new();
    assert!(host.validate().is_empty());
}
