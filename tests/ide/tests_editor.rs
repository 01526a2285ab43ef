//! Completion and hover through the Analysis snapshot

use crate::helpers::{host_with, split_caret};
use magicscript::ide::{CompletionItem, CompletionKind};
use magicscript::{AnalysisHost, ApiSettings, TextSize};

fn completions_at(host: &AnalysisHost, path: &str, source_with_caret: &str) -> Vec<CompletionItem> {
    let (_, offset) = split_caret(source_with_caret);
    host.analysis().completions(path, offset)
}

fn labels(items: &[CompletionItem]) -> Vec<&str> {
    items.iter().map(|i| i.label.as_ref()).collect()
}

#[test]
fn module_completion_end_to_end() {
    let source = "db.";
    let host = host_with("a.ms", source);
    let items = completions_at(&host, "a.ms", "db.|");
    let labels = labels(&items);
    assert!(labels.contains(&"select"));
    assert!(labels.contains(&"transaction"));
    assert!(items.iter().all(|i| i.kind == CompletionKind::Method));
}

#[test]
fn completion_follows_variable_types_across_statements() {
    let marked = "var rows = db.select('select * from t');\nrows.|";
    let (source, _) = split_caret(marked);
    let host = host_with("a.ms", &source);
    let items = completions_at(&host, "a.ms", marked);
    let labels = labels(&items);
    assert!(labels.contains(&"size"));
    assert!(labels.contains(&"distinct"));
    assert!(!labels.contains(&"select"), "module methods must not leak");
}

#[test]
fn completion_respects_the_host_version() {
    let mut host = AnalysisHost::with_settings(ApiSettings::new("1.0").unwrap());
    host.set_document("a.ms", "db.");
    let items = completions_at(&host, "a.ms", "db.|");
    let labels = labels(&items);
    assert!(!labels.contains(&"transaction"));
    assert!(!labels.contains(&"cache"));
    assert!(labels.contains(&"select"));
}

#[test]
fn completion_for_missing_document_is_empty() {
    let host = AnalysisHost::new();
    assert!(
        host.analysis()
            .completions("nope.ms", TextSize::new(0))
            .is_empty()
    );
}

#[test]
fn completion_items_carry_lsp_kinds_and_insert_text() {
    let host = host_with("a.ms", "db.");
    let items = completions_at(&host, "a.ms", "db.|");
    let select = items.iter().find(|i| i.label.as_ref() == "select").unwrap();
    assert_eq!(select.kind.to_lsp(), 2);
    assert_eq!(select.insert_text.as_deref(), Some("select("));
    assert!(select.detail.as_deref().unwrap().contains("): Array"));

    let source = "log.";
    let host = host_with("b.ms", source);
    let items = completions_at(&host, "b.ms", "log.|");
    let info = items.iter().find(|i| i.label.as_ref() == "info").unwrap();
    assert!(info.insert_text.as_deref().unwrap().starts_with("info("));
}

#[test]
fn hover_end_to_end() {
    let marked = "var rows = db.sel|ect('select 1');";
    let (source, offset) = split_caret(marked);
    let host = host_with("a.ms", &source);
    let result = host.analysis().hover("a.ms", offset).unwrap();
    assert!(result.contents.contains("db.select"));
    assert!(result.contents.contains("**Returns** `Array`"));

    assert!(host.analysis().hover("missing.ms", offset).is_none());
}

#[test]
fn hover_shows_registered_type_documentation() {
    let marked = "var page = db.page('select 1');\nreturn pa|ge;";
    let (source, offset) = split_caret(marked);
    let host = host_with("a.ms", &source);
    let result = host.analysis().hover("a.ms", offset).unwrap();
    assert!(result.contents.contains("page: PageResult"));
    assert!(result.contents.contains("total"));
}
