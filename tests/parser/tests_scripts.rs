//! Whole-script parsing: losslessness and mid-edit tolerance

use magicscript::parser::{AstNode, SourceFile, Stmt, parse};
use magicscript::{LineCol, ScriptFile};

const HANDLER: &str = r#"import 'module.tool'

var keyword = request.getParameter('keyword');
var page = db.page('select * from sys_user where name like #{keyword}');
if (page.total == 0) {
    log.info('no users matched {}', keyword);
}
return response.page(page.total, page.list);
"#;

#[test]
fn realistic_handler_parses_cleanly() {
    let file = ScriptFile::new(HANDLER);
    assert!(!file.has_errors(), "Got: {:?}", file.errors());
    assert_eq!(file.source_text(), HANDLER, "tree must cover every byte");
    assert_eq!(file.extract_imports(), vec!["module.tool"]);

    let statements: Vec<Stmt> = file.source_file().unwrap().statements().collect();
    assert!(statements.len() >= 4, "Got: {}", statements.len());
}

#[test]
fn comments_and_whitespace_survive_round_trips() {
    let source = "// list users\nvar rows = db.select('x'); /* keep */\n";
    let parsed = parse(source);
    assert_eq!(parsed.syntax_node().text().to_string(), source);
    assert!(parsed.errors.is_empty());
}

#[test]
fn mid_edit_scripts_keep_a_usable_tree() {
    for source in [
        "var user = db.",
        "db.select(",
        "var x = ",
        "response.json({ code: ",
        "if (a > ",
    ] {
        let file = ScriptFile::new(source);
        assert!(file.has_errors(), "expected errors for {:?}", source);
        assert!(file.source_file().is_some(), "no tree for {:?}", source);
        assert_eq!(file.source_text(), source, "lost text for {:?}", source);
    }
}

#[test]
fn error_positions_are_reported_in_range() {
    let source = "var broken = ;\nvar ok = 2;";
    let file = ScriptFile::new(source);
    assert!(file.has_errors());
    for error in file.errors() {
        assert!(
            usize::from(error.range.end()) <= source.len(),
            "error past the end: {:?}",
            error
        );
    }
    // Recovery keeps later statements
    let statements: Vec<Stmt> = file.source_file().unwrap().statements().collect();
    assert!(statements.len() >= 2, "Got: {}", statements.len());
}

#[test]
fn line_index_maps_offsets_both_ways() {
    let file = ScriptFile::new("var a = 1;\nvar b = 2;\n");
    let index = file.line_index();
    assert_eq!(index.line_count(), 3);

    let second_line = index.offset(LineCol { line: 1, col: 4 }).unwrap();
    let back = index.line_col(second_line);
    assert_eq!((back.line, back.col), (1, 4));
}

#[test]
fn equal_sources_compare_equal() {
    let a = ScriptFile::new("var x = 1;");
    let b = ScriptFile::new("var x = 1;");
    let c = ScriptFile::new("var x = 2;");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn parse_never_panics_on_arbitrary_input() {
    for source in ["", "\u{0}", "}}}", "((((", "var var var", "'unterminated", "0xzz 1..2"] {
        let parsed = parse(source);
        let _ = SourceFile::cast(parsed.syntax_node());
    }
}
