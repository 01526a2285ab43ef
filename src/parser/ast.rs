//! Typed AST layer over the rowan syntax tree
//!
//! Thin wrappers that give structured access to nodes without copying
//! anything out of the green tree.

use super::syntax_kind::{SyntaxKind, SyntaxNode, SyntaxToken};
use rowan::TextRange;

/// Common interface for typed AST nodes
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(syntax: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    fn text_range(&self) -> TextRange {
        self.syntax().text_range()
    }
}

macro_rules! ast_node {
    ($(#[$attr:meta])* $name:ident, $kind:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            syntax: SyntaxNode,
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(syntax: SyntaxNode) -> Option<Self> {
                if Self::can_cast(syntax.kind()) {
                    Some(Self { syntax })
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.syntax
            }
        }
    };
}

// =============================================================================
// FILE AND STATEMENTS
// =============================================================================

ast_node!(
    /// Root of a parsed script
    SourceFile,
    SOURCE_FILE
);

impl SourceFile {
    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.syntax.children().filter_map(Stmt::cast)
    }
}

ast_node!(
    /// `var name = initializer;`
    VarStmt,
    VAR_STMT
);

impl VarStmt {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::IDENT)
    }

    pub fn name(&self) -> Option<String> {
        self.name_token().map(|t| t.text().to_string())
    }

    pub fn initializer(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }
}

ast_node!(ExprStmt, EXPR_STMT);

impl ExprStmt {
    pub fn expr(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }
}

ast_node!(IfStmt, IF_STMT);
ast_node!(WhileStmt, WHILE_STMT);
ast_node!(ReturnStmt, RETURN_STMT);
ast_node!(BreakStmt, BREAK_STMT);
ast_node!(ContinueStmt, CONTINUE_STMT);
ast_node!(ImportStmt, IMPORT_STMT);
ast_node!(TryStmt, TRY_STMT);
ast_node!(ExitStmt, EXIT_STMT);
ast_node!(AssertStmt, ASSERT_STMT);
ast_node!(Block, BLOCK);

impl ImportStmt {
    /// The import target: a quoted module path or dotted identifier path
    pub fn target(&self) -> Option<String> {
        let mut idents = Vec::new();
        for element in self.syntax.children_with_tokens() {
            if let Some(token) = element.into_token() {
                match token.kind() {
                    SyntaxKind::STRING => {
                        let text = token.text();
                        return Some(text[1..text.len() - 1].to_string());
                    }
                    SyntaxKind::AS_KW => break,
                    SyntaxKind::IDENT => idents.push(token.text().to_string()),
                    _ => {}
                }
            }
        }
        if idents.is_empty() {
            None
        } else {
            Some(idents.join("."))
        }
    }

    /// The alias after `as`, if present
    pub fn alias(&self) -> Option<String> {
        let mut seen_as = false;
        for element in self.syntax.children_with_tokens() {
            if let Some(token) = element.into_token() {
                if token.kind() == SyntaxKind::AS_KW {
                    seen_as = true;
                } else if seen_as && token.kind() == SyntaxKind::IDENT {
                    return Some(token.text().to_string());
                }
            }
        }
        None
    }
}

impl Block {
    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.syntax.children().filter_map(Stmt::cast)
    }
}

ast_node!(
    /// `for (item in list)` or `for (key, value in map)`
    ForStmt,
    FOR_STMT
);

impl ForStmt {
    /// The loop variable names, in order
    pub fn binding_tokens(&self) -> Vec<SyntaxToken> {
        let mut out = Vec::new();
        for element in self.syntax.children_with_tokens() {
            match element {
                rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::IDENT => out.push(t),
                rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::IN_KW => break,
                rowan::NodeOrToken::Node(_) => break,
                _ => {}
            }
        }
        out
    }

    pub fn iterable(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }
}

impl ReturnStmt {
    pub fn value(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }
}

/// Any statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Var(VarStmt),
    Expr(ExprStmt),
    If(IfStmt),
    For(ForStmt),
    While(WhileStmt),
    Return(ReturnStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Import(ImportStmt),
    Try(TryStmt),
    Exit(ExitStmt),
    Assert(AssertStmt),
    Block(Block),
}

impl Stmt {
    pub fn cast(syntax: SyntaxNode) -> Option<Self> {
        let stmt = match syntax.kind() {
            SyntaxKind::VAR_STMT => Stmt::Var(VarStmt::cast(syntax)?),
            SyntaxKind::EXPR_STMT => Stmt::Expr(ExprStmt::cast(syntax)?),
            SyntaxKind::IF_STMT => Stmt::If(IfStmt::cast(syntax)?),
            SyntaxKind::FOR_STMT => Stmt::For(ForStmt::cast(syntax)?),
            SyntaxKind::WHILE_STMT => Stmt::While(WhileStmt::cast(syntax)?),
            SyntaxKind::RETURN_STMT => Stmt::Return(ReturnStmt::cast(syntax)?),
            SyntaxKind::BREAK_STMT => Stmt::Break(BreakStmt::cast(syntax)?),
            SyntaxKind::CONTINUE_STMT => Stmt::Continue(ContinueStmt::cast(syntax)?),
            SyntaxKind::IMPORT_STMT => Stmt::Import(ImportStmt::cast(syntax)?),
            SyntaxKind::TRY_STMT => Stmt::Try(TryStmt::cast(syntax)?),
            SyntaxKind::EXIT_STMT => Stmt::Exit(ExitStmt::cast(syntax)?),
            SyntaxKind::ASSERT_STMT => Stmt::Assert(AssertStmt::cast(syntax)?),
            SyntaxKind::BLOCK => Stmt::Block(Block::cast(syntax)?),
            _ => return None,
        };
        Some(stmt)
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Stmt::Var(s) => s.syntax(),
            Stmt::Expr(s) => s.syntax(),
            Stmt::If(s) => s.syntax(),
            Stmt::For(s) => s.syntax(),
            Stmt::While(s) => s.syntax(),
            Stmt::Return(s) => s.syntax(),
            Stmt::Break(s) => s.syntax(),
            Stmt::Continue(s) => s.syntax(),
            Stmt::Import(s) => s.syntax(),
            Stmt::Try(s) => s.syntax(),
            Stmt::Exit(s) => s.syntax(),
            Stmt::Assert(s) => s.syntax(),
            Stmt::Block(s) => s.syntax(),
        }
    }
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

ast_node!(Literal, LITERAL);

/// What a literal token denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Integer,
    Long,
    Float,
    Double,
    String,
    Boolean,
    Null,
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| !t.kind().is_trivia())
    }

    pub fn literal_kind(&self) -> Option<LiteralKind> {
        let kind = match self.token()?.kind() {
            SyntaxKind::INTEGER => LiteralKind::Integer,
            SyntaxKind::LONG => LiteralKind::Long,
            SyntaxKind::FLOAT => LiteralKind::Float,
            SyntaxKind::DOUBLE => LiteralKind::Double,
            SyntaxKind::STRING => LiteralKind::String,
            SyntaxKind::TRUE_KW | SyntaxKind::FALSE_KW => LiteralKind::Boolean,
            SyntaxKind::NULL_KW | SyntaxKind::UNDEFINED_KW => LiteralKind::Null,
            _ => return None,
        };
        Some(kind)
    }
}

ast_node!(
    /// A bare identifier in expression position
    NameRef,
    NAME_REF
);

impl NameRef {
    pub fn ident_token(&self) -> Option<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::IDENT)
    }

    pub fn text(&self) -> Option<String> {
        self.ident_token().map(|t| t.text().to_string())
    }
}

ast_node!(ParenExpr, PAREN_EXPR);

impl ParenExpr {
    pub fn inner(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }
}

ast_node!(ArrayExpr, ARRAY_EXPR);

impl ArrayExpr {
    pub fn elements(&self) -> impl Iterator<Item = Expr> + '_ {
        self.syntax.children().filter_map(Expr::cast)
    }
}

ast_node!(MapExpr, MAP_EXPR);
ast_node!(MapEntry, MAP_ENTRY);

impl MapExpr {
    pub fn entries(&self) -> impl Iterator<Item = MapEntry> + '_ {
        self.syntax.children().filter_map(MapEntry::cast)
    }
}

impl MapEntry {
    pub fn key_token(&self) -> Option<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| {
                matches!(
                    t.kind(),
                    SyntaxKind::IDENT | SyntaxKind::STRING | SyntaxKind::INTEGER
                )
            })
    }

    pub fn value(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }
}

ast_node!(LambdaExpr, LAMBDA_EXPR);
ast_node!(ParamList, PARAM_LIST);
ast_node!(Param, PARAM);

impl LambdaExpr {
    pub fn param_list(&self) -> Option<ParamList> {
        self.syntax.children().find_map(ParamList::cast)
    }

    pub fn body(&self) -> Option<SyntaxNode> {
        self.syntax
            .children()
            .find(|n| n.kind() != SyntaxKind::PARAM_LIST)
    }
}

impl ParamList {
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.syntax.children().filter_map(Param::cast)
    }
}

impl Param {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::IDENT)
    }
}

ast_node!(
    /// `object.member`
    MemberExpr,
    MEMBER_EXPR
);

impl MemberExpr {
    pub fn object(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }

    /// The identifier after the dot, if present
    pub fn member_token(&self) -> Option<SyntaxToken> {
        let mut seen_dot = false;
        for element in self.syntax.children_with_tokens() {
            if let Some(token) = element.into_token() {
                if token.kind() == SyntaxKind::DOT {
                    seen_dot = true;
                } else if seen_dot && token.kind() == SyntaxKind::IDENT {
                    return Some(token);
                }
            }
        }
        None
    }

    pub fn member_name(&self) -> Option<String> {
        self.member_token().map(|t| t.text().to_string())
    }
}

ast_node!(
    /// `callee(args)`
    CallExpr,
    CALL_EXPR
);

impl CallExpr {
    pub fn callee(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }

    pub fn arg_list(&self) -> Option<ArgList> {
        self.syntax.children().find_map(ArgList::cast)
    }
}

ast_node!(ArgList, ARG_LIST);

impl ArgList {
    pub fn args(&self) -> impl Iterator<Item = Expr> + '_ {
        self.syntax.children().filter_map(Expr::cast)
    }
}

ast_node!(IndexExpr, INDEX_EXPR);

impl IndexExpr {
    pub fn base(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }
}

ast_node!(
    /// `value::type` or `value::type(args)`
    ConvertExpr,
    CONVERT_EXPR
);

impl ConvertExpr {
    pub fn receiver(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }

    /// The identifier naming the conversion target
    pub fn target_token(&self) -> Option<SyntaxToken> {
        let mut seen_colons = false;
        for element in self.syntax.children_with_tokens() {
            if let Some(token) = element.into_token() {
                if token.kind() == SyntaxKind::COLON_COLON {
                    seen_colons = true;
                } else if seen_colons && token.kind() == SyntaxKind::IDENT {
                    return Some(token);
                }
            }
        }
        None
    }

    pub fn target_name(&self) -> Option<String> {
        self.target_token().map(|t| t.text().to_string())
    }
}

ast_node!(NewExpr, NEW_EXPR);

impl NewExpr {
    pub fn type_name(&self) -> Option<String> {
        let parts: Vec<_> = self
            .syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| t.kind() == SyntaxKind::IDENT)
            .map(|t| t.text().to_string())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("."))
        }
    }
}

ast_node!(UnaryExpr, UNARY_EXPR);

impl UnaryExpr {
    pub fn operand(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }

    pub fn op_token(&self) -> Option<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind().is_punct() || t.kind() == SyntaxKind::ASYNC_KW)
    }
}

ast_node!(BinaryExpr, BINARY_EXPR);

impl BinaryExpr {
    pub fn lhs(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }

    pub fn rhs(&self) -> Option<Expr> {
        self.syntax.children().filter_map(Expr::cast).nth(1)
    }

    pub fn op_token(&self) -> Option<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind().is_punct())
    }
}

ast_node!(TernaryExpr, TERNARY_EXPR);

impl TernaryExpr {
    pub fn condition(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }

    pub fn then_branch(&self) -> Option<Expr> {
        self.syntax.children().filter_map(Expr::cast).nth(1)
    }

    pub fn else_branch(&self) -> Option<Expr> {
        self.syntax.children().filter_map(Expr::cast).nth(2)
    }
}

ast_node!(AssignExpr, ASSIGN_EXPR);

impl AssignExpr {
    pub fn target(&self) -> Option<Expr> {
        self.syntax.children().find_map(Expr::cast)
    }

    pub fn value(&self) -> Option<Expr> {
        self.syntax.children().filter_map(Expr::cast).nth(1)
    }
}

/// Any expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(Literal),
    NameRef(NameRef),
    Paren(ParenExpr),
    Array(ArrayExpr),
    Map(MapExpr),
    Lambda(LambdaExpr),
    Member(MemberExpr),
    Call(CallExpr),
    Index(IndexExpr),
    Convert(ConvertExpr),
    New(NewExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Ternary(TernaryExpr),
    Assign(AssignExpr),
}

impl Expr {
    pub fn cast(syntax: SyntaxNode) -> Option<Self> {
        let expr = match syntax.kind() {
            SyntaxKind::LITERAL => Expr::Literal(Literal::cast(syntax)?),
            SyntaxKind::NAME_REF => Expr::NameRef(NameRef::cast(syntax)?),
            SyntaxKind::PAREN_EXPR => Expr::Paren(ParenExpr::cast(syntax)?),
            SyntaxKind::ARRAY_EXPR => Expr::Array(ArrayExpr::cast(syntax)?),
            SyntaxKind::MAP_EXPR => Expr::Map(MapExpr::cast(syntax)?),
            SyntaxKind::LAMBDA_EXPR => Expr::Lambda(LambdaExpr::cast(syntax)?),
            SyntaxKind::MEMBER_EXPR => Expr::Member(MemberExpr::cast(syntax)?),
            SyntaxKind::CALL_EXPR => Expr::Call(CallExpr::cast(syntax)?),
            SyntaxKind::INDEX_EXPR => Expr::Index(IndexExpr::cast(syntax)?),
            SyntaxKind::CONVERT_EXPR => Expr::Convert(ConvertExpr::cast(syntax)?),
            SyntaxKind::NEW_EXPR => Expr::New(NewExpr::cast(syntax)?),
            SyntaxKind::UNARY_EXPR => Expr::Unary(UnaryExpr::cast(syntax)?),
            SyntaxKind::BINARY_EXPR => Expr::Binary(BinaryExpr::cast(syntax)?),
            SyntaxKind::TERNARY_EXPR => Expr::Ternary(TernaryExpr::cast(syntax)?),
            SyntaxKind::ASSIGN_EXPR => Expr::Assign(AssignExpr::cast(syntax)?),
            _ => return None,
        };
        Some(expr)
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Expr::Literal(e) => e.syntax(),
            Expr::NameRef(e) => e.syntax(),
            Expr::Paren(e) => e.syntax(),
            Expr::Array(e) => e.syntax(),
            Expr::Map(e) => e.syntax(),
            Expr::Lambda(e) => e.syntax(),
            Expr::Member(e) => e.syntax(),
            Expr::Call(e) => e.syntax(),
            Expr::Index(e) => e.syntax(),
            Expr::Convert(e) => e.syntax(),
            Expr::New(e) => e.syntax(),
            Expr::Unary(e) => e.syntax(),
            Expr::Binary(e) => e.syntax(),
            Expr::Ternary(e) => e.syntax(),
            Expr::Assign(e) => e.syntax(),
        }
    }

    pub fn text_range(&self) -> TextRange {
        self.syntax().text_range()
    }

    /// Source text of this expression
    pub fn text(&self) -> String {
        self.syntax().text().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn first_expr(input: &str) -> Expr {
        let file = SourceFile::cast(parse(input).syntax_node()).unwrap();
        let stmt = file.statements().next().unwrap();
        match stmt {
            Stmt::Var(v) => v.initializer().unwrap(),
            Stmt::Expr(e) => e.expr().unwrap(),
            other => panic!("unexpected statement: {:?}", other),
        }
    }

    #[test]
    fn test_var_stmt_accessors() {
        let file = SourceFile::cast(parse("var total = 42;").syntax_node()).unwrap();
        let Stmt::Var(var) = file.statements().next().unwrap() else {
            panic!("expected var stmt");
        };
        assert_eq!(var.name().as_deref(), Some("total"));
        assert!(matches!(var.initializer(), Some(Expr::Literal(_))));
    }

    #[test]
    fn test_member_expr_parts() {
        let Expr::Member(member) = first_expr("db.select") else {
            panic!("expected member expr");
        };
        assert_eq!(member.member_name().as_deref(), Some("select"));
        let Some(Expr::NameRef(base)) = member.object() else {
            panic!("expected name ref base");
        };
        assert_eq!(base.text().as_deref(), Some("db"));
    }

    #[test]
    fn test_call_expr_parts() {
        let Expr::Call(call) = first_expr("db.select('select 1', 2)") else {
            panic!("expected call expr");
        };
        assert!(matches!(call.callee(), Some(Expr::Member(_))));
        let args: Vec<_> = call.arg_list().unwrap().args().collect();
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_convert_expr_target() {
        let Expr::Convert(conv) = first_expr("value::long") else {
            panic!("expected convert expr");
        };
        assert_eq!(conv.target_name().as_deref(), Some("long"));
        assert!(conv.receiver().is_some());
    }

    #[test]
    fn test_literal_kinds() {
        let cases = [
            ("var a = 1;", LiteralKind::Integer),
            ("var a = 1L;", LiteralKind::Long),
            ("var a = 1.5F;", LiteralKind::Float),
            ("var a = 1.5;", LiteralKind::Double),
            ("var a = 'text';", LiteralKind::String),
            ("var a = true;", LiteralKind::Boolean),
            ("var a = null;", LiteralKind::Null),
        ];
        for (input, expected) in cases {
            let Expr::Literal(lit) = first_expr(input) else {
                panic!("expected literal in {:?}", input);
            };
            assert_eq!(lit.literal_kind(), Some(expected), "input: {:?}", input);
        }
    }

    #[test]
    fn test_for_stmt_bindings() {
        let file =
            SourceFile::cast(parse("for (key, value in map) { }").syntax_node()).unwrap();
        let Stmt::For(for_stmt) = file.statements().next().unwrap() else {
            panic!("expected for stmt");
        };
        let names: Vec<_> = for_stmt
            .binding_tokens()
            .iter()
            .map(|t| t.text().to_string())
            .collect();
        assert_eq!(names, vec!["key", "value"]);
    }

    #[test]
    fn test_lambda_params() {
        let Expr::Lambda(lambda) = first_expr("(a, b) => a + b") else {
            panic!("expected lambda");
        };
        let params: Vec<_> = lambda
            .param_list()
            .unwrap()
            .params()
            .filter_map(|p| p.name_token())
            .map(|t| t.text().to_string())
            .collect();
        assert_eq!(params, vec!["a", "b"]);
    }

    #[test]
    fn test_new_expr_dotted_name() {
        let Expr::New(new_expr) = first_expr("new java.util.Date()") else {
            panic!("expected new expr");
        };
        assert_eq!(new_expr.type_name().as_deref(), Some("java.util.Date"));
    }
}
