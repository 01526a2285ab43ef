//! Cursor context classification
//!
//! Turns a byte offset in a parsed script into the small set of syntactic
//! situations completion cares about, extracting the qualifier or callee
//! text the inferencer needs. Total: anything unclassifiable is an
//! `Expression` position.

use crate::parser::{
    ArgList, AstNode, CallExpr, Expr, MemberExpr, SyntaxKind, SyntaxNode, SyntaxToken, VarStmt,
};
use crate::syntax::ScriptFile;
use rowan::TextSize;

/// The syntactic situation at a cursor position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorContext {
    /// A general expression position
    Expression,
    /// After a dot: `qualifier.` or `qualifier.pre<cursor>`
    MemberAccess { qualifier: String, prefix: String },
    /// Inside a call's argument list
    Call { callee: String, arg_index: usize },
    /// On a lambda parameter name
    Parameter,
    /// On the name being declared in a `var` statement
    Declaration,
}

/// Classify the cursor position in a parsed script
pub fn classify(file: &ScriptFile, offset: TextSize) -> CursorContext {
    let Some(token) = file.token_at_offset(offset) else {
        return CursorContext::Expression;
    };

    if let Some(context) = member_access_at(&token, offset) {
        return context;
    }
    if is_param_name(&token) {
        return CursorContext::Parameter;
    }
    if is_declared_name(&token) {
        return CursorContext::Declaration;
    }
    if let Some(context) = call_argument_at(&token, offset) {
        return context;
    }
    CursorContext::Expression
}

/// Member access applies when the cursor sits on or right after a dot, or
/// on the identifier following one.
fn member_access_at(token: &SyntaxToken, offset: TextSize) -> Option<CursorContext> {
    let (member, prefix) = if token.kind() == SyntaxKind::DOT {
        (MemberExpr::cast(token.parent()?)?, String::new())
    } else if token.kind() == SyntaxKind::IDENT && follows_dot(token) {
        let member = MemberExpr::cast(token.parent()?)?;
        let typed = usize::from(offset.checked_sub(token.text_range().start())?);
        let prefix = token.text().chars().take(typed).collect();
        (member, prefix)
    } else {
        return None;
    };
    let qualifier = member.object()?.text();
    Some(CursorContext::MemberAccess { qualifier, prefix })
}

/// The parsed qualifier expression of a member access at the cursor.
///
/// Unlike the textual qualifier in [`CursorContext::MemberAccess`], the
/// node stays attached to the tree, so inference can walk enclosing
/// scopes to resolve variables.
pub fn qualifier_at(file: &ScriptFile, offset: TextSize) -> Option<Expr> {
    let token = file.token_at_offset(offset)?;
    let member = if token.kind() == SyntaxKind::DOT
        || (token.kind() == SyntaxKind::IDENT && follows_dot(&token))
    {
        token.parent_ancestors().find_map(MemberExpr::cast)?
    } else {
        return None;
    };
    member.object()
}

fn follows_dot(token: &SyntaxToken) -> bool {
    let mut prev = token.prev_token();
    while let Some(p) = prev {
        if !p.kind().is_trivia() {
            return p.kind() == SyntaxKind::DOT;
        }
        prev = p.prev_token();
    }
    false
}

fn is_param_name(token: &SyntaxToken) -> bool {
    token.kind() == SyntaxKind::IDENT
        && token
            .parent()
            .is_some_and(|parent| parent.kind() == SyntaxKind::PARAM)
}

/// The identifier naming a `var` declaration, before any `=`
fn is_declared_name(token: &SyntaxToken) -> bool {
    if token.kind() != SyntaxKind::IDENT {
        return false;
    }
    let Some(parent) = token.parent() else {
        return false;
    };
    let Some(var_stmt) = VarStmt::cast(parent) else {
        return false;
    };
    var_stmt
        .name_token()
        .is_some_and(|name| name.text_range() == token.text_range())
}

fn call_argument_at(token: &SyntaxToken, offset: TextSize) -> Option<CursorContext> {
    let arg_list = token
        .parent_ancestors()
        .find_map(ArgList::cast)?;
    let call = CallExpr::cast(arg_list.syntax().parent()?)?;
    let callee = call.callee().map(|c| c.text()).unwrap_or_default();
    let arg_index = commas_before(arg_list.syntax(), offset);
    Some(CursorContext::Call { callee, arg_index })
}

fn commas_before(arg_list: &SyntaxNode, offset: TextSize) -> usize {
    arg_list
        .children_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| t.kind() == SyntaxKind::COMMA && t.text_range().end() <= offset)
        .count()
}
