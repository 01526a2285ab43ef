//! Enclosing-scope variable lookup
//!
//! Magic Script declarations carry no type annotation, so resolving a name
//! means finding the nearest textually-preceding binding and handing its
//! initializer (or loop source) back to the inferencer. The walk goes
//! innermost scope outward; within a scope, later bindings shadow earlier
//! ones, so preceding siblings are scanned in reverse.

use crate::parser::{
    AstNode, Expr, ExprStmt, ForStmt, LambdaExpr, NameRef, SyntaxKind, SyntaxNode, VarStmt,
};

/// Where a name was bound
#[derive(Debug, Clone)]
pub enum Declaration {
    /// `var name = <expr>;` or a later `name = <expr>` assignment
    Initialized(Expr),
    /// `var name;` with no initializer
    Uninitialized,
    /// `for (name in <iterable>)`, carrying the iterable expression
    LoopBinding(Option<Expr>),
    /// A lambda parameter; nothing static is known about its value
    LambdaParam,
}

/// Find the binding a [`NameRef`] resolves to, if any.
///
/// Walks the reference's ancestors; at each statement-bearing level the
/// preceding sibling statements are scanned newest-first for a `var`
/// declaration or plain assignment of the name, and `for` loops and lambdas
/// on the ancestor path contribute their own bindings.
pub fn resolve_name(name_ref: &NameRef) -> Option<Declaration> {
    let name = name_ref.text()?;
    let mut node = name_ref.syntax().clone();

    while let Some(parent) = node.parent() {
        if let Some(for_stmt) = ForStmt::cast(parent.clone()) {
            // Only bindings of the loop we are inside of, not the iterable
            let in_iterable = for_stmt
                .iterable()
                .is_some_and(|it| it.syntax().text_range().contains_range(node.text_range()));
            if !in_iterable && binds_name(&for_stmt, &name) {
                return Some(Declaration::LoopBinding(for_stmt.iterable()));
            }
        }
        if let Some(lambda) = LambdaExpr::cast(parent.clone()) {
            if lambda_binds(&lambda, &name) {
                return Some(Declaration::LambdaParam);
            }
        }

        // Scan statements before this one in the surrounding block or file
        let mut sibling = node.prev_sibling();
        while let Some(stmt) = sibling {
            if let Some(decl) = declaration_in(&stmt, &name) {
                return Some(decl);
            }
            sibling = stmt.prev_sibling();
        }

        node = parent;
    }
    None
}

fn binds_name(for_stmt: &ForStmt, name: &str) -> bool {
    for_stmt.binding_tokens().iter().any(|t| t.text() == name)
}

fn lambda_binds(lambda: &LambdaExpr, name: &str) -> bool {
    lambda
        .param_list()
        .map(|list| {
            list.params()
                .filter_map(|p| p.name_token())
                .any(|t| t.text() == name)
        })
        .unwrap_or(false)
}

fn declaration_in(stmt: &SyntaxNode, name: &str) -> Option<Declaration> {
    match stmt.kind() {
        SyntaxKind::VAR_STMT => {
            let var = VarStmt::cast(stmt.clone())?;
            if var.name().as_deref() != Some(name) {
                return None;
            }
            match var.initializer() {
                Some(init) => Some(Declaration::Initialized(init)),
                None => Some(Declaration::Uninitialized),
            }
        }
        SyntaxKind::EXPR_STMT => {
            let assign = ExprStmt::cast(stmt.clone())?.expr()?;
            let Expr::Assign(assign) = assign else {
                return None;
            };
            let Some(Expr::NameRef(target)) = assign.target() else {
                return None;
            };
            if target.text().as_deref() != Some(name) {
                return None;
            }
            assign.value().map(Declaration::Initialized)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{SourceFile, parse};

    fn last_name_ref(input: &str) -> NameRef {
        let root = parse(input).syntax_node();
        root.descendants()
            .filter_map(NameRef::cast)
            .last()
            .expect("no name ref in input")
    }

    #[test]
    fn test_resolves_preceding_var() {
        let name_ref = last_name_ref("var rows = db.select('x');\nreturn rows;");
        let Some(Declaration::Initialized(init)) = resolve_name(&name_ref) else {
            panic!("expected initialized declaration");
        };
        assert_eq!(init.text(), "db.select('x')");
    }

    #[test]
    fn test_nearest_binding_shadows() {
        let name_ref = last_name_ref("var x = 1;\nx = 'text';\nreturn x;");
        let Some(Declaration::Initialized(init)) = resolve_name(&name_ref) else {
            panic!("expected initialized declaration");
        };
        assert_eq!(init.text(), "'text'");
    }

    #[test]
    fn test_for_loop_binding() {
        let name_ref = last_name_ref("for (item in list) { return item; }");
        assert!(matches!(
            resolve_name(&name_ref),
            Some(Declaration::LoopBinding(Some(_)))
        ));
    }

    #[test]
    fn test_lambda_param_binding() {
        let input = "var names = users.map(u => u);";
        let root = parse(input).syntax_node();
        let inner = root
            .descendants()
            .filter_map(NameRef::cast)
            .find(|n| {
                n.text().as_deref() == Some("u")
                    && n.syntax().ancestors().any(|a| a.kind() == SyntaxKind::LAMBDA_EXPR)
            })
            .unwrap();
        assert!(matches!(resolve_name(&inner), Some(Declaration::LambdaParam)));
    }

    #[test]
    fn test_unbound_name() {
        let name_ref = last_name_ref("return mystery;");
        assert!(resolve_name(&name_ref).is_none());
    }

    #[test]
    fn test_declaration_after_use_is_invisible() {
        let root = parse("return x;\nvar x = 1;").syntax_node();
        let name_ref = root.descendants().filter_map(NameRef::cast).next().unwrap();
        assert!(resolve_name(&name_ref).is_none());
    }
}
