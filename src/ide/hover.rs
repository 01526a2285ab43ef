//! Hover documentation
//!
//! Renders Markdown for the symbol under the cursor: module overviews,
//! method signatures with parameter lists and examples, and inferred
//! types for plain expressions. Nothing here fails loudly; positions with
//! nothing to say return `None`.

use crate::infer::TypeInferencer;
use crate::parser::{AstNode, Expr, MemberExpr, SyntaxKind, SyntaxToken};
use crate::registry::{ApiMethod, Module};
use crate::syntax::ScriptFile;
use rowan::{TextRange, TextSize};

/// Result of a hover request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// Markdown content
    pub contents: String,
    /// The source range the content describes
    pub range: TextRange,
}

/// Get hover information at a position
pub fn hover(
    file: &ScriptFile,
    offset: TextSize,
    inferencer: &TypeInferencer<'_>,
) -> Option<HoverResult> {
    let token = file.token_at_offset(offset)?;
    if token.kind() != SyntaxKind::IDENT {
        return None;
    }
    let range = token.text_range();
    let registry = inferencer.registry();

    // A member name after a dot: resolve against the qualifier's type
    if let Some(member) = member_of(&token) {
        let qualifier = member.object()?;
        let qualifier_type = inferencer.infer_expr(&qualifier).type_name;
        let name = token.text();

        if registry.has_module(&qualifier_type) {
            if let Some(method) = registry.method_of_module(&qualifier_type, name) {
                return Some(HoverResult {
                    contents: render_method(&qualifier_type, &method),
                    range,
                });
            }
        }
        let resolved = inferencer.catalog().resolve_alias(&qualifier_type);
        if let Some(method) = extension_doc(inferencer, &resolved, name) {
            return Some(HoverResult {
                contents: render_method(&resolved, &method),
                range,
            });
        }
        return None;
    }

    // A bare module identifier
    if let Some(module) = registry.module(token.text()) {
        return Some(HoverResult {
            contents: render_module(&module),
            range,
        });
    }

    // A global function, if the identifier is being called
    if let Some(function) = registry.global_function(token.text()) {
        return Some(HoverResult {
            contents: render_method("", &function),
            range,
        });
    }

    // Anything else: show the inferred type, plus type docs if registered
    let expr = token.parent_ancestors().find_map(Expr::cast)?;
    let inferred = inferencer.infer_expr(&expr).type_name;
    let mut contents = format!("```magicscript\n{}: {}\n```", token.text(), inferred);
    if let Some(info) = registry.type_info(&inferred) {
        contents.push_str("\n\n");
        contents.push_str(&info);
    }
    Some(HoverResult { contents, range })
}

fn member_of(token: &SyntaxToken) -> Option<MemberExpr> {
    let member = MemberExpr::cast(token.parent()?)?;
    let is_member_name = member
        .member_token()
        .is_some_and(|name| name.text_range() == token.text_range());
    is_member_name.then_some(member)
}

fn extension_doc(
    inferencer: &TypeInferencer<'_>,
    receiver: &str,
    name: &str,
) -> Option<std::sync::Arc<ApiMethod>> {
    let catalog = inferencer.catalog();
    let registry = inferencer.registry();
    let mut current = catalog.resolve_alias(receiver);
    loop {
        if let Some(found) = registry.extension_method(&current, name) {
            return Some(found);
        }
        match catalog.supertype_of(&current) {
            Some(parent) => current = parent,
            None => {
                if current != "Object" {
                    return registry.extension_method("Object", name);
                }
                return None;
            }
        }
    }
}

fn render_method(owner: &str, method: &ApiMethod) -> String {
    let mut text = String::new();
    text.push_str("```magicscript\n");
    if owner.is_empty() {
        text.push_str(&method.signature());
    } else {
        text.push_str(&format!("{}.{}", owner, method.signature()));
    }
    text.push_str("\n```\n\n");
    text.push_str(&method.description);

    if !method.parameters.is_empty() {
        text.push_str("\n\n**Parameters**\n");
        for param in &method.parameters {
            text.push_str(&format!("\n- `{}`: {}", param, param.description));
            if let Some(default) = &param.default_value {
                text.push_str(&format!(" (default `{}`)", default));
            }
        }
    }

    text.push_str(&format!("\n\n**Returns** `{}`", method.return_type));
    if !method.return_description.is_empty() {
        text.push_str(&format!(": {}", method.return_description));
    }

    if !method.example.is_empty() {
        text.push_str("\n\n**Example**\n\n```magicscript\n");
        text.push_str(&method.example);
        text.push_str("\n```");
    }
    text
}

fn render_module(module: &Module) -> String {
    let mut text = format!("```magicscript\n{}\n```\n\n{}", module.name, module.description);
    text.push_str("\n\n**Methods**\n");
    for method in &module.methods {
        text.push_str(&format!("\n- `{}`", method.signature()));
    }
    text
}
