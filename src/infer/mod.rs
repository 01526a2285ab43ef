//! Type inference for Magic Script expressions
//!
//! Given an expression (as source text or a parsed node), compute a
//! best-effort static type. Every path returns a type name; malformed or
//! unresolvable input degrades to `Object` rather than erroring, because
//! the consumer is interactive tooling where a plausible answer beats an
//! exception.
//!
//! Resolution order is a deliberate priority: literal shape, builtin module
//! identifier, structured call lookup, enclosing-scope variable lookup,
//! member access through the registry tables, and only then the
//! naming-convention fallback. The fallback is approximate by construction
//! and never overrides a real signal.

mod cache;
mod chain;
mod scope;

pub use cache::InferenceCaches;
pub use chain::ChainResolver;
pub use scope::{Declaration, resolve_name};

use crate::catalog::{TypeCatalog, TypeName, type_names};
use crate::parser::{AstNode, Expr, LiteralKind, SourceFile, Stmt, SyntaxKind, SyntaxNode, parse};
use crate::registry::ApiRegistry;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use std::sync::Arc;
use tracing::trace;

/// How an answer was reached. Exact answers came from the registry or a
/// literal; heuristic ones from structural approximation; fallback ones
/// from naming conventions or the universal Object default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Confidence {
    Exact,
    Heuristic,
    Fallback,
}

/// An inference result. The type is always present; `Object` with
/// [`Confidence::Fallback`] is the "nothing known" answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inference {
    pub type_name: TypeName,
    pub confidence: Confidence,
}

impl Inference {
    pub fn exact(type_name: impl Into<TypeName>) -> Self {
        Self {
            type_name: type_name.into(),
            confidence: Confidence::Exact,
        }
    }

    pub fn heuristic(type_name: impl Into<TypeName>) -> Self {
        Self {
            type_name: type_name.into(),
            confidence: Confidence::Heuristic,
        }
    }

    pub fn fallback(type_name: impl Into<TypeName>) -> Self {
        Self {
            type_name: type_name.into(),
            confidence: Confidence::Fallback,
        }
    }

    /// The unknown-expression default
    pub fn object() -> Self {
        Self::fallback(SmolStr::new_static(type_names::OBJECT))
    }
}

/// Static type inference over catalog and registry knowledge.
///
/// Borrows its collaborators; construct one per query batch, or keep one
/// alive next to the host that owns the catalog, registry and caches.
pub struct TypeInferencer<'a> {
    catalog: &'a TypeCatalog,
    registry: &'a ApiRegistry,
    caches: &'a InferenceCaches,
}

impl<'a> TypeInferencer<'a> {
    pub fn new(
        catalog: &'a TypeCatalog,
        registry: &'a ApiRegistry,
        caches: &'a InferenceCaches,
    ) -> Self {
        Self {
            catalog,
            registry,
            caches,
        }
    }

    pub fn catalog(&self) -> &TypeCatalog {
        self.catalog
    }

    pub fn registry(&self) -> &ApiRegistry {
        self.registry
    }

    pub fn caches(&self) -> &InferenceCaches {
        self.caches
    }

    /// Infer the type of an expression given only its source text.
    ///
    /// Results are memoized by the raw text; the host wipes the cache on
    /// document or registry changes.
    pub fn infer_type(&self, text: &str) -> TypeName {
        if let Some(cached) = self.caches.get_simple(text) {
            return cached;
        }
        let result = match parse_expression(text) {
            Some(expr) => self.infer_expr(&expr).type_name,
            None => SmolStr::new_static(type_names::OBJECT),
        };
        trace!(text, %result, "inferred expression type");
        self.caches.put_simple(text, result.clone());
        result
    }

    /// Infer the type of an already-parsed syntax node. Non-expression
    /// nodes degrade to `Object`.
    pub fn infer_node(&self, node: &SyntaxNode) -> Inference {
        match Expr::cast(node.clone()) {
            Some(expr) => self.infer_expr(&expr),
            None => Inference::object(),
        }
    }

    /// Infer the type of a parsed expression
    pub fn infer_expr(&self, expr: &Expr) -> Inference {
        let mut guard = FxHashSet::default();
        self.infer_inner(expr, &mut guard)
    }

    fn infer_inner(&self, expr: &Expr, guard: &mut FxHashSet<SmolStr>) -> Inference {
        match expr {
            Expr::Literal(lit) => self.infer_literal(lit),
            Expr::NameRef(name_ref) => self.infer_name(name_ref, guard),
            Expr::Paren(paren) => match paren.inner() {
                Some(inner) => self.infer_inner(&inner, guard),
                None => Inference::object(),
            },
            Expr::Array(_) => Inference::exact(SmolStr::new_static(type_names::ARRAY)),
            Expr::Map(_) => Inference::exact(SmolStr::new_static(type_names::MAP)),
            Expr::Lambda(_) => Inference::exact(SmolStr::new_static(type_names::FUNCTION)),
            Expr::Member(member) => self.infer_member(member, guard),
            Expr::Call(call) => self.infer_call(call, guard),
            Expr::Index(_) => Inference::heuristic(SmolStr::new_static(type_names::OBJECT)),
            Expr::Convert(convert) => self.infer_convert(convert),
            Expr::New(new_expr) => self.infer_new(new_expr),
            Expr::Unary(unary) => self.infer_unary(unary, guard),
            Expr::Binary(binary) => self.infer_binary(binary, guard),
            Expr::Ternary(ternary) => self.infer_ternary(ternary, guard),
            Expr::Assign(assign) => match assign.value() {
                Some(value) => self.infer_inner(&value, guard),
                None => Inference::object(),
            },
        }
    }

    fn infer_literal(&self, lit: &crate::parser::Literal) -> Inference {
        let name = match lit.literal_kind() {
            Some(LiteralKind::Integer) => type_names::INTEGER,
            Some(LiteralKind::Long) => type_names::LONG,
            Some(LiteralKind::Float) => type_names::FLOAT,
            Some(LiteralKind::Double) => type_names::DOUBLE,
            Some(LiteralKind::String) => type_names::STRING,
            Some(LiteralKind::Boolean) => type_names::BOOLEAN,
            Some(LiteralKind::Null) => type_names::NULL,
            None => type_names::OBJECT,
        };
        Inference::exact(SmolStr::new_static(name))
    }

    /// Bare identifier: builtin module pseudo-type, then scope lookup,
    /// then the naming-convention fallback.
    fn infer_name(
        &self,
        name_ref: &crate::parser::NameRef,
        guard: &mut FxHashSet<SmolStr>,
    ) -> Inference {
        let Some(name) = name_ref.text() else {
            return Inference::object();
        };
        if self.registry.has_module(&name) {
            return Inference::exact(SmolStr::new(&name));
        }

        let key = SmolStr::new(&name);
        if !guard.insert(key.clone()) {
            // Already resolving this name; a recursive definition gives
            // no signal beyond the convention fallback
            return self.fallback_for(&name);
        }
        let result = match scope::resolve_name(name_ref) {
            Some(Declaration::Initialized(init)) => {
                let inferred = self.infer_inner(&init, guard);
                if inferred.confidence == Confidence::Fallback {
                    // The initializer told us nothing; the variable's own
                    // name may carry a better hint
                    self.fallback_for(&name)
                } else {
                    inferred
                }
            }
            Some(Declaration::LoopBinding(iterable)) => self.infer_loop_binding(iterable, guard),
            Some(Declaration::Uninitialized) | Some(Declaration::LambdaParam) => {
                self.fallback_for(&name)
            }
            None => self.fallback_for(&name),
        };
        guard.remove(&key);
        result
    }

    /// A `for` variable holds elements of the iterable; nothing more
    /// precise than `Object` is known without element types.
    fn infer_loop_binding(
        &self,
        iterable: Option<Expr>,
        guard: &mut FxHashSet<SmolStr>,
    ) -> Inference {
        if let Some(iterable) = iterable {
            let _ = self.infer_inner(&iterable, guard);
        }
        Inference::heuristic(SmolStr::new_static(type_names::OBJECT))
    }

    fn infer_member(
        &self,
        member: &crate::parser::MemberExpr,
        guard: &mut FxHashSet<SmolStr>,
    ) -> Inference {
        let Some(name) = member.member_name() else {
            return Inference::object();
        };
        let qualifier = match member.object() {
            Some(object) => self.infer_inner(&object, guard).type_name,
            None => return Inference::object(),
        };
        self.resolve_member(&qualifier, &name)
    }

    fn infer_call(
        &self,
        call: &crate::parser::CallExpr,
        guard: &mut FxHashSet<SmolStr>,
    ) -> Inference {
        match call.callee() {
            // `qualifier.method(...)`
            Some(Expr::Member(member)) => self.infer_member(&member, guard),
            // `function(...)` without a qualifier: a global function
            Some(Expr::NameRef(name_ref)) => {
                let Some(name) = name_ref.text() else {
                    return Inference::object();
                };
                match self.registry.global_function(&name) {
                    Some(function) => Inference::exact(function.return_type.clone()),
                    None => Inference::heuristic(SmolStr::new_static(type_names::OBJECT)),
                }
            }
            // Calling a lambda or some other computed value
            Some(_) | None => Inference::heuristic(SmolStr::new_static(type_names::OBJECT)),
        }
    }

    fn infer_convert(&self, convert: &crate::parser::ConvertExpr) -> Inference {
        let Some(target) = convert.target_name() else {
            return Inference::object();
        };
        let resolved = self.catalog.resolve_alias(&target);
        if self.catalog.is_known_type(&resolved) {
            Inference::exact(resolved)
        } else {
            Inference::object()
        }
    }

    fn infer_new(&self, new_expr: &crate::parser::NewExpr) -> Inference {
        let Some(type_name) = new_expr.type_name() else {
            return Inference::object();
        };
        // `new java.util.Date()` names the type by its last segment
        let simple = type_name.rsplit('.').next().unwrap_or(&type_name);
        let resolved = self.catalog.resolve_alias(simple);
        if self.catalog.is_known_type(&resolved) {
            Inference::exact(resolved)
        } else {
            Inference::heuristic(SmolStr::new_static(type_names::OBJECT))
        }
    }

    fn infer_unary(
        &self,
        unary: &crate::parser::UnaryExpr,
        guard: &mut FxHashSet<SmolStr>,
    ) -> Inference {
        let op = unary.op_token().map(|t| t.kind());
        match op {
            Some(SyntaxKind::BANG) => Inference::exact(SmolStr::new_static(type_names::BOOLEAN)),
            Some(SyntaxKind::PLUS) | Some(SyntaxKind::MINUS) => match unary.operand() {
                Some(operand) => self.infer_inner(&operand, guard),
                None => Inference::object(),
            },
            _ => Inference::heuristic(SmolStr::new_static(type_names::OBJECT)),
        }
    }

    fn infer_binary(
        &self,
        binary: &crate::parser::BinaryExpr,
        guard: &mut FxHashSet<SmolStr>,
    ) -> Inference {
        let Some(op) = binary.op_token() else {
            return Inference::object();
        };
        match op.kind() {
            SyntaxKind::EQ_EQ
            | SyntaxKind::EQ_EQ_EQ
            | SyntaxKind::BANG_EQ
            | SyntaxKind::BANG_EQ_EQ
            | SyntaxKind::LT
            | SyntaxKind::LT_EQ
            | SyntaxKind::GT
            | SyntaxKind::GT_EQ
            | SyntaxKind::AMP_AMP
            | SyntaxKind::PIPE_PIPE => {
                Inference::exact(SmolStr::new_static(type_names::BOOLEAN))
            }
            SyntaxKind::PLUS => {
                let lhs = self.operand_type(binary.lhs(), guard);
                let rhs = self.operand_type(binary.rhs(), guard);
                // String concatenation wins over addition
                if lhs == type_names::STRING || rhs == type_names::STRING {
                    Inference::exact(SmolStr::new_static(type_names::STRING))
                } else {
                    self.widen_numeric(&lhs, &rhs)
                }
            }
            SyntaxKind::MINUS
            | SyntaxKind::STAR
            | SyntaxKind::SLASH
            | SyntaxKind::PERCENT => {
                let lhs = self.operand_type(binary.lhs(), guard);
                let rhs = self.operand_type(binary.rhs(), guard);
                self.widen_numeric(&lhs, &rhs)
            }
            _ => Inference::heuristic(SmolStr::new_static(type_names::OBJECT)),
        }
    }

    fn infer_ternary(
        &self,
        ternary: &crate::parser::TernaryExpr,
        guard: &mut FxHashSet<SmolStr>,
    ) -> Inference {
        let then_type = self.operand_type(ternary.then_branch(), guard);
        let else_type = self.operand_type(ternary.else_branch(), guard);
        if then_type == else_type {
            Inference::heuristic(then_type)
        } else if self.catalog.is_compatible(&then_type, &else_type) {
            Inference::heuristic(else_type)
        } else if self.catalog.is_compatible(&else_type, &then_type) {
            Inference::heuristic(then_type)
        } else {
            Inference::heuristic(SmolStr::new_static(type_names::OBJECT))
        }
    }

    fn operand_type(&self, expr: Option<Expr>, guard: &mut FxHashSet<SmolStr>) -> TypeName {
        match expr {
            Some(expr) => self.infer_inner(&expr, guard).type_name,
            None => SmolStr::new_static(type_names::OBJECT),
        }
    }

    /// Pick the wider of two numeric operand types. Non-numeric operands
    /// yield `Number` as the arithmetic result approximation.
    fn widen_numeric(&self, lhs: &str, rhs: &str) -> Inference {
        if lhs == rhs && self.catalog.is_subtype_of(lhs, type_names::NUMBER) {
            return Inference::exact(SmolStr::new(lhs));
        }
        let both_numeric = self.catalog.is_subtype_of(lhs, type_names::NUMBER)
            && self.catalog.is_subtype_of(rhs, type_names::NUMBER);
        if both_numeric {
            if self.catalog.is_compatible(lhs, rhs) {
                return Inference::exact(SmolStr::new(rhs));
            }
            if self.catalog.is_compatible(rhs, lhs) {
                return Inference::exact(SmolStr::new(lhs));
            }
        }
        Inference::heuristic(SmolStr::new_static(type_names::NUMBER))
    }

    /// Resolve a member access `(qualifier type, member name)`.
    ///
    /// Module qualifiers go through the module tables; everything else
    /// through the extension buckets via the ancestor walk. A member that
    /// is only a known property name falls back to the convention table,
    /// since property value types are not catalogued.
    fn resolve_member(&self, qualifier: &str, member: &str) -> Inference {
        if self.registry.has_module(qualifier) {
            return Inference::exact(self.module_return_type(qualifier, member));
        }
        let receiver = self.catalog.resolve_alias(qualifier);
        if let Some(method) = self.extension_lookup(&receiver, member) {
            return Inference::exact(method.return_type.clone());
        }
        if self.catalog.properties_of(&receiver).contains(&member) {
            return self.fallback_for(member);
        }
        if receiver == type_names::RESPONSE_BUILDER {
            // Every response-builder call returns the builder
            return Inference::heuristic(SmolStr::new_static(type_names::RESPONSE_BUILDER));
        }
        trace!(qualifier, member, "member not found in any table");
        Inference::object()
    }

    /// The type a method call returns on a receiver. This is the chain
    /// resolver's folding step. Always yields a type; unknown methods
    /// take the receiver's bucket default.
    pub fn method_return_type(&self, receiver: &str, method: &str) -> TypeName {
        if self.registry.has_module(receiver) {
            return self.module_return_type(receiver, method);
        }
        let receiver = self.catalog.resolve_alias(receiver);
        if let Some(found) = self.extension_lookup(&receiver, method) {
            return found.return_type.clone();
        }
        if receiver == type_names::RESPONSE_BUILDER {
            return SmolStr::new_static(type_names::RESPONSE_BUILDER);
        }
        SmolStr::new_static(type_names::OBJECT)
    }

    fn module_return_type(&self, module: &str, method: &str) -> TypeName {
        match self.registry.method_of_module(module, method) {
            Some(found) => found.return_type.clone(),
            // The response module's calls all chain; other modules
            // degrade to Object
            None if module == "response" => SmolStr::new_static(type_names::RESPONSE_BUILDER),
            None => SmolStr::new_static(type_names::OBJECT),
        }
    }

    /// Find an extension method on the receiver or any of its ancestors:
    /// Integer reaches the Number bucket, List reaches Array, and every
    /// type ends at Object.
    fn extension_lookup(
        &self,
        receiver: &str,
        method: &str,
    ) -> Option<Arc<crate::registry::ApiMethod>> {
        let mut current = SmolStr::new(receiver);
        loop {
            if let Some(found) = self.registry.extension_method(&current, method) {
                return Some(found);
            }
            match self.catalog.supertype_of(&current) {
                Some(parent) => current = parent,
                None => {
                    // Unknown types are not rooted at Object in the
                    // catalog; still give them the Object bucket
                    if current != type_names::OBJECT {
                        return self.registry.extension_method(type_names::OBJECT, method);
                    }
                    return None;
                }
            }
        }
    }

    /// Naming-convention fallback: guess from substrings of the
    /// identifier. Explicitly approximate; callers only reach this when
    /// no structural signal exists.
    fn fallback_for(&self, identifier: &str) -> Inference {
        match convention_type(identifier) {
            Some(type_name) => Inference {
                type_name,
                confidence: Confidence::Fallback,
            },
            None => Inference::object(),
        }
    }
}

/// The naming-convention table. Checked in a fixed order; the first match
/// wins, and `None` means no convention applies.
pub fn convention_type(identifier: &str) -> Option<TypeName> {
    let lower = identifier.to_lowercase();
    let matches_any = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if matches_any(&["name", "text", "url", "path"]) {
        return Some(SmolStr::new_static(type_names::STRING));
    }
    if lower.ends_with('s') || matches_any(&["list", "items", "results"]) {
        return Some(SmolStr::new_static(type_names::ARRAY));
    }
    if matches_any(&["map", "config", "params", "headers"]) {
        return Some(SmolStr::new_static(type_names::MAP));
    }
    if matches_any(&["count", "id", "size", "index"]) {
        return Some(SmolStr::new_static(type_names::INTEGER));
    }
    if matches_any(&["date", "time", "timestamp"]) {
        return Some(SmolStr::new_static(type_names::DATE));
    }
    if matches_any(&["is", "has", "flag", "enable"]) {
        return Some(SmolStr::new_static(type_names::BOOLEAN));
    }
    None
}

/// Parse a fragment of source text down to its single expression, if it
/// has one. Accepts bare expressions, `var` initializers and `return`
/// values so callers can hand over any probe text.
pub(crate) fn parse_expression(text: &str) -> Option<Expr> {
    let parsed = parse(text.trim());
    let file = SourceFile::cast(parsed.syntax_node())?;
    match file.statements().next()? {
        Stmt::Expr(stmt) => stmt.expr(),
        Stmt::Var(stmt) => stmt.initializer(),
        Stmt::Return(stmt) => stmt.value(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        catalog: TypeCatalog,
        registry: ApiRegistry,
        caches: InferenceCaches,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                catalog: TypeCatalog::new(),
                registry: ApiRegistry::with_builtins(),
                caches: InferenceCaches::new(),
            }
        }

        fn inferencer(&self) -> TypeInferencer<'_> {
            TypeInferencer::new(&self.catalog, &self.registry, &self.caches)
        }
    }

    #[test]
    fn test_literal_inference() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        assert_eq!(inferencer.infer_type("42"), "Integer");
        assert_eq!(inferencer.infer_type("42L"), "Long");
        assert_eq!(inferencer.infer_type("3.14"), "Double");
        assert_eq!(inferencer.infer_type("'hello'"), "String");
        assert_eq!(inferencer.infer_type("true"), "Boolean");
        assert_eq!(inferencer.infer_type("null"), "Null");
        assert_eq!(inferencer.infer_type("[1, 2]"), "Array");
        assert_eq!(inferencer.infer_type("{ a: 1 }"), "Map");
        assert_eq!(inferencer.infer_type("x => x + 1"), "Function");
    }

    #[test]
    fn test_module_identifier_is_its_own_type() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        assert_eq!(inferencer.infer_type("db"), "db");
        assert_eq!(inferencer.infer_type("response"), "response");
    }

    #[test]
    fn test_module_call_returns() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        assert_eq!(inferencer.infer_type("db.select(\"select 1\")"), "Array");
        assert_eq!(inferencer.infer_type("db.selectOne(\"select 1\")"), "Object");
        assert_eq!(inferencer.infer_type("db.selectInt(\"select 1\")"), "Integer");
        assert_eq!(inferencer.infer_type("http.get(\"x\")"), "HttpResponse");
        assert_eq!(inferencer.infer_type("request.getParameter('q')"), "String");
        assert_eq!(inferencer.infer_type("env.get('key')"), "String");
    }

    #[test]
    fn test_global_function_call() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        assert_eq!(inferencer.infer_type("now()"), "Date");
        assert_eq!(inferencer.infer_type("uuid()"), "String");
        assert_eq!(inferencer.infer_type("count(rows)"), "Integer");
        assert_eq!(inferencer.infer_type("neverHeardOf()"), "Object");
    }

    #[test]
    fn test_variable_lookup_recurses_into_initializer() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        let parsed = parse("var rows = db.select('x');\nrows;");
        let file = SourceFile::cast(parsed.syntax_node()).unwrap();
        let Stmt::Expr(stmt) = file.statements().nth(1).unwrap() else {
            panic!("expected expr stmt");
        };
        let inferred = inferencer.infer_expr(&stmt.expr().unwrap());
        assert_eq!(inferred.type_name, "Array");
        assert_eq!(inferred.confidence, Confidence::Exact);
    }

    #[test]
    fn test_member_on_inferred_variable() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        let parsed = parse("var rows = db.select('x');\nrows.size();");
        let file = SourceFile::cast(parsed.syntax_node()).unwrap();
        let Stmt::Expr(stmt) = file.statements().nth(1).unwrap() else {
            panic!("expected expr stmt");
        };
        let inferred = inferencer.infer_expr(&stmt.expr().unwrap());
        assert_eq!(inferred.type_name, "Integer");
    }

    #[test]
    fn test_naming_convention_fallback() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        assert_eq!(inferencer.infer_type("userName"), "String");
        assert_eq!(inferencer.infer_type("items"), "Array");
        assert_eq!(inferencer.infer_type("headerMap"), "Map");
        assert_eq!(inferencer.infer_type("rowCount"), "Integer");
        assert_eq!(inferencer.infer_type("createDate"), "Date");
        assert_eq!(inferencer.infer_type("enableCache"), "Boolean");
        assert_eq!(inferencer.infer_type("xyz123"), "Object");
    }

    #[test]
    fn test_fallback_never_beats_real_signal() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        // "items" alone suggests Array, but a declaration overrides it
        let parsed = parse("var items = 42;\nitems;");
        let file = SourceFile::cast(parsed.syntax_node()).unwrap();
        let Stmt::Expr(stmt) = file.statements().nth(1).unwrap() else {
            panic!("expected expr stmt");
        };
        let inferred = inferencer.infer_expr(&stmt.expr().unwrap());
        assert_eq!(inferred.type_name, "Integer");
        assert_eq!(inferred.confidence, Confidence::Exact);
    }

    #[test]
    fn test_convert_expression() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        assert_eq!(inferencer.infer_type("value::int"), "Integer");
        assert_eq!(inferencer.infer_type("value::string"), "String");
        assert_eq!(inferencer.infer_type("value::date"), "Date");
    }

    #[test]
    fn test_binary_operators() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        assert_eq!(inferencer.infer_type("1 + 2"), "Integer");
        assert_eq!(inferencer.infer_type("1 + 2.5"), "Double");
        assert_eq!(inferencer.infer_type("'a' + 1"), "String");
        assert_eq!(inferencer.infer_type("a == b"), "Boolean");
        assert_eq!(inferencer.infer_type("a && b"), "Boolean");
        assert_eq!(inferencer.infer_type("!done"), "Boolean");
    }

    #[test]
    fn test_method_return_type_dispatch() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        assert_eq!(inferencer.method_return_type("db", "page"), "PageResult");
        assert_eq!(inferencer.method_return_type("Array", "size"), "Integer");
        assert_eq!(inferencer.method_return_type("List", "size"), "Integer");
        assert_eq!(inferencer.method_return_type("Integer", "round"), "Number");
        assert_eq!(inferencer.method_return_type("String", "split"), "Array");
        // Unknown method names take the bucket default
        assert_eq!(inferencer.method_return_type("db", "nope"), "Object");
        assert_eq!(
            inferencer.method_return_type("response", "nope"),
            "ResponseBuilder"
        );
        assert_eq!(
            inferencer.method_return_type("ResponseBuilder", "whatever"),
            "ResponseBuilder"
        );
    }

    #[test]
    fn test_unknown_receiver_still_gets_object_bucket() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        assert_eq!(inferencer.method_return_type("Mystery", "asInt"), "Integer");
        assert_eq!(inferencer.method_return_type("Mystery", "nothing"), "Object");
    }

    #[test]
    fn test_simple_cache_round_trip() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        assert_eq!(inferencer.infer_type("db.select('x')"), "Array");
        assert_eq!(fx.caches.get_simple("db.select('x')").as_deref(), Some("Array"));
    }

    #[test]
    fn test_recursive_definition_terminates() {
        let fx = Fixture::new();
        let inferencer = fx.inferencer();
        let parsed = parse("var a = a;\na;");
        let file = SourceFile::cast(parsed.syntax_node()).unwrap();
        let Stmt::Expr(stmt) = file.statements().nth(1).unwrap() else {
            panic!("expected expr stmt");
        };
        // Must not hang or overflow; the answer is the Object default
        let inferred = inferencer.infer_expr(&stmt.expr().unwrap());
        assert_eq!(inferred.type_name, "Object");
    }
}
