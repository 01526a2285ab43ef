//! Dotted call-chain resolution
//!
//! Resolves `db.cache("k").select(sql).first()` by walking the parsed
//! postfix spine rather than splitting the text on dots, so a dot inside a
//! string-literal argument (`db.select("1.5")`) cannot corrupt the
//! segmentation. The base expression is inferred normally; each following
//! segment folds `method_return_type` over the accumulated type.

use super::{Inference, TypeInferencer, parse_expression};
use crate::catalog::{TypeName, type_names};
use crate::parser::Expr;
use smol_str::SmolStr;
use tracing::trace;

/// One step of a chain after the base expression
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// `.method(...)`
    Call(String),
    /// `.member` without an argument list; resolved as a plain property
    Property(String),
    /// `[index]`; element types are not tracked
    Index,
}

/// Folds method-call segments over the type inferencer.
pub struct ChainResolver<'a, 'b> {
    inferencer: &'a TypeInferencer<'b>,
}

impl<'a, 'b> ChainResolver<'a, 'b> {
    pub fn new(inferencer: &'a TypeInferencer<'b>) -> Self {
        Self { inferencer }
    }

    /// Resolve a chain given its source text. Memoized in the chain cache
    /// by the raw text; unparseable text yields `Object`.
    pub fn resolve_type(&self, text: &str) -> TypeName {
        let caches = self.inferencer.caches();
        if let Some(cached) = caches.get_chain(text) {
            return cached;
        }
        let result = match parse_expression(text) {
            Some(expr) => self.resolve_expr(&expr).type_name,
            None => SmolStr::new_static(type_names::OBJECT),
        };
        trace!(text, %result, "resolved chain type");
        caches.put_chain(text, result.clone());
        result
    }

    /// Resolve a parsed chain expression to its final type
    pub fn resolve_expr(&self, expr: &Expr) -> Inference {
        let (base, segments) = decompose(expr);
        let Some(base) = base else {
            return Inference::object();
        };

        let mut current = self.inferencer.infer_expr(&base);
        for segment in &segments {
            let next = match segment {
                Segment::Call(name) => self
                    .inferencer
                    .method_return_type(&current.type_name, name),
                Segment::Property(name) => {
                    // Not separately modeled: properties resolve through
                    // the same tables and bottom out in the Object bucket
                    self.inferencer.method_return_type(&current.type_name, name)
                }
                Segment::Index => SmolStr::new_static(type_names::OBJECT),
            };
            trace!(from = %current.type_name, ?segment, to = %next, "chain fold step");
            current = Inference {
                type_name: next,
                confidence: current.confidence,
            };
        }
        current
    }
}

/// Split an expression into its base and ordered postfix segments.
///
/// `a.b(x).c[0]` decomposes into base `a` and segments
/// `[Call("b"), Property("c"), Index]`. An expression with no postfix
/// spine is its own base with no segments.
fn decompose(expr: &Expr) -> (Option<Expr>, Vec<Segment>) {
    let mut segments = Vec::new();
    let mut current = expr.clone();
    loop {
        match current {
            Expr::Call(call) => match call.callee() {
                Some(Expr::Member(member)) => {
                    let name = member.member_name().unwrap_or_default();
                    segments.push(Segment::Call(name));
                    match member.object() {
                        Some(object) => current = object,
                        None => return (None, reversed(segments)),
                    }
                }
                // A bare `f(...)` call is the chain's base itself
                Some(_) | None => return (Some(Expr::Call(call)), reversed(segments)),
            },
            Expr::Member(member) => {
                let name = member.member_name().unwrap_or_default();
                segments.push(Segment::Property(name));
                match member.object() {
                    Some(object) => current = object,
                    None => return (None, reversed(segments)),
                }
            }
            Expr::Index(index) => {
                segments.push(Segment::Index);
                match index.base() {
                    Some(base) => current = base,
                    None => return (None, reversed(segments)),
                }
            }
            Expr::Paren(ref paren) => match paren.inner() {
                Some(inner) => current = inner,
                None => return (None, reversed(segments)),
            },
            other => return (Some(other), reversed(segments)),
        }
    }
}

fn reversed(mut segments: Vec<Segment>) -> Vec<Segment> {
    segments.reverse();
    segments
}
