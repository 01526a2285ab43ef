//! Completion suggestions
//!
//! Builds completion items from the registry's knowledge: module methods
//! after a module qualifier, extension methods and properties after any
//! other qualifier, and modules, global functions and keywords in open
//! expression positions. Items gated to unavailable API versions are
//! dropped before they reach the editor.

use std::sync::Arc;

use crate::catalog::type_names;
use crate::infer::TypeInferencer;
use crate::parser::keyword_names;
use crate::registry::ApiMethod;
use crate::settings::ApiSettings;
use crate::syntax::ScriptFile;
use rowan::TextSize;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::context::{CursorContext, classify, qualifier_at};

/// Kind of completion item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Module,
    Method,
    Function,
    Property,
    Keyword,
}

impl CompletionKind {
    /// LSP completion item kind number
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Module => 9,    // Module
            CompletionKind::Method => 2,    // Method
            CompletionKind::Function => 3,  // Function
            CompletionKind::Property => 10, // Property
            CompletionKind::Keyword => 14,  // Keyword
        }
    }
}

/// A completion suggestion
#[derive(Clone, Debug)]
pub struct CompletionItem {
    /// The text shown in the list
    pub label: Arc<str>,
    pub kind: CompletionKind,
    /// Detail text shown after the label, typically a signature
    pub detail: Option<Arc<str>>,
    /// Documentation shown in the side popup
    pub documentation: Option<Arc<str>>,
    /// Text to insert when it differs from the label
    pub insert_text: Option<Arc<str>>,
    /// Sort priority; lower sorts first
    pub sort_priority: u32,
}

impl CompletionItem {
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            insert_text: None,
            sort_priority: 100,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }

    /// Build an item for a callable method or function
    fn from_method(method: &ApiMethod, kind: CompletionKind, priority: u32) -> Self {
        let insert = if method.parameters.is_empty() {
            format!("{}()", method.name)
        } else {
            format!("{}(", method.name)
        };
        let mut doc = method.description.clone();
        if !method.example.is_empty() {
            doc.push_str("\n\n```magicscript\n");
            doc.push_str(&method.example);
            doc.push_str("\n```");
        }
        Self::new(method.name.as_str(), kind)
            .with_detail(method.signature())
            .with_documentation(doc)
            .with_insert_text(insert)
            .with_priority(priority)
    }
}

/// Get completion suggestions at a position
pub fn completions(
    file: &ScriptFile,
    offset: TextSize,
    inferencer: &TypeInferencer<'_>,
    settings: &ApiSettings,
) -> Vec<CompletionItem> {
    let mut items = match classify(file, offset) {
        CursorContext::MemberAccess { qualifier, prefix } => {
            // Prefer the in-tree qualifier node: it keeps scope context,
            // so `rows.` after `var rows = db.select(..)` sees an Array
            let qualifier_type = match qualifier_at(file, offset) {
                Some(object) => inferencer.infer_expr(&object).type_name,
                None => inferencer.infer_type(&qualifier),
            };
            member_completions(&qualifier_type, &prefix, inferencer, settings)
        }
        CursorContext::Expression | CursorContext::Call { .. } => {
            expression_completions(inferencer)
        }
        // The user is typing a fresh name; suggesting existing ones
        // would only get in the way
        CursorContext::Parameter | CursorContext::Declaration => Vec::new(),
    };

    items.sort_by(|a, b| {
        a.sort_priority
            .cmp(&b.sort_priority)
            .then_with(|| a.label.cmp(&b.label))
    });
    items.dedup_by(|a, b| a.label == b.label && a.kind == b.kind);
    items
}

fn member_completions(
    qualifier_type: &str,
    prefix: &str,
    inferencer: &TypeInferencer<'_>,
    settings: &ApiSettings,
) -> Vec<CompletionItem> {
    let registry = inferencer.registry();
    let mut items = Vec::new();

    if let Some(module) = registry.module(qualifier_type) {
        for method in &module.methods {
            let feature = format!("{}.{}", module.name, method.name);
            if !registry.is_feature_available(&feature, settings) {
                continue;
            }
            let priority = if method.chainable { 20 } else { 30 };
            items.push(CompletionItem::from_method(method, CompletionKind::Method, priority));
        }
    } else {
        extension_items(qualifier_type, inferencer, &mut items);
        for property in inferencer.catalog().properties_of(qualifier_type) {
            items.push(
                CompletionItem::new(*property, CompletionKind::Property).with_priority(10),
            );
        }
    }

    if !prefix.is_empty() {
        let prefix = prefix.to_lowercase();
        items.retain(|item| item.label.to_lowercase().starts_with(&prefix));
    }
    items
}

/// Extension methods of the receiver's whole ancestor chain, most
/// specific bucket first; a shadowed name never appears twice.
fn extension_items(
    receiver: &str,
    inferencer: &TypeInferencer<'_>,
    items: &mut Vec<CompletionItem>,
) {
    let catalog = inferencer.catalog();
    let registry = inferencer.registry();
    let mut seen: FxHashSet<SmolStr> = FxHashSet::default();
    let mut current = catalog.resolve_alias(receiver);
    let mut priority = 20;

    loop {
        for method in registry.extension_methods_of(&current) {
            if seen.insert(method.name.clone()) {
                items.push(CompletionItem::from_method(
                    &method,
                    CompletionKind::Method,
                    priority,
                ));
            }
        }
        match catalog.supertype_of(&current) {
            Some(parent) => {
                current = parent;
                priority += 10;
            }
            None => {
                if current != type_names::OBJECT {
                    // Unknown receivers still offer the Object bucket
                    for method in registry.extension_methods_of(type_names::OBJECT) {
                        if seen.insert(method.name.clone()) {
                            items.push(CompletionItem::from_method(
                                &method,
                                CompletionKind::Method,
                                priority + 10,
                            ));
                        }
                    }
                }
                break;
            }
        }
    }
}

fn expression_completions(inferencer: &TypeInferencer<'_>) -> Vec<CompletionItem> {
    let registry = inferencer.registry();
    let mut items = Vec::new();

    for name in registry.module_names() {
        if let Some(module) = registry.module(&name) {
            items.push(
                CompletionItem::new(name.as_str(), CompletionKind::Module)
                    .with_detail(module.category.as_str())
                    .with_documentation(module.description.clone())
                    .with_priority(10),
            );
        }
    }
    for function in registry.all_global_functions() {
        items.push(CompletionItem::from_method(&function, CompletionKind::Function, 40));
    }
    for keyword in keyword_names() {
        items.push(CompletionItem::new(*keyword, CompletionKind::Keyword).with_priority(90));
    }
    items
}
