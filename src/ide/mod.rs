//! IDE features: high-level APIs for editor integrations
//!
//! `AnalysisHost` owns the mutable state (catalog, registry, settings,
//! open documents, inference caches); `Analysis` snapshots expose the
//! query surface the completion, hover and navigation layers call.
//!
//! ## Usage
//!
//! ```
//! use magicscript::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_document("api/list.ms", "var rows = db.select('select 1');");
//!
//! let analysis = host.analysis();
//! assert_eq!(analysis.infer_type("db.select('select 1')"), "Array");
//! ```

mod completion;
mod context;
mod hover;

pub use completion::{CompletionItem, CompletionKind, completions};
pub use context::{CursorContext, classify, qualifier_at};
pub use hover::{HoverResult, hover};

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::{TypeCatalog, TypeName};
use crate::infer::{ChainResolver, InferenceCaches, TypeInferencer};
use crate::parser::{Expr, SyntaxError};
use crate::registry::{ApiMethod, ApiRegistry, Module, ValidationIssue};
use crate::settings::ApiSettings;
use crate::syntax::ScriptFile;
use rowan::TextSize;
use tracing::debug;

/// Owns all state for the IDE layer.
///
/// Built once at startup and handed by reference to every consumer; this
/// replaces any notion of a process-wide singleton. Document changes and
/// registry reloads wipe the inference caches wholesale, since cached
/// answers carry no dependency information.
pub struct AnalysisHost {
    catalog: TypeCatalog,
    registry: ApiRegistry,
    settings: ApiSettings,
    caches: InferenceCaches,
    documents: HashMap<String, ScriptFile>,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    /// A host with the builtin API knowledge loaded and default settings
    pub fn new() -> Self {
        Self::with_settings(ApiSettings::default())
    }

    pub fn with_settings(settings: ApiSettings) -> Self {
        Self {
            catalog: TypeCatalog::new(),
            registry: ApiRegistry::with_builtins(),
            settings,
            caches: InferenceCaches::new(),
            documents: HashMap::new(),
        }
    }

    /// Set a document's content, reparsing it. Returns the parse errors.
    pub fn set_document(&mut self, path: &str, text: &str) -> Vec<SyntaxError> {
        let file = ScriptFile::new(text);
        let errors = file.errors().to_vec();
        debug!(path, errors = errors.len(), "document updated");
        self.documents.insert(path.to_string(), file);
        self.caches.clear();
        errors
    }

    pub fn remove_document(&mut self, path: &str) {
        self.documents.remove(path);
        self.caches.clear();
    }

    pub fn document(&self, path: &str) -> Option<&ScriptFile> {
        self.documents.get(path)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Swap the host configuration; cached inferences may depend on
    /// feature gating, so they are dropped
    pub fn set_settings(&mut self, settings: ApiSettings) {
        self.settings = settings;
        self.caches.clear();
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &ApiRegistry {
        &self.registry
    }

    /// Wipe and re-install the builtin registry tables, dropping every
    /// memoized inference
    pub fn reload_registry(&mut self) {
        self.registry.reload();
        self.caches.clear();
    }

    /// Drop all memoized inference results. The host calls this itself on
    /// document and registry changes; exposed for external invalidation.
    pub fn clear_caches(&self) {
        self.caches.clear();
    }

    /// Cross-check registry data against the type catalog
    pub fn validate(&self) -> Vec<ValidationIssue> {
        self.registry.validate(&self.catalog)
    }

    /// A consistent snapshot for querying
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis { host: self }
    }
}

/// An immutable snapshot of the analysis state. Completion, documentation
/// and navigation queries all go through this.
pub struct Analysis<'a> {
    host: &'a AnalysisHost,
}

impl<'a> Analysis<'a> {
    fn inferencer(&self) -> TypeInferencer<'a> {
        TypeInferencer::new(&self.host.catalog, &self.host.registry, &self.host.caches)
    }

    // ==================== Type inference ====================

    /// Infer the type of an expression from its source text
    pub fn infer_type(&self, text: &str) -> TypeName {
        self.inferencer().infer_type(text)
    }

    /// Resolve a dotted call chain to its final type
    pub fn infer_chain_type(&self, text: &str) -> TypeName {
        let inferencer = self.inferencer();
        ChainResolver::new(&inferencer).resolve_type(text)
    }

    /// Infer the type of the expression at a document offset
    pub fn infer_type_at(&self, path: &str, offset: TextSize) -> Option<TypeName> {
        let file = self.host.documents.get(path)?;
        let token = file.token_at_offset(offset)?;
        let expr = token.parent_ancestors().find_map(Expr::cast)?;
        Some(self.inferencer().infer_expr(&expr).type_name)
    }

    // ==================== Registry queries ====================

    pub fn module(&self, name: &str) -> Option<Arc<Module>> {
        self.host.registry.module(name)
    }

    pub fn search_methods(&self, query: &str) -> Vec<Arc<ApiMethod>> {
        self.host.registry.search_methods(query)
    }

    /// Extension methods of a type, aliases resolved
    pub fn extension_methods_of(&self, type_name: &str) -> Vec<Arc<ApiMethod>> {
        let resolved = self.host.catalog.resolve_alias(type_name);
        self.host.registry.extension_methods_of(&resolved)
    }

    pub fn is_feature_available(&self, feature: &str) -> bool {
        self.host
            .registry
            .is_feature_available(feature, &self.host.settings)
    }

    // ==================== Editor features ====================

    /// Completion items at a document offset
    pub fn completions(&self, path: &str, offset: TextSize) -> Vec<CompletionItem> {
        let Some(file) = self.host.documents.get(path) else {
            return Vec::new();
        };
        completion::completions(file, offset, &self.inferencer(), &self.host.settings)
    }

    /// Hover documentation at a document offset
    pub fn hover(&self, path: &str, offset: TextSize) -> Option<HoverResult> {
        let file = self.host.documents.get(path)?;
        hover::hover(file, offset, &self.inferencer())
    }

    /// Classify the cursor context at a document offset
    pub fn cursor_context(&self, path: &str, offset: TextSize) -> Option<CursorContext> {
        let file = self.host.documents.get(path)?;
        Some(context::classify(file, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_document_lifecycle() {
        let mut host = AnalysisHost::new();
        let errors = host.set_document("a.ms", "var x = 1;");
        assert!(errors.is_empty());
        assert!(host.document("a.ms").is_some());

        host.remove_document("a.ms");
        assert!(host.document("a.ms").is_none());
    }

    #[test]
    fn test_document_change_clears_caches() {
        let mut host = AnalysisHost::new();
        host.set_document("a.ms", "var x = 1;");
        host.analysis().infer_type("db.select('x')");
        assert!(!host.caches.is_empty());

        host.set_document("a.ms", "var x = 2;");
        assert!(host.caches.is_empty());
    }

    #[test]
    fn test_builtin_registry_is_consistent() {
        let host = AnalysisHost::new();
        let issues = host.validate();
        assert!(issues.is_empty(), "builtin data must validate: {:?}", issues);
    }

    #[test]
    fn test_analysis_surface() {
        let mut host = AnalysisHost::new();
        host.set_document("a.ms", "var rows = db.select('select 1');\nrows;");

        let analysis = host.analysis();
        assert_eq!(analysis.infer_type("http.get('x')"), "HttpResponse");
        assert_eq!(analysis.infer_chain_type("db.page('sql')"), "PageResult");
        assert!(analysis.module("db").is_some());
        assert!(analysis.is_feature_available("db.select"));
        assert!(!analysis.search_methods("paged").is_empty());
    }
}
