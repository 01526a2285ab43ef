//! ApiRegistry: the API knowledge base
//!
//! Owns four catalogs: builtin modules, global functions grouped by
//! category, extension methods grouped by receiver type, and a free-form
//! type-info string cache, plus version gates for newer features.
//!
//! The registry is explicitly constructed and handed to consumers (no
//! process-wide singleton); build it once with [`ApiRegistry::with_builtins`]
//! and share it by reference. Each bucket sits behind its own `RwLock`, so
//! concurrent completion threads read without blocking each other and an
//! administrative write to one bucket never stalls reads of another.

pub mod builtins;
mod method;
mod validate;

pub use method::{ApiMethod, Module, Parameter};
pub use validate::ValidationIssue;

use crate::settings::ApiSettings;
use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;
use std::sync::Arc;
use tracing::debug;

/// Pseudo-category aggregating every registered global function
pub const ALL_FUNCTIONS_CATEGORY: &str = "all";

#[derive(Debug, Default)]
pub struct ApiRegistry {
    modules: RwLock<IndexMap<SmolStr, Arc<Module>>>,
    globals: RwLock<IndexMap<SmolStr, Vec<Arc<ApiMethod>>>>,
    extensions: RwLock<IndexMap<SmolStr, Vec<Arc<ApiMethod>>>>,
    type_info: RwLock<FxHashMap<SmolStr, String>>,
    features: RwLock<FxHashMap<SmolStr, FxHashSet<SmolStr>>>,
}

impl ApiRegistry {
    /// An empty registry; callers register everything themselves
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-loaded with the builtin module, global-function,
    /// and extension-method tables
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        builtins::install(&registry);
        registry
    }

    // =========================================================================
    // MODULES
    // =========================================================================

    /// Register a builtin module. Re-registering a name replaces the
    /// previous module wholesale.
    pub fn register_module(&self, module: Module) {
        debug!(module = %module.name, methods = module.methods.len(), "registering module");
        self.modules
            .write()
            .insert(module.name.clone(), Arc::new(module));
    }

    pub fn module(&self, name: &str) -> Option<Arc<Module>> {
        self.modules.read().get(name).cloned()
    }

    pub fn has_module(&self, name: &str) -> bool {
        self.modules.read().contains_key(name)
    }

    /// Module names in registration order
    pub fn module_names(&self) -> Vec<SmolStr> {
        self.modules.read().keys().cloned().collect()
    }

    /// Convenience lookup used by the inferencer: `(module, method)`
    pub fn method_of_module(&self, module: &str, method: &str) -> Option<Arc<ApiMethod>> {
        self.modules
            .read()
            .get(module)
            .and_then(|m| m.method(method).cloned())
    }

    // =========================================================================
    // GLOBAL FUNCTIONS
    // =========================================================================

    /// Register the functions of one category, replacing that category.
    /// The "all" aggregate reflects the change immediately.
    pub fn register_global_functions(&self, category: &str, methods: Vec<ApiMethod>) {
        let methods: Vec<Arc<ApiMethod>> = methods.into_iter().map(Arc::new).collect();
        self.globals.write().insert(SmolStr::new(category), methods);
    }

    /// Functions of one category; the "all" category aggregates everything
    pub fn functions_of(&self, category: &str) -> Vec<Arc<ApiMethod>> {
        if category == ALL_FUNCTIONS_CATEGORY {
            return self.all_global_functions();
        }
        self.globals.read().get(category).cloned().unwrap_or_default()
    }

    /// Every global function across categories, in registration order
    pub fn all_global_functions(&self) -> Vec<Arc<ApiMethod>> {
        self.globals
            .read()
            .values()
            .flat_map(|methods| methods.iter().cloned())
            .collect()
    }

    pub fn global_function_categories(&self) -> Vec<SmolStr> {
        self.globals.read().keys().cloned().collect()
    }

    /// Find a global function by name across all categories
    pub fn global_function(&self, name: &str) -> Option<Arc<ApiMethod>> {
        self.globals
            .read()
            .values()
            .flat_map(|methods| methods.iter())
            .find(|m| m.name == name)
            .cloned()
    }

    // =========================================================================
    // EXTENSION METHODS
    // =========================================================================

    /// Register the extension methods of one receiver type, replacing
    /// that bucket. Keys are exact; callers resolve aliases first.
    pub fn register_extension_methods(&self, receiver_type: &str, methods: Vec<ApiMethod>) {
        let methods: Vec<Arc<ApiMethod>> = methods.into_iter().map(Arc::new).collect();
        self.extensions
            .write()
            .insert(SmolStr::new(receiver_type), methods);
    }

    pub fn extension_methods_of(&self, receiver_type: &str) -> Vec<Arc<ApiMethod>> {
        self.extensions
            .read()
            .get(receiver_type)
            .cloned()
            .unwrap_or_default()
    }

    /// Look up one extension method on an exact receiver type
    pub fn extension_method(&self, receiver_type: &str, name: &str) -> Option<Arc<ApiMethod>> {
        self.extensions
            .read()
            .get(receiver_type)
            .and_then(|methods| methods.iter().rev().find(|m| m.name == name).cloned())
    }

    /// Receiver types with registered extension buckets, in registration order
    pub fn extension_receiver_types(&self) -> Vec<SmolStr> {
        self.extensions.read().keys().cloned().collect()
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Case-insensitive substring search over method names and descriptions,
    /// scanning modules, then global functions, then extension methods.
    /// Matches keep natural insertion order; duplicates across buckets are
    /// not deduplicated.
    pub fn search_methods(&self, query: &str) -> Vec<Arc<ApiMethod>> {
        let query = query.to_lowercase();
        let mut results = Vec::new();

        for module in self.modules.read().values() {
            for method in &module.methods {
                if method.matches_query(&query) {
                    results.push(method.clone());
                }
            }
        }
        for methods in self.globals.read().values() {
            for method in methods {
                if method.matches_query(&query) {
                    results.push(method.clone());
                }
            }
        }
        for methods in self.extensions.read().values() {
            for method in methods {
                if method.matches_query(&query) {
                    results.push(method.clone());
                }
            }
        }
        results
    }

    // =========================================================================
    // TYPE INFO
    // =========================================================================

    /// Attach a free-form documentation string to a type name
    pub fn set_type_info(&self, type_name: &str, info: &str) {
        self.type_info
            .write()
            .insert(SmolStr::new(type_name), info.to_string());
    }

    pub fn type_info(&self, type_name: &str) -> Option<String> {
        self.type_info.read().get(type_name).cloned()
    }

    // =========================================================================
    // FEATURE GATES
    // =========================================================================

    /// Declare which API versions support a feature. Version strings are
    /// opaque tokens compared by membership, not ordering.
    pub fn register_feature(&self, feature: &str, versions: &[&str]) {
        let versions: FxHashSet<SmolStr> = versions.iter().map(|v| SmolStr::new(v)).collect();
        self.features.write().insert(SmolStr::new(feature), versions);
    }

    /// Whether a feature is usable under the given settings.
    ///
    /// An explicit host toggle wins; otherwise the configured version must
    /// be in the feature's registered set. Features nobody registered are
    /// available.
    pub fn is_feature_available(&self, feature: &str, settings: &ApiSettings) -> bool {
        if let Some(forced) = settings.feature_toggle(feature) {
            return forced;
        }
        match self.features.read().get(feature) {
            Some(versions) => versions.contains(settings.api_version()),
            None => true,
        }
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Wipe every bucket. Mainly for test isolation.
    pub fn clear(&self) {
        debug!("clearing registry");
        self.modules.write().clear();
        self.globals.write().clear();
        self.extensions.write().clear();
        self.type_info.write().clear();
        self.features.write().clear();
    }

    /// Wipe and re-install the builtin tables
    pub fn reload(&self) {
        debug!("reloading registry builtins");
        self.clear();
        builtins::install(self);
    }

    /// Cross-check the registered data against a type catalog: every return
    /// and parameter type must name a catalogued type or a registered module
    /// pseudo-type.
    pub fn validate(&self, catalog: &crate::catalog::TypeCatalog) -> Vec<ValidationIssue> {
        validate::run(self, catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_module(name: &str, return_type: &str) -> Module {
        Module::new(name, "test module", "test")
            .with_methods(vec![ApiMethod::new("run", return_type, "run it")])
    }

    #[test]
    fn test_module_reregistration_last_wins() {
        let registry = ApiRegistry::new();
        registry.register_module(sample_module("db", "Object"));
        registry.register_module(sample_module("db", "Array"));

        let module = registry.module("db").unwrap();
        assert_eq!(module.methods.len(), 1);
        assert_eq!(module.method("run").unwrap().return_type, "Array");
    }

    #[test]
    fn test_module_names_in_registration_order() {
        let registry = ApiRegistry::new();
        registry.register_module(sample_module("db", "Array"));
        registry.register_module(sample_module("http", "HttpResponse"));
        registry.register_module(sample_module("env", "String"));
        assert_eq!(registry.module_names(), vec!["db", "http", "env"]);
    }

    #[test]
    fn test_all_aggregate_tracks_registrations() {
        let registry = ApiRegistry::new();
        registry.register_global_functions(
            "math",
            vec![ApiMethod::new("round", "Number", "round a number")],
        );
        assert_eq!(registry.all_global_functions().len(), 1);

        registry.register_global_functions(
            "string",
            vec![
                ApiMethod::new("lower", "String", "lowercase"),
                ApiMethod::new("upper", "String", "uppercase"),
            ],
        );
        assert_eq!(registry.all_global_functions().len(), 3);
        assert_eq!(registry.functions_of("all").len(), 3);

        // Re-registering a category replaces it, not appends
        registry.register_global_functions(
            "math",
            vec![ApiMethod::new("floor", "Number", "floor a number")],
        );
        assert_eq!(registry.all_global_functions().len(), 3);
    }

    #[test]
    fn test_search_spans_all_buckets() {
        let registry = ApiRegistry::new();
        registry.register_module(
            Module::new("db", "Database", "database")
                .with_methods(vec![ApiMethod::new("select", "Array", "query rows")]),
        );
        registry.register_global_functions(
            "utility",
            vec![ApiMethod::new("uuid", "String", "select a unique id")],
        );
        registry.register_extension_methods(
            "Array",
            vec![ApiMethod::new("filter", "Array", "select matching items")],
        );

        let hits = registry.search_methods("SELECT");
        let names: Vec<_> = hits.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["select", "uuid", "filter"], "Got: {:?}", names);
    }

    #[test]
    fn test_feature_gating() {
        let registry = ApiRegistry::new();
        registry.register_feature("db.transaction", &["1.8.5", "2.0"]);

        let old = ApiSettings::new("1.0").unwrap();
        let new = ApiSettings::new("2.0").unwrap();
        assert!(!registry.is_feature_available("db.transaction", &old));
        assert!(registry.is_feature_available("db.transaction", &new));

        // Unregistered features are available
        assert!(registry.is_feature_available("db.select", &old));

        // Host toggle overrides version gating
        let mut forced = ApiSettings::new("1.0").unwrap();
        forced.set_feature_toggle("db.transaction", true);
        assert!(registry.is_feature_available("db.transaction", &forced));
    }

    #[test]
    fn test_clear_empties_everything() {
        let registry = ApiRegistry::with_builtins();
        assert!(registry.has_module("db"));
        registry.clear();
        assert!(!registry.has_module("db"));
        assert!(registry.all_global_functions().is_empty());
        assert!(registry.extension_methods_of("String").is_empty());
    }

    #[test]
    fn test_reload_restores_builtins() {
        let registry = ApiRegistry::with_builtins();
        registry.clear();
        registry.register_module(sample_module("custom", "Object"));
        registry.reload();
        assert!(registry.has_module("db"));
        assert!(!registry.has_module("custom"));
    }

    #[test]
    fn test_type_info_cache() {
        let registry = ApiRegistry::new();
        assert_eq!(registry.type_info("PageResult"), None);
        registry.set_type_info("PageResult", "A page of query results");
        assert_eq!(
            registry.type_info("PageResult").as_deref(),
            Some("A page of query results")
        );
    }
}
