//! Shared fixtures for the integration suites

use magicscript::infer::InferenceCaches;
use magicscript::{AnalysisHost, ApiRegistry, TypeCatalog, TypeInferencer, TextSize};
use once_cell::sync::Lazy;

/// A registry loaded with the builtin tables, shared across read-only
/// tests; suites that mutate the registry build their own.
pub static SHARED_REGISTRY: Lazy<ApiRegistry> = Lazy::new(ApiRegistry::with_builtins);

/// Owns everything a [`TypeInferencer`] borrows
pub struct EngineFixture {
    pub catalog: TypeCatalog,
    pub registry: ApiRegistry,
    pub caches: InferenceCaches,
}

impl EngineFixture {
    pub fn new() -> Self {
        Self {
            catalog: TypeCatalog::new(),
            registry: ApiRegistry::with_builtins(),
            caches: InferenceCaches::new(),
        }
    }

    /// A fixture whose registry starts empty
    pub fn bare() -> Self {
        Self {
            catalog: TypeCatalog::new(),
            registry: ApiRegistry::new(),
            caches: InferenceCaches::new(),
        }
    }

    pub fn inferencer(&self) -> TypeInferencer<'_> {
        TypeInferencer::new(&self.catalog, &self.registry, &self.caches)
    }
}

/// A host with one document loaded under the given path
pub fn host_with(path: &str, text: &str) -> AnalysisHost {
    let mut host = AnalysisHost::new();
    host.set_document(path, text);
    host
}

/// Split `before|after` caret markup into the source and the offset
pub fn split_caret(source_with_caret: &str) -> (String, TextSize) {
    let offset = source_with_caret
        .find('|')
        .expect("caret marker missing from fixture");
    let source = source_with_caret.replace('|', "");
    (source, TextSize::new(offset as u32))
}
