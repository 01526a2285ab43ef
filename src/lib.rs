//! # magicscript-base
//!
//! Core library for Magic Script, a small scripting DSL for HTTP/database
//! API handlers: lossless parsing, the builtin API knowledge base, and
//! best-effort static type inference for editor tooling.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → completion, hover, cursor contexts, AnalysisHost facade
//!   ↓
//! infer     → TypeInferencer, ChainResolver, scope lookup, memo caches
//!   ↓
//! registry  → ApiRegistry: builtin modules, global functions,
//!             extension methods, feature gates
//!   ↓
//! catalog   → TypeCatalog: type names, hierarchy, conversions,
//!             literal classification
//!   ↓
//! syntax    → ScriptFile wrapper over a parse
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, rowan CST, typed AST
//!   ↓
//! base      → Primitives (TextRange, LineIndex)
//! ```
//!
//! `settings` sits beside the stack: host-provided configuration (target
//! API version, feature toggles) read through the registry's gates.

/// Foundation types: TextRange, LineCol, LineIndex
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, rowan CST, typed AST
pub mod parser;

/// Syntax: ScriptFile wrapper over parsed documents
pub mod syntax;

/// Type catalog: names, hierarchy, conversions, literal classification
pub mod catalog;

/// API knowledge base: modules, global functions, extension methods
pub mod registry;

/// Type inference: expression and chain resolution, memo caches
pub mod infer;

/// IDE features: completion, hover, analysis host
pub mod ide;

/// Host-provided configuration
pub mod settings;

// Re-export the types most consumers need
pub use base::{LineCol, LineIndex, TextRange, TextSize};
pub use catalog::{TypeCatalog, TypeName};
pub use ide::{Analysis, AnalysisHost};
pub use infer::{ChainResolver, InferenceCaches, TypeInferencer};
pub use registry::{ApiMethod, ApiRegistry, Module, Parameter};
pub use settings::{ApiSettings, SettingsError};
pub use syntax::ScriptFile;
