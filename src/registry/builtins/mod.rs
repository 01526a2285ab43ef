//! Builtin API knowledge tables
//!
//! Everything Magic Script ships with (the seven builtin modules, the
//! global function categories, and the per-type extension methods) is
//! declared here as const data and installed into a registry at
//! construction/reload time. The tables use compact spec structs that
//! build the registry's `ApiMethod`/`Module` values; nothing in here is
//! imperative registration logic.

mod extensions;
mod functions;
mod modules;

use super::{ApiMethod, ApiRegistry, Module, Parameter};
use crate::catalog::types::{self, type_names};

/// The closed set of builtin module identifiers
pub const MODULE_NAMES: &[&str] = &["db", "http", "request", "response", "env", "log", "magic"];

/// Version gates for methods newer than the oldest supported runtime
const FEATURE_GATES: &[(&str, &[&str])] = &[
    ("db.transaction", &["1.8.5", "2.0"]),
    ("db.cache", &["1.6.0", "1.8.5", "2.0"]),
    ("http.patch", &["2.0"]),
    ("request.getFiles", &["1.8.5", "2.0"]),
    ("response.download", &["1.8.5", "2.0"]),
];

/// Hover documentation for the domain object types
const TYPE_INFO: &[(&str, &str)] = &[
    (
        type_names::PAGE_RESULT,
        "A page of query results: `total` holds the full row count, `list` the current page's rows.",
    ),
    (
        type_names::HTTP_RESPONSE,
        "Response of an outgoing HTTP call, with `body`, `status`, `headers` and `cookies`.",
    ),
    (
        type_names::RESPONSE_BUILDER,
        "Builder for the API's own HTTP response; every method returns the builder for chaining.",
    ),
    (
        type_names::NAMED_TABLE,
        "Fluent single-table query interface obtained from `db.table(name)`.",
    ),
];

/// Install every builtin table into the registry
pub(crate) fn install(registry: &ApiRegistry) {
    for spec in modules::BUILTIN_MODULES {
        registry.register_module(spec.build());
    }
    for (category, methods) in functions::GLOBAL_FUNCTIONS {
        registry.register_global_functions(category, build_all(methods));
    }
    for (receiver, methods) in extensions::EXTENSION_METHODS {
        registry.register_extension_methods(receiver, build_all(methods));
    }
    for (feature, versions) in FEATURE_GATES {
        registry.register_feature(feature, versions);
    }
    for (type_name, info) in TYPE_INFO {
        registry.set_type_info(type_name, info);
    }
}

fn build_all(specs: &[MethodSpec]) -> Vec<ApiMethod> {
    specs.iter().map(MethodSpec::build).collect()
}

// =============================================================================
// TABLE ROW BUILDERS: const-constructible rows for the data tables
// =============================================================================

pub(crate) struct ParamSpec {
    name: &'static str,
    ty: &'static str,
    description: &'static str,
    required: bool,
    default: Option<&'static str>,
}

impl ParamSpec {
    /// A required parameter
    pub(crate) const fn req(
        name: &'static str,
        ty: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            ty,
            description,
            required: true,
            default: None,
        }
    }

    /// An optional parameter, with its default literal if it has one
    pub(crate) const fn opt(
        name: &'static str,
        ty: &'static str,
        description: &'static str,
        default: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            ty,
            description,
            required: false,
            default,
        }
    }

    fn build(&self) -> Parameter {
        let param = Parameter::new(self.name, self.ty, self.description);
        if self.required {
            param
        } else {
            param.optional(self.default)
        }
    }
}

pub(crate) struct MethodSpec {
    name: &'static str,
    params: &'static [ParamSpec],
    return_type: &'static str,
    description: &'static str,
    return_description: &'static str,
    example: &'static str,
}

impl MethodSpec {
    pub(crate) const fn new(
        name: &'static str,
        params: &'static [ParamSpec],
        return_type: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            params,
            return_type,
            description,
            return_description: "",
            example: "",
        }
    }

    pub(crate) const fn returns(mut self, text: &'static str) -> Self {
        self.return_description = text;
        self
    }

    pub(crate) const fn example(mut self, text: &'static str) -> Self {
        self.example = text;
        self
    }

    pub(crate) fn build(&self) -> ApiMethod {
        let parameters = self.params.iter().map(ParamSpec::build).collect();
        ApiMethod::new(self.name, self.return_type, self.description)
            .with_parameters(parameters)
            .with_return_description(self.return_description)
            .with_example(self.example)
            .with_chainable(chainable_return(self.return_type))
    }
}

pub(crate) struct ModuleSpec {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    methods: &'static [MethodSpec],
}

impl ModuleSpec {
    pub(crate) const fn new(
        name: &'static str,
        description: &'static str,
        category: &'static str,
        methods: &'static [MethodSpec],
    ) -> Self {
        Self {
            name,
            description,
            category,
            methods,
        }
    }

    fn build(&self) -> Module {
        Module::new(self.name, self.description, self.category)
            .with_methods(self.methods.iter().map(MethodSpec::build).collect())
    }
}

/// A return type is chainable when it exposes further members: a module
/// pseudo-type, or a catalogued type whose family carries method or
/// property name sets. Object's universal conversions don't count.
fn chainable_return(ty: &str) -> bool {
    if ty == type_names::OBJECT || ty == type_names::NULL || ty == type_names::UNKNOWN {
        return false;
    }
    if MODULE_NAMES.contains(&ty) {
        return true;
    }
    let mut current = ty;
    for _ in 0..types::MAX_HIERARCHY_DEPTH {
        if current == type_names::OBJECT {
            return false;
        }
        let has_members = types::TYPE_METHODS
            .iter()
            .any(|(name, methods)| *name == current && !methods.is_empty())
            || types::TYPE_PROPERTIES
                .iter()
                .any(|(name, props)| *name == current && !props.is_empty());
        if has_members {
            return true;
        }
        match types::TYPE_PARENTS
            .iter()
            .find(|(child, _)| *child == current)
        {
            Some((_, parent)) => current = parent,
            None => return false,
        }
    }
    false
}
