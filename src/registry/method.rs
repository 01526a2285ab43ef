//! API method, parameter, and module descriptions
//!
//! These are the values the registry hands out. They are constructed once
//! during registration and immutable afterwards; queries share them via
//! `Arc` so completion threads never copy the tables.

use crate::catalog::TypeName;
use smol_str::SmolStr;
use std::fmt;
use std::sync::Arc;

/// A single declared parameter of an API method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: SmolStr,
    pub param_type: TypeName,
    pub required: bool,
    pub description: String,
    pub default_value: Option<String>,
}

impl Parameter {
    pub fn new(name: &str, param_type: &str, description: &str) -> Self {
        Self {
            name: SmolStr::new(name),
            param_type: SmolStr::new(param_type),
            required: true,
            description: description.to_string(),
            default_value: None,
        }
    }

    pub fn optional(mut self, default_value: Option<&str>) -> Self {
        self.required = false;
        self.default_value = default_value.map(str::to_string);
        self
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.required {
            write!(f, "{}: {}", self.name, self.param_type)
        } else {
            write!(f, "{}?: {}", self.name, self.param_type)
        }
    }
}

/// A callable API method: module method, global function, or extension method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiMethod {
    pub name: SmolStr,
    pub description: String,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeName,
    pub return_description: String,
    pub example: String,
    /// Whether the return type itself exposes further members meaningfully.
    /// Drives completion ordering and insert text, not type correctness.
    pub chainable: bool,
}

impl ApiMethod {
    pub fn new(name: &str, return_type: &str, description: &str) -> Self {
        Self {
            name: SmolStr::new(name),
            description: description.to_string(),
            parameters: Vec::new(),
            return_type: SmolStr::new(return_type),
            return_description: String::new(),
            example: String::new(),
            chainable: false,
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_return_description(mut self, text: &str) -> Self {
        self.return_description = text.to_string();
        self
    }

    pub fn with_example(mut self, example: &str) -> Self {
        self.example = example.to_string();
        self
    }

    pub fn with_chainable(mut self, chainable: bool) -> Self {
        self.chainable = chainable;
        self
    }

    /// Render `name(param: Type, ...): ReturnType` for detail strings
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        format!("{}({}): {}", self.name, params.join(", "), self.return_type)
    }

    /// True when the query matches the name or description,
    /// case-insensitively
    pub fn matches_query(&self, lowercase_query: &str) -> bool {
        self.name.to_lowercase().contains(lowercase_query)
            || self.description.to_lowercase().contains(lowercase_query)
    }
}

/// A builtin module: a fixed named object with a closed method set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: SmolStr,
    pub description: String,
    /// Display grouping tag for the UI layer
    pub category: SmolStr,
    pub methods: Vec<Arc<ApiMethod>>,
}

impl Module {
    pub fn new(name: &str, description: &str, category: &str) -> Self {
        Self {
            name: SmolStr::new(name),
            description: description.to_string(),
            category: SmolStr::new(category),
            methods: Vec::new(),
        }
    }

    pub fn with_methods(mut self, methods: Vec<ApiMethod>) -> Self {
        self.methods = methods.into_iter().map(Arc::new).collect();
        self
    }

    /// Look up a method by name. Later registrations shadow earlier ones
    /// with the same name.
    pub fn method(&self, name: &str) -> Option<&Arc<ApiMethod>> {
        self.methods.iter().rev().find(|m| m.name == name)
    }

    pub fn method_names(&self) -> impl Iterator<Item = &SmolStr> {
        self.methods.iter().map(|m| &m.name)
    }
}
