//! Registry/catalog consistency checking
//!
//! Every return type and parameter type in the registry must name a
//! catalogued type or a registered module pseudo-type; anything else would
//! silently degrade to Object at inference time. Validation reports these
//! instead of failing registration, since the registry itself is total.

use super::{ApiMethod, ApiRegistry};
use crate::catalog::{TypeCatalog, TypeName, type_names};
use smol_str::SmolStr;
use thiserror::Error;

/// A single inconsistency between the registry and the type catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("{owner}.{method} returns unregistered type {type_name:?}")]
    UnknownReturnType {
        owner: SmolStr,
        method: SmolStr,
        type_name: TypeName,
    },
    #[error("parameter {param:?} of {owner}.{method} has unregistered type {type_name:?}")]
    UnknownParameterType {
        owner: SmolStr,
        method: SmolStr,
        param: SmolStr,
        type_name: TypeName,
    },
    #[error("extension bucket {receiver:?} is not a catalogued type")]
    UnknownReceiverType { receiver: SmolStr },
}

pub(crate) fn run(registry: &ApiRegistry, catalog: &TypeCatalog) -> Vec<ValidationIssue> {
    let module_names = registry.module_names();
    let mut issues = Vec::new();

    for module in registry.modules.read().values() {
        for method in &module.methods {
            check_method(&module.name, method, catalog, &module_names, &mut issues);
        }
    }
    for (category, methods) in registry.globals.read().iter() {
        for method in methods {
            check_method(category, method, catalog, &module_names, &mut issues);
        }
    }
    for (receiver, methods) in registry.extensions.read().iter() {
        if !catalog.is_known_type(receiver) {
            issues.push(ValidationIssue::UnknownReceiverType {
                receiver: receiver.clone(),
            });
        }
        for method in methods {
            check_method(receiver, method, catalog, &module_names, &mut issues);
        }
    }
    issues
}

fn check_method(
    owner: &SmolStr,
    method: &ApiMethod,
    catalog: &TypeCatalog,
    module_names: &[SmolStr],
    issues: &mut Vec<ValidationIssue>,
) {
    if !type_ok(&method.return_type, catalog, module_names) {
        issues.push(ValidationIssue::UnknownReturnType {
            owner: owner.clone(),
            method: method.name.clone(),
            type_name: method.return_type.clone(),
        });
    }
    for param in &method.parameters {
        if !type_ok(&param.param_type, catalog, module_names) {
            issues.push(ValidationIssue::UnknownParameterType {
                owner: owner.clone(),
                method: method.name.clone(),
                param: param.name.clone(),
                type_name: param.param_type.clone(),
            });
        }
    }
}

/// A type annotation is acceptable if the catalog knows it, a module
/// claims it as its pseudo-type, or it is the explicit unknown sentinel.
fn type_ok(name: &str, catalog: &TypeCatalog, module_names: &[SmolStr]) -> bool {
    catalog.is_known_type(name)
        || name == type_names::UNKNOWN
        || module_names.iter().any(|m| m == name)
}
