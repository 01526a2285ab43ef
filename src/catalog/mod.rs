//! TypeCatalog: static knowledge about Magic Script types
//!
//! Answers questions about type names, the subtype hierarchy, conversion
//! rules, per-type member name sets, and literal shapes, without reference
//! to any specific expression. All operations are total: absent entries
//! yield a neutral default ("Object", empty set, `false`), never an error,
//! because the consumer is best-effort tooling rather than a verifier.

mod literal;
pub mod types;

pub use types::type_names;

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

/// A type's canonical name. Cheap to clone and compare; most values are
/// static and never allocate.
pub type TypeName = SmolStr;

/// Indexed views over the static type tables in [`types`]
#[derive(Debug)]
pub struct TypeCatalog {
    canonical: Vec<TypeName>,
    known: FxHashSet<&'static str>,
    aliases: FxHashMap<&'static str, &'static str>,
    parents: FxHashMap<&'static str, &'static str>,
    children: FxHashMap<&'static str, Vec<&'static str>>,
    implicit: FxHashMap<&'static str, &'static [&'static str]>,
    explicit: FxHashMap<&'static str, &'static [&'static str]>,
    methods: FxHashMap<&'static str, &'static [&'static str]>,
    properties: FxHashMap<&'static str, &'static [&'static str]>,
    defaults: FxHashMap<&'static str, &'static str>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        let canonical: Vec<TypeName> = types::CANONICAL_TYPES
            .iter()
            .map(|name| SmolStr::new_static(name))
            .collect();
        let known: FxHashSet<&'static str> = types::CANONICAL_TYPES.iter().copied().collect();
        let aliases: FxHashMap<_, _> = types::TYPE_ALIASES.iter().copied().collect();
        let parents: FxHashMap<_, _> = types::TYPE_PARENTS.iter().copied().collect();

        let mut children: FxHashMap<&'static str, Vec<&'static str>> = FxHashMap::default();
        for (child, parent) in types::TYPE_PARENTS {
            children.entry(parent).or_default().push(child);
        }

        Self {
            canonical,
            known,
            aliases,
            parents,
            children,
            implicit: types::IMPLICIT_CONVERSIONS.iter().copied().collect(),
            explicit: types::EXPLICIT_CONVERSIONS.iter().copied().collect(),
            methods: types::TYPE_METHODS.iter().copied().collect(),
            properties: types::TYPE_PROPERTIES.iter().copied().collect(),
            defaults: types::DEFAULT_VALUES.iter().copied().collect(),
        }
    }

    /// Map an alias spelling ("int", "list") to its canonical name.
    /// Unknown input comes back unchanged, which makes this idempotent.
    pub fn resolve_alias(&self, name: &str) -> TypeName {
        match self.aliases.get(name) {
            Some(canonical) => SmolStr::new_static(canonical),
            None => SmolStr::new(name),
        }
    }

    /// Whether the name (after alias resolution) is a catalogued type
    pub fn is_known_type(&self, name: &str) -> bool {
        self.known.contains(self.resolve_alias(name).as_str())
    }

    /// All canonical type names, root first
    pub fn canonical_names(&self) -> &[TypeName] {
        &self.canonical
    }

    /// Direct supertype, if any. Object is the root and has none.
    pub fn supertype_of(&self, name: &str) -> Option<TypeName> {
        let name = self.resolve_alias(name);
        self.parents
            .get(name.as_str())
            .map(|parent| SmolStr::new_static(parent))
    }

    /// Direct subtypes, empty for leaves and unknown names
    pub fn subtypes_of(&self, name: &str) -> Vec<TypeName> {
        let name = self.resolve_alias(name);
        self.children
            .get(name.as_str())
            .map(|kids| kids.iter().map(|k| SmolStr::new_static(k)).collect())
            .unwrap_or_default()
    }

    /// True iff `sub == sup` or `sub`'s ancestor chain reaches `sup`.
    /// The walk is depth-bounded so malformed (cyclic) data cannot hang it.
    pub fn is_subtype_of(&self, sub: &str, sup: &str) -> bool {
        let sub = self.resolve_alias(sub);
        let sup = self.resolve_alias(sup);
        if sub == sup {
            return true;
        }
        let mut current = sub.as_str();
        for _ in 0..types::MAX_HIERARCHY_DEPTH {
            match self.parents.get(current) {
                Some(parent) => {
                    if *parent == sup {
                        return true;
                    }
                    current = parent;
                }
                None => return false,
            }
        }
        false
    }

    /// Assignability: equal, implicitly convertible, or a subtype.
    /// Everything is compatible with String and Object.
    pub fn is_compatible(&self, from: &str, to: &str) -> bool {
        let from = self.resolve_alias(from);
        let to = self.resolve_alias(to);
        if from == to {
            return true;
        }
        if to == type_names::STRING || to == type_names::OBJECT {
            return true;
        }
        let widens = self
            .implicit
            .get(from.as_str())
            .is_some_and(|targets| targets.contains(&to.as_str()));
        widens || self.is_subtype_of(from.as_str(), to.as_str())
    }

    /// Whether `from` can reach `to` via an explicit conversion
    /// (`::type` cast or `asX()` call), on top of anything implicit.
    pub fn can_convert_explicit(&self, from: &str, to: &str) -> bool {
        if self.is_compatible(from, to) {
            return true;
        }
        let from = self.resolve_alias(from);
        let to = self.resolve_alias(to);
        self.explicit
            .get(from.as_str())
            .is_some_and(|targets| targets.contains(&to.as_str()))
    }

    /// Method names available on a type, for completion filtering.
    /// Unknown types yield the empty set.
    pub fn methods_of(&self, ty: &str) -> &'static [&'static str] {
        let ty = self.resolve_alias(ty);
        self.methods.get(ty.as_str()).copied().unwrap_or(&[])
    }

    /// Property names available on a type
    pub fn properties_of(&self, ty: &str) -> &'static [&'static str] {
        let ty = self.resolve_alias(ty);
        self.properties.get(ty.as_str()).copied().unwrap_or(&[])
    }

    /// Default value literal for a type, absent for Date and domain objects
    pub fn default_value_of(&self, ty: &str) -> Option<&'static str> {
        let ty = self.resolve_alias(ty);
        self.defaults.get(ty.as_str()).copied()
    }

    /// Classify a literal's text; see [`literal::classify_literal`].
    /// Falls back to the `unknown` sentinel, never panics.
    pub fn classify(&self, literal_text: &str) -> TypeName {
        literal::classify_literal(literal_text)
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
