//! crates/lint-shim/src/model.rs
//! The analyzer's symbol model as seen by the transforms.

use std::collections::BTreeMap;

use crate::error::ShimError;

/// Broad category of a symbol.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    /// A function or method.
    Function,
    /// A constant value.
    Constant,
    /// A class.
    Class,
    /// A module.
    Module,
}

/// Names an analyzer generation uses for its node types.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NodeTypes {
    /// Node type for functions and methods.
    pub function: &'static str,
    /// Node type for constants.
    pub constant: &'static str,
    /// Node type for classes.
    pub class: &'static str,
    /// Node type for modules.
    pub module: &'static str,
}

impl NodeTypes {
    /// Names used by current analyzer releases.
    pub const MODERN: Self = Self {
        function: "FunctionDef",
        constant: "Const",
        class: "ClassDef",
        module: "Module",
    };

    /// Names used by older analyzer releases.
    pub const LEGACY: Self = Self {
        function: "Function",
        constant: "Const",
        class: "Class",
        module: "Module",
    };

    /// Returns the type name for `kind`.
    #[must_use]
    pub const fn name_of(&self, kind: NodeKind) -> &'static str {
        match kind {
            NodeKind::Function => self.function,
            NodeKind::Constant => self.constant,
            NodeKind::Class => self.class,
            NodeKind::Module => self.module,
        }
    }

    fn all(&self) -> [&'static str; 4] {
        [self.function, self.constant, self.class, self.module]
    }

    fn first_missing(&self, available: impl Fn(&str) -> bool) -> Option<&'static str> {
        self.all().into_iter().find(|name| !available(name))
    }

    /// Picks the modern names if the analyzer has them all, else the legacy ones.
    pub fn resolve(available: impl Fn(&str) -> bool) -> Result<Self, ShimError> {
        match Self::MODERN.first_missing(&available) {
            None => Ok(Self::MODERN),
            Some(missing) => match Self::LEGACY.first_missing(&available) {
                None => Ok(Self::LEGACY),
                Some(_) => Err(ShimError::UnsupportedAnalyzer { missing }),
            },
        }
    }
}

/// A named node in the symbol model.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Symbol {
    /// Name the symbol is bound to.
    pub name: String,
    /// Category of the node.
    pub kind: NodeKind,
    /// The analyzer's type name for the node.
    pub node_type: &'static str,
}

impl Symbol {
    /// Creates a symbol whose node type comes from `types`.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NodeKind, types: &NodeTypes) -> Self {
        Self {
            name: name.into(),
            kind,
            node_type: types.name_of(kind),
        }
    }
}

/// A class or module together with the symbols defined in it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scope {
    name: String,
    kind: NodeKind,
    /// Local symbols by name. A name may be bound more than once.
    pub locals: BTreeMap<String, Vec<Symbol>>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            locals: BTreeMap::new(),
        }
    }

    /// Creates an empty class scope.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Class)
    }

    /// Creates an empty module scope.
    #[must_use]
    pub fn module(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Module)
    }

    /// Name of the scope.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the scope is a class or a module.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Binds `symbol` under its own name.
    pub fn define(&mut self, symbol: Symbol) {
        self.locals
            .entry(symbol.name.clone())
            .or_default()
            .push(symbol);
    }

    /// Makes `symbol` the only binding of its name, replacing any earlier ones.
    pub fn bind(&mut self, symbol: Symbol) {
        self.locals.insert(symbol.name.clone(), vec![symbol]);
    }

    /// Symbols bound to `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> &[Symbol] {
        self.locals.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_names_preferred() {
        let types = NodeTypes::resolve(|_| true).expect("all available");
        assert_eq!(types, NodeTypes::MODERN);
    }

    #[test]
    fn legacy_names_as_fallback() {
        let legacy = ["Function", "Const", "Class", "Module"];
        let types = NodeTypes::resolve(|name| legacy.contains(&name)).expect("legacy");
        assert_eq!(types, NodeTypes::LEGACY);
    }

    #[test]
    fn no_generation_available() {
        let err = NodeTypes::resolve(|name| name == "Module").expect_err("nothing usable");
        assert_eq!(err, ShimError::UnsupportedAnalyzer { missing: "FunctionDef" });
    }

    #[test]
    fn define_keeps_every_binding() {
        let mut scope = Scope::module("pkg");
        scope.define(Symbol::new("X", NodeKind::Constant, &NodeTypes::MODERN));
        scope.define(Symbol::new("X", NodeKind::Constant, &NodeTypes::LEGACY));
        assert_eq!(scope.lookup("X").len(), 2);
        assert!(scope.lookup("Y").is_empty());
    }

    #[test]
    fn bind_replaces_existing_bindings() {
        let mut scope = Scope::module("pkg");
        scope.define(Symbol::new("X", NodeKind::Function, &NodeTypes::MODERN));
        scope.define(Symbol::new("X", NodeKind::Function, &NodeTypes::MODERN));
        scope.bind(Symbol::new("X", NodeKind::Constant, &NodeTypes::MODERN));

        let bindings = scope.lookup("X");
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].kind, NodeKind::Constant);
    }

    #[test]
    fn symbol_takes_node_type_from_generation() {
        let modern = Symbol::new("f", NodeKind::Function, &NodeTypes::MODERN);
        let legacy = Symbol::new("f", NodeKind::Function, &NodeTypes::LEGACY);
        assert_eq!(modern.node_type, "FunctionDef");
        assert_eq!(legacy.node_type, "Function");
    }
}
