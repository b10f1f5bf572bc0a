//! crates/lint-shim/src/extension.rs
//! An in-memory analyzer host and the process-wide instance.

use std::fmt;
use std::sync::{LazyLock, Mutex, PoisonError};

use crate::error::ShimError;
use crate::model::{NodeTypes, Scope};
use crate::transform::{AnalyzerHost, Transform, register};

/// Holds registered transforms and applies them to visited scopes.
pub struct ExtensionManager {
    node_types: Vec<&'static str>,
    class_transforms: Vec<Transform>,
    module_transforms: Vec<Transform>,
    shim_registered: bool,
}

impl ExtensionManager {
    /// Creates a manager that exposes the modern node type names.
    #[must_use]
    pub fn new() -> Self {
        let NodeTypes {
            function,
            constant,
            class,
            module,
        } = NodeTypes::MODERN;
        Self::with_node_types(vec![function, constant, class, module])
    }

    /// Creates a manager exposing exactly `node_types`.
    #[must_use]
    pub fn with_node_types(node_types: Vec<&'static str>) -> Self {
        Self {
            node_types,
            class_transforms: Vec::new(),
            module_transforms: Vec::new(),
            shim_registered: false,
        }
    }

    /// Runs every class transform over `scope`.
    pub fn visit_class(&self, scope: &mut Scope) {
        for transform in &self.class_transforms {
            transform(scope);
        }
    }

    /// Runs every module transform over `scope`.
    pub fn visit_module(&self, scope: &mut Scope) {
        for transform in &self.module_transforms {
            transform(scope);
        }
    }

    /// Number of registered class and module transforms.
    #[must_use]
    pub fn transform_count(&self) -> usize {
        self.class_transforms.len() + self.module_transforms.len()
    }

    /// Registers the shim's transforms unless that already happened.
    ///
    /// Returns `true` if this call performed the registration.
    pub fn register_once(&mut self) -> Result<bool, ShimError> {
        if self.shim_registered {
            return Ok(false);
        }
        register(self)?;
        self.shim_registered = true;
        Ok(true)
    }
}

impl Default for ExtensionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExtensionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionManager")
            .field("node_types", &self.node_types)
            .field("class_transforms", &self.class_transforms.len())
            .field("module_transforms", &self.module_transforms.len())
            .field("shim_registered", &self.shim_registered)
            .finish()
    }
}

impl AnalyzerHost for ExtensionManager {
    fn has_node_type(&self, name: &str) -> bool {
        self.node_types.contains(&name)
    }

    fn register_class_transform(&mut self, transform: Transform) {
        self.class_transforms.push(transform);
    }

    fn register_module_transform(&mut self, transform: Transform) {
        self.module_transforms.push(transform);
    }
}

static GLOBAL: LazyLock<Mutex<ExtensionManager>> =
    LazyLock::new(|| Mutex::new(ExtensionManager::new()));

/// Runs `f` with the process-wide extension manager locked.
pub fn with_global<R>(f: impl FnOnce(&mut ExtensionManager) -> R) -> R {
    let mut manager = GLOBAL.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut manager)
}

/// Registers the transforms with the process-wide manager, once.
///
/// Returns `true` for the call that registered them and `false` afterwards.
pub fn register_global() -> Result<bool, ShimError> {
    with_global(ExtensionManager::register_once)
}
