//! crates/lint-shim/src/transform.rs
//! The class and module transforms and their registration.

use std::sync::Arc;

use crate::error::ShimError;
use crate::model::{NodeKind, NodeTypes, Scope, Symbol};

/// Class whose symbol table receives the level methods.
pub const ROOT_LOGGER_CLASS: &str = "RootLogger";

/// Module whose symbol table receives the level constants.
pub const LOGGING_MODULE: &str = "logging";

/// Method names injected into [`ROOT_LOGGER_CLASS`].
pub const LEVEL_METHODS: [&str; 4] = ["notice", "spam", "success", "verbose"];

/// A callback applied to every class or module the analyzer builds.
pub type Transform = Arc<dyn Fn(&mut Scope) + Send + Sync>;

/// The parts of a static analyzer the shim talks to.
pub trait AnalyzerHost {
    /// Returns `true` if the analyzer has a node type with this name.
    fn has_node_type(&self, name: &str) -> bool;

    /// Registers a callback run for every class symbol.
    fn register_class_transform(&mut self, transform: Transform);

    /// Registers a callback run for every module symbol.
    fn register_module_transform(&mut self, transform: Transform);
}

/// Adds the level methods when `scope` is the root logger class.
pub fn transform_root_logger(scope: &mut Scope, types: &NodeTypes) {
    if scope.name() != ROOT_LOGGER_CLASS {
        return;
    }
    for method in LEVEL_METHODS {
        scope.bind(Symbol::new(method, NodeKind::Function, types));
    }
}

/// Adds the level constants when `scope` is the logging module.
pub fn transform_logging_module(scope: &mut Scope, types: &NodeTypes) {
    if scope.name() != LOGGING_MODULE {
        return;
    }
    for (name, _) in levels::CUSTOM_LEVELS {
        scope.bind(Symbol::new(name, NodeKind::Constant, types));
    }
}

/// Registers both transforms with `host`.
///
/// The node type generation is resolved once, up front.
pub fn register<H: AnalyzerHost + ?Sized>(host: &mut H) -> Result<NodeTypes, ShimError> {
    let types = NodeTypes::resolve(|name| host.has_node_type(name))?;

    host.register_class_transform(Arc::new(move |scope: &mut Scope| {
        transform_root_logger(scope, &types);
    }));
    host.register_module_transform(Arc::new(move |scope: &mut Scope| {
        transform_logging_module(scope, &types);
    }));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "lint_shim",
        function = types.function,
        "lint transforms registered"
    );

    Ok(types)
}
