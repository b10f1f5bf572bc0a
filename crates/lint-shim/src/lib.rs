#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `lint_shim` teaches a static analyzer about the names the workspace adds
//! at run time: the `notice`, `spam`, `success` and `verbose` methods of the
//! root logger class and the matching level constants of the logging module.
//! Without it the analyzer's model of the unpatched logging module reports
//! them as unknown attributes.
//!
//! # Design
//!
//! The analyzer is reached through the [`AnalyzerHost`] trait. [`register`]
//! resolves the analyzer's node type names (modern first, legacy second) and
//! registers one class transform and one module transform. Both transforms run
//! for every scope the analyzer builds and only touch the one scope whose name
//! matches exactly.
//!
//! [`ExtensionManager`] is an in-memory host; [`register_global`] registers
//! the transforms with the process-wide instance once.
//!
//! # Examples
//!
//! ```
//! use lint_shim::{ExtensionManager, Scope};
//!
//! let mut manager = ExtensionManager::new();
//! assert!(manager.register_once()?);
//!
//! let mut logging = Scope::module("logging");
//! manager.visit_module(&mut logging);
//! assert_eq!(logging.lookup("VERBOSE").len(), 1);
//! # Ok::<(), lint_shim::ShimError>(())
//! ```

mod error;
mod extension;
mod model;
mod transform;

pub use error::ShimError;
pub use extension::{ExtensionManager, register_global, with_global};
pub use model::{NodeKind, NodeTypes, Scope, Symbol};
pub use transform::{
    AnalyzerHost, LEVEL_METHODS, LOGGING_MODULE, ROOT_LOGGER_CLASS, Transform, register,
    transform_logging_module, transform_root_logger,
};
