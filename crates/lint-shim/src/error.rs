//! crates/lint-shim/src/error.rs
//! Failures reported while hooking the transforms into an analyzer.

use thiserror::Error;

/// Errors raised while registering transforms with an analyzer.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ShimError {
    /// The analyzer exposes neither the modern nor the legacy node types.
    #[error("analyzer exposes no supported node types (missing `{missing}`)")]
    UnsupportedAnalyzer {
        /// First node type name that was looked for and not found.
        missing: &'static str,
    },
}
