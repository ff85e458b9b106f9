//! Result type alias shared across the workspace.
//!
//! Functions return `Result<T>` and get `PanelError` as the error type unless
//! they name another one.
use crate::error::PanelError;

/// Workspace-wide `Result` alias with `PanelError` as the default error.
pub type Result<T, E = PanelError> = std::result::Result<T, E>;
