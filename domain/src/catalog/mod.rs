//! Diagnostic tool catalog
//!
//! Tools are immutable once constructed; the catalog is assembled at startup
//! and only read afterwards.

pub mod builtin;
pub mod tool;

pub use builtin::builtin_tools;
pub use tool::DiagnosticTool;
