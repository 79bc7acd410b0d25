//! Catalog port
//!
//! Read-only access to the assembled set of diagnostic tools. The catalog
//! is built once at startup; lookups never touch I/O.

use clarity_domain::DiagnosticTool;

/// Read-only view of the diagnostic tool catalog
///
/// Implementations live in the infrastructure layer (built-in tools merged
/// with configuration-defined ones).
pub trait CatalogPort: Send + Sync {
    /// All offered tools, in picker order
    fn tools(&self) -> &[DiagnosticTool];

    /// Look up a tool by its exact name
    fn find(&self, name: &str) -> Option<&DiagnosticTool> {
        self.tools().iter().find(|t| t.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_domain::builtin_tools;

    struct FixedCatalog(Vec<DiagnosticTool>);

    impl CatalogPort for FixedCatalog {
        fn tools(&self) -> &[DiagnosticTool] {
            &self.0
        }
    }

    #[test]
    fn test_find_by_exact_name() {
        let catalog = FixedCatalog(builtin_tools());
        let name = catalog.0[1].name().to_string();
        assert_eq!(catalog.find(&name).unwrap().name(), name);
    }

    #[test]
    fn test_find_unknown_returns_none() {
        let catalog = FixedCatalog(builtin_tools());
        assert!(catalog.find("Not A Diagnostic").is_none());
    }
}
