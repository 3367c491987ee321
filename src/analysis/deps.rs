//! Import classification.

use super::DependencyInfo;

/// An import is internal when it references a relative path or a dotted
/// module path (`./x`, `../x`, `pkg.module`).
pub fn is_internal(import: &str) -> bool {
    import.contains("./") || import.contains("../") || import.contains('.')
}

impl DependencyInfo {
    /// Partition raw imports, keeping source order in every list.
    pub fn from_imports(imports: Vec<String>) -> Self {
        let (internal_deps, external_deps) = imports
            .iter()
            .cloned()
            .partition(|import| is_internal(import));
        Self {
            imports,
            internal_deps,
            external_deps,
        }
    }
}
