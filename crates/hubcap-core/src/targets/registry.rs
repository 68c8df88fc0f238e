//! Target registry for looking up deployment target backends.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::backends::{BrowserStackBackend, LocalBackend};
use super::traits::TargetBackend;
use super::types::TargetType;

/// Global registry of all supported target backends.
static REGISTRY: LazyLock<TargetRegistry> = LazyLock::new(TargetRegistry::new);

/// Registry keyed by `TargetType`, with case-insensitive string lookup on top.
struct TargetRegistry {
    backends: HashMap<TargetType, Box<dyn TargetBackend>>,
}

impl TargetRegistry {
    fn new() -> Self {
        let mut backends: HashMap<TargetType, Box<dyn TargetBackend>> = HashMap::new();
        backends.insert(TargetType::Local, Box::new(LocalBackend));
        backends.insert(TargetType::BrowserStack, Box::new(BrowserStackBackend));
        Self { backends }
    }

    fn get_by_type(&self, target_type: TargetType) -> Option<&dyn TargetBackend> {
        self.backends.get(&target_type).map(|b| b.as_ref())
    }

    fn get(&self, name: &str) -> Option<&dyn TargetBackend> {
        TargetType::parse(name).and_then(|t| self.get_by_type(t))
    }

    fn default_target(&self) -> TargetType {
        TargetType::Local
    }
}

/// Get a reference to a target backend by name (case-insensitive).
pub fn get_target(name: &str) -> Option<&'static dyn TargetBackend> {
    REGISTRY.get(name)
}

/// Get a reference to a target backend by type.
pub fn get_target_by_type(target_type: TargetType) -> Option<&'static dyn TargetBackend> {
    REGISTRY.get_by_type(target_type)
}

/// Get the backend used when the selector is unset or unrecognized.
pub fn default_target_backend() -> &'static dyn TargetBackend {
    &LocalBackend
}

/// Get the default target name.
pub fn default_target_name() -> &'static str {
    REGISTRY.default_target().as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_target_known() {
        let backend = get_target("local");
        assert!(backend.is_some());
        assert_eq!(backend.unwrap().name(), "local");

        let backend = get_target("browserstack");
        assert!(backend.is_some());
        assert_eq!(backend.unwrap().name(), "browserstack");
    }

    #[test]
    fn test_get_target_case_insensitive() {
        assert!(get_target("Local").is_some());
        assert!(get_target("BrowserStack").is_some());
        assert!(get_target("BROWSERSTACK").is_some());
    }

    #[test]
    fn test_get_target_unknown() {
        assert!(get_target("garbage").is_none());
        assert!(get_target("").is_none());
    }

    #[test]
    fn test_get_target_by_type() {
        for target_type in TargetType::all() {
            let backend = get_target_by_type(*target_type).unwrap();
            assert_eq!(backend.name(), target_type.as_str());
        }
    }

    #[test]
    fn test_default_target() {
        assert_eq!(default_target_name(), "local");
        assert_eq!(default_target_backend().name(), default_target_name());
    }
}
