use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};

use super::backend::ScorerBackend;

/// Name-keyed registry of scorer backends.
///
/// Backends are wrapped in `Mutex` because `ScorerBackend::score` takes
/// `&mut self`. The daemon selects a backend from configuration by name;
/// a real model runtime would register here next to the checksum stand-in.
pub struct BackendRegistry {
    backends: HashMap<String, Arc<Mutex<dyn ScorerBackend>>>,
    default_name: Option<String>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
            default_name: None,
        }
    }

    /// Register a backend. The first registered backend becomes the default.
    pub fn register<B: ScorerBackend + 'static>(&mut self, backend: B) {
        let name = backend.name().to_string();
        if self.default_name.is_none() {
            self.default_name = Some(name.clone());
        }
        self.backends.insert(name, Arc::new(Mutex::new(backend)));
    }

    /// Set default backend by name.
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        if !self.backends.contains_key(name) {
            return Err(anyhow!(
                "backend '{}' not registered (available: {})",
                name,
                self.list().join(", ")
            ));
        }
        self.default_name = Some(name.to_string());
        Ok(())
    }

    /// Get backend by name.
    pub fn get(&self, name: &str) -> Option<Arc<Mutex<dyn ScorerBackend>>> {
        self.backends.get(name).cloned()
    }

    /// Get default backend.
    pub fn default_backend(&self) -> Option<Arc<Mutex<dyn ScorerBackend>>> {
        self.default_name.as_ref().and_then(|name| self.get(name))
    }

    /// List registered backends.
    pub fn list(&self) -> Vec<String> {
        self.backends.keys().cloned().collect()
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::result::ScoreResult;
    use crate::score::ChecksumBackend;

    struct FixedBackend;

    impl ScorerBackend for FixedBackend {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn score(&mut self, _samples: &[u8], _width: u32, _height: u32) -> Result<ScoreResult> {
            Ok(ScoreResult {
                label: 2,
                score: 0.5,
            })
        }
    }

    #[test]
    fn first_registration_becomes_default() {
        let mut registry = BackendRegistry::new();
        registry.register(ChecksumBackend::new());
        registry.register(FixedBackend);

        let backend = registry.default_backend().unwrap();
        let name = backend.lock().unwrap().name();
        assert_eq!(name, "checksum");
    }

    #[test]
    fn set_default_switches_backend() {
        let mut registry = BackendRegistry::new();
        registry.register(ChecksumBackend::new());
        registry.register(FixedBackend);

        registry.set_default("fixed").unwrap();
        let backend = registry.default_backend().unwrap();
        assert_eq!(backend.lock().unwrap().name(), "fixed");
    }

    #[test]
    fn set_default_rejects_unknown_names() {
        let mut registry = BackendRegistry::new();
        registry.register(ChecksumBackend::new());

        let err = registry.set_default("tract").unwrap_err();
        assert!(err.to_string().contains("not registered"));
    }

    #[test]
    fn get_by_name() {
        let mut registry = BackendRegistry::new();
        registry.register(ChecksumBackend::new());

        assert!(registry.get("checksum").is_some());
        assert!(registry.get("missing").is_none());
    }
}
