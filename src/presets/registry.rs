// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Name-keyed store of presets.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::ConfigError;

use super::conventional::ConventionalCommitsPreset;
use super::folder::FolderBasedPreset;
use super::preset::Preset;

/// Registry of presets, built once at startup and then only read.
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    presets: BTreeMap<String, Arc<dyn Preset>>,
}

impl PresetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in presets.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(FolderBasedPreset::NAME, Arc::new(FolderBasedPreset));
        registry.register(
            ConventionalCommitsPreset::NAME,
            Arc::new(ConventionalCommitsPreset),
        );
        registry
    }

    /// Store a preset under `name`, replacing any earlier registration.
    pub fn register(&mut self, name: impl Into<String>, preset: Arc<dyn Preset>) {
        let name = name.into();
        if self.presets.insert(name.clone(), preset).is_some() {
            tracing::debug!("Preset '{}' re-registered, keeping the latest", name);
        }
    }

    /// Look up a preset by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Preset>, ConfigError> {
        self.presets
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownPreset {
                name: name.to_string(),
                available: self.list(),
            })
    }

    /// Check whether a preset is registered.
    pub fn has(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Sorted snapshot of registered names.
    pub fn list(&self) -> Vec<String> {
        self.presets.keys().cloned().collect()
    }

    /// Snapshot of every registration.
    pub fn get_all(&self) -> Vec<(String, Arc<dyn Preset>)> {
        self.presets
            .iter()
            .map(|(name, preset)| (name.clone(), Arc::clone(preset)))
            .collect()
    }
}
