// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validator façade.
//!
//! Resolves the configured preset and drives it. An unknown preset name is
//! always an error, even when validation is disabled.

use std::sync::Arc;

use crate::config::CgateConfig;
use crate::error::Result;
use crate::presets::{
    CommitMsgValidationResult, PrefixSource, Preset, PresetRegistry, ValidationResult,
};

/// Runs the configured preset against staged files and commit messages.
#[derive(Debug)]
pub struct CommitValidator<'r> {
    config: CgateConfig,
    registry: &'r PresetRegistry,
}

impl<'r> CommitValidator<'r> {
    /// Create a validator for the given configuration.
    pub fn new(config: CgateConfig, registry: &'r PresetRegistry) -> Self {
        Self { config, registry }
    }

    /// The configuration this validator runs with.
    pub fn config(&self) -> &CgateConfig {
        &self.config
    }

    /// Resolve the configured preset.
    pub fn preset(&self) -> Result<Arc<dyn Preset>> {
        Ok(self.registry.get(&self.config.preset)?)
    }

    /// Validate a list of staged files.
    pub fn validate(&self, files: &[String]) -> Result<ValidationResult> {
        let preset = self.preset()?;

        if !self.config.enabled {
            tracing::debug!("Validation disabled, skipping preset '{}'", preset.name());
            let mut result = ValidationResult::new(files.to_vec());
            result.push_warning("Validation is disabled in the configuration");
            return Ok(result);
        }

        tracing::debug!(
            "Validating {} file(s) with preset '{}'",
            files.len(),
            preset.name()
        );
        Ok(preset.validate_files(files, &self.config))
    }

    /// Validate a commit message.
    pub fn validate_commit_message(&self, message: &str) -> Result<CommitMsgValidationResult> {
        let preset = self.preset()?;

        if !self.config.enabled {
            tracing::debug!("Validation disabled, skipping preset '{}'", preset.name());
            return Ok(CommitMsgValidationResult::new());
        }

        Ok(preset.validate_commit_message(message, &self.config))
    }

    /// Prefix for a file validation outcome.
    pub fn commit_prefix(&self, common_path: Option<&str>, all_ignored: bool) -> Result<String> {
        let preset = self.preset()?;
        Ok(preset.commit_prefix(
            PrefixSource::Files {
                common_path,
                all_ignored,
            },
            &self.config,
        ))
    }

    /// Prefix recovered from a commit message.
    pub fn message_prefix(&self, message: &str) -> Result<String> {
        let preset = self.preset()?;
        Ok(preset.commit_prefix(PrefixSource::Message(message), &self.config))
    }
}
