// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and managing git hooks.

use crate::error::{CgateError, HookError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{HookTemplate, HOOK_MARKER};

/// Manager for git hooks.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Self::with_hooks_dir(repo.git_dir().join("hooks"))
    }

    /// Create a hook manager for an explicit hooks directory.
    pub fn with_hooks_dir(hooks_dir: PathBuf) -> Result<Self> {
        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                CgateError::Hook(HookError::InstallFailed {
                    hook: "all".to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }

        Ok(Self { hooks_dir })
    }

    /// Install a specific hook.
    pub fn install_hook(&self, hook_name: &str, force: bool) -> Result<()> {
        let template = parse_hook(hook_name)?;
        self.install_template(&template, force)
    }

    /// Install all hooks.
    pub fn install_all(&self, force: bool) -> Result<()> {
        for template in HookTemplate::all() {
            self.install_template(template, force)?;
        }
        Ok(())
    }

    fn install_template(&self, template: &HookTemplate, force: bool) -> Result<()> {
        let name = template.filename();
        let hook_path = self.hooks_dir.join(name);
        let backup_path = self.hooks_dir.join(format!("{}.backup", name));

        if hook_path.exists() && !self.is_cgate_hook(&hook_path)? {
            if !force {
                return Err(CgateError::Hook(HookError::AlreadyExists {
                    hook: name.to_string(),
                }));
            }

            tracing::debug!("Backing up existing {} hook", name);
            fs::rename(&hook_path, &backup_path).map_err(|e| {
                CgateError::Hook(HookError::InstallFailed {
                    hook: name.to_string(),
                    message: format!("Failed to backup existing hook: {}", e),
                })
            })?;
        }

        let script = template.generate()?;
        fs::write(&hook_path, &script).map_err(|e| {
            CgateError::Hook(HookError::InstallFailed {
                hook: name.to_string(),
                message: format!("Failed to write hook: {}", e),
            })
        })?;

        make_executable(&hook_path).map_err(|e| {
            CgateError::Hook(HookError::InstallFailed {
                hook: name.to_string(),
                message: format!("Failed to set permissions: {}", e),
            })
        })?;

        tracing::debug!("Installed {} hook at {:?}", name, hook_path);
        Ok(())
    }

    /// Uninstall a specific hook, restoring any backup.
    pub fn uninstall_hook(&self, hook_name: &str) -> Result<()> {
        let template = parse_hook(hook_name)?;
        let name = template.filename();
        let hook_path = self.hooks_dir.join(name);
        let backup_path = self.hooks_dir.join(format!("{}.backup", name));

        if !hook_path.exists() {
            return Ok(());
        }

        if !self.is_cgate_hook(&hook_path)? {
            return Err(CgateError::Hook(HookError::RemoveFailed {
                hook: name.to_string(),
                message: "Hook was not installed by cgate".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            CgateError::Hook(HookError::RemoveFailed {
                hook: name.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                CgateError::Hook(HookError::RemoveFailed {
                    hook: name.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(())
    }

    /// Uninstall all hooks.
    pub fn uninstall_all(&self) -> Result<()> {
        for template in HookTemplate::all() {
            self.uninstall_hook(template.filename())?;
        }
        Ok(())
    }

    /// Installation state of every supported hook.
    pub fn status(&self) -> Vec<(String, bool)> {
        HookTemplate::all()
            .iter()
            .map(|template| {
                let hook_path = self.hooks_dir.join(template.filename());
                let installed = hook_path.exists() && self.is_cgate_hook(&hook_path).unwrap_or(false);
                (template.filename().to_string(), installed)
            })
            .collect()
    }

    /// Run an installed hook manually.
    pub fn run_hook(&self, hook_name: &str, args: &[String]) -> Result<()> {
        let template = parse_hook(hook_name)?;
        let hook_path = self.hooks_dir.join(template.filename());

        if !hook_path.exists() {
            return Err(CgateError::Hook(HookError::NotFound {
                hook: hook_name.to_string(),
            }));
        }

        let output = std::process::Command::new(&hook_path)
            .args(args)
            .output()
            .map_err(|e| {
                CgateError::Hook(HookError::ExecutionFailed {
                    hook: hook_name.to_string(),
                    message: format!("Failed to run hook: {}", e),
                })
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            return Err(CgateError::Hook(HookError::ExecutionFailed {
                hook: hook_name.to_string(),
                message: format!("{}{}", stdout, stderr).trim().to_string(),
            }));
        }

        print!("{}", String::from_utf8_lossy(&output.stdout));
        Ok(())
    }

    fn is_cgate_hook(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path).map_err(|e| {
            CgateError::Hook(HookError::ExecutionFailed {
                hook: path.display().to_string(),
                message: format!("Failed to read hook: {}", e),
            })
        })?;

        Ok(content.contains(HOOK_MARKER))
    }
}

fn parse_hook(hook_name: &str) -> Result<HookTemplate> {
    hook_name.parse::<HookTemplate>().map_err(|_| {
        CgateError::Hook(HookError::NotFound {
            hook: hook_name.to_string(),
        })
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
