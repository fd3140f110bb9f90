// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::path::{Path, PathBuf};

use crate::config::CgateConfig;
use crate::error::{CgateError, ConfigError, Result, ResultExt};
use crate::git;
use crate::i18n::Messages;
use crate::journal::{Journal, JournalEntry};
use crate::presets::PresetRegistry;
use crate::validator::CommitValidator;

use super::args::{CheckArgs, CheckMsgArgs, Cli, Commands, HooksAction, InitArgs, PrefixArgs};
use super::report;

/// prepare-commit-msg sources for which the message is left untouched.
const SKIPPED_PREFIX_SOURCES: &[&str] = &["merge", "squash", "commit"];

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = if let Some(config_path) = &cli.config {
        CgateConfig::load_from(config_path)?
    } else {
        CgateConfig::load()?
    };
    if cli.verbose {
        config.verbose = true;
    }

    let registry = PresetRegistry::builtin();

    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, config, &registry, args),
        Commands::CheckMsg(args) => run_check_msg(&cli, config, &registry, args),
        Commands::Prefix(args) => run_prefix(config, &registry, args),
        Commands::Hooks(args) => run_hooks(args.action),
        Commands::Presets => run_presets(&registry),
        Commands::Init(args) => run_init(&registry, args),
        Commands::Version => run_version(),
    }
}

/// Run the check command.
fn run_check(
    cli: &Cli,
    config: CgateConfig,
    registry: &PresetRegistry,
    args: CheckArgs,
) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let files = if args.files.is_empty() {
        git::staged_files()?
    } else {
        args.files
    };

    let messages = Messages::for_language(config.language);
    let verbose = config.verbose;
    let validator = CommitValidator::new(config, registry);

    let result = validator.validate(&files)?;
    let prefix = validator.commit_prefix(result.common_path(), result.all_ignored())?;

    report::print_files_result(&result, &prefix, messages, verbose, cli.format);

    if !args.no_log {
        let entry = JournalEntry::for_files(&validator.config().preset, &result, chrono::Utc::now());
        record(validator.config(), &entry);
    }

    if result.is_valid() {
        Ok(())
    } else {
        Err(CgateError::ValidationFailed {
            count: result.errors().len(),
        })
    }
}

/// Run the check-msg command.
fn run_check_msg(
    cli: &Cli,
    config: CgateConfig,
    registry: &PresetRegistry,
    args: CheckMsgArgs,
) -> Result<()> {
    tracing::debug!("Running check-msg command with args: {:?}", args);

    let message = match (&args.message, &args.file) {
        (Some(message), _) => message.clone(),
        (None, Some(file)) => read_message_file(file)?,
        (None, None) => String::new(),
    };

    let messages = Messages::for_language(config.language);
    let validator = CommitValidator::new(config, registry);
    let result = validator.validate_commit_message(&strip_comments(&message))?;

    report::print_message_result(&result, messages, cli.format);

    if !args.no_log {
        let entry =
            JournalEntry::for_message(&validator.config().preset, &result, chrono::Utc::now());
        record(validator.config(), &entry);
    }

    if result.is_valid() {
        Ok(())
    } else {
        Err(CgateError::ValidationFailed {
            count: result.errors().len(),
        })
    }
}

/// Run the prefix command.
fn run_prefix(config: CgateConfig, registry: &PresetRegistry, args: PrefixArgs) -> Result<()> {
    tracing::debug!("Running prefix command with args: {:?}", args);

    if let Some(source) = args.source.as_deref() {
        if SKIPPED_PREFIX_SOURCES.contains(&source) {
            tracing::debug!("Leaving message untouched for source '{}'", source);
            return Ok(());
        }
    }

    if !config.enabled {
        tracing::debug!("Validation disabled, no prefix generated");
        return Ok(());
    }

    let files = git::staged_files()?;
    let validator = CommitValidator::new(config, registry);
    let result = validator.validate(&files)?;

    if !result.is_valid() {
        tracing::debug!("Staged files are invalid, no prefix generated");
        return Ok(());
    }

    let prefix = validator.commit_prefix(result.common_path(), result.all_ignored())?;
    if prefix.is_empty() {
        return Ok(());
    }

    match args.message_file {
        Some(path) => prepend_prefix(&path, &prefix),
        None => {
            println!("{}", prefix);
            Ok(())
        }
    }
}

/// Run the hooks command.
fn run_hooks(action: HooksAction) -> Result<()> {
    use crate::hooks::HookManager;

    tracing::debug!("Running hooks command");

    let manager = HookManager::new()?;

    match action {
        HooksAction::Install { hook, force } => {
            if let Some(hook_name) = hook {
                manager.install_hook(&hook_name, force)?;
                println!("✓ Installed {} hook", hook_name);
            } else {
                manager.install_all(force)?;
                println!("✓ Installed all hooks");
            }
        }
        HooksAction::Uninstall { hook } => {
            if let Some(hook_name) = hook {
                manager.uninstall_hook(&hook_name)?;
                println!("✓ Uninstalled {} hook", hook_name);
            } else {
                manager.uninstall_all()?;
                println!("✓ Uninstalled all hooks");
            }
        }
        HooksAction::Status => {
            for (hook, installed) in manager.status() {
                let icon = if installed { "✓" } else { "✗" };
                println!("{} {}", icon, hook);
            }
        }
        HooksAction::Run { hook, args } => {
            manager.run_hook(&hook, &args)?;
        }
    }

    Ok(())
}

/// Run the presets command.
fn run_presets(registry: &PresetRegistry) -> Result<()> {
    for (name, preset) in registry.get_all() {
        println!("{:<22} {}", name, preset.description());
    }
    Ok(())
}

/// Run the init command.
fn run_init(registry: &PresetRegistry, args: InitArgs) -> Result<()> {
    use crate::config::default::{example_config, minimal_config};

    tracing::debug!("Running init command with args: {:?}", args);

    if !registry.has(&args.preset) {
        return Err(CgateError::Config(ConfigError::UnknownPreset {
            name: args.preset,
            available: registry.list(),
        }));
    }

    let config_path = Path::new("cgate.toml");

    if config_path.exists() && !args.force {
        return Err(CgateError::WithContext {
            context: "init".to_string(),
            message: "cgate.toml already exists. Use --force to overwrite.".to_string(),
        });
    }

    let content = if args.minimal {
        minimal_config(&args.preset)
    } else {
        example_config().replacen(
            "preset = \"folder-based\"",
            &format!("preset = \"{}\"", args.preset),
            1,
        )
    };

    std::fs::write(config_path, content).context("Failed to write configuration")?;

    println!("✓ Created cgate.toml");

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cgate {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

fn read_message_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).context(format!("Failed to read {}", path.display()))
}

/// Drop git comment lines.
fn strip_comments(message: &str) -> String {
    message
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim_start_matches('\n')
        .to_string()
}

/// Prepend `prefix` to the message file unless it is already there.
fn prepend_prefix(path: &Path, prefix: &str) -> Result<()> {
    let content = read_message_file(path)?;
    if content.starts_with(prefix) {
        return Ok(());
    }

    let updated = format!("{} {}", prefix, content);
    std::fs::write(path, updated).context(format!("Failed to write {}", path.display()))?;
    tracing::debug!("Prepended '{}' to {:?}", prefix, path);
    Ok(())
}

/// Append to the journal. Failures never block a commit.
fn record(config: &CgateConfig, entry: &JournalEntry) {
    let root = git::open_repo()
        .map(|repo| repo.workdir().to_path_buf())
        .or_else(|_| std::env::current_dir())
        .unwrap_or_else(|_| PathBuf::from("."));

    let journal = Journal::in_repo(&root, &config.log_file, config.log_max_age_hours);
    if let Err(e) = journal.record(entry, chrono::Utc::now()) {
        tracing::warn!("Failed to write log file {:?}: {}", journal.path(), e);
    }
}
