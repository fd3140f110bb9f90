// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering of validation results.

use console::style;

use crate::i18n::Messages;
use crate::presets::{CommitMsgValidationResult, ValidationResult};

use super::args::OutputFormat;

/// Print a file validation result.
pub fn print_files_result(
    result: &ValidationResult,
    prefix: &str,
    messages: &Messages,
    verbose: bool,
    format: Option<OutputFormat>,
) {
    match format {
        Some(OutputFormat::Json) => {
            let json = serde_json::json!({
                "result": result,
                "prefix": prefix,
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        _ => print!("{}", render_files_text(result, prefix, messages, verbose)),
    }
}

/// Print a commit message validation result.
pub fn print_message_result(
    result: &CommitMsgValidationResult,
    messages: &Messages,
    format: Option<OutputFormat>,
) {
    match format {
        Some(OutputFormat::Json) => {
            println!(
                "{}",
                serde_json::to_string_pretty(result).unwrap_or_default()
            );
        }
        _ => print!("{}", render_message_text(result, messages)),
    }
}

fn render_files_text(
    result: &ValidationResult,
    prefix: &str,
    messages: &Messages,
    verbose: bool,
) -> String {
    let mut out = String::new();

    if result.stats().map(|s| s.total_files == 0).unwrap_or(false) {
        out.push_str(&format!("{} {}\n", style("·").dim(), messages.no_staged_files));
        return out;
    }

    if result.is_valid() {
        out.push_str(&format!("{} {}\n", style("✓").green().bold(), messages.files_passed));
        if let Some(path) = result.common_path() {
            let shown = if path.is_empty() { "." } else { path };
            out.push_str(&format!("  {}: {}\n", messages.common_path, style(shown).cyan()));
        }
        if !prefix.is_empty() {
            out.push_str(&format!("  {}: {}\n", messages.prefix, style(prefix).cyan()));
        }
    } else {
        out.push_str(&format!("{} {}\n", style("✗").red().bold(), messages.files_failed));
        for error in result.errors() {
            out.push_str(&format!("  {} {}\n", style("✗").red(), error));
        }
    }

    for warning in result.warnings() {
        out.push_str(&format!("  {} {}\n", style("⚠").yellow(), warning));
    }

    if verbose {
        if let Some(stats) = result.stats() {
            out.push_str(&format!(
                "  {}: {} {}, {} {}, {} {}, {} {}\n",
                style(messages.stats_header).dim(),
                stats.total_files,
                messages.total_files,
                stats.filtered_files,
                messages.checked_files,
                stats.ignored_files,
                messages.ignored_files,
                stats.unique_folders,
                messages.unique_folders
            ));
        }
        for file in result.files() {
            out.push_str(&format!("    {}\n", style(file).dim()));
        }
    }

    if !result.is_valid() {
        out.push_str(&format!("  {} {}\n", style("→").dim(), style(messages.split_hint).dim()));
        out.push_str(&format!("  {} {}\n", style("→").dim(), style(messages.bypass_hint).dim()));
    }

    out
}

fn render_message_text(result: &CommitMsgValidationResult, messages: &Messages) -> String {
    let mut out = String::new();

    if result.is_valid() {
        out.push_str(&format!("{} {}\n", style("✓").green().bold(), messages.message_passed));
    } else {
        out.push_str(&format!("{} {}\n", style("✗").red().bold(), messages.message_failed));
        for error in result.errors() {
            out.push_str(&format!("  {} {}\n", style("✗").red(), error));
        }
        out.push_str(&format!("  {} {}\n", style("→").dim(), style(messages.bypass_hint).dim()));
    }

    if let Some(prefix) = result.prefix() {
        out.push_str(&format!("  {}: {}\n", messages.prefix, style(prefix).cyan()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;
    use crate::presets::ValidationStats;

    fn en() -> &'static Messages {
        Messages::for_language(Language::En)
    }

    #[test]
    fn test_render_valid_files() {
        let result = ValidationResult::new(vec!["src/a/x.ts".to_string()])
            .with_common_path(Some("src/a".to_string()))
            .with_stats(ValidationStats {
                total_files: 1,
                filtered_files: 1,
                ignored_files: 0,
                unique_folders: 1,
            });
        let text = render_files_text(&result, "[src/a]", en(), false);
        assert!(text.contains(en().files_passed));
        assert!(text.contains("src/a"));
        assert!(text.contains("[src/a]"));
    }

    #[test]
    fn test_render_invalid_files_lists_errors() {
        let mut result = ValidationResult::new(Vec::new()).with_stats(ValidationStats {
            total_files: 2,
            filtered_files: 2,
            ignored_files: 0,
            unique_folders: 2,
        });
        result.push_error("Folder 'src/a' has 1 file(s): src/a/x.ts");
        result.push_error("Folder 'src/b' has 1 file(s): src/b/y.ts");

        let text = render_files_text(&result, "", en(), true);
        assert!(text.contains(en().files_failed));
        assert!(text.contains("src/b/y.ts"));
        assert!(text.contains(en().unique_folders));
        assert!(text.contains("--no-verify"));
    }

    #[test]
    fn test_render_no_files() {
        let result = ValidationResult::new(Vec::new()).with_stats(ValidationStats::default());
        let text = render_files_text(&result, "", en(), false);
        assert!(text.contains(en().no_staged_files));
    }

    #[test]
    fn test_render_message_in_korean() {
        let mut result = CommitMsgValidationResult::new();
        result.push_error("Invalid commit type 'x'");
        let ko = Messages::for_language(Language::Ko);
        let text = render_message_text(&result, ko);
        assert!(text.contains(ko.message_failed));
        assert!(text.contains("Invalid commit type"));
    }
}
