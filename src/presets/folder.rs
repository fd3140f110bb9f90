// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Folder-based preset.
//!
//! Every non-ignored staged file is cut down to its first N directory
//! segments, N being the file's effective depth. The commit passes when all
//! files end up in the same folder.

use std::collections::BTreeMap;

use crate::config::{CgateConfig, Depth};

use super::matcher::{match_any, normalize_path};
use super::preset::{PrefixSource, Preset};
use super::result::{CommitMsgValidationResult, ValidationResult, ValidationStats};

/// Requires all staged files to share one folder.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderBasedPreset;

impl FolderBasedPreset {
    pub const NAME: &'static str = "folder-based";
}

impl Preset for FolderBasedPreset {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "All staged files must live in the same folder at the configured depth"
    }

    fn validate_files(&self, files: &[String], config: &CgateConfig) -> ValidationResult {
        let (ignored, candidates): (Vec<&String>, Vec<&String>) = files
            .iter()
            .partition(|file| match_any(file, &config.ignore_paths));

        tracing::debug!(
            "folder-based: {} staged, {} ignored, depth {}",
            files.len(),
            ignored.len(),
            config.depth
        );

        let candidate_files: Vec<String> = candidates.iter().map(|f| f.to_string()).collect();

        if candidates.is_empty() {
            return ValidationResult::new(candidate_files).with_stats(ValidationStats {
                total_files: files.len(),
                filtered_files: 0,
                ignored_files: ignored.len(),
                unique_folders: 0,
            });
        }

        let overrides = DepthOverrides::new(&config.depth_overrides);
        let mut folders: BTreeMap<String, Vec<&str>> = BTreeMap::new();

        for file in &candidates {
            let path = normalize_path(file);
            let depth = effective_depth(&path, config, &overrides);
            let folder = truncate_path(&path, depth);
            tracing::trace!("{} -> '{}' (depth {})", file, folder, depth);
            folders.entry(folder).or_default().push(file.as_str());
        }

        let stats = ValidationStats {
            total_files: files.len(),
            filtered_files: candidates.len(),
            ignored_files: ignored.len(),
            unique_folders: folders.len(),
        };

        let common_path = if folders.len() == 1 {
            folders.keys().next().cloned()
        } else {
            None
        };

        let mut result = ValidationResult::new(candidate_files)
            .with_common_path(common_path)
            .with_stats(stats);

        if folders.len() > 1 {
            for (folder, members) in &folders {
                result.push_error(format!(
                    "Folder '{}' has {} file(s): {}",
                    display_folder(folder),
                    members.len(),
                    members.join(", ")
                ));
            }
            result.push_warning(format!(
                "Staged files span {} folders; commit one folder at a time",
                folders.len()
            ));
        }

        if let Some(max_files) = config.max_files {
            if candidates.len() > max_files {
                result.push_error(format!(
                    "Too many files in one commit: {} (max: {})",
                    candidates.len(),
                    max_files
                ));
            }
        }

        result
    }

    fn validate_commit_message(
        &self,
        _message: &str,
        _config: &CgateConfig,
    ) -> CommitMsgValidationResult {
        CommitMsgValidationResult::new()
    }

    fn commit_prefix(&self, source: PrefixSource<'_>, config: &CgateConfig) -> String {
        match source {
            PrefixSource::Files {
                all_ignored: true, ..
            } => format!("[{}]", config.ignored_prefix),
            PrefixSource::Files {
                common_path: Some(path),
                ..
            } if !path.is_empty() => format!("[{}]", path),
            PrefixSource::Files {
                common_path: Some(_),
                ..
            } => format!("[{}]", config.root_prefix),
            PrefixSource::Files {
                common_path: None, ..
            }
            | PrefixSource::Message(_) => String::new(),
        }
    }
}

/// Depth overrides ordered for longest-prefix lookup.
///
/// Sorted by prefix length (longest first), then lexicographically.
#[derive(Debug)]
struct DepthOverrides {
    entries: Vec<(String, usize)>,
}

impl DepthOverrides {
    fn new(raw: &BTreeMap<String, usize>) -> Self {
        let mut entries: Vec<(String, usize)> = raw
            .iter()
            .map(|(prefix, depth)| (normalize_path(prefix), *depth))
            .collect();
        entries.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        Self { entries }
    }

    /// Depth of the longest prefix containing `path`, matched on whole
    /// segments (`src/a` covers `src/a/x.rs` but not `src/ab/x.rs`).
    fn resolve(&self, path: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(prefix, _)| {
                prefix.is_empty()
                    || path == prefix
                    || path
                        .strip_prefix(prefix.as_str())
                        .map(|rest| rest.starts_with('/'))
                        .unwrap_or(false)
            })
            .map(|(_, depth)| *depth)
    }
}

fn effective_depth(path: &str, config: &CgateConfig, overrides: &DepthOverrides) -> usize {
    if let Some(depth) = overrides.resolve(path) {
        return depth;
    }
    match config.depth {
        Depth::Fixed(depth) => depth,
        Depth::Auto => auto_depth(path, config.max_depth),
    }
}

/// Smallest depth whose truncation still names a real folder, capped at
/// `max_depth`.
fn auto_depth(path: &str, max_depth: usize) -> usize {
    (1..=max_depth)
        .find(|depth| !truncate_path(path, *depth).is_empty())
        .unwrap_or(max_depth)
}

/// First `depth` directory segments of a normalized path. The filename is
/// never part of the result.
fn truncate_path(path: &str, depth: usize) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let dir_count = segments.len().saturating_sub(1);
    segments[..dir_count.min(depth)].join("/")
}

fn display_folder(folder: &str) -> &str {
    if folder.is_empty() {
        "(root)"
    } else {
        folder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    fn config_with_depth(depth: Depth) -> CgateConfig {
        CgateConfig {
            depth,
            ..CgateConfig::default()
        }
    }

    #[test]
    fn test_same_folder_depth_two() {
        let config = config_with_depth(Depth::Fixed(2));
        let result = FolderBasedPreset.validate_files(&files(&["src/a/x.ts", "src/a/y.ts"]), &config);

        assert!(result.is_valid());
        assert_eq!(result.common_path(), Some("src/a"));
        assert_eq!(result.stats().unwrap().unique_folders, 1);
    }

    #[test]
    fn test_different_folders_depth_two() {
        let config = config_with_depth(Depth::Fixed(2));
        let result = FolderBasedPreset.validate_files(&files(&["src/a/x.ts", "src/b/y.ts"]), &config);

        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 2);
        assert!(result.errors()[0].contains("src/a"));
        assert!(result.errors()[0].contains("src/a/x.ts"));
        assert!(result.errors()[1].contains("src/b"));
        assert_eq!(result.common_path(), None);
    }

    #[test]
    fn test_one_error_per_distinct_folder() {
        let config = config_with_depth(Depth::Fixed(1));
        let result = FolderBasedPreset.validate_files(
            &files(&["a/1.rs", "b/2.rs", "c/3.rs", "a/4.rs", "README.md"]),
            &config,
        );

        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 4);
        assert!(result.errors().iter().any(|e| e.contains("(root)")));
        assert_eq!(result.stats().unwrap().unique_folders, 4);
    }

    #[test]
    fn test_auto_depth_single_doc() {
        let config = CgateConfig {
            depth: Depth::Auto,
            max_depth: 5,
            ..CgateConfig::default()
        };
        let result = FolderBasedPreset.validate_files(&files(&["docs/readme.md"]), &config);

        assert!(result.is_valid());
        assert_eq!(result.common_path(), Some("docs"));
    }

    #[test]
    fn test_auto_depth_groups_by_top_folder() {
        let config = config_with_depth(Depth::Auto);
        let result = FolderBasedPreset.validate_files(
            &files(&["src/a/x.ts", "src/b/deep/y.ts"]),
            &config,
        );

        assert!(result.is_valid());
        assert_eq!(result.common_path(), Some("src"));
    }

    #[test]
    fn test_auto_depth_root_files() {
        let config = config_with_depth(Depth::Auto);
        let result =
            FolderBasedPreset.validate_files(&files(&["Cargo.toml", "README.md"]), &config);

        assert!(result.is_valid());
        assert_eq!(result.common_path(), Some(""));
    }

    #[test]
    fn test_auto_depth_rule() {
        assert_eq!(auto_depth("docs/readme.md", 5), 1);
        assert_eq!(auto_depth("a/b/c/d.rs", 5), 1);
        assert_eq!(auto_depth("README.md", 5), 5);
        assert_eq!(auto_depth("README.md", 2), 2);
    }

    #[test]
    fn test_truncate_path() {
        assert_eq!(truncate_path("src/a/x.ts", 2), "src/a");
        assert_eq!(truncate_path("src/a/x.ts", 1), "src");
        assert_eq!(truncate_path("src/x.ts", 3), "src");
        assert_eq!(truncate_path("x.ts", 2), "");
        assert_eq!(truncate_path("", 2), "");
    }

    #[test]
    fn test_shallow_file_uses_available_depth() {
        let config = config_with_depth(Depth::Fixed(3));
        let result = FolderBasedPreset.validate_files(&files(&["src/main.rs"]), &config);

        assert!(result.is_valid());
        assert_eq!(result.common_path(), Some("src"));
    }

    #[test]
    fn test_all_ignored_passes() {
        let config = CgateConfig {
            depth: Depth::Fixed(2),
            ignore_paths: vec!["*.md".to_string(), "docs/**".to_string()],
            ..CgateConfig::default()
        };
        let staged = files(&["README.md", "docs/a/guide.md", "docs/b/api.md"]);
        let result = FolderBasedPreset.validate_files(&staged, &config);

        assert!(result.is_valid());
        assert_eq!(result.common_path(), None);
        assert_eq!(result.stats().unwrap().ignored_files, staged.len());
        assert!(result.all_ignored());
    }

    #[test]
    fn test_empty_file_list() {
        let config = CgateConfig::default();
        let result = FolderBasedPreset.validate_files(&[], &config);

        assert!(result.is_valid());
        assert_eq!(result.common_path(), None);
        assert_eq!(result.stats().unwrap().total_files, 0);
        assert!(!result.all_ignored());
    }

    #[test]
    fn test_ignored_files_do_not_conflict() {
        let config = CgateConfig {
            depth: Depth::Fixed(2),
            ignore_paths: vec!["*.lock".to_string()],
            ..CgateConfig::default()
        };
        let result = FolderBasedPreset
            .validate_files(&files(&["src/a/x.ts", "Cargo.lock", "src/a/y.ts"]), &config);

        assert!(result.is_valid());
        assert_eq!(result.common_path(), Some("src/a"));

        let stats = result.stats().unwrap();
        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.filtered_files, 2);
        assert_eq!(stats.ignored_files, 1);
        assert_eq!(result.files(), ["src/a/x.ts", "src/a/y.ts"]);
    }

    #[test]
    fn test_max_files_alone() {
        let config = CgateConfig {
            depth: Depth::Fixed(1),
            max_files: Some(2),
            ..CgateConfig::default()
        };
        let result =
            FolderBasedPreset.validate_files(&files(&["src/a.rs", "src/b.rs", "src/c.rs"]), &config);

        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].contains("Too many files"));
        assert_eq!(result.common_path(), Some("src"));
    }

    #[test]
    fn test_max_files_and_mismatch_together() {
        let config = CgateConfig {
            depth: Depth::Fixed(1),
            max_files: Some(1),
            ..CgateConfig::default()
        };
        let result = FolderBasedPreset.validate_files(&files(&["src/a.rs", "tests/b.rs"]), &config);

        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 3);
        assert!(result.errors().iter().any(|e| e.contains("'src'")));
        assert!(result.errors().iter().any(|e| e.contains("'tests'")));
        assert!(result.errors().iter().any(|e| e.contains("Too many files")));
    }

    #[test]
    fn test_max_files_counts_only_candidates() {
        let config = CgateConfig {
            depth: Depth::Fixed(1),
            max_files: Some(1),
            ignore_paths: vec!["*.md".to_string()],
            ..CgateConfig::default()
        };
        let result = FolderBasedPreset
            .validate_files(&files(&["src/a.rs", "README.md", "CHANGELOG.md"]), &config);

        assert!(result.is_valid());
    }

    #[test]
    fn test_depth_override_longest_prefix() {
        let mut config = config_with_depth(Depth::Fixed(1));
        config.depth_overrides.insert("packages".to_string(), 2);
        config.depth_overrides.insert("packages/legacy".to_string(), 3);

        let result = FolderBasedPreset.validate_files(
            &files(&["packages/legacy/old/a.js", "packages/legacy/old/b.js"]),
            &config,
        );
        assert!(result.is_valid());
        assert_eq!(result.common_path(), Some("packages/legacy/old"));

        let result = FolderBasedPreset.validate_files(
            &files(&["packages/ui/button.js", "packages/ui/theme/colors.js"]),
            &config,
        );
        assert!(result.is_valid());
        assert_eq!(result.common_path(), Some("packages/ui"));
    }

    #[test]
    fn test_depth_override_segment_boundary() {
        let mut raw = BTreeMap::new();
        raw.insert("src/a".to_string(), 3);
        raw.insert("src/".to_string(), 2);
        let overrides = DepthOverrides::new(&raw);

        assert_eq!(overrides.resolve("src/a/b/c.rs"), Some(3));
        assert_eq!(overrides.resolve("src/ab/c.rs"), Some(2));
        assert_eq!(overrides.resolve("srcx/c.rs"), None);
    }

    #[test]
    fn test_depth_override_beats_auto() {
        let mut config = config_with_depth(Depth::Auto);
        config.depth_overrides.insert("apps".to_string(), 2);

        let result = FolderBasedPreset
            .validate_files(&files(&["apps/web/index.ts", "apps/api/main.ts"]), &config);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let config = CgateConfig {
            depth: Depth::Fixed(2),
            ignore_paths: vec!["*.md".to_string()],
            max_files: Some(2),
            ..CgateConfig::default()
        };
        let staged = files(&["src/a/x.ts", "src/b/y.ts", "README.md", "lib/z.ts"]);

        let first = FolderBasedPreset.validate_files(&staged, &config);
        let second = FolderBasedPreset.validate_files(&staged, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_paths_are_normalized() {
        let config = config_with_depth(Depth::Fixed(2));
        let result =
            FolderBasedPreset.validate_files(&files(&["./src/a/x.ts", "src/a/y.ts"]), &config);

        assert!(result.is_valid());
        assert_eq!(result.common_path(), Some("src/a"));
    }

    #[test]
    fn test_commit_prefix() {
        let config = CgateConfig::default();
        let preset = FolderBasedPreset;

        let prefix = preset.commit_prefix(
            PrefixSource::Files {
                common_path: Some("src/a"),
                all_ignored: false,
            },
            &config,
        );
        assert_eq!(prefix, "[src/a]");

        let prefix = preset.commit_prefix(
            PrefixSource::Files {
                common_path: Some(""),
                all_ignored: false,
            },
            &config,
        );
        assert_eq!(prefix, "[root]");

        let prefix = preset.commit_prefix(
            PrefixSource::Files {
                common_path: None,
                all_ignored: true,
            },
            &config,
        );
        assert_eq!(prefix, "[misc]");

        let prefix = preset.commit_prefix(
            PrefixSource::Files {
                common_path: None,
                all_ignored: false,
            },
            &config,
        );
        assert_eq!(prefix, "");

        assert_eq!(preset.commit_prefix(PrefixSource::Message("feat: x"), &config), "");
    }

    #[test]
    fn test_mismatch_warning_names_no_depth() {
        let mut config = config_with_depth(Depth::Auto);
        config.depth_overrides.insert("packages".to_string(), 2);

        let result = FolderBasedPreset
            .validate_files(&files(&["packages/ui/a.ts", "packages/api/b.ts"]), &config);

        assert!(!result.is_valid());
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].contains("2 folders"));
        assert!(!result.warnings()[0].contains("depth"));
    }

    #[test]
    fn test_no_message_policy() {
        let result = FolderBasedPreset.validate_commit_message("anything", &CgateConfig::default());
        assert!(result.is_valid());
        assert_eq!(result.prefix(), None);
    }
}
