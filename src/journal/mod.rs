// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Journal of hook runs.
//!
//! One JSON object per line. When a maximum age is configured, entries
//! older than that are dropped every time a new entry is written, along
//! with any line that no longer parses.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CgateError, Result};
use crate::presets::{CommitMsgValidationResult, ValidationResult};

/// A single journal line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// RFC 3339 timestamp.
    pub timestamp: String,
    pub command: String,
    pub preset: String,
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_path: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub file_count: usize,
}

impl JournalEntry {
    /// Entry for a file validation.
    pub fn for_files(preset: &str, result: &ValidationResult, now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now.to_rfc3339(),
            command: "check".to_string(),
            preset: preset.to_string(),
            valid: result.is_valid(),
            common_path: result.common_path().map(str::to_string),
            errors: result.errors().to_vec(),
            file_count: result.stats().map(|s| s.total_files).unwrap_or(result.files().len()),
        }
    }

    /// Entry for a commit message validation.
    pub fn for_message(
        preset: &str,
        result: &CommitMsgValidationResult,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp: now.to_rfc3339(),
            command: "check-msg".to_string(),
            preset: preset.to_string(),
            valid: result.is_valid(),
            common_path: None,
            errors: result.errors().to_vec(),
            file_count: 0,
        }
    }

    fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// Append-only log file with age-based pruning.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
    max_age_hours: Option<u64>,
}

impl Journal {
    /// Create a journal at `path`.
    pub fn new(path: impl Into<PathBuf>, max_age_hours: Option<u64>) -> Self {
        Self {
            path: path.into(),
            max_age_hours,
        }
    }

    /// Resolve the configured log file against the repository root.
    pub fn in_repo(root: &Path, log_file: &Path, max_age_hours: Option<u64>) -> Self {
        if log_file.is_absolute() {
            Self::new(log_file, max_age_hours)
        } else {
            Self::new(root.join(log_file), max_age_hours)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an entry, pruning stale ones first when a max age is set.
    pub fn record(&self, entry: &JournalEntry, now: DateTime<Utc>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let line = serde_json::to_string(entry).map_err(|e| CgateError::WithContext {
            context: "journal".to_string(),
            message: e.to_string(),
        })?;

        match self.max_age_hours {
            Some(hours) => {
                let mut kept = match prune_cutoff(now, hours) {
                    Some(cutoff) => self.entries_since(cutoff)?,
                    None => self.entries_since(DateTime::<Utc>::MIN_UTC)?,
                };
                kept.push(line);
                let mut content = kept.join("\n");
                content.push('\n');
                fs::write(&self.path, content)?;
            }
            None => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?;
                writeln!(file, "{}", line)?;
            }
        }

        Ok(())
    }

    /// Read all parseable entries.
    pub fn entries(&self) -> Result<Vec<JournalEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(content
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect())
    }

    /// Raw lines of entries recorded at or after `cutoff`.
    fn entries_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let kept: Vec<String> = content
            .lines()
            .filter(|line| {
                serde_json::from_str::<JournalEntry>(line)
                    .ok()
                    .and_then(|entry| entry.recorded_at())
                    .map(|at| at >= cutoff)
                    .unwrap_or(false)
            })
            .map(str::to_string)
            .collect();

        tracing::debug!(
            "Journal {:?}: keeping {} of {} line(s)",
            self.path,
            kept.len(),
            content.lines().count()
        );
        Ok(kept)
    }
}

/// Oldest timestamp kept for a max age. `None` when the age reaches past
/// the representable range, in which case nothing is old enough to drop.
fn prune_cutoff(now: DateTime<Utc>, max_age_hours: u64) -> Option<DateTime<Utc>> {
    let hours = i64::try_from(max_age_hours).ok()?;
    now.checked_sub_signed(Duration::try_hours(hours)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn entry_at(at: DateTime<Utc>, valid: bool) -> JournalEntry {
        JournalEntry {
            timestamp: at.to_rfc3339(),
            command: "check".to_string(),
            preset: "folder-based".to_string(),
            valid,
            common_path: Some("src".to_string()),
            errors: Vec::new(),
            file_count: 2,
        }
    }

    #[test]
    fn test_append_without_pruning() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("logs/cgate.log"), None);
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        journal.record(&entry_at(now - Duration::days(30), true), now).unwrap();
        journal.record(&entry_at(now, false), now).unwrap();

        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(!entries[1].valid);
    }

    #[test]
    fn test_prunes_old_entries() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("cgate.log"), Some(24));
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        journal
            .record(&entry_at(now - Duration::hours(48), true), now - Duration::hours(48))
            .unwrap();
        journal
            .record(&entry_at(now - Duration::hours(2), true), now - Duration::hours(2))
            .unwrap();
        journal.record(&entry_at(now, false), now).unwrap();

        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.recorded_at().unwrap() >= now - Duration::hours(24)));
    }

    #[test]
    fn test_pruning_drops_garbage_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cgate.log");
        fs::write(&path, "not json\n").unwrap();

        let journal = Journal::new(&path, Some(1));
        let now = Utc::now();
        journal.record(&entry_at(now, true), now).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("not json"));
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_huge_max_age_keeps_everything() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("cgate.log"), Some(100_000_000_000));
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let old = now - Duration::days(3650);

        journal.record(&entry_at(old, true), old).unwrap();
        journal.record(&entry_at(now, true), now).unwrap();

        assert_eq!(journal.entries().unwrap().len(), 2);
    }

    #[test]
    fn test_prune_cutoff_out_of_range() {
        let now = Utc::now();
        assert_eq!(prune_cutoff(now, u64::MAX), None);
        assert_eq!(prune_cutoff(now, 100_000_000_000), None);
        assert_eq!(prune_cutoff(now, 1), Some(now - Duration::hours(1)));
    }

    #[test]
    fn test_in_repo_resolution() {
        let root = Path::new("/repo");
        let journal = Journal::in_repo(root, Path::new(".cgate.log"), None);
        assert_eq!(journal.path(), Path::new("/repo/.cgate.log"));
    }

    #[test]
    fn test_entry_from_result() {
        let mut result = ValidationResult::new(vec!["a/x.rs".to_string()]);
        result.push_error("mismatch");
        let now = Utc::now();
        let entry = JournalEntry::for_files("folder-based", &result, now);

        assert!(!entry.valid);
        assert_eq!(entry.errors, vec!["mismatch"]);
        assert_eq!(entry.file_count, 1);
        assert_eq!(entry.command, "check");
    }
}
