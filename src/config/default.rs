// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values and the `cgate init` templates.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# cgate configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Preset to enforce: "folder-based" or "conventional-commits"
preset = "folder-based"
enabled = true

# Journal of hook runs (relative to the repository root)
log_file = ".cgate.log"
log_max_age_hours = 168

# Output language: "en" or "ko"
language = "en"
verbose = false

# Folder grouping depth: a positive integer or "auto"
depth = 2
max_depth = 5

# Files matching these globs are left out of the folder check
ignore_paths = ["*.md", "*.lock", ".github/**"]

# Reject commits touching more non-ignored files than this
max_files = 50

# Prefix markers for root-level and fully ignored commits
root_prefix = "root"
ignored_prefix = "misc"

# Conventional commit vocabulary (used by the conventional-commits preset)
types = ["feat", "fix", "docs", "style", "refactor", "perf", "test", "chore", "revert", "build", "ci"]
scopes = []
require_scope = false

# Deeper grouping for selected subtrees (longest prefix wins)
[depth_overrides]
"packages" = 2
"packages/legacy" = 3
"#
}

/// Minimal configuration for the given preset.
pub fn minimal_config(preset: &str) -> String {
    format!(
        r#"# cgate configuration (minimal)
preset = "{}"
depth = "auto"
"#,
        preset
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, Depth};

    #[test]
    fn test_example_config_parseable() {
        let config = parse_config(example_config()).expect("Example config should parse");
        assert_eq!(config.depth, Depth::Fixed(2));
        assert_eq!(config.depth_overrides.len(), 2);
    }

    #[test]
    fn test_minimal_config_parseable() {
        let config = parse_config(&minimal_config("conventional-commits")).unwrap();
        assert_eq!(config.preset, "conventional-commits");
        assert_eq!(config.depth, Depth::Auto);
    }
}
