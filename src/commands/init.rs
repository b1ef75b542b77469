use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, FlowDirError, Result};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(FlowDirError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# flowdir configuration file

[scan]
# How the filename grammar is applied (default: "substring")
#   "substring" - any part of the name may match
#   "anchored"  - the whole name must match
match_mode = "substring"

# Sort directory entries by name instead of filesystem order (default: false)
sort_entries = false

[group]
# Field used as group key: fullpath, group, label, material, tube-set, dataset
by = "group"

# Required tube numbers (0-9). Records with other tubes are dropped and only
# groups with a complete panel are kept. Empty keeps every group.
tubes = []

# Completeness rule when tubes are set (default: "exact-count")
#   "exact-count"    - group size equals the number of tubes
#   "exact-coverage" - exactly one file per tube
completeness = "exact-count"

# Group key order (default: "first-seen")
#   "first-seen" - order of first appearance
#   "sorted"     - lexicographic
key_order = "first-seen"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
