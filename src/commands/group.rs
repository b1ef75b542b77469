use crate::cli::{Cli, CompletenessChoice, GroupArgs};
use crate::config::GroupConfig;
use crate::error::Result;
use crate::grouping::{CompletenessPolicy, GroupedResult, KeyOrder, RecordGrouper};
use crate::output::{ColorMode, GroupFormatter, JsonFormatter, OutputFormat, TextFormatter};
use crate::EXIT_CONFIG_ERROR;

use super::context::{
    color_choice_to_mode, exit_code, load_config, report_error, scan_roots, write_output,
};

const fn choice_to_policy(choice: CompletenessChoice) -> CompletenessPolicy {
    match choice {
        CompletenessChoice::ExactCount => CompletenessPolicy::ExactCount,
        CompletenessChoice::ExactCoverage => CompletenessPolicy::ExactCoverage,
    }
}

#[must_use]
pub fn run_group(args: &GroupArgs, cli: &Cli) -> i32 {
    match run_group_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Scan the roots and print the records grouped by the chosen field.
///
/// # Errors
/// Returns an error if configuration, root validation or output fails.
pub fn run_group_impl(args: &GroupArgs, cli: &Cli) -> Result<i32> {
    let options = &args.scan;
    let config = load_config(options.config.as_deref(), cli.no_config)?;

    let scanned = scan_roots(options, &config.scan)?;
    let grouper = build_grouper(args, &config.group);
    let grouped = grouper.group(scanned.records());
    log::info!(
        "Grouped {} record(s) by {} into {} group(s)",
        scanned.count(),
        grouper.field(),
        grouped.len()
    );

    let output = format_groups(
        options.format,
        &grouped,
        color_choice_to_mode(cli.color),
        cli.verbose,
    )?;
    write_output(options.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code(grouped.is_empty(), options.fail_on_empty))
}

/// Grouper from the config file with CLI overrides applied.
#[must_use]
pub fn build_grouper(args: &GroupArgs, config: &GroupConfig) -> RecordGrouper {
    let tubes = if args.all_tubes {
        Vec::new()
    } else {
        args.tubes.clone().unwrap_or_else(|| config.tubes.clone())
    };
    let completeness = args
        .policy
        .map_or(config.completeness, choice_to_policy);
    let key_order = if args.sorted_keys {
        KeyOrder::Sorted
    } else {
        config.key_order
    };

    RecordGrouper::new(args.by.unwrap_or(config.by))
        .with_tubes(tubes)
        .with_completeness(completeness)
        .with_key_order(key_order)
}

/// Render groups in the requested format.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_groups(
    format: OutputFormat,
    result: &GroupedResult,
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_mode, verbose).format_groups(result)
        }
        OutputFormat::Json => JsonFormatter.format_groups(result),
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
