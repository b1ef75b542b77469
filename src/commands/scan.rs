use crate::cli::{Cli, ScanArgs};
use crate::error::Result;
use crate::output::{ColorMode, JsonFormatter, OutputFormat, ScanFormatter, TextFormatter};
use crate::scanner::ScanResult;
use crate::EXIT_CONFIG_ERROR;

use super::context::{
    color_choice_to_mode, exit_code, load_config, report_error, scan_roots, write_output,
};

#[must_use]
pub fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// List every matching file under the requested roots.
///
/// # Errors
/// Returns an error if configuration, root validation or output fails.
pub fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> Result<i32> {
    let options = &args.scan;
    let config = load_config(options.config.as_deref(), cli.no_config)?;

    let result = scan_roots(options, &config.scan)?;

    let output = format_scan(
        options.format,
        &result,
        color_choice_to_mode(cli.color),
        cli.verbose,
    )?;
    write_output(options.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code(result.is_empty(), options.fail_on_empty))
}

/// Render a scan in the requested format.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_scan(
    format: OutputFormat,
    result: &ScanResult,
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format_scan(result),
        OutputFormat::Json => JsonFormatter.format_scan(result),
    }
}
