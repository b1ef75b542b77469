pub mod context;
pub mod group;
pub mod init;
pub mod scan;

pub use context::{color_choice_to_mode, load_config, log_level, report_error, write_output};
pub use group::{build_grouper, format_groups, run_group, run_group_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use scan::{format_scan, run_scan, run_scan_impl};
