mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, parse_config};
pub use model::{Config, GroupConfig, MAX_TUBE, ScanConfig};
