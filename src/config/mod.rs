mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, parse_config};
pub use model::{Config, DEFAULT_WIDTH, ReportConfig, ScanConfig};
pub use validation::{WIDTH_RANGE, validate_config};
