pub mod config;
pub mod context;
pub mod init;
pub mod report;
pub mod run;
pub mod validate;

pub use config::run_config;
pub use context::{Outcome, ScanSettings, report_options};
pub use init::{generate_config_template, run_init};
pub use report::run_report;
pub use run::run_default;
pub use validate::run_validate;
