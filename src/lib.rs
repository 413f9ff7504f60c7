pub mod calc;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod input;
pub mod menu;
pub mod output;
pub mod units;

pub use config::ToolkitConfig;
pub use error::{ErrorKind, Result, ToolkitError};
pub use menu::Menu;
