//! Configuration file loading for doc-analyst
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ANALYST_`-prefixed environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./analyst.toml` or `./.analyst.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/doc-analyst/config.toml`
//! 5. Fallback: `~/.config/doc-analyst/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAnalysisConfig, FileConfig, FileOutputConfig, FileOutputFormat, FileRemoteConfig,
    FileRetryConfig,
};
pub use loader::ConfigLoader;
