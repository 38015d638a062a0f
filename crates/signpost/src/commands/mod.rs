//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod serve;
pub(crate) mod shell;

use std::path::PathBuf;

use clap::Args;
use signpost_config::{CliSettings, Config, ConfigError};
use signpost_nav::ContentIndex;

pub(crate) use check::CheckArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use shell::ShellArgs;

/// Arguments shared by every command that loads a site.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover signpost.toml).
    #[arg(short, long, env = "SIGNPOST_CONFIG")]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Accept internal links to pages that do not exist.
    #[arg(long)]
    ignore_dead_links: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Load the configuration and scan the docs tree it points at.
    pub(crate) fn load(
        &self,
        host: Option<String>,
        port: Option<u16>,
    ) -> Result<(Config, ContentIndex), ConfigError> {
        let cli_settings = CliSettings {
            host,
            port,
            source_dir: self.source_dir.clone(),
            ignore_dead_links: self.ignore_dead_links.then_some(true),
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let content = signpost_fs::scan_content(&config.docs_resolved.source_dir);

        Ok((config, content))
    }
}
