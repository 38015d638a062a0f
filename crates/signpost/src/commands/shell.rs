//! `signpost shell` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the shell command.
#[derive(Args)]
pub(crate) struct ShellArgs {
    /// Page path, e.g. `/python/pytest/get_started`.
    path: String,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    #[command(flatten)]
    pub site: SiteArgs,
}

impl ShellArgs {
    /// Execute the shell command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, content) = self.site.load(None, None)?;
        config.site_resolved.validate(&content)?;

        let shell = config.site_resolved.page_shell(&self.path);
        let json = if self.compact {
            serde_json::to_string(&shell)?
        } else {
            serde_json::to_string_pretty(&shell)?
        };
        output.result(&json)?;

        Ok(())
    }
}
