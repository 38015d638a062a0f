//! `signpost serve` command implementation.

use clap::Args;
use signpost_server::{run_server, server_config_from_config};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    #[command(flatten)]
    pub site: SiteArgs,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// Navigation problems are fatal: the server never starts with an
    /// invalid site.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();
        let (config, content) = self.site.load(self.host, self.port)?;
        config.site_resolved.validate(&content)?;

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Source directory: {} ({} pages)",
            config.docs_resolved.source_dir.display(),
            content.len()
        ));
        output.info(&format!(
            "Locales: {}",
            config
                .site_resolved
                .locales
                .iter()
                .map(|locale| locale.code.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ));

        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config).await?;

        Ok(())
    }
}
