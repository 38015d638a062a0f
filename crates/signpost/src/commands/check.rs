//! `signpost check` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Reports every problem, not only the first.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, content) = self.site.load(None, None)?;
        let site = &config.site_resolved;

        output.highlight(&format!(
            "Checking {} against {} pages in {}",
            site.meta.title,
            content.len(),
            config.docs_resolved.source_dir.display()
        ));
        if site.ignore_dead_links {
            output.warning("Dead link check disabled");
        }

        let problems = site.check(&content);
        if problems.is_empty() {
            output.success("No problems found");
            return Ok(());
        }

        for problem in &problems {
            output.error(&format!("  {problem}"));
        }
        Err(CliError::Invalid {
            count: problems.len(),
        })
    }
}
