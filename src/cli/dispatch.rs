// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::commit::CommitMessageFile;
use crate::config::{self, GacConfig};
use crate::error::{GacError, Result};
use crate::git::GitDiffSource;
use crate::hooks::{HookManager, InstallResult, HOOK_NAME};
use crate::llm::{CompletionBackend, CompletionClient, PromptBuilder, PromptText};
use crate::pipeline::{Outcome, Pipeline};
use clap::CommandFactory;
use console::{style, Term};
use std::cell::OnceCell;
use std::path::Path;

use super::args::{Cli, Commands};
use super::progress::WithSpinner;

const BANNER: &str = "=======================================";

/// Run the CLI with the given arguments.
///
/// Returns the process exit code. Errors are left to the caller to report.
pub fn run(cli: Cli) -> Result<i32> {
    match (&cli.command, &cli.commit_msg_file) {
        (Some(Commands::Install { force }), _) => run_install(*force),
        (Some(Commands::Uninstall), _) => run_uninstall(),
        (Some(Commands::Version), _) => run_version(),
        (None, Some(path)) => run_hook(&cli, path),
        (None, None) => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Err(GacError::WithContext {
                context: "usage".to_string(),
                message: "Missing commit message file".to_string(),
            })
        }
    }
}

fn load_config(cli: &Cli) -> Result<GacConfig> {
    match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
}

/// Configuration read on first use, so runs that never reach the model never
/// touch the config files.
struct LazyConfig<'a> {
    cli: &'a Cli,
    loaded: OnceCell<GacConfig>,
}

impl<'a> LazyConfig<'a> {
    fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            loaded: OnceCell::new(),
        }
    }

    fn get(&self) -> Result<&GacConfig> {
        if let Some(config) = self.loaded.get() {
            return Ok(config);
        }

        let config = load_config(self.cli)?;
        tracing::debug!(
            provider = %config.llm.provider,
            model = %config.llm.model,
            "Configuration loaded"
        );
        Ok(self.loaded.get_or_init(|| config))
    }

    fn prompt_builder(&self) -> Result<PromptBuilder> {
        Ok(PromptBuilder::new(&self.get()?.llm.language))
    }
}

/// Completion client built from [`LazyConfig`] when the first prompt arrives.
struct ConfiguredClient<'a> {
    config: &'a LazyConfig<'a>,
}

impl CompletionBackend for ConfiguredClient<'_> {
    fn complete(&self, prompt: &PromptText) -> Result<String> {
        CompletionClient::from_config(&self.config.get()?.llm).complete(prompt)
    }
}

/// Process the commit message file handed over by the hook.
fn run_hook(cli: &Cli, path: &Path) -> Result<i32> {
    tracing::debug!("Processing commit message file: {:?}", path);

    let config = LazyConfig::new(cli);
    let prompt_builder = || config.prompt_builder();

    let diff_source = GitDiffSource::current_dir()?;
    let client = ConfiguredClient { config: &config };
    let backend = WithSpinner::new(&client);
    let file = CommitMessageFile::new(path);

    let outcome = Pipeline::new(&diff_source, &backend)
        .with_deferred_prompt_builder(&prompt_builder)
        .run(&file)?;

    if let Outcome::ReviewRequired { message } = &outcome {
        print_review(message)?;
    }

    Ok(outcome.exit_code())
}

fn print_review(message: &str) -> Result<()> {
    let term = Term::stdout();

    term.write_line(&format!("\n{}", style("Generated commit message:").bold()))?;
    term.write_line(&style(BANNER).dim().to_string())?;
    for line in message.lines() {
        term.write_line(&format!("{}", style(line).green()))?;
    }
    term.write_line(&style(BANNER).dim().to_string())?;
    term.write_line(&format!(
        "\n{} Commit interrupted so you can review the message.",
        style("ℹ").blue()
    ))?;
    term.write_line("  Run `git commit` again to edit and confirm it.")?;

    Ok(())
}

fn run_install(force: bool) -> Result<i32> {
    let manager = HookManager::new()?;
    let term = Term::stderr();

    match manager.install(force)? {
        InstallResult::Installed => {}
        InstallResult::Updated => {
            term.write_line(&format!(
                "{} Replacing previous gac hook",
                style("ℹ").blue()
            ))?;
        }
        InstallResult::Replaced { backup } => {
            term.write_line(&format!(
                "{} Existing hook moved to {}",
                style("ℹ").blue(),
                backup.display()
            ))?;
        }
    }

    term.write_line(&format!(
        "{} Installed {} hook at {}",
        style("✓").green().bold(),
        HOOK_NAME,
        manager.hook_path().display()
    ))?;

    Ok(0)
}

fn run_uninstall() -> Result<i32> {
    let manager = HookManager::new()?;
    let term = Term::stderr();

    if manager.uninstall()? {
        term.write_line(&format!(
            "{} Uninstalled {} hook",
            style("✓").green().bold(),
            HOOK_NAME
        ))?;
    } else {
        term.write_line(&format!(
            "{} No {} hook installed",
            style("ℹ").blue(),
            HOOK_NAME
        ))?;
    }

    Ok(0)
}

fn run_version() -> Result<i32> {
    use crate::version;

    println!("gac-core v{}", version::version_string());

    if let Some(sha) = version::GIT_SHA {
        println!("Git SHA: {}", sha);
    }

    if let Some(date) = version::GIT_COMMIT_DATE {
        println!("Commit date: {}", date);
    }

    Ok(0)
}
