// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gac - Conventional Commits messages drafted by an LLM
///
/// Invoked by the `prepare-commit-msg` hook with the path of the commit
/// message file. Use `install` to set the hook up in a repository.
#[derive(Parser, Debug)]
#[command(name = "gac-core")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Drafts Conventional Commits messages from staged changes", long_about = None)]
pub struct Cli {
    /// The command to run (omit to process a commit message file)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Commit message file passed in by git
    #[arg(value_name = "COMMIT_MSG_FILE")]
    pub commit_msg_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GAC_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Install the prepare-commit-msg hook in the current repository
    Install {
        /// Replace a hook gac did not write (it is kept as a backup)
        #[arg(short, long)]
        force: bool,
    },

    /// Remove the hook and restore any backed-up hook
    Uninstall,

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_message_file() {
        let args = Cli::parse_from(["gac-core", ".git/COMMIT_EDITMSG"]);
        assert!(args.command.is_none());
        assert_eq!(
            args.commit_msg_file,
            Some(PathBuf::from(".git/COMMIT_EDITMSG"))
        );
    }

    #[test]
    fn test_parse_install() {
        let args = Cli::parse_from(["gac-core", "install", "--force"]);
        assert_eq!(args.command, Some(Commands::Install { force: true }));
        assert!(args.commit_msg_file.is_none());
    }

    #[test]
    fn test_parse_uninstall_and_version() {
        let args = Cli::parse_from(["gac-core", "uninstall"]);
        assert_eq!(args.command, Some(Commands::Uninstall));

        let args = Cli::parse_from(["gac-core", "version"]);
        assert_eq!(args.command, Some(Commands::Version));
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["gac-core", "-d", "--config", "gac.json", "msg.txt"]);
        assert!(args.debug);
        assert_eq!(args.config, Some(PathBuf::from("gac.json")));
        assert_eq!(args.commit_msg_file, Some(PathBuf::from("msg.txt")));
    }

    #[test]
    fn test_no_arguments() {
        let args = Cli::parse_from(["gac-core"]);
        assert!(args.command.is_none());
        assert!(args.commit_msg_file.is_none());
    }
}
