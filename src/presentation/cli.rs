//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --no-animation, --config,
//!   --project) are inherited by all subcommands
//! - Every command runs against one project directory and one settings file

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Sidekick - deploy containerized apps to your own VPS
#[derive(Parser, Debug)]
#[command(name = "sidekick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events (for CI)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Disable animations (spinners, live updates)
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (defaults to ~/.config/sidekick/sidekick.yml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project directory containing the Dockerfile
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub project: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the global settings file
    Init {
        /// VPS address (IP or hostname)
        #[arg(long)]
        server: Option<String>,

        /// SSH user on the VPS
        #[arg(long)]
        user: Option<String>,

        /// Registry account primary images are pushed under
        #[arg(long)]
        docker_username: Option<String>,

        /// Domain app hostnames are created under
        #[arg(long)]
        domain: Option<String>,

        /// age public key env files are encrypted for
        #[arg(long)]
        age_key: Option<String>,

        /// Overwrite an existing settings file
        #[arg(short, long)]
        force: bool,
    },

    /// First deployment of the app in this directory
    Launch,

    /// Redeploy the app from its deployment record
    Deploy,

    /// Deploy the current commit as a preview environment
    Preview {
        #[command(subcommand)]
        action: Option<PreviewAction>,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum PreviewAction {
    /// List recorded preview environments
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["sidekick"]).is_err());
    }

    #[test]
    fn test_cli_parse_launch() {
        let cli = Cli::try_parse_from(["sidekick", "launch"]).unwrap();
        assert!(matches!(cli.command, Commands::Launch));
        assert_eq!(cli.project, PathBuf::from("."));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_cli_parse_deploy_with_globals_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sidekick",
            "deploy",
            "--json",
            "--config",
            "/tmp/sidekick.yml",
            "--project",
            "apps/shop",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Deploy));
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/sidekick.yml")));
        assert_eq!(cli.project, PathBuf::from("apps/shop"));
    }

    #[test]
    fn test_cli_parse_preview() {
        let cli = Cli::try_parse_from(["sidekick", "preview"]).unwrap();
        if let Commands::Preview { action } = cli.command {
            assert_eq!(action, None);
        } else {
            panic!("Expected Preview command");
        }
    }

    #[test]
    fn test_cli_parse_preview_list() {
        let cli = Cli::try_parse_from(["sidekick", "preview", "list"]).unwrap();
        if let Commands::Preview { action } = cli.command {
            assert_eq!(action, Some(PreviewAction::List));
        } else {
            panic!("Expected Preview command");
        }
    }

    #[test]
    fn test_cli_parse_init_flags() {
        let cli = Cli::try_parse_from([
            "sidekick",
            "init",
            "--server",
            "203.0.113.7",
            "--docker-username",
            "alice",
            "--force",
        ])
        .unwrap();
        if let Commands::Init {
            server,
            docker_username,
            user,
            force,
            ..
        } = cli.command
        {
            assert_eq!(server.as_deref(), Some("203.0.113.7"));
            assert_eq!(docker_username.as_deref(), Some("alice"));
            assert_eq!(user, None);
            assert!(force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["sidekick", "-vv", "deploy"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_color_flag() {
        let cli = Cli::try_parse_from(["sidekick", "--color", "never", "deploy"]).unwrap();
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }
}
