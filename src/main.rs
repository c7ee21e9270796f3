//! Sidekick CLI - deploy containerized apps to your own VPS
//!
//! Usage: sidekick <COMMAND>
//!
//! Commands:
//!   init     Write the global settings file
//!   launch   First deployment of the app in this directory
//!   deploy   Redeploy the app from its deployment record
//!   preview  Deploy the current commit as a preview environment

use anyhow::Result;
use clap::Parser;
use sidekick::presentation::cli::{Cli, Commands, PreviewAction};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod ui;

use commands::init::InitFlags;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, cli.no_animation);
    if let Err(err) = run(cli, &ui) {
        ui::error::print_error(&err, &ui);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise each `-v` raises the level
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "sidekick=info,warn",
        2 => "sidekick=debug,info",
        _ => "sidekick=trace,debug",
    }
}

fn init_tracing(verbose: u8) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn run(cli: Cli, ui: &UiContext) -> Result<()> {
    let config = cli.config.as_deref();
    let project = cli.project.as_path();

    match cli.command {
        Commands::Init {
            server,
            user,
            docker_username,
            domain,
            age_key,
            force,
        } => commands::init::cmd_init(
            InitFlags {
                server,
                user,
                docker_username,
                domain,
                age_key,
                force,
            },
            config,
            ui,
        ),
        Commands::Launch => commands::launch::cmd_launch(project, config, ui),
        Commands::Deploy => commands::deploy::cmd_deploy(project, config, ui),
        Commands::Preview { action } => match action {
            Some(PreviewAction::List) => commands::preview::cmd_preview_list(project, ui),
            None => commands::preview::cmd_preview(project, config, ui),
        },
    }
}
