use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    ApplyArgs, CheckArgs, ConfigArgs, DescribeArgs, InitArgs, handle_apply, handle_check,
    handle_config, handle_describe, handle_init,
};
pub mod commands;
mod context;
pub mod options;
pub mod prompter;

pub use prompter::UserCancelled;

#[derive(Parser, Debug)]
#[command(
    name = "conventions",
    author,
    version,
    about = "Apply organization-wide build conventions to Gradle projects",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: <repo>/.conventions/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Init(InitArgs),
    Check(CheckArgs),
    Apply(ApplyArgs),
    Describe(DescribeArgs),
    Config(ConfigArgs),
}

/// # Errors
/// Returns the error of the command that ran.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    let config = cli.config.as_deref();
    match cli.command {
        Some(Commands::Init(args)) => handle_init(&args).await?,
        Some(Commands::Check(args)) => handle_check(&args, config).await?,
        Some(Commands::Apply(args)) => handle_apply(&args, config).await?,
        Some(Commands::Describe(args)) => handle_describe(&args, config).await?,
        Some(Commands::Config(args)) => handle_config(&args, config).await?,
        None => handle_check(&CheckArgs::default(), config).await?,
    }
    Ok(())
}
