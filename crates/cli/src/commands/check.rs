use std::path::Path;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use conventions_minecraft::{get_generators, validate_all};
use conventions_utils::display_document;

use crate::{context::CommandContext, options::PresetOptions};

#[derive(Args, Debug, Default)]
#[command(about = "Validate the conventions configuration")]
pub struct CheckArgs {
    /// Override the language level preset from the config
    #[arg(short, long)]
    pub preset: Option<PresetOptions>,
}

/// Validate every record, the license file and the plugin descriptions without writing
/// anything.
///
/// # Errors
/// Returns the first configuration, license or description error.
pub async fn handle_check(args: &CheckArgs, config: Option<&Path>) -> Result<()> {
    let context = CommandContext::new(config).await?;
    let document = context.config.apply(args.preset.map(Into::into))?;

    let generators = get_generators(&context.config.minecraft);
    validate_all(&generators)?;

    println!("{}", display_document(&document));
    for generator in &generators {
        println!(
            "{} {}",
            "[Description]".bright_blue().bold(),
            generator.file_name().bright_white()
        );
    }
    println!(
        "{} {}",
        "Conventions are valid:".bright_green().bold(),
        context.config_path.display()
    );
    Ok(())
}
