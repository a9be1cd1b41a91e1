use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use conventions_minecraft::{DESCRIPTION_OUTPUT_DIR, generate_all, get_generators, validate_all};

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Generate Minecraft plugin descriptions")]
pub struct DescribeArgs {
    /// Output directory (default: <repo>/build/generated/conventions/minecraft-plugin-description)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

/// Validate and write every configured plugin description
///
/// # Errors
/// Returns error if the project section is missing, a description is invalid, or writing fails.
pub async fn handle_describe(args: &DescribeArgs, config: Option<&Path>) -> Result<()> {
    let context = CommandContext::new(config).await?;
    let generators = get_generators(&context.config.minecraft);
    if generators.is_empty() {
        println!("No plugin descriptions configured");
        return Ok(());
    }

    let project = context
        .config
        .project
        .as_ref()
        .context("A `project` section is required to generate plugin descriptions")?;
    project.validate()?;

    let out_dir = context.output_dir(args.out.as_deref(), DESCRIPTION_OUTPUT_DIR);
    if args.dry_run {
        validate_all(&generators)?;
        for generator in &generators {
            println!(
                "Dry run, {} will not be written",
                out_dir.join(generator.file_name()).display()
            );
        }
        return Ok(());
    }

    for path in generate_all(&generators, project, &out_dir).await? {
        println!("{} {}", "Wrote".bright_green().bold(), path.display());
    }
    Ok(())
}
