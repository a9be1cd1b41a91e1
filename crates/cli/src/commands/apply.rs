use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use conventions_core::DocumentFormat;
use conventions_utils::{DOCUMENT_OUTPUT_DIR, display_document, write_document};

use crate::{
    context::CommandContext,
    options::{FormatOptions, PresetOptions},
};

#[derive(Args, Debug)]
#[command(about = "Merge the conventions into a configuration document")]
pub struct ApplyArgs {
    /// Override the language level preset from the config
    #[arg(short, long)]
    preset: Option<PresetOptions>,

    #[arg(short, long, default_value = "json")]
    format: FormatOptions,

    /// Output directory (default: <repo>/build/conventions)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print the document instead of writing it
    #[arg(long, default_value = "false")]
    stdout: bool,

    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

/// Merge the conventions and write the document
///
/// # Errors
/// Returns error if the config is invalid or the document cannot be written.
pub async fn handle_apply(args: &ApplyArgs, config: Option<&Path>) -> Result<()> {
    let context = CommandContext::new(config).await?;
    let document = context.config.apply(args.preset.map(Into::into))?;
    let format = DocumentFormat::from(args.format);

    if args.stdout {
        print!("{}", document.render(format)?);
        return Ok(());
    }

    println!("{}", display_document(&document));
    let out_dir = context.output_dir(args.out.as_deref(), DOCUMENT_OUTPUT_DIR);
    if args.dry_run {
        println!(
            "Dry run, {} will not be written",
            out_dir.join(format.file_name()).display()
        );
        return Ok(());
    }

    let path = write_document(&document, format, &out_dir).await?;
    println!("{} {}", "Wrote".bright_green().bold(), path.display());
    Ok(())
}
