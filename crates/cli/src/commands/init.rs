use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use conventions_core::{
    ConventionsConfig, LicenseKind, OrganizationProfile, Preset, ProjectInfo,
};
use conventions_utils::get_conventions_dir;
use tokio::fs::{create_dir_all, write};

use crate::prompter::{InquirePrompter, Prompter};

const LICENSE_OPTIONS: [&str; 4] = ["MIT", "Apache-2.0", "GPL-3.0-only", "LGPL-3.0-only"];

#[derive(Args, Debug)]
#[command(about = "Initialize a new conventions config")]
pub struct InitArgs {
    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    pub dry_run: bool,

    /// Accept every default instead of prompting.
    #[arg(short, long, default_value = "false")]
    pub yes: bool,
}

fn license_kind(spdx: &str) -> LicenseKind {
    match spdx {
        "Apache-2.0" => LicenseKind::Apache2,
        "GPL-3.0-only" => LicenseKind::Gpl3,
        "LGPL-3.0-only" => LicenseKind::Lgpl3,
        _ => LicenseKind::Mit,
    }
}

/// Starter config for a repository at `root`, asking `prompter` unless `yes` is set.
fn starter_config(root: &Path, yes: bool, prompter: &dyn Prompter) -> Result<ConventionsConfig> {
    let project_name = root
        .file_name()
        .map_or_else(|| "project".to_string(), |name| name.to_string_lossy().to_string());
    let ask = |message: &str, default: &str| -> Result<String> {
        if yes {
            Ok(default.to_string())
        } else {
            prompter.text(message, default)
        }
    };

    let organization = ask("Organization name", "Example")?;
    let website = ask("Organization website", "https://example.com")?;
    let group = ask("Project group", "com.example")?;
    let license = if yes {
        LicenseKind::Mit
    } else {
        license_kind(prompter.select("License", &LICENSE_OPTIONS)?)
    };

    Ok(ConventionsConfig {
        project: Some(ProjectInfo {
            group,
            name: project_name,
            version: "0.1.0".to_string(),
            description: None,
        }),
        organization: OrganizationProfile {
            name: organization,
            website,
            license,
            license_file: PathBuf::from("LICENSE"),
            github: None,
            developers: Vec::new(),
        },
        preset: Some(Preset::Java11),
        target: None,
        plugins: Vec::new(),
        relocations: Vec::new(),
        minecraft: Default::default(),
    })
}

/// Initialize a new conventions config
///
/// # Errors
/// Returns error if not inside a git repository, a config already exists, or writing fails.
pub async fn handle_init(args: &InitArgs) -> Result<()> {
    handle_init_with_prompter(args, &InquirePrompter).await
}

/// # Errors
/// Returns error if not inside a git repository, a config already exists, or writing fails.
pub async fn handle_init_with_prompter(args: &InitArgs, prompter: &dyn Prompter) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let conventions_dir = get_conventions_dir(&current_dir)?;
    if conventions_utils::find_config_file(&conventions_dir).is_some() {
        bail!("conventions project already initialized");
    }

    let root = conventions_dir.parent().unwrap_or(&current_dir);
    let config = starter_config(root, args.yes, prompter)?;
    let config_file = conventions_dir.join("config.yaml");

    if !args.yes
        && !args.dry_run
        && !prompter.confirm(&format!("Write {}?", config_file.display()))?
    {
        println!("{}", "Nothing written".yellow());
        return Ok(());
    }

    if !args.dry_run {
        create_dir_all(&conventions_dir).await?;
        write(&config_file, serde_yaml::to_string(&config)?).await?;
    }

    println!(
        "{} {}",
        "conventions initialized in".bright_green(),
        config_file.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompter::MockPrompter;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        init: InitArgs,
    }

    #[test]
    fn test_init_args_parsing() {
        let cli = TestCli::parse_from(["test", "--dry-run", "--yes"]);
        assert!(cli.init.dry_run);
        assert!(cli.init.yes);
    }

    #[test]
    fn test_starter_config_defaults() {
        let config = starter_config(Path::new("/work/lobby"), true, &MockPrompter::default())
            .unwrap();
        let project = config.project.as_ref().unwrap();
        assert_eq!(project.name, "lobby");
        assert_eq!(project.group, "com.example");
        assert_eq!(config.organization.license, LicenseKind::Mit);
        assert_eq!(config.preset, Some(Preset::Java11));
        assert!(config.organization.validate().is_ok());
    }

    #[test]
    fn test_starter_config_prompts() {
        let prompter = MockPrompter {
            text_value: Some("Acme".to_string()),
            select_index: 1,
            ..Default::default()
        };
        let config = starter_config(Path::new("/work/lobby"), false, &prompter).unwrap();
        assert_eq!(config.organization.name, "Acme");
        assert_eq!(config.organization.license, LicenseKind::Apache2);
    }

    #[test]
    fn test_starter_config_is_loadable() {
        let config = starter_config(Path::new("/work/lobby"), true, &MockPrompter::default())
            .unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(ConventionsConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_license_kind() {
        for spdx in LICENSE_OPTIONS {
            assert_eq!(license_kind(spdx).spdx(), spdx);
        }
    }
}
