use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Show the loaded conventions configuration")]
pub struct ConfigArgs {}

/// Display conventions configuration
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(_args: &ConfigArgs, config: Option<&Path>) -> Result<()> {
    let context = CommandContext::new(config).await?;
    println!("{}", serde_json::to_string_pretty(&context.config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    #[test]
    fn test_config_args_parsing() {
        // ConfigArgs has no arguments, just verify it parses
        let _cli = TestCli::parse_from(["test"]);
    }

    #[test]
    fn test_config_args_debug() {
        let args = ConfigArgs {};
        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ConfigArgs"));
    }
}
