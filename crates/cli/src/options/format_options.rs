use clap::ValueEnum;
use conventions_core::DocumentFormat;

/// CLI output format selection for the merged document.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatOptions {
    #[value(name = "json")]
    Json,
    #[value(name = "yaml")]
    Yaml,
}

impl From<FormatOptions> for DocumentFormat {
    fn from(value: FormatOptions) -> Self {
        match value {
            FormatOptions::Json => Self::Json,
            FormatOptions::Yaml => Self::Yaml,
        }
    }
}
