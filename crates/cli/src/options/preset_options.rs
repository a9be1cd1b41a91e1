use clap::ValueEnum;
use conventions_core::Preset;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetOptions {
    Java8,
    Java11,
}

impl From<PresetOptions> for Preset {
    fn from(value: PresetOptions) -> Self {
        match value {
            PresetOptions::Java8 => Preset::Java8,
            PresetOptions::Java11 => Preset::Java11,
        }
    }
}
