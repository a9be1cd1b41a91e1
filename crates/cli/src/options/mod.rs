mod format_options;
mod preset_options;

pub use format_options::FormatOptions;
pub use preset_options::PresetOptions;
