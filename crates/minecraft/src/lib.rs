//! # conventions-minecraft
//!
//! Minecraft server plugin description support for conventions.
//!
//! Generates `plugin.yml` for Paper and `velocity-plugin.json` for Velocity from the
//! `minecraft` section of the config. A generator only takes part when its required
//! fields are set, and every generator is validated before any file is written.

pub mod generators;
pub mod paper;
pub mod velocity;

pub use generators::{DESCRIPTION_OUTPUT_DIR, generate_all, get_generators, validate_all};
pub use paper::PaperDescriptionGenerator;
pub use velocity::VelocityDescriptionGenerator;
