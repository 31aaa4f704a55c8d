// Formatting configuration: default patterns, validity floors and number style.
pub mod settings;

pub use settings::{DateSettings, FormatSettings, NumberSettings};
