pub mod config;

pub use config::{AppConfig, PaletteGroup, RenderDefaults, CUSTOM_GROUP};
