use crate::assets::AssetLoader;
use crate::error::RenderError;
use lofi_dither::{Palette, Settings};
use serde::Deserialize;

/// Palette group name that selects `custom_stops` instead of a preset.
pub const CUSTOM_GROUP: &str = "Custom";

/// Stops used when the custom list is empty.
const EMPTY_CUSTOM_FALLBACK: [&str; 2] = ["#ffffff", "#000000"];

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Settings every render starts from
    #[serde(default)]
    pub defaults: RenderDefaults,

    /// Palette preset groups, in menu order
    #[serde(default)]
    pub palettes: Vec<PaletteGroup>,
}

/// Pipeline and rendering-surface settings, as written in config.yaml.
///
/// Values are kept raw here; clamping happens when they become
/// [`Settings`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenderDefaults {
    pub scale: u32,
    /// Display name or slug; unknown names render undithered.
    pub algorithm: String,
    pub period: u32,
    pub bleed: f64,
    pub contrast: f64,
    pub midtones: f64,
    pub highlights: f64,
    pub threshold: u8,
    pub depth: u32,
    pub invert: bool,
    /// Pre-blur radius in source pixels (0 = off)
    pub blur: u32,
    /// Fit the source inside `max_size x max_size` before processing
    pub max_size: Option<u32>,
    pub palette_group: String,
    pub palette_index: usize,
    pub custom_stops: Vec<String>,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            scale: 4,
            algorithm: "Atkinson".to_string(),
            period: 4,
            bleed: 50.0,
            contrast: 45.0,
            midtones: 50.0,
            highlights: 50.0,
            threshold: 128,
            depth: 0,
            invert: false,
            blur: 0,
            max_size: None,
            palette_group: "CyberGB".to_string(),
            palette_index: 0,
            custom_stops: vec![
                "#ff9a3c".to_string(),
                "#ff4b6c".to_string(),
                "#4a36ff".to_string(),
            ],
        }
    }
}

/// A named list of palette presets
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteGroup {
    pub name: String,
    #[serde(default)]
    pub presets: Vec<Vec<String>>,
}

impl RenderDefaults {
    /// Core pipeline settings, using `palette` for the colour stops.
    pub fn settings(&self, palette: Palette) -> Settings {
        Settings::new()
            .scale(self.scale)
            .algorithm_name(&self.algorithm)
            .palette(palette)
            .period(self.period)
            .bleed(self.bleed)
            .contrast(self.contrast)
            .midtones(self.midtones)
            .highlights(self.highlights)
            .threshold(self.threshold)
            .invert(self.invert)
            .depth(self.depth)
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        palette_groups = config.palettes.len(),
                        algorithm = %config.defaults.algorithm,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Look up a preset group by name, ignoring ASCII case
    pub fn palette_group(&self, name: &str) -> Option<&PaletteGroup> {
        self.palettes
            .iter()
            .find(|group| group.name.eq_ignore_ascii_case(name))
    }

    /// Resolve a palette selection to parsed stops.
    ///
    /// - `"Custom"` uses `custom` (white to black when empty)
    /// - an out-of-range `index` falls back to the group's first preset
    /// - an unknown group is an error
    pub fn resolve_palette(
        &self,
        group: &str,
        index: usize,
        custom: &[String],
    ) -> Result<Palette, RenderError> {
        if group.eq_ignore_ascii_case(CUSTOM_GROUP) {
            if custom.is_empty() {
                return Ok(Palette::from_hex(&EMPTY_CUSTOM_FALLBACK)?);
            }
            return Ok(Palette::from_hex(custom)?);
        }

        let found = self
            .palette_group(group)
            .ok_or_else(|| RenderError::UnknownPreset(group.to_string()))?;

        let stops = match found.presets.get(index) {
            Some(stops) => stops,
            None => {
                tracing::warn!(
                    group = %found.name,
                    index,
                    available = found.presets.len(),
                    "Palette index out of range, using first preset"
                );
                match found.presets.first() {
                    Some(stops) => stops,
                    None => return Ok(Palette::default()),
                }
            }
        };
        Ok(Palette::from_hex(stops)?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let cyber_gb = PaletteGroup {
            name: "CyberGB".to_string(),
            presets: vec![
                vec![
                    "#020a00".to_string(),
                    "#4c7f00".to_string(),
                    "#9bbc0f".to_string(),
                    "#e5ff8a".to_string(),
                ],
                vec![
                    "#000000".to_string(),
                    "#9bbc0f".to_string(),
                    "#e5ff8a".to_string(),
                ],
            ],
        };

        Self {
            defaults: RenderDefaults::default(),
            palettes: vec![cyber_gb],
        }
    }
}
