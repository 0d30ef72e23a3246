use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lofi::assets::AssetLoader;
use lofi::models::{AppConfig, RenderDefaults, CUSTOM_GROUP};
use lofi::rendering::RenderJob;
use lofi_dither::DitherAlgorithm;

#[derive(Parser)]
#[command(name = "lofi")]
#[command(about = "Stylized low-bit-depth dithering for images and frame sequences")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither one or more PNG files
    Render {
        /// Input PNG files (several inputs are rendered in parallel)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output PNG file for a single input, otherwise a directory
        #[arg(short, long)]
        output: PathBuf,

        /// Config file (default: CONFIG_FILE env var, then embedded)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed for the random algorithms; frame i uses seed + i
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        settings: SettingsArgs,
    },
    /// List dither algorithms by family
    Algorithms,
    /// List palette preset groups
    Palettes {
        /// Config file (default: CONFIG_FILE env var, then embedded)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write the embedded config.yaml for customization
    Init {
        /// Target path (default: CONFIG_FILE env var, then ./config.yaml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// Per-render overrides of the config defaults
#[derive(Args, Debug, Default)]
struct SettingsArgs {
    /// Pixel block size
    #[arg(short, long)]
    scale: Option<u32>,

    /// Algorithm display name or slug (e.g. "Floyd-Steinberg", bayer-4x4)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Period of line, wave and pattern algorithms
    #[arg(long)]
    period: Option<u32>,

    /// Error diffusion strength, 0..100
    #[arg(long)]
    bleed: Option<f64>,

    /// Contrast, 0..100 (45 = neutral)
    #[arg(long)]
    contrast: Option<f64>,

    /// Midtone gamma, 0..100 (50 = neutral)
    #[arg(long)]
    midtones: Option<f64>,

    /// Highlight lift, 0..100 (50 = neutral)
    #[arg(long)]
    highlights: Option<f64>,

    /// Luminance threshold shift, 0..255 (128 = neutral)
    #[arg(long)]
    threshold: Option<u8>,

    /// Invert luminance before dithering (`--invert=false` to turn off)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    invert: Option<bool>,

    /// Depth echo distance in cells (0 = off)
    #[arg(long)]
    depth: Option<u32>,

    /// Pre-blur radius in source pixels (0 = off)
    #[arg(long)]
    blur: Option<u32>,

    /// Fit the source inside a square of this size before processing
    #[arg(long)]
    max_size: Option<u32>,

    /// Palette preset group (see `lofi palettes`)
    #[arg(short, long)]
    palette: Option<String>,

    /// Preset index within the group
    #[arg(long)]
    palette_index: Option<usize>,

    /// Custom stops as comma-separated hex, dark to light (e.g. "#000000,#ff0000,#ffffff")
    #[arg(long)]
    colors: Option<String>,
}

impl SettingsArgs {
    /// Overlay the flags that were given onto `defaults`.
    fn apply(&self, defaults: &mut RenderDefaults) {
        if let Some(scale) = self.scale {
            defaults.scale = scale;
        }
        if let Some(ref algorithm) = self.algorithm {
            defaults.algorithm = algorithm.clone();
        }
        if let Some(period) = self.period {
            defaults.period = period;
        }
        if let Some(bleed) = self.bleed {
            defaults.bleed = bleed;
        }
        if let Some(contrast) = self.contrast {
            defaults.contrast = contrast;
        }
        if let Some(midtones) = self.midtones {
            defaults.midtones = midtones;
        }
        if let Some(highlights) = self.highlights {
            defaults.highlights = highlights;
        }
        if let Some(threshold) = self.threshold {
            defaults.threshold = threshold;
        }
        if let Some(invert) = self.invert {
            defaults.invert = invert;
        }
        if let Some(depth) = self.depth {
            defaults.depth = depth;
        }
        if let Some(blur) = self.blur {
            defaults.blur = blur;
        }
        if self.max_size.is_some() {
            defaults.max_size = self.max_size;
        }
        if let Some(ref group) = self.palette {
            defaults.palette_group = group.clone();
        }
        if let Some(index) = self.palette_index {
            defaults.palette_index = index;
        }
        // Custom colors select the custom group unless one was named
        if let Some(ref colors) = self.colors {
            defaults.custom_stops = colors
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if self.palette.is_none() {
                defaults.palette_group = CUSTOM_GROUP.to_string();
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lofi=info,lofi_dither=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Render {
            inputs,
            output,
            config,
            seed,
            settings,
        }) => run_render_command(&inputs, &output, config, seed, &settings),
        Some(Commands::Algorithms) => {
            run_algorithms_command();
            Ok(())
        }
        Some(Commands::Palettes { config }) => {
            run_palettes_command(config);
            Ok(())
        }
        Some(Commands::Init { config, force }) => run_init_command(config, force),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Render inputs to a file (single input) or a directory
fn run_render_command(
    inputs: &[PathBuf],
    output: &Path,
    config_file: Option<PathBuf>,
    seed: Option<u64>,
    args: &SettingsArgs,
) -> anyhow::Result<()> {
    let loader = AssetLoader::from_env(config_file);
    let config = AppConfig::load_from_assets(&loader);

    let mut defaults = config.defaults.clone();
    args.apply(&mut defaults);

    let mut job = RenderJob::from_defaults(&config, &defaults)?;
    job.seed = seed;

    tracing::debug!(
        algorithm = %job.settings.get_algorithm(),
        scale = job.settings.get_scale(),
        stops = job.settings.get_palette().len(),
        blur = job.blur,
        frames = inputs.len(),
        "Render settings resolved"
    );

    // A single input with a file-like output is written directly
    if let [input] = inputs {
        if !output.is_dir() && output.extension().is_some() {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            job.render_file(input, output, 0)?;
            println!("Rendered {}", output.display());
            return Ok(());
        }
    }

    std::fs::create_dir_all(output)?;
    let outcomes = job.render_batch(inputs, output);

    let mut failed = 0;
    for outcome in &outcomes {
        match outcome.result {
            Ok(ref path) => println!("  + {}", path.display()),
            Err(ref e) => {
                failed += 1;
                eprintln!("  ! {}: {e}", outcome.input.display());
            }
        }
    }
    println!(
        "Rendered {} of {} frames into {}",
        outcomes.len() - failed,
        outcomes.len(),
        output.display()
    );

    if failed > 0 {
        anyhow::bail!("{failed} frame(s) failed");
    }
    Ok(())
}

/// List algorithms grouped by menu category
fn run_algorithms_command() {
    let mut categories: Vec<(&'static str, Vec<DitherAlgorithm>)> = Vec::new();
    for algorithm in DitherAlgorithm::all() {
        let category = algorithm.category();
        match categories.iter_mut().find(|(name, _)| *name == category) {
            Some((_, list)) => list.push(algorithm),
            None => categories.push((category, vec![algorithm])),
        }
    }

    for (category, algorithms) in &categories {
        println!("{category}:");
        for algorithm in algorithms {
            let marker = if algorithm.is_random() { " (random)" } else { "" };
            println!("  {:<28} {}{marker}", algorithm.name(), algorithm.slug());
        }
        println!();
    }
}

/// List palette groups with their preset counts
fn run_palettes_command(config_file: Option<PathBuf>) {
    let loader = AssetLoader::from_env(config_file);
    let config = AppConfig::load_from_assets(&loader);

    println!("Palette groups ({}):\n", loader.config_source());
    for group in &config.palettes {
        println!("{} ({} presets)", group.name, group.presets.len());
        for (index, stops) in group.presets.iter().enumerate() {
            println!("  {index:>2}: {}", stops.join(" "));
        }
    }
    println!(
        "\n{CUSTOM_GROUP} uses --colors (current: {})",
        config.defaults.custom_stops.join(" ")
    );
}

/// Extract the embedded config
fn run_init_command(config_file: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = config_file
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("config.yaml"));

    if AssetLoader::extract_config(&path, force)? {
        println!("  + {}", path.display());
    } else {
        println!(
            "Skipped existing {} (use --force to overwrite)",
            path.display()
        );
    }
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let loader = AssetLoader::from_env(None);
    let config = AppConfig::load_from_assets(&loader);
    let d = &config.defaults;

    println!("lofi v{VERSION}");
    println!("Stylized low-bit-depth dithering\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!("\nConfig:  {}", loader.config_source());

    println!("\nDefaults:");
    println!("  algorithm  {}", d.algorithm);
    println!("  scale      {}", d.scale);
    println!("  palette    {} #{}", d.palette_group, d.palette_index);
    println!(
        "  tone       contrast {} / midtones {} / highlights {} / threshold {}",
        d.contrast, d.midtones, d.highlights, d.threshold
    );
    println!(
        "  algorithms {} in {} palette groups",
        DitherAlgorithm::all().count(),
        config.palettes.len()
    );

    println!("\nCommands:");
    println!("  lofi render      Dither PNG files");
    println!("  lofi algorithms  List dither algorithms");
    println!("  lofi palettes    List palette presets");
    println!("  lofi init        Extract config.yaml");
    println!("\nRun 'lofi --help' for more details.");
}
