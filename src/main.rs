use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use distinct_palette::{
    ColorApiClient, ColorRecord, Config, FailurePolicy, PaletteCache, PaletteExplorer,
    SampleOptions, Sampler, swatch::render_palette,
};

#[derive(Parser, Debug)]
#[command(about = "Sample distinctly named colors across the hue wheel", version)]
struct Args {
    /// Saturation percentages to sample.
    #[arg(short, long, num_args = 1.., default_values_t = [100.0])]
    saturation: Vec<f64>,
    /// Lightness percentages to sample.
    #[arg(short, long, num_args = 1.., default_values_t = [50.0])]
    lightness: Vec<f64>,
    /// Hue increment in degrees.
    #[arg(long)]
    step: Option<u16>,
    /// Stop after this many repeated names in a row.
    #[arg(long)]
    max_repeats: Option<u32>,
    /// Base URL of the color-naming service.
    #[arg(long)]
    base_url: Option<String>,
    /// Skip hues whose lookup fails instead of aborting.
    #[arg(long)]
    skip_failures: bool,
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print palettes as JSON instead of a table.
    #[arg(long)]
    json: bool,
    /// Write each palette as a PNG swatch grid.
    #[arg(long)]
    png: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(step) = self.step {
            config.sampler.step = step;
        }
        if let Some(max_repeats) = self.max_repeats {
            config.sampler.max_consecutive_repeats = max_repeats;
        }
        if let Some(base_url) = &self.base_url {
            config.service.base_url = base_url.clone();
        }
        if self.skip_failures {
            config.sampler.on_failure = FailurePolicy::Skip;
        }
        Ok(config)
    }
}

/// One entry of the `--json` output array.
#[derive(Serialize, Debug)]
struct PaletteReport {
    saturation: f64,
    lightness: f64,
    colors: Vec<ColorRecord>,
}

/// The hue a color was requested for, which differs from the service's echo for greys.
fn hue_label(color: &ColorRecord) -> String {
    match color.sampled_hue {
        Some(hue) => hue.to_string(),
        None => "-".to_string(),
    }
}

/// `out.png` for a single palette, `out-s100-l50.png` when several are written.
fn png_path(base: &Path, saturation: f64, lightness: f64, several: bool) -> PathBuf {
    if !several {
        return base.to_path_buf();
    }
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("palette");
    let ext = base.extension().and_then(|s| s.to_str()).unwrap_or("png");
    base.with_file_name(format!("{stem}-s{saturation}-l{lightness}.{ext}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let args = Args::parse();
    let config = args.config()?;

    let client = ColorApiClient::from_config(&config.service)
        .context("building HTTP client")?;
    let sampler = Sampler::with_options(client, SampleOptions::from(config.sampler));
    let cache = PaletteCache::with_capacity(config.cache.capacity);
    let mut explorer = PaletteExplorer::new(sampler, cache);

    let pairs: Vec<(f64, f64)> = args
        .saturation
        .iter()
        .flat_map(|&s| args.lightness.iter().map(move |&l| (s, l)))
        .collect();
    let several = pairs.len() > 1;
    let mut reports = Vec::new();

    for (saturation, lightness) in pairs {
        let palette = explorer
            .palette(saturation, lightness)
            .await
            .with_context(|| format!("sampling s={saturation}% l={lightness}%"))?;

        if args.json {
            reports.push(PaletteReport {
                saturation,
                lightness,
                colors: palette.to_vec(),
            });
        } else {
            println!(
                "saturation {saturation}%, lightness {lightness}%: {} colors",
                palette.len()
            );
            for color in palette.iter() {
                let hue = hue_label(color);
                println!("  {hue:>3} {:<8} {}", color.hex.value, color.name());
            }
        }

        if let Some(base) = &args.png {
            if palette.is_empty() {
                info!("nothing to draw for s={saturation}% l={lightness}%");
                continue;
            }
            let path = png_path(base, saturation, lightness, several);
            render_palette(&palette, &config.swatch)?
                .save(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}
