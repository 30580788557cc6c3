//! Samples a palette of distinctly named colors across the hue wheel.
//!
//! For a fixed saturation and lightness, [`sampler::Sampler`] walks the hue wheel,
//! asks a color-naming service ([`lookup::ColorApiClient`] by default) for the name
//! of each hue and keeps one color per name. [`explorer::PaletteExplorer`] puts a
//! bounded cache in front of it, and [`swatch::render_palette`] turns a palette
//! into an image.
//!
//! ```no_run
//! use distinct_palette::{ColorApiClient, Sampler};
//!
//! # async fn demo() -> Result<(), distinct_palette::SampleError> {
//! let sampler = Sampler::new(ColorApiClient::default());
//! for color in sampler.sample(100.0, 50.0).await? {
//!     println!("{:?} {}", color.sampled_hue, color.name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod colors;
pub mod config;
mod error;
pub mod explorer;
pub mod lookup;
pub mod record;
pub mod sampler;
pub mod swatch;

pub use cache::{Palette, PaletteCache, PaletteKey};
pub use config::Config;
pub use error::{ConfigError, LookupError, SampleError, SwatchError};
pub use explorer::PaletteExplorer;
pub use lookup::{ColorApiClient, ColorLookup, HslQuery};
pub use record::ColorRecord;
pub use sampler::{FailurePolicy, SampleOptions, SampleOutcome, Sampler, StopReason};
