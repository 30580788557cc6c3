//! The non-visual half of an interactive palette picker: a [`Sampler`] with a
//! [`PaletteCache`] in front of it.

use log::debug;

use crate::cache::{Palette, PaletteCache, PaletteKey};
use crate::error::SampleError;
use crate::lookup::ColorLookup;
use crate::sampler::Sampler;

/// Serves palettes for (saturation, lightness) pairs, sampling only on a cache miss.
///
/// Failed samples are never cached, so asking again retries the sweep.
#[derive(Debug)]
pub struct PaletteExplorer<L> {
    sampler: Sampler<L>,
    cache: PaletteCache,
}

impl<L: ColorLookup> PaletteExplorer<L> {
    pub const DEFAULT_SATURATION: f64 = 100.0;
    pub const DEFAULT_LIGHTNESS: f64 = 50.0;

    pub fn new(sampler: Sampler<L>, cache: PaletteCache) -> Self {
        Self { sampler, cache }
    }

    pub fn sampler(&self) -> &Sampler<L> {
        &self.sampler
    }

    pub fn cache(&self) -> &PaletteCache {
        &self.cache
    }

    pub async fn palette(
        &mut self,
        saturation: f64,
        lightness: f64,
    ) -> Result<Palette, SampleError> {
        let key = PaletteKey::new(saturation, lightness);
        if let Some(palette) = self.cache.get(&key) {
            debug!("cache hit for s={saturation}% l={lightness}%");
            return Ok(palette);
        }

        let palette: Palette = self.sampler.sample(saturation, lightness).await?.into();
        if let Some(evicted) = self.cache.insert(key, palette.clone()) {
            debug!(
                "evicted s={}% l={}% from cache",
                evicted.saturation(),
                evicted.lightness()
            );
        }
        Ok(palette)
    }

    /// The palette for the initial slider position.
    pub async fn initial_palette(&mut self) -> Result<Palette, SampleError> {
        self.palette(Self::DEFAULT_SATURATION, Self::DEFAULT_LIGHTNESS).await
    }
}
