//! Bounded cache of sampled palettes keyed by (saturation, lightness).

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::record::ColorRecord;

pub const DEFAULT_CAPACITY: usize = 64;

/// A shared, immutable palette.
pub type Palette = Arc<[ColorRecord]>;

/// Cache key. Two keys are equal when their percentages are bitwise equal,
/// with `-0.0` folded into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteKey {
    saturation: u64,
    lightness: u64,
}

impl PaletteKey {
    pub fn new(saturation: f64, lightness: f64) -> Self {
        fn bits(value: f64) -> u64 {
            if value == 0.0 {
                0.0f64.to_bits()
            } else {
                value.to_bits()
            }
        }
        Self {
            saturation: bits(saturation),
            lightness: bits(lightness),
        }
    }

    pub fn saturation(&self) -> f64 {
        f64::from_bits(self.saturation)
    }

    pub fn lightness(&self) -> f64 {
        f64::from_bits(self.lightness)
    }
}

/// Least-recently-used palette cache.
///
/// A capacity of zero disables caching entirely.
#[derive(Debug, Clone)]
pub struct PaletteCache {
    capacity: usize,
    entries: HashMap<PaletteKey, Palette>,
    // Front is least recently used.
    recency: VecDeque<PaletteKey>,
}

impl Default for PaletteCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl PaletteCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            recency: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &PaletteKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the cached palette and marks it as most recently used.
    pub fn get(&mut self, key: &PaletteKey) -> Option<Palette> {
        let palette = self.entries.get(key)?.clone();
        self.touch(key);
        Some(palette)
    }

    /// Stores `palette`, evicting the least recently used entry when full.
    /// Returns the evicted key, if any.
    pub fn insert(&mut self, key: PaletteKey, palette: Palette) -> Option<PaletteKey> {
        if self.capacity == 0 {
            return None;
        }
        if self.entries.insert(key, palette).is_some() {
            self.touch(&key);
            return None;
        }
        self.recency.push_back(key);
        if self.entries.len() <= self.capacity {
            return None;
        }
        let evicted = self.recency.pop_front()?;
        self.entries.remove(&evicted);
        Some(evicted)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    fn touch(&mut self, key: &PaletteKey) {
        if let Some(pos) = self.recency.iter().position(|k| k == key)
            && let Some(key) = self.recency.remove(pos)
        {
            self.recency.push_back(key);
        }
    }
}
