//! Distinct-color sampling across the hue wheel.
//!
//! A sweep walks hues `0, step, 2 * step, ...` below 360 at a fixed saturation and
//! lightness, names each one through a [`ColorLookup`], and keeps the first record
//! seen for every name. It stops early once `max_consecutive_repeats` lookups in a
//! row only produced names it already had.
//!
//! Lookups are strictly sequential: the next hue is not requested until the
//! previous answer has been processed.

use std::collections::HashSet;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::SampleError;
use crate::lookup::{ColorLookup, HslQuery};
use crate::record::ColorRecord;

/// Hues are sampled in `[0, FULL_TURN)`.
pub const FULL_TURN: u16 = 360;

/// What to do when a single hue lookup fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the whole sweep and return the error. Nothing collected so far is kept.
    #[default]
    Abort,
    /// Log the failure, leave the duplicate streak untouched and move to the next hue.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    /// Hue increment in degrees. Must be non-zero.
    pub step: u16,
    /// Length of the duplicate streak that ends the sweep. Must be non-zero.
    pub max_consecutive_repeats: u32,
    pub on_failure: FailurePolicy,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            step: 5,
            max_consecutive_repeats: 10,
            on_failure: FailurePolicy::Abort,
        }
    }
}

impl SampleOptions {
    fn validate(&self) -> Result<(), SampleError> {
        if self.step == 0 {
            return Err(SampleError::InvalidOptions("step must be positive"));
        }
        if self.max_consecutive_repeats == 0 {
            return Err(SampleError::InvalidOptions(
                "max_consecutive_repeats must be positive",
            ));
        }
        Ok(())
    }
}

/// The hues visited by a sweep with the given `step`, ascending.
///
/// Yields `ceil(360 / step)` values, all in `[0, 360)`.
///
/// # Panics
///
/// Panics if `step` is zero.
pub fn hue_sweep(step: u16) -> impl Iterator<Item = u16> {
    (0..FULL_TURN).step_by(usize::from(step))
}

/// Outcome of offering a record to a [`SampleRun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    Accepted,
    Duplicate,
}

/// Working state of a single sweep.
#[derive(Debug, Default)]
pub struct SampleRun {
    seen_names: HashSet<String>,
    result: Vec<ColorRecord>,
    consecutive_duplicates: u32,
}

impl SampleRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `record` if its name has not been seen in this run.
    pub fn offer(&mut self, record: ColorRecord) -> Offer {
        if self.seen_names.contains(record.name()) {
            self.consecutive_duplicates += 1;
            return Offer::Duplicate;
        }
        self.seen_names.insert(record.name().to_string());
        self.result.push(record);
        self.consecutive_duplicates = 0;
        Offer::Accepted
    }

    /// Whether the current duplicate streak has reached `threshold`.
    pub fn exhausted(&self, threshold: u32) -> bool {
        self.consecutive_duplicates >= threshold
    }

    pub fn consecutive_duplicates(&self) -> u32 {
        self.consecutive_duplicates
    }

    pub fn colors(&self) -> &[ColorRecord] {
        &self.result
    }

    pub fn into_colors(self) -> Vec<ColorRecord> {
        self.result
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every hue of the sweep was visited.
    SweepComplete,
    /// The duplicate streak reached the threshold.
    RepeatsExhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleOutcome {
    /// Distinct colors in ascending hue of first occurrence.
    pub colors: Vec<ColorRecord>,
    /// Number of lookups issued, including failed ones.
    pub hues_queried: usize,
    /// Hues whose lookup failed under [`FailurePolicy::Skip`].
    pub skipped_hues: Vec<u16>,
    pub stop: StopReason,
}

/// Samples distinct named colors through a [`ColorLookup`].
#[derive(Debug, Clone)]
pub struct Sampler<L> {
    lookup: L,
    options: SampleOptions,
}

impl<L: ColorLookup> Sampler<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_options(lookup, SampleOptions::default())
    }

    pub fn with_options(lookup: L, options: SampleOptions) -> Self {
        Self { lookup, options }
    }

    pub fn options(&self) -> &SampleOptions {
        &self.options
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Returns the distinct colors at `saturation`/`lightness`, ordered by hue.
    pub async fn sample(
        &self,
        saturation: f64,
        lightness: f64,
    ) -> Result<Vec<ColorRecord>, SampleError> {
        Ok(self.run(saturation, lightness).await?.colors)
    }

    /// Like [`Sampler::sample`], but also reports how the sweep went.
    pub async fn run(
        &self,
        saturation: f64,
        lightness: f64,
    ) -> Result<SampleOutcome, SampleError> {
        self.options.validate()?;
        let SampleOptions {
            step,
            max_consecutive_repeats,
            on_failure,
        } = self.options;
        debug!(
            "sampling s={saturation}% l={lightness}% step={step} max_repeats={}",
            max_consecutive_repeats
        );

        let mut run = SampleRun::new();
        let mut hues_queried = 0;
        let mut skipped_hues = Vec::new();
        let mut stop = StopReason::SweepComplete;

        for hue in hue_sweep(step) {
            hues_queried += 1;
            let query = HslQuery::new(hue, saturation, lightness);
            let record = match self.lookup.lookup(query).await {
                Ok(record) => record,
                Err(source) => match on_failure {
                    FailurePolicy::Abort => return Err(SampleError::Lookup { hue, source }),
                    FailurePolicy::Skip => {
                        warn!("skipping hue {hue}: {source}");
                        skipped_hues.push(hue);
                        continue;
                    }
                },
            };

            if run.offer(record) == Offer::Duplicate {
                debug!(
                    "hue {hue}: duplicate ({} in a row)",
                    run.consecutive_duplicates()
                );
            }

            if run.exhausted(max_consecutive_repeats) {
                stop = StopReason::RepeatsExhausted;
                break;
            }
        }

        let colors = run.into_colors();
        info!(
            "s={saturation}% l={lightness}%: {} distinct colors from {} lookups ({stop:?})",
            colors.len(),
            hues_queried
        );
        Ok(SampleOutcome {
            colors,
            hues_queried,
            skipped_hues,
            stop,
        })
    }
}
