use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::error::{Result, TerrainError};
use crate::profile::HeightProfile;
use crate::TerrainGenerator;

pub const DEFAULT_MAP_WIDTH: usize = 1280;
pub const DEFAULT_MAP_HEIGHT: u32 = 720;
pub const DEFAULT_SEA_LEVEL: u32 = 200;
pub const DEFAULT_MOUNTAINS: usize = 3;
pub const DEFAULT_VALLEYS: usize = 2;

// Full-resolution battlefield: one height per pixel column.
// The map is split into `mountains + valleys` equal segments; each one
// receives a parabolic bump (mountain) or dip (valley) whose ends are
// jittered into the neighbouring segments so the ridges overlap.
#[derive(Debug, Clone)]
pub struct RidgeTerrain {
    width: usize,
    height: u32,
    sea_level: u32,
    mountains: usize,
    valleys: usize,
}

impl Default for RidgeTerrain {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            sea_level: DEFAULT_SEA_LEVEL,
            mountains: DEFAULT_MOUNTAINS,
            valleys: DEFAULT_VALLEYS,
        }
    }
}

impl RidgeTerrain {
    pub fn new(
        width: usize,
        height: u32,
        sea_level: u32,
        mountains: usize,
        valleys: usize,
    ) -> Result<Self> {
        let deformations = mountains.checked_add(valleys).ok_or_else(|| {
            TerrainError::InvalidConfig(format!(
                "{} mountains plus {} valleys overflows",
                mountains, valleys
            ))
        })?;
        if deformations == 0 {
            return Err(TerrainError::InvalidConfig(
                "at least one mountain or valley is required".into(),
            ));
        }
        if width == 0 || width < deformations {
            return Err(TerrainError::InvalidLength {
                length: width,
                min: deformations.max(1),
            });
        }
        if sea_level >= height {
            return Err(TerrainError::InvalidConfig(format!(
                "sea level {} must be below map height {}",
                sea_level, height
            )));
        }
        Ok(Self {
            width,
            height,
            sea_level,
            mountains,
            valleys,
        })
    }

    pub fn sea_level(&self) -> u32 {
        self.sea_level
    }

    pub fn map_height(&self) -> u32 {
        self.height
    }

    pub fn generate_ridges(&self, rng: &mut dyn RngCore) -> Result<HeightProfile> {
        let w = self.width as i64;
        let deformations = self.mountains + self.valleys;
        let segment = w / deformations as i64;

        // pick which segments dip instead of rise
        let mut order: Vec<usize> = (0..deformations).collect();
        order.shuffle(rng);
        let valleys = &order[..self.valleys];

        let mut ground = vec![self.sea_level as i64; self.width];
        let quarter = self.height as i64 / 4;
        let max_peak = (self.height - self.sea_level) as i64 / 2;

        let mut seg_start = 0;
        let mut seg_end = segment;
        for i in 0..deformations {
            let start = seg_start + rng.gen_range((-segment).div_euclid(4) * 3..=segment / 3);
            let end = seg_end + rng.gen_range((-segment).div_euclid(3)..=3 * (segment / 4));
            let start = start.max(0);
            let end = end.min(w - 1);

            if valleys.contains(&i) {
                let depth = rng.gen_range(quarter / 4..=quarter / 2);
                bend(&mut ground, start, end, -depth);
            } else {
                let peak = rng.gen_range(max_peak / 4..=max_peak);
                bend(&mut ground, start, end, peak);
            }

            seg_start += segment;
            seg_end += segment;
        }

        let heights: Vec<u32> = ground
            .iter()
            .map(|&h| h.clamp(0, u32::MAX as i64) as u32)
            .collect();
        let mountain = tallest(&heights);

        tracing::debug!(
            width = self.width,
            mountains = self.mountains,
            valleys = self.valleys,
            mountain,
            "generated ridge profile"
        );
        HeightProfile::new(heights, mountain)
    }
}

impl TerrainGenerator for RidgeTerrain {
    fn width(&self) -> usize {
        self.width
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<HeightProfile> {
        self.generate_ridges(rng)
    }
}

// Symmetric parabola over [start, end): rises from `start` to the
// midpoint and falls back towards `end`. Negative `amount` digs a valley.
fn bend(ground: &mut [i64], start: i64, end: i64, amount: i64) {
    let mid = (start + end).div_euclid(2);
    let span = (mid - start - 1).pow(2);
    if span == 0 {
        return;
    }
    let scale = amount as f64 / span as f64;

    for k in start..mid {
        ground[k as usize] += ((k - start).pow(2) as f64 * scale) as i64;
    }
    for k in mid..end {
        ground[k as usize] += ((end - k).pow(2) as f64 * scale) as i64;
    }
}

// First column holding the maximum height
fn tallest(heights: &[u32]) -> usize {
    let mut best = 0;
    for (i, &h) in heights.iter().enumerate() {
        if h > heights[best] {
            best = i;
        }
    }
    best
}
