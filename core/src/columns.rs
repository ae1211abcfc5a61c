use rand::{Rng, RngCore};

use crate::error::{Result, TerrainError};
use crate::profile::HeightProfile;
use crate::TerrainGenerator;

// Upper bound (inclusive) of the plain column sample
const UNIFORM_MAX: u32 = 10;
// Lift applied to the mountain range relative to `mid`
const PEAK_OFFSET: u32 = 10;

pub const DEFAULT_WIDTH: usize = 11;
pub const DEFAULT_PEAK_BASE: u32 = 40;
pub const DEFAULT_MID: u32 = 20;
// Two distinct mountain candidates need at least two columns
pub const MIN_WIDTH: usize = 2;

// Outcome of the mountain-index draw.
// `discarded` is the second candidate, redrawn until it differs from
// `primary`. It does not shape the terrain, but it is part of the
// entropy sequence, so seeded profiles depend on it being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountainDraw {
    pub primary: usize,
    pub discarded: usize,
    // how many times the second candidate was rejected
    pub redraws: usize,
}

impl MountainDraw {
    // Rejection sampling over an arbitrary index source
    pub fn from_draws(mut draw: impl FnMut() -> usize) -> Self {
        let primary = draw();
        let mut discarded = draw();
        let mut redraws = 0;
        while discarded == primary {
            discarded = draw();
            redraws += 1;
        }
        if redraws > 0 {
            tracing::trace!(primary, redraws, "rejected duplicate mountain candidates");
        }
        Self {
            primary,
            discarded,
            redraws,
        }
    }
}

// Short column profile with one elevated "mountain" column.
// Plain columns land in [mid, mid + 10]; the mountain column lands in
// [mid + 10, (peak_base - 10) + (mid + 10)], so it never sits below
// its neighbours.
#[derive(Debug, Clone)]
pub struct ColumnTerrain {
    width: usize,
    peak_base: u32,
    mid: u32,
}

impl Default for ColumnTerrain {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            peak_base: DEFAULT_PEAK_BASE,
            mid: DEFAULT_MID,
        }
    }
}

impl ColumnTerrain {
    pub fn new(width: usize, peak_base: u32, mid: u32) -> Result<Self> {
        if width < MIN_WIDTH {
            return Err(TerrainError::InvalidLength {
                length: width,
                min: MIN_WIDTH,
            });
        }
        // reject parameterizations the mountain sampler cannot serve
        mountain_bounds(peak_base, mid)?;
        Ok(Self {
            width,
            peak_base,
            mid,
        })
    }

    pub fn peak_base(&self) -> u32 {
        self.peak_base
    }

    pub fn mid(&self) -> u32 {
        self.mid
    }

    // Uniform value in [0, 10]
    pub fn uniform_sample(rng: &mut dyn RngCore) -> u32 {
        rng.gen_range(0..=UNIFORM_MAX)
    }

    // Uniform value in [mid + 10, (peak_base - 10) + (mid + 10)]
    pub fn mountain_sample(rng: &mut dyn RngCore, peak_base: u32, mid: u32) -> Result<u32> {
        let (low, high) = mountain_bounds(peak_base, mid)?;
        Ok(rng.gen_range(low..=high))
    }

    pub fn draw_mountain_indices(&self, rng: &mut dyn RngCore) -> MountainDraw {
        MountainDraw::from_draws(|| rng.gen_range(0..self.width))
    }

    pub fn generate_profile(&self, rng: &mut dyn RngCore) -> Result<HeightProfile> {
        let draw = self.draw_mountain_indices(rng);

        let mut heights = Vec::with_capacity(self.width);
        for i in 0..self.width {
            let h = if i == draw.primary {
                Self::mountain_sample(rng, self.peak_base, self.mid)?
            } else {
                self.mid + Self::uniform_sample(rng)
            };
            heights.push(h);
        }

        tracing::debug!(
            width = self.width,
            mountain = draw.primary,
            discarded = draw.discarded,
            "generated column profile"
        );
        HeightProfile::new(heights, draw.primary)
    }
}

impl TerrainGenerator for ColumnTerrain {
    fn width(&self) -> usize {
        self.width
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<HeightProfile> {
        self.generate_profile(rng)
    }
}

fn mountain_bounds(peak_base: u32, mid: u32) -> Result<(u32, u32)> {
    let inverted = || TerrainError::InvalidRange {
        low: mid as i64 + PEAK_OFFSET as i64,
        high: peak_base as i64 - PEAK_OFFSET as i64 + mid as i64 + PEAK_OFFSET as i64,
    };
    let low = mid.checked_add(PEAK_OFFSET).ok_or_else(inverted)?;
    let span = peak_base.checked_sub(PEAK_OFFSET).ok_or_else(inverted)?;
    let high = span.checked_add(low).ok_or_else(inverted)?;
    Ok((low, high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn uniform_sample_covers_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 11];
        for _ in 0..10_000 {
            let v = ColumnTerrain::uniform_sample(&mut rng);
            assert!(v <= 10, "value {} out of range", v);
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn mountain_sample_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..2_000 {
            let v = ColumnTerrain::mountain_sample(&mut rng, 40, 20).unwrap();
            assert!((30..=60).contains(&v), "value {} out of range", v);
        }
        // peak_base == 10 collapses the range to a single value
        assert_eq!(ColumnTerrain::mountain_sample(&mut rng, 10, 5).unwrap(), 15);
    }

    #[test]
    fn mountain_sample_rejects_inverted_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = ColumnTerrain::mountain_sample(&mut rng, 9, 20).unwrap_err();
        assert!(matches!(err, TerrainError::InvalidRange { low: 30, high: 29 }));
        assert!(ColumnTerrain::mountain_sample(&mut rng, 20, u32::MAX).is_err());
    }

    #[test]
    fn rejection_skips_repeated_candidates() {
        let mut seq = [3usize, 3, 3, 7, 1].into_iter();
        let draw = MountainDraw::from_draws(|| seq.next().unwrap());
        assert_eq!(draw.primary, 3);
        assert_eq!(draw.discarded, 7);
        assert_eq!(draw.redraws, 2);
        // the accepted value is the last one consumed
        assert_eq!(seq.next(), Some(1));
    }

    #[test]
    fn new_validates_width_and_range() {
        assert!(matches!(
            ColumnTerrain::new(0, 40, 20),
            Err(TerrainError::InvalidLength { length: 0, min: 2 })
        ));
        assert!(ColumnTerrain::new(1, 40, 20).is_err());
        assert!(matches!(
            ColumnTerrain::new(11, 5, 20),
            Err(TerrainError::InvalidRange { .. })
        ));
        let narrow = ColumnTerrain::new(2, 10, 0).unwrap();
        assert_eq!((narrow.peak_base(), narrow.mid()), (10, 0));
    }

    #[test]
    fn profile_has_width_and_a_distinct_mountain() {
        let terrain = ColumnTerrain::default();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = terrain.generate_profile(&mut rng).unwrap();
            assert_eq!(p.len(), DEFAULT_WIDTH);

            let m = p.mountain_index();
            let peak = p.heights()[m];
            assert!((30..=60).contains(&peak), "peak {} out of range", peak);
            for (i, &h) in p.heights().iter().enumerate() {
                if i != m {
                    assert!((20..=30).contains(&h), "column {} = {}", i, h);
                    assert!(h <= peak);
                }
            }
        }
    }

    #[test]
    fn mountain_candidates_never_match() {
        let terrain = ColumnTerrain::new(2, 40, 20).unwrap();
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let draw = terrain.draw_mountain_indices(&mut rng);
            assert_ne!(draw.primary, draw.discarded);
            assert!(draw.primary < 2 && draw.discarded < 2);
            assert!(draw.redraws < 64);
        }
    }

    #[test]
    fn seeded_profiles_are_reproducible() {
        let terrain = ColumnTerrain::default();
        let a = terrain.generate_profile(&mut StdRng::seed_from_u64(42)).unwrap();
        let b = terrain.generate_profile(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}
