use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::columns::{self, ColumnTerrain};
use crate::error::Result;
use crate::ridge::{self, RidgeTerrain};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub width: usize,
    pub peak_base: u32,
    pub mid: u32,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            width: columns::DEFAULT_WIDTH,
            peak_base: columns::DEFAULT_PEAK_BASE,
            mid: columns::DEFAULT_MID,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RidgeConfig {
    // map size in pixels
    pub width: usize,
    pub height: u32,
    pub sea_level: u32,
    pub mountains: usize,
    pub valleys: usize,
}

impl Default for RidgeConfig {
    fn default() -> Self {
        Self {
            width: ridge::DEFAULT_MAP_WIDTH,
            height: ridge::DEFAULT_MAP_HEIGHT,
            sea_level: ridge::DEFAULT_SEA_LEVEL,
            mountains: ridge::DEFAULT_MOUNTAINS,
            valleys: ridge::DEFAULT_VALLEYS,
        }
    }
}

// Everything needed to rebuild a battlefield.
// A missing seed means every round gets fresh terrain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub seed: Option<u64>,
    pub columns: ColumnConfig,
    pub ridge: RidgeConfig,
}

impl TerrainConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn column_terrain(&self) -> Result<ColumnTerrain> {
        let c = &self.columns;
        ColumnTerrain::new(c.width, c.peak_base, c.mid)
    }

    pub fn ridge_terrain(&self) -> Result<RidgeTerrain> {
        let r = &self.ridge;
        RidgeTerrain::new(r.width, r.height, r.sea_level, r.mountains, r.valleys)
    }
}
