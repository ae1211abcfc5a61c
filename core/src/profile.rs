use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrainError};

// Per-column terrain heights for a side-view battlefield
// heights[x] is the ground height (in rows, measured up from the bottom)
// of column x. Exactly one column is the mountain column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProfileParts")]
pub struct HeightProfile {
    heights: Vec<u32>,
    mountain_index: usize,
}

// Unchecked wire form, validated through `HeightProfile::new`
#[derive(Deserialize)]
struct ProfileParts {
    heights: Vec<u32>,
    mountain_index: usize,
}

impl TryFrom<ProfileParts> for HeightProfile {
    type Error = TerrainError;

    fn try_from(parts: ProfileParts) -> Result<Self> {
        Self::new(parts.heights, parts.mountain_index)
    }
}

impl HeightProfile {
    // `mountain_index` must point inside a non-empty `heights`
    pub fn new(heights: Vec<u32>, mountain_index: usize) -> Result<Self> {
        if mountain_index >= heights.len() {
            return Err(TerrainError::InvalidLength {
                length: heights.len(),
                min: mountain_index.saturating_add(1),
            });
        }
        Ok(Self {
            heights,
            mountain_index,
        })
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    pub fn height_at(&self, x: usize) -> Option<u32> {
        self.heights.get(x).copied()
    }

    pub fn mountain_index(&self) -> usize {
        self.mountain_index
    }

    pub fn max_height(&self) -> u32 {
        self.heights.iter().copied().max().unwrap_or(0)
    }

    // Heights mapped into [0.0, 1.0] (flat terrain maps to 0.0)
    pub fn normalized(&self) -> Vec<f32> {
        let min = self.heights.iter().copied().min().unwrap_or(0) as f32;
        let max = self.max_height() as f32;
        let range = (max - min).max(0.001); // prevent zero-division
        self.heights
            .iter()
            .map(|&h| ((h as f32 - min) / range).clamp(0.0, 1.0))
            .collect()
    }

    // Screen-space hit test: y grows downward from the top of a surface
    // `surface_height` rows tall, so the ground of column x starts at
    // row `surface_height - heights[x]`.
    pub fn collides_with(&self, x: f32, y: f32, surface_height: u32) -> bool {
        if !x.is_finite() || x < 0.0 {
            return false;
        }
        match self.height_at(x as usize) {
            Some(h) => y > surface_height as f32 - h as f32,
            None => false,
        }
    }

    // Remove a circular bite of `radius` centred on column `center_x`.
    // Returns the total height removed across all columns.
    pub fn carve_crater(&mut self, center_x: f32, radius: u32) -> u64 {
        let r = radius as f32;
        let first = (center_x - r).floor() as i64;
        let last = (center_x + r).floor() as i64;
        let mut removed = 0u64;

        for i in first.max(0)..last {
            let Some(h) = self.heights.get_mut(i as usize) else {
                break;
            };
            let dx = center_x - i as f32;
            let depth = (r * r - dx * dx).max(0.0).sqrt() as u32;
            let cut = depth.min(*h);
            *h -= cut;
            removed += cut as u64;
        }

        if removed > 0 {
            tracing::debug!(center_x, radius, removed, "carved crater");
        }
        removed
    }
}
