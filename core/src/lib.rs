// battlefield_core holds terrain generation for the side-view tank battlefield
pub mod columns;
pub mod config;
pub mod error;
pub mod profile;
pub mod render;
pub mod ridge;

pub use columns::{ColumnTerrain, MountainDraw};
pub use config::TerrainConfig;
pub use error::{Result, TerrainError};
pub use profile::HeightProfile;
pub use render::{Canvas, Drawable, TerrainSprite};
pub use ridge::RidgeTerrain;

use rand::RngCore;

// terrain generator that turns a random source into a height profile
// The random source is always supplied by the caller so seeded runs
// reproduce the same battlefield.
pub trait TerrainGenerator {
    // Number of columns every generated profile will have.
    fn width(&self) -> usize;

    // Build a fresh profile, consuming entropy from `rng`.
    fn generate(&self, rng: &mut dyn RngCore) -> Result<HeightProfile>;
}
