use thiserror::Error;

pub type Result<T> = std::result::Result<T, TerrainError>;

#[derive(Error, Debug)]
pub enum TerrainError {
    #[error("profile length {length} is too small (minimum {min})")]
    InvalidLength { length: usize, min: usize },

    #[error("sampling range is inverted or overflows: [{low}, {high}]")]
    InvalidRange { low: i64, high: i64 },

    #[error("invalid terrain configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse terrain configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to write canvas: {0}")]
    Image(#[from] image::ImageError),
}
