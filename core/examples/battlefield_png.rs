use battlefield_core::{Canvas, Drawable, TerrainConfig, TerrainError, TerrainSprite};
use image::Rgb;
use tracing_subscriber::EnvFilter;

// Render one battlefield to battlefield.png.
// Pass a JSON config path as the first argument to override the defaults.
fn main() -> Result<(), TerrainError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| TerrainError::InvalidConfig(format!("{}: {}", path, e)))?;
            TerrainConfig::from_json_str(&text)?
        }
        None => TerrainConfig {
            seed: Some(2025),
            ..Default::default()
        },
    };

    let mut rng = cfg.rng();
    let mut profile = cfg.ridge_terrain()?.generate_ridges(&mut rng)?;
    tracing::info!(
        columns = profile.len(),
        peak = profile.max_height(),
        mountain = profile.mountain_index(),
        "battlefield generated"
    );

    // knock a crater into the tallest ridge to show deformation
    let peak_x = profile.mountain_index() as f32;
    let removed = profile.carve_crater(peak_x, 25);
    tracing::info!(removed, "crater carved at the peak");

    let r = &cfg.ridge;
    let mut canvas = Canvas::new(r.width as u32, r.height, Rgb([80, 134, 193]));
    TerrainSprite::new(&profile).draw(&mut canvas);
    canvas.save("battlefield.png")?;
    tracing::info!("saved battlefield.png");

    // the short column profile, scaled up so each column is a wide bar
    let columns = cfg.column_terrain()?.generate_profile(&mut rng)?;
    let mut canvas = Canvas::new(columns.len() as u32 * 40, 240, Rgb([80, 134, 193]));
    TerrainSprite::new(&columns)
        .with_column_width(40)
        .with_scale(4.0)
        .draw(&mut canvas);
    canvas.save("columns.png")?;
    tracing::info!(heights = ?columns.heights(), "saved columns.png");

    Ok(())
}
