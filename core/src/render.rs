use std::path::Path;

use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

use crate::error::Result;
use crate::profile::HeightProfile;

// Drawing surface handed explicitly to whatever needs to paint.
// Row 0 is the top of the screen.
pub struct Canvas {
    image: RgbImage,
    background: Rgb<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn background(&self) -> Rgb<u8> {
        self.background
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        if x < self.width() && y < self.height() {
            Some(*self.image.get_pixel(x, y))
        } else {
            None
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    // Fill a rectangle, clipped to the canvas
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
        let x_end = x.saturating_add(w).min(self.width());
        let y_end = y.saturating_add(h).min(self.height());
        for py in y..y_end {
            for px in x..x_end {
                self.image.put_pixel(px, py, color);
            }
        }
    }

    pub fn clear(&mut self) {
        let bg = self.background;
        for p in self.image.pixels_mut() {
            *p = bg;
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }
}

// Anything that can paint itself onto a canvas and remove itself again
pub trait Drawable {
    fn draw(&self, canvas: &mut Canvas);
    fn erase(&self, canvas: &mut Canvas);
}

// Draws a height profile as filled vertical bars standing on the
// bottom edge of the canvas
pub struct TerrainSprite<'a> {
    profile: &'a HeightProfile,
    column_width: u32,
    scale: f32,
    gradient: Gradient<LinSrgb>,
}

impl<'a> TerrainSprite<'a> {
    pub fn new(profile: &'a HeightProfile) -> Self {
        // dirt to grass to rock to snow
        let gradient = Gradient::with_domain(vec![
            (0.00, LinSrgb::new(0.35, 0.22, 0.10)),
            (0.35, LinSrgb::new(0.10, 0.45, 0.15)),
            (0.75, LinSrgb::new(0.45, 0.42, 0.40)),
            (1.00, LinSrgb::new(1.0, 1.0, 1.0)),
        ]);
        Self {
            profile,
            column_width: 1,
            scale: 1.0,
            gradient,
        }
    }

    pub fn with_column_width(mut self, column_width: u32) -> Self {
        self.column_width = column_width.max(1);
        self
    }

    // vertical pixels per unit of height
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale.max(0.0);
        self
    }

    // (x, top row, bar height) for every non-empty column
    fn bars(&self, canvas_height: u32) -> Vec<(u32, u32, u32)> {
        self.profile
            .heights()
            .iter()
            .enumerate()
            .filter_map(|(i, &h)| {
                let bar = ((h as f32 * self.scale).round() as u32).min(canvas_height);
                if bar == 0 {
                    return None;
                }
                Some((i as u32 * self.column_width, canvas_height - bar, bar))
            })
            .collect()
    }
}

impl Drawable for TerrainSprite<'_> {
    fn draw(&self, canvas: &mut Canvas) {
        let shades = self.profile.normalized();
        for (x, top, bar) in self.bars(canvas.height()) {
            let t = shades[(x / self.column_width) as usize];
            let col: LinSrgb = self.gradient.get(t);
            let rgb = col.into_format::<u8>();
            canvas.fill_rect(
                x,
                top,
                self.column_width,
                bar,
                Rgb([rgb.red, rgb.green, rgb.blue]),
            );
        }
    }

    fn erase(&self, canvas: &mut Canvas) {
        let bg = canvas.background();
        for (x, top, bar) in self.bars(canvas.height()) {
            canvas.fill_rect(x, top, self.column_width, bar, bg);
        }
    }
}
