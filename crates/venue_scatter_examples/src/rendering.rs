//! Shared helpers for the example binaries: tracing setup and PNG rendering.
use glam::DVec2;
use image::{Rgb, RgbImage};
use venue_scatter::prelude::{GeoPoint, HeatSample};

/// Installs a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// How a layer of points is drawn.
#[derive(Debug, Clone, Copy)]
pub enum PointStyle {
    /// Filled disc with the given color and pixel radius.
    Circle {
        /// RGB fill color.
        color: [u8; 3],
        /// Disc radius in pixels.
        radius: i32,
    },
}

/// Viewport and styling for rendering coordinates to an image.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image size in pixels.
    pub image_size: (u32, u32),
    /// Coordinate at the image center.
    pub center: GeoPoint,
    /// Degrees of longitude spanned by the image width.
    pub span_deg: f64,
    /// Background color.
    pub background: [u8; 3],
}

impl RenderConfig {
    /// Creates a render config centered on `center` spanning `span_deg` degrees.
    pub fn new(image_size: (u32, u32), center: GeoPoint, span_deg: f64) -> Self {
        Self {
            image_size,
            center,
            span_deg,
            background: [26, 26, 26],
        }
    }

    /// Sets the background color (builder-style).
    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    fn project(&self, p: GeoPoint) -> DVec2 {
        let (w, h) = self.image_size;
        let u = (p.lng - self.center.lng) / self.span_deg + 0.5;
        let v = 0.5 - (p.lat - self.center.lat) / self.span_deg;
        DVec2::new(u * w as f64, v * h as f64)
    }
}

/// Renders layers of points to a PNG, drawing layers in order so later layers
/// paint over earlier ones.
pub fn render_point_layers_to_png(
    layers: &[(Vec<GeoPoint>, PointStyle)],
    config: &RenderConfig,
    path: &str,
) -> anyhow::Result<()> {
    let mut img = background_image(config);

    for (points, style) in layers {
        let PointStyle::Circle { color, radius } = *style;
        for p in points {
            let px = config.project(*p);
            draw_disc(&mut img, px, radius, color);
        }
    }

    img.save(path)?;
    Ok(())
}

/// Renders normalized heat samples to a PNG using a blue-to-red intensity ramp.
pub fn render_heat_to_png(
    samples: &[HeatSample],
    dot_radius: i32,
    config: &RenderConfig,
    path: &str,
) -> anyhow::Result<()> {
    let mut img = background_image(config);

    for s in samples {
        let px = config.project(s.position);
        draw_disc(&mut img, px, dot_radius, heat_color(s.intensity));
    }

    img.save(path)?;
    Ok(())
}

fn background_image(config: &RenderConfig) -> RgbImage {
    let (w, h) = config.image_size;
    RgbImage::from_pixel(w, h, Rgb(config.background))
}

fn draw_disc(img: &mut RgbImage, center: DVec2, radius: i32, color: [u8; 3]) {
    let (w, h) = img.dimensions();
    let cx = center.x.round() as i64;
    let cy = center.y.round() as i64;
    let r = radius.max(0) as i64;

    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
                img.put_pixel(x as u32, y as u32, Rgb(color));
            }
        }
    }
}

fn heat_color(intensity: f64) -> [u8; 3] {
    let t = intensity.clamp(0.0, 1.0);
    // Blue through lime to red, the conventional heat-layer ramp.
    if t < 0.5 {
        let s = t * 2.0;
        [0, (s * 255.0) as u8, ((1.0 - s) * 255.0) as u8]
    } else {
        let s = (t - 0.5) * 2.0;
        [(s * 255.0) as u8, ((1.0 - s) * 255.0) as u8, 0]
    }
}
