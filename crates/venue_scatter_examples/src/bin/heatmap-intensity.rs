use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use venue_scatter::prelude::*;
use venue_scatter_examples::{init_tracing, render_heat_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let registry = VenueRegistry::world_cup_2026();
    let anchor = registry.anchor_or("Hard Rock Stadium", GeoPoint::new(25.7617, -80.1918));

    let config = ScatterConfig::default().with_radius_m(800.0);
    let batch = scatter_points::<String>(anchor, 300, &config, &[])?;

    // Weight each post by a synthetic like count, then normalize for the ramp.
    let mut rng = StdRng::seed_from_u64(2026);
    let heat: Vec<HeatPoint> = batch
        .iter()
        .map(|p| HeatPoint::new(p.position, 1.0 + (rng.next_u32() % 50) as f64))
        .collect();
    let samples = normalize_heat(&heat);
    info!(samples = samples.len(), "normalized heat batch");

    let rc = RenderConfig::new((1000, 1000), anchor, 0.03).with_background([0, 0, 0]);
    let out = "heatmap-intensity.png";
    render_heat_to_png(&samples, 4, &rc, out)?;
    info!(out, "rendered heat layer");

    Ok(())
}
