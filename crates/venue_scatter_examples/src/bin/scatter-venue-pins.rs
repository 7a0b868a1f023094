use tracing::info;
use venue_scatter::prelude::*;
use venue_scatter_examples::{init_tracing, render_point_layers_to_png, PointStyle, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let registry = VenueRegistry::world_cup_2026();
    // Fallback anchor for venue names the registry does not know.
    let fallback = GeoPoint::new(34.0522, -118.2437);
    let anchor = registry.anchor_or("MetLife Stadium", fallback);

    // Demo fan-post photos, carried through as opaque payload references.
    let payloads: Vec<String> = (0..8)
        .map(|i| format!("https://cdn.example/fanposts/metlife-{i}.jpg"))
        .collect();

    let config = ScatterConfig::default();
    let mut cache = VenueScatterCache::new();
    let batch = cache
        .get_or_scatter("MetLife Stadium", anchor, 40, &config, &payloads)?
        .to_vec();
    info!(points = batch.len(), "scattered venue pins");

    // A repeated request serves the identical cached layout.
    let again = cache.get_or_scatter("MetLife Stadium", anchor, 40, &config, &payloads)?;
    assert_eq!(again, batch.as_slice());

    let pins: Vec<GeoPoint> = batch.iter().map(|p| p.position).collect();

    let rc = RenderConfig::new((1000, 1000), anchor, 0.02);
    let out = "scatter-venue-pins.png";
    render_point_layers_to_png(
        &[
            (
                pins,
                PointStyle::Circle {
                    color: [235, 235, 235],
                    radius: 3,
                },
            ),
            (
                vec![anchor],
                PointStyle::Circle {
                    color: [255, 96, 64],
                    radius: 6,
                },
            ),
        ],
        &rc,
        out,
    )?;
    info!(out, "rendered venue pins");

    Ok(())
}
