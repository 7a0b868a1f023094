use tracing::info;
use venue_scatter::prelude::*;
use venue_scatter_examples::{init_tracing, render_point_layers_to_png, PointStyle, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Emirates Stadium, north London.
    let anchor = GeoPoint::new(51.5550, -0.1084);
    let batch = scatter_points::<String>(anchor, 200, &ScatterConfig::default(), &[])?;

    // Sweep the zoom window: zoomed out taps match a wide area, zoomed in a tight one.
    let map = ZoomRadiusMap::default();
    for zoom in 8..=20 {
        let circle = QueryCircle::from_click(anchor, zoom, &map)?;
        let hits = points_within_radius(anchor, circle.radius_deg, &batch)?;
        info!(
            zoom,
            radius_deg = circle.radius_deg,
            hits = hits.len(),
            "click at anchor"
        );
    }

    let zoom = 15;
    let hits = points_within_radius(anchor, map.radius_for_zoom(zoom), &batch)?;

    let all: Vec<GeoPoint> = batch.iter().map(|p| p.position).collect();
    let matched: Vec<GeoPoint> = hits.iter().map(|p| p.position).collect();

    let rc = RenderConfig::new((1000, 1000), anchor, 0.02);
    let out = "query-click-zoom.png";
    render_point_layers_to_png(
        &[
            (
                all,
                PointStyle::Circle {
                    color: [90, 90, 90],
                    radius: 2,
                },
            ),
            (
                matched,
                PointStyle::Circle {
                    color: [120, 220, 120],
                    radius: 3,
                },
            ),
            (
                vec![anchor],
                PointStyle::Circle {
                    color: [255, 96, 64],
                    radius: 5,
                },
            ),
        ],
        &rc,
        out,
    )?;
    info!(out, zoom, hits = hits.len(), "rendered click query");

    Ok(())
}
