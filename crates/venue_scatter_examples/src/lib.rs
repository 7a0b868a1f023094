#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    init_tracing, render_heat_to_png, render_point_layers_to_png, PointStyle, RenderConfig,
};
